//! Core domain model for the memocal calendar.
//!
//! This crate holds everything the front end renders from:
//! - `month` and `grid` for month-grid layout math
//! - `memo`, `store` and `codec` for memo records and their flat persisted encoding
//! - `reminder` for one-shot reminder scheduling
//! - `navigation` for the displayed-month / selected-date state machine
//! - `prefs` for the key-value persistence boundary

pub mod codec;
pub mod error;
pub mod grid;
pub mod memo;
pub mod month;
pub mod navigation;
pub mod prefs;
pub mod reminder;
pub mod store;

// Re-export the main types at crate root for convenience
pub use error::{MemocalError, MemocalResult};
pub use grid::MonthGrid;
pub use memo::Memo;
pub use month::YearMonth;
pub use navigation::{NavigationState, SlideDirection};
pub use reminder::{schedule, ReminderDispatch, ReminderTask};
pub use store::MemoStore;

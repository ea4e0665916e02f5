//! Reminder scheduling.
//!
//! `schedule` is a pure computation: from a memo and the current wall
//! clock it decides whether a notification should ever fire, and if so
//! produces the one-shot task the external dispatcher arranges. The
//! asynchronous wait-then-notify part lives behind [`ReminderDispatch`].

use chrono::{Duration, NaiveDateTime};

use crate::memo::Memo;

/// A one-shot deferred notification: fixed payload, absolute fire time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderTask {
    pub content: String,
    pub fire_at: NaiveDateTime,
}

impl ReminderTask {
    /// Exact delay between `now` and the fire time.
    pub fn delay_from(&self, now: NaiveDateTime) -> Duration {
        self.fire_at - now
    }

    /// The delay as whole milliseconds for the dispatch contract.
    pub fn initial_delay_ms(&self, now: NaiveDateTime) -> u64 {
        self.delay_from(now).num_milliseconds().max(0) as u64
    }
}

/// Compute the reminder task for a memo, if one should fire.
///
/// Returns `None` for memos without a reminder time, and for reminder
/// times at or before `now`: stale reminders are silently dropped, never
/// fired immediately and never reported as an error.
pub fn schedule(memo: &Memo, now: NaiveDateTime) -> Option<ReminderTask> {
    let time = memo.time?;
    let fire_at = memo.date.and_time(time);
    if fire_at <= now {
        return None;
    }
    Some(ReminderTask {
        content: memo.content.clone(),
        fire_at,
    })
}

/// Boundary to the external notification facility.
///
/// Fire-and-forget: the facility guarantees single delivery at or after
/// the submitted delay, and offers no acknowledgement channel back. No
/// cancellation is defined; removing a memo does not retract a task that
/// was already submitted.
pub trait ReminderDispatch {
    fn submit(&self, payload: String, initial_delay_ms: u64);
}

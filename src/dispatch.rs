//! Tokio-backed reminder delivery.
//!
//! Each submitted task is a one-shot job: sleep for the initial delay,
//! then surface the payload as a desktop notification. The terminal line
//! is printed regardless so a session without a notification daemon still
//! sees the reminder.

use std::sync::Mutex;
use std::time::Duration;

use memocal_core::ReminderDispatch;
use notify_rust::Notification;
use owo_colors::OwoColorize;
use tokio::task::JoinHandle;

pub struct TokioDispatch {
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl TokioDispatch {
    pub fn new() -> TokioDispatch {
        TokioDispatch {
            handles: Mutex::new(Vec::new()),
        }
    }

    /// Wait until every submitted task has fired.
    pub async fn wait_all(self) {
        let handles = self.handles.into_inner().unwrap_or_default();
        for handle in handles {
            let _ = handle.await;
        }
    }
}

impl ReminderDispatch for TokioDispatch {
    fn submit(&self, payload: String, initial_delay_ms: u64) {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(initial_delay_ms)).await;
            deliver(&payload);
        });
        if let Ok(mut handles) = self.handles.lock() {
            handles.push(handle);
        }
    }
}

fn deliver(payload: &str) {
    println!("\n{} {}", "Reminder:".yellow().bold(), payload);

    if let Err(e) = Notification::new()
        .summary("memocal")
        .body(payload)
        .show()
    {
        log::debug!("desktop notification failed: {}", e);
    }
}

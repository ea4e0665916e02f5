use anyhow::Result;
use chrono::Local;
use memocal_core::reminder;
use owo_colors::OwoColorize;

use crate::dispatch::TokioDispatch;
use memocal_core::ReminderDispatch;

/// Schedule every pending reminder against the current wall clock and
/// wait until all of them have fired.
///
/// The store is snapshotted at startup: memos removed while watching do
/// not retract their already-submitted tasks.
pub async fn run() -> Result<()> {
    let prefs = super::open_prefs()?;
    let store = super::load_store(&prefs);

    let now = Local::now().naive_local();
    let dispatch = TokioDispatch::new();
    let mut scheduled = 0;

    for memo in store.iter() {
        if let Some(task) = reminder::schedule(memo, now) {
            println!(
                "  {} {}",
                task.fire_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
                task.content
            );
            dispatch.submit(task.content.clone(), task.initial_delay_ms(now));
            scheduled += 1;
        }
    }

    if scheduled == 0 {
        println!("No pending reminders.");
        return Ok(());
    }

    println!("\nWaiting for {} reminder(s)... (Ctrl-C to stop)", scheduled);
    dispatch.wait_all().await;
    println!("{}", "All reminders delivered.".green());

    Ok(())
}

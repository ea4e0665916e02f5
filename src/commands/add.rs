use anyhow::Result;
use chrono::Local;
use memocal_core::{reminder, Memo};
use owo_colors::OwoColorize;

pub fn run(date: &str, content: &str, at: Option<&str>, replace: bool) -> Result<()> {
    let date = super::parse_date(date)?;
    let time = at.map(super::parse_time).transpose()?;

    if content.trim().is_empty() {
        anyhow::bail!("Memo content cannot be empty");
    }

    let mut prefs = super::open_prefs()?;
    let mut store = super::load_store(&prefs);

    if replace {
        let removed = store.remove_on(date);
        if removed > 0 {
            println!("Replaced {} existing memo(s) on {}", removed, date);
        }
    }

    let memo = Memo::new(date, time, content);
    store.add(memo.clone())?;
    super::persist(&mut prefs, &store);

    println!("{}", format!("Added memo on {}: {}", date, content).green());

    // Stale reminder times are silently not scheduled
    let now = Local::now().naive_local();
    if let Some(task) = reminder::schedule(&memo, now) {
        let delay = std::time::Duration::from_secs(task.delay_from(now).num_seconds().max(0) as u64);
        println!(
            "Reminder fires in {} (run `memocal watch` to receive it)",
            humantime::format_duration(delay)
        );
    }

    Ok(())
}

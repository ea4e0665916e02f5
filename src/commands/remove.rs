use anyhow::Result;
use memocal_core::Memo;
use owo_colors::OwoColorize;

pub fn run(date: &str, content: Option<String>, at: Option<&str>) -> Result<()> {
    let date = super::parse_date(date)?;
    let time = at.map(super::parse_time).transpose()?;

    let mut prefs = super::open_prefs()?;
    let mut store = super::load_store(&prefs);

    match content {
        // Full-value removal of the first matching memo
        Some(content) => {
            let memo = Memo::new(date, time, content);
            if store.remove(&memo) {
                super::persist(&mut prefs, &store);
                println!("{}", format!("Removed memo on {}", date).green());
            } else {
                println!("No matching memo on {}", date);
            }
        }
        // Clear the whole date
        None => {
            let removed = store.remove_on(date);
            if removed > 0 {
                super::persist(&mut prefs, &store);
                println!("{}", format!("Removed {} memo(s) on {}", removed, date).green());
            } else {
                println!("No memos on {}", date);
            }
        }
    }

    Ok(())
}

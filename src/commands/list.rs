use anyhow::Result;
use memocal_core::{Memo, YearMonth};

use crate::render;

pub fn run(month: Option<&str>, date: Option<&str>, json: bool) -> Result<()> {
    let prefs = super::open_prefs()?;
    let store = super::load_store(&prefs);

    let month: Option<YearMonth> = month.map(|m| m.parse()).transpose()?;
    let date = date.map(super::parse_date).transpose()?;

    let memos: Vec<&Memo> = store
        .iter()
        .filter(|m| month.map_or(true, |ym| ym.contains(m.date)))
        .filter(|m| date.map_or(true, |d| m.date == d))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&memos)?);
        return Ok(());
    }

    if memos.is_empty() {
        println!("No memos.");
        return Ok(());
    }

    for memo in memos {
        println!("{} {}", memo.date, render::memo_line(memo));
    }

    Ok(())
}

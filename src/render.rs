//! Terminal rendering for the month grid and memo lists.
//!
//! Layout is computed on plain strings (padding first), colorization is
//! applied afterwards so ANSI codes never throw the column math off.

use chrono::{Datelike, NaiveDate};
use memocal_core::{Memo, MemoStore, MonthGrid, NavigationState, SlideDirection, YearMonth};
use owo_colors::OwoColorize;

/// Characters of memo content shown in a day cell before truncation.
const PREVIEW_WIDTH: usize = 5;

/// Plain width of one grid cell: 2-digit day, space, caption.
const CAPTION_WIDTH: usize = PREVIEW_WIDTH + 3; // room for the "..." suffix
const CELL_WIDTH: usize = 2 + 1 + CAPTION_WIDTH + 1;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for SlideDirection {
    fn render(&self) -> String {
        match self {
            SlideDirection::Backward => "<".cyan().to_string(),
            SlideDirection::Still => " ".to_string(),
            SlideDirection::Forward => ">".cyan().to_string(),
        }
    }
}

/// Full month view: header, weekday labels, week rows, and the selected
/// date's memos beneath the grid.
pub fn month_view(
    nav: &NavigationState,
    store: &MemoStore,
    today: NaiveDate,
    direction: SlideDirection,
) -> String {
    let grid = MonthGrid::new(nav.current_month());
    let mut lines = Vec::new();

    lines.push(header(nav.current_month(), direction));
    lines.push(weekday_header());
    for week in grid.weeks() {
        lines.push(week_line(&week, store, today, nav.selected_date()));
    }

    if let Some(date) = nav.selected_date() {
        lines.push(String::new());
        lines.push(selected_view(date, store));
    }

    lines.join("\n")
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn header(month: YearMonth, direction: SlideDirection) -> String {
    // Month is constructor-checked to 1-12
    let title = format!("{} {}", MONTH_NAMES[(month.month() - 1) as usize], month.year());
    let width = CELL_WIDTH * 7;
    let centered = format!("{:^width$}", title, width = width - 2);
    format!(
        "{} {}",
        centered.bold(),
        direction.render()
    )
}

fn weekday_header() -> String {
    memocal_core::grid::WEEKDAY_LABELS
        .iter()
        .map(|label| format!("{:<width$}", label, width = CELL_WIDTH))
        .collect::<String>()
        .dimmed()
        .to_string()
}

fn week_line(
    week: &[Option<NaiveDate>; 7],
    store: &MemoStore,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> String {
    week.iter()
        .map(|cell| render_cell(*cell, store, today, selected))
        .collect()
}

fn render_cell(
    cell: Option<NaiveDate>,
    store: &MemoStore,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> String {
    let date = match cell {
        Some(date) => date,
        None => return " ".repeat(CELL_WIDTH),
    };

    let caption = caption_for(&store.memos_on(date));
    let day = format!("{:>2}", date.day());

    // Selected wins over today, today over the weekend color
    let day = if selected == Some(date) {
        day.reversed().to_string()
    } else if date == today {
        day.red().bold().to_string()
    } else if MonthGrid::is_weekend(date) {
        day.red().to_string()
    } else {
        day
    };

    let caption = format!("{:<width$}", caption, width = CAPTION_WIDTH);
    format!("{} {} ", day, caption.dimmed())
}

/// Day-cell caption: the first memo's truncated content, as the original
/// grid shows it. An empty string when the date has no memos.
fn caption_for(memos: &[&Memo]) -> String {
    match memos.first() {
        Some(memo) => memo.preview(PREVIEW_WIDTH),
        None => String::new(),
    }
}

/// The selected date's memos, one per line, under a small heading.
pub fn selected_view(date: NaiveDate, store: &MemoStore) -> String {
    let memos = store.memos_on(date);
    if memos.is_empty() {
        return format!("{}", format!("No memos on {}", date).dimmed());
    }

    let mut lines = vec![format!("Memos on {}:", date)];
    for memo in memos {
        lines.push(format!("  {}", memo_line(memo)));
    }
    lines.join("\n")
}

/// One-line rendering of a memo: reminder time (dimmed) then content.
pub fn memo_line(memo: &Memo) -> String {
    match memo.time {
        Some(time) => format!(
            "{} {}",
            time.format("%H:%M").to_string().dimmed(),
            memo.content
        ),
        None => format!("{} {}", "     ".dimmed(), memo.content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memocal_core::Memo;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn store_with(content: &str) -> MemoStore {
        let mut store = MemoStore::new();
        store.add(Memo::new(date(15), None, content)).unwrap();
        store
    }

    #[test]
    fn caption_uses_first_memo_preview() {
        let mut store = store_with("dentist");
        store.add(Memo::new(date(15), None, "second")).unwrap();
        assert_eq!(caption_for(&store.memos_on(date(15))), "denti...");
    }

    #[test]
    fn caption_is_empty_without_memos() {
        let store = MemoStore::new();
        assert_eq!(caption_for(&store.memos_on(date(1))), "");
    }

    #[test]
    fn blank_cells_keep_the_column_width() {
        let store = MemoStore::new();
        assert_eq!(
            render_cell(None, &store, date(15), None),
            " ".repeat(CELL_WIDTH)
        );
    }

    #[test]
    fn month_view_contains_every_day_and_the_title() {
        let nav = NavigationState::new(YearMonth::new(2024, 3).unwrap());
        let view = month_view(&nav, &MemoStore::new(), date(15), SlideDirection::Still);
        assert!(view.contains("March 2024"));
        assert!(view.contains("31"));
        assert!(view.contains("Sun"));
    }

    #[test]
    fn month_view_renders_years_beyond_the_date_range() {
        let nav = NavigationState::new(YearMonth::new(999_999, 1).unwrap());
        let view = month_view(&nav, &MemoStore::new(), date(15), SlideDirection::Still);
        assert!(view.contains("January 999999"));
    }

    #[test]
    fn selected_view_lists_memos() {
        let store = store_with("dentist");
        let view = selected_view(date(15), &store);
        assert!(view.contains("2024-03-15"));
        assert!(view.contains("dentist"));
    }

    #[test]
    fn selected_view_handles_empty_dates() {
        assert!(selected_view(date(1), &MemoStore::new()).contains("No memos"));
    }
}

use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::Input;
use memocal_core::{NavigationState, SlideDirection, YearMonth};
use owo_colors::OwoColorize;

use crate::render;

/// One parsed input line of the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewCommand {
    Next,
    Previous,
    Today,
    Jump(YearMonth),
    Select(NaiveDate),
    /// A bare day number, resolved against the displayed month
    SelectDay(u32),
    Quit,
}

pub fn run(month: Option<&str>, once: bool) -> Result<()> {
    let prefs = super::open_prefs()?;
    let store = super::load_store(&prefs);

    let today = Local::now().date_naive();
    let start = match month {
        Some(input) => input.parse::<YearMonth>()?,
        None => YearMonth::from_date(today),
    };

    let mut nav = NavigationState::new(start);
    let mut last_direction = SlideDirection::Still;

    loop {
        println!();
        println!("{}", render::month_view(&nav, &store, today, last_direction));

        if once {
            return Ok(());
        }

        // Retry on unparseable input instead of exiting
        let input: String = Input::new()
            .with_prompt("  [n]ext [p]rev [t]oday  g YYYY-MM  s DATE  [q]uit")
            .interact_text()?;

        let command = match parse_command(input.trim()) {
            Some(command) => command,
            None => {
                eprintln!("  {}", format!("Unrecognized command: {}", input.trim()).red());
                continue;
            }
        };

        match command {
            ViewCommand::Next => last_direction = nav.next_month(),
            ViewCommand::Previous => last_direction = nav.previous_month(),
            ViewCommand::Today => last_direction = nav.go_to_today(today),
            ViewCommand::Jump(target) => last_direction = nav.jump_to(target),
            ViewCommand::Select(date) => nav.select(date),
            ViewCommand::SelectDay(day) => match nav.current_month().day(day) {
                Some(date) => nav.select(date),
                None => eprintln!(
                    "  {}",
                    format!("No day {} in {}", day, nav.current_month()).red()
                ),
            },
            ViewCommand::Quit => return Ok(()),
        }
    }
}

fn parse_command(input: &str) -> Option<ViewCommand> {
    match input {
        "n" => return Some(ViewCommand::Next),
        "p" => return Some(ViewCommand::Previous),
        "t" => return Some(ViewCommand::Today),
        "q" => return Some(ViewCommand::Quit),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix("g ") {
        return rest.trim().parse().ok().map(ViewCommand::Jump);
    }

    if let Some(rest) = input.strip_prefix("s ") {
        let rest = rest.trim();
        if let Ok(day) = rest.parse::<u32>() {
            return Some(ViewCommand::SelectDay(day));
        }
        return super::parse_date(rest).ok().map(ViewCommand::Select);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_letter_commands() {
        assert_eq!(parse_command("n"), Some(ViewCommand::Next));
        assert_eq!(parse_command("p"), Some(ViewCommand::Previous));
        assert_eq!(parse_command("t"), Some(ViewCommand::Today));
        assert_eq!(parse_command("q"), Some(ViewCommand::Quit));
    }

    #[test]
    fn parses_jump() {
        assert_eq!(
            parse_command("g 2024-05"),
            Some(ViewCommand::Jump(YearMonth::new(2024, 5).unwrap()))
        );
        assert_eq!(parse_command("g nonsense"), None);
    }

    #[test]
    fn parses_select_by_day_and_by_date() {
        assert_eq!(parse_command("s 15"), Some(ViewCommand::SelectDay(15)));
        assert_eq!(
            parse_command("s 2024-03-15"),
            Some(ViewCommand::Select(
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
            ))
        );
    }

    #[test]
    fn rejects_unknown_input() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("x"), None);
        assert_eq!(parse_command("s "), None);
    }
}

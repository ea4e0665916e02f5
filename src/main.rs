mod commands;
mod config;
mod dispatch;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "memocal")]
#[command(about = "Month-grid calendar with per-date memos and reminder notifications")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the month grid and browse interactively
    View {
        /// Month to display (YYYY-MM, defaults to the current month)
        month: Option<String>,

        /// Print the grid once and exit
        #[arg(long)]
        once: bool,
    },
    /// Attach a memo to a date
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Memo text
        content: String,

        /// Reminder time
        #[arg(long, value_name = "HH:MM")]
        at: Option<String>,

        /// Replace any existing memos on the date
        #[arg(long)]
        replace: bool,
    },
    /// List memos
    List {
        /// Only memos in this month
        #[arg(long, value_name = "YYYY-MM", conflicts_with = "date")]
        month: Option<String>,

        /// Only memos on this date
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove memos from a date
    Remove {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Only remove the memo with exactly this text
        #[arg(long)]
        content: Option<String>,

        /// Reminder time of the memo to remove
        #[arg(long, value_name = "HH:MM", requires = "content")]
        at: Option<String>,
    },
    /// Wait for pending reminders and deliver notifications
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::View { month, once } => commands::view::run(month.as_deref(), once),
        Commands::Add {
            date,
            content,
            at,
            replace,
        } => commands::add::run(&date, &content, at.as_deref(), replace),
        Commands::List { month, date, json } => {
            commands::list::run(month.as_deref(), date.as_deref(), json)
        }
        Commands::Remove { date, content, at } => {
            commands::remove::run(&date, content, at.as_deref())
        }
        Commands::Watch => commands::watch::run().await,
    }
}

// src/main.rs
// Interactive terminal front end for the graduation bingo game: renders
// the card, feeds key events into the session and persists saved goal
// selections to the activity log.

use std::error::Error;

use clap::Parser;

use gradbingo::activity::ActivityLog;
use gradbingo::config::BingoConfig;
use gradbingo::defs::{CARDCONFIG, Colors};
use gradbingo::logging;
use gradbingo::pool::GoalPool;
use gradbingo::session::{Effect, Session, SessionEvent};
use gradbingo::terminal::{self, KeyAction};

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(about = "Graduation Bingo - an interactive milestone bingo card")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<String>,

    /// Set the player name up front
    #[arg(long)]
    name: Option<String>,

    /// Override the activity log path from the configuration
    #[arg(long)]
    log_file: Option<String>,
}

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(_) => {
            println!("Thanks for playing.");
        }
        Err(e) => {
            logging::log_error_stderr(&format!("{e}"));
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => BingoConfig::from_file(path)?,
        None => BingoConfig::load_or_default(),
    };

    let log_path = args.log_file.unwrap_or(config.log_file);
    let log = ActivityLog::new(&log_path);

    // A custom goal file that cannot fill a card is fatal here, before any
    // interaction starts.
    let pool = match &config.goals_file {
        Some(path) => GoalPool::from_file(path)?,
        None => GoalPool::new(),
    };

    let mut session = Session::new(pool)?;
    if let Some(name) = args.name {
        session.apply(SessionEvent::SetUser { name })?;
    }

    logging::log_info(&format!("Activity log: {log_path}"));

    let mut cursor = (0usize, 0usize);
    let mut status: Option<String> = None;

    loop {
        terminal::clear_screen();
        terminal::print_title();

        if let Some(name) = session.user_name() {
            if !name.is_empty() {
                println!("Welcome, {name}!\n");
            }
        }

        terminal::print_card(session.card(), session.marks(), Some(cursor));
        if session.bingo() {
            terminal::print_win_banner();
        }
        terminal::print_help();
        if let Some(message) = status.take() {
            println!("\n{message}");
        }

        match terminal::wait_for_user_action() {
            KeyAction::MoveUp => cursor.0 = cursor.0.saturating_sub(1),
            KeyAction::MoveDown => cursor.0 = (cursor.0 + 1).min(CARDCONFIG.rows - 1),
            KeyAction::MoveLeft => cursor.1 = cursor.1.saturating_sub(1),
            KeyAction::MoveRight => cursor.1 = (cursor.1 + 1).min(CARDCONFIG.cols - 1),
            KeyAction::Toggle => {
                let effects = session.apply(SessionEvent::ToggleCell {
                    row: cursor.0,
                    col: cursor.1,
                })?;
                if effects.contains(&Effect::Win) {
                    status = Some("🎉 BINGO! You won! 🎉".to_string());
                }
            }
            KeyAction::NewCard => {
                session.apply(SessionEvent::NewCard)?;
                cursor = (0, 0);
                status = Some("New card generated.".to_string());
            }
            KeyAction::EnterName => {
                let name = terminal::read_user_name()?;
                session.apply(SessionEvent::SetUser { name })?;
            }
            KeyAction::Save => {
                let name = session.user_name().unwrap_or("").to_string();
                let goals = session.marked_goals();
                let effects = session.apply(SessionEvent::Save { name, goals })?;

                for effect in effects {
                    if let Effect::Persist { name, goals } = effect {
                        match log.save_record(&name, &goals) {
                            Ok(_) => {
                                status = Some(format!(
                                    "{}✓ Saved {} goals to {}{}",
                                    Colors::green(),
                                    goals.len(),
                                    log.path().display(),
                                    Colors::reset()
                                ));
                            }
                            Err(e) => {
                                logging::log_warning(&format!("Save failed: {e}"));
                                status = Some(format!("✗ Save failed: {e}"));
                            }
                        }
                    }
                }
            }
            KeyAction::Exit => break,
        }
    }

    Ok(())
}

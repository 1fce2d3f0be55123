// gradbingo/src/terminal.rs
// Terminal rendering and key input for the bingo game. Marked cells are
// drawn green, the center cell keeps a yellow background whatever its mark
// state, and cell text is word-wrapped to the fixed cell width.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode},
};

use crate::card::Card;
use crate::defs::{CARDCONFIG, Colors};
use crate::marks::MarkState;

use std::io::{self, Write};

/// Actions a key press maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Toggle,
    NewCard,
    Save,
    EnterName,
    Exit,
}

pub fn clear_screen() {
    print!("\x1Bc");
}

pub fn print_title() {
    println!(
        "{}🎓 Interactive Graduation Bingo{}\n",
        Colors::yellow(),
        Colors::reset()
    );
}

/// Greedy word wrap into lines no wider than `width` characters. A word
/// longer than the width gets a line of its own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    lines.push(current);
    lines
}

// Center a wrapped line inside the cell width, truncating if a single word
// overflows it.
fn fit_line(line: &str, width: usize) -> String {
    let truncated: String = line.chars().take(width).collect();
    format!("{truncated:^width$}")
}

// Combined ANSI code for one cell, or None for a plain cell.
fn cell_style(marked: bool, center: bool, cursor: bool) -> Option<String> {
    let mut codes: Vec<&str> = Vec::new();
    if cursor {
        codes.push("7");
    }
    if marked {
        codes.push("1;32");
    }
    if center {
        codes.push("43");
    }
    if codes.is_empty() {
        None
    } else {
        Some(format!("\x1b[{}m", codes.join(";")))
    }
}

/// Draw the card grid with its mark state. `cursor` highlights one cell
/// for keyboard navigation; pass None for a static rendering.
pub fn print_card(card: &Card, marks: &MarkState, cursor: Option<(usize, usize)>) {
    let width = CARDCONFIG.cell_width;
    let border = format!("+{}", format!("{}+", "-".repeat(width + 2)).repeat(CARDCONFIG.cols));
    let center = (CARDCONFIG.rows / 2, CARDCONFIG.cols / 2);

    println!("{border}");
    for row in 0..CARDCONFIG.rows {
        let wrapped: Vec<Vec<String>> = (0..CARDCONFIG.cols)
            .map(|col| wrap_text(&card[row][col], width))
            .collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

        for line_idx in 0..height {
            print!("|");
            for (col, cell_lines) in wrapped.iter().enumerate() {
                let line = cell_lines
                    .get(line_idx)
                    .map(String::as_str)
                    .unwrap_or("");
                let padded = fit_line(line, width);
                match cell_style(
                    marks.is_marked(row, col),
                    (row, col) == center,
                    cursor == Some((row, col)),
                ) {
                    Some(style) => print!(" {style}{padded}{} |", Colors::reset()),
                    None => print!(" {padded} |"),
                }
            }
            println!();
        }
        println!("{border}");
    }
}

pub fn print_win_banner() {
    println!(
        "\n{}🎉 BINGO! You won! 🎉{}",
        Colors::yellow(),
        Colors::reset()
    );
}

pub fn print_help() {
    println!("\nHow to play:");
    println!("  - Move with the arrow keys, mark/unmark with SPACE or ENTER.");
    println!("  - Complete a row, column or diagonal to get Bingo!");
    println!("  - The center square keeps its yellow highlight.");
    println!("  - 'u' sets your name, 'n' deals a new card, 's' saves your");
    println!("    marked goals, ESC or 'q' quits.");
}

/// Block until a mapped key is pressed. Unmapped keys are ignored.
pub fn wait_for_user_action() -> KeyAction {
    enable_raw_mode().unwrap();

    // Drop anything already buffered so a held key does not replay.
    while event::poll(std::time::Duration::from_millis(0)).unwrap() {
        event::read().unwrap();
    }

    let action = loop {
        if let Ok(Event::Key(key_event)) = event::read() {
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            match key_event.code {
                KeyCode::Up => break KeyAction::MoveUp,
                KeyCode::Down => break KeyAction::MoveDown,
                KeyCode::Left => break KeyAction::MoveLeft,
                KeyCode::Right => break KeyAction::MoveRight,
                KeyCode::Char(' ') | KeyCode::Enter => break KeyAction::Toggle,
                KeyCode::Char('n') => break KeyAction::NewCard,
                KeyCode::Char('s') => break KeyAction::Save,
                KeyCode::Char('u') => break KeyAction::EnterName,
                KeyCode::Esc | KeyCode::Char('q') => break KeyAction::Exit,
                _ => continue,
            }
        }
    };

    disable_raw_mode().unwrap();
    action
}

/// Prompt for the player name on the regular (cooked) terminal.
pub fn read_user_name() -> io::Result<String> {
    print!("Enter your name: ");
    io::stdout().flush()?;

    let mut name = String::new();
    io::stdin().read_line(&mut name)?;
    Ok(name.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_splits_on_width() {
        assert_eq!(
            wrap_text("Quit job dramatically", 16),
            vec!["Quit job".to_string(), "dramatically".to_string()]
        );
    }

    #[test]
    fn test_wrap_text_short_phrase_stays_whole() {
        assert_eq!(wrap_text("Go vegan", 16), vec!["Go vegan".to_string()]);
    }

    #[test]
    fn test_wrap_text_long_word_gets_own_line() {
        let lines = wrap_text("a Congratulations", 10);
        assert_eq!(
            lines,
            vec!["a".to_string(), "Congratulations".to_string()]
        );
    }

    #[test]
    fn test_wrap_text_empty_input() {
        assert_eq!(wrap_text("", 16), vec![String::new()]);
    }

    #[test]
    fn test_fit_line_pads_and_truncates() {
        assert_eq!(fit_line("abc", 7), "  abc  ");
        assert_eq!(fit_line("abcdefghij", 4), "abcd");
    }

    #[test]
    fn test_cell_style_combinations() {
        assert_eq!(cell_style(false, false, false), None);
        assert_eq!(cell_style(true, false, false), Some("\x1b[1;32m".to_string()));
        assert_eq!(cell_style(false, true, false), Some("\x1b[43m".to_string()));
        // A marked center keeps both channels visible.
        assert_eq!(cell_style(true, true, false), Some("\x1b[1;32;43m".to_string()));
        assert_eq!(cell_style(true, true, true), Some("\x1b[7;1;32;43m".to_string()));
    }
}

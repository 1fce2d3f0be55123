// gradbingo/src/defs.rs
// Shared definitions: card geometry, the built-in goal pool and the
// terminal color codes used by the renderer.

pub type Goal = String;

pub struct CardStruct {
    pub rows: usize,       // rows on a card
    pub cols: usize,       // columns on a card
    pub cell_width: usize, // characters of text per rendered cell line
}

pub const CARDCONFIG: CardStruct = CardStruct {
    rows: 5,
    cols: 5,
    cell_width: 16,
};

pub const CELLSPERCARD: usize = CARDCONFIG.rows * CARDCONFIG.cols;

// The built-in milestone phrases. 30 entries, so every card leaves five out.
pub const DEFAULT_GOALS: [&str; 30] = [
    "Quit job dramatically", "Break up with partner",
    "Move abroad", "Failed business",
    "Back to school", "Existential crisis",
    "Delete social media", "Go vegan",
    "Unaffordable pet", "Join cult (briefly)",
    "Try influencing", "Date parents hate",
    "Expensive hobby", "Find yourself phase",
    "Credit card debt", "Crazy roommates",
    "Astrology phase", "Rebel upbringing",
    "Impractical purchase", "Ghost everyone",
    "Impulsive decision", "Regret degree",
    "Fake LinkedIn", "Compare to peers",
    "Need therapy", "Regret tattoo",
    "Temporary minimalism", "Binge-watch",
    "Food obsession", "Failed podcast",
];

/// ANSI escape sequences for terminal output.
pub struct Colors;

impl Colors {
    pub fn green() -> &'static str {
        "\x1b[1;32m"
    }

    pub fn yellow() -> &'static str {
        "\x1b[1;33m"
    }

    pub fn reset() -> &'static str {
        "\x1b[0m"
    }
}

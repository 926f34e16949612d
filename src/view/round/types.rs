use crate::model::{HoleScores, RoundState};

pub const PLAYER_COLORS: [&str; 12] = [
    "red", "orange", "green", "blue", "purple", "brown", "pink", "gray", "olive", "teal", "cyan",
    "magenta",
];

#[must_use]
pub fn player_color(index: usize) -> &'static str {
    PLAYER_COLORS[index % PLAYER_COLORS.len()]
}

/// Which parts of the page are showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub entry: bool,
    pub scorecard: bool,
    pub summary: bool,
    pub new_round: bool,
}

impl Panels {
    #[must_use]
    pub fn for_started(started: bool) -> Self {
        Self {
            entry: !started,
            scorecard: started,
            summary: started,
            new_round: started,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLine {
    pub index: usize,
    pub name: String,
    pub total: i64,
    pub color: &'static str,
}

/// Everything the page shows, derived from a round and nothing else.
#[derive(Debug, Clone)]
pub struct RoundView<'a> {
    pub players: Vec<PlayerLine>,
    pub grid: &'a [HoleScores],
    pub panels: Panels,
    pub started: bool,
}

impl<'a> RoundView<'a> {
    #[must_use]
    pub fn from_state(state: &'a RoundState) -> Self {
        let players = state
            .players()
            .iter()
            .zip(state.totals())
            .enumerate()
            .map(|(index, (name, total))| PlayerLine {
                index,
                name: name.clone(),
                total,
                color: player_color(index),
            })
            .collect();
        Self {
            players,
            grid: state.scores(),
            panels: Panels::for_started(state.started),
            started: state.started,
        }
    }
}

pub(crate) fn display_style(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

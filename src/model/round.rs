pub const NUM_HOLES: usize = 18;
pub const FIRST_HOLE: i32 = 1;

pub type HoleScores = [i32; NUM_HOLES];

/// Where the round sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    NotStarted,
    Active,
}

/// Players, their per-hole scores and the round status.
///
/// `players` and `scores` are index-aligned: row `i` of `scores` belongs to
/// `players[i]`. Both are private so the alignment can only change through
/// the methods below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    players: Vec<String>,
    scores: Vec<HoleScores>,
    pub current_hole: i32,
    pub started: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            scores: Vec::new(),
            current_hole: FIRST_HOLE,
            started: false,
        }
    }
}

impl RoundState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from decoded storage rows.
    ///
    /// # Errors
    ///
    /// Returns a message when the player and score rows are not the same length.
    pub fn from_parts(
        players: Vec<String>,
        scores: Vec<HoleScores>,
        current_hole: i32,
        started: bool,
    ) -> Result<Self, String> {
        if players.len() != scores.len() {
            return Err(format!(
                "{} players but {} score rows",
                players.len(),
                scores.len()
            ));
        }
        Ok(Self {
            players,
            scores,
            current_hole,
            started,
        })
    }

    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    #[must_use]
    pub fn scores(&self) -> &[HoleScores] {
        &self.scores
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.started {
            RoundPhase::Active
        } else {
            RoundPhase::NotStarted
        }
    }

    pub fn push_player(&mut self, name: String) {
        self.players.push(name);
        self.scores.push([0; NUM_HOLES]);
    }

    #[must_use]
    pub fn score(&self, player: usize, hole: usize) -> Option<i32> {
        self.scores.get(player).and_then(|row| row.get(hole)).copied()
    }

    /// Overwrites one cell. Returns `false` when the cell is outside the grid.
    pub fn set_score(&mut self, player: usize, hole: usize, value: i32) -> bool {
        match self.scores.get_mut(player).and_then(|row| row.get_mut(hole)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn total_for(&self, player: usize) -> Option<i64> {
        self.scores.get(player).map(|row| total(row))
    }

    #[must_use]
    pub fn totals(&self) -> Vec<i64> {
        self.scores.iter().map(|row| total(row)).collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sum of one player's 18 holes, widened so a row of saturated cells can't overflow.
#[must_use]
pub fn total(row: &HoleScores) -> i64 {
    row.iter().map(|&s| i64::from(s)).sum()
}

/// Prepared HUD text.  The resolver calls the `prep_*` hooks whenever the
/// matching stat changes; the renderer only reads the prepared values.
use crate::stats::Stats;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scoreboard {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    /// Number of ship icons to draw.
    pub ships: u32,
}

impl Scoreboard {
    pub fn new(stats: &Stats) -> Self {
        let mut board = Scoreboard::default();
        board.prep_all(stats);
        board
    }

    pub fn prep_all(&mut self, stats: &Stats) {
        self.prep_score(stats);
        self.prep_high_score(stats);
        self.prep_level(stats);
        self.prep_ships(stats);
    }

    pub fn prep_score(&mut self, stats: &Stats) {
        self.score_text = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &Stats) {
        self.high_score_text = format_score(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &Stats) {
        self.level_text = stats.level.to_string();
    }

    pub fn prep_ships(&mut self, stats: &Stats) {
        self.ships = stats.ships_left;
    }

    /// Raise the high score if the current score beats it.
    pub fn check_high_score(&mut self, stats: &mut Stats) {
        if stats.score > stats.high_score {
            stats.high_score = stats.score;
            self.prep_high_score(stats);
        }
    }
}

/// Score rounded to the nearest ten (ties to even) with comma separators,
/// e.g. `12345` → `"12,340"`.
pub fn format_score(score: u32) -> String {
    let rounded = round_to_tens(score);
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rounds down instead when rounding up would not fit in a `u32`.
fn round_to_tens(value: u32) -> u32 {
    let rem = value % 10;
    let down = value - rem;
    let round_up = rem > 5 || (rem == 5 && (value / 10) % 2 == 1);
    if round_up {
        down.checked_add(10).unwrap_or(down)
    } else {
        down
    }
}

/// Session counters.  The high score outlives individual games.
use crate::settings::Settings;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub ships_left: u32,
    /// Gameplay runs only while this is set.
    pub game_active: bool,
}

impl Stats {
    /// Inactive stats for a fresh process.
    pub fn new(settings: &Settings) -> Self {
        let mut stats = Stats::default();
        stats.reset_stats(settings);
        stats
    }

    /// Start-of-game values.  Does not touch the high score.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }
}

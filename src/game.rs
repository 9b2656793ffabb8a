/// Master game state and the input-driven transitions.
///
/// The per-frame update lives in `compute`; this module covers what happens
/// between frames: starting a game, firing and steering.

use tracing::info;

use crate::entities::{Bullet, PlayButton, Ship, Size};
use crate::fleet::Fleet;
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;
use crate::stats::Stats;

/// Player input, already decoded from the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Left intent pressed (`true`) or released (`false`).
    MoveLeft(bool),
    MoveRight(bool),
    Fire,
    /// Start or restart (the `p` key).
    Start,
    /// Mouse click at a screen cell.
    Click { x: i32, y: i32 },
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Round-level phase, derived from the stats and the recovery counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
    /// Frozen after a non-fatal hit; still counts as active.
    Recovering,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub settings: Settings,
    pub stats: Stats,
    pub scoreboard: Scoreboard,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub fleet: Fleet,
    pub play_button: PlayButton,
    pub mouse_visible: bool,
    /// Frames left in the hit-recovery pause.
    pub recovery_ticks: u32,
    pub frame: u64,
}

impl GameState {
    /// An idle session with a fleet on screen, waiting for PLAY.
    pub fn new(settings: Settings, ship_size: Size, alien_size: Size) -> Self {
        let stats = Stats::new(&settings);
        let scoreboard = Scoreboard::new(&stats);
        let ship = Ship::new(ship_size, &settings);
        let play_button = PlayButton::new(&settings);
        let mut fleet = Fleet::new(alien_size);
        fleet.create(&settings, ship.rect.height);

        GameState {
            settings,
            stats,
            scoreboard,
            ship,
            bullets: Vec::new(),
            fleet,
            play_button,
            mouse_visible: true,
            recovery_ticks: 0,
            frame: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.stats.game_active {
            Phase::Idle
        } else if self.recovery_ticks > 0 {
            Phase::Recovering
        } else {
            Phase::Active
        }
    }

    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Quit,
            Command::MoveLeft(held) => self.ship.moving_left = held,
            Command::MoveRight(held) => self.ship.moving_right = held,
            Command::Fire => self.fire_bullet(),
            Command::Start => self.start_game(),
            Command::Click { x, y } => self.check_play_button(x, y),
        }
        Flow::Continue
    }

    /// Reset everything except the high score and begin playing.
    pub fn start_game(&mut self) {
        self.settings.reset_dynamic();
        self.stats.reset_stats(&self.settings);
        self.stats.game_active = true;
        self.mouse_visible = false;
        self.recovery_ticks = 0;

        self.fleet.clear();
        self.bullets.clear();

        self.rebuild_fleet();
        self.ship.center_ship(&self.settings);
        self.scoreboard.prep_all(&self.stats);
        info!(high_score = self.stats.high_score, "game started");
    }

    fn check_play_button(&mut self, x: i32, y: i32) {
        if self.play_button.is_clicked(x, y) && !self.stats.game_active {
            self.start_game();
        }
    }

    /// Fire if the game is running and the bullet cap allows it.
    pub fn fire_bullet(&mut self) {
        if self.phase() != Phase::Active {
            return;
        }
        if self.bullets.len() < self.settings.bullets_allowed {
            self.bullets.push(Bullet::new(&self.settings, &self.ship));
        }
    }

    pub(crate) fn rebuild_fleet(&mut self) {
        self.fleet.create(&self.settings, self.ship.rect.height);
    }
}

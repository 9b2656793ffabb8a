/// Game configuration.
///
/// Static values are fixed for the lifetime of the process.  The dynamic
/// subset (speeds, fleet direction, alien value) is reset on every new game
/// and scaled up on every cleared wave.
use std::time::Duration;

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const DEFAULT_SCREEN_WIDTH: i32 = 80;
pub const DEFAULT_SCREEN_HEIGHT: i32 = 24;
pub const DEFAULT_FPS: u32 = 30;

const BASE_SHIP_SPEED: f32 = 1.0;
const BASE_BULLET_SPEED: f32 = 0.6;
const BASE_FLEET_SPEED: f32 = 0.2;
const BASE_ALIEN_POINTS: u32 = 50;

/// RGB triple, converted to a terminal colour by the renderer.
pub type Rgb = (u8, u8, u8);

/// Horizontal direction shared by the whole fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// −1.0 for left, +1.0 for right.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    // ── Static ───────────────────────────────────────────────────────────────
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Rgb,
    pub fps: u32,

    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Rgb,
    pub bullets_allowed: usize,

    pub fleet_drop_speed: f32,
    pub speed_scale: f64,
    pub ship_limit: u32,
    /// Freeze after a non-fatal ship hit.
    pub hit_pause: Duration,

    // ── Dynamic ──────────────────────────────────────────────────────────────
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub fleet_speed: f32,
    pub fleet_direction: Direction,
    pub alien_points: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT)
    }
}

impl Settings {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        let mut settings = Settings {
            screen_width,
            screen_height,
            bg_color: (230, 230, 230),
            fps: DEFAULT_FPS,

            bullet_width: 1,
            bullet_height: 1,
            bullet_color: (60, 60, 60),
            bullets_allowed: 10,

            fleet_drop_speed: 1.0,
            speed_scale: 1.1,
            ship_limit: 3,
            hit_pause: Duration::from_millis(500),

            ship_speed: BASE_SHIP_SPEED,
            bullet_speed: BASE_BULLET_SPEED,
            fleet_speed: BASE_FLEET_SPEED,
            fleet_direction: Direction::Right,
            alien_points: BASE_ALIEN_POINTS,
        };
        settings.reset_dynamic();
        settings
    }

    /// Restore the difficulty-sensitive fields to their baseline.
    pub fn reset_dynamic(&mut self) {
        self.ship_speed = BASE_SHIP_SPEED;
        self.bullet_speed = BASE_BULLET_SPEED;
        self.fleet_speed = BASE_FLEET_SPEED;
        self.fleet_direction = Direction::Right;
        self.alien_points = BASE_ALIEN_POINTS;
    }

    /// Scale speeds and alien value up by `speed_scale`.  Points are
    /// truncated on every call.
    pub fn increase_speed(&mut self) {
        let scale = self.speed_scale as f32;
        self.ship_speed *= scale;
        self.bullet_speed *= scale;
        self.fleet_speed *= scale;

        // Saturates at u32::MAX.
        self.alien_points = (self.alien_points as f64 * self.speed_scale) as u32;
    }

    /// Length of the hit-recovery pause in frames at the configured rate.
    pub fn hit_pause_ticks(&self) -> u32 {
        let fps = self.fps.max(1) as f64;
        let ticks = (self.hit_pause.as_secs_f64() * fps).ceil() as u32;
        ticks.max(1)
    }
}

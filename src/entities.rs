/// Game entities: the ship, its bullets, the aliens and the PLAY button.
///
/// Every sprite keeps an integer bounding box (`Rect`).  Ship, bullet and
/// alien also keep float positions so sub-cell speeds accumulate; the float
/// is truncated into the rect after every move.

use crate::settings::Settings;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Width and height of a sprite, in cells.
pub type Size = (i32, i32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Strict overlap: rects sharing only an edge do not collide, and a rect
    /// with no area never collides.
    pub fn collides(&self, other: &Rect) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// Shared capability of everything that moves on its own each frame.
pub trait Entity {
    fn update(&mut self, settings: &Settings);
    fn bounds(&self) -> Rect;
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    pub rect: Rect,
    /// Horizontal position (fractional columns).
    pub x: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A ship centred on the bottom edge of the screen.
    pub fn new(size: Size, settings: &Settings) -> Self {
        let (width, height) = size;
        let mut ship = Ship {
            rect: Rect::new(0, settings.screen_height - height, width, height),
            x: 0.0,
            moving_left: false,
            moving_right: false,
        };
        ship.center_ship(settings);
        ship
    }

    pub fn center_ship(&mut self, settings: &Settings) {
        self.x = ((settings.screen_width - self.rect.width) / 2).max(0) as f32;
        self.rect.x = self.x as i32;
    }

    fn max_x(&self, settings: &Settings) -> f32 {
        (settings.screen_width - self.rect.width).max(0) as f32
    }
}

impl Entity for Ship {
    /// Both intents held cancel out: deltas are summed, then clamped.
    fn update(&mut self, settings: &Settings) {
        let mut dx = 0.0;
        if self.moving_right {
            dx += settings.ship_speed;
        }
        if self.moving_left {
            dx -= settings.ship_speed;
        }
        self.x = (self.x + dx).clamp(0.0, self.max_x(settings));
        self.rect.x = self.x as i32;
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rect,
    /// Vertical position (fractional rows).
    pub y: f32,
}

impl Bullet {
    /// A bullet leaving the ship's nose.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let rect = Rect::new(
            ship.rect.center_x() - settings.bullet_width / 2,
            ship.rect.top(),
            settings.bullet_width,
            settings.bullet_height,
        );
        Bullet {
            rect,
            y: rect.y as f32,
        }
    }

    /// True once the bullet has left the top of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

impl Entity for Bullet {
    fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
        self.rect.y = self.y as i32;
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Alien {
    pub rect: Rect,
    pub x: f32,
    pub y: f32,
}

impl Alien {
    /// An alien with its top-left corner at (`x`, `y`).
    pub fn new(size: Size, x: f32, y: f32) -> Self {
        let (width, height) = size;
        Alien {
            rect: Rect::new(x as i32, y as i32, width, height),
            x,
            y,
        }
    }

    /// Touching or past the left or right screen edge.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        self.rect.left() <= 0 || self.rect.right() >= settings.screen_width
    }

    pub fn drop_by(&mut self, dy: f32) {
        self.y += dy;
        self.rect.y = self.y as i32;
    }
}

impl Entity for Alien {
    fn update(&mut self, settings: &Settings) {
        self.x += settings.fleet_speed * settings.fleet_direction.sign();
        self.rect.x = self.x as i32;
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

// ── Play button ───────────────────────────────────────────────────────────────

pub const PLAY_BUTTON_WIDTH: i32 = 20;
pub const PLAY_BUTTON_HEIGHT: i32 = 3;

#[derive(Clone, Debug)]
pub struct PlayButton {
    pub rect: Rect,
    pub label: &'static str,
}

impl PlayButton {
    /// Centred on the screen.
    pub fn new(settings: &Settings) -> Self {
        let width = PLAY_BUTTON_WIDTH.min(settings.screen_width);
        let height = PLAY_BUTTON_HEIGHT.min(settings.screen_height);
        PlayButton {
            rect: Rect::new(
                (settings.screen_width - width) / 2,
                (settings.screen_height - height) / 2,
                width,
                height,
            ),
            label: "PLAY",
        }
    }

    pub fn is_clicked(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point(x, y)
    }
}

//! The alien fleet: a grid of aliens that marches sideways in lockstep and
//! drops one step whenever it reaches a screen edge.

use tracing::debug;

use crate::entities::{Alien, Entity, Rect, Size};
use crate::settings::Settings;

/// Rows of alien-height kept free above the ship.
const SAFETY_ROWS: i32 = 5;

#[derive(Clone, Debug)]
pub struct Fleet {
    pub aliens: Vec<Alien>,
    alien_size: Size,
}

/// Columns and rows of aliens that fit on the screen; zero when the screen
/// is too small.
pub fn grid_dimensions(settings: &Settings, alien_size: Size, ship_height: i32) -> (usize, usize) {
    let (alien_width, alien_height) = alien_size;
    if alien_width <= 0 || alien_height <= 0 {
        return (0, 0);
    }

    let available_x = settings.screen_width - 2 * alien_width;
    let columns = available_x / (2 * alien_width);

    let available_y = settings.screen_height - ship_height - SAFETY_ROWS * alien_height;
    let rows = available_y / alien_height;

    (columns.max(0) as usize, rows.max(0) as usize)
}

impl Fleet {
    pub fn new(alien_size: Size) -> Self {
        Fleet {
            aliens: Vec::new(),
            alien_size,
        }
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn clear(&mut self) {
        self.aliens.clear();
    }

    /// Fill the screen with a fresh grid.  Row 0 is left empty as a top
    /// margin.
    pub fn create(&mut self, settings: &Settings, ship_height: i32) {
        let (columns, rows) = grid_dimensions(settings, self.alien_size, ship_height);
        let (alien_width, alien_height) = self.alien_size;

        for row in 1..=rows {
            for col in 0..columns {
                let x = alien_width + 2 * alien_width * col as i32;
                let y = alien_height * row as i32;
                self.aliens.push(Alien::new(self.alien_size, x as f32, y as f32));
            }
        }
        debug!(columns, rows, aliens = self.aliens.len(), "fleet created");
    }

    /// Reverse the fleet and drop it if any alien touches an edge.  Flips at
    /// most once per call.
    pub fn check_fleet_edges(&mut self, settings: &mut Settings) -> bool {
        if self.aliens.iter().any(|alien| alien.check_edges(settings)) {
            self.change_direction(settings);
            true
        } else {
            false
        }
    }

    fn change_direction(&mut self, settings: &mut Settings) {
        for alien in &mut self.aliens {
            alien.drop_by(settings.fleet_drop_speed);
        }
        settings.fleet_direction = settings.fleet_direction.flipped();
        debug!(direction = ?settings.fleet_direction, "fleet reversed");
    }

    pub fn update(&mut self, settings: &Settings) {
        for alien in &mut self.aliens {
            alien.update(settings);
        }
    }

    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.aliens.iter().any(|alien| alien.bounds().collides(rect))
    }

    /// Any alien's bottom edge at or below the bottom of the screen.
    pub fn reached_bottom(&self, settings: &Settings) -> bool {
        self.aliens
            .iter()
            .any(|alien| alien.rect.bottom() >= settings.screen_height)
    }
}

/// Per-frame game logic.
///
/// `tick` advances one frame: movement first, then collision resolution.
/// Everything here is deterministic; the same state and inputs always give
/// the same next state.

use tracing::info;

use crate::entities::Entity;
use crate::game::{GameState, Phase};

/// What the resolver saw this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub aliens_destroyed: usize,
    pub wave_cleared: bool,
    pub ship_hit: bool,
    pub game_over: bool,
}

/// Advance the simulation by one frame.  Idle games do not move; a game in
/// hit recovery only counts down its pause.
pub fn tick(state: &mut GameState) -> FrameReport {
    match state.phase() {
        Phase::Idle => return FrameReport::default(),
        Phase::Recovering => {
            state.recovery_ticks -= 1;
            return FrameReport::default();
        }
        Phase::Active => {}
    }
    state.frame += 1;

    // ── 1. Ship ──────────────────────────────────────────────────────────────
    state.ship.update(&state.settings);

    // ── 2. Bullets ───────────────────────────────────────────────────────────
    update_bullets(state);

    // ── 3. Fleet ─────────────────────────────────────────────────────────────
    state.fleet.check_fleet_edges(&mut state.settings);
    state.fleet.update(&state.settings);

    // ── 4. Collisions ────────────────────────────────────────────────────────
    resolve_collisions(state)
}

/// Move every bullet up and drop the ones that left the screen.
pub fn update_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.update(&state.settings);
    }
    state.bullets.retain(|bullet| !bullet.is_off_screen());
}

/// Run the collision checks in order: bullets against aliens, wave clear,
/// ship against aliens, aliens against the bottom edge.  At most one ship
/// hit is handled per frame.
pub fn resolve_collisions(state: &mut GameState) -> FrameReport {
    let mut report = FrameReport {
        aliens_destroyed: check_bullet_alien_collisions(state),
        ..FrameReport::default()
    };

    if state.fleet.is_empty() {
        start_new_level(state);
        report.wave_cleared = true;
    }

    let hit = state.fleet.collides_with(&state.ship.bounds())
        || state.fleet.reached_bottom(&state.settings);
    if hit {
        report.ship_hit = true;
        report.game_over = !ship_hit(state);
    }

    report
}

/// Remove every bullet/alien pair that overlaps and score the kills.  A
/// bullet is spent on its first hit.  Returns the number of aliens destroyed.
pub fn check_bullet_alien_collisions(state: &mut GameState) -> usize {
    let mut killed: Vec<usize> = Vec::new();
    let mut used: Vec<usize> = Vec::new();

    for (bi, bullet) in state.bullets.iter().enumerate() {
        let bounds = bullet.bounds();
        for (ai, alien) in state.fleet.aliens.iter().enumerate() {
            if !killed.contains(&ai) && bounds.collides(&alien.bounds()) {
                killed.push(ai);
                used.push(bi);
                break;
            }
        }
    }

    if killed.is_empty() {
        return 0;
    }

    let mut index = 0;
    state.fleet.aliens.retain(|_| {
        let keep = !killed.contains(&index);
        index += 1;
        keep
    });
    let mut index = 0;
    state.bullets.retain(|_| {
        let keep = !used.contains(&index);
        index += 1;
        keep
    });

    let points = state.settings.alien_points.saturating_mul(killed.len() as u32);
    state.stats.score = state.stats.score.saturating_add(points);
    state.scoreboard.prep_score(&state.stats);
    state.scoreboard.check_high_score(&mut state.stats);

    killed.len()
}

/// Next wave: fresh fleet, faster game, higher level.
pub fn start_new_level(state: &mut GameState) {
    state.bullets.clear();
    state.rebuild_fleet();

    state.settings.increase_speed();

    state.stats.level += 1;
    state.scoreboard.prep_level(&state.stats);
    info!(level = state.stats.level, "wave cleared");
}

/// Spend a ship.  Returns `true` if the game goes on (after the recovery
/// pause), `false` if that was the last ship.
pub fn ship_hit(state: &mut GameState) -> bool {
    state.stats.ships_left = state.stats.ships_left.saturating_sub(1);
    state.scoreboard.prep_ships(&state.stats);

    if state.stats.ships_left > 0 {
        state.fleet.clear();
        state.bullets.clear();

        state.rebuild_fleet();
        state.ship.center_ship(&state.settings);

        state.recovery_ticks = state.settings.hit_pause_ticks();
        info!(ships_left = state.stats.ships_left, "ship hit");
        true
    } else {
        state.stats.game_active = false;
        state.mouse_visible = true;
        info!(score = state.stats.score, high_score = state.stats.high_score, "game over");
        false
    }
}

use alien_invasion::compute::*;
use alien_invasion::entities::{Alien, Bullet, Rect};
use alien_invasion::game::{GameState, Phase};
use alien_invasion::settings::{Direction, Settings};

const SHIP: (i32, i32) = (3, 2);
const ALIEN: (i32, i32) = (3, 2);

/// An active game on an 80×22 field with a full fleet.
fn make_state() -> GameState {
    let mut s = GameState::new(Settings::new(80, 22), SHIP, ALIEN);
    s.start_game();
    s
}

fn bullet_at(x: i32, y: i32) -> Bullet {
    Bullet {
        rect: Rect::new(x, y, 1, 1),
        y: y as f32,
    }
}

// ── tick — phases ─────────────────────────────────────────────────────────────

#[test]
fn tick_does_nothing_when_idle() {
    let mut s = GameState::new(Settings::new(80, 22), SHIP, ALIEN);
    let before: Vec<i32> = s.fleet.aliens.iter().map(|a| a.rect.x).collect();
    s.ship.moving_right = true;
    let report = tick(&mut s);
    let after: Vec<i32> = s.fleet.aliens.iter().map(|a| a.rect.x).collect();
    assert_eq!(report, FrameReport::default());
    assert_eq!(before, after);
    assert_eq!(s.ship.rect.x, 38);
    assert_eq!(s.frame, 0);
}

#[test]
fn tick_increments_frame_when_active() {
    let mut s = make_state();
    tick(&mut s);
    tick(&mut s);
    assert_eq!(s.frame, 2);
}

#[test]
fn tick_moves_ship_and_fleet() {
    let mut s = make_state();
    s.ship.moving_left = true;
    for _ in 0..5 {
        tick(&mut s);
    }
    assert_eq!(s.ship.rect.x, 33);
    assert_eq!(s.fleet.aliens[0].rect.x, 4); // 3 + 5 × 0.2
}

// ── tick — bullets ────────────────────────────────────────────────────────────

#[test]
fn bullet_pruned_after_leaving_top() {
    let mut s = make_state();
    s.bullets.push(bullet_at(1, 0));
    tick(&mut s); // y = -0.6, still touching row 0
    assert_eq!(s.bullets.len(), 1);
    tick(&mut s); // y = -1.2, gone
    assert!(s.bullets.is_empty());
}

#[test]
fn bullet_rises_every_tick_and_is_removed_once() {
    let mut s = make_state();
    s.bullets.push(bullet_at(1, 19));
    let mut last = s.bullets[0].y;
    let mut ticks = 0;
    while !s.bullets.is_empty() {
        tick(&mut s);
        ticks += 1;
        if let Some(b) = s.bullets.first() {
            assert!(b.y < last);
            last = b.y;
        }
        assert!(ticks < 100, "bullet never left the screen");
    }
    for _ in 0..10 {
        tick(&mut s);
        assert!(s.bullets.is_empty());
    }
}

// ── bullet ↔ alien ────────────────────────────────────────────────────────────

#[test]
fn bullet_and_alien_destroy_each_other() {
    let mut s = make_state();
    s.fleet.aliens = vec![Alien::new(ALIEN, 10.0, 0.0), Alien::new(ALIEN, 40.0, 6.0)];
    s.bullets = vec![bullet_at(11, 0)];

    let killed = check_bullet_alien_collisions(&mut s);

    assert_eq!(killed, 1);
    assert!(s.bullets.is_empty());
    assert_eq!(s.fleet.len(), 1);
    assert_eq!(s.stats.score, 50);
    assert_eq!(s.stats.high_score, 50);
    assert_eq!(s.scoreboard.score_text, "50");
    assert_eq!(s.scoreboard.high_score_text, "50");
}

#[test]
fn miss_changes_nothing() {
    let mut s = make_state();
    s.fleet.aliens = vec![Alien::new(ALIEN, 10.0, 4.0)];
    s.bullets = vec![bullet_at(13, 4)];
    assert_eq!(check_bullet_alien_collisions(&mut s), 0);
    assert_eq!(s.bullets.len(), 1);
    assert_eq!(s.stats.score, 0);
}

#[test]
fn high_score_kept_when_not_beaten() {
    let mut s = make_state();
    s.stats.high_score = 1_000;
    s.fleet.aliens = vec![Alien::new(ALIEN, 10.0, 4.0)];
    s.bullets = vec![bullet_at(10, 5)];
    check_bullet_alien_collisions(&mut s);
    assert_eq!(s.stats.score, 50);
    assert_eq!(s.stats.high_score, 1_000);
}

#[test]
fn one_bullet_kills_one_alien() {
    let mut s = make_state();
    s.fleet.aliens = vec![Alien::new(ALIEN, 10.0, 4.0), Alien::new(ALIEN, 10.0, 4.0)];
    s.bullets = vec![bullet_at(11, 4)];
    assert_eq!(check_bullet_alien_collisions(&mut s), 1);
    assert_eq!(s.fleet.len(), 1);
}

#[test]
fn second_bullet_on_same_alien_survives() {
    let mut s = make_state();
    s.fleet.aliens = vec![Alien::new(ALIEN, 10.0, 4.0), Alien::new(ALIEN, 40.0, 4.0)];
    s.bullets = vec![bullet_at(10, 4), bullet_at(12, 5)];
    assert_eq!(check_bullet_alien_collisions(&mut s), 1);
    assert_eq!(s.bullets.len(), 1);
    assert_eq!(s.bullets[0].rect.x, 12);
}

#[test]
fn every_kill_scores_current_points() {
    let mut s = make_state();
    s.settings.increase_speed(); // 55 points
    s.fleet.aliens = vec![
        Alien::new(ALIEN, 10.0, 4.0),
        Alien::new(ALIEN, 20.0, 4.0),
        Alien::new(ALIEN, 30.0, 4.0),
    ];
    s.bullets = vec![bullet_at(10, 4), bullet_at(21, 4)];
    assert_eq!(check_bullet_alien_collisions(&mut s), 2);
    assert_eq!(s.stats.score, 110);
}

#[test]
fn score_saturates_at_maximum_points() {
    let mut s = make_state();
    for _ in 0..200 {
        s.settings.increase_speed();
    }
    s.stats.score = u32::MAX - 10;
    s.fleet.aliens = vec![
        Alien::new(ALIEN, 10.0, 4.0),
        Alien::new(ALIEN, 20.0, 4.0),
        Alien::new(ALIEN, 30.0, 4.0),
    ];
    s.bullets = vec![bullet_at(10, 4), bullet_at(21, 4)];
    assert_eq!(check_bullet_alien_collisions(&mut s), 2);
    assert_eq!(s.stats.score, u32::MAX);
    assert_eq!(s.stats.high_score, u32::MAX);
    assert_eq!(s.scoreboard.score_text, "4,294,967,290");
}

// ── wave clear ────────────────────────────────────────────────────────────────

#[test]
fn last_alien_destroyed_starts_next_level() {
    let mut s = make_state();
    s.fleet.aliens = vec![Alien::new(ALIEN, 10.0, 0.0)];
    s.bullets = vec![bullet_at(11, 0), bullet_at(50, 8)];

    let report = resolve_collisions(&mut s);

    assert_eq!(report.aliens_destroyed, 1);
    assert!(report.wave_cleared);
    assert!(!report.ship_hit);
    assert!(s.bullets.is_empty());
    assert_eq!(s.fleet.len(), 60);
    assert_eq!(s.stats.level, 2);
    assert_eq!(s.scoreboard.level_text, "2");
    assert_eq!(s.settings.alien_points, 55);
    assert!((s.settings.ship_speed - 1.1).abs() < 1e-4);
    assert!((s.settings.bullet_speed - 0.66).abs() < 1e-4);
}

#[test]
fn wave_clear_keeps_fleet_direction() {
    let mut s = make_state();
    s.settings.fleet_direction = Direction::Left;
    s.fleet.clear();
    resolve_collisions(&mut s);
    assert_eq!(s.settings.fleet_direction, Direction::Left);
}

// ── ship ↔ alien ──────────────────────────────────────────────────────────────

#[test]
fn ship_hit_with_spare_ships_resets_wave() {
    let mut s = make_state();
    s.stats.ships_left = 2;
    s.ship.x = 0.0;
    s.ship.rect.x = 0;
    s.fleet.aliens = vec![Alien::new(ALIEN, 1.0, 19.0)];
    s.bullets = vec![bullet_at(50, 8)];

    let report = resolve_collisions(&mut s);

    assert!(report.ship_hit);
    assert!(!report.game_over);
    assert_eq!(s.stats.ships_left, 1);
    assert_eq!(s.scoreboard.ships, 1);
    assert!(s.bullets.is_empty());
    assert_eq!(s.fleet.len(), 60);
    assert_eq!(s.ship.rect.x, 38);
    assert!(s.stats.game_active);
    assert_eq!(s.phase(), Phase::Recovering);
}

#[test]
fn hit_recovery_freezes_world_then_resumes() {
    let mut s = make_state();
    s.stats.ships_left = 2;
    s.fleet.aliens = vec![Alien::new(ALIEN, 38.0, 20.0)];
    tick(&mut s);
    assert_eq!(s.phase(), Phase::Recovering);

    let frozen: Vec<i32> = s.fleet.aliens.iter().map(|a| a.rect.x).collect();
    s.ship.moving_right = true;
    for _ in 0..s.settings.hit_pause_ticks() {
        assert_eq!(s.phase(), Phase::Recovering);
        tick(&mut s);
    }
    let still: Vec<i32> = s.fleet.aliens.iter().map(|a| a.rect.x).collect();
    assert_eq!(frozen, still);
    assert_eq!(s.ship.rect.x, 38);

    assert_eq!(s.phase(), Phase::Active);
    tick(&mut s);
    assert_eq!(s.ship.rect.x, 39);
}

#[test]
fn losing_last_ship_ends_game() {
    let mut s = make_state();
    s.stats.ships_left = 1;
    s.fleet.aliens = vec![Alien::new(ALIEN, 38.0, 19.0)];
    s.bullets = vec![bullet_at(50, 8)];

    let report = resolve_collisions(&mut s);

    assert!(report.ship_hit);
    assert!(report.game_over);
    assert_eq!(s.stats.ships_left, 0);
    assert!(!s.stats.game_active);
    assert!(s.mouse_visible);
    assert_eq!(s.fleet.len(), 1); // no rebuild
    assert_eq!(s.phase(), Phase::Idle);
}

#[test]
fn game_over_keeps_high_score() {
    let mut s = make_state();
    s.stats.ships_left = 1;
    s.stats.score = 700;
    s.stats.high_score = 700;
    ship_hit(&mut s);
    assert_eq!(s.stats.high_score, 700);
}

// ── alien ↔ bottom ────────────────────────────────────────────────────────────

#[test]
fn alien_reaching_bottom_costs_a_ship() {
    let mut s = make_state();
    s.fleet.aliens = vec![Alien::new(ALIEN, 60.0, 20.0)];
    let report = resolve_collisions(&mut s);
    assert!(report.ship_hit);
    assert_eq!(s.stats.ships_left, 2);
    assert_eq!(s.fleet.len(), 60);
}

#[test]
fn one_ship_lost_per_frame() {
    let mut s = make_state();
    // One alien on the ship, two more on the bottom edge.
    s.fleet.aliens = vec![
        Alien::new(ALIEN, 38.0, 20.0),
        Alien::new(ALIEN, 5.0, 20.0),
        Alien::new(ALIEN, 60.0, 21.0),
    ];
    resolve_collisions(&mut s);
    assert_eq!(s.stats.ships_left, 2);
}

#[test]
fn alien_above_bottom_is_harmless() {
    let mut s = make_state();
    s.fleet.aliens = vec![Alien::new(ALIEN, 60.0, 19.0)];
    let report = resolve_collisions(&mut s);
    assert!(!report.ship_hit);
    assert_eq!(s.stats.ships_left, 3);
}

// ── fleet edges through tick ──────────────────────────────────────────────────

#[test]
fn fleet_flips_once_per_frame() {
    let mut s = make_state();
    s.fleet.aliens = vec![
        Alien::new(ALIEN, 0.0, 2.0),
        Alien::new(ALIEN, 77.0, 2.0),
        Alien::new(ALIEN, 77.0, 6.0),
    ];
    tick(&mut s);
    assert_eq!(s.settings.fleet_direction, Direction::Left);
    assert_eq!(s.fleet.aliens[0].rect.y, 3);
    assert_eq!(s.fleet.aliens[2].rect.y, 7);
}

#[test]
fn direction_constant_away_from_edges() {
    let mut s = make_state();
    for _ in 0..30 {
        tick(&mut s);
        assert_eq!(s.settings.fleet_direction, Direction::Right);
    }
}

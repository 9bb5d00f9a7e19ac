//! End-to-end gameplay scenarios driven through the engine

use astro_drift::GameEngine;
use astro_drift::consts::{FRAME_DT, SHIP_SIZE};
use astro_drift::renderer::CommandRecorder;
use astro_drift::sim::{
    Asteroid, Body, BulletOrigin, FrameInput, GameEvent, PowerUp, PowerUpKind, Weapon,
    WeaponProfile,
};
use glam::Vec2;

/// Engine with an empty field and every spawner switched off
fn quiet_engine() -> GameEngine<CommandRecorder> {
    let mut engine = GameEngine::with_seed(CommandRecorder::new(), 800.0, 600.0, 2024);
    let s = engine.state_mut();
    s.asteroids.clear();
    s.enemies.clear();
    s.tuning.asteroids.replenish_below = 0;
    s.tuning.power_ups.asteroid_drop_chance = 0.0;
    s.tuning.power_ups.enemy_drop_chance = 0.0;
    s.enemy_spawn_timer = f32::INFINITY;
    s.power_up_spawn_timer = f32::INFINITY;
    engine.start();
    engine
}

fn still_asteroid(pos: Vec2, size: f32) -> Asteroid {
    Asteroid {
        body: Body::new(pos, Vec2::ZERO, size, 0.0),
        health: 2,
        spin: 0.0,
        outline: [1.0; 8],
    }
}

fn power_up_at(pos: Vec2, kind: PowerUpKind) -> PowerUp {
    PowerUp {
        body: Body::new(pos, Vec2::ZERO, 15.0, 0.0),
        kind,
        active: true,
        duration: 10.0,
    }
}

#[test]
fn test_asteroid_contact_costs_a_life() {
    let mut engine = quiet_engine();
    let center = engine.state().center();
    // Ship faces up; asteroid just inside contact range ahead of it
    let ahead = center + Vec2::new(0.0, -(SHIP_SIZE + 30.0 - 1.0));
    engine.state_mut().asteroids.push(still_asteroid(ahead, 30.0));
    engine.state_mut().ship.body.pos = center + Vec2::new(5.0, 0.0);
    engine.state_mut().asteroids[0].body.pos += Vec2::new(5.0, 0.0);

    assert!(engine.step(FRAME_DT, &FrameInput::default()));

    let s = engine.state();
    assert_eq!(s.ship.lives, 2);
    assert!(s.ship.is_invulnerable);
    assert_eq!(s.ship.body.pos, center);
    assert!(s.events.contains(&GameEvent::ShipHit { lives_left: 2 }));
}

#[test]
fn test_contact_just_out_of_range_is_harmless() {
    let mut engine = quiet_engine();
    let center = engine.state().center();
    let ahead = center + Vec2::new(0.0, -(SHIP_SIZE + 30.0 + 1.0));
    engine.state_mut().asteroids.push(still_asteroid(ahead, 30.0));

    engine.step(FRAME_DT, &FrameInput::default());
    assert_eq!(engine.state().ship.lives, 3);
}

#[test]
fn test_multi_shot_two_fires_three_bullets() {
    let mut engine = quiet_engine();
    engine.state_mut().ship.multi_shot_level = 2;
    let input = FrameInput {
        fire: true,
        ..Default::default()
    };
    engine.step(FRAME_DT, &input);

    let bullets: Vec<_> = engine.state().player_bullets().collect();
    assert_eq!(bullets.len(), 3);
    for b in bullets {
        assert_eq!(b.damage, 1);
        assert!((b.body.vel.length() - 400.0).abs() < 1e-2);
    }
}

#[test]
fn test_weapon_rate_limit_across_frames() {
    let mut engine = quiet_engine();
    let input = FrameInput {
        fire: true,
        ..Default::default()
    };
    // Clock reads 100, 200, 300, 400, 500 ms; basic cooldown is 333 ms
    for _ in 0..4 {
        engine.step(0.1, &input);
    }
    assert_eq!(engine.state().player_bullets().count(), 1);
    engine.step(0.1, &input);
    assert_eq!(engine.state().player_bullets().count(), 2);
}

#[test]
fn test_enemy_kill_crossing_threshold_levels_up() {
    let mut engine = quiet_engine();
    engine.state_mut().score = 900;
    engine.state_mut().enemy_spawn_timer = f32::INFINITY;

    // Stage an enemy far from the ship with a player bullet on top of it
    let mut fresh = GameEngine::with_seed(CommandRecorder::new(), 800.0, 600.0, 1);
    let mut enemy = fresh.state_mut().enemies.remove(0);
    enemy.body.pos = Vec2::new(100.0, 100.0);
    enemy.health = 1;
    let bullet = Weapon::basic().make_bullet(Vec2::new(100.0, 100.0), 0.0, BulletOrigin::Player);

    let s = engine.state_mut();
    s.enemies.push(enemy);
    s.bullets.push(bullet);

    engine.step(FRAME_DT, &FrameInput::default());

    let s = engine.state();
    assert_eq!(s.score, 1150);
    assert_eq!(s.level, 2);
    // Reinforcements: one per new level number
    assert_eq!(s.enemies.len(), 2);
    assert!(s.events.contains(&GameEvent::LevelUp(2)));
}

#[test]
fn test_second_weapon_pickup_restarts_countdown() {
    let mut engine = quiet_engine();
    let center = engine.state().center();
    engine
        .state_mut()
        .power_ups
        .push(power_up_at(center, PowerUpKind::Weapon));
    engine.step(0.1, &FrameInput::default());
    assert_eq!(engine.state().ship.weapon_profile(), Some(WeaponProfile::Advanced));

    // Five seconds in, grab another
    for _ in 0..49 {
        engine.step(0.1, &FrameInput::default());
    }
    engine
        .state_mut()
        .power_ups
        .push(power_up_at(center, PowerUpKind::Weapon));
    engine.step(0.1, &FrameInput::default());

    // Eleven seconds after the first pickup it still holds
    for _ in 0..60 {
        engine.step(0.1, &FrameInput::default());
    }
    assert_eq!(engine.state().ship.weapon_profile(), Some(WeaponProfile::Advanced));

    // Past ten seconds from the second pickup it reverts
    for _ in 0..45 {
        engine.step(0.1, &FrameInput::default());
    }
    assert_eq!(engine.state().ship.weapon_profile(), Some(WeaponProfile::Basic));
    assert!(engine.state().ship.effects.is_idle());
}

#[test]
fn test_dispose_cancels_pending_speed_reversion() {
    let mut engine = quiet_engine();
    let center = engine.state().center();
    engine
        .state_mut()
        .power_ups
        .push(power_up_at(center, PowerUpKind::Speed));
    engine.step(0.1, &FrameInput::default());
    let boosted = engine.state().ship.max_thrust;
    assert!(boosted > engine.state().ship.base_max_thrust);

    engine.dispose();
    assert!(engine.state().ship.effects.is_idle());
    assert!(!engine.step(0.1, &FrameInput::default()));
    assert_eq!(engine.state().ship.max_thrust, boosted);
}

#[test]
fn test_resize_to_zero_keeps_running() {
    let mut engine = GameEngine::with_seed(CommandRecorder::new(), 800.0, 600.0, 77);
    engine.start();
    engine.resize(0.0, 0.0);
    let demo = FrameInput {
        demo: true,
        ..Default::default()
    };
    for _ in 0..120 {
        engine.step(FRAME_DT, &demo);
        engine.surface_mut().take();
    }
    let s = engine.state();
    assert_eq!(s.ship.body.pos, Vec2::ZERO);
    assert!(s.asteroids.iter().all(|a| a.body.pos == Vec2::ZERO));
}

#[test]
fn test_hud_reflects_score_after_step() {
    let mut engine = quiet_engine();
    engine.state_mut().score = 4200;
    engine.step(FRAME_DT, &FrameInput::default());
    assert!(engine.surface().texts().any(|t| t == "Score: 4200"));
    assert!(engine.surface().is_balanced());
}

#[test]
fn test_demo_run_is_reproducible() {
    let demo = FrameInput {
        demo: true,
        ..Default::default()
    };
    let run = || {
        let mut engine = GameEngine::with_seed(CommandRecorder::new(), 800.0, 600.0, 31337);
        engine.start();
        for _ in 0..600 {
            engine.step(FRAME_DT, &demo);
            engine.surface_mut().take();
        }
        engine.state().snapshot()
    };
    assert_eq!(run(), run());
}

//! Fixed timestep simulation tick
//!
//! Advances actors, spawns enemies, handles level progression and resolves
//! collisions. Collision outcomes are computed against the post-move
//! collections first and removals are applied once afterwards, so no entity
//! is skipped or processed twice when several hits land in the same tick.

use glam::Vec2;
use rand::Rng;

use super::enemy::EnemyKind;
use super::state::{GameEvent, GameState};
use crate::consts::SPAWN_MARGIN;
use crate::input::InputState;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &InputState, dt_ms: f64) {
    if !state.is_active() {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;
    state.time_ms += dt_ms;
    let now = state.time_ms;
    let projectile_speed = state.tuning.projectile_speed;

    // Actors
    state.player.update(input, &state.arena, now, projectile_speed);

    for enemy in &mut state.enemies {
        enemy.update(&state.arena, now, projectile_speed);
    }
    let before = state.enemies.len();
    state.enemies.retain(|e| !e.has_escaped());
    for _ in state.enemies.len()..before {
        state.events.push(GameEvent::EnemyEscaped);
    }

    // Effects
    for explosion in &mut state.explosions {
        explosion.advance();
    }
    state.explosions.retain(|e| !e.is_expired());

    maybe_spawn_enemy(state);
    check_level_up(state);
    resolve_collisions(state);
}

/// Roll for a new enemy at the right edge
fn maybe_spawn_enemy(state: &mut GameState) {
    let chance = state.tuning.spawn_chance(state.level);
    if !state.rng().random_bool(chance) {
        return;
    }

    let strong_chance = state.tuning.strong_enemy_chance;
    let kind = if state.rng().random_bool(strong_chance) {
        EnemyKind::Strong
    } else {
        EnemyKind::Basic
    };
    let band = (state.arena.height - 2.0 * SPAWN_MARGIN).max(0.0);
    let y = state.rng().random::<f32>() * band + SPAWN_MARGIN;
    let x = state.arena.width;
    state.spawn_enemy(kind, Vec2::new(x, y));
}

/// One level per threshold crossed, checked once per tick
fn check_level_up(state: &mut GameState) {
    if state.score > state.level as u64 * state.tuning.level_score_threshold {
        state.level += 1;
        state.game_speed += state.tuning.game_speed_per_level;
        state.events.push(GameEvent::LevelUp { level: state.level });
        log::info!("Level {} (speed {:.1})", state.level, state.game_speed);
    }
}

/// Resolve player shots, enemy shots and body contact, in that order
pub fn resolve_collisions(state: &mut GameState) {
    resolve_player_shots(state);
    resolve_enemy_shots(state);
    resolve_body_contact(state);
}

/// Each player projectile hits at most one enemy: the first one (collection
/// order) it overlaps that is still alive this tick.
fn resolve_player_shots(state: &mut GameState) {
    let mut spent_bullets = vec![false; state.player.bullets.len()];
    let mut destroyed = vec![false; state.enemies.len()];

    for (bi, bullet) in state.player.bullets.iter().enumerate() {
        let rect = bullet.rect();
        let target = state
            .enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !destroyed[*ei] && rect.overlaps(&enemy.rect()))
            .map(|(ei, _)| ei);

        if let Some(ei) = target {
            spent_bullets[bi] = true;
            if state.enemies[ei].take_damage() {
                destroyed[ei] = true;
            }
        }
    }

    let mut spent = spent_bullets.iter();
    state.player.bullets.retain(|_| !spent.next().copied().unwrap_or(false));

    let kills: Vec<(EnemyKind, u64, Vec2)> = state
        .enemies
        .iter()
        .zip(&destroyed)
        .filter(|(_, gone)| **gone)
        .map(|(e, _)| (e.kind, e.points(), e.center()))
        .collect();

    let mut gone = destroyed.iter();
    state.enemies.retain(|_| !gone.next().copied().unwrap_or(false));

    for (kind, points, center) in kills {
        state.score += points;
        state.events.push(GameEvent::EnemyKilled { kind, points });
        state.spawn_explosion(center);
    }
}

/// Every enemy projectile overlapping the player costs a life
fn resolve_enemy_shots(state: &mut GameState) {
    let player_rect = state.player.rect();
    let mut hits = 0;

    for enemy in &mut state.enemies {
        let before = enemy.bullets.len();
        enemy.bullets.retain(|b| !b.rect().overlaps(&player_rect));
        hits += before - enemy.bullets.len();
    }

    let center = state.player.center();
    for _ in 0..hits {
        state.spawn_explosion(center);
        state.lose_life();
    }
}

/// Ramming an enemy destroys it (no points) and costs a life
fn resolve_body_contact(state: &mut GameState) {
    let player_rect = state.player.rect();
    let rammed: Vec<Vec2> = state
        .enemies
        .iter()
        .filter(|e| e.rect().overlaps(&player_rect))
        .map(|e| e.center())
        .collect();
    if rammed.is_empty() {
        return;
    }

    state.enemies.retain(|e| !e.rect().overlaps(&player_rect));
    for center in rammed {
        state.spawn_explosion(center);
        state.lose_life();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT_MS;
    use crate::input::Action;
    use crate::sim::enemy::MovePattern;
    use crate::sim::projectile::{Owner, Projectile};
    use crate::sim::state::{Arena, GamePhase};
    use crate::tuning::Tuning;

    /// Active session with random spawning switched off
    fn quiet_state() -> GameState {
        let tuning = Tuning {
            spawn_base_rate: 0.0,
            spawn_rate_per_level: 0.0,
            ..Tuning::default()
        };
        let mut state = GameState::new(Arena::default(), tuning, 12345);
        state.start();
        state
    }

    /// Deterministic enemy: straight line, 1 px/tick
    fn place_enemy(state: &mut GameState, kind: EnemyKind, x: f32, y: f32) {
        state.spawn_enemy(kind, Vec2::new(x, y));
        let enemy = state.enemies.last_mut().unwrap();
        enemy.pattern = MovePattern::Straight;
        enemy.speed = 1.0;
    }

    fn player_shot(state: &mut GameState, x: f32, y: f32) {
        state
            .player
            .bullets
            .push(Projectile::new(Vec2::new(x, y), 1.0, 8.0, Owner::Player));
    }

    fn step(state: &mut GameState) {
        tick(state, &InputState::new(), SIM_DT_MS);
    }

    #[test]
    fn test_session_starts_clean() {
        let state = quiet_state();
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!((state.lives, state.score, state.level), (3, 0, 1));
    }

    #[test]
    fn test_tick_is_noop_unless_active() {
        let mut state = GameState::new(Arena::default(), Tuning::default(), 1);
        let mut input = InputState::new();
        input.press(Action::Right);
        let x = state.player.pos.x;
        tick(&mut state, &input, SIM_DT_MS);
        assert_eq!(state.player.pos.x, x);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_shot_kills_basic_enemy() {
        let mut state = quiet_state();
        place_enemy(&mut state, EnemyKind::Basic, 400.0, 100.0);
        player_shot(&mut state, 410.0, 110.0);

        step(&mut state);

        assert!(state.enemies.is_empty());
        assert!(state.player.bullets.is_empty());
        assert_eq!(state.score, 100);
        assert_eq!(state.explosions.len(), 1);
        // Enemy moved 1px left before the hit
        assert_eq!(state.explosions[0].origin, Vec2::new(399.0 + 17.5, 117.5));
        assert!(state.events.contains(&GameEvent::EnemyKilled {
            kind: EnemyKind::Basic,
            points: 100
        }));
    }

    #[test]
    fn test_strong_enemy_takes_three_hits() {
        let mut state = quiet_state();
        place_enemy(&mut state, EnemyKind::Strong, 400.0, 100.0);

        player_shot(&mut state, 410.0, 110.0);
        step(&mut state);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].health, 2);
        assert_eq!(state.score, 0);

        player_shot(&mut state, 400.0, 105.0);
        player_shot(&mut state, 400.0, 120.0);
        step(&mut state);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 300);
    }

    #[test]
    fn test_extra_shot_passes_through_destroyed_enemy() {
        let mut state = quiet_state();
        place_enemy(&mut state, EnemyKind::Basic, 400.0, 100.0);
        player_shot(&mut state, 410.0, 105.0);
        player_shot(&mut state, 410.0, 120.0);

        step(&mut state);

        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 100);
        // The second shot found no live target and keeps flying
        assert_eq!(state.player.bullets.len(), 1);
        assert_eq!(state.player.bullets[0].pos.y, 120.0);
    }

    #[test]
    fn test_one_shot_damages_one_enemy() {
        let mut state = quiet_state();
        place_enemy(&mut state, EnemyKind::Basic, 400.0, 100.0);
        place_enemy(&mut state, EnemyKind::Basic, 400.0, 130.0);
        // Straddles both hulls (100..135 and 130..165)
        player_shot(&mut state, 410.0, 132.0);

        step(&mut state);

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].pos.y, 130.0);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_two_shots_two_kills_same_tick() {
        let mut state = quiet_state();
        place_enemy(&mut state, EnemyKind::Basic, 300.0, 100.0);
        place_enemy(&mut state, EnemyKind::Strong, 500.0, 300.0);
        place_enemy(&mut state, EnemyKind::Basic, 600.0, 200.0);
        state.enemies[1].health = 1;
        player_shot(&mut state, 310.0, 110.0);
        player_shot(&mut state, 510.0, 310.0);

        step(&mut state);

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].pos.x, 599.0);
        assert_eq!(state.score, 400);
        assert_eq!(state.explosions.len(), 2);
    }

    #[test]
    fn test_escape_awards_nothing() {
        let mut state = quiet_state();
        place_enemy(&mut state, EnemyKind::Strong, -34.5, 100.0);

        step(&mut state);

        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 0);
        assert!(state.explosions.is_empty());
        assert!(state.events.contains(&GameEvent::EnemyEscaped));
    }

    #[test]
    fn test_enemy_shot_on_last_life_ends_game() {
        let mut state = quiet_state();
        state.lives = 1;
        state.score = 500;
        place_enemy(&mut state, EnemyKind::Basic, 600.0, 100.0);
        let target = state.player.pos + Vec2::new(10.0, 10.0);
        state.enemies[0]
            .bullets
            .push(Projectile::new(target, -1.0, 8.0, Owner::Enemy));

        step(&mut state);

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Ended);
        assert!(state.enemies[0].bullets.iter().all(|b| b.pos.x > 100.0));
        assert_eq!(state.explosions.len(), 1);
        assert_eq!(state.explosions[0].origin, state.player.center());
        assert!(state.events.contains(&GameEvent::GameOver { final_score: 500 }));

        // Frozen afterwards
        place_enemy(&mut state, EnemyKind::Basic, 400.0, 100.0);
        player_shot(&mut state, 410.0, 110.0);
        step(&mut state);
        assert_eq!(state.score, 500);
        assert_eq!(state.phase, GamePhase::Ended);
    }

    #[test]
    fn test_enemy_shot_costs_one_life() {
        let mut state = quiet_state();
        place_enemy(&mut state, EnemyKind::Basic, 600.0, 100.0);
        let target = state.player.pos + Vec2::new(10.0, 10.0);
        state.enemies[0]
            .bullets
            .push(Projectile::new(target, -1.0, 8.0, Owner::Enemy));

        step(&mut state);

        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Active);
        assert!(state.events.contains(&GameEvent::PlayerHit { lives_left: 2 }));
    }

    #[test]
    fn test_body_contact_destroys_enemy_and_costs_life() {
        let mut state = quiet_state();
        let p = state.player.pos;
        place_enemy(&mut state, EnemyKind::Strong, p.x + 5.0, p.y + 5.0);

        step(&mut state);

        assert!(state.enemies.is_empty());
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 0);
        assert_eq!(state.explosions.len(), 1);
        assert_eq!(state.explosions[0].origin, Vec2::new(p.x + 4.0 + 17.5, p.y + 5.0 + 17.5));
    }

    #[test]
    fn test_level_up_on_threshold() {
        let mut state = quiet_state();
        state.score = 1000;
        step(&mut state);
        assert_eq!(state.level, 1);

        state.score = 1001;
        step(&mut state);
        assert_eq!(state.level, 2);
        assert_eq!(state.game_speed, 2.5);
        assert!(state.events.contains(&GameEvent::LevelUp { level: 2 }));

        // Next threshold is 2000
        step(&mut state);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn test_spawn_at_right_edge() {
        let mut state = quiet_state();
        state.tuning.spawn_base_rate = 1.0;
        state.tuning.strong_enemy_chance = 1.0;

        step(&mut state);

        assert_eq!(state.enemies.len(), 1);
        let enemy = &state.enemies[0];
        assert_eq!(enemy.kind, EnemyKind::Strong);
        assert_eq!(enemy.pos.x, state.arena.width);
        assert!(enemy.pos.y >= 50.0 && enemy.pos.y < state.arena.height - 50.0);
    }

    #[test]
    fn test_spawned_enemies_speed_up_with_level() {
        let mut state = quiet_state();
        state.game_speed = 4.0;
        state.spawn_enemy(EnemyKind::Basic, Vec2::new(800.0, 100.0));
        let speed = state.enemies[0].speed;
        assert!((1.0..=3.0).contains(&speed));
    }

    #[test]
    fn test_projectile_travel_over_ticks() {
        let mut state = quiet_state();
        player_shot(&mut state, 100.0, 50.0);
        for _ in 0..20 {
            step(&mut state);
        }
        assert_eq!(state.player.bullets[0].pos.x, 100.0 + 20.0 * 8.0);
        assert_eq!(state.player.bullets[0].owner, Owner::Player);
    }

    #[test]
    fn test_explosions_expire() {
        let mut state = quiet_state();
        state.spawn_explosion(Vec2::new(300.0, 300.0));
        for _ in 0..39 {
            step(&mut state);
        }
        assert_eq!(state.explosions.len(), 1);
        step(&mut state);
        assert!(state.explosions.is_empty());
    }

    #[test]
    fn test_clock_advances() {
        let mut state = quiet_state();
        step(&mut state);
        step(&mut state);
        assert_eq!(state.time_ticks, 2);
        assert!((state.time_ms - 2.0 * SIM_DT_MS).abs() < 1e-9);
    }
}

//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session deterministically. Entity removal
//! is mark-and-filter: the collision sweep only records hits and each
//! collection is filtered once afterwards, so removal order can never skip a
//! pair mid-iteration.

use glam::Vec2;
use rand::Rng;

use super::state::{Bullet, Enemy, GamePhase, GameState, Weapon};
use crate::consts::*;
use crate::{angle_to_dir, rotate_vec};

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    /// Aim target (cursor position in playfield coordinates)
    pub aim: Option<Vec2>,
    /// Fire request - consumed exactly once per tick
    pub fire: bool,
    /// Pause toggle (one-shot, e.g. opening the shop)
    pub pause: bool,
}

/// Signals raised by a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The enemy list emptied and the next wave was spawned
    pub wave_complete: bool,
    /// Player health reached zero this tick; the session is over
    pub game_over: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    // Pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return outcome;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    // No mutation while paused or after game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return outcome,
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    update_facing(state, input);
    update_player(state, input, dt);
    update_weapon(state, input, dt);
    update_bullets(state, dt);
    update_enemies(state, dt);

    resolve_bullet_hits(state);

    if resolve_player_hits(state) {
        state.phase = GamePhase::GameOver;
        outcome.game_over = true;
        log::info!(
            "game over: wave {} score {} coins {}",
            state.wave,
            state.score,
            state.coins
        );
        return outcome;
    }

    // Wave completion: the batch is cleared, bring on a bigger one
    if state.enemies.is_empty() {
        state.wave += 1;
        spawn_wave(state);
        outcome.wave_complete = true;
    }

    outcome
}

/// Turn the player toward the aim target (no-op when the cursor sits exactly
/// on the player's center)
fn update_facing(state: &mut GameState, input: &TickInput) {
    if let Some(aim) = input.aim {
        let to_aim = aim - state.player.center();
        if to_aim != Vec2::ZERO {
            state.player.facing = to_aim.y.atan2(to_aim.x);
        }
    }
}

/// Apply held movement keys, then clamp into the playfield. Clamping after
/// movement means no speed value can escape the bounds.
fn update_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let player = &mut state.player;
    let step = player.speed * dt;

    if input.move_left {
        player.pos.x -= step;
    }
    if input.move_right {
        player.pos.x += step;
    }
    if input.move_up {
        player.pos.y -= step;
    }
    if input.move_down {
        player.pos.y += step;
    }

    let max = Vec2::new(
        PLAYFIELD_WIDTH - player.size,
        PLAYFIELD_HEIGHT - player.size,
    );
    player.pos = player.pos.clamp(Vec2::ZERO, max);
}

/// Tick the fire cooldown and honor at most one fire request
fn update_weapon(state: &mut GameState, input: &TickInput, dt: f32) {
    state.player.fire_cooldown = (state.player.fire_cooldown - dt).max(0.0);

    if input.fire {
        fire(state);
    }
}

/// Emit bullets along the facing vector. Requests under the rate limit are
/// silently ignored.
fn fire(state: &mut GameState) {
    if state.player.fire_cooldown > 0.0 {
        return;
    }

    let origin = state.player.center();
    let base_vel = angle_to_dir(state.player.facing) * state.player.bullet_speed;

    match state.player.weapon {
        Weapon::Pistol => spawn_bullet(state, origin, base_vel),
        Weapon::Shotgun => {
            let pellets = state.tuning.shotgun_pellets.max(1);
            let spread = state.tuning.shotgun_spread;
            for i in 0..pellets {
                let offset = if pellets == 1 {
                    0.0
                } else {
                    -spread / 2.0 + spread * i as f32 / (pellets - 1) as f32
                };
                spawn_bullet(state, origin, rotate_vec(base_vel, offset));
            }
        }
    }

    state.player.fire_cooldown = state.player.weapon.fire_interval(&state.tuning);
}

fn spawn_bullet(state: &mut GameState, pos: Vec2, vel: Vec2) {
    let id = state.next_entity_id();
    state.bullets.push(Bullet {
        id,
        pos,
        vel,
        size: BULLET_SIZE,
    });
}

/// Advance bullets and drop the ones that left the playfield
fn update_bullets(state: &mut GameState, dt: f32) {
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel * dt;
    }
    state.bullets.retain(|b| {
        b.pos.x >= 0.0 && b.pos.x < PLAYFIELD_WIDTH && b.pos.y >= 0.0 && b.pos.y < PLAYFIELD_HEIGHT
    });
}

/// Displacement of one homing step toward the player. Zero when the enemy
/// sits exactly on the target (no divide-by-zero, no movement this tick).
fn homing_step(enemy_pos: Vec2, player_pos: Vec2, speed: f32, dt: f32) -> Vec2 {
    (player_pos - enemy_pos).normalize_or_zero() * speed * dt
}

fn update_enemies(state: &mut GameState, dt: f32) {
    let player_pos = state.player.pos;
    let speed = state.tuning.enemy_speed;
    for enemy in &mut state.enemies {
        enemy.pos += homing_step(enemy.pos, player_pos, speed, dt);
    }
}

/// Bullet-enemy overlap sweep. Each bullet matches at most one enemy and
/// each enemy at most one bullet per tick; matched pairs are removed in one
/// filter pass after the full sweep.
fn resolve_bullet_hits(state: &mut GameState) {
    let mut bullet_hit = vec![false; state.bullets.len()];
    let mut enemy_hit = vec![false; state.enemies.len()];
    let mut kills: u64 = 0;

    for (bi, bullet) in state.bullets.iter().enumerate() {
        let bullet_rect = bullet.rect();
        for (ei, enemy) in state.enemies.iter().enumerate() {
            if enemy_hit[ei] {
                continue;
            }
            if bullet_rect.overlaps(&enemy.rect()) {
                bullet_hit[bi] = true;
                enemy_hit[ei] = true;
                kills += 1;
                break;
            }
        }
    }

    if kills == 0 {
        return;
    }

    let mut bi = 0;
    state.bullets.retain(|_| {
        let keep = !bullet_hit[bi];
        bi += 1;
        keep
    });
    let mut ei = 0;
    state.enemies.retain(|_| {
        let keep = !enemy_hit[ei];
        ei += 1;
        keep
    });

    state.score += kills * state.tuning.kill_score;
    state.coins += kills * state.tuning.kill_coins;
}

/// Enemy-player contacts: each removes the enemy and applies fixed damage.
/// Returns true when health reached zero this tick.
fn resolve_player_hits(state: &mut GameState) -> bool {
    let player_rect = state.player.rect();
    let mut contacts: i32 = 0;

    state.enemies.retain(|enemy| {
        if enemy.rect().overlaps(&player_rect) {
            contacts += 1;
            false
        } else {
            true
        }
    });

    if contacts > 0 {
        state.player.health -= contacts * state.tuning.contact_damage;
        log::debug!(
            "player hit {} time(s), health {}",
            contacts,
            state.player.health
        );
    }

    state.player.health <= 0
}

/// Spawn the current wave's enemy batch at random playfield-edge positions
pub fn spawn_wave(state: &mut GameState) {
    let count = state.tuning.base_spawn_count + state.wave * state.tuning.spawn_per_wave;

    for _ in 0..count {
        let edge: u32 = state.rng.random_range(0..4);
        let pos = match edge {
            // Top
            0 => Vec2::new(state.rng.random_range(0.0..PLAYFIELD_WIDTH), -ENEMY_SIZE),
            // Right
            1 => Vec2::new(
                PLAYFIELD_WIDTH,
                state.rng.random_range(0.0..PLAYFIELD_HEIGHT),
            ),
            // Bottom
            2 => Vec2::new(
                state.rng.random_range(0.0..PLAYFIELD_WIDTH),
                PLAYFIELD_HEIGHT,
            ),
            // Left
            _ => Vec2::new(
                -ENEMY_SIZE,
                state.rng.random_range(0.0..PLAYFIELD_HEIGHT),
            ),
        };
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            pos,
            size: ENEMY_SIZE,
        });
    }

    log::debug!("wave {}: spawned {} enemies", state.wave, count);
}

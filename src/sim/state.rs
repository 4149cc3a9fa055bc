//! Game state and core simulation types
//!
//! All state for a session lives in [`GameState`]; the simulation owns no
//! globals, so sessions are cheap to construct and deterministic to replay.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Suspended (e.g. shop open) - ticks mutate nothing
    Paused,
    /// Run ended (health reached zero). Terminal except for restart.
    GameOver,
}

/// The player's weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Weapon {
    /// Single bullet along the facing vector
    #[default]
    Pistol,
    /// Several bullets fanned across the configured spread
    Shotgun,
}

impl Weapon {
    /// Minimum interval between shots (seconds)
    pub fn fire_interval(&self, tuning: &Tuning) -> f32 {
        match self {
            Weapon::Pistol => tuning.pistol_interval,
            Weapon::Shotgun => tuning.shotgun_interval,
        }
    }
}

/// The player square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub health: i32,
    /// Movement speed (px/s), upgradable
    pub speed: f32,
    /// Bullet launch speed (px/s), upgradable
    pub bullet_speed: f32,
    /// Facing angle in radians, updated from the aim target
    pub facing: f32,
    pub weapon: Weapon,
    /// Seconds until the weapon may fire again
    pub fire_cooldown: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                PLAYFIELD_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
                PLAYFIELD_HEIGHT - PLAYER_SIZE * 2.0,
            ),
            size: PLAYER_SIZE,
            health: tuning.max_health,
            speed: tuning.player_speed,
            bullet_speed: tuning.bullet_speed,
            facing: 0.0,
            weapon: Weapon::Pistol,
            fire_cooldown: 0.0,
        }
    }

    /// Center point (bullets originate here; aim is measured from here)
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A bullet entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Velocity (px/s)
    pub vel: Vec2,
    pub size: f32,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// An enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG (wave spawn placement only)
    pub rng: Pcg32,
    /// Balance values for this session
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Current wave index (0-based)
    pub wave: u32,
    /// Score
    pub score: u64,
    /// Spendable currency
    pub coins: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The player square
    pub player: Player,
    /// Live bullets (ascending id)
    pub bullets: Vec<Bullet>,
    /// Live enemies (ascending id)
    pub enemies: Vec<Enemy>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session with explicit tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            tuning,
            phase: GamePhase::Playing,
            wave: 0,
            score: 0,
            coins: 0,
            time_ticks: 0,
            bullets: Vec::new(),
            enemies: Vec::new(),
            next_id: 1,
        };

        // Wave 0 is on the field from the first tick
        super::tick::spawn_wave(&mut state);

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Restart after game over: reinitialize all collections and counters.
    /// The only valid transition out of [`GamePhase::GameOver`].
    pub fn restart(&mut self) {
        *self = Self::with_tuning(self.seed, self.tuning.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_playing_with_wave_zero() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.wave, 0);
        assert_eq!(
            state.enemies.len(),
            state.tuning.base_spawn_count as usize
        );
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_same_seed_spawns_identical_enemies() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        assert_eq!(a.enemies.len(), b.enemies.len());
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
        }
    }

    #[test]
    fn test_restart_resets_counters_and_collections() {
        let mut state = GameState::new(3);
        state.score = 500;
        state.coins = 120;
        state.wave = 4;
        state.player.health = 0;
        state.phase = GamePhase::GameOver;

        state.restart();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.coins, 0);
        assert_eq!(state.wave, 0);
        assert_eq!(state.player.health, state.tuning.max_health);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = GameState::new(99);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.enemies.len(), state.enemies.len());
        assert_eq!(back.player.pos, state.player.pos);
    }
}

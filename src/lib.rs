//! Swarm Arena - a top-down wave-survival arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, waves, game state)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one display-refresh tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Entity extents (all entities are axis-aligned squares)
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const ENEMY_SIZE: f32 = 32.0;
    pub const BULLET_SIZE: f32 = 8.0;
}

/// Rotate a vector by `angle` radians (standard 2D rotation)
#[inline]
pub fn rotate_vec(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Unit vector for an angle in radians
#[inline]
pub fn angle_to_dir(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

//! Data-driven game balance
//!
//! Every constant the gameplay variants disagree on lives here so a host can
//! swap value sets without touching the simulation.

use serde::{Deserialize, Serialize};

/// Balance knobs for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Movement ===
    /// Player movement speed (px/s)
    pub player_speed: f32,
    /// Enemy homing speed (px/s)
    pub enemy_speed: f32,
    /// Bullet speed (px/s)
    pub bullet_speed: f32,

    // === Health & damage ===
    /// Starting and maximum player health
    pub max_health: i32,
    /// Damage dealt by one enemy contact
    pub contact_damage: i32,

    // === Weapons ===
    /// Minimum interval between pistol shots (seconds)
    pub pistol_interval: f32,
    /// Minimum interval between shotgun shots (seconds)
    pub shotgun_interval: f32,
    /// Bullets per shotgun shot
    pub shotgun_pellets: u32,
    /// Total angular range of a shotgun shot (radians)
    pub shotgun_spread: f32,

    // === Economy ===
    /// Score awarded per enemy kill
    pub kill_score: u64,
    /// Coins awarded per enemy kill
    pub kill_coins: u64,

    // === Waves ===
    /// Enemies in wave 0
    pub base_spawn_count: u32,
    /// Extra enemies per wave
    pub spawn_per_wave: u32,

    // === Shop ===
    pub health_upgrade_cost: u64,
    /// Health restored per purchase (capped at max_health)
    pub health_upgrade_amount: i32,
    pub bullet_speed_upgrade_cost: u64,
    pub bullet_speed_upgrade_amount: f32,
    pub move_speed_upgrade_cost: u64,
    pub move_speed_upgrade_amount: f32,
    pub shotgun_cost: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 300.0,
            enemy_speed: 60.0,
            bullet_speed: 480.0,

            max_health: 100,
            contact_damage: 10,

            pistol_interval: 0.25,
            shotgun_interval: 0.5,
            shotgun_pellets: 3,
            shotgun_spread: std::f32::consts::FRAC_PI_3,

            kill_score: 10,
            kill_coins: 10,

            base_spawn_count: 5,
            spawn_per_wave: 5,

            health_upgrade_cost: 50,
            health_upgrade_amount: 25,
            bullet_speed_upgrade_cost: 100,
            bullet_speed_upgrade_amount: 60.0,
            move_speed_upgrade_cost: 200,
            move_speed_upgrade_amount: 30.0,
            shotgun_cost: 300,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

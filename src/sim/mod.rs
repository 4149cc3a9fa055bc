//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod upgrade;

pub use collision::Rect;
pub use state::{Bullet, Enemy, GamePhase, GameState, Player, Weapon};
pub use tick::{TickInput, TickOutcome, spawn_wave, tick};
pub use upgrade::{PurchaseError, Upgrade};

//! Shop purchases
//!
//! A HUD/shop host applies these between ticks as direct mutations of
//! player/weapon state; the simulation honors the result on the next tick.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, Weapon};

/// Purchasable upgrades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Upgrade {
    /// Restore a chunk of health, capped at max
    RestoreHealth,
    /// Permanently faster bullets
    BulletSpeed,
    /// Permanently faster movement
    MoveSpeed,
    /// Switch to the spread weapon
    Shotgun,
}

/// Why a purchase was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    /// Not enough coins; nothing was changed
    InsufficientCoins { cost: u64, coins: u64 },
    /// The session is over; purchases are ignored
    SessionOver,
}

impl std::fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PurchaseError::InsufficientCoins { cost, coins } => {
                write!(f, "insufficient coins: need {cost}, have {coins}")
            }
            PurchaseError::SessionOver => write!(f, "session is over"),
        }
    }
}

impl std::error::Error for PurchaseError {}

impl Upgrade {
    /// Coin cost of this upgrade
    pub fn cost(&self, state: &GameState) -> u64 {
        match self {
            Upgrade::RestoreHealth => state.tuning.health_upgrade_cost,
            Upgrade::BulletSpeed => state.tuning.bullet_speed_upgrade_cost,
            Upgrade::MoveSpeed => state.tuning.move_speed_upgrade_cost,
            Upgrade::Shotgun => state.tuning.shotgun_cost,
        }
    }
}

impl GameState {
    /// Buy an upgrade. Rejected purchases leave all state unchanged.
    pub fn purchase(&mut self, upgrade: Upgrade) -> Result<(), PurchaseError> {
        if self.phase == GamePhase::GameOver {
            return Err(PurchaseError::SessionOver);
        }

        let cost = upgrade.cost(self);
        if self.coins < cost {
            return Err(PurchaseError::InsufficientCoins {
                cost,
                coins: self.coins,
            });
        }
        self.coins -= cost;

        match upgrade {
            Upgrade::RestoreHealth => {
                self.player.health =
                    (self.player.health + self.tuning.health_upgrade_amount)
                        .min(self.tuning.max_health);
            }
            Upgrade::BulletSpeed => {
                self.player.bullet_speed += self.tuning.bullet_speed_upgrade_amount;
            }
            Upgrade::MoveSpeed => {
                self.player.speed += self.tuning.move_speed_upgrade_amount;
            }
            Upgrade::Shotgun => {
                self.player.weapon = Weapon::Shotgun;
            }
        }

        log::debug!("purchased {:?} for {} coins", upgrade, cost);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_coins_rejects_and_changes_nothing() {
        let mut state = GameState::new(1);
        state.coins = 10;
        let speed_before = state.player.speed;

        let result = state.purchase(Upgrade::MoveSpeed);

        assert!(matches!(
            result,
            Err(PurchaseError::InsufficientCoins { cost: 200, coins: 10 })
        ));
        assert_eq!(state.coins, 10);
        assert_eq!(state.player.speed, speed_before);
    }

    #[test]
    fn test_purchase_deducts_listed_cost() {
        let mut state = GameState::new(1);
        state.coins = 500;

        state.purchase(Upgrade::Shotgun).unwrap();

        assert_eq!(state.coins, 500 - state.tuning.shotgun_cost);
        assert_eq!(state.player.weapon, Weapon::Shotgun);
    }

    #[test]
    fn test_health_restore_caps_at_max() {
        let mut state = GameState::new(1);
        state.coins = 100;
        state.player.health = 90;

        state.purchase(Upgrade::RestoreHealth).unwrap();

        assert_eq!(state.player.health, state.tuning.max_health);
    }

    #[test]
    fn test_speed_upgrades_accumulate() {
        let mut state = GameState::new(1);
        state.coins = 1000;
        let base = state.player.bullet_speed;

        state.purchase(Upgrade::BulletSpeed).unwrap();
        state.purchase(Upgrade::BulletSpeed).unwrap();

        let expected = base + 2.0 * state.tuning.bullet_speed_upgrade_amount;
        assert!((state.player.bullet_speed - expected).abs() < 1e-4);
    }

    #[test]
    fn test_purchases_ignored_after_game_over() {
        let mut state = GameState::new(1);
        state.coins = 1000;
        state.phase = GamePhase::GameOver;

        assert!(matches!(
            state.purchase(Upgrade::RestoreHealth),
            Err(PurchaseError::SessionOver)
        ));
        assert_eq!(state.coins, 1000);
    }
}

//! Swarm Arena entry point
//!
//! Headless demo driver: runs a seeded session with a scripted autopilot and
//! logs its progress. Rendering and real input belong to a host; this binary
//! exists to exercise the simulation end to end.

use glam::Vec2;

use swarm_arena::consts::SIM_DT;
use swarm_arena::sim::{GamePhase, GameState, TickInput, Upgrade, tick};

/// Ten minutes of simulated play, tops
const MAX_TICKS: u64 = 60 * 60 * 10;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);

    log::info!("starting session with seed {seed}");
    let mut state = GameState::new(seed);

    for _ in 0..MAX_TICKS {
        let input = autopilot(&state);
        let outcome = tick(&mut state, &input, SIM_DT);

        if outcome.wave_complete {
            log::info!(
                "wave {} incoming: {} enemies, score {}, coins {}, health {}",
                state.wave,
                state.enemies.len(),
                state.score,
                state.coins,
                state.player.health
            );
            shop(&mut state);
        }

        if outcome.game_over {
            break;
        }
    }

    println!(
        "session over: wave {} score {} coins {} ({})",
        state.wave,
        state.score,
        state.coins,
        if state.phase == GamePhase::GameOver {
            "died"
        } else {
            "survived the time limit"
        }
    );
}

/// Trivial scripted player: aim at the nearest enemy, hold fire, and strafe
/// away from it.
fn autopilot(state: &GameState) -> TickInput {
    let center = state.player.center();
    let nearest = state
        .enemies
        .iter()
        .min_by(|a, b| {
            let da = (a.pos - center).length_squared();
            let db = (b.pos - center).length_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| e.pos + Vec2::splat(e.size / 2.0));

    let mut input = TickInput {
        fire: true,
        aim: nearest,
        ..TickInput::default()
    };

    if let Some(threat) = nearest {
        let away = center - threat;
        input.move_left = away.x < 0.0;
        input.move_right = away.x > 0.0;
        input.move_up = away.y < 0.0;
        input.move_down = away.y > 0.0;
    }

    input
}

/// Spend coins between waves, priciest unlock first
fn shop(state: &mut GameState) {
    use swarm_arena::sim::Weapon;

    for upgrade in [
        Upgrade::Shotgun,
        Upgrade::MoveSpeed,
        Upgrade::BulletSpeed,
        Upgrade::RestoreHealth,
    ] {
        if upgrade == Upgrade::Shotgun && state.player.weapon == Weapon::Shotgun {
            continue;
        }
        match state.purchase(upgrade) {
            Ok(()) => log::info!("bought {upgrade:?}, {} coins left", state.coins),
            Err(err) => log::debug!("skipped {upgrade:?}: {err}"),
        }
    }
}

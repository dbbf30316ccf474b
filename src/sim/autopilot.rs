//! Idle/demo controller
//!
//! Plays the game from snapshots alone, the same way a host would: it only
//! emits input events. Used by the headless runner and by soak tests.

use super::input::InputEvent;
use super::state::{GamePhase, WorldSnapshot};
use crate::settings::SimulationConfig;

/// How far below the target the player's centre may sink before flapping
const FLAP_SLACK: f32 = 10.0;

/// Vertical centre the player should hold
pub fn target_y(snapshot: &WorldSnapshot, config: &SimulationConfig) -> f32 {
    snapshot
        .next_unpassed()
        .map(|o| o.gap_center())
        .unwrap_or(config.ground_y() * 0.5)
}

/// Input to send this frame, if any.
///
/// Starts a run from Start, flaps while falling below the target, and leaves
/// GameOver alone so the host can inspect the final state.
pub fn decide(snapshot: &WorldSnapshot, config: &SimulationConfig) -> Option<InputEvent> {
    match snapshot.phase {
        GamePhase::Start => Some(InputEvent::tap()),
        GamePhase::GameOver => None,
        GamePhase::Playing => {
            let player = &snapshot.player;
            let center = player.pos.y + player.height * 0.5;
            let falling = player.vel.y >= 0.0;
            (falling && center > target_y(snapshot, config) + FLAP_SLACK)
                .then(InputEvent::tap)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::World;
    use crate::sim::tick::tick;

    #[test]
    fn test_starts_a_run() {
        let config = SimulationConfig::default();
        let world = World::new(config.clone(), 1);
        assert_eq!(decide(&world.snapshot(), &config), Some(InputEvent::tap()));
    }

    #[test]
    fn test_targets_next_gap() {
        let config = SimulationConfig::default();
        let mut world = World::new(config.clone(), 1);
        world.field.spawn_at(300.0, 100.0, &config);
        assert_eq!(target_y(&world.snapshot(), &config), 190.0);

        world.field.obstacles[0].passed = true;
        assert_eq!(target_y(&world.snapshot(), &config), 360.0);
    }

    #[test]
    fn test_clears_first_obstacle() {
        let config = SimulationConfig::default();
        for seed in [1, 2, 3, 42, 1234] {
            let mut world = World::new(config.clone(), seed);
            for _ in 0..(8 * 60) {
                let input: Vec<_> = decide(&world.snapshot(), &config).into_iter().collect();
                tick(&mut world, &input, 1.0 / 60.0);
            }
            assert!(world.score.value >= 1, "seed {seed} scored nothing");
        }
    }
}

//! Score counter and milestone detection

use serde::{Deserialize, Serialize};

use super::effects::{Effect, EffectEmitter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    pub value: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one passed obstacle.
    ///
    /// Emits `Score`, plus `Milestone` when milestones are enabled and the new
    /// value is a multiple of `period`. Returns whether a milestone was hit.
    pub fn on_obstacle_passed(
        &mut self,
        period: u32,
        milestones: bool,
        effects: &mut EffectEmitter,
    ) -> bool {
        self.value = self.value.saturating_add(1);
        effects.emit(Effect::Score { score: self.value });

        let milestone = milestones && period > 0 && self.value.is_multiple_of(period);
        if milestone {
            log::debug!("Milestone reached at {}", self.value);
            effects.emit(Effect::Milestone { score: self.value });
        }
        milestone
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

use serde::{Serialize, Deserialize};

use crate::rotation::{default_plan, RotationPlan};
use crate::segment::Configuration;
use crate::selector::SpinOutcome;

/// Everything the wheel page renders from. Only [`WheelState::apply`]
/// changes it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelState {
    pub configuration: Configuration,
    pub is_spinning: bool,
    /// Winner committed at spin time, shown once the animation ends.
    pub pending: Option<SpinOutcome>,
    pub last_result: Option<SpinOutcome>,
    pub rotation: f64,
    pub target: Option<RotationPlan>,
    pub show_confetti: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WheelAction {
    /// Carries the uniform draw for this spin.
    SpinRequested(f64),
    /// Animation frame update.
    Rotated(f64),
    SpinCompleted,
    ConfettiFinished,
    ResultClosed,
    ConfigurationLoaded(Configuration),
}

impl Default for WheelState {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl WheelState {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            is_spinning: false,
            pending: None,
            last_result: None,
            rotation: 0.0,
            target: None,
            show_confetti: false,
        }
    }

    /// A new spin is only accepted once the previous result has been closed.
    pub fn can_spin(&self) -> bool {
        !self.is_spinning && self.last_result.is_none() && !self.configuration.is_empty()
    }

    pub fn apply(&self, action: WheelAction) -> Self {
        let mut next = self.clone();
        match action {
            WheelAction::SpinRequested(draw) => {
                if !self.can_spin() {
                    log::debug!("Ignoring spin request while the wheel is busy");
                    return next;
                }
                match SpinOutcome::from_draw(&self.configuration, draw) {
                    Some(outcome) => next.start_spin(outcome),
                    None => log::warn!("Spin requested on an empty wheel"),
                }
            }
            WheelAction::Rotated(rotation) => {
                if self.is_spinning {
                    next.rotation = rotation;
                }
            }
            WheelAction::SpinCompleted => next.complete_spin(),
            WheelAction::ConfettiFinished => next.show_confetti = false,
            WheelAction::ResultClosed => {
                if !self.is_spinning {
                    next.last_result = None;
                    next.show_confetti = false;
                    next.rotation = 0.0;
                    next.target = None;
                }
            }
            WheelAction::ConfigurationLoaded(configuration) => {
                if self.is_spinning {
                    log::warn!("Configuration change ignored during a spin");
                } else {
                    next.configuration = configuration;
                }
            }
        }
        next
    }

    fn start_spin(&mut self, outcome: SpinOutcome) {
        log::info!(
            "🎡 WHEEL SPIN: {} won {} (draw {:.4})",
            outcome.segment.id,
            outcome.segment.label,
            outcome.draw
        );
        self.target = Some(default_plan(self.configuration.len(), outcome.index));
        self.is_spinning = true;
        self.pending = Some(outcome);
        self.last_result = None;
    }

    fn complete_spin(&mut self) {
        let Some(outcome) = self.pending.take() else {
            return;
        };
        if let Some(plan) = self.target {
            self.rotation = plan.final_rotation;
        }
        self.is_spinning = false;
        self.show_confetti = outcome.segment.is_major_prize;
        self.last_result = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::segment_under_pointer;

    #[test]
    fn test_spin_commits_winner_immediately() {
        let state = WheelState::default().apply(WheelAction::SpinRequested(0.151));
        assert!(state.is_spinning);
        assert_eq!(state.pending.as_ref().map(|o| o.segment.id.as_str()), Some("2"));
        assert_eq!(state.last_result, None);
        assert!(state.target.is_some());
    }

    #[test]
    fn test_second_request_ignored_while_spinning() {
        let spinning = WheelState::default().apply(WheelAction::SpinRequested(0.0));
        let again = spinning.apply(WheelAction::SpinRequested(0.999));
        assert_eq!(again, spinning);
    }

    #[test]
    fn test_completion_shows_result_and_confetti() {
        let done = WheelState::default()
            .apply(WheelAction::SpinRequested(0.1))
            .apply(WheelAction::SpinCompleted);
        assert!(!done.is_spinning);
        let result = done.last_result.as_ref().unwrap();
        assert_eq!(result.segment.id, "1");
        assert!(done.show_confetti);
        assert_eq!(
            segment_under_pointer(done.configuration.len(), done.rotation),
            Some(result.index)
        );

        let quiet = done.apply(WheelAction::ConfettiFinished);
        assert!(!quiet.show_confetti);
        assert!(quiet.last_result.is_some());
    }

    #[test]
    fn test_minor_prize_has_no_confetti() {
        let done = WheelState::default()
            .apply(WheelAction::SpinRequested(0.3))
            .apply(WheelAction::SpinCompleted);
        assert_eq!(done.last_result.as_ref().map(|o| o.segment.id.as_str()), Some("2"));
        assert!(!done.show_confetti);
    }

    #[test]
    fn test_close_resets_without_redraw() {
        let done = WheelState::default()
            .apply(WheelAction::SpinRequested(0.999))
            .apply(WheelAction::SpinCompleted);
        assert!(!done.can_spin());
        assert_eq!(done.apply(WheelAction::SpinRequested(0.0)), done);

        let closed = done.apply(WheelAction::ResultClosed);
        assert_eq!(closed.last_result, None);
        assert_eq!(closed.pending, None);
        assert_eq!(closed.rotation, 0.0);
        assert!(closed.can_spin());
    }

    #[test]
    fn test_close_ignored_mid_spin() {
        let spinning = WheelState::default()
            .apply(WheelAction::SpinRequested(0.6))
            .apply(WheelAction::Rotated(120.0));
        let still = spinning.apply(WheelAction::ResultClosed);
        assert_eq!(still, spinning);
        assert!(still.is_spinning);
        assert_eq!(still.rotation, 120.0);

        let done = still.apply(WheelAction::SpinCompleted);
        assert_eq!(done.last_result.as_ref().map(|o| o.segment.id.as_str()), Some("4"));
    }

    #[test]
    fn test_empty_wheel_never_spins() {
        let empty = WheelState::new(Configuration::new(Vec::new()));
        assert!(!empty.can_spin());
        assert_eq!(empty.apply(WheelAction::SpinRequested(0.4)), empty);
    }

    #[test]
    fn test_configuration_swap_blocked_mid_spin() {
        let custom = Configuration::new(Configuration::default().into_segments()[..3].to_vec());
        let spinning = WheelState::default().apply(WheelAction::SpinRequested(0.5));
        let unchanged = spinning.apply(WheelAction::ConfigurationLoaded(custom.clone()));
        assert_eq!(unchanged.configuration, Configuration::default());

        let idle = WheelState::default().apply(WheelAction::ConfigurationLoaded(custom.clone()));
        assert_eq!(idle.configuration, custom);
    }

    #[test]
    fn test_rotation_updates_only_while_spinning() {
        let idle = WheelState::default().apply(WheelAction::Rotated(90.0));
        assert_eq!(idle.rotation, 0.0);
        let spinning = WheelState::default()
            .apply(WheelAction::SpinRequested(0.2))
            .apply(WheelAction::Rotated(90.0));
        assert_eq!(spinning.rotation, 90.0);
    }
}

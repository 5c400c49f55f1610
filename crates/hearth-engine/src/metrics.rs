//! Per-episode reward and outcome counters.
//!
//! [`EpisodeMetrics`] is reset by every `new_episode()` and by replay,
//! and updated after each judged step.

use hearth_core::Verdict;
use hearth_judge::RewardBreakdown;

/// Running counters for the current episode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpisodeMetrics {
    /// Judged steps since the last reset.
    pub steps: u32,
    /// Sum of step rewards.
    pub total_reward: f64,
    /// Steps the simulator reported as failed.
    pub refused_actions: u32,
    /// Steps that paid a sub-goal success bonus.
    pub success_bonuses: u32,
    /// Steps that paid a distance-shaping bonus.
    pub shaping_bonuses: u32,
}

impl EpisodeMetrics {
    /// Fold one judged step into the counters.
    pub fn record(&mut self, verdict: &Verdict, breakdown: &RewardBreakdown) {
        self.steps += 1;
        self.total_reward += verdict.reward;
        if !verdict.action_succeeded {
            self.refused_actions += 1;
        }
        if breakdown.success_bonus != 0.0 {
            self.success_bonuses += 1;
        }
        if breakdown.shaping_bonus != 0.0 {
            self.shaping_bonuses += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = EpisodeMetrics::default();
        assert_eq!(m.steps, 0);
        assert_eq!(m.total_reward, 0.0);
        assert_eq!(m.refused_actions, 0);
        assert_eq!(m.success_bonuses, 0);
        assert_eq!(m.shaping_bonuses, 0);
    }

    #[test]
    fn record_counts_components() {
        let mut m = EpisodeMetrics::default();
        m.record(
            &Verdict {
                reward: 0.99,
                terminal: false,
                action_succeeded: true,
            },
            &RewardBreakdown {
                step_penalty: -0.01,
                success_bonus: 1.0,
                ..RewardBreakdown::default()
            },
        );
        m.record(
            &Verdict {
                reward: -0.03,
                terminal: false,
                action_succeeded: false,
            },
            &RewardBreakdown {
                step_penalty: -0.01,
                failure_penalty: -0.02,
                ..RewardBreakdown::default()
            },
        );
        assert_eq!(m.steps, 2);
        assert!((m.total_reward - 0.96).abs() < 1e-12);
        assert_eq!(m.refused_actions, 1);
        assert_eq!(m.success_bonuses, 1);
        assert_eq!(m.shaping_bonuses, 0);
    }
}

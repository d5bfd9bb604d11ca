/// Experience points awarded for each correct quiz answer.
pub const XP_PER_CORRECT: u32 = 20;

/// The learner's progress counters. Only XP ever changes in this scope;
/// the streak is an externally supplied display value and the daily
/// counters move with the (out-of-scope) word-learning history.
#[derive(Clone, Debug)]
pub struct Progress {
    pub total_xp: u32,
    pub streak_days: u32,
    pub daily_goal: u32,
    pub daily_progress: u32,
}

impl Default for Progress {
    /// Seeded demo profile; nothing persists across runs by design.
    fn default() -> Self {
        Self {
            total_xp: 1250,
            streak_days: 12,
            daily_goal: 5,
            daily_progress: 3,
        }
    }
}

impl Progress {
    pub fn award_xp(&mut self, amount: u32) {
        self.total_xp += amount;
    }

    /// Daily-goal completion in [0, 1] for the dashboard bar.
    pub fn goal_ratio(&self) -> f64 {
        if self.daily_goal == 0 {
            return 0.0;
        }
        (self.daily_progress as f64 / self.daily_goal as f64).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_xp_accumulates() {
        let mut progress = Progress::default();
        let before = progress.total_xp;
        progress.award_xp(XP_PER_CORRECT);
        progress.award_xp(XP_PER_CORRECT);
        assert_eq!(progress.total_xp, before + 2 * XP_PER_CORRECT);
    }

    #[test]
    fn goal_ratio_is_clamped() {
        let mut progress = Progress {
            daily_goal: 5,
            daily_progress: 3,
            ..Progress::default()
        };
        assert!((progress.goal_ratio() - 0.6).abs() < f64::EPSILON);

        progress.daily_progress = 12;
        assert_eq!(progress.goal_ratio(), 1.0);
    }
}

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Learning metrics for one interactive session.
///
/// Fields are only changed through [`UserProgress::increment`], which keeps
/// every counter at or above zero.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserProgress {
    pub streak: u32,
    pub topics_mastered: u32,
    pub questions_answered: u32,
    pub study_time_hours: u32,
    pub level: Level,
    pub progress_percent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressField {
    Streak,
    TopicsMastered,
    QuestionsAnswered,
    StudyTimeHours,
    ProgressPercent,
}

impl UserProgress {
    pub fn new() -> Self {
        Self::initialize(&mut rand::thread_rng())
    }

    // Seed ranges for a brand new session
    pub fn initialize<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            streak: rng.gen_range(3..=7),
            topics_mastered: rng.gen_range(5..=12),
            questions_answered: rng.gen_range(20..=50),
            study_time_hours: rng.gen_range(10..=30),
            level: Level::Intermediate,
            progress_percent: rng.gen_range(40..=75),
        }
    }

    /// Bounded add. Every field floors at 0; `progress_percent` also caps at 100.
    pub fn increment(&mut self, field: ProgressField, delta: i64) -> u32 {
        let slot = match field {
            ProgressField::Streak => &mut self.streak,
            ProgressField::TopicsMastered => &mut self.topics_mastered,
            ProgressField::QuestionsAnswered => &mut self.questions_answered,
            ProgressField::StudyTimeHours => &mut self.study_time_hours,
            ProgressField::ProgressPercent => &mut self.progress_percent,
        };

        let ceiling = match field {
            ProgressField::ProgressPercent => 100,
            _ => i64::from(u32::MAX),
        };

        let updated = (i64::from(*slot) + delta).clamp(0, ceiling);
        *slot = updated as u32;
        *slot
    }

    pub fn efficiency(&self) -> u32 {
        self.questions_answered.saturating_mul(2).min(95)
    }
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initial_values_within_ranges() {
        for seed in 0..200 {
            let progress = UserProgress::initialize(&mut StdRng::seed_from_u64(seed));
            assert!((3..=7).contains(&progress.streak));
            assert!((5..=12).contains(&progress.topics_mastered));
            assert!((20..=50).contains(&progress.questions_answered));
            assert!((10..=30).contains(&progress.study_time_hours));
            assert!((40..=75).contains(&progress.progress_percent));
            assert_eq!(progress.level, Level::Intermediate);
        }
    }

    #[test]
    fn test_increment_floors_at_zero() {
        let mut progress = UserProgress::initialize(&mut StdRng::seed_from_u64(7));
        let value = progress.increment(ProgressField::Streak, -1_000);
        assert_eq!(value, 0);
        assert_eq!(progress.streak, 0);
    }

    #[test]
    fn test_progress_percent_caps_at_hundred() {
        let mut progress = UserProgress::initialize(&mut StdRng::seed_from_u64(7));
        progress.increment(ProgressField::ProgressPercent, 500);
        assert_eq!(progress.progress_percent, 100);
    }

    #[test]
    fn test_efficiency_is_capped() {
        let mut progress = UserProgress::initialize(&mut StdRng::seed_from_u64(1));
        for answered in [0u32, 1, 20, 47, 48, 50, 1_000, u32::MAX] {
            progress.questions_answered = answered;
            let expected = std::cmp::min(95u64, u64::from(answered) * 2) as u32;
            assert_eq!(progress.efficiency(), expected);
        }
    }
}

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::content::Tip;

pub const MIN_HOURS_PER_DAY: u32 = 1;
pub const MAX_HOURS_PER_DAY: u32 = 12;
const EXAM_PRIMARY_SHARE: f64 = 0.6;
const SUBJECT_EMOJIS: [&str; 6] = ["🔢", "🔬", "🧪", "🧬", "📖", "🌍"];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Intense,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScheduleRequest {
    #[serde(default = "default_subjects")]
    pub subjects: String,
    #[serde(default = "default_hours")]
    pub hours_per_day: u32,
    // Defaults to two weeks from today when omitted
    #[serde(default)]
    pub exam_date: Option<NaiveDate>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub exam_mode: bool,
}

fn default_subjects() -> String {
    "Mathematics, Physics, Chemistry, Biology".to_string()
}

fn default_hours() -> u32 {
    6
}

impl Default for ScheduleRequest {
    fn default() -> Self {
        Self {
            subjects: default_subjects(),
            hours_per_day: default_hours(),
            exam_date: None,
            difficulty: Difficulty::default(),
            exam_mode: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubjectAllocation {
    pub subject: String,
    pub emoji: String,
    pub hours: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StudyPlan {
    Exam {
        days_until_exam: i64,
        hours_per_day: u32,
        difficulty: Difficulty,
        primary: SubjectAllocation,
        secondary_subjects: Vec<String>,
        secondary_focus: String,
        strategy: Vec<String>,
    },
    Balanced {
        hours_per_day: u32,
        subject_count: usize,
        distribution: Vec<SubjectAllocation>,
        approach: Vec<String>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScheduleResponse {
    pub plan: StudyPlan,
    pub tips: Vec<Tip>,
}

pub fn efficiency_tips() -> Vec<Tip> {
    vec![
        Tip::new("⏰ Pomodoro Technique", "25min focus + 5min break × 4, then 15min long break"),
        Tip::new("🔁 Spaced Repetition", "Review material after 1 day, 3 days, 1 week, 2 weeks"),
        Tip::new("💡 Active Recall", "Test yourself instead of re-reading notes"),
        Tip::new("🎯 Deep Work", "Eliminate distractions for 2-3 hour focused sessions"),
    ]
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// Every comma-separated piece counts, including empty ones
pub fn parse_subjects(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

pub fn default_exam_date(today: NaiveDate) -> NaiveDate {
    today + Duration::days(14)
}

pub struct StudyScheduler;

impl StudyScheduler {
    pub fn new() -> Self {
        StudyScheduler
    }

    pub fn generate(&self, request: &ScheduleRequest, today: NaiveDate) -> StudyPlan {
        let subjects = parse_subjects(&request.subjects);
        let hours_per_day = request.hours_per_day.clamp(MIN_HOURS_PER_DAY, MAX_HOURS_PER_DAY);
        let exam_date = request.exam_date.unwrap_or_else(|| default_exam_date(today));
        // Past dates are not rejected; they fall through to a balanced plan
        let days_until_exam = (exam_date - today).num_days();

        if request.exam_mode && days_until_exam > 0 {
            self.exam_plan(subjects, hours_per_day, days_until_exam, request.difficulty)
        } else {
            self.balanced_plan(subjects, hours_per_day)
        }
    }

    fn exam_plan(
        &self,
        mut subjects: Vec<String>,
        hours_per_day: u32,
        days_until_exam: i64,
        difficulty: Difficulty,
    ) -> StudyPlan {
        let secondary_subjects = subjects.split_off(1.min(subjects.len()));
        let primary_subject = subjects.into_iter().next().unwrap_or_default();

        StudyPlan::Exam {
            days_until_exam,
            hours_per_day,
            difficulty,
            primary: SubjectAllocation {
                subject: primary_subject,
                emoji: "🚀".to_string(),
                hours: round_one_decimal(f64::from(hours_per_day) * EXAM_PRIMARY_SHARE),
            },
            secondary_subjects,
            secondary_focus: "Quick revisions and practice problems".to_string(),
            strategy: vec![
                "Morning: Intensive topic study (2-3 hours)".to_string(),
                "Afternoon: Practice problems (2 hours)".to_string(),
                "Evening: Revision and flashcards (1-2 hours)".to_string(),
            ],
        }
    }

    fn balanced_plan(&self, subjects: Vec<String>, hours_per_day: u32) -> StudyPlan {
        let subject_count = subjects.len().max(1);
        let hours_each = round_one_decimal(f64::from(hours_per_day) / subject_count as f64);

        let distribution = subjects
            .into_iter()
            .enumerate()
            .map(|(i, subject)| SubjectAllocation {
                subject,
                emoji: SUBJECT_EMOJIS[i % SUBJECT_EMOJIS.len()].to_string(),
                hours: hours_each,
            })
            .collect();

        StudyPlan::Balanced {
            hours_per_day,
            subject_count,
            distribution,
            approach: vec![
                "45min study + 15min break cycles".to_string(),
                "Mix different subjects to avoid fatigue".to_string(),
                "Include active recall sessions".to_string(),
            ],
        }
    }
}

impl Default for StudyScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn request(exam_mode: bool, exam_date: NaiveDate) -> ScheduleRequest {
        ScheduleRequest {
            subjects: "Math, Physics".to_string(),
            hours_per_day: 6,
            exam_date: Some(exam_date),
            difficulty: Difficulty::Hard,
            exam_mode,
        }
    }

    #[test]
    fn test_exam_mode_gives_primary_sixty_percent() {
        let plan = StudyScheduler::new().generate(&request(true, today() + Duration::days(10)), today());
        match plan {
            StudyPlan::Exam { primary, secondary_subjects, days_until_exam, .. } => {
                assert_eq!(primary.subject, "Math");
                assert_eq!(primary.hours, 3.6);
                assert_eq!(secondary_subjects, vec!["Physics".to_string()]);
                assert_eq!(days_until_exam, 10);
            }
            other => panic!("expected exam plan, got {other:?}"),
        }
    }

    #[test]
    fn test_balanced_mode_splits_evenly() {
        let plan = StudyScheduler::new().generate(&request(false, today() + Duration::days(10)), today());
        match plan {
            StudyPlan::Balanced { distribution, subject_count, .. } => {
                assert_eq!(subject_count, 2);
                let hours: Vec<f64> = distribution.iter().map(|a| a.hours).collect();
                assert_eq!(hours, vec![3.0, 3.0]);
                assert_eq!(distribution[0].emoji, "🔢");
                assert_eq!(distribution[1].emoji, "🔬");
            }
            other => panic!("expected balanced plan, got {other:?}"),
        }
    }

    #[test]
    fn test_past_exam_date_falls_through_to_balanced() {
        let plan = StudyScheduler::new().generate(&request(true, today() - Duration::days(3)), today());
        assert!(matches!(plan, StudyPlan::Balanced { .. }));

        let same_day = StudyScheduler::new().generate(&request(true, today()), today());
        assert!(matches!(same_day, StudyPlan::Balanced { .. }));
    }

    #[test]
    fn test_empty_subjects_still_count_as_one() {
        let req = ScheduleRequest {
            subjects: String::new(),
            hours_per_day: 7,
            ..ScheduleRequest::default()
        };
        match StudyScheduler::new().generate(&req, today()) {
            StudyPlan::Balanced { subject_count, distribution, .. } => {
                assert_eq!(subject_count, 1);
                assert_eq!(distribution[0].hours, 7.0);
            }
            other => panic!("expected balanced plan, got {other:?}"),
        }
    }

    #[test]
    fn test_hours_are_clamped_and_rounded() {
        let req = ScheduleRequest {
            subjects: "A, B, C".to_string(),
            hours_per_day: 40,
            ..ScheduleRequest::default()
        };
        match StudyScheduler::new().generate(&req, today()) {
            StudyPlan::Balanced { hours_per_day, distribution, .. } => {
                assert_eq!(hours_per_day, 12);
                assert_eq!(distribution[0].hours, 4.0);
            }
            other => panic!("expected balanced plan, got {other:?}"),
        }
    }

    #[test]
    fn test_default_scheduler_matches_new() {
        let req = request(true, today() + Duration::days(5));
        assert_eq!(
            StudyScheduler::default().generate(&req, today()),
            StudyScheduler::new().generate(&req, today())
        );
    }

    #[test]
    fn test_default_exam_date_is_two_weeks_out() {
        let req = ScheduleRequest {
            exam_mode: true,
            ..ScheduleRequest::default()
        };
        match StudyScheduler::new().generate(&req, today()) {
            StudyPlan::Exam { days_until_exam, .. } => assert_eq!(days_until_exam, 14),
            other => panic!("expected exam plan, got {other:?}"),
        }
    }
}

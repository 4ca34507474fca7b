use serde::{Deserialize, Serialize};

use crate::content::Tip;
use crate::progress::{Level, UserProgress};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

impl Metric {
    fn new(label: &str, value: String, delta: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            value,
            delta: delta.map(str::to_string),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub name: String,
    pub description: String,
    pub earned: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DashboardView {
    pub level: Level,
    pub progress_percent: u32,
    pub metrics: Vec<Metric>,
    pub study_time_hours: u32,
    pub efficiency: u32,
    pub recommendations: Vec<String>,
    pub achievements: Vec<Achievement>,
    pub weekly_goal: Option<WeeklyGoal>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HomeView {
    pub title: String,
    pub subtitle: String,
    pub metrics: Vec<Metric>,
    pub features: Vec<Tip>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeeklyGoal {
    FiveTopics,
    FiftyQuestions,
    TenStudyHours,
    SevenDayStreak,
}

impl WeeklyGoal {
    pub const ALL: [WeeklyGoal; 4] = [
        WeeklyGoal::FiveTopics,
        WeeklyGoal::FiftyQuestions,
        WeeklyGoal::TenStudyHours,
        WeeklyGoal::SevenDayStreak,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeeklyGoal::FiveTopics => "5 Topics",
            WeeklyGoal::FiftyQuestions => "50 Questions",
            WeeklyGoal::TenStudyHours => "10 Study Hours",
            WeeklyGoal::SevenDayStreak => "7-Day Streak",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GoalRequest {
    pub goal: WeeklyGoal,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GoalResponse {
    pub goal: WeeklyGoal,
    pub message: String,
}

pub fn commit_goal(goal: WeeklyGoal) -> GoalResponse {
    GoalResponse {
        goal,
        message: format!("🎯 Goal set: {} for this week!", goal.label()),
    }
}

enum AchievementCondition {
    Streak(u32),
    TopicsMastered(u32),
    QuestionsAnswered(u32),
    StudyHours(u32),
}

struct AchievementTemplate {
    name: &'static str,
    description: &'static str,
    condition: AchievementCondition,
}

const ACHIEVEMENTS: [AchievementTemplate; 4] = [
    AchievementTemplate {
        name: "Consistent Learner",
        description: "3+ day study streak",
        condition: AchievementCondition::Streak(3),
    },
    AchievementTemplate {
        name: "Topic Explorer",
        description: "5+ topics mastered",
        condition: AchievementCondition::TopicsMastered(5),
    },
    AchievementTemplate {
        name: "Practice Champion",
        description: "25+ questions solved",
        condition: AchievementCondition::QuestionsAnswered(25),
    },
    AchievementTemplate {
        name: "Focus Master",
        description: "10+ hours of focused study",
        condition: AchievementCondition::StudyHours(10),
    },
];

pub struct ProgressDashboard;

impl ProgressDashboard {
    pub fn new() -> Self {
        ProgressDashboard
    }

    pub fn render(&self, progress: &UserProgress, weekly_goal: Option<WeeklyGoal>) -> DashboardView {
        DashboardView {
            level: progress.level,
            progress_percent: progress.progress_percent,
            metrics: vec![
                Metric::new("🔥 Study Streak", format!("{} days", progress.streak), Some("2 days")),
                Metric::new("📚 Topics Mastered", progress.topics_mastered.to_string(), Some("3 this week")),
                Metric::new("❓ Questions Solved", progress.questions_answered.to_string(), Some("12 today")),
            ],
            study_time_hours: progress.study_time_hours,
            efficiency: progress.efficiency(),
            recommendations: self.recommendations(),
            achievements: self.achievements(progress),
            weekly_goal,
        }
    }

    pub fn home(&self, progress: &UserProgress) -> HomeView {
        HomeView {
            title: "AceAi".to_string(),
            subtitle: "Your AI-Powered Learning Companion".to_string(),
            metrics: vec![
                Metric::new("🔥 Study Streak", format!("{} days", progress.streak), None),
                Metric::new("📚 Topics Mastered", progress.topics_mastered.to_string(), None),
                Metric::new("❓ Questions Done", progress.questions_answered.to_string(), None),
                Metric::new("⏱️ Study Hours", progress.study_time_hours.to_string(), None),
            ],
            features: feature_cards(),
        }
    }

    fn recommendations(&self) -> Vec<String> {
        vec![
            "Build Consistency: Try to study every day to build a strong habit".to_string(),
            "Practice More: Increase daily practice questions to reinforce learning".to_string(),
            "Expand Knowledge: Explore new topics to broaden your understanding".to_string(),
            "Next Level Goal: Reach 80% progress by completing 10 more topics".to_string(),
        ]
    }

    fn achievements(&self, progress: &UserProgress) -> Vec<Achievement> {
        ACHIEVEMENTS
            .iter()
            .map(|template| {
                let earned = match template.condition {
                    AchievementCondition::Streak(target) => progress.streak >= target,
                    AchievementCondition::TopicsMastered(target) => progress.topics_mastered >= target,
                    AchievementCondition::QuestionsAnswered(target) => progress.questions_answered >= target,
                    AchievementCondition::StudyHours(target) => progress.study_time_hours >= target,
                };
                Achievement {
                    name: template.name.to_string(),
                    description: template.description.to_string(),
                    earned,
                }
            })
            .collect()
    }
}

impl Default for ProgressDashboard {
    fn default() -> Self {
        Self::new()
    }
}

fn feature_cards() -> Vec<Tip> {
    vec![
        Tip::new("🎯 Smart Scheduler", "AI-powered study plans that adapt to your exams and learning pace"),
        Tip::new("💡 Topic Explainer", "Get simple, clear explanations for any subject or complex concept"),
        Tip::new("📝 Notes to Flashcards", "Transform messy handwritten notes into organized digital flashcards"),
        Tip::new("📊 Practice Generator", "Create unlimited practice questions with varying difficulty levels"),
        Tip::new("🔍 Focus Monitor", "AI-powered webcam monitoring to track and improve your study focus"),
        Tip::new("📈 Progress Tracker", "Monitor your learning journey with detailed analytics and insights"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn progress(questions_answered: u32) -> UserProgress {
        UserProgress {
            streak: 4,
            topics_mastered: 6,
            questions_answered,
            study_time_hours: 12,
            level: Level::Intermediate,
            progress_percent: 55,
        }
    }

    #[test]
    fn test_efficiency_matches_formula() {
        let dashboard = ProgressDashboard::new();
        assert_eq!(dashboard.render(&progress(20), None).efficiency, 40);
        assert_eq!(dashboard.render(&progress(60), None).efficiency, 95);
    }

    #[test]
    fn test_render_is_read_only_view() {
        let progress = progress(30);
        let view = ProgressDashboard::new().render(&progress, Some(WeeklyGoal::TenStudyHours));
        assert_eq!(view.metrics[0].value, "4 days");
        assert_eq!(view.metrics[2].value, "30");
        assert_eq!(view.progress_percent, 55);
        assert_eq!(view.weekly_goal, Some(WeeklyGoal::TenStudyHours));
    }

    #[test]
    fn test_achievements_follow_thresholds() {
        let view = ProgressDashboard::new().render(&progress(24), None);
        let earned: Vec<bool> = view.achievements.iter().map(|a| a.earned).collect();
        assert_eq!(earned, vec![true, true, false, true]);
    }

    #[test]
    fn test_commit_goal_message() {
        assert_eq!(
            commit_goal(WeeklyGoal::SevenDayStreak).message,
            "🎯 Goal set: 7-Day Streak for this week!"
        );
    }
}

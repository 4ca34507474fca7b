use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::{ExplanationLevel, Tip};
use crate::dashboard::{DashboardView, HomeView, ProgressDashboard, WeeklyGoal};
use crate::explainer::learning_tips;
use crate::focus::FocusSession;
use crate::practice::{practice_strategies, PracticeDifficulty, QuestionFormat};
use crate::scheduler::{default_exam_date, efficiency_tips, Difficulty, MAX_HOURS_PER_DAY, MIN_HOURS_PER_DAY};
use crate::session::Session;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Scheduler,
    Explainer,
    Practice,
    Flashcards,
    Focus,
    Progress,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Scheduler,
        Page::Explainer,
        Page::Practice,
        Page::Flashcards,
        Page::Focus,
        Page::Progress,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "🏠 Home",
            Page::Scheduler => "🎯 Smart Scheduler",
            Page::Explainer => "💡 Topic Explainer",
            Page::Practice => "📊 Practice Generator",
            Page::Flashcards => "📝 Notes to Flashcards",
            Page::Focus => "🔍 Focus Monitor",
            Page::Progress => "📈 Progress Dashboard",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Scheduler => "scheduler",
            Page::Explainer => "explainer",
            Page::Practice => "practice",
            Page::Flashcards => "flashcards",
            Page::Focus => "focus",
            Page::Progress => "progress",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.slug() == slug)
    }

    pub fn from_label(label: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.label() == label)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub slug: String,
    pub label: String,
}

pub fn sidebar() -> Vec<NavEntry> {
    Page::ALL
        .iter()
        .map(|page| NavEntry {
            slug: page.slug().to_string(),
            label: page.label().to_string(),
        })
        .collect()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
    Home(HomeView),
    Scheduler {
        default_subjects: String,
        min_hours: u32,
        max_hours: u32,
        default_hours: u32,
        default_exam_date: NaiveDate,
        difficulties: Vec<Difficulty>,
    },
    Explainer {
        default_topic: String,
        levels: Vec<ExplanationLevel>,
    },
    Practice {
        default_topic: String,
        formats: Vec<QuestionFormat>,
        difficulties: Vec<PracticeDifficulty>,
    },
    Flashcards {
        placeholder: String,
    },
    Focus {
        camera_available: bool,
        live: FocusSession,
        manual_score: u8,
        instructions: String,
    },
    Progress {
        dashboard: DashboardView,
        goals: Vec<WeeklyGoal>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PageView {
    pub page: Page,
    pub title: String,
    pub tips: Vec<Tip>,
    pub body: PageBody,
}

fn flashcard_tips() -> Vec<Tip> {
    vec![
        Tip::new("🎴 One Concept Per Card", "Keep flashcards focused and clear"),
        Tip::new("🔁 Regular Review", "Use spaced repetition for memory"),
        Tip::new("💭 Active Recall", "Test yourself before seeing answers"),
        Tip::new("🎨 Visual Elements", "Add diagrams or mnemonics"),
    ]
}

/// Landing view for a sidebar destination.
pub fn render(page: Page, session: &Session, camera_available: bool, today: NaiveDate) -> PageView {
    let dashboard = ProgressDashboard::new();
    let (title, tips, body) = match page {
        Page::Home => ("AceAi", Vec::new(), PageBody::Home(dashboard.home(&session.progress))),
        Page::Scheduler => (
            "🎯 Smart Study Scheduler",
            efficiency_tips(),
            PageBody::Scheduler {
                default_subjects: "Mathematics, Physics, Chemistry, Biology".to_string(),
                min_hours: MIN_HOURS_PER_DAY,
                max_hours: MAX_HOURS_PER_DAY,
                default_hours: 6,
                default_exam_date: default_exam_date(today),
                difficulties: vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Intense],
            },
        ),
        Page::Explainer => (
            "💡 AI Topic Explainer",
            learning_tips(),
            PageBody::Explainer {
                default_topic: "quantum physics".to_string(),
                levels: vec![ExplanationLevel::Simple, ExplanationLevel::Intermediate, ExplanationLevel::Detailed],
            },
        ),
        Page::Practice => (
            "📊 Smart Practice Generator",
            practice_strategies(),
            PageBody::Practice {
                default_topic: "algebra".to_string(),
                formats: vec![
                    QuestionFormat::MultipleChoice,
                    QuestionFormat::ShortAnswer,
                    QuestionFormat::ProblemSolving,
                    QuestionFormat::Mixed,
                ],
                difficulties: vec![
                    PracticeDifficulty::Beginner,
                    PracticeDifficulty::Intermediate,
                    PracticeDifficulty::Advanced,
                    PracticeDifficulty::Expert,
                ],
            },
        ),
        Page::Flashcards => (
            "📝 Smart Notes to Flashcards",
            flashcard_tips(),
            PageBody::Flashcards {
                placeholder: "Example: Photosynthesis is the process plants use to convert sunlight into energy. They take in carbon dioxide and water, and using chlorophyll in their leaves, produce glucose and oxygen. This process occurs in the chloroplasts...".to_string(),
            },
        ),
        Page::Focus => (
            "🔍 AI Focus Monitor",
            Vec::new(),
            PageBody::Focus {
                camera_available,
                live: session.focus_reader().snapshot(),
                manual_score: session.manual_focus.score,
                instructions: if camera_available {
                    "Look DOWN at your book = FOCUSED, Look AT screen = DISTRACTED".to_string()
                } else {
                    "Webcam not available - using manual focus tracking".to_string()
                },
            },
        ),
        Page::Progress => (
            "📈 Learning Progress Dashboard",
            Vec::new(),
            PageBody::Progress {
                dashboard: dashboard.render(&session.progress, session.weekly_goal),
                goals: WeeklyGoal::ALL.to_vec(),
            },
        ),
    };

    PageView {
        page,
        title: title.to_string(),
        tips,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_slugs_and_labels_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
            assert_eq!(Page::from_label(page.label()), Some(page));
        }
        assert_eq!(Page::from_slug("settings"), None);
        assert_eq!(sidebar().len(), 7);
    }

    #[test]
    fn test_every_page_renders_its_own_body() {
        let session = Session::new();
        for page in Page::ALL {
            let view = render(page, &session, true, today());
            assert_eq!(view.page, page);
            let matches = matches!(
                (page, &view.body),
                (Page::Home, PageBody::Home(_))
                    | (Page::Scheduler, PageBody::Scheduler { .. })
                    | (Page::Explainer, PageBody::Explainer { .. })
                    | (Page::Practice, PageBody::Practice { .. })
                    | (Page::Flashcards, PageBody::Flashcards { .. })
                    | (Page::Focus, PageBody::Focus { .. })
                    | (Page::Progress, PageBody::Progress { .. })
            );
            assert!(matches, "{page:?} rendered {:?}", view.body);
        }
    }

    #[test]
    fn test_focus_page_reports_fallback_without_camera() {
        let session = Session::new();
        match render(Page::Focus, &session, false, today()).body {
            PageBody::Focus { camera_available, manual_score, .. } => {
                assert!(!camera_available);
                assert_eq!(manual_score, 75);
            }
            other => panic!("unexpected body {other:?}"),
        }
    }
}

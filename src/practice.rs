use serde::{Deserialize, Serialize};

use crate::content::{lookup_practice_questions, title_case, Tip};
use crate::progress::{ProgressField, UserProgress};

const QUESTIONS_PER_SET: usize = 5;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionFormat {
    #[default]
    MultipleChoice,
    ShortAnswer,
    ProblemSolving,
    Mixed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum PracticeDifficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl PracticeDifficulty {
    pub fn label(&self) -> &'static str {
        match self {
            PracticeDifficulty::Beginner => "Beginner",
            PracticeDifficulty::Intermediate => "Intermediate",
            PracticeDifficulty::Advanced => "Advanced",
            PracticeDifficulty::Expert => "Expert",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PracticeRequest {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default)]
    pub format: QuestionFormat,
    #[serde(default)]
    pub difficulty: PracticeDifficulty,
}

fn default_topic() -> String {
    "algebra".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PracticeQuestion {
    pub number: usize,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PracticeSet {
    pub title: String,
    pub questions: Vec<PracticeQuestion>,
    pub answer_key: Vec<String>,
    pub questions_answered: u32,
}

fn multiple_choice_options() -> Vec<String> {
    ["A) Option 1", "B) Option 2", "C) Option 3", "D) Option 4"]
        .iter()
        .map(|o| o.to_string())
        .collect()
}

fn answer_key() -> Vec<String> {
    vec![
        "1. Show your work and reasoning".to_string(),
        "2. Explain the key concepts involved".to_string(),
        "3. Provide step-by-step solution".to_string(),
        "4. Include relevant formulas/theorems".to_string(),
        "5. Verify your answer makes sense".to_string(),
    ]
}

pub fn practice_strategies() -> Vec<Tip> {
    vec![
        Tip::new("📈 Progressive Difficulty", "Start easy, gradually increase challenge"),
        Tip::new("🔄 Mixed Practice", "Mix different types of problems"),
        Tip::new("⏱️ Timed Practice", "Set time limits to build speed"),
        Tip::new("📝 Error Analysis", "Review mistakes to avoid repetition"),
    ]
}

pub fn generate_practice_set(progress: &mut UserProgress, request: &PracticeRequest) -> Option<PracticeSet> {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return None;
    }

    let questions_answered =
        progress.increment(ProgressField::QuestionsAnswered, QUESTIONS_PER_SET as i64);
    log::debug!("practice set for '{topic}', questions answered now {questions_answered}");

    let questions = lookup_practice_questions(topic)
        .into_iter()
        .take(QUESTIONS_PER_SET)
        .enumerate()
        .map(|(i, prompt)| PracticeQuestion {
            number: i + 1,
            prompt,
            options: match request.format {
                QuestionFormat::MultipleChoice => multiple_choice_options(),
                _ => Vec::new(),
            },
        })
        .collect();

    Some(PracticeSet {
        title: format!(
            "Practice Questions: {} ({})",
            title_case(topic),
            request.difficulty.label()
        ),
        questions,
        answer_key: answer_key(),
        questions_answered,
    })
}

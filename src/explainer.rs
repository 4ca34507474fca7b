use serde::{Deserialize, Serialize};

use crate::content::{lookup_explanation, ExplanationLevel, Tip};
use crate::progress::{ProgressField, UserProgress};
use crate::textgen::TextGeneration;

const INSIGHT_MAX_LENGTH: usize = 150;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExplainRequest {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default)]
    pub level: ExplanationLevel,
}

fn default_topic() -> String {
    "quantum physics".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TopicExplanation {
    pub topic: String,
    pub level: ExplanationLevel,
    pub text: String,
    pub canned: bool,
    pub ai_insight: Option<String>,
    pub topics_mastered: u32,
}

pub fn learning_tips() -> Vec<Tip> {
    vec![
        Tip::new("🎯 Feynman Technique", "Explain concepts in simple terms as if teaching a child"),
        Tip::new("🔗 Make Connections", "Relate new concepts to what you already know"),
        Tip::new("❓ Ask Questions", "Challenge yourself with 'why' and 'how' questions"),
    ]
}

pub fn insight_prompt(topic: &str, level: ExplanationLevel) -> String {
    format!("Explain {} in {} terms:", topic, level.label().to_lowercase())
}

/// Looks up the explanation and counts the topic as mastered.
///
/// Returns `None` without touching progress when the topic is blank.
pub fn explain_topic(progress: &mut UserProgress, request: &ExplainRequest) -> Option<TopicExplanation> {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return None;
    }

    let explanation = lookup_explanation(topic, request.level);
    let topics_mastered = progress.increment(ProgressField::TopicsMastered, 1);
    log::debug!("explained '{topic}', topics mastered now {topics_mastered}");

    Some(TopicExplanation {
        topic: topic.to_string(),
        level: request.level,
        text: explanation.text,
        canned: explanation.canned,
        ai_insight: None,
        topics_mastered,
    })
}

// Only fallback explanations are augmented
pub async fn augment_with_insight(explanation: &mut TopicExplanation, text_gen: &TextGeneration) {
    if explanation.canned {
        return;
    }
    let prompt = insight_prompt(&explanation.topic, explanation.level);
    explanation.ai_insight = text_gen.insight(&prompt, INSIGHT_MAX_LENGTH).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn progress() -> UserProgress {
        UserProgress::initialize(&mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_each_explanation_counts_one_topic() {
        let mut progress = progress();
        let before = progress.topics_mastered;
        let request = ExplainRequest {
            topic: "machine learning".to_string(),
            level: ExplanationLevel::Detailed,
        };

        let first = explain_topic(&mut progress, &request).unwrap();
        assert!(first.canned);
        assert_eq!(first.topics_mastered, before + 1);

        explain_topic(&mut progress, &request).unwrap();
        assert_eq!(progress.topics_mastered, before + 2);
    }

    #[test]
    fn test_unknown_topic_still_counts() {
        let mut progress = progress();
        let before = progress.topics_mastered;
        let request = ExplainRequest {
            topic: "volcanoes".to_string(),
            level: ExplanationLevel::Simple,
        };
        let explanation = explain_topic(&mut progress, &request).unwrap();
        assert!(!explanation.canned);
        assert_eq!(progress.topics_mastered, before + 1);
    }

    #[test]
    fn test_blank_topic_is_a_no_op() {
        let mut progress = progress();
        let snapshot = progress.clone();
        let request = ExplainRequest {
            topic: "   ".to_string(),
            level: ExplanationLevel::Simple,
        };
        assert_eq!(explain_topic(&mut progress, &request), None);
        assert_eq!(progress, snapshot);
    }

    #[test]
    fn test_insight_prompt() {
        assert_eq!(
            insight_prompt("volcanoes", ExplanationLevel::Intermediate),
            "Explain volcanoes in intermediate terms:"
        );
    }

    #[actix_web::test]
    async fn test_augment_without_generator_leaves_insight_empty() {
        let mut progress = progress();
        let request = ExplainRequest {
            topic: "volcanoes".to_string(),
            level: ExplanationLevel::Simple,
        };
        let mut explanation = explain_topic(&mut progress, &request).unwrap();
        augment_with_insight(&mut explanation, &TextGeneration::Unavailable).await;
        assert_eq!(explanation.ai_insight, None);
    }
}

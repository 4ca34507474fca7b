use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplanationLevel {
    #[default]
    Simple,
    Intermediate,
    Detailed,
}

impl ExplanationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExplanationLevel::Simple => "Simple",
            ExplanationLevel::Intermediate => "Intermediate",
            ExplanationLevel::Detailed => "Detailed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExplainedTopic {
    QuantumPhysics,
    Photosynthesis,
    MachineLearning,
}

impl ExplainedTopic {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "quantum physics" => Some(Self::QuantumPhysics),
            "photosynthesis" => Some(Self::Photosynthesis),
            "machine learning" => Some(Self::MachineLearning),
            _ => None,
        }
    }

    fn text(self, level: ExplanationLevel) -> &'static str {
        use ExplanationLevel::*;
        match (self, level) {
            (Self::QuantumPhysics, Simple) => "🌌 **Quantum Physics** studies tiny particles like atoms and electrons. Unlike normal objects, these particles can be in multiple places at once (superposition) and affect each other instantly over distance (entanglement). It's the science of the very small!",
            (Self::QuantumPhysics, Intermediate) => "🔬 **Quantum Mechanics** describes nature at atomic and subatomic scales. Key principles include wave-particle duality (things act as both particles and waves), uncertainty principle (can't know both position and speed exactly), and quantum entanglement (connected particles affect each other).",
            (Self::QuantumPhysics, Detailed) => "⚛️ **Quantum Theory** revolutionized physics by describing microscopic systems. Fundamental concepts: 1) Superposition - quantum states can exist in multiple states simultaneously, 2) Entanglement - particles remain connected regardless of distance, 3) Quantization - energy exists in discrete packets (quanta), 4) Wave-function collapse - measurement determines the state.",
            (Self::Photosynthesis, Simple) => "🌱 **Photosynthesis** is how plants make food using sunlight! They take water + CO₂ and create sugar + oxygen using sunlight energy.",
            (Self::Photosynthesis, Intermediate) => "🌿 **Photosynthesis** converts light energy to chemical energy. Equation: 6CO₂ + 6H₂O → C₆H₁₂O₆ + 6O₂. Occurs in chloroplasts using chlorophyll.",
            (Self::Photosynthesis, Detailed) => "🔬 **Photosynthesis** has two stages: 1) Light-dependent reactions capture light energy to produce ATP and NADPH, 2) Calvin cycle uses these to fix CO₂ into organic compounds. Essential for life on Earth.",
            (Self::MachineLearning, Simple) => "🤖 **Machine Learning** is AI that learns from data without explicit programming. It finds patterns and makes predictions automatically!",
            (Self::MachineLearning, Intermediate) => "🧠 **Machine Learning** uses algorithms to parse data, learn from it, and make determinations. Types: supervised (labeled data), unsupervised (patterns), reinforcement (trial & error).",
            (Self::MachineLearning, Detailed) => "📊 **Machine Learning** involves: 1) Data preprocessing and feature engineering, 2) Model selection (neural networks, decision trees, SVM), 3) Training and validation, 4) Hyperparameter tuning. Powers modern AI applications.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PracticeTopic {
    Algebra,
    Physics,
    Biology,
}

impl PracticeTopic {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "algebra" => Some(Self::Algebra),
            "physics" => Some(Self::Physics),
            "biology" => Some(Self::Biology),
            _ => None,
        }
    }

    fn questions(self) -> [&'static str; 5] {
        match self {
            Self::Algebra => [
                "Solve the equation: 3x + 7 = 22. What is the value of x?",
                "Factor the quadratic expression: x² + 5x + 6",
                "Simplify the expression: 2(3x - 4) + 5(x + 2)",
                "Find the slope and y-intercept of the line: y = 2x - 3",
                "Solve the system: 2x + y = 7, x - y = -1",
            ],
            Self::Physics => [
                "Calculate the force required to accelerate a 5kg object at 3m/s²",
                "Explain the difference between speed and velocity",
                "A ball is dropped from 20m height. Calculate impact velocity",
                "Describe Newton's three laws of motion with examples",
                "Calculate work done by a 10N force moving an object 5m",
            ],
            Self::Biology => [
                "Explain the process of cellular respiration",
                "Compare and contrast mitosis and meiosis",
                "Describe the structure and function of DNA",
                "Explain how enzymes work as biological catalysts",
                "Discuss the process of protein synthesis",
            ],
        }
    }
}

/// A titled side-panel hint shown next to a page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Tip {
    pub title: String,
    pub body: String,
}

impl Tip {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub text: String,
    pub canned: bool,
}

fn normalize_key(topic: &str) -> String {
    topic.trim().to_lowercase()
}

/// Upper-cases the first letter of every word and lower-cases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

pub fn lookup_explanation(topic: &str, level: ExplanationLevel) -> Explanation {
    match ExplainedTopic::from_key(&normalize_key(topic)) {
        Some(known) => Explanation {
            text: known.text(level).to_string(),
            canned: true,
        },
        None => Explanation {
            text: format!(
                "📚 **{}**\n\nThis is an important {} concept worth exploring!\n\n**Key aspects to research:**\n• Fundamental principles and definitions\n• Real-world applications and examples\n• Related concepts and connections\n• Common misunderstandings to avoid",
                title_case(topic),
                level.label().to_lowercase()
            ),
            canned: false,
        },
    }
}

pub fn lookup_practice_questions(topic: &str) -> Vec<String> {
    match PracticeTopic::from_key(&normalize_key(topic)) {
        Some(known) => known.questions().iter().map(|q| q.to_string()).collect(),
        None => vec![
            format!("Explain the main concepts of {}", topic),
            format!("Provide 3 real-world applications of {}", topic),
            format!("Compare {} with related concepts", topic),
            format!("What are common challenges when learning {}?", topic),
            format!("How would you teach {} to a beginner?", topic),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_topic_is_case_insensitive() {
        let explanation = lookup_explanation("Photosynthesis", ExplanationLevel::Intermediate);
        assert!(explanation.canned);
        assert!(explanation.text.contains("6CO₂ + 6H₂O"));
    }

    #[test]
    fn test_unknown_topic_falls_back_to_template() {
        let explanation = lookup_explanation("plate tectonics", ExplanationLevel::Detailed);
        assert!(!explanation.canned);
        assert!(explanation.text.starts_with("📚 **Plate Tectonics**"));
        assert!(explanation.text.contains("important detailed concept"));
    }

    #[test]
    fn test_practice_questions_fallback_names_topic() {
        let questions = lookup_practice_questions("chemistry");
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0], "Explain the main concepts of chemistry");
    }

    #[test]
    fn test_practice_questions_known_topic() {
        let questions = lookup_practice_questions(" ALGEBRA ");
        assert_eq!(questions.len(), 5);
        assert!(questions[0].starts_with("Solve the equation"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("quantum PHYSICS"), "Quantum Physics");
        assert_eq!(title_case("rock-n-roll 101"), "Rock-N-Roll 101");
    }
}

use serde::{Deserialize, Serialize};

const MAX_FLASHCARDS: usize = 8;
const MIN_WORDS: usize = 4;
const PROMPT_PREFIX_CHARS: usize = 50;
const ARTICLES: [&str; 3] = ["the", "a", "an"];

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FlashcardRequest {
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub number: usize,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FlashcardDeck {
    pub cards: Vec<Flashcard>,
    pub study_tips: Vec<String>,
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn question_word(words: &[&str]) -> String {
    let first = words[0];
    let chosen = if ARTICLES.contains(&first.to_lowercase().as_str()) {
        words.get(1).copied().unwrap_or(first)
    } else {
        first
    };
    chosen.to_lowercase()
}

fn card_for(number: usize, sentence: &str) -> Flashcard {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let prefix: String = sentence.chars().take(PROMPT_PREFIX_CHARS).collect();

    Flashcard {
        number,
        question: format!("What is {} or explain: {}...?", question_word(&words), prefix),
        answer: sentence.to_string(),
    }
}

/// Turns free-text notes into at most eight question/answer cards.
///
/// Fragments of three words or fewer are dropped before the limit applies.
pub fn generate_flashcards(notes: &str) -> Vec<Flashcard> {
    notes
        .split(is_terminator)
        .map(str::trim)
        .filter(|sentence| sentence.split_whitespace().count() >= MIN_WORDS)
        .take(MAX_FLASHCARDS)
        .enumerate()
        .map(|(i, sentence)| card_for(i + 1, sentence))
        .collect()
}

pub fn study_tips() -> Vec<String> {
    vec![
        "Active recall: try to recall the answer before flipping".to_string(),
        "Active recall: say the answer out loud".to_string(),
        "Active recall: explain the concept in your own words".to_string(),
        "Spaced repetition: review after 1 hour".to_string(),
        "Spaced repetition: review after 1 day".to_string(),
        "Spaced repetition: review after 3 days".to_string(),
        "Spaced repetition: review after 1 week".to_string(),
        "Pro Tip: create your own examples for each concept!".to_string(),
    ]
}

/// Empty notes produce no deck at all.
pub fn build_deck(request: &FlashcardRequest) -> Option<FlashcardDeck> {
    if request.notes.trim().is_empty() {
        return None;
    }

    Some(FlashcardDeck {
        cards: generate_flashcards(&request.notes),
        study_tips: study_tips(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_fragments_are_dropped() {
        assert!(generate_flashcards("A. B. C.").is_empty());
    }

    #[test]
    fn test_single_sentence_uses_first_word() {
        let cards = generate_flashcards("  Photosynthesis converts light into chemical energy.  ");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].answer, "Photosynthesis converts light into chemical energy");
        assert_eq!(
            cards[0].question,
            "What is photosynthesis or explain: Photosynthesis converts light into chemical energy...?"
        );
    }

    #[test]
    fn test_article_is_skipped() {
        let cards = generate_flashcards("The Mitochondria is the powerhouse of the cell");
        assert_eq!(cards.len(), 1);
        assert!(cards[0].question.starts_with("What is mitochondria or explain: "));
    }

    #[test]
    fn test_prefix_is_fifty_characters() {
        let sentence = "Enzymes lower the activation energy needed for biochemical reactions to proceed quickly";
        let cards = generate_flashcards(sentence);
        let expected_prefix: String = sentence.chars().take(50).collect();
        assert_eq!(
            cards[0].question,
            format!("What is enzymes or explain: {expected_prefix}...?")
        );
    }

    #[test]
    fn test_limit_applies_after_filtering() {
        let mut notes = String::from("Too short. ");
        for i in 0..12 {
            notes.push_str(&format!("Sentence number {i} has enough words! "));
        }
        let cards = generate_flashcards(&notes);
        assert_eq!(cards.len(), 8);
        assert_eq!(cards[0].number, 1);
        assert_eq!(cards[0].answer, "Sentence number 0 has enough words");
        assert_eq!(cards[7].answer, "Sentence number 7 has enough words");
    }

    #[test]
    fn test_exclamation_and_question_marks_end_sentences() {
        let cards = generate_flashcards("Cells divide by mitosis daily! Why do leaves change colour in autumn? Done");
        let answers: Vec<&str> = cards.iter().map(|c| c.answer.as_str()).collect();
        assert_eq!(
            answers,
            vec!["Cells divide by mitosis daily", "Why do leaves change colour in autumn"]
        );
    }

    #[test]
    fn test_empty_notes_build_nothing() {
        assert_eq!(build_deck(&FlashcardRequest { notes: "   ".to_string() }), None);
    }
}

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

const VOCAB_DECK: &str = include_str!("../assets/decks/vocab.json");
const QUIZ_DECK: &str = include_str!("../assets/decks/quiz.json");

/// Every quiz question is a sentence with this blank slot.
pub const BLANK: &str = "______";

const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct VocabEntry {
    pub id: u32,
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    pub example: String,
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read deck file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {deck} deck: {source}")]
    Parse {
        deck: &'static str,
        source: serde_json::Error,
    },
    #[error("{deck} deck is empty")]
    Empty { deck: &'static str },
    #[error("{deck} deck has duplicate id {id}")]
    DuplicateId { deck: &'static str, id: u32 },
    #[error("question {id}: expected 4 distinct options")]
    BadOptions { id: u32 },
    #[error("question {id}: missing the \"______\" blank")]
    MissingBlank { id: u32 },
    #[error("question {id}: correct answer {answer:?} is not among the options")]
    AnswerNotAnOption { id: u32, answer: String },
}

/// The read-only content store: one vocabulary deck and one quiz deck,
/// validated once at load. Insertion order defines navigation and quiz order.
#[derive(Debug)]
pub struct Library {
    pub vocab: Vec<VocabEntry>,
    pub quiz: Vec<QuizQuestion>,
}

impl Library {
    /// Decks compiled into the binary.
    #[allow(dead_code)]
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(VOCAB_DECK, QUIZ_DECK)
    }

    /// Bundled decks, with either deck replaceable by a user-supplied file.
    pub fn load(
        vocab_file: Option<&Path>,
        quiz_file: Option<&Path>,
    ) -> Result<Self, ContentError> {
        let vocab_json = match vocab_file {
            Some(path) => read_deck_file(path)?,
            None => VOCAB_DECK.to_string(),
        };
        let quiz_json = match quiz_file {
            Some(path) => read_deck_file(path)?,
            None => QUIZ_DECK.to_string(),
        };
        Self::from_json(&vocab_json, &quiz_json)
    }

    fn from_json(vocab_json: &str, quiz_json: &str) -> Result<Self, ContentError> {
        let vocab: Vec<VocabEntry> =
            serde_json::from_str(vocab_json).map_err(|source| ContentError::Parse {
                deck: "vocabulary",
                source,
            })?;
        let quiz: Vec<QuizQuestion> =
            serde_json::from_str(quiz_json).map_err(|source| ContentError::Parse {
                deck: "quiz",
                source,
            })?;

        let library = Self { vocab, quiz };
        library.validate()?;
        Ok(library)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.vocab.is_empty() {
            return Err(ContentError::Empty { deck: "vocabulary" });
        }
        if self.quiz.is_empty() {
            return Err(ContentError::Empty { deck: "quiz" });
        }

        let mut seen = HashSet::new();
        for entry in &self.vocab {
            if !seen.insert(entry.id) {
                return Err(ContentError::DuplicateId {
                    deck: "vocabulary",
                    id: entry.id,
                });
            }
        }

        let mut seen = HashSet::new();
        for question in &self.quiz {
            if !seen.insert(question.id) {
                return Err(ContentError::DuplicateId {
                    deck: "quiz",
                    id: question.id,
                });
            }
            let distinct: HashSet<&str> =
                question.options.iter().map(|o| o.as_str()).collect();
            if question.options.len() != OPTIONS_PER_QUESTION
                || distinct.len() != OPTIONS_PER_QUESTION
            {
                return Err(ContentError::BadOptions { id: question.id });
            }
            if !question.question.contains(BLANK) {
                return Err(ContentError::MissingBlank { id: question.id });
            }
            if !question.options.contains(&question.correct_answer) {
                return Err(ContentError::AnswerNotAnOption {
                    id: question.id,
                    answer: question.correct_answer.clone(),
                });
            }
        }

        Ok(())
    }
}

fn read_deck_file(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn bundled_decks_load_and_validate() {
        let library = Library::bundled().unwrap();
        assert_eq!(library.vocab.len(), 8);
        assert_eq!(library.quiz.len(), 3);
    }

    #[test]
    fn bundled_pronunciations_are_slash_delimited_ipa() {
        let library = Library::bundled().unwrap();
        let ipa = regex::Regex::new(r"^/.+/$").unwrap();
        for entry in &library.vocab {
            assert!(
                ipa.is_match(&entry.pronunciation),
                "bad pronunciation for {}: {}",
                entry.word,
                entry.pronunciation
            );
        }
    }

    #[test]
    fn answer_outside_options_is_rejected() {
        let quiz = r#"[{
            "id": 1,
            "question": "Pick ______.",
            "options": ["a", "b", "c", "d"],
            "correct_answer": "e"
        }]"#;
        let err = Library::from_json(VOCAB_DECK, quiz).unwrap_err();
        assert!(matches!(err, ContentError::AnswerNotAnOption { id: 1, .. }));
    }

    #[test]
    fn duplicate_question_id_is_rejected() {
        let quiz = r#"[
            {"id": 7, "question": "One ______.", "options": ["a", "b", "c", "d"], "correct_answer": "a"},
            {"id": 7, "question": "Two ______.", "options": ["e", "f", "g", "h"], "correct_answer": "e"}
        ]"#;
        let err = Library::from_json(VOCAB_DECK, quiz).unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateId { deck: "quiz", id: 7 }
        ));
    }

    #[test]
    fn repeated_options_are_rejected() {
        let quiz = r#"[{
            "id": 1,
            "question": "Pick ______.",
            "options": ["a", "a", "b", "c"],
            "correct_answer": "a"
        }]"#;
        let err = Library::from_json(VOCAB_DECK, quiz).unwrap_err();
        assert!(matches!(err, ContentError::BadOptions { id: 1 }));
    }

    #[test]
    fn question_without_blank_is_rejected() {
        let quiz = r#"[{
            "id": 1,
            "question": "No slot here.",
            "options": ["a", "b", "c", "d"],
            "correct_answer": "a"
        }]"#;
        let err = Library::from_json(VOCAB_DECK, quiz).unwrap_err();
        assert!(matches!(err, ContentError::MissingBlank { id: 1 }));
    }

    #[test]
    fn empty_vocab_deck_is_rejected() {
        let err = Library::from_json("[]", QUIZ_DECK).unwrap_err();
        assert!(matches!(err, ContentError::Empty { deck: "vocabulary" }));
    }

    #[test]
    fn user_deck_files_override_bundled_decks() {
        let mut vocab_file = tempfile::NamedTempFile::new().unwrap();
        write!(
            vocab_file,
            r#"[{{
                "id": 1,
                "word": "Terse",
                "pronunciation": "/tɜːrs/",
                "meaning": "adj. sparing in the use of words",
                "example": "His answer was terse.",
                "difficulty": "easy"
            }}]"#
        )
        .unwrap();

        let library = Library::load(Some(vocab_file.path()), None).unwrap();
        assert_eq!(library.vocab.len(), 1);
        assert_eq!(library.vocab[0].word, "Terse");
        assert_eq!(library.vocab[0].difficulty, Difficulty::Easy);
        // Quiz deck stays bundled
        assert_eq!(library.quiz.len(), 3);
    }

    #[test]
    fn missing_deck_file_reports_the_path() {
        let err = Library::load(Some(Path::new("/nonexistent/deck.json")), None).unwrap_err();
        match err {
            ContentError::Read { path, .. } => assert!(path.contains("deck.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}

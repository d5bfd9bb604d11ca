use crate::content::QuizQuestion;

/// Points added to the session score per correct answer.
pub const SCORE_PER_CORRECT: u32 = 10;

/// What `submit_answer` did with the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Dropped: already revealed, already complete, or not a valid option.
    Ignored,
    Graded { correct: bool },
}

/// Quiz state machine.
///
/// Per question the session is either awaiting an answer or revealed with
/// an auto-advance pending; `advance` is driven by a one-shot timer owned
/// by the app. Reaching `question_count` is the terminal `complete` state,
/// left only through `reset`.
pub struct QuizSession {
    question_count: usize,
    index: usize,
    score: u32,
    correct_count: u32,
    selected: Option<String>,
    revealed: bool,
}

impl QuizSession {
    pub fn new(question_count: usize) -> Self {
        Self {
            question_count,
            index: 0,
            score: 0,
            correct_count: 0,
            selected: None,
            revealed: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.question_count
    }

    /// Fraction of questions answered correctly, for the completion view.
    pub fn accuracy(&self) -> f64 {
        if self.question_count == 0 {
            return 0.0;
        }
        self.correct_count as f64 / self.question_count as f64
    }

    /// Grade an answer to `question` (the question at the current index).
    /// Input arriving while revealed or complete is dropped, as is an
    /// option string that is not part of the question.
    pub fn submit_answer(&mut self, question: &QuizQuestion, option: &str) -> Submission {
        if self.is_complete() || self.revealed {
            return Submission::Ignored;
        }
        if !question.options.iter().any(|o| o == option) {
            return Submission::Ignored;
        }

        self.selected = Some(option.to_string());
        self.revealed = true;

        let correct = question.correct_answer == option;
        if correct {
            self.score += SCORE_PER_CORRECT;
            self.correct_count += 1;
        }
        Submission::Graded { correct }
    }

    /// Move past a revealed question: clear the selection and step the
    /// index; stepping past the last question completes the session.
    /// No-op unless revealed (the pending-advance invariant).
    pub fn advance(&mut self) {
        if !self.revealed {
            return;
        }
        self.selected = None;
        self.revealed = false;
        self.index += 1;
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.score = 0;
        self.correct_count = 0;
        self.selected = None;
        self.revealed = false;
    }
}

use std::time::{Duration, Instant};

use rust_i18n::t;

use crate::config::Config;
use crate::content::{Library, QuizQuestion};
use crate::engine::flashcards::FlashcardSession;
use crate::engine::progress::{Progress, XP_PER_CORRECT};
use crate::engine::quiz::{QuizSession, Submission};
use crate::share::{self, ClipboardSink};
use crate::timers::{PendingTimers, TimerKey};
use crate::ui::theme::Theme;

/// Delay between un-flipping a card and stepping to the next one.
pub const CARD_ADVANCE_DELAY: Duration = Duration::from_millis(200);
/// How long a graded answer stays revealed before auto-advancing.
pub const REVEAL_ADVANCE_DELAY: Duration = Duration::from_millis(1500);
/// Toast lifetime.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Flashcards,
    Quiz,
    Stats,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Home,
        Screen::Flashcards,
        Screen::Quiz,
        Screen::Stats,
    ];

    pub fn tab_index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.tab_index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.tab_index() + len - 1) % len]
    }
}

/// Everything a key press (or a due timer, via `Tick`) can ask of the app.
/// Key mapping lives in `main`; all state changes go through
/// [`App::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SwitchTo(Screen),
    NextTab,
    PrevTab,
    FlipCard,
    NextCard,
    SelectOption(usize),
    ResetQuiz,
    Share,
    Tick,
    Quit,
}

pub struct App {
    pub screen: Screen,
    pub library: Library,
    pub progress: Progress,
    pub flashcards: FlashcardSession,
    pub quiz: QuizSession,
    pub timers: PendingTimers,
    pub toast: Option<String>,
    pub theme: &'static Theme,
    pub config: Config,
    pub should_quit: bool,
    clipboard: Option<Box<dyn ClipboardSink>>,
}

impl App {
    /// `clipboard` is the capability for the share action; `None` means
    /// sharing is unavailable (headless session, no clipboard service).
    pub fn new(
        config: Config,
        library: Library,
        clipboard: Option<Box<dyn ClipboardSink>>,
    ) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let flashcards = FlashcardSession::new(library.vocab.len());
        let quiz = QuizSession::new(library.quiz.len());
        let progress = Progress {
            daily_goal: config.daily_goal,
            ..Progress::default()
        };

        Self {
            screen: Screen::Home,
            library,
            progress,
            flashcards,
            quiz,
            timers: PendingTimers::new(),
            toast: None,
            theme,
            config,
            should_quit: false,
            clipboard,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.library.quiz.get(self.quiz.index())
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::SwitchTo(screen) => self.switch_screen(screen),
            Action::NextTab => self.switch_screen(self.screen.next()),
            Action::PrevTab => self.switch_screen(self.screen.prev()),
            Action::FlipCard => {
                if self.screen == Screen::Flashcards {
                    self.flashcards.flip();
                }
            }
            Action::NextCard => {
                if self.screen == Screen::Flashcards {
                    self.flashcards.begin_advance();
                    self.timers
                        .schedule(TimerKey::CardAdvance, Instant::now() + CARD_ADVANCE_DELAY);
                }
            }
            Action::SelectOption(idx) => self.select_option(idx),
            Action::ResetQuiz => {
                if self.screen == Screen::Quiz {
                    self.timers.cancel(TimerKey::QuizAdvance);
                    self.quiz.reset();
                }
            }
            Action::Share => self.share(),
            Action::Tick => self.process_timers(Instant::now()),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Leaving a screen cancels its pending transition so a stale timer
    /// can never touch state the user has navigated away from. Entering
    /// the quiz always starts a fresh session; the flashcard session is
    /// per-visit and dies with its screen.
    fn switch_screen(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }

        match self.screen {
            Screen::Flashcards => {
                self.timers.cancel(TimerKey::CardAdvance);
                self.flashcards.reset();
            }
            Screen::Quiz => {
                self.timers.cancel(TimerKey::QuizAdvance);
            }
            _ => {}
        }

        if screen == Screen::Quiz {
            self.quiz.reset();
        }

        self.screen = screen;
    }

    fn select_option(&mut self, idx: usize) {
        if self.screen != Screen::Quiz {
            return;
        }
        let Some(question) = self.library.quiz.get(self.quiz.index()) else {
            return;
        };
        let Some(option) = question.options.get(idx).cloned() else {
            return;
        };

        match self.quiz.submit_answer(question, &option) {
            Submission::Graded { correct } => {
                if correct {
                    self.progress.award_xp(XP_PER_CORRECT);
                }
                self.timers
                    .schedule(TimerKey::QuizAdvance, Instant::now() + REVEAL_ADVANCE_DELAY);
            }
            Submission::Ignored => {}
        }
    }

    fn share(&mut self) {
        let text = share::summary(&self.progress);
        match self.clipboard.as_mut() {
            Some(sink) => match sink.set_text(&text) {
                Ok(()) => {
                    self.toast = Some(t!("share.copied").into_owned());
                    self.timers
                        .schedule(TimerKey::ToastDismiss, Instant::now() + TOAST_DURATION);
                }
                Err(err) => {
                    log::warn!("clipboard copy failed: {err:#}");
                }
            },
            None => {
                log::warn!("clipboard unavailable, share skipped");
            }
        }
    }

    /// Fire every due deferred transition. Called from `Tick` with the
    /// current time; tests pass a later instant instead of sleeping.
    pub fn process_timers(&mut self, now: Instant) {
        for key in self.timers.take_due(now) {
            match key {
                TimerKey::CardAdvance => self.flashcards.advance(),
                TimerKey::QuizAdvance => self.quiz.advance(),
                TimerKey::ToastDismiss => self.toast = None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::anyhow;

    use super::*;

    struct RecordingClipboard {
        copied: Rc<RefCell<Vec<String>>>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> anyhow::Result<()> {
            Err(anyhow!("no clipboard service"))
        }
    }

    fn app() -> App {
        App::new(Config::default(), Library::bundled().unwrap(), None)
    }

    fn app_with_clipboard(sink: Box<dyn ClipboardSink>) -> App {
        App::new(Config::default(), Library::bundled().unwrap(), Some(sink))
    }

    fn far_future() -> Instant {
        Instant::now() + Duration::from_secs(60)
    }

    /// Index of `option` in the current question, so tests can answer by
    /// word instead of position.
    fn option_index(app: &App, option: &str) -> usize {
        app.current_question()
            .unwrap()
            .options
            .iter()
            .position(|o| o == option)
            .unwrap()
    }

    fn correct_answer(app: &App) -> String {
        app.current_question().unwrap().correct_answer.clone()
    }

    fn wrong_answer(app: &App) -> String {
        let question = app.current_question().unwrap();
        question
            .options
            .iter()
            .find(|o| **o != question.correct_answer)
            .unwrap()
            .clone()
    }

    #[test]
    fn starts_on_the_home_screen() {
        let app = app();
        assert_eq!(app.screen, Screen::Home);
        assert!(!app.should_quit);
    }

    #[test]
    fn tab_cycling_covers_all_screens_and_wraps() {
        let mut app = app();
        let mut seen = vec![app.screen];
        for _ in 0..4 {
            app.update(Action::NextTab);
            seen.push(app.screen);
        }
        assert_eq!(seen.first(), seen.last());
        for screen in Screen::ALL {
            assert!(seen.contains(&screen));
        }
    }

    #[test]
    fn entering_the_quiz_screen_resets_the_session() {
        let mut app = app();
        app.update(Action::SwitchTo(Screen::Quiz));
        let correct = option_index(&app, &correct_answer(&app));
        app.update(Action::SelectOption(correct));
        app.process_timers(far_future());
        assert_eq!(app.quiz.index(), 1);

        app.update(Action::SwitchTo(Screen::Home));
        app.update(Action::SwitchTo(Screen::Quiz));
        assert_eq!(app.quiz.index(), 0);
        assert_eq!(app.quiz.score(), 0);
        assert!(!app.quiz.is_complete());
    }

    #[test]
    fn quiz_scenario_two_correct_one_wrong() {
        let mut app = app();
        let xp_before = app.progress.total_xp;
        app.update(Action::SwitchTo(Screen::Quiz));

        // Question 1 correct
        let idx = option_index(&app, &correct_answer(&app));
        app.update(Action::SelectOption(idx));
        app.process_timers(far_future());

        // Question 2 wrong
        let idx = option_index(&app, &wrong_answer(&app));
        app.update(Action::SelectOption(idx));
        app.process_timers(far_future());

        // Question 3 correct
        let idx = option_index(&app, &correct_answer(&app));
        app.update(Action::SelectOption(idx));
        app.process_timers(far_future());

        assert!(app.quiz.is_complete());
        assert_eq!(app.quiz.score(), 20);
        assert_eq!(app.progress.total_xp, xp_before + 40);
    }

    #[test]
    fn answering_vulnerable_reveals_then_advances_clean() {
        let mut app = app();
        app.update(Action::SwitchTo(Screen::Quiz));
        assert_eq!(correct_answer(&app), "vulnerable");

        let idx = option_index(&app, "vulnerable");
        app.update(Action::SelectOption(idx));
        assert!(app.quiz.is_revealed());
        assert_eq!(app.quiz.selected(), Some("vulnerable"));

        app.process_timers(far_future());
        assert_eq!(app.quiz.index(), 1);
        assert_eq!(app.quiz.selected(), None);
        assert!(!app.quiz.is_revealed());
    }

    #[test]
    fn second_answer_while_revealed_changes_nothing() {
        let mut app = app();
        app.update(Action::SwitchTo(Screen::Quiz));
        let wrong = option_index(&app, &wrong_answer(&app));
        app.update(Action::SelectOption(wrong));
        let selected_before = app.quiz.selected().map(str::to_string);
        let xp_before = app.progress.total_xp;

        let correct = option_index(&app, &correct_answer(&app));
        app.update(Action::SelectOption(correct));

        assert_eq!(app.quiz.score(), 0);
        assert_eq!(app.quiz.selected().map(str::to_string), selected_before);
        assert_eq!(app.quiz.index(), 0);
        assert_eq!(app.progress.total_xp, xp_before);
    }

    #[test]
    fn leaving_the_quiz_cancels_the_pending_advance() {
        let mut app = app();
        app.update(Action::SwitchTo(Screen::Quiz));
        let idx = option_index(&app, &correct_answer(&app));
        app.update(Action::SelectOption(idx));
        assert!(app.timers.is_pending(TimerKey::QuizAdvance));

        app.update(Action::SwitchTo(Screen::Home));
        assert!(!app.timers.is_pending(TimerKey::QuizAdvance));

        // The stale deadline passing mutates nothing
        app.process_timers(far_future());
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn flashcard_advance_fires_through_the_timer() {
        let mut app = app();
        app.update(Action::SwitchTo(Screen::Flashcards));
        app.update(Action::FlipCard);
        assert!(app.flashcards.is_flipped());

        app.update(Action::NextCard);
        // Un-flips immediately, index moves only when the timer fires
        assert!(!app.flashcards.is_flipped());
        assert_eq!(app.flashcards.index(), 0);

        app.process_timers(far_future());
        assert_eq!(app.flashcards.index(), 1);
    }

    #[test]
    fn leaving_flashcards_cancels_the_advance_and_resets_the_session() {
        let mut app = app();
        app.update(Action::SwitchTo(Screen::Flashcards));
        app.update(Action::NextCard);
        app.process_timers(far_future());
        app.update(Action::NextCard);
        assert!(app.timers.is_pending(TimerKey::CardAdvance));

        app.update(Action::SwitchTo(Screen::Stats));
        assert!(!app.timers.is_pending(TimerKey::CardAdvance));

        app.process_timers(far_future());
        app.update(Action::SwitchTo(Screen::Flashcards));
        assert_eq!(app.flashcards.index(), 0);
        assert!(!app.flashcards.is_flipped());
    }

    #[test]
    fn flip_actions_are_ignored_off_the_flashcards_screen() {
        let mut app = app();
        app.update(Action::FlipCard);
        app.update(Action::NextCard);
        assert!(!app.flashcards.is_flipped());
        assert!(!app.timers.is_pending(TimerKey::CardAdvance));
    }

    #[test]
    fn share_copies_the_summary_and_shows_a_toast() {
        let copied = Rc::new(RefCell::new(Vec::new()));
        let sink = RecordingClipboard {
            copied: Rc::clone(&copied),
        };
        let mut app = app_with_clipboard(Box::new(sink));

        app.update(Action::Share);
        assert!(app.toast.is_some());
        assert!(app.timers.is_pending(TimerKey::ToastDismiss));
        let texts = copied.borrow();
        assert_eq!(texts.len(), 1);
        assert!(texts[0].contains(&app.progress.total_xp.to_string()));

        drop(texts);
        app.process_timers(far_future());
        assert!(app.toast.is_none());
    }

    #[test]
    fn failed_share_shows_no_toast() {
        let mut app = app_with_clipboard(Box::new(BrokenClipboard));
        app.update(Action::Share);
        assert!(app.toast.is_none());
        assert!(!app.timers.is_pending(TimerKey::ToastDismiss));
    }

    #[test]
    fn share_without_a_clipboard_is_a_quiet_no_op() {
        let mut app = app();
        app.update(Action::Share);
        assert!(app.toast.is_none());
    }

    #[test]
    fn reset_quiz_action_restores_a_fresh_session() {
        let mut app = app();
        app.update(Action::SwitchTo(Screen::Quiz));
        for _ in 0..3 {
            let idx = option_index(&app, &correct_answer(&app));
            app.update(Action::SelectOption(idx));
            app.process_timers(far_future());
        }
        assert!(app.quiz.is_complete());

        app.update(Action::ResetQuiz);
        assert!(!app.quiz.is_complete());
        assert_eq!(app.quiz.index(), 0);
        assert_eq!(app.quiz.score(), 0);
        assert_eq!(app.quiz.selected(), None);
    }

    #[test]
    fn quit_action_sets_the_exit_flag() {
        let mut app = app();
        app.update(Action::Quit);
        assert!(app.should_quit);
    }
}

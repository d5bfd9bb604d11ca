mod app;
mod config;
mod content;
mod engine;
mod event;
mod share;
mod timers;
mod ui;

rust_i18n::i18n!("locales", fallback = "en");

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use rust_i18n::t;

use app::{Action, App, Screen};
use config::Config;
use content::Library;
use event::{AppEvent, EventHandler};
use share::{ClipboardSink, SystemClipboard};
use ui::components::flashcard::FlashcardView;
use ui::components::home::HomeView;
use ui::components::quiz::QuizView;
use ui::components::stats::StatsView;
use ui::components::tab_bar::TabBar;
use ui::components::toast::Toast;
use ui::layout::AppLayout;

#[derive(Parser)]
#[command(
    name = "vocable",
    version,
    about = "Terminal vocabulary trainer with flashcards and quick quizzes"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "UI locale (en, zh-CN)")]
    locale: Option<String>,

    #[arg(long, help = "Words per day for the daily goal")]
    daily_goal: Option<u32>,

    #[arg(long, help = "Replace the bundled vocabulary deck with a JSON file")]
    vocab_file: Option<PathBuf>,

    #[arg(long, help = "Replace the bundled quiz deck with a JSON file")]
    quiz_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(goal) = cli.daily_goal {
        config.daily_goal = goal;
    }
    config.normalize_daily_goal();

    rust_i18n::set_locale(&config.locale);

    if ui::theme::Theme::load(&config.theme).is_none() {
        log::warn!(
            "theme {:?} not found, using default (available: {})",
            config.theme,
            ui::theme::Theme::available_themes().join(", ")
        );
    }

    // Deck problems are a startup failure, reported before touching the
    // terminal
    let library = Library::load(cli.vocab_file.as_deref(), cli.quiz_file.as_deref())?;

    let clipboard = match SystemClipboard::new() {
        Ok(sink) => Some(Box::new(sink) as Box<dyn ClipboardSink>),
        Err(err) => {
            log::warn!("clipboard unavailable: {err:#}");
            None
        }
    };

    let mut app = App::new(config, library, clipboard);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn init_logging() {
    let log_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocable");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(log_dir.join("vocable.log")) else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => {
                if let Some(action) = handle_key(app, key) {
                    app.update(action);
                }
            }
            AppEvent::Tick | AppEvent::Resize => {}
        }

        // Deferred transitions are due-checked on every wakeup, key or tick
        app.update(Action::Tick);

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &App, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Tab => return Some(Action::NextTab),
        KeyCode::BackTab => return Some(Action::PrevTab),
        _ => {}
    }

    match app.screen {
        Screen::Home => handle_home_key(key),
        Screen::Flashcards => handle_flashcards_key(key),
        Screen::Quiz => handle_quiz_key(app, key),
        Screen::Stats => handle_stats_key(key),
    }
}

fn handle_home_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('1') => Some(Action::SwitchTo(Screen::Flashcards)),
        KeyCode::Char('2') => Some(Action::SwitchTo(Screen::Quiz)),
        KeyCode::Char('3') => Some(Action::SwitchTo(Screen::Stats)),
        KeyCode::Char('s') => Some(Action::Share),
        _ => None,
    }
}

fn handle_flashcards_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::SwitchTo(Screen::Home)),
        KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Enter => Some(Action::FlipCard),
        KeyCode::Char('n') | KeyCode::Right => Some(Action::NextCard),
        _ => None,
    }
}

fn handle_quiz_key(app: &App, key: KeyEvent) -> Option<Action> {
    if app.quiz.is_complete() {
        return match key.code {
            KeyCode::Char('r') | KeyCode::Enter => Some(Action::ResetQuiz),
            KeyCode::Esc => Some(Action::SwitchTo(Screen::Home)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::SwitchTo(Screen::Home)),
        KeyCode::Char(ch @ '1'..='4') => Some(Action::SelectOption(ch as usize - '1' as usize)),
        KeyCode::Char(ch @ 'a'..='d') => Some(Action::SelectOption(ch as usize - 'a' as usize)),
        _ => None,
    }
}

fn handle_stats_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::SwitchTo(Screen::Home)),
        _ => None,
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area);

    render_header(frame, app, layout.header);

    match app.screen {
        Screen::Home => {
            frame.render_widget(HomeView::new(&app.progress, app.theme), layout.content);
        }
        Screen::Flashcards => {
            if let Some(entry) = app.library.vocab.get(app.flashcards.index()) {
                let card = FlashcardView::new(
                    entry,
                    app.flashcards.is_flipped(),
                    app.flashcards.index(),
                    app.library.vocab.len(),
                    app.theme,
                );
                frame.render_widget(card, layout.content);
            }
        }
        Screen::Quiz => {
            let quiz = QuizView::new(
                &app.quiz,
                app.current_question(),
                app.library.quiz.len(),
                app.theme,
            );
            frame.render_widget(quiz, layout.content);
        }
        Screen::Stats => {
            frame.render_widget(StatsView::new(&app.progress, app.theme), layout.content);
        }
    }

    frame.render_widget(TabBar::new(app.screen.tab_index(), app.theme), layout.tab_bar);
    render_hints(frame, app, layout.hint_bar);

    // Toast overlays whatever screen is active
    if let Some(ref message) = app.toast {
        frame.render_widget(Toast::new(message, app.theme), area);
    }
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;

    let subtitle = match app.screen {
        Screen::Home => t!("app.tagline"),
        Screen::Flashcards => t!("flashcards.title"),
        Screen::Quiz => t!("tabs.quiz"),
        Screen::Stats => t!("stats.title"),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", t!("app.title")),
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {subtitle}"),
            Style::default().fg(colors.text_dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_hints(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;

    let key = match app.screen {
        Screen::Home => "hints.home",
        Screen::Flashcards => "hints.flashcards",
        Screen::Quiz => {
            if app.quiz.is_complete() {
                "hints.quiz_complete"
            } else {
                "hints.quiz"
            }
        }
        Screen::Stats => "hints.stats",
    };

    let hints = Paragraph::new(Line::from(Span::styled(
        format!(" {}", t!(key)),
        Style::default().fg(colors.text_dim()),
    )));
    frame.render_widget(hints, area);
}

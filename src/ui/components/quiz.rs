use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::content::QuizQuestion;
use crate::engine::progress::XP_PER_CORRECT;
use crate::engine::quiz::QuizSession;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

pub struct QuizView<'a> {
    pub session: &'a QuizSession,
    pub question: Option<&'a QuizQuestion>,
    pub total: usize,
    pub theme: &'a Theme,
}

impl<'a> QuizView<'a> {
    pub fn new(
        session: &'a QuizSession,
        question: Option<&'a QuizQuestion>,
        total: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            session,
            question,
            total,
            theme,
        }
    }
}

impl Widget for QuizView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.session.is_complete() {
            self.render_complete(area, buf);
        } else if let Some(question) = self.question {
            self.render_question(question, area, buf);
        }
    }
}

impl QuizView<'_> {
    fn render_question(&self, question: &QuizQuestion, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(area);

        // Header: counter, per-question progress segments, running score
        let counter = t!(
            "quiz.progress",
            current = self.session.index() + 1,
            total = self.total
        );
        let score = t!("quiz.score", score = self.session.score());

        let mut header_spans = vec![Span::styled(
            format!("{counter}  "),
            Style::default().fg(colors.text_dim()),
        )];
        for idx in 0..self.total {
            let color = if idx <= self.session.index() {
                colors.accent()
            } else {
                colors.accent_dim()
            };
            header_spans.push(Span::styled("▰▰ ", Style::default().fg(color)));
        }
        Paragraph::new(Line::from(header_spans)).render(layout[0], buf);
        Paragraph::new(Line::from(Span::styled(
            score.into_owned(),
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Right)
        .render(layout[0], buf);

        // Question text
        Paragraph::new(Line::from(Span::styled(
            question.question.as_str(),
            Style::default()
                .fg(colors.fg())
                .add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true })
        .render(layout[1], buf);

        // Options
        let option_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                question
                    .options
                    .iter()
                    .map(|_| Constraint::Length(2))
                    .collect::<Vec<_>>(),
            )
            .split(layout[2]);

        for (idx, option) in question.options.iter().enumerate() {
            let revealed = self.session.is_revealed();
            let is_correct = *option == question.correct_answer;
            let is_selected = self.session.selected() == Some(option.as_str());

            let (marker, style) = if revealed && is_correct {
                (
                    " ✓",
                    Style::default()
                        .fg(colors.success())
                        .add_modifier(Modifier::BOLD),
                )
            } else if revealed && is_selected {
                (
                    " ✗",
                    Style::default()
                        .fg(colors.error())
                        .add_modifier(Modifier::BOLD),
                )
            } else if revealed {
                ("", Style::default().fg(colors.text_dim()))
            } else {
                ("", Style::default().fg(colors.fg()))
            };

            let key_style = if revealed {
                Style::default().fg(colors.text_dim())
            } else {
                Style::default().fg(colors.accent())
            };

            let line = Line::from(vec![
                Span::styled(format!("  [{}] ", idx + 1), key_style),
                Span::styled(option.as_str(), style),
                Span::styled(marker, style),
            ]);
            if idx < option_rows.len() {
                Paragraph::new(line).render(option_rows[idx], buf);
            }
        }

        // Feedback row while the auto-advance is pending
        if self.session.is_revealed() {
            Paragraph::new(Line::from(Span::styled(
                t!("quiz.next_pending"),
                Style::default().fg(colors.text_dim()),
            )))
            .alignment(Alignment::Center)
            .render(layout[3], buf);
        }
    }

    fn render_complete(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let panel = centered_rect(44, 12, area);
        let block = Block::bordered()
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(panel);
        block.render(panel, buf);

        let accuracy = format!("{:.0}%", self.session.accuracy() * 100.0);
        let xp_gained = format!("+{}", self.session.correct_count() * XP_PER_CORRECT);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                t!("quiz.complete_title"),
                Style::default()
                    .fg(colors.warning())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                t!("quiz.complete_score", score = self.session.score()),
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("{}: ", t!("quiz.accuracy")),
                    Style::default().fg(colors.text_dim()),
                ),
                Span::styled(
                    accuracy,
                    Style::default()
                        .fg(colors.success())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("   ", Style::default()),
                Span::styled(
                    format!("{}: ", t!("quiz.xp_gained")),
                    Style::default().fg(colors.text_dim()),
                ),
                Span::styled(
                    xp_gained,
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::content::VocabEntry;
use crate::ui::theme::Theme;

/// A single two-sided card: term side (word, pronunciation, difficulty)
/// or meaning side (definition, example).
pub struct FlashcardView<'a> {
    pub entry: &'a VocabEntry,
    pub flipped: bool,
    pub position: usize,
    pub total: usize,
    pub theme: &'a Theme,
}

impl<'a> FlashcardView<'a> {
    pub fn new(
        entry: &'a VocabEntry,
        flipped: bool,
        position: usize,
        total: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            entry,
            flipped,
            position,
            total,
            theme,
        }
    }
}

impl Widget for FlashcardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(8)])
            .split(area);

        // Position indicator, right aligned like a counter pill
        let position_text = t!(
            "flashcards.position",
            current = self.position + 1,
            total = self.total
        );
        Paragraph::new(Line::from(Span::styled(
            position_text.into_owned(),
            Style::default().fg(colors.text_dim()),
        )))
        .alignment(Alignment::Right)
        .render(layout[0], buf);

        let border_color = if self.flipped {
            colors.border_focused()
        } else {
            colors.border()
        };
        let card = Block::bordered().border_style(Style::default().fg(border_color));
        let inner = card.inner(layout[1]);
        card.render(layout[1], buf);

        let lines = if self.flipped {
            self.back_lines()
        } else {
            self.front_lines()
        };

        // Vertically center the card text
        let text_height = lines.len() as u16;
        let top_pad = inner.height.saturating_sub(text_height) / 2;
        let text_area = Rect::new(
            inner.x,
            inner.y + top_pad,
            inner.width,
            inner.height.saturating_sub(top_pad),
        );

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}

impl FlashcardView<'_> {
    fn front_lines(&self) -> Vec<Line<'_>> {
        let colors = &self.theme.colors;
        let difficulty_key = format!("difficulty.{}", self.entry.difficulty.as_str());
        vec![
            Line::from(Span::styled(
                format!("[ {} ]", t!(&difficulty_key)),
                Style::default().fg(colors.difficulty(self.entry.difficulty)),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.entry.word.as_str(),
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.entry.pronunciation.as_str(),
                Style::default().fg(colors.text_dim()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                t!("flashcards.flip_prompt"),
                Style::default().fg(colors.text_dim()),
            )),
        ]
    }

    fn back_lines(&self) -> Vec<Line<'_>> {
        let colors = &self.theme.colors;
        vec![
            Line::from(Span::styled(
                self.entry.meaning.as_str(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "────────",
                Style::default().fg(colors.accent_dim()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("\"{}\"", self.entry.example),
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(Modifier::ITALIC),
            )),
        ]
    }
}

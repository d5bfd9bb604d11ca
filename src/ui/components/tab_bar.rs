use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use rust_i18n::t;

use crate::ui::theme::Theme;

/// Bottom navigation bar, one label per screen in tab order.
pub struct TabBar<'a> {
    pub active: usize,
    pub theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(active: usize, theme: &'a Theme) -> Self {
        Self { active, theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let labels = [
            t!("tabs.home"),
            t!("tabs.flashcards"),
            t!("tabs.quiz"),
            t!("tabs.stats"),
        ];

        let spans: Vec<Span> = labels
            .iter()
            .enumerate()
            .flat_map(|(i, label)| {
                let style = if i == self.active {
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(colors.text_dim())
                };
                vec![Span::styled(format!("  {label}  "), style)]
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(colors.header_bg()))
            .render(area, buf);
    }
}

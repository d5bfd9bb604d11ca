use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};

use crate::ui::theme::Theme;

/// Transient notice overlaid near the top of the screen, dismissed by a
/// one-shot timer.
pub struct Toast<'a> {
    pub message: &'a str,
    pub theme: &'a Theme,
}

impl<'a> Toast<'a> {
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let width = (self.message.chars().count() as u16 + 4).min(area.width);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + 1;
        if y >= area.y + area.height {
            return;
        }
        let toast_area = Rect::new(x, y, width, 1);

        Clear.render(toast_area, buf);
        Paragraph::new(Line::from(Span::styled(
            format!("  {}  ", self.message),
            Style::default().fg(colors.toast_fg()).bg(colors.toast_bg()),
        )))
        .style(Style::default().bg(colors.toast_bg()))
        .render(toast_area, buf);
    }
}

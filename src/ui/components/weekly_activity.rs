use chrono::{Datelike, Local};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use rust_i18n::t;

use crate::ui::theme::Theme;

/// Display baseline for the seven weekday bars, Monday first. There is no
/// usage-history store in scope to derive these from; only the current
/// weekday is live.
const WEEK_BASELINE: [u16; 7] = [40, 70, 30, 85, 50, 90, 60];

const WEEKDAY_KEYS: [&str; 7] = [
    "weekdays.mon",
    "weekdays.tue",
    "weekdays.wed",
    "weekdays.thu",
    "weekdays.fri",
    "weekdays.sat",
    "weekdays.sun",
];

pub struct WeeklyActivity<'a> {
    today: usize,
    theme: &'a Theme,
}

impl<'a> WeeklyActivity<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        let today = Local::now().weekday().num_days_from_monday() as usize;
        Self { today, theme }
    }
}

impl Widget for WeeklyActivity<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", t!("stats.weekly")))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width < 14 {
            return;
        }

        // Bottom row is the weekday labels, the rest is bar space
        let bar_rows = inner.height - 1;
        let col_width = inner.width / 7;

        for (day, &level) in WEEK_BASELINE.iter().enumerate() {
            let col_x = inner.x + day as u16 * col_width;
            let center_x = col_x + col_width / 2;

            let bar_color = if day == self.today {
                colors.accent()
            } else {
                colors.accent_dim()
            };

            let bar_height = ((level as u32 * bar_rows as u32) / 100).max(1) as u16;
            for row in 0..bar_height {
                let y = inner.y + bar_rows - 1 - row;
                buf.set_string(center_x, y, "█", Style::default().fg(bar_color));
                if col_width >= 3 {
                    buf.set_string(center_x + 1, y, "█", Style::default().fg(bar_color));
                }
            }

            let label_style = if day == self.today {
                Style::default().fg(colors.accent())
            } else {
                Style::default().fg(colors.text_dim())
            };
            buf.set_stringn(
                center_x,
                inner.y + bar_rows,
                t!(WEEKDAY_KEYS[day]).as_ref(),
                (inner.x + inner.width).saturating_sub(center_x) as usize,
                label_style,
            );
        }
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::engine::progress::Progress;
use crate::ui::components::weekly_activity::WeeklyActivity;
use crate::ui::theme::Theme;

/// Achievement display fixtures: (title key, description key, unlocked).
const ACHIEVEMENTS: [(&str, &str, bool); 2] = [
    ("stats.ach_master_title", "stats.ach_master_desc", true),
    ("stats.ach_speed_title", "stats.ach_speed_desc", false),
];

pub struct StatsView<'a> {
    pub progress: &'a Progress,
    pub theme: &'a Theme,
}

impl<'a> StatsView<'a> {
    pub fn new(progress: &'a Progress, theme: &'a Theme) -> Self {
        Self { progress, theme }
    }
}

impl Widget for StatsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(9),
                Constraint::Min(6),
            ])
            .split(area);

        // Headline stat cards
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[0]);

        render_stat_card(
            cards[0],
            buf,
            &self.progress.total_xp.to_string(),
            &t!("stats.total_xp"),
            colors.accent(),
            self.theme,
        );
        render_stat_card(
            cards[1],
            buf,
            &self.progress.streak_days.to_string(),
            &t!("stats.streak"),
            colors.warning(),
            self.theme,
        );

        WeeklyActivity::new(self.theme).render(layout[1], buf);

        // Achievements
        let block = Block::bordered()
            .title(format!(" {} ", t!("stats.achievements")))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(layout[2]);
        block.render(layout[2], buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                ACHIEVEMENTS
                    .iter()
                    .map(|_| Constraint::Length(2))
                    .collect::<Vec<_>>(),
            )
            .split(inner);

        for (i, (title_key, desc_key, unlocked)) in ACHIEVEMENTS.iter().enumerate() {
            if i >= rows.len() {
                break;
            }
            let (status, status_color, title_color) = if *unlocked {
                (t!("stats.unlocked"), colors.success(), colors.fg())
            } else {
                (t!("stats.locked"), colors.text_dim(), colors.text_dim())
            };

            let lines = vec![
                Line::from(Span::styled(
                    format!(" {}", t!(*title_key)),
                    Style::default()
                        .fg(title_color)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("   {}", t!(*desc_key)),
                    Style::default().fg(colors.text_dim()),
                )),
            ];
            Paragraph::new(lines).render(rows[i], buf);

            Paragraph::new(Line::from(Span::styled(
                format!("{status} "),
                Style::default().fg(status_color),
            )))
            .alignment(Alignment::Right)
            .render(rows[i], buf);
        }
    }
}

fn render_stat_card(
    area: Rect,
    buf: &mut Buffer,
    value: &str,
    label: &str,
    accent: ratatui::style::Color,
    theme: &Theme,
) {
    let colors = &theme.colors;
    let block = Block::bordered().border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(colors.text_dim()),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);
}

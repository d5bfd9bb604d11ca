use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::engine::progress::Progress;
use crate::ui::components::progress_bar::ProgressBar;
use crate::ui::theme::Theme;

/// Home dashboard: XP banner, daily-goal bar, the two study entry points,
/// and the recommendation card.
pub struct HomeView<'a> {
    pub progress: &'a Progress,
    pub theme: &'a Theme,
}

impl<'a> HomeView<'a> {
    pub fn new(progress: &'a Progress, theme: &'a Theme) -> Self {
        Self { progress, theme }
    }
}

impl Widget for HomeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        if area.height < 17 || area.width < 20 {
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        // XP banner
        let banner = Block::bordered()
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.header_bg()));
        let banner_inner = banner.inner(layout[0]);
        banner.render(layout[0], buf);

        let xp_text = format!(" {}", self.progress.total_xp);
        let streak_text = format!(
            "  {}",
            t!("home.streak", days = self.progress.streak_days)
        );
        let banner_lines = vec![
            Line::from(Span::styled(
                format!(" {}", t!("home.total_xp")),
                Style::default().fg(colors.text_dim()).bg(colors.header_bg()),
            )),
            Line::from(vec![
                Span::styled(
                    xp_text,
                    Style::default()
                        .fg(colors.accent())
                        .bg(colors.header_bg())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    streak_text,
                    Style::default().fg(colors.warning()).bg(colors.header_bg()),
                ),
            ]),
        ];
        Paragraph::new(banner_lines)
            .style(Style::default().bg(colors.header_bg()))
            .render(banner_inner, buf);

        // Daily goal bar with the encouragement line under it
        let goal_area = layout[1];
        let bar_area = Rect::new(goal_area.x, goal_area.y, goal_area.width, 3);
        let goal_bar = ProgressBar::new(
            t!("home.daily_goal").into_owned(),
            self.progress.goal_ratio(),
            self.theme,
        )
        .value_text(
            t!(
                "home.daily_words",
                done = self.progress.daily_progress,
                goal = self.progress.daily_goal
            )
            .into_owned(),
        );
        goal_bar.render(bar_area, buf);

        if goal_area.height > 3 {
            let line_area = Rect::new(goal_area.x, goal_area.y + 3, goal_area.width, 1);
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", t!("home.keep_going")),
                Style::default().fg(colors.text_dim()),
            )))
            .render(line_area, buf);
        }

        // Study entry points
        let actions = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[2]);

        render_action_card(
            actions[0],
            buf,
            "1",
            &t!("home.flashcards_title"),
            &t!("home.flashcards_desc"),
            colors.accent(),
            self.theme,
        );
        render_action_card(
            actions[1],
            buf,
            "2",
            &t!("home.quiz_title"),
            &t!("home.quiz_desc"),
            colors.warning(),
            self.theme,
        );

        // Recommendation
        let recommended = Block::bordered()
            .title(format!(" {} ", t!("home.recommended")))
            .border_style(Style::default().fg(colors.border()));
        let rec_inner = recommended.inner(layout[3]);
        recommended.render(layout[3], buf);
        let rec_lines = vec![
            Line::from(Span::styled(
                format!(" {}", t!("home.recommended_title")),
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}", t!("home.recommended_desc")),
                Style::default().fg(colors.text_dim()),
            )),
        ];
        Paragraph::new(rec_lines).render(rec_inner, buf);
    }
}

fn render_action_card(
    area: Rect,
    buf: &mut Buffer,
    key: &str,
    title: &str,
    desc: &str,
    accent: ratatui::style::Color,
    theme: &Theme,
) {
    let colors = &theme.colors;
    let block = Block::bordered().border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::from(Span::styled(
            format!("[{key}] {title}"),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            desc.to_string(),
            Style::default().fg(colors.text_dim()),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);
}

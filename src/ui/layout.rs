use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Column width the screens are designed for; wider terminals get the
/// content centered in a phone-like column.
const CONTENT_COLUMN_WIDTH: u16 = 64;

pub struct AppLayout {
    pub header: Rect,
    pub content: Rect,
    pub tab_bar: Rect,
    pub hint_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            content: content_column(vertical[1]),
            tab_bar: vertical[2],
            hint_bar: vertical[3],
        }
    }
}

/// Center a phone-width column inside `area`; narrow terminals get the
/// full width.
pub fn content_column(area: Rect) -> Rect {
    if area.width <= CONTENT_COLUMN_WIDTH {
        return area;
    }
    let left = area.x + (area.width - CONTENT_COLUMN_WIDTH) / 2;
    Rect::new(left, area.y, CONTENT_COLUMN_WIDTH, area.height)
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let target_w = width.min(area.width);
    let target_h = height.min(area.height);
    let left = area.x + (area.width.saturating_sub(target_w)) / 2;
    let top = area.y + (area.height.saturating_sub(target_h)) / 2;
    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_column_centers_on_wide_terminals() {
        let area = Rect::new(0, 0, 120, 40);
        let column = content_column(area);
        assert_eq!(column.width, CONTENT_COLUMN_WIDTH);
        assert_eq!(column.x, (120 - CONTENT_COLUMN_WIDTH) / 2);
    }

    #[test]
    fn content_column_uses_full_width_when_narrow() {
        let area = Rect::new(0, 0, 50, 40);
        assert_eq!(content_column(area), area);
    }

    #[test]
    fn centered_rect_never_exceeds_the_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(40, 30, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}

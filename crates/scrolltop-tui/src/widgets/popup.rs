use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key binding overlay
    pub fn render_help(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let keymap = &app.config.keymap;
        let rows = [
            (keymap.move_down.as_str(), "scroll down one row"),
            (keymap.move_up.as_str(), "scroll up one row"),
            (keymap.scroll_half_down.as_str(), "half page down"),
            (keymap.scroll_half_up.as_str(), "half page up"),
            (keymap.scroll_page_down.as_str(), "page down"),
            (keymap.scroll_page_up.as_str(), "page up"),
            (keymap.jump_to_top.as_str(), "jump to top"),
            (keymap.jump_to_bottom.as_str(), "jump to bottom"),
            (keymap.scroll_to_top.as_str(), "smooth scroll to top"),
            (keymap.next_page.as_str(), "switch page"),
            (keymap.increment.as_str(), "counter +"),
            (keymap.decrement.as_str(), "counter -"),
            (keymap.reset.as_str(), "counter reset"),
            (keymap.quit.as_str(), "quit"),
        ];

        let area = frame.area();
        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (rows.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let mut lines: Vec<Line> = rows
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>8}  ", truncate_str(key, 8)),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*desc, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                Style::default().fg(theme.grey1),
            ))
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Truncate a string to max length with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(20, 10, Rect::new(0, 0, 80, 30));
        assert_eq!(rect, Rect::new(30, 10, 20, 10));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("<C-d>", 8), "<C-d>");
        assert_eq!(truncate_str("<PageDown>", 8), "<PageDo…");
    }
}

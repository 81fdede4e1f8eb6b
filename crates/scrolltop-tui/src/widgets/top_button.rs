use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use scrolltop_core::IconId;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Floating scroll-to-top button in the bottom-right corner of the content area
pub struct TopButtonWidget;

impl TopButtonWidget {
    /// Draw the button if the controller reports it visible.
    /// Returns the drawn area for hit testing.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) -> Option<Rect> {
        let controller = app.scroll_to_top();
        if !controller.is_visible() {
            return None;
        }

        let label = format!(" {} {} ", IconId::ArrowUp.glyph(), controller.label());
        let button = Self::area(area, label.width() as u16)?;
        let theme = &app.theme;

        let border = if controller.is_animating() {
            theme.accent
        } else {
            theme.grey1
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.bg2));
        let paragraph = Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);

        frame.render_widget(Clear, button);
        frame.render_widget(paragraph, button);
        Some(button)
    }

    /// Button rect inside `area`, one cell in from the bottom-right border.
    /// `None` when the area is too small to hold it.
    pub fn area(area: Rect, label_width: u16) -> Option<Rect> {
        let width = label_width + 2;
        let height = 3;
        if area.width < width + 2 || area.height < height + 2 {
            return None;
        }
        Some(Rect::new(
            area.x + area.width - width - 1,
            area.y + area.height - height - 1,
            width,
            height,
        ))
    }
}

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let status_text = match &app.status_message {
            Some(msg) => format!(" {} | {}", mode_str, msg),
            None => format!(
                " {} | {} | offset {:.0}px",
                mode_str,
                app.page.title(),
                app.scroll_offset()
            ),
        };

        let keymap = &app.config.keymap;
        let help_hint = format!(
            " {}:quit {}:page {}:top {}:help ",
            keymap.quit, keymap.next_page, keymap.scroll_to_top, keymap.help
        );
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

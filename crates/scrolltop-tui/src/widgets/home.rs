use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use scrolltop_core::catalog::CategoryGroup;

use crate::app::App;
use crate::theme::Theme;

/// Rows per entry: title, summary, spacer
pub const CARD_HEIGHT: u16 = 3;

/// Rows per category heading: title, spacer
pub const HEADING_HEIGHT: u16 = 2;

/// Total rows the home page renders for `groups`
pub fn content_rows(groups: &[CategoryGroup<'_>]) -> u16 {
    groups
        .iter()
        .map(|g| HEADING_HEIGHT + CARD_HEIGHT * g.entries.len() as u16)
        .sum()
}

pub struct HomeWidget;

impl HomeWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .title(" Tools ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey0))
            .style(Style::default().bg(theme.bg0));

        let lines = Self::lines(&app.groups(), theme);
        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((app.scroll_row(), 0));
        frame.render_widget(paragraph, area);
    }

    fn lines<'a>(groups: &[CategoryGroup<'a>], theme: &Theme) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for group in groups {
            lines.push(Line::from(Span::styled(
                group.category.to_uppercase(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());

            for entry in &group.entries {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {} ", entry.icon.glyph()), Style::default().fg(theme.info)),
                    Span::styled(
                        entry.title,
                        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("    {}", entry.summary),
                    Style::default().fg(theme.grey1),
                )));
                lines.push(Line::default());
            }
        }
        lines
    }
}

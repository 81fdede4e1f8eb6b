use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub struct CounterWidget;

impl CounterWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .title(" Counter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey0))
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1), // Value
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Bounds
                Constraint::Length(1), // Hint
                Constraint::Fill(1),
            ])
            .split(inner);

        let counter = &app.counter;
        let value_style = if counter.at_min() || counter.at_max() {
            Style::default().fg(theme.warning)
        } else {
            Style::default().fg(theme.fg0)
        };
        let value = Paragraph::new(Line::from(Span::styled(
            counter.value().to_string(),
            value_style.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(value, chunks[1]);

        let (min, max) = counter.bounds();
        let bounds = Paragraph::new(Line::from(Span::styled(
            format!("range {}..={}  step {}", min, max, counter.step()),
            Style::default().fg(theme.grey1),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(bounds, chunks[3]);

        let keymap = &app.config.keymap;
        let key = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
        let text = Style::default().fg(theme.grey1);
        let hint = Paragraph::new(Line::from(vec![
            Span::styled(keymap.increment.as_str(), key),
            Span::styled(" increment  ", text),
            Span::styled(keymap.decrement.as_str(), key),
            Span::styled(" decrement  ", text),
            Span::styled(keymap.reset.as_str(), key),
            Span::styled(" reset", text),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[4]);
    }
}

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll interval while frames or timers are pending
    animation_tick: Duration,
}

impl EventHandler {
    pub fn with_animation_fps(tick_rate_ms: u64, fps: u16) -> Self {
        let fps = u64::from(fps.max(1));
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
            animation_tick: Duration::from_millis((1000 / fps).max(1)),
        }
    }

    pub fn animation_tick(&self) -> Duration {
        self.animation_tick
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll with the frame interval, used while the viewport is animating
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(Some(AppEvent::Tick));
        }
        match event::read()? {
            Event::Key(key) => {
                // Only handle key press events, ignore release events
                // (crossterm 0.27+ sends release events on some systems)
                if key.kind == KeyEventKind::Press {
                    Ok(Some(AppEvent::Key(key)))
                } else {
                    Ok(None)
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => Ok(None),
                _ => Ok(Some(AppEvent::Mouse(mouse))),
            },
            Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
            _ => Ok(None),
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse click or wheel
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_tick_from_fps() {
        let handler = EventHandler::with_animation_fps(100, 60);
        assert_eq!(handler.animation_tick(), Duration::from_millis(16));

        let handler = EventHandler::with_animation_fps(100, 0);
        assert_eq!(handler.animation_tick(), Duration::from_millis(1000));
    }
}

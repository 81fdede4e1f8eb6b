use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use scrolltop_core::AppConfig;
use scrolltop_tui::{
    app::{App, Mode, Page},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    load_theme,
    widgets::{CounterWidget, HomeWidget, PopupWidget, StatusBarWidget, TopButtonWidget},
};

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    let mut app = App::new(config.clone(), theme);
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("scrolltop"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("TUI started");

    let result = main_loop(&mut terminal, &mut app, &keymap, &event_handler);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!("TUI stopped");

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        // Timers, scroll events, then one animation frame
        app.pump();

        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);
            let content = main_layout[0];

            // Inner height of the bordered page
            app.set_viewport_height(content.height.saturating_sub(2));

            match app.page {
                Page::Home => HomeWidget::render(frame, content, app),
                Page::Counter => CounterWidget::render(frame, content, app),
            }
            app.button_area = TopButtonWidget::render(frame, content, app);
            StatusBarWidget::render(frame, main_layout[1], app);

            if app.mode == Mode::Help {
                PopupWidget::render_help(frame, app);
            }
        })?;

        // Poll at frame rate while an animation or throttled evaluation is pending
        let event = if app.is_busy() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    handle_action(app, action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, app);
                    handle_action(app, action);
                }
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_action(app: &mut App, action: Action) {
    // Any action other than the first 'g' ends a pending sequence
    if action != Action::PendingG {
        app.pending_key = None;
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::NextPage => app.next_page(),
        Action::MoveDown => app.move_down(),
        Action::MoveUp => app.move_up(),
        Action::ScrollHalfPageDown => app.scroll_half_page_down(),
        Action::ScrollHalfPageUp => app.scroll_half_page_up(),
        Action::ScrollPageDown => app.scroll_page_down(),
        Action::ScrollPageUp => app.scroll_page_up(),
        Action::WheelDown => app.scroll_rows(3),
        Action::WheelUp => app.scroll_rows(-3),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => app.pending_key = Some('g'),
        Action::ScrollToTop => app.activate_scroll_to_top(),
        Action::Increment => app.increment(),
        Action::Decrement => app.decrement(),
        Action::Reset => app.reset_counter(),
        Action::Help => app.toggle_help(),
        Action::ExitMode => {
            app.mode = Mode::Normal;
            app.clear_status();
        }
        Action::None => {}
    }
}

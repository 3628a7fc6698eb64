// Event handling and main UI loop

use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::routine::{Catalog, Period};
use crate::ui::{
    HelpModal, HomeScreen, ProductsScreen, ProfileScreen, QuitModal, RoutinesScreen,
    state::{AppState, HelpModalState, QuitConfirmationState, Screen},
};

mod help;
mod home;
mod products;
mod profile;
mod routines;

// Event types sent from the dedicated event thread to the main loop
pub enum UiEvent {
    Input(Event), // Keyboard or other terminal events
    Tick,         // One-second cadence driving the clock and the rollover
}

/// Tick cadence for the wall clock. One tick per second keeps the displayed
/// time and the noon threshold current; input events are delivered as soon
/// as they arrive regardless.
pub const TICK_RATE: Duration = Duration::from_secs(1);

/// Spawn a dedicated thread for event polling. The thread exits when the
/// receiving side of `tx` is dropped.
pub fn spawn_event_thread(tx: Sender<UiEvent>, tick_rate: Duration) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            // Calculate timeout until next tick
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            // Poll for events with adaptive timeout
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            // Send tick if enough time elapsed
            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break; // Main thread dropped the receiver
                }
                last_tick = Instant::now();
            }
        }
    })
}

pub fn run_ui() -> io::Result<()> {
    run_ui_with_options(Catalog::embedded(), None, None, &Config::default())
}

pub fn run_ui_with_options(
    catalog: Catalog,
    start_screen: Option<Screen>,
    period_override: Option<Period>,
    config: &Config,
) -> io::Result<()> {
    // Setup terminal with alternate screen (full terminal)
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state (using config preferences)
    let mut app_state = AppState::new(catalog);
    app_state.use_24h_clock = config.defaults.use_24h_clock;
    app_state.show_tips = config.startup.show_tips;
    app_state.period_override = period_override;

    // Startup screen: CLI flag > config > default
    app_state.current_screen = start_screen
        .or_else(|| Screen::from_name(&config.startup.screen))
        .unwrap_or(Screen::Home);

    // Wire up the UI event channel. The thread handle is dropped here;
    // the thread itself exits once event_rx goes away.
    let (event_tx, event_rx) = mpsc::channel();
    let _event_thread = spawn_event_thread(event_tx, TICK_RATE);

    // Main loop
    let result = run_app(&mut terminal, &mut app_state, event_rx);

    // Restore terminal: leave alternate screen
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    loop {
        // Collect all pending events so we can coalesce tick bursts and keep
        // inputs snappy
        let mut pending_ticks: u64 = 0;
        let mut pending_inputs: Vec<Event> = Vec::new();

        // Always block for at least one event, then drain the queue
        match event_rx.recv() {
            Ok(UiEvent::Tick) => pending_ticks += 1,
            Ok(UiEvent::Input(ev)) => pending_inputs.push(ev),
            Err(_) => {
                // Channel closed, exit
                return Ok(());
            }
        }

        while let Ok(evt) = event_rx.try_recv() {
            match evt {
                UiEvent::Tick => pending_ticks += 1,
                UiEvent::Input(ev) => pending_inputs.push(ev),
            }
        }

        // Process input events first so user commands are never stuck behind
        // a tick backlog
        for input in pending_inputs {
            if let Event::Key(key) = input {
                if handle_key(key, state) {
                    tracing::debug!("quit requested, dropping the ticker and restoring terminal");
                    return Ok(());
                }
            }
        }

        if pending_ticks > 0 {
            state.on_tick(Local::now());
        }

        // Render after processing events
        terminal.draw(|frame| {
            match state.current_screen {
                Screen::Home => HomeScreen::render(frame, state),
                Screen::Routines => RoutinesScreen::render(frame, state),
                Screen::Products => ProductsScreen::render(frame, state),
                Screen::Profile => ProfileScreen::render(frame, state),
            }

            // Render modals on top if active
            if let Some(ref confirm) = state.quit_confirmation {
                QuitModal::render(frame, confirm);
            }
            if state.help_modal.is_some() {
                HelpModal::render(frame, &state.app_version);
            }
        })?;
    }
}

fn should_quit(key: &KeyEvent) -> bool {
    // Quit on 'q' or Ctrl+C
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    // Modals swallow input while open
    if state.help_modal.is_some() {
        help::handle_help_key(key, state);
        return false;
    }

    if state.quit_confirmation.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                state.quit_confirmation = None;
            }
            _ => {}
        }
        return false;
    }

    if should_quit(&key) {
        // Confirm before abandoning a routine that is underway
        return match state.unfinished_steps() {
            Some(remaining) => {
                state.quit_confirmation = Some(QuitConfirmationState { remaining });
                false
            }
            None => true,
        };
    }

    // 'H' opens help from any screen
    if matches!(
        key.code,
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?')
    ) {
        state.help_modal = Some(HelpModalState::default());
        return false;
    }

    // Tab navigation works from any screen
    match key.code {
        KeyCode::Char('1') => {
            state.current_screen = Screen::Home;
            return false;
        }
        KeyCode::Char('2') => {
            state.current_screen = Screen::Routines;
            return false;
        }
        KeyCode::Char('3') => {
            state.current_screen = Screen::Products;
            return false;
        }
        KeyCode::Char('4') => {
            state.current_screen = Screen::Profile;
            return false;
        }
        KeyCode::Tab => {
            state.current_screen = state.current_screen.next();
            return false;
        }
        KeyCode::BackTab => {
            state.current_screen = state.current_screen.prev();
            return false;
        }
        _ => {}
    }

    // Handle screen-specific keys
    match state.current_screen {
        Screen::Home => home::handle_home_key(key, state),
        Screen::Routines => routines::handle_routines_key(key, state),
        Screen::Products => products::handle_products_key(key, state),
        Screen::Profile => profile::handle_profile_key(key, state),
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn done_ids(state: &AppState) -> Vec<String> {
        state
            .catalog
            .all()
            .iter()
            .filter(|p| state.tracker.is_done(&p.id))
            .map(|p| p.id.clone())
            .collect()
    }

    #[test]
    fn test_switching_screens_never_mutates_routine_data() {
        let mut state = AppState::default();
        let catalog = state.catalog.clone();
        state.tracker.toggle("gentle-cleanser", &catalog);

        let before_done = done_ids(&state);
        let before_len = state.catalog.len();

        for code in [
            KeyCode::Char('2'),
            KeyCode::Char('3'),
            KeyCode::Char('4'),
            KeyCode::Char('1'),
            KeyCode::Tab,
            KeyCode::BackTab,
        ] {
            assert!(!handle_key(key(code), &mut state));
            assert_eq!(done_ids(&state), before_done);
            assert_eq!(state.catalog.len(), before_len);
        }
    }

    #[test]
    fn test_number_keys_select_screens() {
        let mut state = AppState::default();

        handle_key(key(KeyCode::Char('3')), &mut state);
        assert_eq!(state.current_screen, Screen::Products);

        handle_key(key(KeyCode::Tab), &mut state);
        assert_eq!(state.current_screen, Screen::Profile);

        handle_key(key(KeyCode::BackTab), &mut state);
        assert_eq!(state.current_screen, Screen::Products);
    }

    #[test]
    fn test_quit_is_immediate_when_routine_untouched() {
        let mut state = AppState::default();
        assert!(handle_key(key(KeyCode::Char('q')), &mut state));
    }

    #[test]
    fn test_quit_confirms_mid_routine() {
        let mut state = AppState::default();
        state.period_override = Some(Period::Morning);
        let catalog = state.catalog.clone();
        state.tracker.toggle("gentle-cleanser", &catalog);

        // First 'q' opens the confirmation instead of quitting
        assert!(!handle_key(key(KeyCode::Char('q')), &mut state));
        let confirm = state.quit_confirmation.as_ref().expect("modal open");
        assert_eq!(confirm.remaining, 3);

        // 'n' stays, 'y' quits
        assert!(!handle_key(key(KeyCode::Char('n')), &mut state));
        assert!(state.quit_confirmation.is_none());

        assert!(!handle_key(key(KeyCode::Char('q')), &mut state));
        assert!(handle_key(key(KeyCode::Char('y')), &mut state));
    }

    #[test]
    fn test_help_modal_opens_and_closes() {
        let mut state = AppState::default();

        handle_key(key(KeyCode::Char('h')), &mut state);
        assert!(state.help_modal.is_some());

        // Keys are swallowed while the modal is open
        handle_key(key(KeyCode::Char('2')), &mut state);
        assert_eq!(state.current_screen, Screen::Home);

        handle_key(key(KeyCode::Esc), &mut state);
        assert!(state.help_modal.is_none());
    }
}

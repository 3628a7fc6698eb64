use super::*;

pub(super) fn handle_profile_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        // Return to home
        KeyCode::Esc => {
            state.current_screen = Screen::Home;
        }
        _ => {}
    }
}

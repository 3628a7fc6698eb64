use super::*;

pub(super) fn handle_help_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('q')
        | KeyCode::Char('Q') => {
            state.help_modal = None;
        }
        _ => {}
    }
}

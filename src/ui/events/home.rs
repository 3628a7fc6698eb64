use super::*;

pub(super) fn handle_home_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        // Navigate the checklist
        KeyCode::Up => {
            if let Some(i) = state.home.list_state.selected() {
                if i > 0 {
                    state.home.list_state.select(Some(i - 1));
                }
            }
        }
        KeyCode::Down => {
            let count = state.active_total();
            if let Some(i) = state.home.list_state.selected() {
                if count > 0 && i < count - 1 {
                    state.home.list_state.select(Some(i + 1));
                }
            }
        }
        // Toggle the selected step (Space or Enter)
        KeyCode::Char(' ') | KeyCode::Enter => {
            let id = state
                .home
                .list_state
                .selected()
                .and_then(|i| state.active_products().get(i).map(|p| p.id.clone()));
            if let Some(id) = id {
                state.tracker.toggle(&id, &state.catalog);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_toggles_selected_step() {
        let mut state = AppState::default();
        state.period_override = Some(Period::Morning);
        state.home.list_state.select(Some(0));

        handle_home_key(key(KeyCode::Char(' ')), &mut state);
        assert!(state.tracker.is_done("gentle-cleanser"));

        handle_home_key(key(KeyCode::Char(' ')), &mut state);
        assert!(!state.tracker.is_done("gentle-cleanser"));
    }

    #[test]
    fn test_two_of_four_toggled_is_half_progress() {
        let mut state = AppState::default();
        state.period_override = Some(Period::Morning);

        state.home.list_state.select(Some(0));
        handle_home_key(key(KeyCode::Enter), &mut state);
        handle_home_key(key(KeyCode::Down), &mut state);
        handle_home_key(key(KeyCode::Enter), &mut state);

        assert_eq!(state.active_done(), 2);
        assert_eq!(state.active_progress(), 50.0);
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut state = AppState::default();
        state.period_override = Some(Period::Morning);
        state.home.list_state.select(Some(0));

        handle_home_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.home.list_state.selected(), Some(0));

        for _ in 0..10 {
            handle_home_key(key(KeyCode::Down), &mut state);
        }
        // Morning routine has four steps
        assert_eq!(state.home.list_state.selected(), Some(3));
    }
}

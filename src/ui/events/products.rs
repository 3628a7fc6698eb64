use super::*;

pub(super) fn handle_products_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        // Navigate the grid
        KeyCode::Up => {
            if let Some(i) = state.products.table_state.selected() {
                if i > 0 {
                    state.products.table_state.select(Some(i - 1));
                }
            }
        }
        KeyCode::Down => {
            let count = state.catalog.len();
            if let Some(i) = state.products.table_state.selected() {
                if count > 0 && i < count - 1 {
                    state.products.table_state.select(Some(i + 1));
                }
            }
        }
        // Return to home
        KeyCode::Esc => {
            state.current_screen = Screen::Home;
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
    fn test_grid_navigation_never_mutates_completion() {
        let mut state = AppState::default();
        let catalog = state.catalog.clone();
        state.tracker.toggle("facial-toner", &catalog);

        for _ in 0..20 {
            handle_products_key(key(KeyCode::Down), &mut state);
        }
        handle_products_key(key(KeyCode::Up), &mut state);

        assert_eq!(state.tracker.done_count(), 1);
        // Nine products in the built-in catalog
        assert_eq!(state.products.table_state.selected(), Some(7));
    }
}

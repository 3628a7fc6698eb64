// Home screen implementation

use crate::ui::components::{Footer, format_uptime};
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Widget,
};

mod sections;

pub struct HomeScreen;

impl HomeScreen {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();

        let tip_height = if state.show_tips { 4 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),          // Header: clock and progress
                Constraint::Min(0),             // Checklist
                Constraint::Length(4),          // Quick stats
                Constraint::Length(tip_height), // Tip of the day
                Constraint::Length(1),          // Footer
            ])
            .split(area);

        // Render each section
        Self::render_header(frame, chunks[0], state);
        Self::render_checklist(frame, chunks[1], state);
        Self::render_quick_stats(frame, chunks[2], state);
        if state.show_tips {
            Self::render_tip(frame, chunks[3], state);
        }

        let done = state.tracker.done_count();
        let total = state.catalog.len();
        let uptime = format_uptime(state.start_time.elapsed().as_secs());

        Footer::tabs(state.current_screen, done, total, uptime)
            .render(chunks[4], frame.buffer_mut());
    }
}

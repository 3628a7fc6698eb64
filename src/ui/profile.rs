// Profile screen implementation

use crate::stats::{self, SessionStats};
use crate::ui::components::{Footer, format_uptime};
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tui_piechart::{PieChart, PieSlice};

pub struct ProfileScreen;

impl ProfileScreen {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Length(8), // Text stats
                Constraint::Min(0),    // Completion chart
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self::render_title(frame, chunks[0]);
        Self::render_text_stats(frame, chunks[1], state);
        Self::render_completion_chart(frame, chunks[2], state);

        let uptime = format_uptime(state.start_time.elapsed().as_secs());
        Footer::tabs(
            state.current_screen,
            state.tracker.done_count(),
            state.catalog.len(),
            uptime,
        )
        .render(chunks[3], frame.buffer_mut());
    }

    fn render_title(frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" MY PROFILE ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan).bold());

        frame.render_widget(block, area);
    }

    fn render_text_stats(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);

        let profile = &state.profile;
        let session = SessionStats::collect(&state.catalog, &state.tracker);

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("  Skin type: "),
                Span::styled(profile.skin_type, Style::default().fg(Color::White).bold()),
                Span::raw("   │   Concerns: "),
                Span::styled(
                    profile.concerns.join(", "),
                    Style::default().fg(Color::LightBlue),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("  Day streak: "),
                Span::styled(
                    profile.streak_days.to_string(),
                    Style::default().fg(Color::Magenta).bold(),
                ),
                Span::raw("   │   Favorite products: "),
                Span::styled(
                    profile.favorite_products.to_string(),
                    Style::default().fg(Color::Magenta).bold(),
                ),
                Span::raw("   │   Routines completed: "),
                Span::styled(
                    profile.routines_completed.to_string(),
                    Style::default().fg(Color::Magenta).bold(),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("  Today: "),
                Span::styled(
                    format!("{} used", session.done_today),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("   │   Morning: "),
                Span::styled(
                    stats::format_count(session.morning_done, session.morning_total),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw("   │   Evening: "),
                Span::styled(
                    stats::format_count(session.evening_done, session.evening_total),
                    Style::default().fg(Color::Blue),
                ),
            ]),
        ];

        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_completion_chart(frame: &mut Frame, area: Rect, state: &AppState) {
        let session = SessionStats::collect(&state.catalog, &state.tracker);
        let done = session.done_steps();
        let total = session.total_steps();

        if total == 0 {
            let message = Paragraph::new("No steps today")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .title(" Today's Completion ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                );
            frame.render_widget(message, area);
            return;
        }

        let remaining = total - done;

        let done_label = format!("Done ({})", done);
        let remaining_label = format!("Remaining ({})", remaining);

        let mut slices = Vec::new();
        if done > 0 {
            slices.push(PieSlice::new(&done_label, done as f64, Color::Green));
        }
        if remaining > 0 {
            slices.push(PieSlice::new(
                &remaining_label,
                remaining as f64,
                Color::Yellow,
            ));
        }

        // tui_piechart doesn't render single-slice charts correctly (shows a
        // tiny sliver at 0% or 100%), so add a tiny dummy slice to force
        // proper rendering
        if slices.len() == 1 {
            slices.push(PieSlice::new("", 0.001, Color::Reset));
        }

        let chart = PieChart::new(slices)
            .show_legend(true)
            .show_percentages(true)
            .block(
                Block::default()
                    .title(" Today's Completion ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        frame.render_widget(chart, area);
    }
}

// Routines overview screen: both checklists side by side

use crate::routine::Period;
use crate::stats;
use crate::ui::components::{Footer, category_color, category_icon, format_uptime};
use crate::ui::state::AppState;
use crate::ui::widgets::{RoutineProgress, RoutineState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct RoutinesScreen;

impl RoutinesScreen {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(0),    // Routine panels
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self::render_title(frame, chunks[0]);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        Self::render_routine(frame, panels[0], state, Period::Morning);
        Self::render_routine(frame, panels[1], state, Period::Evening);

        let uptime = format_uptime(state.start_time.elapsed().as_secs());
        Footer::tabs(
            state.current_screen,
            state.tracker.done_count(),
            state.catalog.len(),
            uptime,
        )
        .render(chunks[2], frame.buffer_mut());
    }

    fn render_title(frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" YOUR ROUTINES ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan).bold());

        frame.render_widget(block, area);
    }

    fn render_routine(frame: &mut Frame, area: Rect, state: &AppState, period: Period) {
        let products = state.catalog.products_for(period);
        let done = state.tracker.completed_in(&state.catalog, period);
        let progress = state.tracker.progress_for(&state.catalog, period);
        let active = state.active_period() == period;

        let title = match period {
            Period::Morning => " ☀ Morning ",
            _ => " ☾ Evening ",
        };
        let border_style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Numbered steps, a counter line, then the progress bar on the
        // bottom row
        let lines: Vec<Line> = products
            .iter()
            .enumerate()
            .map(|(index, product)| {
                let check = if state.tracker.is_done(&product.id) {
                    Span::styled("✓", Style::default().fg(Color::Green))
                } else {
                    Span::styled("·", Style::default().fg(Color::DarkGray))
                };

                Line::from(vec![
                    Span::styled(
                        format!("{:>2}. ", index + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        category_icon(product.category),
                        Style::default().fg(category_color(product.category)),
                    ),
                    Span::raw(" "),
                    Span::raw(product.name.clone()),
                    Span::raw(" "),
                    check,
                ])
            })
            .collect();

        if inner.height > 2 {
            let body = Rect {
                height: inner.height - 2,
                ..inner
            };
            frame.render_widget(Paragraph::new(lines), body);
        }

        if inner.height >= 2 {
            let counter_area = Rect {
                x: inner.x,
                y: inner.y + inner.height - 2,
                width: inner.width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(format!(
                    "{} complete",
                    stats::format_count(done, products.len())
                ))
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::Gray)),
                counter_area,
            );

            let bar_area = Rect {
                y: inner.y + inner.height - 1,
                ..counter_area
            };
            let bar_state = if progress >= 100.0 {
                RoutineState::Complete
            } else if active {
                RoutineState::Active
            } else {
                RoutineState::Idle
            };
            frame.render_widget(
                RoutineProgress::new(progress.round() as u16, bar_state),
                bar_area,
            );
        }
    }
}

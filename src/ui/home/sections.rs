use super::*;

use crate::routine::{Period, clock};
use crate::stats::{self, SessionStats};
use crate::ui::components::{category_color, category_icon, period_icon};
use crate::ui::constants;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

impl HomeScreen {
    pub(super) fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
        let period = state.active_period();
        let routine_name = match period {
            Period::Morning => "Morning Routine",
            _ => "Evening Routine",
        };
        let period_color = match period {
            Period::Morning => Color::Yellow,
            _ => Color::Blue,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" skindash — {} ", constants::TAGLINE))
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Routine title + clock
                Constraint::Length(1), // Progress gauge
                Constraint::Length(1), // Step counter
            ])
            .split(inner);

        // Routine name on the left, date and clock on the right
        let title_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(20)])
            .split(rows[0]);

        let title = Line::from(vec![
            Span::styled(period_icon(period), Style::default().fg(period_color)),
            Span::raw(" "),
            Span::styled(routine_name, Style::default().bold()),
        ]);
        frame.render_widget(Paragraph::new(title), title_cols[0]);

        let clock_text = format!(
            "{}  {}",
            clock::format_date(&state.now),
            clock::format_clock(&state.now, state.use_24h_clock)
        );
        frame.render_widget(
            Paragraph::new(clock_text)
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::Gray)),
            title_cols[1],
        );

        // Progress over the active checklist
        let progress = state.active_progress();
        let gauge = Gauge::default()
            .percent(progress.round() as u16)
            .label(stats::format_percent(progress))
            .gauge_style(Style::default().fg(Color::Yellow).bg(Color::Black))
            .use_unicode(true);
        frame.render_widget(gauge, rows[1]);

        let counter = format!(
            "{} steps complete",
            stats::format_count(state.active_done(), state.active_total())
        );
        frame.render_widget(
            Paragraph::new(counter)
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::Gray)),
            rows[2],
        );
    }

    pub(super) fn render_checklist(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let period = state.active_period();

        let AppState {
            catalog,
            tracker,
            home,
            ..
        } = state;

        let products = catalog.products_for(period);

        // Keep the selection valid when the active routine flips at noon
        if products.is_empty() {
            home.list_state.select(None);
        } else {
            let selected = home.list_state.selected().unwrap_or(0).min(products.len() - 1);
            home.list_state.select(Some(selected));
        }

        let items: Vec<ListItem> = products
            .iter()
            .enumerate()
            .map(|(index, product)| {
                let done = tracker.is_done(&product.id);

                let marker = if done { "[x]" } else { "[ ]" };
                let marker_style = if done {
                    Style::default().fg(Color::Green).bold()
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let name_style = if done {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, marker_style),
                    Span::raw(" "),
                    Span::styled(
                        category_icon(product.category),
                        Style::default().fg(category_color(product.category)),
                    ),
                    Span::raw(" "),
                    Span::styled(product.name.clone(), name_style),
                    Span::styled(
                        format!("  (step {})", index + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Today's Checklist "))
            .highlight_style(Style::default().reversed())
            .highlight_symbol(">> ");

        frame.render_stateful_widget(list, area, &mut home.list_state);
    }

    pub(super) fn render_quick_stats(frame: &mut Frame, area: Rect, state: &AppState) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let session = SessionStats::collect(&state.catalog, &state.tracker);

        Self::render_stat_card(
            frame,
            cols[0],
            &session.done_today.to_string(),
            "products used today",
            Color::Magenta,
        );
        Self::render_stat_card(
            frame,
            cols[1],
            &state.profile.streak_days.to_string(),
            "day streak",
            Color::Cyan,
        );
    }

    fn render_stat_card(frame: &mut Frame, area: Rect, value: &str, caption: &str, color: Color) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(color).bold(),
            )),
            Line::from(Span::styled(
                caption.to_string(),
                Style::default().fg(Color::Gray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }

    pub(super) fn render_tip(frame: &mut Frame, area: Rect, state: &AppState) {
        let tip = constants::tip_for_day(state.now.ordinal());

        let paragraph = Paragraph::new(tip)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" ✦ Tip of the Day "),
            );

        frame.render_widget(paragraph, area);
    }
}

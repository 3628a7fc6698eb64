// Products screen: every catalog entry in one table

use crate::ui::components::{Footer, category_color, category_icon, format_uptime, period_icon};
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

pub struct ProductsScreen;

impl ProductsScreen {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(0),    // Product table
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self::render_title(frame, chunks[0], state.catalog.len());
        Self::render_table(frame, chunks[1], state);

        let uptime = format_uptime(state.start_time.elapsed().as_secs());
        Footer::tabs(
            state.current_screen,
            state.tracker.done_count(),
            state.catalog.len(),
            uptime,
        )
        .render(chunks[2], frame.buffer_mut());
    }

    fn render_title(frame: &mut Frame, area: Rect, count: usize) {
        let block = Block::default()
            .title(format!(" MY PRODUCTS ({}) ", count))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta).bold());

        frame.render_widget(block, area);
    }

    fn render_table(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let AppState {
            catalog,
            tracker,
            products,
            ..
        } = state;

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header = Row::new(["#", "PRODUCT", "CATEGORY", "PERIOD", "TODAY"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        // Keep selection valid
        let count = catalog.len();
        if count > 0 {
            let selected = products.table_state.selected().unwrap_or(0).min(count - 1);
            products.table_state.select(Some(selected));
        }

        let rows: Vec<Row> = catalog
            .all()
            .iter()
            .enumerate()
            .map(|(index, product)| {
                let done = tracker.is_done(&product.id);
                let status = if done {
                    Cell::from("✓ done").style(Style::default().fg(Color::Green))
                } else {
                    Cell::from("—").style(Style::default().fg(Color::DarkGray))
                };

                Row::new(vec![
                    Cell::from(format!("{}", index + 1)),
                    Cell::from(product.name.clone()),
                    Cell::from(format!(
                        "{} {}",
                        category_icon(product.category),
                        product.category
                    ))
                    .style(Style::default().fg(category_color(product.category))),
                    Cell::from(format!("{} {}", period_icon(product.period), product.period)),
                    status,
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(3),  // #
            Constraint::Min(20),    // PRODUCT
            Constraint::Length(14), // CATEGORY
            Constraint::Length(11), // PERIOD
            Constraint::Length(8),  // TODAY
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .row_highlight_style(Style::default().reversed())
            .highlight_symbol(">> ");

        frame.render_stateful_widget(table, inner, &mut products.table_state);
    }
}

// Key reference modal

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct HelpModal;

impl HelpModal {
    pub fn render(frame: &mut Frame, version: &str) {
        let area = frame.area();

        // Small centered modal
        let modal_width = 54.min(area.width.saturating_sub(4));
        let modal_height = 13.min(area.height.saturating_sub(2));

        let modal_area = Rect {
            x: (area.width.saturating_sub(modal_width)) / 2,
            y: (area.height.saturating_sub(modal_height)) / 2,
            width: modal_width,
            height: modal_height,
        };

        // Clear background
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let bindings = [
            ("1-4", "switch screen (home, routines, products, profile)"),
            ("Tab / Shift+Tab", "cycle screens"),
            ("↑ / ↓", "move the selection"),
            ("Space / Enter", "toggle the selected step"),
            ("Esc", "back to home"),
            ("H / ?", "this help"),
            ("Q / Ctrl+C", "quit"),
        ];

        let mut lines = vec![Line::from("")];
        for (keys, action) in bindings {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<16}", keys),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(action, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![Span::styled(
            format!(
                "  skindash v{} — completion resets at local midnight.",
                version
            ),
            Style::default().fg(Color::Gray),
        )]));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

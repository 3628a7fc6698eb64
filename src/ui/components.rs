// Reusable UI components

use crate::routine::{Category, Period};
use crate::ui::state::Screen;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    pub fn tabs(active: Screen, done: usize, total: usize, uptime: String) -> Self {
        let stats_text = format!("Today: {}/{}, Session: {}  |  ", done, total, uptime);

        let mut spans = vec![Span::raw(stats_text)];

        let tabs = [
            (Screen::Home, "1"),
            (Screen::Routines, "2"),
            (Screen::Products, "3"),
            (Screen::Profile, "4"),
        ];

        for (i, (screen, hotkey)) in tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let key_style = if *screen == active {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::styled(format!("[{}]", hotkey), key_style));
            spans.push(Span::raw(format!(" {}", screen.label())));
        }

        spans.push(Span::raw("  "));
        spans.push(Span::styled("[H]", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw("elp"));
        spans.push(Span::raw("  "));
        spans.push(Span::styled("[Q]", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw("uit"));

        Self {
            content: Line::from(spans),
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

/// Single-width glyph for a category, used in checklist and grid rows.
pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Cleanser => "○",
        Category::Toner => "◌",
        Category::Serum => "✦",
        Category::Moisturizer => "●",
        Category::Sunscreen => "☀",
        Category::Treatment => "✚",
    }
}

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Cleanser => Color::Blue,
        Category::Toner => Color::Cyan,
        Category::Serum => Color::Yellow,
        Category::Moisturizer => Color::Green,
        Category::Sunscreen => Color::LightRed,
        Category::Treatment => Color::Magenta,
    }
}

pub fn period_icon(period: Period) -> &'static str {
    match period {
        Period::Morning => "☀",
        Period::Evening => "☾",
        Period::Both => "◐",
    }
}

/// Session uptime as HH:MM:SS for the footer.
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "00:00:00");
        assert_eq!(format_uptime(61), "00:01:01");
        assert_eq!(format_uptime(3661), "01:01:01");
    }

    #[test]
    fn test_category_icons_are_distinct() {
        let mut icons: Vec<_> = Category::ALL.iter().map(|c| category_icon(*c)).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), Category::ALL.len());
    }
}

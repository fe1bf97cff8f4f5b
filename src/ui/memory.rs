use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::format::{format_bytes, format_percent};
use crate::system::snapshot::MemoryMetrics;
use crate::ui::{ACCENT, DIM};

pub fn render(frame: &mut Frame, area: Rect, memory: &MemoryMetrics) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_rows(
        frame,
        chunks[0],
        " Main memory ",
        &[
            ("Total", format_bytes(memory.total_bytes)),
            ("Available", format_bytes(memory.available_bytes)),
            (
                "In use",
                format!(
                    "{} ({})",
                    format_bytes(memory.used_bytes),
                    format_percent(memory.used_percent)
                ),
            ),
        ],
    );
    render_gauge(frame, chunks[1], " Memory usage ", memory.used_percent);

    render_rows(
        frame,
        chunks[2],
        " Swap ",
        &[
            ("Total", format_bytes(memory.swap_total_bytes)),
            (
                "In use",
                format!(
                    "{} ({})",
                    format_bytes(memory.swap_used_bytes),
                    format_percent(memory.swap_used_percent)
                ),
            ),
            ("Free", format_bytes(memory.swap_free_bytes)),
        ],
    );
    render_gauge(frame, chunks[3], " Swap usage ", memory.swap_used_percent);
}

fn render_rows(frame: &mut Frame, area: Rect, title: &str, rows: &[(&str, String)]) {
    let lines: Vec<Line> = rows
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:>11}  "), Style::default().fg(DIM)),
                Span::raw(value.clone()),
            ])
        })
        .collect();
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(paragraph, area);
}

fn render_gauge(frame: &mut Frame, area: Rect, title: &str, percent: f32) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .gauge_style(Style::default().fg(ACCENT))
        .ratio(f64::from(percent / 100.0))
        .label(format_percent(percent));
    frame.render_widget(gauge, area);
}

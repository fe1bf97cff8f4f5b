use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::format::{format_bytes, format_count, format_percent};
use crate::system::snapshot::MetricSnapshot;
use crate::ui::{ACCENT, DIM};

pub fn render(frame: &mut Frame, area: Rect, snapshot: &MetricSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(6)])
        .split(area);

    render_partitions(frame, chunks[0], snapshot);
    render_io(frame, chunks[1], snapshot);
}

fn render_partitions(frame: &mut Frame, area: Rect, snapshot: &MetricSnapshot) {
    let header = Row::new(["Mount", "Type", "Total", "Used", "Free", "Use%"])
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = snapshot
        .disks
        .iter()
        .map(|disk| {
            Row::new(vec![
                Cell::from(disk.mount_point.clone()),
                Cell::from(disk.fs_type.clone()),
                Cell::from(format_bytes(disk.total_bytes)),
                Cell::from(format_bytes(disk.used_bytes)),
                Cell::from(format_bytes(disk.free_bytes)),
                Cell::from(format_percent(disk.used_percent)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" Partitions "));

    frame.render_widget(table, area);
}

fn render_io(frame: &mut Frame, area: Rect, snapshot: &MetricSnapshot) {
    // Cumulative since boot; rates are deliberately not computed here.
    let lines: Vec<Line> = match &snapshot.disk_io {
        Some(io) => vec![
            io_line("Reads", format!(
                "{} ops, {}",
                format_count(io.read_ops),
                format_bytes(io.read_bytes)
            )),
            io_line("Writes", format!(
                "{} ops, {}",
                format_count(io.write_ops),
                format_bytes(io.write_bytes)
            )),
        ],
        None => vec![Line::from(Span::styled(
            "unavailable on this platform",
            Style::default().fg(DIM),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Disk activity since boot "),
    );
    frame.render_widget(paragraph, area);
}

fn io_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:>8}  "), Style::default().fg(DIM)),
        Span::raw(value),
    ])
}

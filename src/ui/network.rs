use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::format::{format_bytes, format_count};
use crate::system::snapshot::InterfaceStats;
use crate::ui::ACCENT;

pub fn render(frame: &mut Frame, area: Rect, interfaces: &[InterfaceStats]) {
    let header = Row::new(["Interface", "Sent", "Received", "Pkts out", "Pkts in"])
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = interfaces
        .iter()
        .map(|stats| {
            Row::new(vec![
                Cell::from(stats.name.clone()),
                Cell::from(format_bytes(stats.bytes_sent)),
                Cell::from(format_bytes(stats.bytes_received)),
                Cell::from(format_count(stats.packets_sent)),
                Cell::from(format_count(stats.packets_received)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Interfaces (totals since boot) "),
    );

    frame.render_widget(table, area);
}

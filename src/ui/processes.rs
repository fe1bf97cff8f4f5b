use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::app::App;
use crate::format::truncate_unicode;
use crate::ui::ACCENT;

const NAME_WIDTH: usize = 28;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(["PID", "Name", "State", "CPU%", "Mem%", "Owner"])
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    // Keep the selected row in view on tables taller than the viewport.
    let selected_index = app.selected_index();
    let visible_rows = area.height.saturating_sub(3) as usize;
    let offset = match (selected_index, visible_rows) {
        (Some(index), rows) if rows > 0 && index >= rows => index + 1 - rows,
        _ => 0,
    };

    let rows: Vec<Row> = app
        .processes
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows.max(1))
        .map(|(index, record)| {
            let row = Row::new(vec![
                Cell::from(record.pid.to_string()),
                Cell::from(truncate_unicode(&record.name, NAME_WIDTH)),
                Cell::from(record.state.to_string()),
                Cell::from(format!("{:.1}", record.cpu_percent)),
                Cell::from(format!("{:.1}", record.memory_percent)),
                Cell::from(record.owner.clone().unwrap_or_else(|| "-".to_string())),
            ]);
            if Some(index) == selected_index {
                row.style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                row
            }
        })
        .collect();

    let title = format!(
        " Processes ({}, sort: {}) ",
        app.processes.len(),
        app.sort_order.label()
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(NAME_WIDTH as u16),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}

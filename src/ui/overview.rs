use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::format::{format_bytes, format_uptime};
use crate::ui::DIM;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(1)])
        .split(area);

    let host = &app.host;
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| crate::system::inventory::UNAVAILABLE.to_string());

    render_section(
        frame,
        chunks[0],
        "Operating System",
        &[
            ("System", format!("{} {}", host.os_name, host.os_version)),
            ("Kernel", host.kernel_version.clone()),
            ("Architecture", host.arch.clone()),
            ("Hostname", host.hostname.clone()),
            ("User", user),
            ("Uptime", format_uptime(host.boot_time_epoch)),
        ],
    );

    let inventory = &app.inventory;
    render_section(
        frame,
        chunks[1],
        "Hardware",
        &[
            ("Manufacturer", inventory.manufacturer.clone()),
            ("Model", inventory.model.clone()),
            ("Motherboard", inventory.motherboard.clone()),
            (
                "Memory",
                format_bytes(app.snapshot.memory.total_bytes),
            ),
            ("RAM modules", inventory.ram_modules.clone()),
            ("GPU", inventory.gpus.clone()),
            ("Battery", inventory.battery.clone()),
        ],
    );
}

fn render_section(frame: &mut Frame, area: Rect, title: &str, rows: &[(&str, String)]) {
    let lines: Vec<Line> = rows
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{label:>14}  "),
                    Style::default().fg(DIM).add_modifier(Modifier::BOLD),
                ),
                Span::raw(value.clone()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(format!(" {title} ")));
    frame.render_widget(paragraph, area);
}

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::format::format_percent;
use crate::system::snapshot::CpuMetrics;
use crate::ui::{ACCENT, DIM};

pub fn render(frame: &mut Frame, area: Rect, cpu: &CpuMetrics) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    render_info(frame, chunks[0], cpu);
    render_global_gauge(frame, chunks[1], cpu);
    render_cores(frame, chunks[2], cpu);
}

fn render_info(frame: &mut Frame, area: Rect, cpu: &CpuMetrics) {
    let cores = match cpu.physical_cores {
        Some(physical) => format!("{physical} physical / {} logical", cpu.per_core_percent.len()),
        None => format!("{} logical", cpu.per_core_percent.len()),
    };
    let temperature = match cpu.temperature_celsius {
        Some(celsius) => format!("{celsius:.1} °C"),
        None => "unavailable".to_string(),
    };
    let load = match cpu.load_average {
        Some((one, five, fifteen)) => format!("{one:.2} / {five:.2} / {fifteen:.2}"),
        None => "unavailable".to_string(),
    };

    let lines = vec![
        info_line("Model", cpu.brand.clone()),
        info_line("Cores", cores),
        info_line("Frequency", format!("{} MHz", cpu.frequency_mhz)),
        info_line("Temperature", temperature),
        info_line("Load average", load),
    ];
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Processor "));
    frame.render_widget(paragraph, area);
}

fn info_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:>13}  "), Style::default().fg(DIM)),
        Span::raw(value),
    ])
}

fn render_global_gauge(frame: &mut Frame, area: Rect, cpu: &CpuMetrics) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Usage "))
        .gauge_style(Style::default().fg(usage_color(cpu.global_percent)))
        .ratio(f64::from(cpu.global_percent / 100.0))
        .label(format_percent(cpu.global_percent));
    frame.render_widget(gauge, area);
}

fn render_cores(frame: &mut Frame, area: Rect, cpu: &CpuMetrics) {
    let block = Block::default().borders(Borders::ALL).title(" Per core ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if cpu.per_core_percent.is_empty() || inner.height == 0 {
        return;
    }

    // One text bar per core; fits any core count without nested layouts.
    let bar_width = inner.width.saturating_sub(14) as usize;
    let lines: Vec<Line> = cpu
        .per_core_percent
        .iter()
        .enumerate()
        .take(inner.height as usize)
        .map(|(i, &percent)| {
            let filled = ((percent / 100.0) * bar_width as f32).round() as usize;
            let bar: String = "█".repeat(filled.min(bar_width));
            let rest: String = "░".repeat(bar_width.saturating_sub(filled));
            Line::from(vec![
                Span::styled(format!("core {i:>2}  "), Style::default().fg(DIM)),
                Span::styled(bar, Style::default().fg(usage_color(percent))),
                Span::styled(rest, Style::default().fg(Color::Black)),
                Span::raw(format!(" {:>6}", format_percent(percent))),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn usage_color(percent: f32) -> Color {
    if percent >= 90.0 {
        Color::Red
    } else if percent >= 70.0 {
        Color::Yellow
    } else {
        ACCENT
    }
}

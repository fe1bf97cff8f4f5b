pub mod cpu;
pub mod disks;
pub mod help;
pub mod memory;
pub mod network;
pub mod overview;
pub mod processes;
pub mod statusbar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::app::{App, Tab};

pub const ACCENT: Color = Color::Cyan;
pub const DIM: Color = Color::DarkGray;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tab_bar(frame, chunks[0], app);

    match app.tab {
        Tab::Overview => overview::render(frame, chunks[1], app),
        Tab::Cpu => cpu::render(frame, chunks[1], &app.snapshot.cpu),
        Tab::Memory => memory::render(frame, chunks[1], &app.snapshot.memory),
        Tab::Disks => disks::render(frame, chunks[1], &app.snapshot),
        Tab::Network => network::render(frame, chunks[1], &app.snapshot.networks),
        Tab::Processes => processes::render(frame, chunks[1], app),
    }

    statusbar::render(frame, chunks[2], app);

    if app.show_help {
        help::render(frame, app);
    }
}

fn render_tab_bar(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" vitals ")
                .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(tabs, area);
}

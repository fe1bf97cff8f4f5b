use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::App;
use crate::ui::{ACCENT, DIM};

/// Centered overlay with all keybind → description pairs.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let entries = app.keybinds.help_entries();

    let width = 46u16.min(area.width.saturating_sub(4));
    let height = (entries.len() as u16 + 2).min(area.height.saturating_sub(2)); // +2 for borders

    let overlay = centered_rect(width, height, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIM))
        .title(Span::styled(
            " Keybinds ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(overlay);

    let lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:>9} "),
                    Style::default()
                        .fg(Color::Black)
                        .bg(DIM)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {desc}"), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    frame.render_widget(block, overlay);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [vert] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [horiz] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vert);
    horiz
}

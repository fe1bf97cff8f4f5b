use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, ResolvedKeybinds, Tab};
use crate::ui::DIM;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    // An active status message takes priority over the key hints.
    if let Some((message, _)) = &app.status_message {
        let color = if message.starts_with("requested") {
            Color::Green
        } else {
            Color::Red
        };
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let mut hints: Vec<(String, &str)> = vec![
        (key_hint(app, |kb| kb.quit), "quit"),
        ("tab".to_string(), "switch"),
        (key_hint(app, |kb| kb.help), "help"),
    ];
    if app.tab == Tab::Processes {
        hints.push((key_hint(app, |kb| kb.terminate), "terminate"));
        hints.push((key_hint(app, |kb| kb.force_terminate), "kill"));
        hints.push((key_hint(app, |kb| kb.cycle_sort), "sort"));
        hints.push((key_hint(app, |kb| kb.refresh), "refresh"));
    }

    let mut spans = Vec::new();
    for (key, desc) in hints {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(Color::Black)
                .bg(DIM)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {desc} "),
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hint(app: &App, pick: fn(&ResolvedKeybinds) -> KeyCode) -> String {
    match pick(&app.keybinds) {
        KeyCode::Char(c) => c.to_string(),
        other => format!("{other:?}"),
    }
}

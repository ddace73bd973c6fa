use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::theme;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let bar = if app.filter_active {
        Line::from(vec![
            Span::styled(" [esc]", Style::default().fg(theme::YELLOW)),
            Span::raw(" clear  "),
            Span::styled("[enter]", Style::default().fg(theme::YELLOW)),
            Span::raw(" apply"),
        ])
    } else {
        let mut spans = vec![
            Span::styled(" [f]", Style::default().fg(theme::YELLOW)),
            Span::raw(" filter  "),
            Span::styled("[p]", Style::default().fg(theme::YELLOW)),
            Span::raw(if app.hide_passing {
                " show passing  "
            } else {
                " hide passing  "
            }),
            Span::styled("[y]", Style::default().fg(theme::YELLOW)),
            Span::raw(" copy  "),
            Span::styled("[r]", Style::default().fg(theme::YELLOW)),
            Span::raw(" rerun  "),
            Span::styled("[q]", Style::default().fg(theme::YELLOW)),
            Span::raw(" quit"),
        ];

        spans.push(Span::styled(
            format!("  {} shown", app.visible_rows().len()),
            Style::default().fg(theme::OVERLAY0),
        ));

        if app.streaming {
            let spinner = SPINNER_FRAMES[app.spinner_tick % SPINNER_FRAMES.len()];
            let running = match &app.current_test {
                Some(name) => format!("  {} {}", spinner, name),
                None => format!("  {} running...", spinner),
            };
            spans.push(Span::styled(running, Style::default().fg(theme::YELLOW)));
        }

        Line::from(spans)
    };

    let paragraph = Paragraph::new(bar).style(Style::default().bg(theme::SURFACE0));
    frame.render_widget(paragraph, area);
}

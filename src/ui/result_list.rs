use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::app::App;
use crate::models::{Renderable, TestResult};
use crate::theme::{self, ThemeProvider};

/// Width of the label column; fits "UNKNOWN".
const LABEL_WIDTH: usize = 7;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = match &app.source_name {
        Some(name) => format!(" Results — {} ", name),
        None => " Results ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::SURFACE2));

    app.viewport_height = block.inner(area).height as usize;

    let rows = app.visible_rows();
    let has_rows = !rows.is_empty();
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .filter_map(|(i, &idx)| app.results().get(idx).map(|r| (i, r)))
        .map(|(i, result)| {
            let selected = i == app.selected;
            let item = ListItem::new(row_lines(result, selected, &app.palette));
            if selected {
                item.style(Style::default().bg(theme::SURFACE1))
            } else {
                item
            }
        })
        .collect();

    app.list_state
        .select(if has_rows { Some(app.selected) } else { None });

    let list = List::new(items).block(block);
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Lines for one result: colored label, then the rendered output.
/// Continuation lines of an expanded row are indented under the text.
fn row_lines(result: &TestResult, selected: bool, palette: &impl ThemeProvider) -> Vec<Line<'static>> {
    let kind = result.kind();
    let label_style = Style::default().fg(kind.color(palette)).bold();
    let text_style = Style::default().fg(theme::TEXT);
    let output = result.output_string(selected);

    let mut lines = Vec::new();
    for (n, text) in output.split('\n').enumerate() {
        let gutter = if n == 0 {
            Span::styled(format!("{:<LABEL_WIDTH$} ", kind.label()), label_style)
        } else {
            Span::raw(" ".repeat(LABEL_WIDTH + 1))
        };
        lines.push(Line::from(vec![
            gutter,
            Span::styled(text.to_string(), text_style),
        ]));
    }
    lines
}

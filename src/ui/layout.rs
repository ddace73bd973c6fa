use ratatui::prelude::*;

use crate::app::App;

use super::notifications;
use super::result_list;
use super::search_box;
use super::status_bar;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [main_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    if app.filter_active || !app.filter.value().is_empty() {
        let [search_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(main_area);
        search_box::draw(frame, app.filter.value(), app.filter_active, search_area);
        result_list::draw(frame, app, list_area);
    } else {
        result_list::draw(frame, app, main_area);
    }
    status_bar::draw(frame, app, status_area);
    notifications::draw(frame, app);
}

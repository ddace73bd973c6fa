use ratatui::widgets::ListState;
use tokio::sync::mpsc;

use crate::{
    app::notifier::Notifier,
    models::{Renderable, TestResult},
    theme::Palette,
};

pub mod actions;
pub mod events;
pub mod notifier;

pub use actions::{Action, handle_action, trigger_action};
pub use events::{ResultEvent, handle_result_event};
pub use notifier::NotificationKind;

pub struct App {
    pub palette: Palette,
    /// Every result of the current run, internal messages included.
    results: Vec<TestResult>,
    /// Indices into `results` that pass the current filters.
    rows: Vec<usize>,
    /// Index into `visible_rows()`.
    pub selected: usize,
    pub list_state: ListState,
    pub viewport_height: usize,
    pub event_tx: mpsc::UnboundedSender<ResultEvent>,
    pub source_name: Option<String>,
    pub streaming: bool,
    /// Latest "currently running" message from the source.
    pub current_test: Option<String>,
    pub hide_passing: bool,
    pub filter_active: bool,
    pub filter: tui_input::Input,
    pub spinner_tick: usize,
    pub rerun_requested: bool,
    pub should_quit: bool,
    pub notifier: Notifier,
}

impl App {
    pub fn new(
        palette: Palette,
        hide_passing: bool,
    ) -> (Self, mpsc::UnboundedReceiver<ResultEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let app = Self {
            palette,
            results: Vec::new(),
            rows: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            viewport_height: 0,
            event_tx,
            source_name: None,
            streaming: false,
            current_test: None,
            hide_passing,
            filter_active: false,
            filter: tui_input::Input::default(),
            spinner_tick: 0,
            rerun_requested: false,
            should_quit: false,
            notifier: Notifier::new(),
        };
        (app, event_rx)
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Indices into `results` of the rows the pane shows, in order.
    pub fn visible_rows(&self) -> &[usize] {
        &self.rows
    }

    /// Append a result, dragging the selection along when it sat on the
    /// last row.
    pub fn push_result(&mut self, result: TestResult) {
        let following = self.is_following();
        let query = self.filter.value().to_lowercase();
        let visible = self.is_row_visible(&result, &query);

        self.results.push(result);
        if visible {
            self.rows.push(self.results.len() - 1);
            if following {
                self.select_last();
            }
        }
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
        self.rows.clear();
        self.selected = 0;
    }

    /// Recompute the visible rows. Call after the filter text or
    /// `hide_passing` changes.
    pub fn refresh_rows(&mut self) {
        let query = self.filter.value().to_lowercase();
        self.rows = self
            .results
            .iter()
            .enumerate()
            .filter(|(_, r)| self.is_row_visible(r, &query))
            .map(|(i, _)| i)
            .collect();
    }

    /// `query` must already be lowercase.
    fn is_row_visible(&self, result: &TestResult, query: &str) -> bool {
        !result.kind().is_internal()
            && !(self.hide_passing && result.kind().is_passing())
            && (query.is_empty() || matches_query(result, query))
    }

    pub fn selected_result(&self) -> Option<&TestResult> {
        self.rows
            .get(self.selected)
            .and_then(|&i| self.results.get(i))
    }

    /// True when the selection sits on the last row (or there are none),
    /// so newly arriving results should drag it along.
    pub fn is_following(&self) -> bool {
        self.selected + 1 >= self.rows.len()
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    /// Keep the selection inside the visible rows after they change.
    pub fn clamp_selection(&mut self) {
        let max = self.rows.len().saturating_sub(1);
        self.selected = self.selected.min(max);
    }
}

/// Case-insensitive match on label, name and the collapsed row text.
/// `query` must already be lowercase.
fn matches_query(result: &TestResult, query: &str) -> bool {
    result.kind().label().to_lowercase().contains(query)
        || result.name().to_lowercase().contains(query)
        || result.output_string(false).to_lowercase().contains(query)
}

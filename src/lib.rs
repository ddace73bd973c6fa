//! Per-result model and rendering for test result panes.
//!
//! [`models`] holds the result taxonomy and the text rendering of a single
//! result, [`theme`] resolves result kinds to colors. The remaining modules
//! make up the `resultpane` terminal viewer built on top of them.

pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod source;
pub mod theme;
pub mod ui;

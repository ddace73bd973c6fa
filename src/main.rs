use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, interval};

use resultpane::app::{App, ResultEvent, handle_action, handle_result_event, trigger_action};
use resultpane::config::Config;
use resultpane::source::{self, ResultSource, SourceSpec};
use resultpane::{logging, ui};

const USAGE: &str = "usage: resultpane <results.ndjson> | resultpane -- <command> [args..]";

#[tokio::main]
async fn main() -> Result<()> {
    // Without a log file the pane still works; report and carry on.
    if let Err(e) = logging::init() {
        eprintln!("resultpane: logging disabled: {:#}", e);
    }

    let workspace = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load(&workspace);
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(spec) = SourceSpec::from_args(&args, config.source_command()?) else {
        anyhow::bail!(USAGE);
    };
    tracing::debug!(?spec, "starting");

    // Setup terminal
    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, source::open(spec)).await;

    // Teardown terminal
    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    source: Arc<dyn ResultSource>,
) -> Result<()> {
    let (mut app, mut event_rx) = App::new(config.palette(), config.display.hide_passing);
    app.source_name = Some(source.name().to_string());
    let mut tick = interval(Duration::from_millis(100));
    let mut event_stream = EventStream::new();
    let mut source_handle = start_source(Arc::clone(&source), app.event_tx.clone());

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    None => break,
                    Some(Err(e)) => return Err(e.into()),
                    Some(Ok(Event::Key(key))) => {
                        if let Some(action) = trigger_action(key, app.filter_active) {
                            handle_action(&mut app, action);
                        }
                    }
                    Some(Ok(_)) => {}
                }
            }

            Some(event) = event_rx.recv() => {
                handle_result_event(&mut app, event);
            }

            _ = tick.tick() => {
                if app.streaming {
                    app.spinner_tick = app.spinner_tick.wrapping_add(1);
                }
                app.notifier.prune_expired();
            }
        }

        if app.rerun_requested {
            app.rerun_requested = false;
            source_handle.abort();
            source_handle = start_source(Arc::clone(&source), app.event_tx.clone());
        }

        if app.should_quit {
            break;
        }
    }

    // Dropping the stream future kills a spawned command's process group.
    source_handle.abort();
    Ok(())
}

/// Stream `source` in the background, reporting failures as events.
fn start_source(
    source: Arc<dyn ResultSource>,
    tx: mpsc::UnboundedSender<ResultEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = source.stream(tx.clone()).await {
            tracing::warn!(error = %e, source = source.name(), "result source failed");
            let _ = tx.send(ResultEvent::Error {
                message: format!("{:#}", e),
            });
            let _ = tx.send(ResultEvent::Finished);
        }
    })
}

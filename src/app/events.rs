use crate::{
    app::App,
    models::{ResultKind, TestResult},
};

/// Events streamed from result sources into the app.
#[derive(Debug)]
pub enum ResultEvent {
    /// A (re)run of `source` began; previous results are discarded.
    Started { source: String },
    Result(TestResult),
    Error { message: String },
    Finished,
}

/// Process an event from a source.
pub fn handle_result_event(app: &mut App, event: ResultEvent) {
    match event {
        ResultEvent::Started { source } => {
            app.clear_results();
            app.current_test = None;
            app.streaming = true;
            app.source_name = Some(source);
        }

        ResultEvent::Result(result) => {
            if result.kind() == ResultKind::MessageCurrentTest {
                app.current_test = Some(result.first_line().to_string());
            }
            app.push_result(result);
        }

        ResultEvent::Error { message } => {
            app.notifier.error(message);
        }

        ResultEvent::Finished => {
            app.streaming = false;
            app.current_test = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Framework;
    use crate::theme::Palette;

    fn app() -> App {
        App::new(Palette::default(), false).0
    }

    fn pass(function: &str) -> TestResult {
        TestResult::builder("Suite")
            .framework(Framework::xunit(function, ""))
            .kind(ResultKind::Pass)
            .build()
    }

    #[test]
    fn started_resets_previous_run() {
        let mut app = app();
        handle_result_event(&mut app, ResultEvent::Result(pass("a")));
        handle_result_event(
            &mut app,
            ResultEvent::Started {
                source: "run.ndjson".into(),
            },
        );
        assert!(app.results().is_empty());
        assert!(app.visible_rows().is_empty());
        assert!(app.streaming);
        assert_eq!(app.source_name.as_deref(), Some("run.ndjson"));
    }

    #[test]
    fn selection_follows_tail() {
        let mut app = app();
        for f in ["a", "b", "c"] {
            handle_result_event(&mut app, ResultEvent::Result(pass(f)));
        }
        assert_eq!(app.selected, 2);

        app.selected = 0;
        handle_result_event(&mut app, ResultEvent::Result(pass("d")));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn current_test_tracks_internal_message() {
        let mut app = app();
        let current = TestResult::builder("")
            .kind(ResultKind::MessageCurrentTest)
            .description("Suite::testFoo\nignored")
            .build();
        handle_result_event(&mut app, ResultEvent::Result(current));
        assert_eq!(app.current_test.as_deref(), Some("Suite::testFoo"));
        assert!(app.visible_rows().is_empty());

        handle_result_event(&mut app, ResultEvent::Finished);
        assert!(app.current_test.is_none());
        assert!(!app.streaming);
    }

    #[test]
    fn errors_become_notifications() {
        let mut app = app();
        handle_result_event(
            &mut app,
            ResultEvent::Error {
                message: "exited with code 1".into(),
            },
        );
        assert_eq!(app.notifier.recent().unwrap().message, "exited with code 1");
    }

    #[test]
    fn filtered_stream_follows_visible_tail() {
        let mut app = App::new(Palette::default(), true).0;
        for f in ["a", "b"] {
            let fail = TestResult::builder("Suite")
                .framework(Framework::xunit(f, ""))
                .kind(ResultKind::Fail)
                .build();
            handle_result_event(&mut app, ResultEvent::Result(fail));
            for _ in 0..1000 {
                handle_result_event(&mut app, ResultEvent::Result(pass("p")));
            }
        }
        assert_eq!(app.results().len(), 2002);
        assert_eq!(app.visible_rows(), vec![0, 1001]);
        assert_eq!(app.selected, 1);
    }
}

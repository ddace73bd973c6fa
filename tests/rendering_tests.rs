//! Rendering properties of single results, through the public API.

use ratatui::style::Color;
use resultpane::models::{Framework, Renderable, ResultKind, TestResult};
use resultpane::theme::{self, ColorKey, Palette, ThemeProvider};

struct Fixed;

impl ThemeProvider for Fixed {
    fn color(&self, key: ColorKey) -> Color {
        match key {
            ColorKey::StdOutText => Color::White,
            _ => Color::Magenta,
        }
    }
}

fn xunit(kind: ResultKind, tag: &str, description: &str) -> TestResult {
    TestResult::builder("Suite")
        .framework(Framework::xunit("testFoo", tag))
        .kind(kind)
        .description(description)
        .build()
}

#[test]
fn base_output_collapses_to_first_line() {
    let result = TestResult::builder("Suite")
        .kind(ResultKind::MessageDebug)
        .description("line1\nline2\nline3")
        .build();
    assert_eq!(result.output_string(false), "line1");
    assert_eq!(result.output_string(true), "line1\nline2\nline3");
}

#[test]
fn xunit_examples() {
    assert_eq!(xunit(ResultKind::Pass, "", "").output_string(false), "Suite::testFoo");
    assert_eq!(
        xunit(ResultKind::Pass, "row2", "assertion failed").output_string(true),
        "Suite::testFoo (row2)\nassertion failed"
    );
    let bench = xunit(
        ResultKind::Benchmark,
        "",
        "0.5 msecs per iteration (total: 50, iterations: 100)",
    );
    assert!(bench.output_string(false).ends_with(": 0.5 msecs per iteration "));
}

#[test]
fn assertion_example() {
    let result = TestResult::builder("SuiteA")
        .framework(Framework::assertion("SuiteA.CaseB"))
        .kind(ResultKind::Fail)
        .description("expected true, got false")
        .build();
    assert_eq!(result.output_string(false), "SuiteA.CaseB");
}

#[test]
fn label_and_color_are_total() {
    for raw in -3..25 {
        let kind = ResultKind::from_int(raw);
        let label = kind.label();
        assert_eq!(label, kind.label());
        let color = theme::color_for(kind, &Fixed);
        assert_eq!(color, theme::color_for(kind, &Fixed));
        if kind.is_internal() {
            assert_eq!(label, "");
            assert_eq!(color, theme::TRANSPARENT);
        } else {
            assert!(!label.is_empty());
        }
    }
}

#[test]
fn invalid_and_benchmark_use_stdout_color() {
    assert_eq!(theme::color_for(ResultKind::Invalid, &Fixed), Color::White);
    assert_eq!(theme::color_for(ResultKind::Benchmark, &Fixed), Color::White);
    assert_eq!(theme::color_for(ResultKind::Fail, &Fixed), Color::Magenta);
}

#[test]
fn results_render_identically_across_threads() {
    let result = xunit(ResultKind::Fail, "row", "boom\ntrace");
    let palette = Palette::default();
    let expected = (result.output_string(true), result.kind().color(&palette));

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| (result.output_string(true), result.kind().color(&palette))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

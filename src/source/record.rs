use serde::Deserialize;

use crate::models::{Framework, ResultKind, TestResult};

/// One NDJSON result line as emitted by a reporter.
#[derive(Debug, Deserialize)]
struct ResultRecord {
    #[serde(default)]
    framework: Option<FrameworkTag>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    function: String,
    #[serde(default)]
    tag: String,
    #[serde(default)]
    test_set: String,
    result: RawKind,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum FrameworkTag {
    Xunit,
    Assertion,
}

/// Reporters send either a token (`"xfail"`) or a raw discriminant (`2`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawKind {
    Token(String),
    Int(i32),
}

impl RawKind {
    fn into_kind(self) -> ResultKind {
        match self {
            RawKind::Token(token) => ResultKind::from_token(&token),
            RawKind::Int(raw) => ResultKind::from_int(raw),
        }
    }
}

impl ResultRecord {
    fn into_result(self) -> TestResult {
        let framework = match self.framework {
            None => Framework::Generic,
            Some(FrameworkTag::Xunit) => Framework::xunit(self.function, self.tag),
            Some(FrameworkTag::Assertion) => Framework::assertion(self.test_set),
        };
        TestResult::builder(self.name)
            .framework(framework)
            .kind(self.result.into_kind())
            .description(self.description)
            .build()
    }
}

/// Decode one line of reporter output.
///
/// Blank lines yield `None`. Anything that is not a valid record still yields
/// a result so that it shows up in the pane: plain text as a debug message,
/// broken JSON as a fatal one.
pub fn decode_line(line: &str) -> Option<TestResult> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if !line.starts_with('{') {
        return Some(TestResult::faulty(ResultKind::MessageDebug, line));
    }

    match serde_json::from_str::<ResultRecord>(line) {
        Ok(record) => Some(record.into_result()),
        Err(e) => {
            tracing::warn!(error = %e, line, "malformed result record");
            Some(TestResult::faulty(
                ResultKind::MessageFatal,
                format!("malformed result record: {}\n{}", e, line),
            ))
        }
    }
}

use super::kind::ResultKind;

/// Anything that can be rendered as a line (or block) of the results pane.
pub trait Renderable {
    /// Compact single-line preview when `selected` is false, full detail otherwise.
    fn output_string(&self, selected: bool) -> String;
}

/// Framework-specific identity carried alongside the shared result fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Framework {
    #[default]
    Generic,
    /// xUnit-style framework: `Class::function (tag)`.
    XUnit {
        function_name: String,
        data_tag: String,
    },
    /// Assertion-style framework grouping results under a test set.
    Assertion { test_set_name: String },
}

impl Framework {
    pub fn xunit(function_name: impl Into<String>, data_tag: impl Into<String>) -> Self {
        Framework::XUnit {
            function_name: function_name.into(),
            data_tag: data_tag.into(),
        }
    }

    pub fn assertion(test_set_name: impl Into<String>) -> Self {
        Framework::Assertion {
            test_set_name: test_set_name.into(),
        }
    }
}

/// Outcome of one test case or one message emitted during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestResult {
    name: String,
    kind: ResultKind,
    description: String,
    framework: Framework,
}

impl TestResult {
    pub fn builder(name: impl Into<String>) -> ResultBuilder {
        ResultBuilder {
            result: TestResult {
                name: name.into(),
                ..TestResult::default()
            },
        }
    }

    /// Stand-in for input that could not be decoded; carries no name.
    pub fn faulty(kind: ResultKind, description: impl Into<String>) -> Self {
        TestResult {
            kind,
            description: description.into(),
            ..TestResult::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn framework(&self) -> &Framework {
        &self.framework
    }

    /// Description up to the first newline.
    pub fn first_line(&self) -> &str {
        first_line(&self.description)
    }

    fn default_output(&self, selected: bool) -> String {
        if selected {
            self.description.clone()
        } else {
            self.first_line().to_string()
        }
    }

    fn xunit_output(&self, function_name: &str, data_tag: &str, selected: bool) -> String {
        let desc = self.description.as_str();
        match self.kind {
            ResultKind::Pass
            | ResultKind::Fail
            | ResultKind::ExpectedFail
            | ResultKind::UnexpectedPass
            | ResultKind::BlacklistedFail
            | ResultKind::BlacklistedPass => {
                let mut output = qualified_name(&self.name, function_name, data_tag);
                if selected && !desc.is_empty() {
                    output.push('\n');
                    output.push_str(desc);
                }
                output
            }
            ResultKind::Benchmark => {
                let mut output = qualified_name(&self.name, function_name, data_tag);
                if !desc.is_empty() {
                    // Timing summary precedes the parenthesised details.
                    let split = desc.find('(').unwrap_or(0);
                    output.push_str(": ");
                    output.push_str(&desc[..split]);
                    if selected {
                        output.push('\n');
                        output.push_str(&desc[split..]);
                    }
                }
                output
            }
            _ => self.default_output(selected),
        }
    }

    fn assertion_output(&self, test_set_name: &str, selected: bool) -> String {
        match self.kind {
            ResultKind::Pass | ResultKind::Fail => {
                let mut output = test_set_name.to_string();
                if selected && !self.description.is_empty() {
                    output.push('\n');
                    output.push_str(&self.description);
                }
                output
            }
            _ => self.default_output(selected),
        }
    }
}

impl Renderable for TestResult {
    fn output_string(&self, selected: bool) -> String {
        match &self.framework {
            Framework::Generic => self.default_output(selected),
            Framework::XUnit {
                function_name,
                data_tag,
            } => self.xunit_output(function_name, data_tag, selected),
            Framework::Assertion { test_set_name } => {
                self.assertion_output(test_set_name, selected)
            }
        }
    }
}

/// Assembles a [`TestResult`]; kind defaults to `Invalid` until set.
#[derive(Debug, Clone)]
pub struct ResultBuilder {
    result: TestResult,
}

impl ResultBuilder {
    pub fn kind(mut self, kind: ResultKind) -> Self {
        self.result.kind = kind;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.result.description = description.into();
        self
    }

    pub fn framework(mut self, framework: Framework) -> Self {
        self.result.framework = framework;
        self
    }

    pub fn build(self) -> TestResult {
        self.result
    }
}

fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

fn qualified_name(class_name: &str, function_name: &str, data_tag: &str) -> String {
    let mut output = format!("{}::{}", class_name, function_name);
    if !data_tag.is_empty() {
        output.push_str(&format!(" ({})", data_tag));
    }
    output
}

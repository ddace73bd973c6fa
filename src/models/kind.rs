use std::fmt;

use ratatui::style::Color;

use crate::theme::{self, ThemeProvider};

/// Outcome category of a single test result or run message.
///
/// Discriminants are stable: producers may send them as raw integers, which
/// are mapped back through [`ResultKind::from_int`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i32)]
pub enum ResultKind {
    Pass,
    Fail,
    ExpectedFail,
    UnexpectedPass,
    Skip,
    BlacklistedPass,
    BlacklistedFail,
    Benchmark,
    MessageDebug,
    MessageWarn,
    MessageFatal,

    // Bookkeeping messages, never displayed.
    MessageInternal,
    MessageDisabledTests,
    MessageTestCaseStart,
    MessageTestCaseSuccess,
    MessageTestCaseWarn,
    MessageTestCaseFail,
    MessageTestCaseEnd,
    MessageCurrentTest,

    #[default]
    Invalid,
}

impl ResultKind {
    pub const FIRST_TYPE: ResultKind = ResultKind::Pass;
    pub const LAST_TYPE: ResultKind = ResultKind::Invalid;
    pub const INTERNAL_MESSAGES_BEGIN: ResultKind = ResultKind::MessageInternal;
    pub const INTERNAL_MESSAGES_END: ResultKind = ResultKind::MessageCurrentTest;

    /// Every kind, indexed by discriminant.
    pub const ALL: [ResultKind; 20] = [
        ResultKind::Pass,
        ResultKind::Fail,
        ResultKind::ExpectedFail,
        ResultKind::UnexpectedPass,
        ResultKind::Skip,
        ResultKind::BlacklistedPass,
        ResultKind::BlacklistedFail,
        ResultKind::Benchmark,
        ResultKind::MessageDebug,
        ResultKind::MessageWarn,
        ResultKind::MessageFatal,
        ResultKind::MessageInternal,
        ResultKind::MessageDisabledTests,
        ResultKind::MessageTestCaseStart,
        ResultKind::MessageTestCaseSuccess,
        ResultKind::MessageTestCaseWarn,
        ResultKind::MessageTestCaseFail,
        ResultKind::MessageTestCaseEnd,
        ResultKind::MessageCurrentTest,
        ResultKind::Invalid,
    ];

    /// Map a tool token (`pass`, `xfail`, `qwarn`, ...) to its kind.
    ///
    /// Matching is exact and case-sensitive. Unknown tokens yield
    /// [`ResultKind::Invalid`].
    pub fn from_token(token: &str) -> ResultKind {
        match token {
            "pass" => ResultKind::Pass,
            "fail" => ResultKind::Fail,
            "xfail" => ResultKind::ExpectedFail,
            "xpass" => ResultKind::UnexpectedPass,
            "skip" => ResultKind::Skip,
            "qdebug" => ResultKind::MessageDebug,
            "warn" | "qwarn" => ResultKind::MessageWarn,
            "qfatal" => ResultKind::MessageFatal,
            "bpass" => ResultKind::BlacklistedPass,
            "bfail" => ResultKind::BlacklistedFail,
            _ => {
                tracing::debug!(token, "unexpected test result token");
                ResultKind::Invalid
            }
        }
    }

    /// Reinterpret a raw discriminant. Anything outside
    /// `FIRST_TYPE..=LAST_TYPE` is `Invalid`.
    pub fn from_int(raw: i32) -> ResultKind {
        if raw < ResultKind::FIRST_TYPE as i32 || raw > ResultKind::LAST_TYPE as i32 {
            return ResultKind::Invalid;
        }
        ResultKind::ALL[raw as usize]
    }

    pub fn is_internal(&self) -> bool {
        (ResultKind::INTERNAL_MESSAGES_BEGIN..=ResultKind::INTERNAL_MESSAGES_END).contains(self)
    }

    /// Kinds hidden by the "hide passing" filter.
    pub fn is_passing(&self) -> bool {
        matches!(
            self,
            ResultKind::Pass | ResultKind::ExpectedFail | ResultKind::BlacklistedPass
        )
    }

    /// Short uppercase label shown next to a result. Empty for internal kinds.
    pub fn label(&self) -> &'static str {
        if self.is_internal() {
            return "";
        }

        match self {
            ResultKind::Pass => "PASS",
            ResultKind::Fail => "FAIL",
            ResultKind::ExpectedFail => "XFAIL",
            ResultKind::UnexpectedPass => "XPASS",
            ResultKind::Skip => "SKIP",
            ResultKind::Benchmark => "BENCH",
            ResultKind::MessageDebug => "DEBUG",
            ResultKind::MessageWarn => "WARN",
            ResultKind::MessageFatal => "FATAL",
            ResultKind::BlacklistedPass => "BPASS",
            ResultKind::BlacklistedFail => "BFAIL",
            _ => "UNKNOWN",
        }
    }

    pub fn color(&self, theme: &impl ThemeProvider) -> Color {
        theme::color_for(*self, theme)
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

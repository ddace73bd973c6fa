use ratatui::style::Color;

use crate::models::ResultKind;

// Catppuccin Mocha palette
pub const SURFACE0: Color = Color::Rgb(49, 50, 68);
pub const SURFACE1: Color = Color::Rgb(69, 71, 90);
pub const SURFACE2: Color = Color::Rgb(88, 91, 112);
pub const TEXT: Color = Color::Rgb(205, 214, 244);
pub const OVERLAY0: Color = Color::Rgb(108, 112, 134);
pub const RED: Color = Color::Rgb(243, 139, 168);
pub const MAROON: Color = Color::Rgb(235, 160, 172);
pub const GREEN: Color = Color::Rgb(166, 227, 161);
pub const YELLOW: Color = Color::Rgb(249, 226, 175);
pub const BLUE: Color = Color::Rgb(137, 180, 250);
pub const TEAL: Color = Color::Rgb(148, 226, 213);
pub const PEACH: Color = Color::Rgb(250, 179, 135);

/// Terminal default: the cell inherits whatever is underneath.
pub const TRANSPARENT: Color = Color::Reset;

/// Semantic colors a theme has to provide for result rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    TestPassText,
    TestFailText,
    TestXFailText,
    TestXPassText,
    TestSkipText,
    TestDebugText,
    TestWarnText,
    TestFatalText,
    StdOutText,
}

/// Read-only color lookup shared by everything that draws results.
pub trait ThemeProvider: Send + Sync {
    fn color(&self, key: ColorKey) -> Color;
}

/// Result colors, one per [`ColorKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub pass: Color,
    pub fail: Color,
    pub xfail: Color,
    pub xpass: Color,
    pub skip: Color,
    pub debug: Color,
    pub warn: Color,
    pub fatal: Color,
    pub stdout: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            pass: GREEN,
            fail: RED,
            xfail: TEAL,
            xpass: PEACH,
            skip: OVERLAY0,
            debug: BLUE,
            warn: YELLOW,
            fatal: MAROON,
            stdout: TEXT,
        }
    }
}

impl ThemeProvider for Palette {
    fn color(&self, key: ColorKey) -> Color {
        match key {
            ColorKey::TestPassText => self.pass,
            ColorKey::TestFailText => self.fail,
            ColorKey::TestXFailText => self.xfail,
            ColorKey::TestXPassText => self.xpass,
            ColorKey::TestSkipText => self.skip,
            ColorKey::TestDebugText => self.debug,
            ColorKey::TestWarnText => self.warn,
            ColorKey::TestFatalText => self.fatal,
            ColorKey::StdOutText => self.stdout,
        }
    }
}

/// Theme key used to draw results of `kind`; `None` for internal kinds.
pub fn key_for(kind: ResultKind) -> Option<ColorKey> {
    if kind.is_internal() {
        return None;
    }

    let key = match kind {
        ResultKind::Pass => ColorKey::TestPassText,
        ResultKind::Fail => ColorKey::TestFailText,
        ResultKind::ExpectedFail => ColorKey::TestXFailText,
        ResultKind::UnexpectedPass => ColorKey::TestXPassText,
        ResultKind::Skip => ColorKey::TestSkipText,
        ResultKind::MessageDebug => ColorKey::TestDebugText,
        ResultKind::MessageWarn => ColorKey::TestWarnText,
        ResultKind::MessageFatal => ColorKey::TestFatalText,
        _ => ColorKey::StdOutText,
    };
    Some(key)
}

pub fn color_for(kind: ResultKind, theme: &impl ThemeProvider) -> Color {
    match key_for(kind) {
        Some(key) => theme.color(key),
        None => TRANSPARENT,
    }
}

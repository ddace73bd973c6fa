use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Deserializer};

use crate::theme::Palette;

pub const FILE_NAME: &str = "resultpane.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Per-kind color overrides. Values use ratatui's color syntax,
/// e.g. "red", "lightgreen" or "#a6e3a1".
#[derive(Debug, Default, Deserialize)]
pub struct ThemeConfig {
    #[serde(default, deserialize_with = "color")]
    pub pass: Option<Color>,
    #[serde(default, deserialize_with = "color")]
    pub fail: Option<Color>,
    #[serde(default, deserialize_with = "color")]
    pub xfail: Option<Color>,
    #[serde(default, deserialize_with = "color")]
    pub xpass: Option<Color>,
    #[serde(default, deserialize_with = "color")]
    pub skip: Option<Color>,
    #[serde(default, deserialize_with = "color")]
    pub debug: Option<Color>,
    #[serde(default, deserialize_with = "color")]
    pub warn: Option<Color>,
    #[serde(default, deserialize_with = "color")]
    pub fatal: Option<Color>,
    #[serde(default, deserialize_with = "color")]
    pub stdout: Option<Color>,
}

/// Where results come from when no argument is given on the command line.
#[derive(Debug, Default, Deserialize)]
pub struct SourceConfig {
    /// Command line producing NDJSON result records on stdout.
    /// Example: "python3 run_tests.py --ndjson"
    pub command: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DisplayConfig {
    /// Start with passing results hidden.
    #[serde(default)]
    pub hide_passing: bool,
}

impl Config {
    /// Load `resultpane.toml` from `dir`, falling back to defaults if absent or invalid.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(FILE_NAME);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }
        }
    }

    pub fn palette(&self) -> Palette {
        let base = Palette::default();
        let t = &self.theme;
        Palette {
            pass: t.pass.unwrap_or(base.pass),
            fail: t.fail.unwrap_or(base.fail),
            xfail: t.xfail.unwrap_or(base.xfail),
            xpass: t.xpass.unwrap_or(base.xpass),
            skip: t.skip.unwrap_or(base.skip),
            debug: t.debug.unwrap_or(base.debug),
            warn: t.warn.unwrap_or(base.warn),
            fatal: t.fatal.unwrap_or(base.fatal),
            stdout: t.stdout.unwrap_or(base.stdout),
        }
    }

    /// Configured source command split into program and arguments.
    pub fn source_command(&self) -> anyhow::Result<Option<Vec<String>>> {
        let Some(ref command) = self.source.command else {
            return Ok(None);
        };
        let words = shell_words::split(command)?;
        if words.is_empty() {
            anyhow::bail!("[source] command is empty");
        }
        Ok(Some(words))
    }
}

fn color<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    Color::from_str(&raw)
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("invalid color '{}'", raw)))
}

use std::fs;

use ratatui::style::Color;
use resultpane::config::{Config, FILE_NAME};
use resultpane::theme::Palette;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(dir.path());
    assert_eq!(config.palette(), Palette::default());
    assert!(config.source_command().unwrap().is_none());
}

#[test]
fn invalid_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(FILE_NAME), "[theme]\npass = 42\n").unwrap();
    let config = Config::load(dir.path());
    assert_eq!(config.palette(), Palette::default());
}

#[test]
fn loads_all_sections() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(FILE_NAME),
        r##"
[theme]
fail = "#ff5555"
stdout = "white"

[source]
command = "./build/tests --reporter ndjson"

[display]
hide_passing = true
"##,
    )
    .unwrap();

    let config = Config::load(dir.path());
    let palette = config.palette();
    assert_eq!(palette.fail, Color::Rgb(0xff, 0x55, 0x55));
    assert_eq!(palette.stdout, Color::White);
    assert_eq!(palette.pass, Palette::default().pass);
    assert!(config.display.hide_passing);
    assert_eq!(
        config.source_command().unwrap(),
        Some(vec![
            "./build/tests".to_string(),
            "--reporter".to_string(),
            "ndjson".to_string()
        ])
    );
}

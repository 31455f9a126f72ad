// Integration tests for the theme system: built-in palettes, the symmetric
// day/night swap, ambient detection, and custom theme files.

use std::io::Write;

use bookrack::{Theme, ThemeMode};

#[test]
fn test_built_in_palettes_load() {
    assert_eq!(Theme::for_mode(ThemeMode::Day).name, "day");
    assert_eq!(Theme::for_mode(ThemeMode::Night).name, "night");
}

#[test]
fn test_day_and_night_swap_ink_and_paper_symmetrically() {
    let day = Theme::for_mode(ThemeMode::Day);
    let night = Theme::for_mode(ThemeMode::Night);

    assert_eq!(day.colors.ink, night.colors.paper);
    assert_eq!(day.colors.paper, night.colors.ink);
    assert_ne!(day.colors.ink, day.colors.paper);
}

#[test]
fn test_default_theme_is_day() {
    assert_eq!(Theme::default().name, "day");
    assert_eq!(ThemeMode::default(), ThemeMode::Day);
}

#[test]
fn test_mode_parsing_round_trips() {
    assert_eq!(ThemeMode::parse("day"), Some(ThemeMode::Day));
    assert_eq!(ThemeMode::parse("night"), Some(ThemeMode::Night));
    assert_eq!(ThemeMode::parse("dusk"), None);
    assert_eq!(ThemeMode::parse(ThemeMode::Night.as_str()), Some(ThemeMode::Night));
}

#[test]
fn test_ambient_detection_from_colorfgbg() {
    // Dark background indexes map to night.
    assert_eq!(ThemeMode::from_colorfgbg(Some("15;0")), ThemeMode::Night);
    assert_eq!(ThemeMode::from_colorfgbg(Some("15;default;0")), ThemeMode::Night);
    assert_eq!(ThemeMode::from_colorfgbg(Some("12;8")), ThemeMode::Night);

    // Light background indexes map to day.
    assert_eq!(ThemeMode::from_colorfgbg(Some("0;15")), ThemeMode::Day);
    assert_eq!(ThemeMode::from_colorfgbg(Some("0;7")), ThemeMode::Day);

    // Absent or malformed signals fall back to day.
    assert_eq!(ThemeMode::from_colorfgbg(None), ThemeMode::Day);
    assert_eq!(ThemeMode::from_colorfgbg(Some("")), ThemeMode::Day);
    assert_eq!(ThemeMode::from_colorfgbg(Some("garbage")), ThemeMode::Day);
    assert_eq!(ThemeMode::from_colorfgbg(Some("15;default")), ThemeMode::Day);
}

#[test]
fn test_theme_loads_from_custom_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r##"
name = "sepia"

[colors]
ink = "#3b2f2f"
paper = "#f4ecd8"
text_dim = "#8a7d6b"
border = "#d8c9a8"
accent = "#7a5c3e"
match_highlight_fg = "#3b2f2f"
match_highlight_bg = "#e8d8a8"
empty_state_fg = "#7a5c3e"
"##
    )
    .expect("write theme");

    let theme = Theme::from_file(file.path()).expect("custom theme parses");
    assert_eq!(theme.name, "sepia");
    assert_eq!(theme.colors.paper, "#f4ecd8");
}

#[test]
fn test_theme_file_errors_are_reported() {
    assert!(Theme::from_file("/no/such/theme.toml").is_err());

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "name = 'broken'").expect("write theme");
    assert!(Theme::from_file(file.path()).is_err(), "Missing colors table must fail");
}

#[test]
fn test_ansi_escape_generation() {
    assert_eq!(Theme::fg("#ffffff"), "\u{1b}[38;2;255;255;255m");
    assert_eq!(Theme::bg("#0a0a14"), "\u{1b}[48;2;10;10;20m");
    assert_eq!(Theme::fg("not-a-color"), "\u{1b}[38;2;255;255;255m");
    assert_eq!(Theme::reset(), "\u{1b}[0m");
}

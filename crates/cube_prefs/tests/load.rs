//! Loading and saving preference files.

use std::io::Write;

use cube_core::Color;
use cube_prefs::{DEFAULT_PREFS, Interpolation, Preferences, Rgb};
use pretty_assertions::assert_eq;

#[test]
fn test_user_file_overrides_defaults() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "animation:\n  interpolation: cubic_out\ncolors:\n  red: \"#f00\""
    )
    .unwrap();

    let prefs = Preferences::load(Some(file.path())).unwrap();
    assert_eq!(Interpolation::CubicOut, prefs.animation.interpolation);
    assert_eq!(Rgb { rgb: [255, 0, 0] }, prefs.colors.get(Color::Red));

    // Untouched keys keep their defaults.
    assert_eq!(
        DEFAULT_PREFS.animation.twist_duration,
        prefs.animation.twist_duration,
    );
    assert_eq!(DEFAULT_PREFS.colors.blue, prefs.colors.blue);
}

#[test]
fn test_invalid_user_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "animation:\n  twist_duration: -0.5").unwrap();
    assert!(Preferences::load(Some(file.path())).is_err());

    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "animation:\n  twist_duration: 1.0e30").unwrap();
    assert!(Preferences::load(Some(file.path())).is_err());

    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "animation:\n  interpolation: bounce").unwrap();
    assert!(Preferences::load(Some(file.path())).is_err());

    let dir = tempfile::tempdir().unwrap();
    assert!(Preferences::load(Some(&dir.path().join("missing.yaml"))).is_err());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.yaml");

    let mut prefs = DEFAULT_PREFS.clone();
    prefs.animation.twist_duration = 0.0;
    prefs.animation.interpolation = Interpolation::Linear;
    prefs.colors.white = Rgb { rgb: [0xee; 3] };
    prefs.save(&path).unwrap();

    assert_eq!(prefs, Preferences::load(Some(&path)).unwrap());
}

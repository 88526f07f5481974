//! Integration tests for loading quotations and composing wallpapers.
//!
//! These tests write real PNG files into temporary directories and read them
//! back. They use the built-in bitmap face or the bundled fixture font, so no
//! system fonts are required.
//!
//! ## Running Integration Tests
//!
//! ```bash
//! cargo test -p kuralpaper --test compose_integration
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageReader};
use kuralpaper_lib::quotes::{self, DataError, QuotationRecord};
use kuralpaper_lib::wallpaper::builtin_font::BuiltinFace;
use kuralpaper_lib::wallpaper::face::TextFace;
use kuralpaper_lib::wallpaper::text::wrap_lines;
use kuralpaper_lib::wallpaper::{
    ComposeOptions, FontRole, FontSet, Selection, WallpaperRequest, compose, manager, plan_layout,
    render,
};
use tempfile::TempDir;

// ============================================================================
// Helpers
// ============================================================================

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/thirukural_sample.json")
}

fn fixture_font_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSansMono.ttf")
}

fn fate_record() -> QuotationRecord {
    QuotationRecord {
        sequence_number: "1330".to_string(),
        chapter_name: "Fate".to_string(),
        explanation_text: "What is stronger than fate? If we think of an expedient, it will \
                           itself be with us before."
            .to_string(),
        fallback_script_line_1: "Copw; ngUtyp ahTs kw;nwhd;W".to_string(),
        fallback_script_line_2: "#opDe; jhd;Ke; JWk;".to_string(),
        ..Default::default()
    }
}

fn png_dimensions(path: &Path) -> (u32, u32, Option<ImageFormat>) {
    let reader = ImageReader::open(path).unwrap().with_guessed_format().unwrap();
    let format = reader.format();
    let image = reader.decode().unwrap();
    (image.width(), image.height(), format)
}

// ============================================================================
// Data provider
// ============================================================================

#[test]
fn test_fixture_loads_every_entry_in_order() {
    let records = quotes::load_collection(&fixture_path()).unwrap();

    let numbers: Vec<&str> = records.iter().map(|r| r.sequence_number.as_str()).collect();
    assert_eq!(numbers, vec!["1", "2", "380", "1330"]);
}

#[test]
fn test_random_pick_is_member_of_fixture() {
    let records = quotes::load_collection(&fixture_path()).unwrap();

    for _ in 0..20 {
        let picked = quotes::pick_random(&records).unwrap();
        assert!(records.contains(picked));
    }
}

#[test]
fn test_document_without_features_is_format_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "type": "FeatureCollection" }"#).unwrap();

    let result = quotes::load_collection(&path);
    assert!(matches!(result, Err(DataError::Format { .. })));
}

// ============================================================================
// Word wrap
// ============================================================================

#[test]
fn test_wrap_respects_max_width_and_keeps_words() {
    let face = BuiltinFace::default();
    let text = "Dislike is the delight of lust; and the delight of dislike is to be well embraced.";
    let widest = text.split_whitespace().map(|w| face.measure(w)).fold(0.0_f32, f32::max);

    for max_width in [widest, widest * 2.0, widest * 5.0] {
        let lines = wrap_lines(text, &face, max_width);

        assert!(lines.iter().all(|line| face.measure(line) <= max_width));
        assert!(lines.iter().all(|line| !line.is_empty()));
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }
}

#[test]
fn test_wrap_keeps_overwide_word_alone() {
    let face = BuiltinFace::default();
    let lines = wrap_lines("a incomprehensibilities b", &face, face.measure("a b"));

    assert_eq!(lines, vec!["a", "incomprehensibilities", "b"]);
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_compose_writes_png_with_requested_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wallpaper.png");

    let written =
        compose(&fate_record(), &path, &ComposeOptions::default(), &FontSet::builtin()).unwrap();

    assert_eq!(written, path);
    assert_eq!(png_dimensions(&path), (1920, 1080, Some(ImageFormat::Png)));
}

#[test]
fn test_compose_twice_replaces_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wallpaper.png");
    let options = ComposeOptions { width: 800, height: 600, ..Default::default() };
    let fonts = FontSet::builtin();

    compose(&fate_record(), &path, &options, &fonts).unwrap();
    let first = fs::read(&path).unwrap();
    compose(&fate_record(), &path, &options, &fonts).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(png_dimensions(&path), (800, 600, Some(ImageFormat::Png)));

    let leftovers = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn test_fallback_lines_are_rendered() {
    let record = fate_record();
    let options = ComposeOptions::default();
    let fonts = FontSet::builtin();

    let layout = plan_layout(&record, &options, &fonts);
    let quotation: Vec<&str> =
        layout.quotation.block.lines.iter().map(|line| line.text.as_str()).collect();
    assert_eq!(
        quotation.join(" "),
        "Copw; ngUtyp ahTs kw;nwhd;W #opDe; jhd;Ke; JWk;"
    );
    assert_eq!(layout.quotation.role, FontRole::Subtitle);

    let blank = QuotationRecord {
        fallback_script_line_1: String::new(),
        fallback_script_line_2: String::new(),
        ..record.clone()
    };
    assert_ne!(render(&record, &options, &fonts), render(&blank, &options, &fonts));
}

#[test]
fn test_outline_font_from_candidates_renders() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wallpaper.png");
    let options = ComposeOptions { width: 800, height: 600, ..Default::default() };

    let fonts = FontSet::load(&[dir.path().join("missing.ttf"), fixture_font_path()]);
    assert_eq!(fonts.source_path(), Some(fixture_font_path().as_path()));

    compose(&fate_record(), &path, &options, &fonts).unwrap();
    assert_eq!(png_dimensions(&path), (800, 600, Some(ImageFormat::Png)));
    assert_ne!(
        render(&fate_record(), &options, &fonts),
        render(&fate_record(), &options, &FontSet::builtin())
    );
}

// ============================================================================
// Manager
// ============================================================================

#[test]
fn test_manager_generates_requested_quotation() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("today.png");
    let request = WallpaperRequest {
        data_path: fixture_path(),
        output_path: Some(output.clone()),
        output_dir: PathBuf::new(),
        fonts: Vec::new(),
        options: ComposeOptions { width: 640, height: 480, ..Default::default() },
        selection: Selection::Number("380".to_string()),
    };

    let generated = manager::generate(&request).unwrap();

    assert_eq!(generated.path, output);
    assert_eq!(generated.record.chapter_name, "Fate");
    assert_eq!(png_dimensions(&output), (640, 480, Some(ImageFormat::Png)));
}

#[test]
fn test_manager_uses_dated_name_in_output_dir() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("nested").join("wallpapers");
    let request = WallpaperRequest {
        data_path: fixture_path(),
        output_path: None,
        output_dir: output_dir.clone(),
        fonts: Vec::new(),
        options: ComposeOptions { width: 320, height: 240, ..Default::default() },
        selection: Selection::Seeded(7),
    };

    let generated = manager::generate(&request).unwrap();

    assert_eq!(generated.path.parent(), Some(output_dir.as_path()));
    let name = generated.path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("wallpaper_") && name.ends_with(".png"));
}

mod common;

use common::{TestResult, glyph_width, stdout_of, write_file};
use nes_scratch::glyph::{DEFAULT_FONT_PATH, FontResource, GlyphLookupConfig, lookup, run};
use nes_scratch::resource::FilesystemFontSource;
use nes_scratch_glyph::test_utils::{TestFontBuilder, sample_font};
use tempfile::tempdir;

#[test]
fn test_run_reads_default_path_from_disk() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempdir()?;
    write_file(dir.path(), DEFAULT_FONT_PATH, &sample_font())?;

    let source = FilesystemFontSource::new(dir.path());
    let hit = run(&GlyphLookupConfig::default(), &source)?;
    assert_eq!(hit.width, 600);
    assert!(!hit.fallback);
    Ok(())
}

#[test]
fn test_fallback_width_equals_notdef() -> TestResult {
    let data = TestFontBuilder::new()
        .notdef_width(250)
        .glyph(640)
        .glyph(720)
        .map('A', 1)
        .map('B', 2)
        .build();
    let font = FontResource::from_bytes(data)?;

    for ch in ['C', 'z', '~', 'é'] {
        let hit = lookup(&font, ch)?;
        assert_eq!(hit.width, 250, "{ch:?} should measure as .notdef");
        assert!(hit.fallback);
    }
    assert_eq!(lookup(&font, 'A')?.width, 640);
    assert_eq!(lookup(&font, 'B')?.width, 720);
    Ok(())
}

#[test]
fn test_binary_default_run() -> TestResult {
    let dir = tempdir()?;
    write_file(dir.path(), DEFAULT_FONT_PATH, &sample_font())?;

    let output = glyph_width(dir.path(), &[])?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "600\n");
    Ok(())
}

#[test]
fn test_binary_unmapped_character() -> TestResult {
    let dir = tempdir()?;
    write_file(dir.path(), DEFAULT_FONT_PATH, &sample_font())?;

    let output = glyph_width(dir.path(), &["--char", "Z"])?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "500\n");
    Ok(())
}

#[test]
fn test_binary_verbose_and_custom_font() -> TestResult {
    let dir = tempdir()?;
    write_file(dir.path(), "other.ttf", &sample_font())?;

    let output = glyph_width(dir.path(), &["--font", "other.ttf", "-c", "Z", "--verbose"])?;
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("500"));
    assert_eq!(
        lines.next(),
        Some("'Z' (U+005A) -> .notdef (gid 0) width 500 [fallback]")
    );
    Ok(())
}

#[test]
fn test_binary_missing_font_fails() -> TestResult {
    let dir = tempdir()?;
    let output = glyph_width(dir.path(), &[])?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("NotFound"));
    Ok(())
}

#[test]
fn test_binary_unparsable_font_fails() -> TestResult {
    let dir = tempdir()?;
    write_file(dir.path(), DEFAULT_FONT_PATH, b"not a font")?;
    let output = glyph_width(dir.path(), &[])?;
    assert!(!output.status.success());
    Ok(())
}

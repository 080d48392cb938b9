// End-to-end tests for label generation through the real image backend
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};
use onamae::label::{
    render_sample_icon, ComposerConfig, ImageBackend, LabelComposer, LabelError, LabelMode,
    LabelRequest, Pattern, PatternSide, TemplateSource,
};

const SYSTEM_FONTS: &[&str] = &[
    "assets/fonts/ipaexg.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Returns the font used by rendering tests.
///
/// `ONAMAE_FONT` wins over the well-known system paths. Rendering tests panic
/// when nothing is found so a bare machine cannot pass them vacuously.
fn require_font() -> PathBuf {
    std::env::var_os("ONAMAE_FONT")
        .map(PathBuf::from)
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from))
        .find(|p| p.exists())
        .expect("no TrueType font found: set ONAMAE_FONT or install fonts-dejavu-core")
}

/// Bounding box `(min_x, min_y, max_x, max_y)` of every pixel that differs from `background`.
fn ink_bounds(image: &RgbaImage, background: Rgba<u8>) -> Option<(u32, u32, u32, u32)> {
    image
        .enumerate_pixels()
        .filter(|(_, _, p)| **p != background)
        .fold(None, |acc, (x, y, _)| match acc {
            None => Some((x, y, x, y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
        })
}

fn composer_with_font(font_path: PathBuf) -> LabelComposer<ImageBackend> {
    LabelComposer::new(ImageBackend::new(ComposerConfig {
        font_path,
        ..ComposerConfig::default()
    }))
}

fn write_png(path: &Path, image: &RgbaImage) {
    image
        .save_with_format(path, ImageFormat::Png)
        .expect("failed to write test png");
}

#[test]
fn missing_template_fails_and_creates_no_output() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let output = dir.path().join("out.png");
    let composer = LabelComposer::new(ImageBackend::default());

    let err = composer
        .compose_name_only(
            "太郎",
            &TemplateSource::File(dir.path().join("missing.png")),
            &output,
        )
        .expect_err("missing template should fail");

    assert!(matches!(err, LabelError::Load(_)));
    assert!(!output.exists());
}

#[test]
fn missing_font_fails_and_creates_no_output() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let output = dir.path().join("out.png");
    let composer = composer_with_font(dir.path().join("no-such-font.ttf"));

    let err = composer
        .compose_name_only("太郎", &TemplateSource::Builtin, &output)
        .expect_err("missing font should fail");

    assert!(matches!(err, LabelError::Font(_)));
    assert!(!output.exists());
}

#[test]
fn undecodable_icon_in_right_half_is_reported_with_side() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let output = dir.path().join("out.png");
    let bad_icon = dir.path().join("broken.png");
    std::fs::write(&bad_icon, b"not a png at all").expect("write failed");
    let composer = composer_with_font(require_font());

    let err = composer
        .compose_two_patterns(
            &Pattern::new("Taro", None),
            &Pattern::new("Hanako", Some(bad_icon)),
            &TemplateSource::Builtin,
            &output,
        )
        .expect_err("broken icon should fail");

    match err {
        LabelError::Pattern { side, source } => {
            assert_eq!(side, PatternSide::Right);
            assert!(matches!(*source, LabelError::Load(_)));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn request_validation_rejects_missing_icon_before_composing() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let request = LabelRequest::new("花子", TemplateSource::Builtin, dir.path().join("out.png"))
        .with_icon(dir.path().join("missing-icon.png"));

    assert!(matches!(request.validate(), Err(LabelError::Load(_))));
}

#[test]
fn name_only_output_matches_template_size_and_is_idempotent() {
    let font = require_font();
    let dir = tempfile::tempdir().expect("tempdir failed");
    let template = dir.path().join("template.png");
    write_png(&template, &RgbaImage::from_pixel(800, 300, Rgba([255, 255, 255, 255])));
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    let composer = composer_with_font(font);

    for output in [&first, &second] {
        composer
            .compose_name_only("Taro", &TemplateSource::File(template.clone()), output)
            .expect("compose should succeed");
    }

    let decoded = image::open(&first).expect("output should decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (800, 300));
    // 文字画在中心附近，应改变部分像素
    assert!(decoded.pixels().any(|p| *p != Rgba([255, 255, 255, 255])));
    assert_eq!(
        std::fs::read(&first).expect("read first"),
        std::fs::read(&second).expect("read second")
    );
}

#[test]
fn name_and_icon_draws_stretched_icon_at_left_margin() {
    let font = require_font();
    let dir = tempfile::tempdir().expect("tempdir failed");
    let icon = dir.path().join("icon.png");
    write_png(&icon, &RgbaImage::from_pixel(120, 40, Rgba([0, 0, 255, 255])));
    let output = dir.path().join("out.png");
    let composer = composer_with_font(font);

    composer
        .compose_name_and_icon("Hanako", &icon, &TemplateSource::Builtin, &output)
        .expect("compose should succeed");

    let decoded = image::open(&output).expect("output should decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (1181, 425));
    // 图标占据 [42, 382) × [42, 382)
    assert_eq!(*decoded.get_pixel(42, 42), Rgba([0, 0, 255, 255]));
    assert_eq!(*decoded.get_pixel(381, 381), Rgba([0, 0, 255, 255]));
    assert_ne!(*decoded.get_pixel(41, 212), Rgba([0, 0, 255, 255]));
    assert_ne!(*decoded.get_pixel(382, 212), Rgba([0, 0, 255, 255]));
}

#[test]
fn two_patterns_request_with_sample_icon_produces_label() {
    let font = require_font();
    let dir = tempfile::tempdir().expect("tempdir failed");
    let icon = dir.path().join("sample.png");
    write_png(&icon, &render_sample_icon(300));
    let output = dir.path().join("out.png");
    let composer = composer_with_font(font);
    let request = LabelRequest::new("Taro", TemplateSource::Builtin, output.clone())
        .with_icon(icon)
        .with_second(Some("Hanako".to_string()), None);

    let mode = composer.compose(&request).expect("compose should succeed");

    match mode {
        LabelMode::TwoPatterns { first, second } => {
            assert_eq!(first.icon, second.icon);
            assert_eq!(second.name, "Hanako");
        }
        other => panic!("unexpected mode: {:?}", other),
    }
    let decoded = image::open(&output).expect("output should decode");
    assert_eq!((decoded.width(), decoded.height()), (1181, 425));
}

#[test]
fn two_patterns_failure_names_right_side() {
    let font = require_font();
    let dir = tempfile::tempdir().expect("tempdir failed");
    let output = dir.path().join("out.png");
    let composer = composer_with_font(font);

    let err = composer
        .compose_two_patterns(
            &Pattern::new("Taro", None),
            &Pattern::new("Hanako", Some(dir.path().join("missing.png"))),
            &TemplateSource::Builtin,
            &output,
        )
        .expect_err("missing right icon should fail");

    assert!(matches!(err, LabelError::Pattern { side: PatternSide::Right, .. }));
    assert!(!output.exists());
}

#[test]
fn centered_name_ink_sits_on_canvas_center_and_baseline() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let template = dir.path().join("white.png");
    let white = Rgba([255, 255, 255, 255]);
    write_png(&template, &RgbaImage::from_pixel(1181, 425, white));
    let output = dir.path().join("out.png");
    let composer = composer_with_font(require_font());

    composer
        .compose_name_only("HH", &TemplateSource::File(template), &output)
        .expect("compose should succeed");

    let decoded = image::open(&output).expect("output should decode").to_rgba8();
    let (min_x, _min_y, max_x, max_y) = ink_bounds(&decoded, white).expect("name should leave ink");
    // 120pt: 基线 = 212.5 + 0.5 * 120 * 0.75 = 257.5
    let center_x = (min_x + max_x + 1) as f32 / 2.0;
    assert!((center_x - 590.5).abs() <= 2.0, "ink center x = {}", center_x);
    assert!((255..=258).contains(&max_y), "ink bottom = {}", max_y);
}

#[test]
fn name_next_to_icon_starts_after_gap() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let template = dir.path().join("white.png");
    let white = Rgba([255, 255, 255, 255]);
    write_png(&template, &RgbaImage::from_pixel(1181, 425, white));
    let icon = dir.path().join("icon.png");
    write_png(&icon, &RgbaImage::from_pixel(10, 10, Rgba([0, 0, 255, 255])));
    let output = dir.path().join("out.png");
    let composer = composer_with_font(require_font());

    composer
        .compose_name_and_icon("HH", &icon, &TemplateSource::File(template), &output)
        .expect("compose should succeed");

    let decoded = image::open(&output).expect("output should decode").to_rgba8();
    let text_area = image::imageops::crop_imm(&decoded, 382, 0, 1181 - 382, 425).to_image();
    let (min_x, _, _, max_y) = ink_bounds(&text_area, white).expect("name should leave ink");
    // 文字左锚点 x = 42 + 340 + 50 = 432，字形左侧留有少量 side bearing
    let left = 382 + min_x;
    assert!((432..=452).contains(&left), "ink left = {}", left);
    assert!((255..=258).contains(&max_y), "ink bottom = {}", max_y);
}

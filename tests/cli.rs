use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_png_to_svg"))
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap()
}

fn write_png(path: &Path) {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, 3, 2);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[0, 64, 128, 255, 32, 16]).unwrap();
        writer.finish().unwrap();
    }
    fs::write(path, bytes).unwrap();
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn converts_single_file_with_derived_name() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("photo.png"));

    let output = run(&["photo.png", "--size", "64x64", "--no-progress"], dir.path());
    assert!(output.status.success());
    assert!(dir.path().join("photo_64x64.svg").is_file());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("photo_64x64.svg"));
    assert!(stdout.contains("3x2 → SVG: 64x64"));
}

#[test]
fn default_size_is_128() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("icon.png"));

    let output = run(&["icon.png", "-o", "icon.svg"], dir.path());
    assert!(output.status.success());
    let svg = fs::read_to_string(dir.path().join("icon.svg")).unwrap();
    assert!(svg.contains("width=\"128\" height=\"128\" viewBox=\"0 0 128 128\""));
}

#[test]
fn bad_sizes_exit_nonzero_without_output() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("photo.png"));

    for size in ["0x10", "abcx10", "128"] {
        let output = run(&["photo.png", "--size", size], dir.path());
        assert!(!output.status.success(), "size {} should fail", size);
    }
    assert_eq!(entries(dir.path()), 1);
}

#[test]
fn missing_or_non_png_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("photo.jpg"), b"jpeg-ish").unwrap();

    assert!(!run(&["nothing.png"], dir.path()).status.success());
    assert!(!run(&["photo.jpg"], dir.path()).status.success());
    assert_eq!(entries(dir.path()), 1);
}

#[test]
fn single_mode_exits_one_on_conversion_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.png"), b"nope").unwrap();

    let output = run(&["broken.png"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("✗ Error processing"));
}

#[test]
fn batch_reports_partial_success_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    write_png(&src.join("one.png"));
    write_png(&src.join("two.png"));
    write_png(&src.join("three.png"));
    fs::write(src.join("bad.png"), b"corrupted").unwrap();

    let output = run(&["-b", "src", "-o", "svg", "-s", "48x48", "--no-progress"], dir.path());
    assert!(output.status.success());
    assert_eq!(entries(&dir.path().join("svg")), 3);
    assert!(String::from_utf8_lossy(&output.stdout).contains("3/4"));
}

#[test]
fn empty_batch_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["--batch", "."], dir.path());
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No PNG files found"));
    assert_eq!(entries(dir.path()), 0);
}

#[test]
fn batch_requires_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!run(&["--batch", "missing"], dir.path()).status.success());
}

#[test]
fn input_and_batch_are_exclusive() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("photo.png"));
    assert!(!run(&["photo.png", "--batch", "."], dir.path()).status.success());
}

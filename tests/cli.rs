//! 実行ファイルを一時ディレクトリ上で動かす結合テスト。

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn create_gradient_png(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            buf.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 128, 255]);
        }
    }
    let mut result = Vec::new();
    PngEncoder::new(&mut result)
        .write_image(&buf, width, height, ExtendedColorType::Rgba8)
        .expect("PNGのエンコードに失敗");
    result
}

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_icon_builder"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("実行ファイルを起動できませんでした")
}

#[test]
fn converts_fixed_paths_and_prints_success() {
    let dir = tempdir().expect("Failed to create temp directory");
    fs::create_dir(dir.path().join("Assets")).unwrap();
    fs::write(dir.path().join("Assets/icon.png"), create_gradient_png(512, 512)).unwrap();

    let output = run_in(dir.path());

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Icon created successfully!\n"
    );

    let bytes = fs::read(dir.path().join("Assets/icon.ico")).unwrap();
    let icon_dir = ico::IconDir::read(Cursor::new(bytes)).unwrap();
    let sizes: Vec<(u32, u32)> = icon_dir
        .entries()
        .iter()
        .map(|e| (e.width(), e.height()))
        .collect();
    assert_eq!(
        sizes,
        vec![(256, 256), (128, 128), (64, 64), (48, 48), (32, 32), (16, 16)]
    );
}

#[test]
fn repeated_runs_produce_identical_files() {
    let dir = tempdir().expect("Failed to create temp directory");
    fs::create_dir(dir.path().join("Assets")).unwrap();
    fs::write(dir.path().join("Assets/icon.png"), create_gradient_png(300, 300)).unwrap();

    assert!(run_in(dir.path()).status.success());
    let first = fs::read(dir.path().join("Assets/icon.ico")).unwrap();
    assert!(run_in(dir.path()).status.success());
    let second = fs::read(dir.path().join("Assets/icon.ico")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_source_fails_without_output() {
    let dir = tempdir().expect("Failed to create temp directory");
    fs::create_dir(dir.path().join("Assets")).unwrap();

    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("Assets/icon.ico").exists());
}

#[test]
fn undecodable_source_fails() {
    let dir = tempdir().expect("Failed to create temp directory");
    fs::create_dir(dir.path().join("Assets")).unwrap();
    fs::write(dir.path().join("Assets/icon.png"), b"not a png").unwrap();

    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("Assets/icon.ico").exists());
}

#[test]
fn unwritable_destination_fails_and_keeps_prior_output() {
    let dir = tempdir().expect("Failed to create temp directory");
    fs::create_dir(dir.path().join("Assets")).unwrap();
    fs::write(dir.path().join("Assets/icon.png"), create_gradient_png(256, 256)).unwrap();
    // 出力先にディレクトリを置いて書き込めない状態にする
    fs::create_dir(dir.path().join("Assets/icon.ico")).unwrap();
    fs::write(dir.path().join("Assets/icon.ico/prior.txt"), "prior").unwrap();

    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("Assets/icon.ico/prior.txt")).unwrap(),
        "prior"
    );
}

#[test]
fn non_square_source_is_stretched_with_warning() {
    let dir = tempdir().expect("Failed to create temp directory");
    fs::create_dir(dir.path().join("Assets")).unwrap();
    fs::write(dir.path().join("Assets/icon.png"), create_gradient_png(300, 200)).unwrap();

    let output = run_in(dir.path());

    assert!(output.status.success());
    assert!(!output.stderr.is_empty());
    let bytes = fs::read(dir.path().join("Assets/icon.ico")).unwrap();
    let icon_dir = ico::IconDir::read(Cursor::new(bytes)).unwrap();
    let largest = icon_dir.entries()[0].decode().unwrap();
    assert_eq!((largest.width(), largest.height()), (256, 256));
}

#[test]
fn rejects_unexpected_arguments() {
    let dir = tempdir().expect("Failed to create temp directory");
    let output = Command::new(env!("CARGO_BIN_EXE_icon_builder"))
        .current_dir(dir.path())
        .arg("Assets/other.png")
        .output()
        .expect("実行ファイルを起動できませんでした");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

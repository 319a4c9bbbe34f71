//! End-to-end tests driving the compiled binary over real image files.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use tempfile::TempDir;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

fn count_vlines() -> Command {
    Command::new(env!("CARGO_BIN_EXE_count_vlines"))
}

fn white_canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, WHITE)
}

fn fill_column(img: &mut RgbImage, x: u32, px: Rgb<u8>) {
    for y in 0..img.height() {
        img.put_pixel(x, y, px);
    }
}

fn save(dir: &TempDir, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.path().join(name);
    img.save(&path).expect("fixture saved");
    path
}

fn assert_count(path: &Path, expected: &str) {
    count_vlines()
        .arg(path)
        .assert()
        .success()
        .stdout(format!("{expected}\n"));
}

#[test]
fn blank_image_counts_zero() {
    let dir = TempDir::new().unwrap();
    let path = save(&dir, "blank.png", &white_canvas(100, 100));
    assert_count(&path, "0");
}

#[test]
fn single_full_column_counts_one() {
    let dir = TempDir::new().unwrap();
    let mut img = white_canvas(100, 100);
    fill_column(&mut img, 50, BLACK);
    let path = save(&dir, "one.png", &img);
    assert_count(&path, "1");
}

#[test]
fn thick_band_counts_one() {
    let dir = TempDir::new().unwrap();
    let mut img = white_canvas(100, 100);
    for x in 40..=45 {
        fill_column(&mut img, x, BLACK);
    }
    let path = save(&dir, "band.png", &img);
    assert_count(&path, "1");
}

#[test]
fn dark_gray_column_counts_one() {
    let dir = TempDir::new().unwrap();
    let mut img = white_canvas(100, 100);
    fill_column(&mut img, 10, Rgb([100, 100, 100]));
    let path = save(&dir, "gray.png", &img);
    assert_count(&path, "1");
}

#[test]
fn boundary_gray_column_counts_zero() {
    let dir = TempDir::new().unwrap();
    let mut img = white_canvas(100, 100);
    fill_column(&mut img, 10, Rgb([128, 128, 128]));
    let path = save(&dir, "boundary.png", &img);
    assert_count(&path, "0");
}

#[test]
fn three_separated_columns_count_three() {
    let dir = TempDir::new().unwrap();
    let mut img = white_canvas(100, 100);
    for x in [10, 30, 50] {
        fill_column(&mut img, x, BLACK);
    }
    let path = save(&dir, "three.png", &img);
    assert_count(&path, "3");
}

#[test]
fn lone_top_pixel_counts_one() {
    // None of the probe rows (50, 25, 75) can see y = 0; this goes through
    // the fallback scan.
    let dir = TempDir::new().unwrap();
    let mut img = white_canvas(100, 100);
    img.put_pixel(50, 0, BLACK);
    let path = save(&dir, "speck.png", &img);
    assert_count(&path, "1");
}

#[test]
fn bmp_input_is_accepted() {
    let dir = TempDir::new().unwrap();
    let mut img = white_canvas(64, 64);
    fill_column(&mut img, 20, BLACK);
    let path = save(&dir, "stroke.bmp", &img);
    assert_count(&path, "1");
}

#[test]
fn jpeg_artifacts_do_not_split_a_stroke() {
    // Lossy encoding smears the stroke edges into dark gray; the run stays
    // contiguous, so the count must remain 1.
    let dir = TempDir::new().unwrap();
    let mut img = white_canvas(100, 100);
    for x in 48..=50 {
        fill_column(&mut img, x, BLACK);
    }
    let path = save(&dir, "lossy.jpg", &img);
    assert_count(&path, "1");
}

#[test]
fn missing_file_reports_file_error() {
    let dir = TempDir::new().unwrap();
    count_vlines()
        .arg(dir.path().join("absent.png"))
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("File Error: "))
        .stderr(predicate::str::is_empty());
}

#[test]
fn corrupted_file_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("noise.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    count_vlines()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("Input/Output Error: "));
}

#[test]
fn no_arguments_report_usage() {
    count_vlines()
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("Invalid number of arguments.")
                .and(predicate::str::contains("Usage:")),
        );
}

#[test]
fn extra_arguments_report_usage() {
    count_vlines()
        .args(["a.png", "b.png"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid number of arguments."));
}

#[test]
fn shows_help() {
    count_vlines()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("count_vlines"));
}

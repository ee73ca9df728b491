use image::{Rgb, RgbImage};
use std::path::Path;
use tempfile::TempDir;

use crate::config::Config;
use crate::models::{NamingStrategy, ShapeKind};

/// Config writing into a fresh temporary directory with the reference
/// 400px / 8px settings.
pub fn create_test_config(naming: NamingStrategy) -> (Config, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        output_dir: temp_dir.path().to_path_buf(),
        canvas_size: 400,
        stroke_width: 8,
        naming,
        shapes: ShapeKind::ALL.to_vec(),
        concurrency: 1,
    };
    (config, temp_dir)
}

pub fn count_pixels(image: &RgbImage, color: Rgb<u8>) -> usize {
    image.pixels().filter(|p| **p == color).count()
}

pub fn load_rgb(path: &Path) -> RgbImage {
    image::open(path).unwrap().to_rgb8()
}

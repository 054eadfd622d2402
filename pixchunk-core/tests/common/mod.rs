#![allow(dead_code)]

use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Pixel color derived from its position so every chunk is distinguishable.
pub fn color_at(x: u32, y: u32) -> [u8; 3] {
    [x as u8, y as u8, (x * 7 + y * 13) as u8]
}

pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb(color_at(x, y)));
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Output file names in `dir`, sorted.
pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// Every `'#......'` token in `text`, quotes stripped.
pub fn color_tokens(text: &str) -> Vec<String> {
    text.split('\'')
        .filter(|t| t.starts_with('#'))
        .map(str::to_string)
        .collect()
}

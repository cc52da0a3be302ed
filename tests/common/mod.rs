//! Fixture writers shared by the integration tests.

#![allow(dead_code)]

use imageproc::image::{GrayImage, ImageBuffer, Luma, LumaA, Rgb, RgbImage};
use ndarray::{ArrayBase, Data, Dimension};
use ndarray_npy::{WritableElement, WriteNpyExt};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use std::fs::File;
use std::path::{Path, PathBuf};

pub fn write_npz<S, D>(path: &Path, name: &str, array: &ArrayBase<S, D>) -> PathBuf
where
    S: Data,
    S::Elem: WritableElement,
    D: Dimension,
{
    let file = File::create(path).expect("create npz");
    let mut zip = ZipWriter::new(file);
    zip.start_file(name, SimpleFileOptions::default())
        .expect("start npz entry");
    array.write_npy(&mut zip).expect("write npy entry");
    zip.finish().expect("finish npz");
    path.to_owned()
}

pub fn write_depth_png(path: &Path, width: u32, height: u32, f: impl Fn(u32, u32) -> u16) -> PathBuf {
    let img: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_fn(width, height, |x, y| Luma([f(x, y)]));
    img.save(path).expect("save 16-bit png");
    path.to_owned()
}

pub fn write_depth_alpha_png(
    path: &Path,
    width: u32,
    height: u32,
    f: impl Fn(u32, u32) -> [u16; 2],
) -> PathBuf {
    let img: ImageBuffer<LumaA<u16>, Vec<u16>> =
        ImageBuffer::from_fn(width, height, |x, y| LumaA(f(x, y)));
    img.save(path).expect("save 16-bit gray + alpha png");
    path.to_owned()
}

pub fn write_gray_png(path: &Path, width: u32, height: u32, value: u8) -> PathBuf {
    GrayImage::from_pixel(width, height, Luma([value]))
        .save(path)
        .expect("save 8-bit png");
    path.to_owned()
}

pub fn write_rgb_png(path: &Path, width: u32, height: u32) -> PathBuf {
    RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 128]))
        .save(path)
        .expect("save rgb png");
    path.to_owned()
}

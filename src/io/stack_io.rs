//! Reading and writing image stacks as sequences of image files
//!
//! A stack on disk is a directory of single-plane images (or an explicit
//! list of files); planes are ordered by file name. Pixel values are kept
//! as-is: 8-bit images are widened without rescaling.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageBuffer, Luma};
use log::{debug, info, warn};

use crate::errors::{RoiError, RoiResult};
use crate::stack::{ImageStack, Pixel, Plane};

const IMAGE_EXTENSIONS: &[&str] = &["png", "tif", "tiff", "bmp", "pgm", "jpg", "jpeg"];

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// List the image files of a directory in name order
pub fn list_plane_files(dir: &str) -> RoiResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && has_image_extension(path))
        .collect();
    files.sort();
    Ok(files)
}

/// Decode one image file into a plane labelled with its file stem
pub fn load_plane(path: &Path) -> RoiResult<Plane> {
    let image = image::open(path)?;
    let (width, height) = (image.width() as usize, image.height() as usize);

    let pixels: Vec<Pixel> = match image {
        DynamicImage::ImageLuma8(buffer) => buffer.into_raw().into_iter().map(Pixel::from).collect(),
        DynamicImage::ImageLuma16(buffer) => buffer.into_raw(),
        other => {
            warn!("{} is not greyscale, converting to 16-bit luma", path.display());
            other.to_luma16().into_raw()
        }
    };

    let mut plane = Plane::from_raw(width, height, pixels)?;
    plane.label = path.file_stem().map(|s| s.to_string_lossy().to_string());
    Ok(plane)
}

/// Load a stack from explicit plane files, in the given order
pub fn load_stack_files(files: &[PathBuf]) -> RoiResult<ImageStack> {
    if files.is_empty() {
        return Err(RoiError::InvalidStack("No image files given".to_string()));
    }

    let mut planes = Vec::with_capacity(files.len());
    for file in files {
        debug!("Reading plane {}", file.display());
        planes.push(load_plane(file)?);
    }

    let stack = ImageStack::from_planes(planes)?;
    info!("Loaded {}x{}x{} stack", stack.width(), stack.height(), stack.depth());
    Ok(stack)
}

/// Load a stack from a directory of images, or from a single image file
pub fn load_stack(path: &str) -> RoiResult<ImageStack> {
    if Path::new(path).is_dir() {
        let files = list_plane_files(path)?;
        if files.is_empty() {
            return Err(RoiError::InvalidStack(format!("No image files in {}", path)));
        }
        load_stack_files(&files)
    } else {
        load_stack_files(&[PathBuf::from(path)])
    }
}

/// File name used for plane `index` (1-based) when saving a stack
pub fn plane_file_name(prefix: &str, index: usize) -> String {
    format!("{}_{:04}.png", prefix, index)
}

/// Save a single plane as a 16-bit greyscale PNG
pub fn save_plane(plane: &Plane, path: &Path) -> RoiResult<()> {
    let buffer: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_raw(plane.width() as u32, plane.height() as u32, plane.pixels().to_vec())
            .ok_or_else(|| RoiError::InvalidStack("Plane buffer has the wrong size".to_string()))?;
    buffer.save(path)?;
    Ok(())
}

/// Save every plane of a stack into `dir`, creating it if needed
///
/// `on_plane` is called after each plane is written, e.g. to drive a
/// progress bar.
///
/// # Returns
/// The paths written, in plane order
pub fn save_stack<F>(stack: &ImageStack, dir: &str, prefix: &str, mut on_plane: F) -> RoiResult<Vec<PathBuf>>
where
    F: FnMut(usize),
{
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(stack.depth());
    for (i, plane) in stack.planes().iter().enumerate() {
        let path = Path::new(dir).join(plane_file_name(prefix, i + 1));
        save_plane(plane, &path)?;
        debug!("Wrote {}", path.display());
        written.push(path);
        on_plane(i + 1);
    }

    info!("Saved {} planes to {}", written.len(), dir);
    Ok(written)
}

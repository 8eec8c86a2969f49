//! In-memory image stack
//!
//! A stack is an ordered sequence of equally sized 2D planes. Planes are
//! addressed 1-based, the way stack viewers number slices.

use crate::errors::{RoiError, RoiResult};

/// Pixel value stored in a plane
///
/// Wide enough for both 8-bit and 16-bit stacks; the cropping code never
/// interprets values.
pub type Pixel = u16;

/// A single 2D plane of pixel data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    /// Width of the plane (columns)
    width: usize,
    /// Height of the plane (rows)
    height: usize,
    /// Pixel values in row-major order
    pixels: Vec<Pixel>,
    /// Optional slice label carried along when planes are copied
    pub label: Option<String>,
}

impl Plane {
    /// Create a zero-filled plane
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create a plane with every pixel set to `value`
    pub fn filled(width: usize, height: usize, value: Pixel) -> Self {
        Plane {
            width,
            height,
            pixels: vec![value; width * height],
            label: None,
        }
    }

    /// Create a plane from row-major pixel data
    ///
    /// # Returns
    /// The plane, or an error if `pixels` does not hold `width * height` values
    pub fn from_raw(width: usize, height: usize, pixels: Vec<Pixel>) -> RoiResult<Self> {
        if pixels.len() != width * height {
            return Err(RoiError::InvalidStack(format!(
                "Plane of {}x{} needs {} pixels, got {}",
                width, height, width * height, pixels.len()
            )));
        }
        Ok(Plane { width, height, pixels, label: None })
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the value at `(x, y)`, or `None` if out of bounds
    pub fn get(&self, x: i64, y: i64) -> Option<Pixel> {
        let idx = self.index(x, y)?;
        self.pixels.get(idx).copied()
    }

    /// Set the value at `(x, y)`
    ///
    /// # Returns
    /// `false` if the coordinate lies outside the plane and nothing was written
    pub fn set(&mut self, x: i64, y: i64, value: Pixel) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.pixels[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Raw pixel data in row-major order
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }
}

/// An ordered stack of equally sized planes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStack {
    width: usize,
    height: usize,
    planes: Vec<Plane>,
}

impl ImageStack {
    /// Create an empty stack whose planes will be `width` x `height`
    pub fn new(width: usize, height: usize) -> Self {
        ImageStack {
            width,
            height,
            planes: Vec::new(),
        }
    }

    /// Create a stack of `depth` zero-filled planes
    pub fn blank(width: usize, height: usize, depth: usize) -> Self {
        ImageStack {
            width,
            height,
            planes: (0..depth).map(|_| Plane::new(width, height)).collect(),
        }
    }

    /// Build a stack from planes, checking that all dimensions agree
    pub fn from_planes(planes: Vec<Plane>) -> RoiResult<Self> {
        let (width, height) = match planes.first() {
            Some(first) => (first.width(), first.height()),
            None => return Err(RoiError::InvalidStack("Stack has no planes".to_string())),
        };
        let mut stack = ImageStack::new(width, height);
        for plane in planes {
            stack.add_plane(plane)?;
        }
        Ok(stack)
    }

    /// Append a plane to the end of the stack
    pub fn add_plane(&mut self, plane: Plane) -> RoiResult<()> {
        if plane.width() != self.width || plane.height() != self.height {
            return Err(RoiError::InvalidStack(format!(
                "Plane is {}x{} but the stack is {}x{}",
                plane.width(), plane.height(), self.width, self.height
            )));
        }
        self.planes.push(plane);
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of planes
    pub fn depth(&self) -> usize {
        self.planes.len()
    }

    /// Get plane `index` (1-based)
    pub fn plane(&self, index: usize) -> Option<&Plane> {
        if index == 0 {
            return None;
        }
        self.planes.get(index - 1)
    }

    /// Planes in stack order
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }
}

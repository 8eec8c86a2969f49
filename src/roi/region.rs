//! Region structure for a user-drawn area of interest
//!
//! A region is an axis-aligned rectangle in plane-local pixel coordinates,
//! optionally refined by a per-pixel mask. Coordinates are signed: regions
//! drawn partly or fully outside a plane are legal and are clamped by the
//! operations that consume them, never on construction.

/// Axis-aligned rectangle in pixel coordinates
///
/// `(x, y)` is the top-left corner, and `end_x`/`end_y` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: i32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: i32,

    /// Width of the rectangle in pixels
    pub width: i32,

    /// Height of the rectangle in pixels
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the rectangle in pixels
    /// * `height` - Height of the rectangle in pixels
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> i32 {
        self.y.saturating_add(self.height)
    }
}

/// Non-rectangular mask over a region's bounding rectangle
///
/// The mask has the same dimensions as the rectangle it refines; offset
/// `(0, 0)` corresponds to the rectangle's top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// Create a mask from row-major bits
    ///
    /// Returns `None` if the number of bits does not match `width * height`.
    pub fn new(width: usize, height: usize, bits: Vec<bool>) -> Option<Self> {
        if bits.len() != width * height {
            return None;
        }
        Some(Mask { width, height, bits })
    }

    /// Build a mask by evaluating `inside` for every offset in the rectangle
    pub fn from_fn<F>(width: usize, height: usize, mut inside: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut bits = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                bits.push(inside(x, y));
            }
        }
        Mask { width, height, bits }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether the mask is set at an offset from the rectangle origin
    ///
    /// Offsets outside the mask are reported as unset.
    pub fn contains(&self, dx: usize, dy: usize) -> bool {
        if dx >= self.width || dy >= self.height {
            return false;
        }
        self.bits[dy * self.width + dx]
    }
}

/// Kind of region drawn by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionKind {
    /// A rectangle, optionally masked to an arbitrary shape
    #[default]
    Area,
    /// A single marked point; only its top-left corner is meaningful
    Point,
}

/// A region of interest
///
/// `label` is the free-text name that may encode a plane number, and
/// `position` is the explicit plane attribute some tools attach to a region.
/// A region with no label at all has no identity and cannot be matched to a
/// plane by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub bounds: Rect,
    pub mask: Option<Mask>,
    pub label: Option<String>,
    pub position: Option<usize>,
    pub kind: RegionKind,
}

impl Region {
    /// Create an unlabelled rectangular region
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Region {
            bounds: Rect::new(x, y, width, height),
            mask: None,
            label: None,
            position: None,
            kind: RegionKind::Area,
        }
    }

    /// Create a point region at `(x, y)`
    pub fn point(x: i32, y: i32) -> Self {
        Region {
            kind: RegionKind::Point,
            ..Region::new(x, y, 0, 0)
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_mask(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Label as a string slice, if the region has one
    pub fn name(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Check whether pixel `(x, y)` of the plane lies inside this region
    ///
    /// The test honours the mask when there is one; otherwise the whole
    /// rectangle counts as inside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let r = &self.bounds;
        if x < r.x || y < r.y || x >= r.end_x() || y >= r.end_y() {
            return false;
        }
        match &self.mask {
            None => true,
            Some(mask) => mask.contains((x - r.x) as usize, (y - r.y) as usize),
        }
    }
}

//! Core value types for box geometry.
//!
//! All lengths are in device-independent units (dp). Arithmetic is exact:
//! no rounding happens here, the host rounds when it converts to pixels.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::errors::GeometryError;

/// A non-negative, finite length in device-independent units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Dp(f64);

impl Dp {
    pub const ZERO: Self = Self(0.0);

    /// Create a length, rejecting negative and non-finite values.
    pub fn new(value: f64) -> Result<Self, GeometryError> {
        if !value.is_finite() {
            return Err(GeometryError::NonFiniteLength { value });
        }
        if value < 0.0 {
            return Err(GeometryError::NegativeLength { value });
        }
        // Normalize -0.0 so equality and serialization stay exact.
        Ok(Self(value + 0.0))
    }

    /// Create a length from a whole number of dp.
    pub const fn from_int(value: u32) -> Self {
        Self(value as f64)
    }

    /// The raw value in dp.
    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }

    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }

    /// Subtract, allowing the result to go negative.
    ///
    /// Leftover space in an undersized container is negative, so it is
    /// expressed as a plain `f64` rather than a `Dp`.
    pub fn signed_sub(self, other: Self) -> f64 {
        self.0 - other.0
    }

    /// Subtract, clamping at zero.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self((self.0 - other.0).max(0.0))
    }
}

/// Addition saturates at `f64::MAX` so sums stay finite.
impl Add for Dp {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0).min(f64::MAX))
    }
}

impl AddAssign for Dp {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl From<u32> for Dp {
    fn from(value: u32) -> Self {
        Self::from_int(value)
    }
}

impl TryFrom<f64> for Dp {
    type Error = GeometryError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Dp> for f64 {
    fn from(value: Dp) -> Self {
        value.0
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.0)
    }
}

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Width, start to end
    Horizontal,
    /// Height, top to bottom
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("Horizontal"),
            Axis::Vertical => f.write_str("Vertical"),
        }
    }
}

/// A width and a height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: Dp,
    pub height: Dp,
}

impl Size {
    pub const ZERO: Self = Self { width: Dp::ZERO, height: Dp::ZERO };

    pub const fn new(width: Dp, height: Dp) -> Self {
        Self { width, height }
    }

    /// Create a size from whole dp values.
    pub const fn from_ints(width: u32, height: u32) -> Self {
        Self::new(Dp::from_int(width), Dp::from_int(height))
    }

    pub const fn square(side: Dp) -> Self {
        Self::new(side, side)
    }

    /// The component along `axis`.
    pub fn get(&self, axis: Axis) -> Dp {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Grow by a margin on every side.
    pub fn inflate(&self, margin: Margin) -> Size {
        Size::new(
            self.width + margin.horizontal(),
            self.height + margin.vertical(),
        )
    }

    /// Shrink by a margin on every side, never below zero.
    pub fn deflate(&self, margin: Margin) -> Size {
        Size::new(
            self.width.saturating_sub(margin.horizontal()),
            self.height.saturating_sub(margin.vertical()),
        )
    }

    /// Component-wise maximum.
    pub fn max(&self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }
}

impl Add for Size {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width.value(), self.height.value())
    }
}

/// A signed position. Offsets go negative when a child overflows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The component along `axis`.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f64 {
        self.origin.x
    }

    pub fn y(&self) -> f64 {
        self.origin.y
    }

    pub fn width(&self) -> f64 {
        self.size.width.value()
    }

    pub fn height(&self) -> f64 {
        self.size.height.value()
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.origin.x + self.width()
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.height()
    }

    /// Check if a point is inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.right()
            && point.y >= self.origin.y
            && point.y <= self.bottom()
    }

    /// Move the rectangle by an offset.
    pub fn translate(&self, by: Point) -> Rect {
        Rect::new(self.origin + by, self.size)
    }

    /// Compute union (bounding box) with another rectangle.
    pub fn union(&self, other: &Rect) -> Rect {
        let x1 = self.origin.x.min(other.origin.x);
        let y1 = self.origin.y.min(other.origin.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        // Both extents are differences of ordered edges, so never negative.
        Rect::new(
            Point::new(x1, y1),
            Size::new(Dp((x2 - x1).max(0.0)), Dp((y2 - y1).max(0.0))),
        )
    }
}

/// Reading direction used to resolve logical start/end edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    /// Start is the left edge
    #[default]
    Ltr,
    /// Start is the right edge
    Rtl,
}

/// Margins in logical terms.
///
/// `start`/`end` follow the reading direction; a host resolves them to
/// left/right with [`Margin::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margin {
    pub start: Dp,
    pub top: Dp,
    pub end: Dp,
    pub bottom: Dp,
}

impl Margin {
    pub const ZERO: Self = Self {
        start: Dp::ZERO,
        top: Dp::ZERO,
        end: Dp::ZERO,
        bottom: Dp::ZERO,
    };

    pub const fn new(start: Dp, top: Dp, end: Dp, bottom: Dp) -> Self {
        Self { start, top, end, bottom }
    }

    /// Create a margin from whole dp values, in start/top/end/bottom order.
    pub const fn from_ints(start: u32, top: u32, end: u32, bottom: u32) -> Self {
        Self::new(
            Dp::from_int(start),
            Dp::from_int(top),
            Dp::from_int(end),
            Dp::from_int(bottom),
        )
    }

    /// Create uniform margin.
    pub const fn uniform(value: Dp) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create symmetric margin.
    pub const fn symmetric(horizontal: Dp, vertical: Dp) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal margin.
    pub fn horizontal(&self) -> Dp {
        self.start + self.end
    }

    /// Total vertical margin.
    pub fn vertical(&self) -> Dp {
        self.top + self.bottom
    }

    /// The start/top edge along `axis`.
    pub fn leading(&self, axis: Axis) -> Dp {
        match axis {
            Axis::Horizontal => self.start,
            Axis::Vertical => self.top,
        }
    }

    /// The end/bottom edge along `axis`.
    pub fn trailing(&self, axis: Axis) -> Dp {
        match axis {
            Axis::Horizontal => self.end,
            Axis::Vertical => self.bottom,
        }
    }

    /// Map start/end onto left/right for a reading direction.
    pub fn resolve(&self, direction: LayoutDirection) -> PhysicalMargin {
        let (left, right) = match direction {
            LayoutDirection::Ltr => (self.start, self.end),
            LayoutDirection::Rtl => (self.end, self.start),
        };
        PhysicalMargin {
            left,
            top: self.top,
            right,
            bottom: self.bottom,
        }
    }
}

impl Add for Margin {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Margin::new(
            self.start + rhs.start,
            self.top + rhs.top,
            self.end + rhs.end,
            self.bottom + rhs.bottom,
        )
    }
}

/// Margins resolved to screen edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalMargin {
    pub left: Dp,
    pub top: Dp,
    pub right: Dp,
    pub bottom: Dp,
}

/// Pixels per dp on the host display.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Density(f64);

impl Density {
    pub const DEFAULT: Self = Self(1.0);

    pub fn new(pixels_per_dp: f64) -> Result<Self, GeometryError> {
        if pixels_per_dp.is_finite() && pixels_per_dp > 0.0 {
            Ok(Self(pixels_per_dp))
        } else {
            Err(GeometryError::InvalidDensity { value: pixels_per_dp })
        }
    }

    pub const fn pixels_per_dp(self) -> f64 {
        self.0
    }

    /// Convert a length to (unrounded) pixels.
    pub fn to_px(self, length: Dp) -> f64 {
        length.value() * self.0
    }

    /// Convert a signed coordinate to (unrounded) pixels.
    pub fn coordinate_to_px(self, value: f64) -> f64 {
        value * self.0
    }

    /// Convert a pixel measurement back to dp.
    pub fn to_dp(self, px: f64) -> Result<Dp, GeometryError> {
        Dp::new(px / self.0)
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A color value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create from hex string (e.g., "#FF5733" or "FF5733CC").
    pub fn from_hex(hex: &str) -> Result<Self, GeometryError> {
        let invalid = || GeometryError::InvalidColor { value: hex.to_string() };
        let digits = hex.trim_start_matches('#');
        if !digits.is_ascii() || !(digits.len() == 6 || digits.len() == 8) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        let mut color = Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?);
        if digits.len() == 8 {
            color.a = channel(6)? as f32 / 255.0;
        }
        Ok(color)
    }

    /// Convert to 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }

    /// Format as `#rrggbb`, dropping alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

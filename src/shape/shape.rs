use std::io::Write;

use super::{Rect, ShapeError};

/// A two dimensional shape that can be measured
pub trait Shape {
    /// Surface of the shape, or an error when the shape's dimensions make no sense
    fn area(&self) -> Result<f64, ShapeError>;

    /// Length of the shape's outline, computed whatever the dimensions are
    fn perimeter(&self) -> f64;
}

/// Every kind of shape this crate knows about
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Rect(Rect),
}

impl Shape for ShapeKind {
    fn area(&self) -> Result<f64, ShapeError> {
        match self {
            ShapeKind::Rect(rect) => rect.area(),
        }
    }

    fn perimeter(&self) -> f64 {
        match self {
            ShapeKind::Rect(rect) => rect.perimeter(),
        }
    }
}

impl From<Rect> for ShapeKind {
    fn from(value: Rect) -> Self {
        ShapeKind::Rect(value)
    }
}

/// Writes the area of `shape` as a single line, or the reason it has none
///
/// Only a failing `out` is reported as an error, an invalid shape is not.
///
/// # Example
///
/// ```rust
/// use greet_groups::{report_area, Rect};
///
/// let mut out = Vec::new();
/// report_area(&Rect::new(1.0, 2.0), &mut out)?;
/// report_area(&Rect::new(0.0, 2.0), &mut out)?;
/// assert_eq!(
///     String::from_utf8_lossy(&out),
///     "2\ninvalid dimension: width and height must be positive (got 0 x 2)\n"
/// );
/// # Ok::<(), greet_groups::Error>(())
/// ```
pub fn report_area<S, W>(shape: &S, out: &mut W) -> crate::Result<()>
where
    S: Shape + ?Sized,
    W: Write + ?Sized,
{
    match shape.area() {
        Ok(area) => writeln!(out, "{area}")?,
        Err(error) => writeln!(out, "{error}")?,
    }
    Ok(())
}

use super::{Shape, ShapeError};

/// Axis aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rect {
    fn area(&self) -> Result<f64, ShapeError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ShapeError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.width * self.height)
    }

    fn perimeter(&self) -> f64 {
        (self.width + self.height) * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;
    use crate::shape::{Shape, ShapeError};

    #[test]
    fn area_of_a_valid_rect() {
        assert_eq!(Rect::new(1.0, 2.0).area(), Ok(2.0));
    }

    #[test]
    fn non_positive_sides_are_rejected() {
        assert_eq!(
            Rect::new(0.0, 2.0).area(),
            Err(ShapeError::InvalidDimension {
                width: 0.0,
                height: 2.0
            })
        );
        assert!(matches!(
            Rect::new(1.0, -1.0).area(),
            Err(ShapeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn perimeter_skips_validation() {
        assert_eq!(Rect::new(1.0, 2.0).perimeter(), 6.0);
        assert_eq!(Rect::new(0.0, 2.0).perimeter(), 4.0);
        assert_eq!(Rect::new(1.0, -1.0).perimeter(), 0.0);
    }
}

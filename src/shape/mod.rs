mod error;
mod rect;
mod shape;

pub use error::ShapeError;
pub use rect::Rect;
pub use shape::{report_area, Shape, ShapeKind};

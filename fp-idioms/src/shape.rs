//! Closed sum type over geometric shapes, and the exhaustive area dispatcher.
//!
//! Every `match` over [`Shape`] in this crate lists each variant explicitly. There is no `_` arm,
//! so adding a sixth shape fails to compile until each dispatcher handles it.

use std::f64::consts::PI;

/// A geometric shape. Fields are taken as-is: zero and negative values describe degenerate
/// shapes and are not rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
    Rectangle { length: f64, width: f64 },
    /// Axes are measured from the center.
    Ellipse { axis_1: f64, axis_2: f64 },
    Cylinder { radius: f64, height: f64 },
}

/// Field-less tag for each [`Shape`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Ellipse,
    Cylinder,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Ellipse,
        ShapeKind::Cylinder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Cylinder => "cylinder",
        }
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Square { .. } => ShapeKind::Square,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Ellipse { .. } => ShapeKind::Ellipse,
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
        }
    }

    /// Area of this shape. For a cylinder this is the total surface area.
    pub fn area(&self) -> f64 {
        area(*self)
    }
}

/// Compute the area of any shape, one formula per variant.
#[inline]
pub fn area(shape: Shape) -> f64 {
    match shape {
        Shape::Circle { radius } => PI * radius.powi(2),
        Shape::Square { side } => side.powi(2),
        Shape::Rectangle { length, width } => length * width,
        Shape::Ellipse { axis_1, axis_2 } => PI * axis_1 * axis_2,
        Shape::Cylinder { radius, height } => 2.0 * PI * radius * (radius + height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn circle_area() {
        assert!(close(area(Shape::Circle { radius: 2.0 }), 12.566));
    }

    #[test]
    fn cylinder_is_surface_area() {
        let shape = Shape::Cylinder {
            radius: 3.1,
            height: 8.8,
        };
        assert!(close(shape.area(), 231.787));
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Shape::Square { side: 1.0 }.kind(), ShapeKind::Square);
        assert_eq!(ShapeKind::Ellipse.name(), "ellipse");
    }
}

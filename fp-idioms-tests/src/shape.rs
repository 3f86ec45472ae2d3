use fp_idioms::shape::{area, Shape, ShapeKind};
use proptest::prelude::*;
#[cfg(test)]
use std::f64::consts::PI;

/// A representative shape for each kind. The match is exhaustive, so a new kind must get a
/// sample here before this crate compiles.
pub fn sample(kind: ShapeKind) -> (Shape, f64) {
    match kind {
        ShapeKind::Circle => (Shape::Circle { radius: 2.0 }, 12.566),
        ShapeKind::Square => (Shape::Square { side: 12.5 }, 156.25),
        ShapeKind::Rectangle => (
            Shape::Rectangle {
                length: 4.6,
                width: 7.2,
            },
            33.12,
        ),
        ShapeKind::Ellipse => (
            Shape::Ellipse {
                axis_1: 8.2,
                axis_2: 4.3,
            },
            110.77,
        ),
        ShapeKind::Cylinder => (
            Shape::Cylinder {
                radius: 3.1,
                height: 8.8,
            },
            231.787,
        ),
    }
}

/// The same kind with every field zeroed.
pub fn degenerate(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::Circle => Shape::Circle { radius: 0.0 },
        ShapeKind::Square => Shape::Square { side: 0.0 },
        ShapeKind::Rectangle => Shape::Rectangle {
            length: 0.0,
            width: 0.0,
        },
        ShapeKind::Ellipse => Shape::Ellipse {
            axis_1: 0.0,
            axis_2: 0.0,
        },
        ShapeKind::Cylinder => Shape::Cylinder {
            radius: 0.0,
            height: 0.0,
        },
    }
}

pub fn arb_shape(field: impl Strategy<Value = f64> + Clone) -> impl Strategy<Value = Shape> {
    prop_oneof![
        field.clone().prop_map(|radius| Shape::Circle { radius }),
        field.clone().prop_map(|side| Shape::Square { side }),
        (field.clone(), field.clone())
            .prop_map(|(length, width)| Shape::Rectangle { length, width }),
        (field.clone(), field.clone())
            .prop_map(|(axis_1, axis_2)| Shape::Ellipse { axis_1, axis_2 }),
        (field.clone(), field).prop_map(|(radius, height)| Shape::Cylinder { radius, height }),
    ]
}

#[test]
fn every_kind_matches_its_formula() {
    for kind in ShapeKind::ALL {
        let (shape, expected) = sample(kind);
        assert_eq!(shape.kind(), kind);
        let got = area(shape);
        assert!(
            (got - expected).abs() < 1e-2,
            "{}: got {}, expected {}",
            kind.name(),
            got,
            expected
        );
    }
}

#[test]
fn zeroed_shapes_have_zero_area() {
    for kind in ShapeKind::ALL {
        assert_eq!(area(degenerate(kind)), 0.0, "{}", kind.name());
    }
}

#[test]
fn negative_fields_are_accepted() {
    assert_eq!(area(Shape::Square { side: -3.0 }), 9.0);
    assert_eq!(
        area(Shape::Rectangle {
            length: -2.0,
            width: 4.0
        }),
        -8.0
    );
}

#[cfg(test)]
proptest! {
    #[test]
    fn non_negative_fields_give_non_negative_area(shape in arb_shape(0.0..1e3f64)) {
        prop_assert!(shape.area() >= 0.0);
    }

    #[test]
    fn square_is_a_rectangle(side in -1e3..1e3f64) {
        let square = area(Shape::Square { side });
        let rectangle = area(Shape::Rectangle { length: side, width: side });
        prop_assert!((square - rectangle).abs() <= 1e-9 * square.max(1.0));
    }

    #[test]
    fn circle_is_an_ellipse(radius in -1e3..1e3f64) {
        let circle = area(Shape::Circle { radius });
        let ellipse = area(Shape::Ellipse { axis_1: radius, axis_2: radius });
        prop_assert!((circle - ellipse).abs() <= 1e-9 * circle.abs().max(1.0));
    }

    #[test]
    fn cylinder_is_two_caps_plus_side(radius in 0.0..1e3f64, height in 0.0..1e3f64) {
        let caps = 2.0 * area(Shape::Circle { radius });
        let side = 2.0 * PI * radius * height;
        let total = area(Shape::Cylinder { radius, height });
        prop_assert!((total - (caps + side)).abs() <= 1e-9 * total.max(1.0));
    }
}

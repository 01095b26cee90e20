use std::collections::HashSet;

use gesture_parser_core::geometry::{Point, cross_product, dot_product, length};

#[test]
fn add_and_subtract_componentwise() {
    let a = Point::new(3.0, 4.0);
    let b = Point::new(1.0, 2.0);

    assert_eq!(a + b, Point::new(4.0, 6.0));
    assert_eq!(a - b, Point::new(2.0, 2.0));
}

#[test]
fn equality_is_bitwise() {
    assert_ne!(Point::new(0.0, 1.0), Point::new(-0.0, 1.0));
    assert_ne!(Point::new(1.0, 0.0), Point::new(1.0, -0.0));
    assert_eq!(Point::new(f64::NAN, 1.0), Point::new(f64::NAN, 1.0));

    let set: HashSet<Point> = [Point::new(0.0, 0.0), Point::new(-0.0, 0.0), Point::new(0.0, 0.0)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn products_and_length() {
    let a = Point::new(3.0, 4.0);
    let b = Point::new(-4.0, 3.0);

    assert_eq!(length(a), 5.0);
    assert_eq!(dot_product(a, b), 0.0);
    assert_eq!(cross_product(a, b), 25.0);
    assert_eq!(cross_product(b, a), -25.0);
}

use std::fmt::Debug;

/// A closed 2D shape. Object safe, so heterogeneous figures can be handled
/// through `&dyn Figure` or `Box<dyn Figure>`.
pub trait Figure: Debug {
    /// Human readable summary of the figure
    fn describe(&self) -> String;

    fn perimeter(&self) -> f64;

    fn surface(&self) -> f64;
}

/// Description line followed by `Perimeter=<p>, Area=<s>`, numbers printed
/// with `precision` decimals.
pub fn report(figure: &dyn Figure, precision: usize) -> String {
    format!(
        "{}\nPerimeter={:.p$}, Area={:.p$}",
        figure.describe(),
        figure.perimeter(),
        figure.surface(),
        p = precision
    )
}

pub fn total_surface(figures: &[Box<dyn Figure>]) -> f64 {
    figures.iter().map(|f| f.surface()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Point, Rectangle};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_dispatch_reaches_concrete_impl() {
        let rect = Rectangle::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        let circle = Circle::new(Point::new(5.0, 6.0), 7.0);

        let mut figure: &dyn Figure = &rect;
        assert_eq!(figure.describe(), "Rectangle with corners (1, 2) and (3, 4)");
        assert_eq!(figure.surface(), 4.0);

        figure = &circle;
        assert_eq!(figure.describe(), "Circle of radius 7 and center (5, 6)");
        assert_relative_eq!(figure.surface(), 49.0 * PI);
    }

    #[test]
    fn test_report_format() {
        let rect = Rectangle::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(
            report(&rect, 0),
            "Rectangle with corners (0, 0) and (3, 4)\nPerimeter=14, Area=12"
        );

        let circle = Circle::new(Point::default(), 1.0);
        assert_eq!(
            report(&circle, 2),
            "Circle of radius 1 and center (0, 0)\nPerimeter=6.28, Area=3.14"
        );
    }

    #[test]
    fn test_total_surface() {
        let figures: Vec<Box<dyn Figure>> = vec![
            Box::new(Rectangle::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0))),
            Box::new(Circle::new(Point::default(), 1.0)),
        ];
        assert_relative_eq!(total_surface(&figures), 12.0 + PI);
        assert_eq!(total_surface(&[]), 0.0);
    }
}

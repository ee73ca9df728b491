//! Outline geometry for the fixture shapes.
//!
//! Coordinates are in pixels with the origin at the top-left corner of the
//! canvas. Bounding boxes are inclusive on every side, so `[40, 40, 360, 360]`
//! spans 321 pixels.

use crate::models::ShapeKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Inclusive pixel bounding box. `center` rounds down when the span between
/// the edges is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left + 1).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top + 1).max(0) as u32
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    /// Shrink every side by `by` pixels. Returns `None` once the box would
    /// have no interior left, including when `by` does not fit the pixel grid.
    pub fn inset(&self, by: u32) -> Option<Bounds> {
        let by = i32::try_from(by).ok()?;
        let inner = Bounds::new(
            self.left.checked_add(by)?,
            self.top.checked_add(by)?,
            self.right.checked_sub(by)?,
            self.bottom.checked_sub(by)?,
        );
        if inner.left >= inner.right || inner.top >= inner.bottom {
            return None;
        }
        Some(inner)
    }
}

/// Geometric description of a shape boundary
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Ellipse(Bounds),
    Rectangle(Bounds),
    Polygon(Vec<Point>),
}

impl Outline {
    /// Compute the outline of `shape` on a square canvas of `canvas_size`
    /// pixels, inset by `margin` from the canvas edges.
    pub fn for_shape(shape: ShapeKind, canvas_size: u32, margin: u32) -> Outline {
        let size = canvas_size as i32;
        let m = margin as i32;
        let bounds = Bounds::new(m, m, size - m, size - m);
        let center = f64::from(size / 2);
        let near = f64::from(m);
        let far = f64::from(size - m);

        match shape {
            ShapeKind::Circle => Outline::Ellipse(bounds),
            ShapeKind::Square => Outline::Rectangle(bounds),
            ShapeKind::Triangle => Outline::Polygon(vec![
                Point::new(center, near),
                Point::new(near, far),
                Point::new(far, far),
            ]),
            ShapeKind::Diamond => Outline::Polygon(vec![
                Point::new(center, near),
                Point::new(far, center),
                Point::new(center, far),
                Point::new(near, center),
            ]),
        }
    }

    /// The same outline pulled inward by `distance` pixels, or `None` when
    /// the shape is too small to leave any interior.
    pub fn inset(&self, distance: u32) -> Option<Outline> {
        match self {
            Outline::Ellipse(bounds) => bounds.inset(distance).map(Outline::Ellipse),
            Outline::Rectangle(bounds) => bounds.inset(distance).map(Outline::Rectangle),
            Outline::Polygon(vertices) => inset_polygon(vertices, f64::from(distance)).map(Outline::Polygon),
        }
    }
}

/// Shoelace area; the sign gives the winding direction.
pub fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    let mut twice_area = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        twice_area += a.x * b.y - b.x * a.y;
    }
    twice_area / 2.0
}

/// Offset every edge of a convex polygon inward by `distance` and intersect
/// neighbouring edges to find the new vertices.
///
/// Returns `None` for degenerate input and when the offset flips or collapses
/// the polygon.
pub fn inset_polygon(vertices: &[Point], distance: f64) -> Option<Vec<Point>> {
    let mut points: Vec<Point> = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        if points.last() != Some(vertex) {
            points.push(*vertex);
        }
    }
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return None;
    }

    let area = signed_area(&points);
    if area.abs() < f64::EPSILON {
        return None;
    }
    let winding = area.signum();
    let n = points.len();

    // Each offset edge as (point on line, unit direction)
    let edges: Vec<(Point, Point)> = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            let length = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
            let direction = Point::new((b.x - a.x) / length, (b.y - a.y) / length);
            let normal = Point::new(-direction.y * winding, direction.x * winding);
            (
                Point::new(a.x + normal.x * distance, a.y + normal.y * distance),
                direction,
            )
        })
        .collect();

    let inset: Vec<Point> = (0..n)
        .map(|i| {
            let previous = edges[(i + n - 1) % n];
            let current = edges[i];
            line_intersection(previous, current).unwrap_or(current.0)
        })
        .collect();

    // An oversized offset turns the polygon inside out, which shows up as
    // edges running against their original direction.
    let keeps_orientation = (0..n).all(|i| {
        let a = inset[i];
        let b = inset[(i + 1) % n];
        let direction = edges[i].1;
        (b.x - a.x) * direction.x + (b.y - a.y) * direction.y > 1e-9
    });
    if !keeps_orientation || signed_area(&inset).abs() < 1.0 {
        return None;
    }
    Some(inset)
}

fn line_intersection(first: (Point, Point), second: (Point, Point)) -> Option<Point> {
    let (p, r) = first;
    let (q, s) = second;
    let denominator = r.x * s.y - r.y * s.x;
    if denominator.abs() < 1e-12 {
        return None;
    }
    let t = ((q.x - p.x) * s.y - (q.y - p.y) * s.x) / denominator;
    Some(Point::new(p.x + r.x * t, p.y + r.y * t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < 1e-6 && (actual.y - expected.y).abs() < 1e-6,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_inset_square_polygon() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let inset = inset_polygon(&square, 2.0).unwrap();
        assert_close(inset[0], Point::new(2.0, 2.0));
        assert_close(inset[1], Point::new(8.0, 2.0));
        assert_close(inset[2], Point::new(8.0, 8.0));
        assert_close(inset[3], Point::new(2.0, 8.0));
    }

    #[test]
    fn test_inset_is_independent_of_winding() {
        let clockwise = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        ];
        let inset = inset_polygon(&clockwise, 1.0).unwrap();
        assert_close(inset[0], Point::new(1.0, 1.0));
        assert_close(inset[2], Point::new(9.0, 9.0));
    }

    #[test]
    fn test_oversized_inset_collapses() {
        let triangle = vec![Point::new(5.0, 0.0), Point::new(0.0, 10.0), Point::new(10.0, 10.0)];
        assert!(inset_polygon(&triangle, 1.0).is_some());
        assert!(inset_polygon(&triangle, 20.0).is_none());
    }

    #[test]
    fn test_triangle_fixture_inset_keeps_base_parallel() {
        let outline = Outline::for_shape(ShapeKind::Triangle, 400, 50);
        let Some(Outline::Polygon(inner)) = outline.inset(8) else {
            panic!("expected an inset triangle");
        };
        assert_eq!(inner.len(), 3);
        assert!((inner[1].y - 342.0).abs() < 1e-6);
        assert!((inner[2].y - 342.0).abs() < 1e-6);
        assert!(inner[0].y > 50.0);
        assert!((inner[0].x - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_outline_coordinates_for_reference_canvas() {
        assert_eq!(
            Outline::for_shape(ShapeKind::Circle, 400, 40),
            Outline::Ellipse(Bounds::new(40, 40, 360, 360))
        );
        assert_eq!(
            Outline::for_shape(ShapeKind::Square, 400, 60),
            Outline::Rectangle(Bounds::new(60, 60, 340, 340))
        );
        assert_eq!(
            Outline::for_shape(ShapeKind::Diamond, 400, 50),
            Outline::Polygon(vec![
                Point::new(200.0, 50.0),
                Point::new(350.0, 200.0),
                Point::new(200.0, 350.0),
                Point::new(50.0, 200.0),
            ])
        );
    }

    #[test]
    fn test_degenerate_polygons_have_no_inset() {
        let line = vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 10.0)];
        assert!(inset_polygon(&line, 1.0).is_none());
        let two_points = vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(0.0, 0.0)];
        assert!(inset_polygon(&two_points, 1.0).is_none());
    }

    #[test]
    fn test_bounds_inset_and_size() {
        let bounds = Bounds::new(40, 40, 360, 360);
        assert_eq!(bounds.width(), 321);
        assert_eq!(bounds.center(), (200, 200));
        assert_eq!(bounds.inset(8), Some(Bounds::new(48, 48, 352, 352)));
        assert_eq!(bounds.inset(160), None);
    }

    #[test]
    fn test_inset_beyond_pixel_range_collapses() {
        let bounds = Bounds::new(40, 40, 360, 360);
        assert_eq!(bounds.inset(1 << 31), None);
        assert_eq!(bounds.inset(u32::MAX), None);
        assert_eq!(bounds.inset(i32::MAX as u32), None);
        assert_eq!(Bounds::new(i32::MAX - 1, 0, i32::MAX, 10).inset(2), None);

        for shape in ShapeKind::ALL {
            let outline = Outline::for_shape(shape, 400, shape.margin_for(400));
            assert_eq!(outline.inset(u32::MAX), None, "{}", shape);
            assert_eq!(outline.inset(1 << 31), None, "{}", shape);
        }
    }
}

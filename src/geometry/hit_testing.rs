use super::{Geometry, Point};
use crate::shape::Shape;

/// Distance in pixels within which the eraser touches a line
pub const ERASE_TOLERANCE: f32 = 5.0;

/// Whether `point` touches `shape` for the purpose of erasing
pub fn hits<H>(shape: &Shape<H>, point: Point) -> bool {
    geometry_hits(shape.geometry(), point)
}

pub fn geometry_hits(geometry: &Geometry, point: Point) -> bool {
    match *geometry {
        Geometry::Line { start, end } => line_hits(start, end, point),
        Geometry::Rectangle { start, end } => rect_hits(start, end, point),
    }
}

/// Band test around the infinite line through `start` and `end`.
///
/// Not bounded to the drawn segment. The distance is measured vertically, except
/// for vertical lines where the slope is undefined and the band is horizontal.
fn line_hits(start: Point, end: Point, point: Point) -> bool {
    let run = end.x - start.x;
    if run == 0.0 {
        return (point.x - start.x).abs() <= ERASE_TOLERANCE;
    }

    let slope = (end.y - start.y) / run;
    let predicted_y = (point.x - start.x) * slope + start.y;
    (predicted_y - point.y).abs() <= ERASE_TOLERANCE
}

/// Closed box containment; the corners can come in any order
fn rect_hits(start: Point, end: Point, point: Point) -> bool {
    let (min_x, max_x) = (start.x.min(end.x), start.x.max(end.x));
    let (min_y, max_y) = (start.y.min(end.y), start.y.max(end.y));

    (min_x..=max_x).contains(&point.x) && (min_y..=max_y).contains(&point.y)
}

/// Removes every shape touched by `point`, keeping the order of the rest.
pub fn erase_at<H>(shapes: Vec<Shape<H>>, point: Point) -> Vec<Shape<H>> {
    let before = shapes.len();
    let kept: Vec<_> = shapes
        .into_iter()
        .filter(|shape| !hits(shape, point))
        .collect();

    if kept.len() != before {
        log::debug!("Erased {} shape(s) at {:?}", before - kept.len(), point);
    }
    kept
}

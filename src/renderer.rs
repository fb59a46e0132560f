// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SketchConfig;
use crate::geometry::{Geometry, Point};
use crate::shape::ShapeKind;

/// Upper bound for how far an endpoint may be displaced, before roughness scaling
const MAX_RANDOMNESS_OFFSET: f32 = 2.0;
/// Points sampled along each bowed edge
const EDGE_SEGMENTS: usize = 12;
/// Every edge is stroked this many times with different jitter
const PASSES: u32 = 2;
/// Odd multiplier spreading each mixed word over the whole seed
const SEED_MULTIPLIER: u64 = 0x9e37_79b9_7f4a_7c15;

/// Turns shape descriptions into drawables and paints them.
///
/// The engine treats `Handle` as opaque: it asks for a new one whenever a shape
/// changes and hands it back to [`RenderBackend::paint`] untouched.
pub trait RenderBackend {
    type Handle;
    type Surface;

    /// Produce a drawable for `geometry` stroked in `color`. Must not have side effects.
    fn generate(&self, geometry: &Geometry, color: Color32) -> Self::Handle;

    /// Wipe the surface before a frame is painted
    fn clear(&self, surface: &mut Self::Surface);

    /// Draw one handle on top of whatever is already on the surface
    fn paint(&self, surface: &mut Self::Surface, handle: &Self::Handle);
}

/// Jittered polylines making up one shape
#[derive(Debug, Clone, PartialEq)]
pub struct SketchDrawable {
    stroke: Stroke,
    paths: Vec<Vec<Pos2>>,
}

impl SketchDrawable {
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    /// Polylines in surface-local coordinates
    pub fn paths(&self) -> &[Vec<Pos2>] {
        &self.paths
    }
}

/// The canvas area of an egui painter
#[derive(Clone)]
pub struct SketchSurface {
    painter: Painter,
    rect: Rect,
}

impl SketchSurface {
    /// `rect` is the canvas in screen space; its top-left corner is the surface origin
    pub fn new(painter: Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        point + self.rect.min.to_vec2()
    }
}

/// Hand-drawn style backend: each edge is drawn twice as a slightly bowed curve
/// with wobbling endpoints.
#[derive(Debug, Clone, Default)]
pub struct SketchRenderer {
    config: SketchConfig,
}

impl SketchRenderer {
    pub fn new(config: SketchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Seed derived from the geometry so regenerating an unchanged shape is stable.
    ///
    /// Only fixed arithmetic is involved, so the value does not depend on the toolchain.
    fn seed_for(&self, geometry: &Geometry, pass: u32) -> u64 {
        let kind = match geometry.kind() {
            ShapeKind::Line => 0,
            ShapeKind::Rectangle => 1,
        };
        let (start, end) = (geometry.start(), geometry.end());
        let words = [
            kind,
            u64::from(start.x.to_bits()) << 32 | u64::from(start.y.to_bits()),
            u64::from(end.x.to_bits()) << 32 | u64::from(end.y.to_bits()),
            u64::from(pass),
        ];

        words.iter().fold(self.config.seed, |seed, &word| {
            (seed ^ word).wrapping_mul(SEED_MULTIPLIER).rotate_left(31)
        })
    }

    fn sketch_edge(&self, rng: &mut StdRng, from: Point, to: Point) -> Vec<Pos2> {
        let roughness = self.config.roughness;
        if roughness <= 0.0 {
            return vec![from, to];
        }

        let delta = to - from;
        let len = delta.length();

        // Short edges get less wobble so they don't turn into scribbles
        let max_offset = (MAX_RANDOMNESS_OFFSET * roughness).min(len / 10.0);
        let wobble = |rng: &mut StdRng| {
            Vec2::new(
                rng.gen_range(-1.0_f32..=1.0) * max_offset,
                rng.gen_range(-1.0_f32..=1.0) * max_offset,
            )
        };

        let bow = rng.gen_range(-1.0_f32..=1.0) * self.config.bowing * roughness * len / 200.0;
        let perpendicular = if len > f32::EPSILON {
            delta.rot90() / len
        } else {
            Vec2::ZERO
        };

        let a = from + wobble(rng);
        let b = to + wobble(rng);
        let control = from + delta * 0.5 + perpendicular * bow;

        (0..=EDGE_SEGMENTS)
            .map(|i| {
                let t = i as f32 / EDGE_SEGMENTS as f32;
                let u = 1.0 - t;
                Pos2::new(
                    u * u * a.x + 2.0 * u * t * control.x + t * t * b.x,
                    u * u * a.y + 2.0 * u * t * control.y + t * t * b.y,
                )
            })
            .collect()
    }
}

fn edges(geometry: &Geometry) -> Vec<(Point, Point)> {
    match *geometry {
        Geometry::Line { start, end } => vec![(start, end)],
        Geometry::Rectangle { start, end } => {
            let top_right = Pos2::new(end.x, start.y);
            let bottom_left = Pos2::new(start.x, end.y);
            vec![
                (start, top_right),
                (top_right, end),
                (end, bottom_left),
                (bottom_left, start),
            ]
        }
    }
}

impl RenderBackend for SketchRenderer {
    type Handle = SketchDrawable;
    type Surface = SketchSurface;

    fn generate(&self, geometry: &Geometry, color: Color32) -> SketchDrawable {
        let edges = edges(geometry);
        let mut paths = Vec::with_capacity(edges.len() * PASSES as usize);

        for pass in 0..PASSES {
            let mut rng = StdRng::seed_from_u64(self.seed_for(geometry, pass));
            for &(from, to) in &edges {
                paths.push(self.sketch_edge(&mut rng, from, to));
            }
        }

        SketchDrawable {
            stroke: Stroke::new(self.config.stroke_width, color),
            paths,
        }
    }

    fn clear(&self, surface: &mut SketchSurface) {
        surface
            .painter
            .rect_filled(surface.rect, 0.0, self.config.background_color());
    }

    fn paint(&self, surface: &mut SketchSurface, handle: &SketchDrawable) {
        for path in &handle.paths {
            let points = path.iter().map(|&p| surface.to_screen(p)).collect();
            surface.painter.add(egui::Shape::line(points, handle.stroke));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn line(start: Pos2, end: Pos2) -> Geometry {
        Geometry::Line { start, end }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let renderer = SketchRenderer::default();
        let geometry = line(pos2(0.0, 0.0), pos2(120.0, 40.0));

        let a = renderer.generate(&geometry, Color32::RED);
        let b = renderer.generate(&geometry, Color32::RED);
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_tracks_geometry_and_pass() {
        let renderer = SketchRenderer::default();
        let a = line(pos2(0.0, 0.0), pos2(10.0, 10.0));
        let b = line(pos2(0.0, 0.0), pos2(10.0, 11.0));
        let rect = Geometry::Rectangle {
            start: pos2(0.0, 0.0),
            end: pos2(10.0, 10.0),
        };

        assert_eq!(renderer.seed_for(&a, 0), renderer.seed_for(&a, 0));
        assert_ne!(renderer.seed_for(&a, 0), renderer.seed_for(&a, 1));
        assert_ne!(renderer.seed_for(&a, 0), renderer.seed_for(&b, 0));
        assert_ne!(renderer.seed_for(&a, 0), renderer.seed_for(&rect, 0));

        let reseeded = SketchRenderer::new(SketchConfig {
            seed: 7,
            ..Default::default()
        });
        assert_ne!(renderer.seed_for(&a, 0), reseeded.seed_for(&a, 0));
    }

    #[test]
    fn test_pass_and_edge_counts() {
        let renderer = SketchRenderer::default();

        let single = renderer.generate(&line(pos2(0.0, 0.0), pos2(50.0, 0.0)), Color32::BLACK);
        assert_eq!(single.paths().len(), 2);

        let rect = renderer.generate(
            &Geometry::Rectangle {
                start: pos2(10.0, 10.0),
                end: pos2(60.0, 40.0),
            },
            Color32::BLACK,
        );
        assert_eq!(rect.paths().len(), 8);
        assert!(rect.paths().iter().all(|p| p.len() == EDGE_SEGMENTS + 1));
    }

    #[test]
    fn test_stroke_uses_color_and_width() {
        let config = SketchConfig {
            stroke_width: 3.0,
            ..Default::default()
        };
        let renderer = SketchRenderer::new(config);
        let drawable = renderer.generate(&line(pos2(0.0, 0.0), pos2(10.0, 10.0)), Color32::BLUE);

        assert_eq!(drawable.stroke(), Stroke::new(3.0, Color32::BLUE));
    }

    #[test]
    fn test_jitter_stays_near_the_edge() {
        let renderer = SketchRenderer::default();
        let geometry = line(pos2(0.0, 100.0), pos2(300.0, 100.0));
        let drawable = renderer.generate(&geometry, Color32::BLACK);

        // endpoint offset (<= 2 px per axis) plus bowing (<= 300/200 px)
        for path in drawable.paths() {
            for p in path {
                assert!((p.y - 100.0).abs() <= 4.0, "{p:?} strayed from the edge");
            }
        }
    }

    #[test]
    fn test_zero_roughness_draws_straight_edges() {
        let renderer = SketchRenderer::new(SketchConfig {
            roughness: 0.0,
            ..Default::default()
        });
        let drawable = renderer.generate(&line(pos2(1.0, 2.0), pos2(3.0, 4.0)), Color32::BLACK);

        assert_eq!(drawable.paths()[0], vec![pos2(1.0, 2.0), pos2(3.0, 4.0)]);
    }

    #[test]
    fn test_surface_origin_is_canvas_corner() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(400.0, 300.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        let surface = SketchSurface::new(painter, rect);

        assert_eq!(surface.to_screen(pos2(10.0, 20.0)), pos2(110.0, 70.0));
        assert_eq!(surface.to_screen(pos2(0.0, 0.0)), rect.min);
    }

    #[test]
    fn test_paint_clears_then_draws_in_screen_space() {
        let renderer = SketchRenderer::new(SketchConfig {
            roughness: 0.0,
            ..Default::default()
        });
        let drawable = renderer.generate(&line(pos2(10.0, 20.0), pos2(60.0, 80.0)), Color32::RED);
        let rect = Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(400.0, 300.0));

        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);
            let mut surface = SketchSurface::new(painter, rect);
            renderer.clear(&mut surface);
            renderer.paint(&mut surface, &drawable);
        });

        let shapes: Vec<_> = output.shapes.into_iter().map(|clipped| clipped.shape).collect();
        assert!(matches!(shapes[0], egui::Shape::Rect(_)));

        let paths: Vec<_> = shapes
            .iter()
            .filter_map(|shape| match shape {
                egui::Shape::Path(path) => Some(path),
                _ => None,
            })
            .collect();
        assert_eq!(paths.len(), 2);
        for path in paths {
            assert_eq!(path.points, vec![pos2(110.0, 70.0), pos2(160.0, 130.0)]);
        }
    }
}

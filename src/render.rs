use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut, draw_polygon_mut},
    point::Point as PixelPoint,
    rect::Rect,
};

use crate::errors::FixtureError;
use crate::geometry::{Outline, Point};
use crate::models::{ShapeKind, Theme};

pub const DEFAULT_CANVAS_SIZE: u32 = 400;
pub const DEFAULT_STROKE_WIDTH: u32 = 8;

/// Canvas size and stroke width shared by every fixture of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    canvas_size: u32,
    stroke_width: u32,
}

impl RenderSettings {
    pub fn new(canvas_size: u32, stroke_width: u32) -> Result<Self, FixtureError> {
        if canvas_size == 0 || stroke_width == 0 {
            return Err(FixtureError::InvalidDimensions { canvas_size, stroke_width });
        }
        Ok(Self { canvas_size, stroke_width })
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Renders a single outline shape onto a fresh square canvas.
///
/// The stroke runs along the inside of the computed outline: the shape is
/// filled with the foreground color, then the outline inset by the stroke
/// width is filled back with the background color. Nothing is antialiased,
/// so every pixel of the result is one of the two theme colors. When the
/// stroke is wider than the shape can hold the result is a solid shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeFixtureGenerator {
    settings: RenderSettings,
}

impl ShapeFixtureGenerator {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    pub fn outline(&self, shape: ShapeKind) -> Outline {
        let size = self.settings.canvas_size;
        Outline::for_shape(shape, size, shape.margin_for(size))
    }

    pub fn render(&self, shape: ShapeKind, theme: Theme) -> RgbImage {
        let size = self.settings.canvas_size;
        let mut canvas = RgbImage::from_pixel(size, size, theme.background);

        let outline = self.outline(shape);
        fill_outline(&mut canvas, &outline, theme.foreground);
        if let Some(interior) = outline.inset(self.settings.stroke_width) {
            fill_outline(&mut canvas, &interior, theme.background);
        }

        canvas
    }

    /// Render a shape given by name, rejecting unknown names before any
    /// drawing happens.
    pub fn render_named(&self, shape_name: &str, theme: Theme) -> Result<RgbImage, FixtureError> {
        let shape: ShapeKind = shape_name.parse()?;
        Ok(self.render(shape, theme))
    }
}

fn fill_outline(canvas: &mut RgbImage, outline: &Outline, color: Rgb<u8>) {
    match outline {
        Outline::Ellipse(bounds) => {
            let (center_x, center_y) = bounds.center();
            let span_x = bounds.right - bounds.left;
            let span_y = bounds.bottom - bounds.top;
            // An odd span has no middle pixel, so the ellipse is drawn at both
            // neighbouring centers to reach the last column and row.
            for dx in 0..=span_x % 2 {
                for dy in 0..=span_y % 2 {
                    draw_filled_ellipse_mut(
                        canvas,
                        (center_x + dx, center_y + dy),
                        span_x / 2,
                        span_y / 2,
                        color,
                    );
                }
            }
        }
        Outline::Rectangle(bounds) => {
            let rect = Rect::at(bounds.left, bounds.top).of_size(bounds.width(), bounds.height());
            draw_filled_rect_mut(canvas, rect, color);
        }
        Outline::Polygon(vertices) => {
            if let Some(points) = to_pixel_polygon(vertices) {
                draw_polygon_mut(canvas, &points, color);
            }
        }
    }
}

/// Round to pixel coordinates, dropping vertices that land on the same pixel.
/// `draw_polygon_mut` rejects polygons whose first and last points coincide.
fn to_pixel_polygon(vertices: &[Point]) -> Option<Vec<PixelPoint<i32>>> {
    let mut points: Vec<PixelPoint<i32>> = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        let point = PixelPoint::new(vertex.x.round() as i32, vertex.y.round() as i32);
        if points.last() != Some(&point) {
            points.push(point);
        }
    }
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return None;
    }
    Some(points)
}

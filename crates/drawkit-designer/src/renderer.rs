//! Shape renderer
//!
//! Shapes are turned into a flat sequence of [`DrawCommand`]s in render
//! order. A [`RenderBackend`] consumes the sequence; [`PixmapBackend`] draws
//! it with tiny-skia, and `Vec<DrawCommand>` simply records it.

use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::look::{Look, Rgba};
use crate::model::{DesignerShape, Point, Shape};
use crate::shape_list::ShapeList;
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Style for the following paths
    SetLook(Look),
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
    /// Full axis lengths; `rotation` in degrees
    Ellipse {
        center: Point,
        major: f64,
        minor: f64,
        rotation: f64,
    },
    /// Stroke and/or fill everything since the last `StrokeFill`
    StrokeFill,
}

pub trait RenderBackend {
    fn execute(&mut self, command: &DrawCommand);
}

impl RenderBackend for Vec<DrawCommand> {
    fn execute(&mut self, command: &DrawCommand) {
        self.push(command.clone());
    }
}

/// Commands that draw one shape, without the look
pub fn shape_commands(shape: &Shape) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    match shape {
        Shape::Ellipse(ellipse) => {
            commands.push(DrawCommand::Ellipse {
                center: ellipse.center,
                major: ellipse.major * ellipse.scale,
                minor: ellipse.minor * ellipse.scale,
                rotation: ellipse.rotation,
            });
        }
        Shape::Cross(cross) => {
            for (start, end) in cross.strokes() {
                commands.push(DrawCommand::MoveTo(start));
                commands.push(DrawCommand::LineTo(end));
            }
        }
        Shape::Edge(edge) => {
            commands.push(DrawCommand::MoveTo(edge.start));
            commands.push(DrawCommand::LineTo(edge.end));
        }
        Shape::Segments(segments) => polyline(&mut commands, &segments.points, false),
        Shape::Polygon(_) | Shape::Quad(_) | Shape::RegularPolygon(_) => {
            polyline(&mut commands, &shape.points(), true)
        }
    }

    if !commands.is_empty() {
        commands.push(DrawCommand::StrokeFill);
    }
    commands
}

fn polyline(commands: &mut Vec<DrawCommand>, points: &[Point], closed: bool) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    if rest.is_empty() {
        return;
    }

    commands.push(DrawCommand::MoveTo(*first));
    commands.extend(rest.iter().map(|p| DrawCommand::LineTo(*p)));
    if closed {
        commands.push(DrawCommand::ClosePath);
    }
}

/// Sends every shape to `backend`, bottom first.
pub fn render_shapes<B: RenderBackend + ?Sized>(shapes: &ShapeList, backend: &mut B) {
    for (_, entry) in shapes.iter() {
        let commands = shape_commands(&entry.shape);
        if commands.is_empty() {
            continue;
        }
        backend.execute(&DrawCommand::SetLook(entry.look));
        for command in &commands {
            backend.execute(command);
        }
    }
}

/// Draws commands onto a tiny-skia pixmap through a viewport transform
pub struct PixmapBackend {
    pixmap: Pixmap,
    transform: Transform,
    look: Look,
    builder: PathBuilder,
    paths: Vec<Path>,
}

impl PixmapBackend {
    /// Returns `None` for a zero-sized canvas
    pub fn new(width: u32, height: u32, viewport: &Viewport, background: Rgba) -> Option<Self> {
        let mut pixmap = Pixmap::new(width, height)?;
        pixmap.fill(background.to_skia());

        Some(Self {
            pixmap,
            transform: viewport.transform(),
            look: Look::default(),
            builder: PathBuilder::new(),
            paths: Vec::new(),
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn flush(&mut self) {
        let builder = std::mem::replace(&mut self.builder, PathBuilder::new());
        if let Some(path) = builder.finish() {
            self.paths.push(path);
        }

        let mut paint = Paint::default();
        paint.anti_alias = self.look.antialias;

        for path in self.paths.drain(..) {
            if self.look.fill_enable {
                paint.set_color(self.look.fill_color.to_skia());
                self.pixmap
                    .fill_path(&path, &paint, FillRule::EvenOdd, self.transform, None);
            }
            if self.look.stroke_enable && self.look.stroke_weight > 0.0 {
                paint.set_color(self.look.stroke_color.to_skia());
                let stroke = Stroke {
                    width: self.look.stroke_weight as f32,
                    ..Default::default()
                };
                self.pixmap
                    .stroke_path(&path, &paint, &stroke, self.transform, None);
            }
        }
    }
}

impl RenderBackend for PixmapBackend {
    fn execute(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::SetLook(look) => self.look = *look,
            DrawCommand::MoveTo(p) => self.builder.move_to(p.x as f32, p.y as f32),
            DrawCommand::LineTo(p) => self.builder.line_to(p.x as f32, p.y as f32),
            DrawCommand::ClosePath => self.builder.close(),
            DrawCommand::Ellipse {
                center,
                major,
                minor,
                rotation,
            } => {
                let oval = Rect::from_xywh(
                    (-major / 2.0) as f32,
                    (-minor / 2.0) as f32,
                    *major as f32,
                    *minor as f32,
                )
                .and_then(PathBuilder::from_oval)
                .and_then(|path| {
                    path.transform(
                        Transform::from_rotate(*rotation as f32)
                            .post_translate(center.x as f32, center.y as f32),
                    )
                });
                match oval {
                    Some(path) => self.paths.push(path),
                    None => tracing::trace!("Skipping degenerate ellipse at {}", center),
                }
            }
            DrawCommand::StrokeFill => self.flush(),
        }
    }
}

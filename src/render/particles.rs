//! Particle field display widget
//!
//! Paints one dot per particle at its interpolated position, plus faint
//! links between neighbouring particles that sit close together in the
//! source layout.
//!
//! ## Coordinate System
//!
//! Layout points are normalized to [0, 1] with Y growing downward, the same
//! as screen space, so no flip is needed. The unit square is scaled to a
//! fixed fraction of the widget width and centered in the widget.

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};

use crate::morph::{MorphDriver, MorphState};
use crate::shapes::{LayoutKind, Point, PointSet};

/// Display settings for the particle field
#[derive(Clone, Debug)]
pub struct FieldSettings {
    /// Particle color
    pub color: Color32,

    /// Link color (usually a faint version of `color`)
    pub link_color: Color32,

    /// Background color
    pub background: Color32,

    /// Particle radius in pixels
    pub particle_radius: f32,

    /// Link line thickness in pixels
    pub link_width: f32,

    /// Largest source-layout distance (normalized) that still gets a link
    pub link_threshold: f32,

    /// Fraction of the widget width the unit square is scaled to
    pub scale_fraction: f32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(120, 200, 255),
            link_color: Color32::from_rgba_unmultiplied(120, 200, 255, 50),
            background: Color32::from_rgb(12, 16, 28),
            particle_radius: 2.5,
            link_width: 1.0,
            link_threshold: 0.2,
            scale_fraction: 0.7,
        }
    }
}

/// Map a normalized point into `rect`
///
/// `screen = offset + point * scale` where `scale` is `fraction` of the
/// rect width and `offset` centers the scaled unit square.
pub fn to_screen(point: Point, rect: Rect, fraction: f32) -> Pos2 {
    let scale = rect.width() * fraction;
    let offset = Vec2::new(
        rect.left() + (rect.width() - scale) / 2.0,
        rect.top() + (rect.height() - scale) / 2.0,
    );
    Pos2::new(offset.x + point.x * scale, offset.y + point.y * scale)
}

/// Indices `i` for which the link from particle `i - 1` to `i` is drawn
///
/// Links follow the source layout: the scatter never gets links, and a
/// pair only links when the two source points are closer than `threshold`.
pub fn mesh_links(start: LayoutKind, points: &PointSet, threshold: f32) -> Vec<usize> {
    if start.is_loading() {
        return Vec::new();
    }

    points
        .as_slice()
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0].distance(pair[1]) < threshold)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Whether a frame needs painting
///
/// True when the morph moved or changed endpoints since the last frame,
/// and always while the morph is at rest at either end, so the idle float
/// keeps animating.
pub fn needs_repaint(previous: Option<&MorphState>, current: &MorphState) -> bool {
    if current.progress == 0.0 || current.progress == 1.0 {
        return true;
    }
    match previous {
        Some(prev) => {
            prev.progress != current.progress
                || prev.start != current.start
                || prev.end != current.end
        }
        None => true,
    }
}

/// Particle field widget
pub struct ParticleField {
    /// Display settings
    pub settings: FieldSettings,

    /// State painted on the previous frame
    last_state: Option<MorphState>,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleField {
    pub fn new() -> Self {
        Self::with_settings(FieldSettings::default())
    }

    pub fn with_settings(settings: FieldSettings) -> Self {
        Self {
            settings,
            last_state: None,
        }
    }

    /// Record `state` as painted and report whether another frame is needed
    pub fn frame_changed(&mut self, state: &MorphState) -> bool {
        let repaint = needs_repaint(self.last_state.as_ref(), state);
        self.last_state = Some(*state);
        repaint
    }

    /// Draw the particle field
    ///
    /// # Arguments
    /// * `ui` - The egui UI context
    /// * `driver` - Source of particle positions for this frame
    /// * `size` - Desired widget size (or None for available space)
    pub fn show(&self, ui: &mut egui::Ui, driver: &MorphDriver, size: Option<Vec2>) -> egui::Response {
        let size = size.unwrap_or_else(|| {
            let available = ui.available_size();
            Vec2::new(available.x, available.y.min(available.x))
        });

        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 4.0, self.settings.background);

        let state = driver.state();
        let positions: Vec<Pos2> = (0..driver.end_points().len())
            .map(|i| to_screen(driver.particle(i), rect, self.settings.scale_fraction))
            .collect();

        self.draw_links(&painter, &state, driver.start_points(), &positions);
        self.draw_particles(&painter, &positions);

        response
    }

    fn draw_links(&self, painter: &egui::Painter, state: &MorphState, source: &PointSet, positions: &[Pos2]) {
        let stroke = Stroke::new(self.settings.link_width, self.settings.link_color);

        for i in mesh_links(state.start, source, self.settings.link_threshold) {
            if let (Some(a), Some(b)) = (positions.get(i - 1), positions.get(i)) {
                painter.line_segment([*a, *b], stroke);
            }
        }
    }

    fn draw_particles(&self, painter: &egui::Painter, positions: &[Pos2]) {
        for pos in positions {
            painter.circle_filled(*pos, self.settings.particle_radius, self.settings.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::MorphTiming;
    use crate::shapes::{generate_outline, ShapeKind};

    fn state(start: LayoutKind, end: LayoutKind, progress: f32) -> MorphState {
        MorphState {
            start,
            end,
            progress,
            float_phase: 0.0,
        }
    }

    /// Paint `driver` into a headless context
    ///
    /// Returns the widget rect plus every dot and link painted.
    fn paint(field: &ParticleField, driver: &MorphDriver) -> (Rect, Vec<Pos2>, Vec<[Pos2; 2]>) {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::splat(600.0))),
            ..Default::default()
        };

        let mut rect = Rect::NOTHING;
        let output = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rect = field.show(ui, driver, Some(Vec2::splat(400.0))).rect;
            });
        });

        let mut dots = Vec::new();
        let mut links = Vec::new();
        for clipped in &output.shapes {
            match &clipped.shape {
                egui::Shape::Circle(circle) => dots.push(circle.center),
                egui::Shape::LineSegment { points, .. } => links.push(*points),
                _ => {}
            }
        }
        (rect, dots, links)
    }

    #[test]
    fn test_paint_settled_shape() {
        let mut driver = MorphDriver::new(MorphTiming::default(), 0.0);
        driver.select_shape(ShapeKind::Circle, 0.0);
        let state = driver.advance_frame(5.0);
        assert_eq!(state.start, state.end);

        let field = ParticleField::new();
        let (rect, dots, links) = paint(&field, &driver);

        assert_eq!(dots.len(), driver.end_points().len());
        let expected = mesh_links(state.start, driver.start_points(), field.settings.link_threshold);
        assert_eq!(links.len(), expected.len());
        assert_eq!(links.len(), 119);

        // Each link joins particle i - 1 to particle i
        let at = |i: usize| to_screen(driver.particle(i), rect, field.settings.scale_fraction);
        for (segment, i) in links.iter().zip(expected) {
            assert!(segment[0].distance(at(i - 1)) < 1e-3);
            assert!(segment[1].distance(at(i)) < 1e-3);
        }
    }

    #[test]
    fn test_paint_loading_has_no_links() {
        let mut driver = MorphDriver::new(MorphTiming::default(), 0.0);
        driver.advance_frame(0.0);

        let (_, dots, links) = paint(&ParticleField::new(), &driver);
        assert_eq!(dots.len(), 120);
        assert!(links.is_empty());
    }

    #[test]
    fn test_to_screen_centers_unit_square() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(400.0, 300.0));

        let center = to_screen(Point::new(0.5, 0.5), rect, 0.7);
        assert!((center.x - rect.center().x).abs() < 1e-3);
        assert!((center.y - rect.center().y).abs() < 1e-3);

        // Scale is 0.7 of the width in both axes
        let a = to_screen(Point::new(0.0, 0.0), rect, 0.7);
        let b = to_screen(Point::new(1.0, 1.0), rect, 0.7);
        assert!((b.x - a.x - 280.0).abs() < 1e-3);
        assert!((b.y - a.y - 280.0).abs() < 1e-3);
    }

    #[test]
    fn test_no_links_for_loading() {
        let points = generate_outline(LayoutKind::Loading);
        assert!(mesh_links(LayoutKind::Loading, &points, 0.2).is_empty());
    }

    #[test]
    fn test_circle_links_everything() {
        let points = generate_outline(ShapeKind::Circle.into());
        let links = mesh_links(ShapeKind::Circle.into(), &points, 0.2);
        assert_eq!(links, (1..points.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_links_break_between_separate_parts() {
        // Top ellipse to bottom ellipse
        let points = generate_outline(ShapeKind::Cylinder.into());
        let links = mesh_links(ShapeKind::Cylinder.into(), &points, 0.2);
        assert!(!links.contains(&40));
        assert!(links.contains(&39));

        // Front face to back face
        let points = generate_outline(ShapeKind::Box.into());
        let links = mesh_links(ShapeKind::Box.into(), &points, 0.2);
        assert!(!links.contains(&40));
        assert!(links.contains(&41));
    }

    #[test]
    fn test_repaint_policy() {
        let a = ShapeKind::Circle.into();
        let b = ShapeKind::Cone.into();

        // At rest: always repaint for the float
        let rest = state(a, a, 1.0);
        assert!(needs_repaint(Some(&rest), &rest));
        assert!(needs_repaint(None, &state(a, b, 0.0)));

        // Mid-morph: only when something moved
        let mid = state(a, b, 0.4);
        assert!(!needs_repaint(Some(&mid), &mid));
        assert!(needs_repaint(Some(&mid), &state(a, b, 0.5)));
        assert!(needs_repaint(Some(&state(b, a, 0.4)), &mid));
        assert!(needs_repaint(None, &mid));
    }

    #[test]
    fn test_frame_changed_tracks_last_state() {
        let mut field = ParticleField::new();
        let mid = state(ShapeKind::Box.into(), ShapeKind::Cone.into(), 0.3);
        assert!(field.frame_changed(&mid));
        assert!(!field.frame_changed(&mid));
    }
}

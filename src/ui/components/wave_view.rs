use eframe::egui::{self, Color32, Pos2, Stroke};
use tracing::error;

use crate::animation::{AnimationDriver, MAX_PENDING_TICKS};
use crate::wave::{Point, Result, Surface, WaveConfig, WaveModel, WavePath};

/// Upper bound on model advances per frame; the driver drops older ticks.
pub const MAX_CATCH_UP_TICKS: usize = MAX_PENDING_TICKS;

const CURVE_STEPS: usize = 32;
const EDGE_WIDTH: f32 = 1.0;

/// Animated water-level indicator.
pub struct WaveView {
    model: WaveModel,
    driver: AnimationDriver,
    height: f32,
    start_failed: bool,
}

impl WaveView {
    pub fn new(config: WaveConfig, height: f32) -> Self {
        Self::with_driver(config, height, AnimationDriver::new())
    }

    pub fn with_driver(config: WaveConfig, height: f32, driver: AnimationDriver) -> Self {
        Self {
            model: WaveModel::new(config),
            driver,
            height,
            start_failed: false,
        }
    }

    pub fn model(&self) -> &WaveModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut WaveModel {
        &mut self.model
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Starts the animation when the view becomes visible. Repeated calls
    /// keep the single running ticker. After a failed start the view stays
    /// still until it is detached and shown again.
    pub fn on_focus(&mut self, ctx: &egui::Context) {
        if self.start_failed {
            return;
        }
        let started = self.driver.start(ctx.clone());
        self.note_start(started);
    }

    /// Stops the animation when the view is hidden or torn down.
    pub fn on_detach(&mut self) {
        self.driver.cancel();
        self.start_failed = false;
    }

    /// Records a start attempt; returns `true` when a failure was logged.
    fn note_start(&mut self, started: Result<bool>) -> bool {
        match started {
            Ok(_) => false,
            Err(err) => {
                error!(error = %err, "wave animation could not start");
                self.start_failed = true;
                true
            }
        }
    }

    /// Advances the model once per pending tick. Returns the number of
    /// advances applied, at most [`MAX_CATCH_UP_TICKS`].
    pub fn pump(&mut self) -> usize {
        let applied = self.driver.take_ticks().min(MAX_CATCH_UP_TICKS);
        for _ in 0..applied {
            self.model.advance();
        }
        applied
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(ui.available_width(), self.height);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        self.model.initialize(rect.width(), rect.height());
        self.on_focus(ui.ctx());
        self.pump();

        let mut surface = PainterSurface::new(&painter, rect.min);
        self.model.render(&mut surface);
        response
    }
}

/// Draws in widget-local coordinates onto an egui painter.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        self.origin + Pos2::from(point).to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_path(&mut self, path: &WavePath, color: Color32, anti_alias: bool) {
        let Some(floor) = path.floor() else {
            return;
        };
        let surface: Vec<Pos2> = path
            .surface(CURVE_STEPS)
            .into_iter()
            .map(|point| self.to_screen(point))
            .collect();
        if surface.len() < 2 {
            return;
        }
        let floor_y = self.to_screen(Point::new(0.0, floor)).y;
        self.painter
            .add(egui::Shape::mesh(fill_below(&surface, floor_y, color)));
        if anti_alias {
            self.painter
                .add(egui::Shape::line(surface, Stroke::new(EDGE_WIDTH, color)));
        }
    }

    fn draw_text_centered(&mut self, text: &str, center: Point, color: Color32, size: f32) {
        self.painter.text(
            self.to_screen(center),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(size),
            color,
        );
    }
}

/// Triangulates the area between an x-monotone polyline and a flat floor.
pub fn fill_below(surface: &[Pos2], floor_y: f32, color: Color32) -> egui::epaint::Mesh {
    let mut mesh = egui::epaint::Mesh::default();
    for pair in surface.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        let base = mesh.vertices.len() as u32;
        mesh.colored_vertex(left, color);
        mesh.colored_vertex(right, color);
        mesh.colored_vertex(egui::pos2(right.x, floor_y), color);
        mesh.colored_vertex(egui::pos2(left.x, floor_y), color);
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }
    mesh
}

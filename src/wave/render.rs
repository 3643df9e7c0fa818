use eframe::egui::Color32;

use super::path::WavePath;
use super::points::Point;
use super::WaveConfig;

/// Drawing operations the renderer needs from a host canvas.
pub trait Surface {
    fn fill_path(&mut self, path: &WavePath, color: Color32, anti_alias: bool);
    fn draw_text_centered(&mut self, text: &str, center: Point, color: Color32, size: f32);
}

/// Per-frame measurements the renderer reads from the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    pub wave_line_height: f32,
    pub wave_crest: f32,
    pub width: f32,
    pub height: f32,
}

pub fn render<S: Surface>(
    surface: &mut S,
    path: &WavePath,
    config: &WaveConfig,
    frame: &FrameGeometry,
) {
    surface.fill_path(path, config.wave_color.color(), true);
    if !config.show_percent_text {
        return;
    }
    let text = format!("{}%", percent_filled(frame.wave_line_height, frame.height));
    surface.draw_text_centered(
        &text,
        label_position(frame),
        config.text_color.color(),
        config.text_size,
    );
}

/// Share of the widget below the water line, in whole percent.
pub fn percent_filled(wave_line_height: f32, height: f32) -> u32 {
    if height <= 0.0 {
        return 0;
    }
    ((1.0 - wave_line_height / height) * 100.0).round().max(0.0) as u32
}

/// Horizontal center, vertically centered between the trough and the bottom.
pub fn label_position(frame: &FrameGeometry) -> Point {
    let top = frame.wave_line_height + frame.wave_crest;
    Point::new(frame.width / 2.0, top + (frame.height - top) / 2.0)
}

use serde::Serialize;
use tracing::{debug, trace};

use super::path::{build_path, WavePath};
use super::points::{Point, PointBuffer};
use super::render::{percent_filled, render, FrameGeometry, Surface};
use super::WaveConfig;

/// Whether the widget size has been observed yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitState {
    Uninitialized,
    Initialized { width: f32, height: f32 },
}

/// Wave geometry and animation state for one widget instance.
#[derive(Debug, Clone)]
pub struct WaveModel {
    config: WaveConfig,
    state: InitState,
    wave_line_height: f32,
    wave_crest: f32,
    wave_length: f32,
    first_point_x: f32,
    move_len: f32,
    points: PointBuffer,
}

/// Serializable view of the animation state, used by the headless CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveSnapshot {
    pub width: f32,
    pub height: f32,
    pub wave_line_height: f32,
    pub wave_crest: f32,
    pub wave_length: f32,
    pub first_point_x: f32,
    pub move_len: f32,
    pub point_count: usize,
    pub percent: Option<u32>,
}

impl WaveModel {
    pub fn new(config: WaveConfig) -> Self {
        Self {
            wave_line_height: config.default_wave_line_height,
            wave_crest: config.wave_crest,
            wave_length: config.wave_length,
            config,
            state: InitState::Uninitialized,
            first_point_x: 0.0,
            move_len: 0.0,
            points: PointBuffer::default(),
        }
    }

    /// Builds the point buffer from the first usable size. Returns `true` only
    /// on the call that performed the initialization.
    pub fn initialize(&mut self, width: f32, height: f32) -> bool {
        if self.is_initialized() {
            return false;
        }
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            trace!(width, height, "ignoring unusable wave size");
            return false;
        }

        let depth = self.wave_line_height;
        self.wave_line_height = if depth <= 0.0 {
            height
        } else if depth >= height {
            0.0
        } else {
            height - depth
        };
        if self.wave_crest == 0.0 {
            self.wave_crest = width / 2.5;
        }
        // One quarter period visible at a time keeps the slope gentle.
        if self.wave_length == 0.0 {
            self.wave_length = width * 4.0;
        }

        let periods = PointBuffer::periods_for(width, self.wave_length);
        self.first_point_x = -self.wave_length;
        self.move_len = 0.0;
        self.points = PointBuffer::seed(
            periods,
            self.wave_length,
            self.wave_line_height,
            self.wave_crest,
        );
        self.state = InitState::Initialized { width, height };
        debug!(
            width,
            height,
            periods,
            points = self.points.len(),
            wave_length = self.wave_length,
            wave_crest = self.wave_crest,
            wave_line_height = self.wave_line_height,
            "wave model initialized"
        );
        true
    }

    /// One animation tick: scroll right, optionally raise the water, and wrap
    /// once a full wavelength has scrolled past.
    pub fn advance(&mut self) {
        if !self.is_initialized() {
            return;
        }
        let speed_x = self.config.speed_x;
        self.move_len += speed_x;
        if self.config.rise_up {
            self.wave_line_height = (self.wave_line_height - self.config.speed_y).max(0.0);
        }
        self.first_point_x += speed_x;
        self.points
            .shift(speed_x, self.wave_line_height, self.wave_crest);

        if self.move_len >= self.wave_length {
            self.move_len = 0.0;
            self.first_point_x = -self.wave_length;
            self.points.rewind(self.wave_length);
            debug!(wave_length = self.wave_length, "wave wrapped");
        }
    }

    /// Closed outline of the water region for the current frame.
    pub fn path(&self) -> WavePath {
        match self.state {
            InitState::Initialized { height, .. } => {
                build_path(self.points.as_slice(), self.first_point_x, height)
            }
            InitState::Uninitialized => WavePath::default(),
        }
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        if let InitState::Initialized { width, height } = self.state {
            let frame = FrameGeometry {
                wave_line_height: self.wave_line_height,
                wave_crest: self.wave_crest,
                width,
                height,
            };
            render(surface, &self.path(), &self.config, &frame);
        }
    }

    pub fn percent(&self) -> Option<u32> {
        match self.state {
            InitState::Initialized { height, .. } => {
                Some(percent_filled(self.wave_line_height, height))
            }
            InitState::Uninitialized => None,
        }
    }

    pub fn snapshot(&self) -> WaveSnapshot {
        let (width, height) = self.size().unwrap_or((0.0, 0.0));
        WaveSnapshot {
            width,
            height,
            wave_line_height: self.wave_line_height,
            wave_crest: self.wave_crest,
            wave_length: self.wave_length,
            first_point_x: self.first_point_x,
            move_len: self.move_len,
            point_count: self.points.len(),
            percent: self.percent(),
        }
    }

    pub fn set_show_percent_text(&mut self, show: bool) {
        self.config.show_percent_text = show;
    }

    pub fn is_show_percent_text(&self) -> bool {
        self.config.show_percent_text
    }

    pub fn toggle_show_percent_text(&mut self) -> bool {
        self.config.show_percent_text = !self.config.show_percent_text;
        self.config.show_percent_text
    }

    /// Before initialization this replaces the depth-from-bottom that
    /// `initialize` normalizes; afterwards it is the top-relative y of the
    /// water line.
    pub fn set_wave_line_height(&mut self, wave_line_height: f32) {
        self.wave_line_height = wave_line_height;
    }

    pub fn state(&self) -> InitState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, InitState::Initialized { .. })
    }

    pub fn size(&self) -> Option<(f32, f32)> {
        match self.state {
            InitState::Initialized { width, height } => Some((width, height)),
            InitState::Uninitialized => None,
        }
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn wave_line_height(&self) -> f32 {
        self.wave_line_height
    }

    pub fn wave_crest(&self) -> f32 {
        self.wave_crest
    }

    pub fn wave_length(&self) -> f32 {
        self.wave_length
    }

    pub fn first_point_x(&self) -> f32 {
        self.first_point_x
    }

    pub fn move_len(&self) -> f32 {
        self.move_len
    }

    pub fn points(&self) -> &[Point] {
        self.points.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_runs_once() {
        let mut model = WaveModel::new(WaveConfig::default());
        assert!(model.initialize(1000.0, 500.0));
        assert!(!model.initialize(200.0, 100.0));
        assert_eq!(model.size(), Some((1000.0, 500.0)));
        assert_eq!(model.points().len(), 9);
    }

    #[test]
    fn zero_size_leaves_model_uninitialized() {
        let mut model = WaveModel::new(WaveConfig::default());
        assert!(!model.initialize(0.0, 500.0));
        assert_eq!(model.state(), InitState::Uninitialized);
        assert!(model.path().is_empty());
        assert_eq!(model.percent(), None);
        model.advance();
        assert_eq!(model.move_len(), 0.0);
    }

    #[test]
    fn level_in_range_is_measured_from_bottom() {
        let mut model = WaveModel::new(WaveConfig {
            default_wave_line_height: 200.0,
            ..WaveConfig::default()
        });
        model.initialize(1000.0, 500.0);
        assert_eq!(model.wave_line_height(), 300.0);
        assert_eq!(model.percent(), Some(40));
    }

    #[test]
    fn explicit_geometry_is_kept() {
        let mut model = WaveModel::new(WaveConfig {
            wave_crest: 20.0,
            wave_length: 300.0,
            ..WaveConfig::default()
        });
        model.initialize(1000.0, 500.0);
        assert_eq!(model.wave_crest(), 20.0);
        assert_eq!(model.wave_length(), 300.0);
        assert_eq!(model.points().len(), 4 * 4 + 5);
        assert_eq!(model.points()[0].x, -1200.0);
        assert_eq!(model.first_point_x(), -300.0);
    }

    #[test]
    fn setter_before_initialize_replaces_depth() {
        let mut model = WaveModel::new(WaveConfig::default());
        model.set_wave_line_height(100.0);
        model.initialize(1000.0, 500.0);
        assert_eq!(model.wave_line_height(), 400.0);

        model.set_wave_line_height(300.0);
        assert_eq!(model.wave_line_height(), 300.0);
    }
}

use eframe::egui::{pos2, Pos2};

/// A sampled anchor or control point of the wave curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Pos2 {
    fn from(point: Point) -> Self {
        pos2(point.x, point.y)
    }
}

/// Position of a point within one period of the wave (four points per period).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    /// Anchor on the water line where the wave starts dipping.
    Level,
    /// Control point below the water line.
    Sag,
    /// Anchor on the water line between the dip and the bulge.
    Midpoint,
    /// Control point above the water line.
    Rise,
}

impl PointRole {
    pub fn for_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Level,
            1 => Self::Sag,
            2 => Self::Midpoint,
            _ => Self::Rise,
        }
    }

    /// Y coordinate for this role; screen y grows downwards.
    pub fn y(self, level: f32, crest: f32) -> f32 {
        match self {
            Self::Level | Self::Midpoint => level,
            Self::Sag => level + crest,
            Self::Rise => level - crest,
        }
    }
}

/// Upper bound on buffered periods; wider ratios are clamped so the buffer
/// stays allocatable.
pub const MAX_PERIODS: usize = 4096;

/// Contiguous, fixed-length point storage mutated in place every tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointBuffer {
    points: Box<[Point]>,
}

impl PointBuffer {
    /// Number of periods needed to cover `width` plus the hidden lead-in
    /// period, at most [`MAX_PERIODS`].
    pub fn periods_for(width: f32, wavelength: f32) -> usize {
        let periods = (width / wavelength + 0.5).round();
        if !periods.is_finite() || periods <= 0.0 {
            0
        } else if periods >= MAX_PERIODS as f32 {
            MAX_PERIODS
        } else {
            periods as usize
        }
    }

    pub fn len_for(periods: usize) -> usize {
        periods.min(MAX_PERIODS) * 4 + 5
    }

    /// Lays out `4n + 5` points starting `n` wavelengths left of the origin.
    pub fn seed(periods: usize, wavelength: f32, level: f32, crest: f32) -> Self {
        let periods = periods.min(MAX_PERIODS);
        let quarter = wavelength / 4.0;
        let offset = wavelength * periods as f32;
        let points = (0..Self::len_for(periods))
            .map(|index| {
                let x = index as f32 * quarter - offset;
                Point::new(x, PointRole::for_index(index).y(level, crest))
            })
            .collect();
        Self { points }
    }

    /// Moves every point right by `dx` and re-derives y from the live level.
    pub fn shift(&mut self, dx: f32, level: f32, crest: f32) {
        for (index, point) in self.points.iter_mut().enumerate() {
            point.x += dx;
            point.y = PointRole::for_index(index).y(level, crest);
        }
    }

    /// Restores the canonical x layout one wavelength left of the origin.
    /// Y values are untouched.
    pub fn rewind(&mut self, wavelength: f32) {
        let quarter = wavelength / 4.0;
        for (index, point) in self.points.iter_mut().enumerate() {
            point.x = index as f32 * quarter - wavelength;
        }
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

//! State model for the matrix rain background.
//!
//! The model is deliberately free of any browser types: all randomness is
//! injected through a `FnMut() -> f64` source (uniform in `[0, 1)`), so the
//! per-frame behavior can be simulated and tested off-screen. The canvas
//! component in `ui::matrix_background` owns the draw calls.

/// Glyph cell size in pixels; one column per `GLYPH_SIZE` of viewport width.
pub const GLYPH_SIZE: f64 = 16.0;

/// Character set the streams are drawn from.
pub const GLYPHS: &str = "01ADLAH{}[]()<>+-*/=!@#$%^&*αβγδεζηθικλμνξοπρστυφχψω";

/// Drops that started above the viewport enter at staggered times; new drops
/// spawn anywhere in `[-RESPAWN_SPAN, 0)` rows.
pub const RESPAWN_SPAN: f64 = 100.0;

/// Per-frame probability of resetting a drop once it has passed the bottom
/// edge. Kept well below 1 so columns decorrelate instead of resetting in
/// synchronized bands.
pub const RESET_PROBABILITY: f64 = 0.025;

const ALERT_PROBABILITY: f64 = 0.02;
const ACCENT_PROBABILITY: f64 = 0.05;
const GLOW_PROBABILITY: f64 = 0.03;

/// Color/opacity class of a single drawn glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    /// Default dim red with a per-glyph opacity in `[0.1, 0.4)`.
    Dim { opacity: f64 },
    /// Rare cyan accent.
    Accent,
    /// Rare bright red.
    Alert,
}

impl Tone {
    /// Weighted-random tone pick. `Alert` and `Accent` are drawn
    /// independently so their rates stay fixed regardless of each other.
    pub fn pick(rng: &mut impl FnMut() -> f64) -> Self {
        if rng() < ALERT_PROBABILITY {
            Tone::Alert
        } else if rng() < ACCENT_PROBABILITY {
            Tone::Accent
        } else {
            Tone::Dim {
                opacity: rng() * 0.3 + 0.1,
            }
        }
    }

    /// Gradient stop colors (top, bottom) for this tone.
    pub fn gradient_stops(&self) -> (String, String) {
        match self {
            Tone::Alert => (
                "rgba(220, 38, 38, 0.8)".to_string(),
                "rgba(220, 38, 38, 0.2)".to_string(),
            ),
            Tone::Accent => (
                "rgba(0, 212, 255, 0.6)".to_string(),
                "rgba(0, 212, 255, 0.1)".to_string(),
            ),
            Tone::Dim { opacity } => (
                format!("rgba(220, 38, 38, {:.3})", opacity),
                format!("rgba(220, 38, 38, {:.3})", opacity * 0.3),
            ),
        }
    }
}

/// One glyph to draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphCell {
    pub ch: char,
    pub x: f64,
    pub y: f64,
    pub tone: Tone,
    pub glow: bool,
}

/// Per-column falling-glyph state for the full drawing surface.
///
/// Each column owns a single vertical position measured in rows (may be
/// negative while the stream is still above the viewport).
#[derive(Debug, Clone)]
pub struct RainField {
    width: f64,
    height: f64,
    drops: Vec<f64>,
    glyphs: Vec<char>,
}

impl RainField {
    /// Column count for a viewport width: `floor(width / GLYPH_SIZE)`.
    pub fn column_count(width: f64) -> usize {
        if width <= 0.0 || !width.is_finite() {
            return 0;
        }
        (width / GLYPH_SIZE).floor() as usize
    }

    pub fn new(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let mut field = Self {
            width: 0.0,
            height: 0.0,
            drops: Vec::new(),
            glyphs: GLYPHS.chars().collect(),
        };
        field.resize(width, height, rng);
        field
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Vertical position of a column in rows, if the column exists.
    pub fn drop_at(&self, column: usize) -> Option<f64> {
        self.drops.get(column).copied()
    }

    /// Adopt new surface dimensions. Surviving columns keep their positions;
    /// columns gained from a wider viewport start above the visible area.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
        self.width = width;
        self.height = height;
        let columns = Self::column_count(width);
        if columns < self.drops.len() {
            self.drops.truncate(columns);
        } else {
            while self.drops.len() < columns {
                self.drops.push(-(rng() * RESPAWN_SPAN));
            }
        }
    }

    /// Produce one frame of glyphs and advance every column.
    ///
    /// A column that has scrolled past the bottom edge is reset to a random
    /// negative offset with probability [`RESET_PROBABILITY`] per frame;
    /// otherwise it keeps falling off-screen until the reset fires.
    pub fn advance(&mut self, rng: &mut impl FnMut() -> f64) -> Vec<GlyphCell> {
        let mut cells = Vec::with_capacity(self.drops.len());
        for (column, drop) in self.drops.iter_mut().enumerate() {
            let pick = (rng() * self.glyphs.len() as f64) as usize;
            let ch = self.glyphs[pick.min(self.glyphs.len() - 1)];
            let x = column as f64 * GLYPH_SIZE + GLYPH_SIZE / 2.0;
            let y = *drop * GLYPH_SIZE;

            cells.push(GlyphCell {
                ch,
                x,
                y,
                tone: Tone::pick(rng),
                glow: rng() < GLOW_PROBABILITY,
            });

            if y > self.height && rng() < RESET_PROBABILITY {
                *drop = -(rng() * RESPAWN_SPAN);
            }
            *drop += rng() * 0.5 + 0.5;
        }
        cells
    }
}

//! Algorithm categories
//!
//! Categories are descriptive metadata. Nothing dispatches on them and they
//! take no part in identity checks.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Functional grouping of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Beat tracking, tempo and onset detection
    Rhythm,
    /// Pitch and melody estimation
    Pitch,
    /// Sinusoidal, harmonic and stochastic analysis/synthesis models
    Synthesis,
    /// Input/output helpers
    InputOutput,
    /// Duration and silence measures
    DurationSilence,
    /// Loudness and dynamics descriptors
    LoudnessDynamics,
    /// Time-domain filters
    Filters,
    /// General building blocks (framing, FFT, windowing, ...)
    Standard,
    /// Pool transformations
    Transformations,
    /// Spectral descriptors and band energies
    Spectral,
    /// Composite feature extractors
    Extractors,
    /// Envelope and sound-effect descriptors
    EnvelopeSfx,
    /// Complex-number helpers
    Math,
    /// Statistical descriptors
    Statistics,
    /// Key, chords and pitch-class profiles
    Tonal,
    /// Signal segmentation
    Segmentation,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Rhythm,
        Category::Pitch,
        Category::Synthesis,
        Category::InputOutput,
        Category::DurationSilence,
        Category::LoudnessDynamics,
        Category::Filters,
        Category::Standard,
        Category::Transformations,
        Category::Spectral,
        Category::Extractors,
        Category::EnvelopeSfx,
        Category::Math,
        Category::Statistics,
        Category::Tonal,
        Category::Segmentation,
    ];

    /// The category label as it appears in native algorithm info
    pub fn label(&self) -> &'static str {
        match self {
            Category::Rhythm => "Rhythm",
            Category::Pitch => "Pitch",
            Category::Synthesis => "Synthesis",
            Category::InputOutput => "Input/output",
            Category::DurationSilence => "Duration/silence",
            Category::LoudnessDynamics => "Loudness/dynamics",
            Category::Filters => "Filters",
            Category::Standard => "Standard",
            Category::Transformations => "Transformations",
            Category::Spectral => "Spectral",
            Category::Extractors => "Extractors",
            Category::EnvelopeSfx => "Envelope/SFX",
            Category::Math => "Math",
            Category::Statistics => "Statistics",
            Category::Tonal => "Tonal",
            Category::Segmentation => "Segmentation",
        }
    }

    /// Parse a native info label back into a category
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual style of the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStyle {
    /// Font-rendered digits.
    Segment,
    /// Nixie tube photographs.
    Nixie,
    /// User-provided digit images.
    Custom,
}

impl ClockStyle {
    /// Cycling order for the style button.
    pub const CYCLE: [ClockStyle; 3] = [ClockStyle::Segment, ClockStyle::Nixie, ClockStyle::Custom];

    /// Whether digits are drawn from image assets rather than a font.
    pub fn image_backed(self) -> bool {
        !matches!(self, ClockStyle::Segment)
    }
}

/// Which optional styles this build carries assets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSet {
    pub nixie: bool,
    pub custom: bool,
}

impl StyleSet {
    /// Capabilities of the current build.
    pub fn from_features() -> Self {
        StyleSet {
            nixie: cfg!(feature = "nixie"),
            custom: cfg!(feature = "custom-style"),
        }
    }

    pub fn enabled(&self, style: ClockStyle) -> bool {
        match style {
            ClockStyle::Segment => true,
            ClockStyle::Nixie => self.nixie,
            ClockStyle::Custom => self.custom,
        }
    }
}

/// Next enabled style after `current` in cycling order. `Segment` is always
/// enabled, so this never selects an unavailable style.
pub fn next_enabled(current: ClockStyle, enabled: &StyleSet) -> ClockStyle {
    let cycle = &ClockStyle::CYCLE;
    let pos = cycle.iter().position(|&s| s == current).unwrap_or(0);
    for i in 1..=cycle.len() {
        let candidate = cycle[(pos + i) % cycle.len()];
        if enabled.enabled(candidate) {
            return candidate;
        }
    }
    ClockStyle::Segment
}

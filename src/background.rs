use crate::color::RGBAColorFormat;

/// Every color channel has to exceed this value for a dot to count as background.
pub const DEFAULT_THRESHOLD: u8 = 240;

pub trait PixelPredicate {
    fn matches(&self, dot: &RGBAColorFormat) -> bool;
}

/// Classifies near-white dots as background. Alpha is not considered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundPredicate {
    threshold: u8,
}

impl BackgroundPredicate {
    pub fn new(threshold: u8) -> Self {
        BackgroundPredicate { threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn is_background(&self, dot: &RGBAColorFormat) -> bool {
        dot.red > self.threshold && dot.green > self.threshold && dot.blue > self.threshold
    }
}

impl Default for BackgroundPredicate {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl PixelPredicate for BackgroundPredicate {
    fn matches(&self, dot: &RGBAColorFormat) -> bool {
        self.is_background(dot)
    }
}

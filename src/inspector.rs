use std::fmt::Display;

use crate::grid::{Coordinate, PixelGrid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerAlpha {
    pub alpha: u8,
    pub is_transparent: bool,
}

impl CornerAlpha {
    pub fn verdict(&self) -> &'static str {
        if self.is_transparent {
            "Transparency Detected."
        } else {
            "Image is Opaque."
        }
    }
}

impl Display for CornerAlpha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Top-Left Pixel Alpha: {}", self.alpha)?;
        write!(f, "{}", self.verdict())
    }
}

/// Reports the alpha of the top-left dot. `None` for a grid without dots.
pub fn inspect(grid: &PixelGrid) -> Option<CornerAlpha> {
    if grid.is_empty() {
        return None;
    }
    let alpha = grid.dot(Coordinate::new(0, 0)).alpha;
    Some(CornerAlpha {
        alpha,
        is_transparent: alpha == 0,
    })
}

#[cfg(test)]
mod test {
    use super::{inspect, CornerAlpha};
    use crate::color::RGBAColorFormat;
    use crate::grid::{Coordinate, PixelGrid};

    #[test]
    fn transparent_corner() {
        let grid = PixelGrid::filled(2, 2, RGBAColorFormat::TRANSPARENT_WHITE);
        let result = inspect(&grid).unwrap();
        assert_eq!(
            result,
            CornerAlpha {
                alpha: 0,
                is_transparent: true
            }
        );
        assert_eq!(result.verdict(), "Transparency Detected.");
    }

    #[test]
    fn opaque_corner() {
        let grid = PixelGrid::filled(2, 2, RGBAColorFormat::opaque(255, 255, 255));
        let result = inspect(&grid).unwrap();
        assert_eq!(
            result,
            CornerAlpha {
                alpha: 255,
                is_transparent: false
            }
        );
        assert_eq!(result.verdict(), "Image is Opaque.");
    }

    #[test]
    fn only_top_left_is_inspected() {
        let mut grid = PixelGrid::filled(2, 2, RGBAColorFormat::TRANSPARENT_WHITE);
        grid.set_dot(Coordinate::new(0, 0), RGBAColorFormat::new(0, 0, 0, 1));
        let result = inspect(&grid).unwrap();
        assert_eq!(result.alpha, 1);
        assert!(!result.is_transparent);
    }

    #[test]
    fn empty_grid_has_no_corner() {
        let grid = PixelGrid::filled(0, 3, RGBAColorFormat::default());
        assert_eq!(inspect(&grid), None);
    }

    #[test]
    fn display_prints_alpha_and_verdict() {
        let corner = CornerAlpha {
            alpha: 0,
            is_transparent: true,
        };
        assert_eq!(
            corner.to_string(),
            "Top-Left Pixel Alpha: 0\nTransparency Detected."
        );
    }
}

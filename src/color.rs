use image::Rgba;

/// A single 8-bit RGBA dot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RGBAColorFormat {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl RGBAColorFormat {
    /// The value written over every removed background dot.
    pub const TRANSPARENT_WHITE: Self = Self::new(255, 255, 255, 0);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        RGBAColorFormat {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, u8::MAX)
    }

    pub fn is_transparent(&self) -> bool {
        self.alpha == 0
    }
}

impl From<Rgba<u8>> for RGBAColorFormat {
    fn from(value: Rgba<u8>) -> Self {
        let [red, green, blue, alpha] = value.0;
        RGBAColorFormat {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl From<&Rgba<u8>> for RGBAColorFormat {
    fn from(value: &Rgba<u8>) -> Self {
        RGBAColorFormat::from(*value)
    }
}

impl From<RGBAColorFormat> for Rgba<u8> {
    fn from(value: RGBAColorFormat) -> Self {
        Rgba([value.red, value.green, value.blue, value.alpha])
    }
}

#[cfg(test)]
mod test {
    use image::Rgba;

    use super::RGBAColorFormat;

    #[test]
    fn convert_rgba_pixel_to_color() {
        let color = RGBAColorFormat::from(Rgba([12_u8, 34, 56, 78]));
        assert_eq!(color.red, 12, "red is wrong");
        assert_eq!(color.green, 34, "green is wrong");
        assert_eq!(color.blue, 56, "blue is wrong");
        assert_eq!(color.alpha, 78, "alpha is wrong");
    }

    #[test]
    fn convert_color_to_rgba_pixel() {
        let pixel: Rgba<u8> = RGBAColorFormat::new(1, 2, 3, 4).into();
        assert_eq!(pixel.0, [1, 2, 3, 4]);
    }

    #[test]
    fn transparent_white_is_transparent() {
        assert!(RGBAColorFormat::TRANSPARENT_WHITE.is_transparent());
        assert_eq!(
            RGBAColorFormat::TRANSPARENT_WHITE,
            RGBAColorFormat::new(255, 255, 255, 0)
        );
    }

    #[test]
    fn opaque_color_is_not_transparent() {
        let color = RGBAColorFormat::opaque(0, 0, 0);
        assert_eq!(color.alpha, 255);
        assert!(!color.is_transparent());
    }

    #[test]
    fn partially_transparent_color_is_not_transparent() {
        assert!(!RGBAColorFormat::new(255, 255, 255, 1).is_transparent());
    }
}

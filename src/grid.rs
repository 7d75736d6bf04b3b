use image::RgbaImage;

use crate::color::RGBAColorFormat;
use crate::error::Error;

pub mod reader;
pub mod writer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub const fn new(x: u32, y: u32) -> Self {
        Coordinate { x, y }
    }
}

/// A decoded image as a row-major buffer of RGBA dots.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    dots: Vec<RGBAColorFormat>,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32, dots: Vec<RGBAColorFormat>) -> crate::Result<Self> {
        let expected = width as usize * height as usize;
        if dots.len() != expected {
            return Err(Error::MismatchOfSizeBetweenDimensionsAndDots(
                expected,
                dots.len(),
            ));
        }
        Ok(PixelGrid {
            width,
            height,
            dots,
        })
    }

    pub fn filled(width: u32, height: u32, dot: RGBAColorFormat) -> Self {
        PixelGrid {
            width,
            height,
            dots: vec![dot; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width && coordinate.y < self.height
    }

    /// Panics when the coordinate lies outside the grid.
    pub fn dot(&self, coordinate: Coordinate) -> RGBAColorFormat {
        self.dots[self.index(coordinate)]
    }

    pub fn set_dot(&mut self, coordinate: Coordinate, dot: RGBAColorFormat) {
        let index = self.index(coordinate);
        self.dots[index] = dot;
    }

    pub(crate) fn index(&self, coordinate: Coordinate) -> usize {
        assert!(
            self.contains(coordinate),
            "Coordinate ({}, {}) outside of {}x{} grid",
            coordinate.x,
            coordinate.y,
            self.width,
            self.height
        );
        coordinate.y as usize * self.width as usize + coordinate.x as usize
    }

    /// Top-left, top-right, bottom-left and bottom-right, without duplicates.
    pub fn corners(&self) -> Vec<Coordinate> {
        if self.is_empty() {
            return Vec::new();
        }
        let last_column = self.width - 1;
        let last_row = self.height - 1;
        let mut corners = Vec::with_capacity(4);
        for corner in [
            Coordinate::new(0, 0),
            Coordinate::new(last_column, 0),
            Coordinate::new(0, last_row),
            Coordinate::new(last_column, last_row),
        ] {
            if !corners.contains(&corner) {
                corners.push(corner);
            }
        }
        corners
    }

    /// The in-bounds dots directly left, right, above and below.
    pub fn neighbors(&self, coordinate: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        const OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            let x = coordinate.x as i64 + dx;
            let y = coordinate.y as i64 + dy;
            if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
                return None;
            }
            Some(Coordinate::new(x as u32, y as u32))
        })
    }
}

impl From<RgbaImage> for PixelGrid {
    fn from(value: RgbaImage) -> Self {
        let (width, height) = value.dimensions();
        let dots = value.pixels().map(RGBAColorFormat::from).collect();
        PixelGrid {
            width,
            height,
            dots,
        }
    }
}

impl From<&PixelGrid> for RgbaImage {
    fn from(value: &PixelGrid) -> Self {
        RgbaImage::from_fn(value.width, value.height, |x, y| {
            value.dot(Coordinate::new(x, y)).into()
        })
    }
}

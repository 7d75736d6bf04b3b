use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use image::{ImageError, ImageReader};

use super::PixelGrid;
use crate::error::Error;

pub trait GridReader {
    fn read_grid(&mut self) -> crate::Result<PixelGrid>;
}

/// Decodes an image into an RGBA8 grid. The format is detected from the
/// content, not from the file name.
pub struct ImageGridReader<R: BufRead + Seek> {
    reader: R,
    source_name: String,
}

impl<R: BufRead + Seek> ImageGridReader<R> {
    pub fn new(reader: R, source_name: impl Into<String>) -> Self {
        Self {
            reader,
            source_name: source_name.into(),
        }
    }
}

impl<R: BufRead + Seek> GridReader for ImageGridReader<R> {
    fn read_grid(&mut self) -> crate::Result<PixelGrid> {
        let decoded = ImageReader::new(&mut self.reader)
            .with_guessed_format()
            .map_err(|e| {
                Error::UnableToDecodeImage(self.source_name.clone(), ImageError::IoError(e))
            })?
            .decode()
            .map_err(|e| Error::UnableToDecodeImage(self.source_name.clone(), e))?;
        Ok(PixelGrid::from(decoded.to_rgba8()))
    }
}

impl ImageGridReader<BufReader<File>> {
    pub fn open(file_path: &Path) -> crate::Result<Self> {
        let file = File::open(file_path).map_err(|e| {
            Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
        })?;
        Ok(Self::new(
            BufReader::new(file),
            file_path.display().to_string(),
        ))
    }
}

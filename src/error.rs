use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    DirectoryNotFound(String),
    UnableToReadDirectory(String, std::io::Error),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToDecodeImage(String, image::ImageError),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    UnableToEncodeImage(String, image::ImageError),
    UnableToReplaceFile(String, std::io::Error),
    MismatchOfSizeBetweenDimensionsAndDots(usize, usize),
    EmptyImage(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryNotFound(path) => {
                write!(f, "Directory not found: {}", path)
            }
            Self::UnableToReadDirectory(path, error) => {
                write!(f, "Unable to list directory '{}': {}", path, error)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToDecodeImage(path, error) => {
                write!(f, "Unable to decode image '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::UnableToEncodeImage(path, error) => {
                write!(f, "Unable to encode image '{}': {}", path, error)
            }
            Self::UnableToReplaceFile(path, error) => {
                write!(
                    f,
                    "Unable to replace '{}' with the processed image: {}",
                    path, error
                )
            }
            Self::MismatchOfSizeBetweenDimensionsAndDots(expected, actual) => {
                write!(
                    f,
                    "Number of pixels does not match the dimensions. Expected {}, but got {}.",
                    expected, actual
                )
            }
            Self::EmptyImage(path) => {
                write!(f, "Image '{}' does not contain any pixels", path)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToReadDirectory(_, error)
            | Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::UnableToReplaceFile(_, error) => Some(error),
            Self::UnableToDecodeImage(_, error) | Self::UnableToEncodeImage(_, error) => {
                Some(error)
            }
            _ => None,
        }
    }
}

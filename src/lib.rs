use std::path::PathBuf;

use background::BackgroundPredicate;
pub use batch::{BatchReport, ProcessedImage};
pub use cli::{CLIParser, InspectorCLIParser};
pub use error::Error;
use grid::reader::{GridReader, ImageGridReader};
use inspector::CornerAlpha;

pub mod background;
pub mod batch;
mod cli;
pub mod color;
mod error;
pub mod flood_fill;
pub mod grid;
pub mod inspector;
mod logger;
pub mod transparency;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    directory: PathBuf,
    threshold: u8,
}

pub struct InspectionArguments {
    image_file: PathBuf,
}

pub fn remove_sprite_backgrounds(arguments: &Arguments) -> Result<BatchReport> {
    let predicate = BackgroundPredicate::new(arguments.threshold);
    log::debug!(
        "Removing backgrounds in {} with threshold {}",
        arguments.directory.display(),
        predicate.threshold()
    );
    batch::remove_background_in_directory(&arguments.directory, &predicate)
}

pub fn check_transparency(arguments: &InspectionArguments) -> Result<CornerAlpha> {
    let image_file = &arguments.image_file;
    let grid = ImageGridReader::open(image_file)?.read_grid()?;
    inspector::inspect(&grid).ok_or_else(|| Error::EmptyImage(image_file.display().to_string()))
}

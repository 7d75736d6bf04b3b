use std::path::Path;

use log::{Level, LevelFilter};
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {l} {t} - {m}{n}";

/// Binaries print their own per-file line, so the log copy stays below info.
const PROCESSED_IMAGE_LEVEL: Level = Level::Debug;

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_err() {
        init_console_fallback();
    }
}

fn init_console_fallback() {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info));
    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}

pub fn log_processed_image(path: &Path, width: u32, height: u32, cleared: usize) {
    let total = width as u64 * height as u64;
    log::log!(
        PROCESSED_IMAGE_LEVEL,
        "Cleared {} ({}x{}, {} of {} pixels)",
        path.display(),
        width,
        height,
        cleared,
        total
    );
}

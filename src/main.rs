use std::env::args_os;
use std::process::ExitCode;

use sprite_bg_remover::{remove_sprite_backgrounds, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match remove_sprite_backgrounds(&arguments) {
        Ok(report) => {
            for image in &report.processed {
                println!("Processed: {}", image.path.display());
            }
            for (path, error) in &report.failed {
                eprintln!("Error processing {}: {}", path.display(), error);
            }
            println!(
                "{} image(s) processed, {} pixels cleared, {} failed",
                report.processed.len(),
                report.cleared_total(),
                report.failed.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

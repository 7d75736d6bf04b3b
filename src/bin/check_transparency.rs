use std::env::args_os;

use sprite_bg_remover::{check_transparency, InspectorCLIParser};

fn main() {
    let mut cli_parser = InspectorCLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match check_transparency(&arguments) {
        Ok(corner) => println!("{}", corner),
        Err(e) => println!("Error: {}", e),
    }
}

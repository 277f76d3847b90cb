//! Caption Themes - inspect and validate caption color themes
//!
//! This is the binary entry point. All logic lives in the library.

use caption_themes::Args;
use clap::Parser;

fn main() {
    let args = Args::parse();

    if let Err(e) = caption_themes::run(args) {
        eprintln!("❌ {e}");
        if e.is_config_error() {
            eprintln!();
            eprintln!("Hint: fix or remove .capthemes/themes.toml, then run:");
            eprintln!("      capthemes check");
        }
        std::process::exit(1);
    }
}

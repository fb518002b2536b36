//! flagpress - Command-line tool for listing, inspecting, and previewing flag palettes

use std::process::ExitCode;

use flagpress::cli;

fn main() -> ExitCode {
    cli::run()
}

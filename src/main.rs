//! WishCraft - command-line prompt composer for greeting and festival posters

use std::process::ExitCode;

use wishcraft::cli;

fn main() -> ExitCode {
    cli::run()
}

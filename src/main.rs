use clap::Parser;
use stocklens::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}

//! Command-line 3x3x3 cube simulator.
//!
//! Key presses are replayed through the same engine a graphical frontend
//! would use, with frames simulated at a fixed rate, and the resulting net is
//! printed to the terminal.

mod cli;
mod display;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();
    color_eyre::install()?;

    cli::exec(args)
}

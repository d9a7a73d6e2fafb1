//! This crate contains the source code for the `kruskal-maze` binary.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The crate is not published, so it carries no repository or readme."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use kruskal_maze::{app, App, Config};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    app::init_logging(&config.log_level)?;
    App::new(config)?.run()?;

    Ok(())
}

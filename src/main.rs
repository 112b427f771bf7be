mod app;
mod data;
mod error;
mod stats;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    app::run()
}

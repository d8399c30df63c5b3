//! DevByte - chat workspace with a resizable code / preview split

mod runtime;
mod view;

#[cfg(debug_assertions)]
mod debug_dump;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use devbyte::cli::CliArgs;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    devbyte::tracing::init();

    let startup = args.into_config();
    tracing::info!(
        "Starting DevByte ({}x{}, split {:?})",
        startup.config.window_width,
        startup.config.window_height,
        startup.config.split_axis
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup);
    event_loop.run_app(&mut app)?;

    Ok(())
}

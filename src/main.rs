use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use dockmenu::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    dockmenu::tracing::init();

    let startup_config = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup_config)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}

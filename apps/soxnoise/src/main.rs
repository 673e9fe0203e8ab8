use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use playback::{PlaybackController, PlaybackError, SystemLauncher};
use tracing::{error, info};

mod banner;
mod cli;
mod config;
mod controller;
mod logging;
mod signals;
mod tui;

use cli::Args;
use controller::App;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "soxnoise stopped with an error");
            eprintln!("soxnoise: {err:#}");
            if err
                .downcast_ref::<PlaybackError>()
                .is_some_and(PlaybackError::is_missing_program)
            {
                eprintln!("Is SoX installed? Point --player or SOXNOISE_PLAYER at its `play` binary.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut settings = config::load_settings(args.config.as_deref())?;
    args.apply_to(&mut settings);
    logging::init(&settings)?;

    let params = args.parameter_state().context("invalid startup parameters")?;
    let interrupts = signals::install()?;
    let playback = PlaybackController::new(
        SystemLauncher,
        settings.player.clone(),
        settings.kill_grace(),
    );

    info!(
        player = %settings.player,
        color = %params.color(),
        volume = params.volume(),
        ui = params.ui_enabled(),
        "soxnoise starting"
    );
    banner::print();

    if params.ui_enabled() {
        let mut app = App::new(params, playback, settings.input_timeout());
        tui::run(&mut app, &interrupts)?;
    } else {
        let mut playback = playback;
        let outcome = playback.run_foreground(&params, || interrupts.try_recv().is_ok())?;
        tui::terminal::restore_cursor();
        info!(code = ?outcome.code, "foreground run finished");
    }

    banner::print();
    Ok(())
}

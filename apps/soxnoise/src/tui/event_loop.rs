use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

use anyhow::Context;
use crossbeam_channel::Receiver;
use crossterm::event;
use playback::ProcessLauncher;
use tracing::{debug, info};

use crate::controller::{translate, App, Effect, InputEvent};
use crate::signals::Interrupt;
use crate::tui::{
    render::render,
    terminal::{self, TerminalGuard},
};

/// Upper bound on a single blocking poll so interrupts are noticed even
/// while the help overlay waits indefinitely.
const INTERRUPT_CHECK: Duration = Duration::from_millis(100);

/// Runs the interactive session until the user quits or an interrupt arrives.
pub fn run<L: ProcessLauncher>(
    app: &mut App<L>,
    interrupts: &Receiver<Interrupt>,
) -> anyhow::Result<()> {
    terminal::install_panic_hook();
    let mut guard = TerminalGuard::enter().context("failed to prepare the terminal")?;
    let mut stdout = io::stdout();

    if app.start()? {
        info!("interactive view started");
    }
    draw(&mut stdout, app)?;

    loop {
        let event = next_event(app.input_timeout(), interrupts)?;
        match app.handle(event)? {
            Effect::Idle => {}
            Effect::Redraw => draw(&mut stdout, app)?,
            Effect::Exit => break,
        }
    }

    guard.restore();
    debug!(
        mode = ?app.mode(),
        launches = app.playback().launches(),
        color = %app.params().color(),
        volume = app.params().volume(),
        "interactive view closed"
    );
    Ok(())
}

fn draw<W: Write, L: ProcessLauncher>(out: &mut W, app: &App<L>) -> anyhow::Result<()> {
    render(out, &app.view(), terminal::size()).context("failed to draw the status view")
}

/// Blocks until an input event, an interrupt or the timeout. With no
/// timeout only input or an interrupt ends the wait.
fn next_event(
    timeout: Option<Duration>,
    interrupts: &Receiver<Interrupt>,
) -> anyhow::Result<InputEvent> {
    let started = Instant::now();
    loop {
        if interrupts.try_recv().is_ok() {
            return Ok(InputEvent::Interrupt);
        }

        let slice = match timeout {
            Some(limit) => limit.saturating_sub(started.elapsed()).min(INTERRUPT_CHECK),
            None => INTERRUPT_CHECK,
        };

        if event::poll(slice).context("failed to poll terminal input")? {
            let raw = event::read().context("failed to read terminal input")?;
            if let Some(event) = translate(raw) {
                return Ok(event);
            }
            continue;
        }

        if timeout.is_some_and(|limit| started.elapsed() >= limit) {
            return Ok(InputEvent::Tick);
        }
    }
}

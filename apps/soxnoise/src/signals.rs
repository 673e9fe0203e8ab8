//! SIGINT/SIGTERM forwarded to the control loop as a message.

use anyhow::Context;
use crossbeam_channel::{bounded, Receiver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupt;

pub fn install() -> anyhow::Result<Receiver<Interrupt>> {
    let (tx, rx) = bounded(1);
    ctrlc::set_handler(move || {
        tx.try_send(Interrupt).ok();
    })
    .context("failed to install interrupt handler")?;
    Ok(rx)
}

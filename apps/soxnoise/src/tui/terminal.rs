use std::{io, panic};

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Raw mode plus alternate screen for as long as the guard lives.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen, cursor::Hide) {
            terminal::disable_raw_mode().ok();
            return Err(err);
        }
        Ok(Self { active: true })
    }

    pub fn restore(&mut self) {
        if std::mem::take(&mut self.active) {
            restore_terminal();
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub fn restore_terminal() {
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show).ok();
    terminal::disable_raw_mode().ok();
}

/// The synthesizer's own meter can leave the cursor hidden in foreground runs.
pub fn restore_cursor() {
    execute!(io::stdout(), cursor::Show).ok();
}

/// Puts the terminal back before the default hook prints the panic message.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}

pub fn size() -> (u16, u16) {
    terminal::size().unwrap_or(FALLBACK_SIZE)
}

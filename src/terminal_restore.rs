//! Terminal-state guards so a quit, an error or a panic never leaves the shell in raw mode.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{
    io::{self, Write},
    panic,
    sync::{
        atomic::{AtomicBool, Ordering},
        OnceLock,
    },
};

static RAW_MODE_ENABLED: AtomicBool = AtomicBool::new(false);
static ALT_SCREEN_ENABLED: AtomicBool = AtomicBool::new(false);
static MOUSE_CAPTURE_ENABLED: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK_INSTALLED: OnceLock<()> = OnceLock::new();

/// Restores whatever terminal modes were switched on, on drop or from the panic hook.
pub struct TerminalRestoreGuard;

impl TerminalRestoreGuard {
    #[must_use]
    pub fn new() -> Self {
        install_terminal_panic_hook();
        TerminalRestoreGuard
    }

    /// # Errors
    ///
    /// Returns an error if the terminal cannot enter raw mode.
    pub fn enable_raw_mode(&self) -> io::Result<()> {
        enable_raw_mode()?;
        RAW_MODE_ENABLED.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if alternate-screen activation fails.
    pub fn enter_alt_screen(&self, stdout: &mut impl Write) -> io::Result<()> {
        execute!(stdout, EnterAlternateScreen)?;
        ALT_SCREEN_ENABLED.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Mouse reporting is what turns clicks into pointer-down events.
    ///
    /// # Errors
    ///
    /// Returns an error if mouse capture cannot be enabled.
    pub fn enable_mouse_capture(&self, stdout: &mut impl Write) -> io::Result<()> {
        execute!(stdout, EnableMouseCapture)?;
        MOUSE_CAPTURE_ENABLED.store(true, Ordering::SeqCst);
        Ok(())
    }

    pub fn restore(&self) {
        restore_terminal();
    }
}

impl Default for TerminalRestoreGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Undo raw mode, mouse capture and the alternate screen, then show the cursor.
pub fn restore_terminal() {
    if RAW_MODE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = disable_raw_mode();
    }
    let mut stdout = io::stdout();
    if MOUSE_CAPTURE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    if ALT_SCREEN_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
    let _ = execute!(stdout, Show);
    let _ = stdout.flush();
}

fn panic_payload(info: &panic::PanicHookInfo<'_>) -> String {
    if let Some(text) = info.payload().downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = info.payload().downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

pub fn install_terminal_panic_hook() {
    PANIC_HOOK_INSTALLED.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal();
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".to_string());
            tracing::error!(%location, payload = %panic_payload(info), "panic");
            previous(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("intentional write failure"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("intentional flush failure"))
        }
    }

    fn test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn install_terminal_panic_hook_sets_once_flag() {
        let _guard = test_lock().lock().expect("test lock");
        install_terminal_panic_hook();
        assert!(PANIC_HOOK_INSTALLED.get().is_some());
    }

    #[test]
    fn restore_terminal_clears_state_flags() {
        let _guard = test_lock().lock().expect("test lock");
        ALT_SCREEN_ENABLED.store(true, Ordering::SeqCst);
        MOUSE_CAPTURE_ENABLED.store(true, Ordering::SeqCst);
        restore_terminal();
        assert!(!ALT_SCREEN_ENABLED.load(Ordering::SeqCst));
        assert!(!MOUSE_CAPTURE_ENABLED.load(Ordering::SeqCst));
    }

    #[test]
    fn guard_drop_restores_mouse_capture() {
        let _guard = test_lock().lock().expect("test lock");
        MOUSE_CAPTURE_ENABLED.store(true, Ordering::SeqCst);
        {
            let _restore = TerminalRestoreGuard::new();
        }
        assert!(!MOUSE_CAPTURE_ENABLED.load(Ordering::SeqCst));
    }

    #[test]
    fn enter_alt_screen_propagates_writer_errors_without_setting_flag() {
        let _guard = test_lock().lock().expect("test lock");
        ALT_SCREEN_ENABLED.store(false, Ordering::SeqCst);
        let guard = TerminalRestoreGuard::new();
        let err = guard
            .enter_alt_screen(&mut FailingWriter)
            .expect_err("write error should bubble up");
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(!ALT_SCREEN_ENABLED.load(Ordering::SeqCst));
    }

    #[test]
    fn enable_mouse_capture_propagates_writer_errors_without_setting_flag() {
        let _guard = test_lock().lock().expect("test lock");
        MOUSE_CAPTURE_ENABLED.store(false, Ordering::SeqCst);
        let guard = TerminalRestoreGuard::new();
        let err = guard
            .enable_mouse_capture(&mut FailingWriter)
            .expect_err("write error should bubble up");
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(!MOUSE_CAPTURE_ENABLED.load(Ordering::SeqCst));
    }
}

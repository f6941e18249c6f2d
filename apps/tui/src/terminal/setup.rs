use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Write};

/// Set up the terminal: raw mode first, then the alternate screen, rolling
/// back whatever succeeded when a later step fails.
pub fn setup() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    if let Err(e) = enable_raw_mode() {
        return Err(color_eyre::eyre::eyre!("Failed to enable raw mode: {e}"));
    }

    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(color_eyre::eyre::eyre!(
            "Failed to enter alternate screen: {e}"
        ));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(term) => term,
        Err(e) => {
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(color_eyre::eyre::eyre!("Failed to create terminal: {e}"));
        }
    };

    if let Err(e) = terminal.clear() {
        eprintln!("Warning: Failed to clear terminal: {e}");
        // Not fatal, continue
    }

    if let Err(e) = execute!(std::io::stdout(), cursor::Hide) {
        eprintln!("Warning: Failed to hide cursor: {e}");
        // Not fatal, continue
    }

    Ok(terminal)
}

/// Restore terminal state, logging rather than failing on the way out.
pub fn cleanup(raw_mode: bool, alternate_screen: bool) {
    let mut stdout_handle = stdout();

    // Always try to show the cursor first; it works in both screens.
    if let Err(e) = execute!(stdout_handle, cursor::Show) {
        eprintln!("Warning: Failed to show cursor: {e}");
    }

    if alternate_screen {
        if let Err(e) = execute!(stdout_handle, LeaveAlternateScreen) {
            eprintln!("Warning: Failed to leave alternate screen: {e}");
        }
    }

    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            eprintln!("Warning: Failed to disable raw mode: {e}");
        }
    }

    // Force a newline so the shell prompt lands cleanly.
    let _ = execute!(stdout_handle, cursor::MoveToNextLine(1));
    let _ = stdout_handle.flush();
}

//! OS integration: hand URLs to the desktop environment.

use std::process::Command;

/// Open `url` with the default browser.
pub fn open_url(url: &str) -> Result<(), String> {
    // Use xdg-open on Linux
    Command::new("xdg-open")
        .arg(url)
        .spawn()
        .map_err(|e| format!("Failed to open {}: {}", url, e))?;
    Ok(())
}

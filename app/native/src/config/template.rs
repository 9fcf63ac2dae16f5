//! Configuration template generation.
//!
//! Generates a commented configuration template listing every option with
//! its default value.

use std::fs;
use std::path::Path;

/// Generates a configuration template with every option at its default.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// Token Animation Configuration File
// ==================================
// This file uses JSONC format (JSON with comments).
// Every option below is set to its default value.
// The file is read again before every movement, so edits apply right away.
//
// Documentation: https://github.com/ruipin/token-animation

{
  // ============================================================================
  // World Settings (shared by every client)
  // ============================================================================
  "world": {
    // Whether to animate tokens on drag and drop.
    // If disabled, token movement resolves instantly.
    "animate": true,

    // Modifier key that disables animation while held when a token is released.
    // One of: "none", "ctrl", "alt", "shift".
    "modifier-disables-animation": "none",

    // Token animations are skipped when the movement covers at least this
    // many grid spaces. Use 0 to disable.
    "distance-threshold": 0,

    // Token animations are skipped when they would take longer than this
    // many milliseconds. Use 0 to disable.
    "duration-threshold": 0,

    // Token animations are sped up if they would take more than this many
    // milliseconds to complete. Use 0 to disable.
    "duration-cap": 0,

    // Token animation speed in grid spaces per second.
    // Use 0 for the host's native speed.
    "speed": 0
  },

  // ============================================================================
  // Client Settings (local to this client)
  // ============================================================================
  "client": {
    // Whether to animate tokens on this client.
    "animate-client": true
  }
}
"#
    .to_string()
}

/// Writes the configuration template to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directories or the file cannot be created.
pub fn create_config_file(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_config_template())
}

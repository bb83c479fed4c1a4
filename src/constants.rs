//! Global constants used throughout the i18n-typegen codebase.
//!
//! Default names for the generated declaration block, file-name conventions,
//! and timing parameters for watch mode live here so they are discoverable in
//! one place.

use std::time::Duration;

/// Namespace enclosing the generated interface when none is configured.
pub const DEFAULT_NAMESPACE: &str = "Localization";

/// Interface name holding the localization keys when none is configured.
pub const DEFAULT_INTERFACE: &str = "Messages";

/// Project configuration file, searched from the working directory upwards.
pub const CONFIG_FILE_NAME: &str = "typegen.toml";

/// Output file used when neither the CLI nor the configuration names one.
pub const DEFAULT_OUTPUT_FILE: &str = "i18n.d.ts";

/// One indentation level in generated declarations.
pub const INDENT: &str = "  ";

/// Trailing line that turns a global declaration file into a module.
pub const EXPORTS_MARKER: &str = "export {};";

/// Locale file extensions recognized by directory sources.
pub const LOCALE_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "toml"];

/// Polling interval for `generate --watch` (500ms).
///
/// Fingerprinting a source reads every locale file, so the interval trades
/// responsiveness against disk activity.
pub const DEFAULT_WATCH_INTERVAL: Duration = Duration::from_millis(500);

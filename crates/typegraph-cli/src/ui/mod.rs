//! Terminal UI utilities: spinner, status messages and formatting.
//!
//! Everything here writes to stderr. Stdout is reserved for the JSON
//! document so it can be piped.
//!
//! # Examples
//!
//! ```no_run
//! use typegraph_cli::ui;
//!
//! ui::init_colors(false);
//!
//! let spinner = ui::Spinner::new("Resolving types...");
//! spinner.finish("Resolved 12 types");
//!
//! ui::success("Closure written");
//! ```

mod format;
mod messages;
mod spinner;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, format_size, pluralize};
pub use messages::{info, success};
pub use spinner::Spinner;

static COLORS: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled.
///
/// NO_COLOR wins over FORCE_COLOR; otherwise colors follow whether stderr
/// is attended by a user.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support. `no_color` comes from the `--no-color` flag.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    COLORS.store(enabled, Ordering::Relaxed);
    console::set_colors_enabled_stderr(enabled);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

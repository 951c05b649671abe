//! Log output for the simulator.
//!
//! Events go to stdout, interleaved with the rendered grid, so `-v fatal`
//! is the way to get clean output.

use crate::cli::Verbosity;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber at the requested verbosity.
///
/// Output: stdout, compact format, no module targets, colour only on a terminal.
pub fn init(verbosity: Verbosity) {
    tracing_subscriber::registry()
        .with(verbosity.level_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(std::io::stdout().is_terminal())
                .with_target(false)
                .compact(),
        )
        .init();
}

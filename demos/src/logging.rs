// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g. `"debug"` or
/// `"sierpinski_canvas=trace,warn"`.
#[derive(Debug, Clone)]
pub(crate) struct LoggingConfig {
    pub(crate) env_filter: Option<String>,
    pub(crate) write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
///
/// Precedence: explicit filter, then `RUST_LOG`, then `warn`.
pub(crate) fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        // Logs go to stderr; stdout may carry the SVG.
        builder.target(env_logger::Target::Stderr);
        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}

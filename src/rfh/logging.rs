// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// File: logging.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! `env_logger` setup for the `rfh` binary. Log records go to stderr so
//! digest lines on stdout stay pipeable.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Map `-q` / `-v` counts onto a default filter level.
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
	if quiet {
		return LevelFilter::Warn;
	}
	match verbosity {
		0 => LevelFilter::Info,
		1 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Install the global logger. An explicit `RUST_LOG` wins over the
/// level derived from the command line.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
	let env = Env::default().default_filter_or(level.as_str());
	Builder::from_env(env)
		.format_timestamp_millis()
		.format_target(false)
		.try_init()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quiet_overrides_verbosity() {
		assert_eq!(level_for(3, true), LevelFilter::Warn);
	}

	#[test]
	fn verbosity_steps_up() {
		assert_eq!(level_for(0, false), LevelFilter::Info);
		assert_eq!(level_for(1, false), LevelFilter::Debug);
		assert_eq!(level_for(5, false), LevelFilter::Trace);
	}
}

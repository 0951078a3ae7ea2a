// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Error types shared by the engine, the registry and the CLI.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Precondition failures detected before the engine touches the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
	#[error("empty file path")]
	EmptyPath,
	#[error("file does not exist")]
	MissingFile,
	#[error("no hash algorithms provided")]
	EmptySelection,
	#[error("invalid buffer size")]
	InvalidBufferSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoStage {
	Open,
	Read,
}

impl fmt::Display for IoStage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			IoStage::Open => write!(f, "open"),
			IoStage::Read => write!(f, "read"),
		}
	}
}

/// Terminal failure of a single hashing run.
#[derive(Debug, Error)]
pub enum HashingError {
	#[error("invalid input: {0}")]
	InvalidInput(#[from] InvalidInput),
	#[error("failed to {stage} `{}`: {source}", .path.display())]
	Io {
		stage: IoStage,
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl HashingError {
	pub(crate) fn io(
		stage: IoStage,
		path: impl Into<PathBuf>,
		source: io::Error,
	) -> Self {
		HashingError::Io {
			stage,
			path: path.into(),
			source,
		}
	}

	pub fn invalid_input(&self) -> Option<InvalidInput> {
		match self {
			HashingError::InvalidInput(kind) => Some(*kind),
			HashingError::Io { .. } => None,
		}
	}

	pub fn io_stage(&self) -> Option<IoStage> {
		match self {
			HashingError::Io { stage, .. } => Some(*stage),
			HashingError::InvalidInput(_) => None,
		}
	}
}

/// Returned by the registry for names it does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported hash algorithm: {name}")]
pub struct UnknownAlgorithm {
	pub name: String,
}

impl UnknownAlgorithm {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

/// Failures surfaced by the CLI command handlers.
#[derive(Debug, Error)]
pub enum CommandError {
	#[error("error hashing file `{}`: {source}", .path.display())]
	Hashing {
		path: PathBuf,
		#[source]
		source: HashingError,
	},
	#[error("failed to write output: {0}")]
	Output(#[from] io::Error),
	#[error("failed to initialize logger: {0}")]
	Logger(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_input_messages_match_cli_wording() {
		assert_eq!(InvalidInput::EmptyPath.to_string(), "empty file path");
		assert_eq!(
			InvalidInput::MissingFile.to_string(),
			"file does not exist"
		);
		assert_eq!(
			InvalidInput::EmptySelection.to_string(),
			"no hash algorithms provided"
		);
		assert_eq!(
			InvalidInput::InvalidBufferSize.to_string(),
			"invalid buffer size"
		);
	}

	#[test]
	fn io_error_keeps_source_and_path() {
		use std::error::Error as _;
		let err = HashingError::io(
			IoStage::Read,
			"/tmp/data.bin",
			io::Error::new(io::ErrorKind::UnexpectedEof, "short read"),
		);
		assert_eq!(err.io_stage(), Some(IoStage::Read));
		assert!(err.invalid_input().is_none());
		assert_eq!(
			err.to_string(),
			"failed to read `/tmp/data.bin`: short read"
		);
		assert!(err.source().is_some());
	}

	#[test]
	fn unknown_algorithm_names_the_input() {
		let err = UnknownAlgorithm::new("MICKEYMOUSE");
		assert_eq!(
			err.to_string(),
			"unsupported hash algorithm: MICKEYMOUSE"
		);
	}
}

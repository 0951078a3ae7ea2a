// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// File: commands.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::rfh::digest::Registry;
use crate::rfh::engine::{
	compute_digests, AlgorithmSelection, FanOut, HashingRequest,
	DEFAULT_BUFFER_SIZE,
};
use crate::rfh::error::{CommandError, UnknownAlgorithm};
use std::io::Write;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct CalculateOptions {
	pub path: PathBuf,
	pub algorithms: Vec<String>,
	pub buffer_size: usize,
	pub fan_out: FanOut,
	pub hash_only: bool,
}

impl CalculateOptions {
	pub fn new(
		path: impl Into<PathBuf>,
		algorithms: impl IntoIterator<Item = impl Into<String>>,
	) -> Self {
		Self {
			path: path.into(),
			algorithms: algorithms.into_iter().map(Into::into).collect(),
			buffer_size: DEFAULT_BUFFER_SIZE,
			fan_out: FanOut::Sequential,
			hash_only: false,
		}
	}
}

/// Printed with `list --details` and in the help text. Some other tools
/// emit only 16 bytes under these names.
pub const BLAKE_224_NOTE: &str =
	"note: BLAKE2B_224 and BLAKE3_224 emit 28-byte digests (full 224 bits)";

#[derive(Clone, Copy, Debug, Default)]
pub struct ListOptions {
	pub details: bool,
}

/// Resolve requested names in order. Unknown names are returned
/// separately and left out of the selection.
pub fn resolve_selection<S: AsRef<str>>(
	registry: &Registry,
	names: &[S],
) -> (AlgorithmSelection, Vec<UnknownAlgorithm>) {
	let mut selection = AlgorithmSelection::new();
	let mut unknown = Vec::new();
	for name in names {
		let name = name.as_ref().trim();
		if name.is_empty() {
			continue;
		}
		match registry.resolve(name) {
			Ok(accumulator) => selection.push(name, accumulator),
			Err(err) => unknown.push(err),
		}
	}
	(selection, unknown)
}

/// Hash one file and write `<name>: <digest>` lines in request order.
pub fn calculate<W: Write>(
	registry: &Registry,
	options: &CalculateOptions,
	out: &mut W,
) -> Result<(), CommandError> {
	let (mut selection, unknown) =
		resolve_selection(registry, options.algorithms.as_slice());
	for err in &unknown {
		log::warn!("{}, skipping", err);
	}
	log::debug!(
		"hashing {} with [{}] (buffer {} bytes, {:?} fan-out)",
		options.path.display(),
		selection.labels().collect::<Vec<_>>().join(", "),
		options.buffer_size,
		options.fan_out
	);

	let request = HashingRequest::new(&options.path, &mut selection)
		.buffer_size(options.buffer_size)
		.fan_out(options.fan_out);
	let result = compute_digests(request).map_err(|source| {
		CommandError::Hashing {
			path: options.path.clone(),
			source,
		}
	})?;

	for (label, digest) in result.labelled(&selection) {
		if options.hash_only {
			writeln!(out, "{}", digest)?;
		} else {
			writeln!(out, "{}: {}", label, digest)?;
		}
	}
	Ok(())
}

pub fn list<W: Write>(
	registry: &Registry,
	options: &ListOptions,
	out: &mut W,
) -> Result<(), CommandError> {
	for meta in registry.algorithms() {
		if options.details {
			let kind = if meta.cryptographic {
				""
			} else {
				" non-cryptographic"
			};
			writeln!(
				out,
				"{} {} bits{}",
				meta.identifier, meta.output_bits, kind
			)?;
		} else {
			writeln!(out, "{}", meta.identifier)?;
		}
	}
	if options.details {
		writeln!(out, "\n{}", BLAKE_224_NOTE)?;
	}
	Ok(())
}

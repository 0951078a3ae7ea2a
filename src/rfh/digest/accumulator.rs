// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// File: accumulator.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

/// Incremental digest state for one algorithm over one input stream.
///
/// Implementations must be usable for another pass after `finalize`
/// or `reset`: callers own accumulators and may hand the same instance
/// to the engine more than once.
pub trait Accumulator: Send {
	/// Discard any absorbed input and return to the empty state.
	fn reset(&mut self);

	/// Absorb the next chunk of input.
	fn update(&mut self, data: &[u8]);

	/// Produce the digest of everything absorbed since the last reset,
	/// leaving the accumulator reset.
	fn finalize(&mut self) -> Vec<u8>;

	/// Digest length in bytes.
	fn output_size(&self) -> usize;
}

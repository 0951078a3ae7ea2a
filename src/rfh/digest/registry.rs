// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// File: registry.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Registry definitions for digest algorithms: factory dispatch and
//! metadata helpers shared by the CLI and the tests.
//!
//! A [`Registry`] is an ordinary value. The CLI builds the built-in one
//! once at startup and passes it to the command handlers; tests can
//! assemble their own from any set of [`DigestAlgorithm`] entries.

use super::accumulator::Accumulator;
use super::{blake3, checksum, classic};
use crate::rfh::error::UnknownAlgorithm;

pub type AccumulatorFactory = fn() -> Box<dyn Accumulator>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmMetadata {
	pub identifier: &'static str,
	pub output_bits: usize,
	pub cryptographic: bool,
}

impl AlgorithmMetadata {
	pub const fn new(
		identifier: &'static str,
		output_bits: usize,
		cryptographic: bool,
	) -> Self {
		Self {
			identifier,
			output_bits,
			cryptographic,
		}
	}

	pub const fn cryptographic(
		identifier: &'static str,
		output_bits: usize,
	) -> Self {
		Self::new(identifier, output_bits, true)
	}

	pub const fn checksum(
		identifier: &'static str,
		output_bits: usize,
	) -> Self {
		Self::new(identifier, output_bits, false)
	}

	pub fn matches(&self, name: &str) -> bool {
		self.identifier.eq_ignore_ascii_case(name.trim())
	}
}

#[derive(Clone, Copy, Debug)]
pub struct DigestAlgorithm {
	pub metadata: AlgorithmMetadata,
	pub factory: AccumulatorFactory,
}

impl DigestAlgorithm {
	pub const fn new(
		metadata: AlgorithmMetadata,
		factory: AccumulatorFactory,
	) -> Self {
		Self { metadata, factory }
	}

	pub fn create(&self) -> Box<dyn Accumulator> {
		(self.factory)()
	}
}

#[derive(Clone, Debug)]
pub struct Registry {
	algorithms: Vec<DigestAlgorithm>,
}

impl Registry {
	pub fn new(
		algorithms: impl IntoIterator<Item = DigestAlgorithm>,
	) -> Self {
		Self {
			algorithms: algorithms.into_iter().collect(),
		}
	}

	/// Every algorithm shipped with rustfilehash.
	pub fn builtin() -> Self {
		Self::new(
			checksum::catalog()
				.iter()
				.chain(classic::catalog().iter())
				.chain(blake3::catalog().iter())
				.copied(),
		)
	}

	pub fn algorithms(
		&self,
	) -> impl Iterator<Item = &AlgorithmMetadata> + '_ {
		self.algorithms.iter().map(|alg| &alg.metadata)
	}

	pub fn names(&self) -> Vec<&'static str> {
		self.algorithms().map(|meta| meta.identifier).collect()
	}

	pub fn len(&self) -> usize {
		self.algorithms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.algorithms.is_empty()
	}

	pub fn find(&self, name: &str) -> Option<&DigestAlgorithm> {
		self.algorithms.iter().find(|alg| alg.metadata.matches(name))
	}

	/// Case-insensitive lookup returning a fresh accumulator.
	pub fn resolve(
		&self,
		name: &str,
	) -> Result<Box<dyn Accumulator>, UnknownAlgorithm> {
		self.find(name)
			.map(DigestAlgorithm::create)
			.ok_or_else(|| UnknownAlgorithm::new(name))
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::builtin()
	}
}

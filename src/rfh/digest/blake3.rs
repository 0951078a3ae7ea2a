// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// File: blake3.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! BLAKE3 accumulators. Lengths other than 256 bits are read from the
//! extendable output, so every variant shares its prefix with BLAKE3_256.

use super::accumulator::Accumulator;
use super::registry::{AlgorithmMetadata, DigestAlgorithm};

pub fn catalog() -> &'static [DigestAlgorithm] {
	const ALGORITHMS: &[DigestAlgorithm] = &[
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("BLAKE3_224", 224),
			create::<28>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("BLAKE3_256", 256),
			create::<32>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("BLAKE3_384", 384),
			create::<48>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("BLAKE3_512", 512),
			create::<64>,
		),
	];
	ALGORITHMS
}

pub struct Blake3Accumulator {
	hasher: blake3::Hasher,
	output_len: usize,
}

impl Blake3Accumulator {
	pub fn new(output_len: usize) -> Self {
		Self {
			hasher: blake3::Hasher::new(),
			output_len,
		}
	}
}

impl Accumulator for Blake3Accumulator {
	fn reset(&mut self) {
		self.hasher.reset();
	}

	fn update(&mut self, data: &[u8]) {
		self.hasher.update(data);
	}

	fn finalize(&mut self) -> Vec<u8> {
		let mut output = vec![0u8; self.output_len];
		self.hasher.finalize_xof().fill(&mut output);
		self.hasher.reset();
		output
	}

	fn output_size(&self) -> usize {
		self.output_len
	}
}

fn create<const LEN: usize>() -> Box<dyn Accumulator> {
	Box::new(Blake3Accumulator::new(LEN))
}

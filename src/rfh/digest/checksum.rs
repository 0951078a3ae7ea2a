// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// File: checksum.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Non-cryptographic checksums: CRC-32, CRC-64 and the xxHash family.
//! Integer results are emitted big-endian (canonical form).

use super::accumulator::Accumulator;
use super::registry::{AlgorithmMetadata, DigestAlgorithm};
use crc::{Crc, CRC_64_XZ};
use xxhash_rust::xxh3::Xxh3;
use xxhash_rust::xxh32::Xxh32;
use xxhash_rust::xxh64::Xxh64;

/// ECMA-182 polynomial, reflected, with inverted init and output.
static CRC64: Crc<u64> = Crc::<u64>::new(&CRC_64_XZ);

const XXH_SEED: u64 = 0;

pub fn catalog() -> &'static [DigestAlgorithm] {
	const ALGORITHMS: &[DigestAlgorithm] = &[
		DigestAlgorithm::new(
			AlgorithmMetadata::checksum("XXH_32", 32),
			create_xxh32,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::checksum("XXH_64", 64),
			create_xxh64,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::checksum("XXH3_64", 64),
			create_xxh3_64,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::checksum("XXH3_128", 128),
			create_xxh3_128,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::checksum("CRC_32", 32),
			create_crc32,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::checksum("CRC_64", 64),
			create_crc64,
		),
	];
	ALGORITHMS
}

#[derive(Default)]
pub struct Crc32Accumulator(crc32fast::Hasher);

impl Accumulator for Crc32Accumulator {
	fn reset(&mut self) {
		self.0.reset();
	}

	fn update(&mut self, data: &[u8]) {
		self.0.update(data);
	}

	fn finalize(&mut self) -> Vec<u8> {
		std::mem::take(&mut self.0)
			.finalize()
			.to_be_bytes()
			.to_vec()
	}

	fn output_size(&self) -> usize {
		4
	}
}

pub struct Crc64Accumulator(crc::Digest<'static, u64>);

impl Default for Crc64Accumulator {
	fn default() -> Self {
		Self(CRC64.digest())
	}
}

impl Accumulator for Crc64Accumulator {
	fn reset(&mut self) {
		self.0 = CRC64.digest();
	}

	fn update(&mut self, data: &[u8]) {
		self.0.update(data);
	}

	fn finalize(&mut self) -> Vec<u8> {
		std::mem::replace(&mut self.0, CRC64.digest())
			.finalize()
			.to_be_bytes()
			.to_vec()
	}

	fn output_size(&self) -> usize {
		8
	}
}

pub struct Xxh32Accumulator(Xxh32);

impl Default for Xxh32Accumulator {
	fn default() -> Self {
		Self(Xxh32::new(XXH_SEED as u32))
	}
}

impl Accumulator for Xxh32Accumulator {
	fn reset(&mut self) {
		self.0.reset(XXH_SEED as u32);
	}

	fn update(&mut self, data: &[u8]) {
		self.0.update(data);
	}

	fn finalize(&mut self) -> Vec<u8> {
		let value = self.0.digest();
		self.reset();
		value.to_be_bytes().to_vec()
	}

	fn output_size(&self) -> usize {
		4
	}
}

pub struct Xxh64Accumulator(Xxh64);

impl Default for Xxh64Accumulator {
	fn default() -> Self {
		Self(Xxh64::new(XXH_SEED))
	}
}

impl Accumulator for Xxh64Accumulator {
	fn reset(&mut self) {
		self.0.reset(XXH_SEED);
	}

	fn update(&mut self, data: &[u8]) {
		self.0.update(data);
	}

	fn finalize(&mut self) -> Vec<u8> {
		let value = self.0.digest();
		self.reset();
		value.to_be_bytes().to_vec()
	}

	fn output_size(&self) -> usize {
		8
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Xxh3Width {
	Bits64,
	Bits128,
}

pub struct Xxh3Accumulator {
	hasher: Xxh3,
	width: Xxh3Width,
}

impl Xxh3Accumulator {
	pub fn new(width: Xxh3Width) -> Self {
		Self {
			hasher: Xxh3::new(),
			width,
		}
	}
}

impl Accumulator for Xxh3Accumulator {
	fn reset(&mut self) {
		self.hasher.reset();
	}

	fn update(&mut self, data: &[u8]) {
		self.hasher.update(data);
	}

	fn finalize(&mut self) -> Vec<u8> {
		let output = match self.width {
			Xxh3Width::Bits64 => {
				self.hasher.digest().to_be_bytes().to_vec()
			}
			Xxh3Width::Bits128 => {
				self.hasher.digest128().to_be_bytes().to_vec()
			}
		};
		self.hasher.reset();
		output
	}

	fn output_size(&self) -> usize {
		match self.width {
			Xxh3Width::Bits64 => 8,
			Xxh3Width::Bits128 => 16,
		}
	}
}

fn create_xxh32() -> Box<dyn Accumulator> {
	Box::new(Xxh32Accumulator::default())
}

fn create_xxh64() -> Box<dyn Accumulator> {
	Box::new(Xxh64Accumulator::default())
}

fn create_xxh3_64() -> Box<dyn Accumulator> {
	Box::new(Xxh3Accumulator::new(Xxh3Width::Bits64))
}

fn create_xxh3_128() -> Box<dyn Accumulator> {
	Box::new(Xxh3Accumulator::new(Xxh3Width::Bits128))
}

fn create_crc32() -> Box<dyn Accumulator> {
	Box::new(Crc32Accumulator::default())
}

fn create_crc64() -> Box<dyn Accumulator> {
	Box::new(Crc64Accumulator::default())
}

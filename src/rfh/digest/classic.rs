// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// File: classic.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Fixed-output RustCrypto digests (MD, SHA-1/2/3, BLAKE2b, Whirlpool,
//! RIPEMD) behind a single `DynDigest` adapter.

use super::accumulator::Accumulator;
use super::registry::{AlgorithmMetadata, DigestAlgorithm};
use blake2::Blake2b;
use digest::consts::{U28, U32, U48, U64};
use digest::DynDigest;

pub fn catalog() -> &'static [DigestAlgorithm] {
	const ALGORITHMS: &[DigestAlgorithm] = &[
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("MD4", 128),
			create::<md4::Md4>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("MD5", 128),
			create::<md5::Md5>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("SHA1", 160),
			create::<sha1::Sha1>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("SHA2_224", 224),
			create::<sha2::Sha224>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("SHA2_256", 256),
			create::<sha2::Sha256>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("SHA2_384", 384),
			create::<sha2::Sha384>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("SHA2_512", 512),
			create::<sha2::Sha512>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("SHA2_512/224", 224),
			create::<sha2::Sha512_224>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("SHA2_512/256", 256),
			create::<sha2::Sha512_256>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("SHA3_224", 224),
			create::<sha3::Sha3_224>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("SHA3_256", 256),
			create::<sha3::Sha3_256>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("SHA3_384", 384),
			create::<sha3::Sha3_384>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("SHA3_512", 512),
			create::<sha3::Sha3_512>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("BLAKE2B_224", 224),
			create::<Blake2b<U28>>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("BLAKE2B_256", 256),
			create::<Blake2b<U32>>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("BLAKE2B_384", 384),
			create::<Blake2b<U48>>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("BLAKE2B_512", 512),
			create::<Blake2b<U64>>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("WHIRLPOOL", 512),
			create::<whirlpool::Whirlpool>,
		),
		DigestAlgorithm::new(
			AlgorithmMetadata::cryptographic("RIPEMD160", 160),
			create::<ripemd::Ripemd160>,
		),
	];
	ALGORITHMS
}

/// Adapter from any RustCrypto digest to [`Accumulator`].
pub struct DigestAccumulator {
	inner: Box<dyn DynDigest + Send>,
}

impl DigestAccumulator {
	pub fn new<D>(digest: D) -> Self
	where
		D: DynDigest + Send + 'static,
	{
		Self {
			inner: Box::new(digest),
		}
	}
}

impl Accumulator for DigestAccumulator {
	fn reset(&mut self) {
		self.inner.reset();
	}

	fn update(&mut self, data: &[u8]) {
		self.inner.update(data);
	}

	fn finalize(&mut self) -> Vec<u8> {
		self.inner.finalize_reset().into_vec()
	}

	fn output_size(&self) -> usize {
		self.inner.output_size()
	}
}

fn create<D>() -> Box<dyn Accumulator>
where
	D: DynDigest + Default + Send + 'static,
{
	Box::new(DigestAccumulator::new(D::default()))
}

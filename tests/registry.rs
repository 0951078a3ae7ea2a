// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash

use rustfilehash::rfh::digest::{
	Accumulator, AlgorithmMetadata, DigestAlgorithm, Registry,
};

struct ConstantAccumulator;

impl Accumulator for ConstantAccumulator {
	fn reset(&mut self) {}

	fn update(&mut self, _data: &[u8]) {}

	fn finalize(&mut self) -> Vec<u8> {
		vec![0xab, 0xcd]
	}

	fn output_size(&self) -> usize {
		2
	}
}

fn create_constant() -> Box<dyn Accumulator> {
	Box::new(ConstantAccumulator)
}

#[test]
fn builtin_names_are_case_insensitive() {
	let registry = Registry::builtin();
	for name in registry.names() {
		assert!(registry.resolve(&name.to_lowercase()).is_ok(), "{name}");
	}
}

#[test]
fn unknown_names_do_not_poison_the_registry() {
	let registry = Registry::builtin();
	assert!(registry.resolve("SHA4_256").is_err());
	assert!(registry.resolve("sha3_256").is_ok());
}

#[test]
fn registries_can_be_built_from_custom_entries() {
	let registry = Registry::new([DigestAlgorithm::new(
		AlgorithmMetadata::checksum("CONST_16", 16),
		create_constant,
	)]);
	assert_eq!(registry.names(), vec!["CONST_16"]);
	let mut acc = registry.resolve("const_16").expect("custom entry");
	acc.update(b"ignored");
	assert_eq!(acc.finalize(), vec![0xab, 0xcd]);
	assert!(registry.resolve("MD5").is_err());
}

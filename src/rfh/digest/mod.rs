// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// Module: digest (accumulators and algorithm registry)
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Digest accumulators and the registry that maps algorithm names to them.
//! Each family module contributes a `catalog()`; `registry` chains them.

pub mod accumulator;
pub mod blake3;
pub mod checksum;
pub mod classic;
pub mod registry;

pub use accumulator::Accumulator;
pub use registry::{AlgorithmMetadata, DigestAlgorithm, Registry};

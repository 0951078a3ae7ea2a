// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

pub mod rfh {
	pub mod app;
	pub mod commands;
	pub mod digest;
	pub mod engine;
	pub mod error;
	pub mod logging;
}

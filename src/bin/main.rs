// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// File: main.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use rustfilehash::rfh::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	app::run()?;
	Ok(())
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// File: engine.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Streaming multi-digest engine.
//!
//! A file is read once through a single reusable buffer and every chunk
//! is handed to each selected accumulator before the next read. The
//! engine never logs and never exits; callers decide how to report a
//! [`HashingError`].

use crate::rfh::digest::Accumulator;
use crate::rfh::error::{HashingError, InvalidInput, IoStage};
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

pub const DEFAULT_BUFFER_SIZE: usize = 1 << 20;

/// How a chunk is distributed over the selected accumulators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FanOut {
	#[default]
	Sequential,
	/// Update accumulators on the rayon pool. Each chunk is fully
	/// delivered before the next read.
	Parallel,
}

pub struct SelectedAlgorithm {
	label: String,
	accumulator: Box<dyn Accumulator>,
}

impl SelectedAlgorithm {
	pub fn label(&self) -> &str {
		&self.label
	}
}

/// Ordered (label, accumulator) pairs for one invocation.
#[derive(Default)]
pub struct AlgorithmSelection {
	entries: Vec<SelectedAlgorithm>,
}

impl AlgorithmSelection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(
		&mut self,
		label: impl Into<String>,
		accumulator: Box<dyn Accumulator>,
	) {
		self.entries.push(SelectedAlgorithm {
			label: label.into(),
			accumulator,
		});
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
		self.entries.iter().map(SelectedAlgorithm::label)
	}

	fn reset(&mut self) {
		for entry in &mut self.entries {
			entry.accumulator.reset();
		}
	}

	fn deliver(&mut self, chunk: &[u8], fan_out: FanOut) {
		match fan_out {
			FanOut::Parallel if self.entries.len() > 1 => {
				self.entries.par_iter_mut().for_each(|entry| {
					entry.accumulator.update(chunk)
				});
			}
			_ => {
				for entry in &mut self.entries {
					entry.accumulator.update(chunk);
				}
			}
		}
	}

	fn finalize(&mut self) -> HashingResult {
		let digests = self
			.entries
			.iter_mut()
			.map(|entry| hex::encode(entry.accumulator.finalize()))
			.collect();
		HashingResult { digests }
	}
}

impl<L: Into<String>> FromIterator<(L, Box<dyn Accumulator>)>
	for AlgorithmSelection
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (L, Box<dyn Accumulator>)>,
	{
		let mut selection = Self::new();
		for (label, accumulator) in iter {
			selection.push(label, accumulator);
		}
		selection
	}
}

pub struct HashingRequest<'a> {
	path: &'a Path,
	selection: &'a mut AlgorithmSelection,
	buffer_size: usize,
	fan_out: FanOut,
}

impl<'a> HashingRequest<'a> {
	pub fn new<P>(
		path: &'a P,
		selection: &'a mut AlgorithmSelection,
	) -> Self
	where
		P: AsRef<Path> + ?Sized,
	{
		Self {
			path: path.as_ref(),
			selection,
			buffer_size: DEFAULT_BUFFER_SIZE,
			fan_out: FanOut::default(),
		}
	}

	pub fn buffer_size(mut self, buffer_size: usize) -> Self {
		self.buffer_size = buffer_size;
		self
	}

	pub fn fan_out(mut self, fan_out: FanOut) -> Self {
		self.fan_out = fan_out;
		self
	}
}

/// Lowercase hex digests, positionally aligned with the selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HashingResult {
	digests: Vec<String>,
}

impl HashingResult {
	pub fn len(&self) -> usize {
		self.digests.len()
	}

	pub fn is_empty(&self) -> bool {
		self.digests.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		self.digests.get(index).map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
		self.digests.iter().map(String::as_str)
	}

	pub fn as_slice(&self) -> &[String] {
		&self.digests
	}

	pub fn into_vec(self) -> Vec<String> {
		self.digests
	}

	/// Pair every digest with the label it was requested under.
	pub fn labelled<'s>(
		&'s self,
		selection: &'s AlgorithmSelection,
	) -> impl Iterator<Item = (&'s str, &'s str)> + 's {
		selection.labels().zip(self.iter())
	}
}

impl IntoIterator for HashingResult {
	type Item = String;
	type IntoIter = std::vec::IntoIter<String>;

	fn into_iter(self) -> Self::IntoIter {
		self.digests.into_iter()
	}
}

/// Hash the request's file with every selected algorithm in one pass.
///
/// Preconditions are checked in a fixed order before any I/O: non-empty
/// path, existing path (via metadata), non-empty selection, non-zero
/// buffer size. A buffer that cannot be allocated is reported as
/// [`InvalidInput::InvalidBufferSize`]. Accumulators are reset before the
/// file is opened.
pub fn compute_digests(
	request: HashingRequest<'_>,
) -> Result<HashingResult, HashingError> {
	let HashingRequest {
		path,
		selection,
		buffer_size,
		fan_out,
	} = request;

	if path.as_os_str().is_empty() {
		return Err(InvalidInput::EmptyPath.into());
	}
	if fs::metadata(path).is_err() {
		return Err(InvalidInput::MissingFile.into());
	}
	if selection.is_empty() {
		return Err(InvalidInput::EmptySelection.into());
	}
	if buffer_size < 1 {
		return Err(InvalidInput::InvalidBufferSize.into());
	}

	let mut buffer = allocate_buffer(buffer_size)
		.ok_or(InvalidInput::InvalidBufferSize)?;

	selection.reset();

	let file = File::open(path)
		.map_err(|err| HashingError::io(IoStage::Open, path, err))?;
	feed(file, selection, &mut buffer, fan_out)
		.map_err(|err| HashingError::io(IoStage::Read, path, err))?;

	Ok(selection.finalize())
}

/// Same pass as [`compute_digests`] over an arbitrary reader.
pub fn stream_reader<R: Read>(
	reader: R,
	selection: &mut AlgorithmSelection,
	buffer_size: usize,
	fan_out: FanOut,
) -> io::Result<HashingResult> {
	let mut buffer = allocate_buffer(buffer_size).ok_or_else(|| {
		io::Error::new(
			io::ErrorKind::InvalidInput,
			InvalidInput::InvalidBufferSize,
		)
	})?;
	selection.reset();
	feed(reader, selection, &mut buffer, fan_out)?;
	Ok(selection.finalize())
}

/// Zeroed read buffer, or `None` when `size` is zero or cannot be
/// reserved.
fn allocate_buffer(size: usize) -> Option<Vec<u8>> {
	if size < 1 {
		return None;
	}
	let mut buffer = Vec::new();
	buffer.try_reserve_exact(size).ok()?;
	buffer.resize(size, 0);
	Some(buffer)
}

fn feed<R: Read>(
	mut reader: R,
	selection: &mut AlgorithmSelection,
	buffer: &mut [u8],
	fan_out: FanOut,
) -> io::Result<()> {
	loop {
		let count = match reader.read(buffer) {
			Ok(0) => break,
			Ok(count) => count,
			Err(err) if err.kind() == io::ErrorKind::Interrupted => {
				continue
			}
			Err(err) => return Err(err),
		};
		selection.deliver(&buffer[..count], fan_out);
	}
	Ok(())
}

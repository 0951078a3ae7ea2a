// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

fn abc_file() -> NamedTempFile {
	let file = NamedTempFile::new().expect("temp file");
	fs::write(file.path(), b"abc").expect("write temp file");
	file
}

#[allow(deprecated)]
fn rfh() -> Command {
	Command::cargo_bin("rfh").expect("binary rfh available")
}

#[test]
fn calculate_prints_digests_in_request_order() {
	let file = abc_file();
	let assert = rfh()
		.arg("calculate")
		.arg(file.path())
		.arg("-a")
		.arg("SHA2_256,md5")
		.assert()
		.success();
	let stdout = String::from_utf8(assert.get_output().stdout.clone())
		.expect("stdout should be UTF-8");
	let lines: Vec<&str> = stdout.lines().collect();
	assert_eq!(
		lines,
		vec![
			"SHA2_256: ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
			"md5: 900150983cd24fb0d6963f7d28e17f72",
		]
	);
}

#[test]
fn unknown_algorithm_warns_and_continues() {
	let file = abc_file();
	rfh()
		.arg("calculate")
		.arg(file.path())
		.arg("--algorithms")
		.arg("md5,MICKEYMOUSE")
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"md5: 900150983cd24fb0d6963f7d28e17f72",
		))
		.stdout(predicate::str::contains("MICKEYMOUSE").not())
		.stderr(predicate::str::contains(
			"unsupported hash algorithm: MICKEYMOUSE",
		));
}

#[test]
fn missing_file_exits_with_failure() {
	let dir = tempfile::tempdir().expect("temp dir");
	rfh()
		.arg("calculate")
		.arg(dir.path().join("missing.bin"))
		.arg("-a")
		.arg("md5")
		.assert()
		.failure()
		.stdout(predicate::str::is_empty())
		.stderr(predicate::str::contains("file does not exist"));
}

#[test]
fn zero_buffer_size_is_fatal() {
	let file = abc_file();
	rfh()
		.arg("calculate")
		.arg(file.path())
		.arg("-a")
		.arg("md5")
		.arg("--buffer-size")
		.arg("0")
		.assert()
		.failure()
		.stderr(predicate::str::contains("invalid buffer size"));
}

#[test]
fn oversized_buffer_is_rejected_without_crashing() {
	let file = abc_file();
	rfh()
		.arg("calculate")
		.arg(file.path())
		.args(["-a", "md5", "--buffer-size"])
		.arg(usize::MAX.to_string())
		.assert()
		.failure()
		.code(1)
		.stdout(predicate::str::is_empty())
		.stderr(predicate::str::contains("invalid buffer size"));
}

#[test]
fn parallel_hash_only_output() {
	let file = abc_file();
	rfh()
		.args(["calculate", "--parallel", "--hash-only", "-a", "md5,crc_32"])
		.arg(file.path())
		.assert()
		.success()
		.stdout("900150983cd24fb0d6963f7d28e17f72\n352441c2\n");
}

#[test]
fn list_prints_one_name_per_line() {
	let assert = rfh().arg("list").assert().success();
	let stdout = String::from_utf8(assert.get_output().stdout.clone())
		.expect("stdout should be UTF-8");
	let names: Vec<&str> = stdout.lines().collect();
	assert_eq!(names.len(), 29);
	assert!(names.contains(&"BLAKE3_512"));
	assert!(names.contains(&"SHA2_512/256"));
}

#[test]
fn list_details_mention_224_bit_blake_widths() {
	rfh()
		.args(["list", "--details"])
		.assert()
		.success()
		.stdout(predicate::str::contains("BLAKE3_224 224 bits\n"))
		.stdout(predicate::str::contains(
			"BLAKE2B_224 and BLAKE3_224 emit 28-byte digests",
		));
}

#[test]
fn completions_are_generated() {
	rfh()
		.args(["completions", "bash"])
		.assert()
		.success()
		.stdout(predicate::str::contains("rfh"));
}

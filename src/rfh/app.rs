// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustfilehash
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::rfh::commands::{
	self, CalculateOptions, ListOptions, BLAKE_224_NOTE,
};
use crate::rfh::digest::Registry;
use crate::rfh::engine::FanOut;
use crate::rfh::error::CommandError;
use crate::rfh::logging;
use clap::{Arg, ArgAction};
use clap_complete::{generate, Generator, Shell};
use std::error::Error;
use std::io;
use std::path::PathBuf;

const BIN_NAME: &str = "rfh";
const DEFAULT_BUFFER_SIZE_ARG: &str = "1048576";

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Primary commands:
  rfh calculate <FILE> -a <names>   Hash a file with several algorithms in one pass
  rfh list                          Show the supported algorithm names
{usage-heading} {usage}

{all-args}{after-help}
";

pub fn build_cli() -> clap::Command {
	clap::Command::new(clap::crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name(BIN_NAME)
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("A simple, quick multi-digest file hasher")
		.subcommand_required(true)
		.arg_required_else_help(true)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.help("Increase log verbosity (repeatable)")
				.action(ArgAction::Count)
				.global(true),
		)
		.arg(
			Arg::new("quiet")
				.short('q')
				.long("quiet")
				.help("Only log warnings and errors")
				.action(ArgAction::SetTrue)
				.conflicts_with("verbose")
				.global(true),
		)
		.subcommand(
			clap::command!("calculate")
				.about("Calculates the hashes of a file in a single pass")
				.after_help(BLAKE_224_NOTE)
				.arg(
					Arg::new("file")
						.help("File to hash")
						.value_parser(clap::value_parser!(PathBuf))
						.required(true),
				)
				.arg(
					Arg::new("algorithms")
						.short('a')
						.long("algorithms")
						.help("Comma-separated list of hash algorithms to use (e.g., md5,sha1,sha2_256)")
						.value_delimiter(',')
						.action(ArgAction::Append)
						.required(true),
				)
				.arg(
					Arg::new("buffer-size")
						.long("buffer-size")
						.value_parser(clap::value_parser!(usize))
						.help("Read buffer size in bytes")
						.default_value(DEFAULT_BUFFER_SIZE_ARG),
				)
				.arg(
					Arg::new("parallel")
						.long("parallel")
						.help("Update the digests on a thread pool")
						.action(ArgAction::SetTrue),
				)
				.arg(
					Arg::new("hash-only")
						.long("hash-only")
						.help("Emit only digests without algorithm names")
						.action(ArgAction::SetTrue),
				),
		)
		.subcommand(
			clap::command!("list")
				.about("Lists the supported hash algorithms in registry order")
				.after_help(BLAKE_224_NOTE)
				.arg(
					Arg::new("details")
						.long("details")
						.help("Show output size and checksum tag")
						.action(ArgAction::SetTrue),
				),
		)
		.subcommand(
			clap::command!("completions")
				.about("Generate shell completions")
				.arg(
					Arg::new("shell")
						.value_parser(clap::value_parser!(Shell))
						.required(true),
				),
		)
}

fn calculate_options(args: &clap::ArgMatches) -> CalculateOptions {
	let path = args
		.get_one::<PathBuf>("file")
		.expect("file must be provided")
		.clone();
	let algorithms: Vec<String> = args
		.get_many::<String>("algorithms")
		.expect("algorithms must be provided")
		.cloned()
		.collect();
	let mut options = CalculateOptions::new(path, algorithms);
	options.buffer_size = *args
		.get_one::<usize>("buffer-size")
		.expect("buffer-size has default");
	if args.get_flag("parallel") {
		options.fan_out = FanOut::Parallel;
	}
	options.hash_only = args.get_flag("hash-only");
	options
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let capp = build_cli();
	let m = capp.get_matches();

	logging::init(logging::level_for(
		m.get_count("verbose"),
		m.get_flag("quiet"),
	))
	.map_err(CommandError::Logger)?;
	let registry = Registry::builtin();

	match m.subcommand() {
		Some(("calculate", args)) => {
			let options = calculate_options(args);
			let stdout = io::stdout();
			if let Err(err) =
				commands::calculate(&registry, &options, &mut stdout.lock())
			{
				log::error!("{}", err);
				std::process::exit(1);
			}
		}
		Some(("list", args)) => {
			let options = ListOptions {
				details: args.get_flag("details"),
			};
			commands::list(&registry, &options, &mut io::stdout().lock())?;
		}
		Some(("completions", args)) => {
			let shell = *args
				.get_one::<Shell>("shell")
				.expect("shell must be provided");
			print_completions(shell, &mut build_cli());
		}
		_ => {}
	}
	Ok(())
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
	generate(gen, cmd, BIN_NAME, &mut io::stdout());
}

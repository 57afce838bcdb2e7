use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use onoma_core::analysis::corpus::{self, AnalysisResults};
use onoma_core::config::AnalysisConfig;
use onoma_core::words::read_words;

/// Analyze a word list and write its structural statistics as JSON.
///
/// The output captures character n-gram frequencies, positional
/// frequencies and Markov transition tables, plus optional syllable and
/// onset/nucleus/coda tables, in a shape meant to be consumed by
/// procedural name generators.
#[derive(Debug, Parser)]
#[command(name = "onoma", version)]
struct Cli {
	/// Word list to analyze, one word per line ('#' starts a comment)
	#[arg(value_name = "FILE")]
	input: PathBuf,

	/// File the JSON statistics are written to
	#[arg(short, long, value_name = "FILE")]
	output: PathBuf,

	/// Highest Markov chain order to build (chains are built for every
	/// order up to this value)
	#[arg(
		long,
		value_name = "ORDER",
		default_value_t = 2,
		value_parser = clap::value_parser!(u8).range(1..=3)
	)]
	markov_order: u8,

	/// Skip words shorter than this many codepoints
	#[arg(
		long,
		value_name = "LENGTH",
		default_value_t = 2,
		value_parser = clap::value_parser!(u64).range(1..)
	)]
	min_length: u64,

	/// Also build syllable frequency tables and syllable Markov chains
	#[arg(long)]
	enable_syllables: bool,

	/// Also build onset/nucleus/coda component tables
	#[arg(long)]
	enable_components: bool,

	/// Increase verbosity
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8) {
	let log_level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
		.init();
}

/// Serializes the aggregate as pretty-printed JSON with a trailing
/// newline.
fn write_results(results: &AnalysisResults, path: &Path) -> anyhow::Result<()> {
	let file = File::create(path)
		.with_context(|| format!("failed to create output file {}", path.display()))?;
	let mut writer = BufWriter::new(file);
	serde_json::to_writer_pretty(&mut writer, results)?;
	writeln!(writer)?;
	writer.flush()?;
	Ok(())
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let config = AnalysisConfig {
		input_file: cli.input.display().to_string(),
		markov_order: cli.markov_order as usize,
		min_word_length: cli.min_length as usize,
		enable_syllables: cli.enable_syllables,
		enable_components: cli.enable_components,
	};

	log::info!("Reading word list from {}", cli.input.display());
	let words = read_words(&cli.input, config.min_word_length)?;
	log::info!("Loaded {} words", words.len());

	let results = corpus::analyze(&words, &config)?;
	log::debug!("Length distribution: {:?}", results.stats.length_distribution);
	if let Some(syllables) = &results.syllable_analysis {
		log::info!("Found {} unique syllables", syllables.all_syllables.len());
	}

	write_results(&results, &cli.output)?;
	println!("Analysis complete. Output written to {}", cli.output.display());

	Ok(())
}

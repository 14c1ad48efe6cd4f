use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

use window_gen_core::model::generation_target::GenerationTarget;
use window_gen_core::model::language_model::LanguageModel;

/// Seed used by `fixed` mode when `--seed` is not given.
const DEFAULT_SEED: u64 = 20;

/// How the random source of the model is seeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
	/// Seeded from the OS, output changes on every run.
	Random,
	/// Seeded with `--seed`, output is reproducible.
	Fixed,
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "window-gen", about = "Generate text from a sliding-window character model")]
struct Args {
	/// Number of characters in a window (> 0).
	window_length: usize,

	/// Text to extend. Must have at least WINDOW_LENGTH characters.
	initial_text: String,

	/// Number of characters to generate after the initial text.
	length: usize,

	/// Random source: `random` or `fixed`.
	#[clap(value_enum)]
	mode: Mode,

	/// Training corpus.
	corpus: PathBuf,

	/// Seed of the random source in `fixed` mode.
	#[clap(long, default_value_t = DEFAULT_SEED)]
	seed: u64,

	/// LENGTH is the total length of the output, initial text included.
	#[clap(long)]
	total: bool,

	/// Print the trained table to stderr before generating.
	#[clap(long)]
	dump: bool,
}

impl Args {
	fn target(&self) -> GenerationTarget {
		if self.total {
			GenerationTarget::Total(self.length)
		} else {
			GenerationTarget::Append(self.length)
		}
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

	let args = Args::parse();

	let mut model = match args.mode {
		Mode::Random => LanguageModel::new(args.window_length)?,
		Mode::Fixed => LanguageModel::seeded(args.window_length, args.seed)?,
	};

	model.train_file(&args.corpus)?;
	info!(
		"trained on {} ({} windows of length {})",
		args.corpus.display(),
		model.table().len(),
		model.window_length()
	);

	if args.dump {
		eprint!("{model}");
	}

	println!("{}", model.generate_with(&args.initial_text, args.target()));

	Ok(())
}

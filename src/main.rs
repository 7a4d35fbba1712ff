//! Wordle guesser - CLI
//!
//! Interactive assistant, self-play solver, benchmark and single-guess analysis.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use wordle_guesser::{
    commands::{
        SolveConfig, analyze_word, run_benchmark, run_play, sample_targets, solve_word,
    },
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{
        DEFAULT_EXHAUSTIVE_THRESHOLD, DEFAULT_WORD_LENGTH, Engine, SolverConfig, StrategyType,
    },
    wordlists::{self, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_guesser",
    about = "Wordle assistant that minimizes the expected number of remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Candidate count below which every guess is simulated exhaustively
    #[arg(short, long, global = true, default_value_t = DEFAULT_EXHAUSTIVE_THRESHOLD)]
    threshold: usize,

    /// Strategy: adaptive (default), exhaustive, heuristic
    #[arg(short, long, global = true, default_value = "adaptive")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Run the simulation on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Self-play against a known target word
    Solve {
        /// The target word to solve
        word: String,

        /// Maximum number of guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,

        /// Show candidate counts and strategy per turn
        #[arg(short = 'd', long)]
        details: bool,
    },

    /// Expected remaining candidates for one opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Self-play against randomly sampled targets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum number of guesses per target
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },
}

/// Load the dictionary named by the -w flag
fn load_dictionary(wordlist: &str, length: usize) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => match wordlists::embedded(length) {
            Some(words) => words,
            None => bail!("no embedded word list for {length}-letter words; pass -w <path>"),
        },
        path => load_from_file(path, length)
            .with_context(|| format!("failed to read word list {path}"))?,
    };
    log::info!("loaded {} {length}-letter words from {wordlist}", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let config = SolverConfig::new(cli.length)
        .with_threshold(cli.threshold)
        .with_parallel(!cli.sequential);
    config.validate()?;

    let dictionary = load_dictionary(&cli.wordlist, cli.length)?;
    let strategy = StrategyType::from_name(&cli.strategy, &config, &dictionary);
    let mut engine = Engine::with_strategy(config, dictionary, strategy)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&mut engine),
        Commands::Solve {
            word,
            max_guesses,
            details,
        } => {
            let config = SolveConfig::new(word).with_max_guesses(max_guesses);
            let result = solve_word(config, &mut engine)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(
                &word,
                engine.dictionary(),
                &engine.candidates(),
                engine.clue_state(),
            )?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            max_guesses,
        } => {
            println!("Running benchmark on {count} random words...");
            let targets = sample_targets(engine.dictionary(), count, seed);
            let result = run_benchmark(&mut engine, &targets, max_guesses, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

use anyhow::Result;
use clap::Parser;
use log::info;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use compound_anagrams::dictionary::{Dictionary, LoadOptions, LongWordPolicy, WordStore};
use compound_anagrams::errors::AnagramError;
use compound_anagrams::filter;
use compound_anagrams::letters::LetterMultiset;
use compound_anagrams::search::{SearchEngine, SearchOptions};
use compound_anagrams::{logging, render, source};

/// Find every combination of dictionary words that uses exactly the
/// letters of WORD.
///
/// The dictionary is first reduced to words made only of WORD's letters,
/// sorted longest first. A backtracking search then picks words in
/// dictionary order, consuming letters from a copy of WORD's letter counts,
/// and records every pick that uses up all letters.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The word to split (lowercase a-z)
    word: String,

    /// Word list, one word per line
    dictionary: PathBuf,

    /// Skip words longer than 99 letters instead of failing
    #[arg(long)]
    skip_long_words: bool,

    /// Search opening words in parallel
    #[arg(long)]
    parallel: bool,

    /// Evaluate every word instead of jumping over words that are too long
    #[arg(long)]
    no_skip_ahead: bool,

    /// Print search counters to stderr
    #[arg(long)]
    stats: bool,

    /// Enable debug logging (also enabled by ANAGRAMS_DEBUG)
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print().ok();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let debug_enabled = cli.debug || std::env::var("ANAGRAMS_DEBUG").is_ok();
    logging::init_logger(debug_enabled);

    if let Err(e) = try_main(&cli) {
        if let Some(err) = e.downcast_ref::<AnagramError>() {
            eprintln!("Error: {}", err.display_detailed());
        } else {
            eprintln!("Error: {e:#}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    // Reject a bad target before touching the word list.
    let target = LetterMultiset::from_word(&cli.word)?;

    let t_load = Instant::now();
    let load_options = LoadOptions {
        long_words: if cli.skip_long_words {
            LongWordPolicy::Skip
        } else {
            LongWordPolicy::Abort
        },
    };
    let store = WordStore::from_words(source::load_words(&cli.dictionary)?, &load_options)?;
    let dictionary = Dictionary::new(&store);
    info!(
        "Loaded {} words from {} in {:.3}s",
        store.len(),
        cli.dictionary.display(),
        t_load.elapsed().as_secs_f64()
    );

    let filtered = filter::filter(&dictionary, &target);
    info!("{} words use only letters of \"{}\"", filtered.len(), cli.word);

    let options = SearchOptions {
        parallel: cli.parallel,
        skip_ahead: !cli.no_skip_ahead,
    };
    let outcome = SearchEngine::new(&filtered).with_options(options).run(&target);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render::write_solutions(&mut out, &outcome.solutions, &filtered)?;
    out.flush()?;

    if cli.stats {
        let stats = outcome.stats;
        eprintln!(
            "{} combinations; {} nodes visited, {} words tried, {} words skipped",
            stats.solutions, stats.nodes_visited, stats.words_tried, stats.words_skipped
        );
    }
    Ok(())
}

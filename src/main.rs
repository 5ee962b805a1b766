//! Word Engine - CLI
//!
//! Loads a lexicon from word lists or DAWG files and answers word-game
//! questions about it: is this a word, what hooks it, what does it mean,
//! and which words match a search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use word_engine::{
    EngineConfig, WordEngine,
    commands::{
        SearchConfig, check_words, compile_lexicon, define_word, find_anagrams, group_alphagrams,
        lexicon_info, run_search, word_hooks,
    },
    config::DEFAULT_MAX_DEFINITION_LINKS,
    output::{
        print_alphagram_groups, print_anagram_result, print_check_result, print_compile_result,
        print_define_result, print_hook_result, print_lexicon_info, print_search_result,
    },
    search::WordGroup,
};

#[derive(Parser)]
#[command(
    name = "word_engine",
    about = "Word list search engine: patterns, anagrams, hooks, definitions and probability order",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file (one word per line, optional definition after it)
    #[arg(short = 'w', long = "words", global = true)]
    word_lists: Vec<PathBuf>,

    /// DAWG file holding the lexicon
    #[arg(long, global = true)]
    dawg: Option<PathBuf>,

    /// DAWG file holding the lexicon spelled backwards
    #[arg(long, global = true)]
    reverse_dawg: Option<PathBuf>,

    /// Anagram count file (`ALPHAGRAM count` per line)
    #[arg(long, global = true)]
    anagram_counts: Option<PathBuf>,

    /// Stem list file, one length per file (repeatable)
    #[arg(long, global = true)]
    stems: Vec<PathBuf>,

    /// Definitions file, loaded in the background
    #[arg(short = 'd', long, global = true)]
    definitions: Option<PathBuf>,

    /// Word list backing the "New in OWL2" group
    #[arg(long, global = true)]
    owl2_new: Option<PathBuf>,

    /// Name of the lexicon being loaded
    #[arg(short = 'l', long, global = true, default_value = "Custom")]
    lexicon: String,

    /// Treat malformed input and unknown groups as errors
    #[arg(long, global = true)]
    strict: bool,

    /// How many definition cross-references to follow
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEFINITION_LINKS)]
    max_links: usize,

    /// More logging (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether words are acceptable
    Check {
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Search with conditions such as `pattern:C?T`, `!prefix:S`, `anagrams:2-`
    Search {
        /// Conditions, all of which must hold
        #[arg(required = true)]
        conditions: Vec<String>,

        /// Combine `list:` conditions with OR instead of AND
        #[arg(long)]
        or: bool,

        /// Show at most this many matches
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show front and back hooks of words
    Hooks {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show definitions of words
    Define {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Find the words a rack makes (`?` = blank, `*` = any extra letters)
    Anagrams {
        rack: String,

        /// Include words using only some of the tiles
        #[arg(short, long)]
        sub: bool,
    },

    /// Group words by alphagram with all their anagrams
    Alphagrams {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Summarize the loaded lexicon
    Info,

    /// Write the loaded lexicon as a DAWG file
    Compile {
        /// Output path for the forward graph
        output: PathBuf,

        /// Also write the reversed graph here
        #[arg(long)]
        reverse_output: Option<PathBuf>,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Build the engine from the lexicon flags
fn load_engine(cli: &Cli) -> Result<WordEngine> {
    let config = EngineConfig::new()
        .strict(cli.strict)
        .max_definition_links(cli.max_links);
    let mut engine = WordEngine::new(config);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("invalid spinner template")?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    // Definitions parse on their own thread while the words load
    if let Some(path) = &cli.definitions {
        engine
            .import_definitions(path)
            .with_context(|| format!("Failed to start loading {}", path.display()))?;
    }

    if let Some(path) = &cli.dawg {
        spinner.set_message(format!("Loading {}", path.display()));
        engine
            .import_dawg_file(path, &cli.lexicon, false)
            .with_context(|| format!("Failed to load DAWG {}", path.display()))?;
    }
    if let Some(path) = &cli.reverse_dawg {
        spinner.set_message(format!("Loading {}", path.display()));
        engine
            .import_dawg_file(path, &cli.lexicon, true)
            .with_context(|| format!("Failed to load reverse DAWG {}", path.display()))?;
    }
    for path in &cli.word_lists {
        spinner.set_message(format!("Loading {}", path.display()));
        engine
            .import_text_file(path, &cli.lexicon, false)
            .with_context(|| format!("Failed to load word list {}", path.display()))?;
    }
    if let Some(path) = &cli.anagram_counts {
        spinner.set_message("Loading anagram counts");
        engine
            .import_num_anagrams(path)
            .with_context(|| format!("Failed to load anagram counts {}", path.display()))?;
    }
    for path in &cli.stems {
        spinner.set_message(format!("Loading {}", path.display()));
        engine
            .import_stems(path)
            .with_context(|| format!("Failed to load stems {}", path.display()))?;
    }
    if let Some(path) = &cli.owl2_new {
        engine
            .import_group_list(WordGroup::NewInOwl2, path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
    }

    if engine.is_loading_definitions() {
        spinner.set_message("Loading definitions");
        engine
            .wait_for_definitions()
            .context("Failed to load definitions")?;
    }
    spinner.finish_and_clear();

    if engine.word_count() == 0 {
        tracing::warn!("no words loaded; pass --words or --dawg");
    }
    Ok(engine)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let engine = load_engine(&cli)?;

    match cli.command {
        Commands::Check { words } => {
            print_check_result(&check_words(&engine, &words));
        }
        Commands::Search {
            conditions,
            or,
            limit,
        } => {
            let config = SearchConfig::new(conditions).disjunctive(or).limit(limit);
            let result = run_search(&engine, &config).context("Search failed")?;
            print_search_result(&result);
        }
        Commands::Hooks { words } => {
            for word in &words {
                print_hook_result(&word_hooks(&engine, word));
            }
        }
        Commands::Define { words } => {
            for word in &words {
                print_define_result(&define_word(&engine, word));
            }
        }
        Commands::Anagrams { rack, sub } => {
            let result = find_anagrams(&engine, &rack, sub).context("Anagram search failed")?;
            print_anagram_result(&result);
        }
        Commands::Alphagrams { words } => {
            let groups = group_alphagrams(&engine, &words).context("Anagram search failed")?;
            print_alphagram_groups(&groups);
        }
        Commands::Info => print_lexicon_info(&lexicon_info(&engine)),
        Commands::Compile {
            output,
            reverse_output,
        } => {
            let result = compile_lexicon(&engine, &output, reverse_output.as_deref())
                .context("Failed to compile lexicon")?;
            print_compile_result(&result);
        }
    }
    Ok(())
}

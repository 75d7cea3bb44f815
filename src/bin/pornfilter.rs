//! `pornfilter` — screen a collection of short documents against n-gram
//! blacklists.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use porn_filter::{
    filter_matching, select_matching, Classifier, FileStore, KeywordSet, KeywordSets,
    WordlistStore,
};

#[derive(Parser)]
#[command(name = "pornfilter", version, about = "N-gram blacklist screening")]
struct Cli {
    /// Directory containing wordlist files.
    #[arg(long, default_value = "wordlists")]
    wordlists: String,

    /// Directory for result files.
    #[arg(long, default_value = "output")]
    output: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ScreenArgs {
    /// Name of the input document list.
    input: String,

    /// Name of the primary blacklist.
    #[arg(long, default_value = "porn_blacklist")]
    blacklist: String,

    /// Name of an optional auxiliary keyword list (unigram matching).
    #[arg(long)]
    auxiliary: Option<String>,

    /// Name of an optional custom blacklist (unigram matching).
    #[arg(long)]
    custom: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Keep only documents that match the primary blacklist.
    Select(ScreenArgs),
    /// Remove matching documents and tally per-keyword hits.
    Filter(ScreenArgs),
    /// Run the built-in three-tweet sample through both drivers.
    Demo {
        /// Name of the primary blacklist.
        #[arg(long, default_value = "porn_blacklist")]
        blacklist: String,
    },
}

fn load_keyword_set(store: &FileStore, name: &str) -> Result<KeywordSet> {
    let entries = store
        .load_list(name)
        .with_context(|| format!("loading wordlist '{name}'"))?;
    Ok(KeywordSet::from_entries(entries))
}

fn build_classifier(store: &FileStore, args: &ScreenArgs) -> Result<Classifier> {
    let primary = load_keyword_set(store, &args.blacklist)?;
    let auxiliary = args
        .auxiliary
        .as_deref()
        .map(|name| load_keyword_set(store, name))
        .transpose()?;
    let custom = args
        .custom
        .as_deref()
        .map(|name| load_keyword_set(store, name))
        .transpose()?;

    Ok(Classifier::new(KeywordSets {
        primary,
        auxiliary,
        custom,
    }))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let store = FileStore::new(&cli.wordlists, &cli.output);

    match &cli.command {
        Command::Select(args) => {
            let classifier = build_classifier(&store, args)?;
            let docs = store
                .load_list(&args.input)
                .with_context(|| format!("loading input '{}'", args.input))?;
            let selected = select_matching(&docs, &classifier, &store)?;
            println!("{} of {} documents matched", selected.len(), docs.len());
        }
        Command::Filter(args) => {
            let classifier = build_classifier(&store, args)?;
            let docs = store
                .load_list(&args.input)
                .with_context(|| format!("loading input '{}'", args.input))?;
            let report = filter_matching(&docs, &classifier, &store)?;
            println!(
                "{} of {} documents clean ({} keyword hits)",
                report.clean.len(),
                docs.len(),
                report.hits.total()
            );
        }
        Command::Demo { blacklist } => {
            let primary = load_keyword_set(&store, blacklist)?;
            let classifier = Classifier::new(KeywordSets::primary_only(primary));
            let docs: Vec<String> = [
                "asian lesbians hello world",
                "sexy naked women are great",
                "this is a test",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect();

            let selected = select_matching(&docs, &classifier, &store)?;
            let report = filter_matching(&docs, &classifier, &store)?;
            println!(
                "demo: {} matched, {} clean",
                selected.len(),
                report.clean.len()
            );
        }
    }

    Ok(())
}

//! Demo prefill run against in-memory storage.
//!
//! Wires the in-memory storage adapter to the deterministic demo generator,
//! runs one prefill pass over the requested content types, and prints the
//! report as JSON.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use demo_content::{Lexicon, LexiconError};
use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing::info;

use prefill::config::PrefillSettings;
use prefill::domain::{ContentTypeName, PrefillBuilder, PrefillError};
use prefill::outbound::{DemoRecordGeneratorFactory, InMemoryContentStorage};

/// Base RNG seed for demo generation.
const DEMO_BASE_SEED: u64 = 2026;

#[derive(Debug, Parser)]
#[command(
    name = "prefill-demo",
    about = "Generate placeholder records for demo content types"
)]
struct Args {
    /// Records to request per content type (defaults to the configured count).
    #[arg(long)]
    count: Option<u64>,
    /// Generate the full count even for types already at the ceiling.
    #[arg(long)]
    exceed_max: bool,
    /// Override the existing-record ceiling.
    #[arg(long)]
    max_count: Option<u64>,
    /// Content types to prefill (defaults to a small demo set).
    #[arg(value_name = "TYPE")]
    content_types: Vec<String>,
}

/// Errors surfaced by the demo run.
#[derive(Debug, Error)]
enum DemoError {
    /// Settings could not be loaded from the environment.
    #[error("failed to load settings: {0}")]
    Settings(String),
    /// The lexicon file could not be read or parsed.
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    /// The prefill pass aborted.
    #[error(transparent)]
    Prefill(#[from] PrefillError),
    /// The report could not be encoded as JSON.
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), DemoError> {
    let settings = PrefillSettings::load_from_iter([OsString::from("prefill-demo")])
        .map_err(|err| DemoError::Settings(err.to_string()))?;

    let storage = Arc::new(InMemoryContentStorage::default());
    let content_types = demo_content_types(&args);
    for (name, singleton) in &content_types {
        storage.insert_content_type(name, *singleton);
    }

    let lexicon = Lexicon::from_file(&settings.lexicon_path())?;
    let factory = Arc::new(DemoRecordGeneratorFactory::new(lexicon, DEMO_BASE_SEED));

    let mut builder = PrefillBuilder::new(storage, factory, settings.max_count());
    if let Some(max_count) = args.max_count {
        builder.set_max_count(max_count);
    }

    let names: Vec<ContentTypeName> = content_types
        .iter()
        .map(|(name, _)| ContentTypeName::from(name.as_str()))
        .collect();
    let count = args.count.unwrap_or_else(|| settings.count());

    info!(types = names.len(), count, "running prefill pass");
    let report = builder.build(&names, count, args.exceed_max).await?;

    let rendered = serde_json::to_string_pretty(&report)?;
    if let Err(err) = writeln!(io::stdout().lock(), "{rendered}") {
        drop(err);
    }
    Ok(())
}

/// Resolves the content types to prefill, marking the demo singleton.
fn demo_content_types(args: &Args) -> Vec<(String, bool)> {
    if args.content_types.is_empty() {
        return vec![
            ("pages".to_owned(), false),
            ("entries".to_owned(), false),
            ("about".to_owned(), true),
        ];
    }

    args.content_types
        .iter()
        .map(|name| (name.clone(), false))
        .collect()
}

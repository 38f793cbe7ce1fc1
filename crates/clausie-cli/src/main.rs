//! ClausIE CLI
//!
//! Usage:
//!   clausie extract "The cat sat on the mat."
//!   clausie extract --id s1 "Bell makes products." --confidence --json
//!   clausie fetch --version-tag 0-0-1

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use clausie_core::BackendConfig;
use clausie_extractor::get_instance;

#[derive(Parser)]
#[command(name = "clausie")]
#[command(about = "Triple extraction with the ClausIE jar")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract triples from one or more sentences
    Extract {
        /// Sentences to extract from
        #[arg(required = true)]
        sentences: Vec<String>,

        /// Sentence identifier, once per sentence, paired positionally
        #[arg(long = "id")]
        ids: Vec<String>,

        /// Report per-triple confidence scores
        #[arg(long)]
        confidence: bool,

        /// Explicit path to clausie.jar
        #[arg(long)]
        jar: Option<PathBuf>,

        /// Fail instead of fetching a missing jar
        #[arg(long)]
        no_fetch: bool,

        /// Java binary used to run the jar
        #[arg(long)]
        java: Option<String>,

        /// Print JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Fetch the ClausIE jar into the install directory
    Fetch {
        /// ClausIE release to fetch
        #[arg(long = "version-tag")]
        version: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            sentences,
            ids,
            confidence,
            jar,
            no_fetch,
            java,
            json,
        } => {
            if !ids.is_empty() && ids.len() != sentences.len() {
                anyhow::bail!(
                    "--id must be given once per sentence ({} ids, {} sentences)",
                    ids.len(),
                    sentences.len()
                );
            }

            let mut config = BackendConfig::from_env();
            if let Some(jar) = jar {
                config.jar_path = Some(jar);
            }
            if no_fetch {
                config.auto_fetch = false;
            }
            if let Some(java) = java {
                config.java_command = java;
            }

            let extractor = get_instance("subprocess", config)?;
            let ids = (!ids.is_empty()).then_some(ids.as_slice());
            let corpus = extractor.extract_triples(&sentences, ids, confidence)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&corpus)?);
            } else {
                for triple in &corpus {
                    match &triple.confidence {
                        Some(score) => println!(
                            "{}\t{}\t{}\t{}\t{}",
                            triple.index, triple.subject, triple.predicate, triple.object, score
                        ),
                        None => println!(
                            "{}\t{}\t{}\t{}",
                            triple.index, triple.subject, triple.predicate, triple.object
                        ),
                    }
                }
            }
        }
        Commands::Fetch { version } => {
            let mut config = BackendConfig::from_env();
            if let Some(version) = version {
                config.version = Some(version);
            }

            let extractor = get_instance("subprocess", config)?;
            println!("ClausIE jar ready at {}", extractor.jar_path().display());
        }
    }

    Ok(())
}

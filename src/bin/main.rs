use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use phonochain::{ChainConfig, ChainEngine, ClientConfig, DatamuseClient, Relation};

#[derive(Debug, Parser)]
#[command(name = "phonochain")]
#[command(about = "Phonetic word-chain generator backed by the Datamuse word API")]
struct Cli {
    /// Base URL of the word-lookup service
    #[arg(long, default_value = "https://api.datamuse.com")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a phonetic chain starting from a word
    Chain {
        word: String,

        /// Maximum chain length, seed included
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Search attempts per hop before giving up
        #[arg(short, long, default_value = "10")]
        attempts: u32,
    },
    /// List words related to a word
    Related {
        word: String,

        /// Which relation to query
        #[arg(short, long, value_enum)]
        relation: Relation,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let client = DatamuseClient::new(ClientConfig {
        base_url: cli.base_url.clone(),
        timeout_secs: cli.timeout_secs,
        ..Default::default()
    })?;

    match cli.command {
        Command::Chain {
            word,
            length,
            attempts,
        } => {
            info!("generating chain from '{}' (target {})", word, length);
            let engine = ChainEngine::new(
                client,
                ChainConfig {
                    target_length: length,
                    max_attempts: attempts,
                },
            );
            let chain = engine.generate(&word);
            for (i, link) in chain.iter().enumerate() {
                println!("{:>3}. {}", i + 1, link);
            }
            println!("\n{}", chain.join(" -> "));
        }
        Command::Related { word, relation } => {
            let words = client.related(&word, relation)?;
            if words.is_empty() {
                println!("No results for '{}'.", word);
            } else {
                for word in words {
                    println!("{}", word);
                }
            }
        }
    }

    Ok(())
}

//! Print fake values from the command line.
//!
//! Usage:
//!   fake phone zip                 # one generated value per category
//!   fake --sample cities colors    # raw samples, no template expansion
//!   fake --lang fr --no-fallback phone
//!   fake --list-languages
//!   fake --metrics phone           # print the lookup metrics as JSON afterwards
//!
//! Environment (also read from .env):
//! - FAKE_LANG (defaults to en)
//! - FAKE_FALLBACK (defaults to true)
//! - FAKE_EXTERNAL_DATA (defaults to false)
//! - FAKE_DATA_DIR (defaults to data)

use anyhow::{bail, Context, Result};
use fake_data::{Config, Generator};
use tracing::info;

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    categories: Vec<String>,
    raw_samples: bool,
    language: Option<String>,
    no_fallback: bool,
    list_languages: bool,
    metrics: bool,
    help: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" | "-s" => parsed.raw_samples = true,
            "--lang" | "-l" => {
                let language = args.next().context("--lang requires a language code")?;
                parsed.language = Some(language);
            }
            "--no-fallback" => parsed.no_fallback = true,
            "--list-languages" => parsed.list_languages = true,
            "--metrics" => parsed.metrics = true,
            "--help" | "-h" => parsed.help = true,
            flag if flag.starts_with('-') => bail!("Unknown option: {}", flag),
            _ => parsed.categories.push(arg),
        }
    }

    Ok(parsed)
}

fn print_usage() {
    println!("Usage: fake [OPTIONS] <CATEGORY>...");
    println!();
    println!("Options:");
    println!("  -s, --sample          Print raw samples instead of generated values");
    println!("  -l, --lang <CODE>     Language to generate in");
    println!("      --no-fallback     Do not fall back to English");
    println!("      --list-languages  List available languages");
    println!("      --metrics         Print lookup metrics as JSON");
    println!("  -h, --help            Show this help");
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fake_data=warn".parse()?),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let mut config = Config::from_env();
    if let Some(language) = &args.language {
        config.language = language.clone();
    }
    if args.no_fallback {
        config.fallback_enabled = false;
    }

    let generator = Generator::from_config(&config)
        .with_context(|| format!("Invalid configuration: {:?}", config))?;

    if args.list_languages {
        for language in generator.languages() {
            println!("{}", language);
        }
        return Ok(());
    }

    if args.categories.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    info!(
        "Generating {} values in {}",
        args.categories.len(),
        generator.language()
    );

    for category in &args.categories {
        let value = if args.raw_samples {
            generator.sample(category)
        } else {
            generator.generate(category)
        };
        println!("{}", value);
    }

    if args.metrics {
        let report = serde_json::to_string_pretty(&generator.metrics().report())?;
        println!("{}", report);
    }

    Ok(())
}

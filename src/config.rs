use dotenvy::dotenv;
use miette::IntoDiagnostic;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::words::suggest::DEFAULT_LIMIT;
use crate::Error;

/// Word lists tried in order when `WORDLIST_PATH` does not name one that works
pub const DEFAULT_WORDLIST_PATHS: [&str; 2] = ["words_alpha.txt", "/usr/share/dict/words"];

/// How the terminal driver prints overlay views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!("Invalid OUTPUT_FORMAT '{}'", other))),
        }
    }
}

pub struct Config {
    pub wordlist_paths: Vec<PathBuf>,
    pub suggestion_limit: usize,
    pub output_format: OutputFormat,
}

pub fn load_config() -> miette::Result<Config> {
    info!("Loading configuration");

    // Load environment variables
    dotenv().ok();

    // An explicit word list is tried before the defaults
    let mut wordlist_paths: Vec<PathBuf> = env::var("WORDLIST_PATH")
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .into_iter()
        .collect();
    wordlist_paths.extend(DEFAULT_WORDLIST_PATHS.iter().map(PathBuf::from));

    let suggestion_limit = parse_limit(
        &env::var("SUGGESTION_LIMIT").unwrap_or_else(|_| DEFAULT_LIMIT.to_string()),
    )?;

    let output_format = env::var("OUTPUT_FORMAT")
        .unwrap_or_else(|_| "text".to_string())
        .parse::<OutputFormat>()?;

    Ok(Config {
        wordlist_paths,
        suggestion_limit,
        output_format,
    })
}

fn parse_limit(raw: &str) -> miette::Result<usize> {
    let limit = raw
        .trim()
        .parse::<usize>()
        .into_diagnostic()
        .map_err(|_| Error::Config("Invalid SUGGESTION_LIMIT".to_string()))?;

    if limit == 0 {
        return Err(Error::Config("SUGGESTION_LIMIT must be at least 1".to_string()).into());
    }

    Ok(limit)
}

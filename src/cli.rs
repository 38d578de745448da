use crate::pathmatch::{compile, parse, Tokenizer};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "pathmux")]
#[command(about = "Inspect and test URL path patterns", long_about = None, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the token stream of a pattern
    Tokens {
        /// Path pattern, e.g. `/users/{id}`
        pattern: String,
    },
    /// Print the parsed segments of a pattern
    Segments {
        /// Path pattern, e.g. `/users/{id:^[0-9]+$}`
        pattern: String,
    },
    /// Match one or more request paths against a pattern
    Match {
        /// Path pattern, e.g. `/files/{rest:.*$}`
        pattern: String,
        /// Request paths to test
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

/// Run a command and return its JSON report
pub fn execute(command: &Commands) -> Result<Value> {
    match command {
        Commands::Tokens { pattern } => {
            let mut tokenizer = Tokenizer::new(pattern.as_bytes());
            let mut tokens = Vec::new();
            loop {
                let token = tokenizer
                    .next_token()
                    .with_context(|| format!("failed to tokenize {pattern:?}"))?;
                let eof = token.is_eof();
                tokens.push(token);
                if eof {
                    break;
                }
            }
            Ok(serde_json::to_value(tokens)?)
        }
        Commands::Segments { pattern } => {
            let segments = parse(pattern.as_bytes())
                .with_context(|| format!("failed to parse path pattern {pattern:?}"))?;
            Ok(serde_json::to_value(segments)?)
        }
        Commands::Match { pattern, paths } => {
            let matcher = compile(pattern)
                .with_context(|| format!("failed to compile path pattern {pattern:?}"))?;
            let results = paths
                .iter()
                .map(|path| match matcher.match_path(path) {
                    Ok(values) => json!({ "path": path, "matched": true, "values": values }),
                    Err(err) => json!({ "path": path, "matched": false, "error": err.to_string() }),
                })
                .collect::<Vec<_>>();
            Ok(Value::Array(results))
        }
    }
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let report = execute(&cli.command)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_report() {
        let report = execute(&Commands::Tokens {
            pattern: "/a/{id}".to_string(),
        })
        .unwrap();
        let tokens = report.as_array().unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[1]["kind"], "open_brace");
        assert_eq!(tokens[2]["literal"], "id");
        assert_eq!(tokens[2]["position"]["column"], 5);
        assert_eq!(tokens[4]["kind"], "eof");
    }

    #[test]
    fn test_segments_report() {
        let report = execute(&Commands::Segments {
            pattern: "/a/{id:[0-9]+}".to_string(),
        })
        .unwrap();
        assert_eq!(report[0]["type"], "literal");
        assert_eq!(report[1]["type"], "named_regex");
        assert_eq!(report[1]["pattern"], "[0-9]+");
    }

    #[test]
    fn test_match_report() {
        let report = execute(&Commands::Match {
            pattern: "/a/{id}".to_string(),
            paths: vec!["/a/7".to_string(), "/b/7".to_string()],
        })
        .unwrap();
        assert_eq!(report[0]["matched"], true);
        assert_eq!(report[0]["values"]["id"], "7");
        assert_eq!(report[1]["matched"], false);
        assert!(report[1]["error"]
            .as_str()
            .unwrap()
            .contains("failed to match literal pattern"));
    }

    #[test]
    fn test_match_bad_pattern() {
        let err = execute(&Commands::Match {
            pattern: "/a/{id".to_string(),
            paths: vec!["/a/7".to_string()],
        })
        .unwrap_err();
        assert!(err.to_string().contains("failed to compile path pattern"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

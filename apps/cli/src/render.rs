//! Output rendering for parse outcomes.

use serde::Serialize;
use stoich_formula::{Composition, Error, Parsed};

use crate::config::OutputFormat;

/// One JSON document per input line.
#[derive(Debug, Serialize)]
struct Report<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a Parsed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn render(
    format: OutputFormat,
    input: &str,
    outcome: &Result<Parsed, Error>,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(input, outcome)),
        OutputFormat::Json => {
            let report = match outcome {
                Ok(parsed) => Report {
                    input,
                    result: Some(parsed),
                    error: None,
                },
                Err(e) => Report {
                    input,
                    result: None,
                    error: Some(e.to_string()),
                },
            };
            Ok(serde_json::to_string(&report)?)
        }
    }
}

fn render_text(input: &str, outcome: &Result<Parsed, Error>) -> String {
    match outcome {
        Err(e) => format!("{input}: error: {e}"),
        Ok(Parsed::Single(c)) => format!("{input}: {}", counts(c)),
        Ok(Parsed::Multi(segments)) => {
            let mut out = format!("{input}:");
            for (i, c) in segments.iter().enumerate() {
                out.push_str(&format!("\n  segment {}: {}", i + 1, counts(c)));
            }
            out
        }
    }
}

fn counts(c: &Composition) -> String {
    c.iter()
        .map(|(symbol, n)| format!("{symbol}{n}"))
        .collect::<Vec<_>>()
        .join(" ")
}

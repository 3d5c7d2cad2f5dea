//! Rendering of an arrangement for stdout.

use std::fmt::Write;

use anyhow::{Context, Result};
use driver_arrangement::MatchResult;

use crate::cli::OutputArg;

pub fn render(result: &MatchResult, output: OutputArg) -> Result<String> {
    match output {
        OutputArg::Text => Ok(render_text(result)),
        OutputArg::Json => {
            let mut json =
                serde_json::to_string_pretty(result).context("failed to serialize result")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_text(result: &MatchResult) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = writeln!(out, "The optimized total score is {:?}", result.total_score);
    let _ = writeln!(
        out,
        "The outcome of the match is a list of tuples presented in the format of \
         (<driver's name>, <destination>)"
    );
    for (driver, destination) in result.pairs() {
        let _ = writeln!(out, "({driver}, {destination})");
    }
    out
}

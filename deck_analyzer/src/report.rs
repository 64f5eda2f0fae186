//! Plain-text reports for deck diffs, token scans and land recommendations

use crate::analyzer::DeckAnalysis;
use crate::diff::DeckDiff;
use crate::error::{DeckError, Result};
use crate::instances::CardInstance;
use crate::mana::LandRecommendation;
use crate::tokens::TokenMatch;
use std::path::Path;

/// Default file name for a saved deck diff
pub const DIFF_REPORT_FILE: &str = "deck_changes.txt";
/// Default file name for a saved token report
pub const TOKEN_REPORT_FILE: &str = "tokens.txt";

/// How the two diff columns are paired into rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffLayout {
    /// Pair entries by position and stop at the shorter list
    #[default]
    Truncate,
    /// Show every entry, leaving cells of the shorter list blank
    Pad,
}

/// Render a two-column table with centered cells
fn two_column_table(headers: [&str; 2], rows: &[(String, String)]) -> String {
    let mut left_width = headers[0].chars().count();
    let mut right_width = headers[1].chars().count();
    for (left, right) in rows {
        left_width = left_width.max(left.chars().count());
        right_width = right_width.max(right.chars().count());
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "{:^lw$} | {:^rw$}",
        headers[0],
        headers[1],
        lw = left_width,
        rw = right_width
    ));
    lines.push(format!("{}-+-{}", "-".repeat(left_width), "-".repeat(right_width)));
    for (left, right) in rows {
        lines.push(format!(
            "{:^lw$} | {:^rw$}",
            left,
            right,
            lw = left_width,
            rw = right_width
        ));
    }

    let mut output = String::new();
    for line in lines {
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// Incoming/outgoing table of a deck diff
pub fn format_diff_table(diff: &DeckDiff, layout: DiffLayout) -> String {
    let incoming_header = format!("Incoming ({})", diff.incoming.len());
    let outgoing_header = format!("Outgoing ({})", diff.outgoing.len());

    let row_count = match layout {
        DiffLayout::Truncate => diff.incoming.len().min(diff.outgoing.len()),
        DiffLayout::Pad => diff.incoming.len().max(diff.outgoing.len()),
    };
    let cell = |instances: &[CardInstance], i: usize| {
        instances
            .get(i)
            .map(ToString::to_string)
            .unwrap_or_default()
    };
    let rows: Vec<(String, String)> = (0..row_count)
        .map(|i| (cell(&diff.incoming, i), cell(&diff.outgoing, i)))
        .collect();

    two_column_table([incoming_header.as_str(), outgoing_header.as_str()], &rows)
}

/// Card/Token table of a token scan
pub fn format_token_table(tokens: &[TokenMatch]) -> String {
    let rows: Vec<(String, String)> = tokens
        .iter()
        .map(|token| (token.card_name.clone(), token.excerpt.clone()))
        .collect();
    two_column_table(["Card", "Token"], &rows)
}

/// `Lands Required:` block listing only colors with a positive count
pub fn format_land_recommendation(recommendation: &LandRecommendation) -> String {
    let mut output = String::from("Lands Required:\n");
    for (color, count) in recommendation.recommended() {
        output.push_str(&format!("{}: {}\n", color.basic_land_plural(), count));
    }
    output
}

/// Token table followed by the land recommendation
pub fn format_analysis(analysis: &DeckAnalysis) -> String {
    format!(
        "{}\n{}",
        format_token_table(&analysis.tokens),
        format_land_recommendation(&analysis.lands)
    )
}

/// Save a rendered report to a text file, replacing any previous content
pub fn write_report<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, contents).map_err(|source| DeckError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote report to {}", path.display());
    Ok(())
}

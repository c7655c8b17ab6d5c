// Colored terminal output for document-term matrices.
//
// The table mirrors a printed data frame: terms across the top, one row per
// document, cells right-aligned under their term.

use std::collections::HashMap;

use colored::Colorize;

use crate::matrix::{DocTermMatrix, Encoding};

/// Widest document-name column before names get truncated.
const MAX_NAME_WIDTH: usize = 24;

/// Display a matrix as a table in the terminal.
pub fn display_matrix(matrix: &DocTermMatrix) {
    let (rows, cols) = matrix.shape();
    let kind = match matrix.encoding {
        Encoding::Binary => "binary",
        Encoding::Count => "count",
    };
    println!(
        "\n{}",
        format!("=== Document-term matrix ({rows} x {cols}, {kind}) ===").bold()
    );
    println!();

    if cols == 0 {
        println!("  {}", "(no terms: every document is empty)".dimmed());
        println!();
        return;
    }

    let names = row_labels(&matrix.documents, MAX_NAME_WIDTH);
    let name_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);

    // Each column is as wide as its term or its largest value, whichever is wider
    let widths: Vec<usize> = matrix
        .terms()
        .iter()
        .enumerate()
        .map(|(j, term)| {
            let widest_value = matrix
                .cells
                .iter()
                .map(|row| row[j].to_string().len())
                .max()
                .unwrap_or(1);
            term.chars().count().max(widest_value)
        })
        .collect();

    // Header
    let header: Vec<String> = matrix
        .terms()
        .iter()
        .zip(&widths)
        .map(|(term, &w)| format!("{:>w$}", term))
        .collect();
    println!("  {:<name_width$}  {}", "", header.join("  ").dimmed());

    for (name, (_, row)) in names.iter().zip(matrix.rows()) {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(&value, &w)| {
                let cell = format!("{:>w$}", value);
                if value > 0 {
                    cell.bright_green().to_string()
                } else {
                    cell.dimmed().to_string()
                }
            })
            .collect();
        println!("  {:<name_width$}  {}", name.bold(), cells.join("  "));
    }
    println!();
}

/// Row labels for document names, truncated to `max_chars`.
///
/// Document names are unique but their truncations may not be; labels that
/// collide get their 1-based row number appended.
pub fn row_labels(names: &[String], max_chars: usize) -> Vec<String> {
    let truncated: Vec<String> = names
        .iter()
        .map(|n| super::truncate_chars(n, max_chars))
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in &truncated {
        *counts.entry(label.as_str()).or_insert(0) += 1;
    }

    truncated
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if counts[label.as_str()] > 1 {
                format!("{label} #{}", i + 1)
            } else {
                label.clone()
            }
        })
        .collect()
}

/// One-line summary of corpus coverage per document.
pub fn display_summary(matrix: &DocTermMatrix) {
    let (_, cols) = matrix.shape();
    for (name, row) in matrix.rows() {
        let present = row.iter().filter(|&&v| v > 0).count();
        let line = format!("  {name}: {present}/{cols} terms present");
        if present == 0 {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.dimmed());
        }
    }
}

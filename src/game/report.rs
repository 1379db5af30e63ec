//! Text renderings of complexity analysis results.

use std::fmt::Write;
use std::str::FromStr;
use std::time::Duration;

use super::complexity_analysis::AnalysisRow;
use crate::searcher::{Algorithm, Score, SearchMetrics, SCORE_INFINITY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err("invalid format; options are: table, csv"),
        }
    }
}

pub fn render(rows: &[AnalysisRow], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => render_table(rows),
        OutputFormat::Csv => render_csv(rows),
    }
}

const CSV_HEADER: &str = "position,depth,algorithm,branching_factor,score,nodes_generated,nodes_evaluated,nodes_pruned,time_ms";

pub fn render_csv(rows: &[AnalysisRow]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{:.3}\n",
            row.position_name,
            row.depth,
            row.algorithm,
            row.branching_factor,
            format_score(row.score),
            row.metrics.nodes_generated(),
            row.metrics.nodes_evaluated(),
            row.metrics.nodes_pruned(),
            row.time_ms()
        ));
    }
    out
}

pub fn render_table(rows: &[AnalysisRow]) -> String {
    let mut out = String::new();
    let header = format!(
        "{:<10} {:>5}  {:<10} {:>9} {:>6} {:>12} {:>12} {:>10} {:>12}",
        "Position",
        "Depth",
        "Algorithm",
        "Branching",
        "Score",
        "Generated",
        "Evaluated",
        "Pruned",
        "Time (ms)"
    );
    let rule = "-".repeat(header.len());

    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", rule);
    for row in rows {
        let _ = writeln!(
            out,
            "{:<10} {:>5}  {:<10} {:>9} {:>6} {:>12} {:>12} {:>10} {:>12.3}",
            row.position_name,
            row.depth,
            row.algorithm.to_string(),
            row.branching_factor,
            format_score(row.score),
            format_number(row.metrics.nodes_generated()),
            format_number(row.metrics.nodes_evaluated()),
            format_number(row.metrics.nodes_pruned()),
            row.time_ms()
        );
    }
    let _ = writeln!(out, "{}", rule);

    for &algorithm in &Algorithm::ALL {
        let (metrics, time) = totals(rows, algorithm);
        let _ = writeln!(
            out,
            "{:<10} total: {:>12} nodes generated in {:.3} ms",
            algorithm.to_string(),
            format_number(metrics.nodes_generated()),
            time.as_secs_f64() * 1000.0
        );
    }

    let (minimax, _) = totals(rows, Algorithm::Minimax);
    let (alpha_beta, _) = totals(rows, Algorithm::AlphaBeta);
    if minimax.nodes_generated() > 0 {
        let _ = writeln!(
            out,
            "Alpha-Beta generated {:.1}% of the nodes Minimax generated",
            alpha_beta.nodes_generated() as f64 / minimax.nodes_generated() as f64 * 100.0
        );
    }

    out
}

fn totals(rows: &[AnalysisRow], algorithm: Algorithm) -> (SearchMetrics, Duration) {
    rows.iter()
        .filter(|row| row.algorithm == algorithm)
        .fold(
            (SearchMetrics::new(), Duration::from_secs(0)),
            |(mut metrics, time), row| {
                metrics += row.metrics;
                (metrics, time + row.time_taken)
            },
        )
}

fn format_score(score: Score) -> String {
    match score {
        SCORE_INFINITY => "+inf".to_string(),
        s if s == -SCORE_INFINITY => "-inf".to_string(),
        s => s.to_string(),
    }
}

fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

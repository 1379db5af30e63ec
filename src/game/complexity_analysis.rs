//! Search-growth comparison of minimax and alpha-beta over the benchmark
//! positions.

use std::time::{Duration, Instant};

use log::{debug, warn};
use thiserror::Error;

use crate::board::GameState;
use crate::fixtures::{BenchmarkPosition, BENCHMARK_POSITIONS};
use crate::move_generator::branching_factor;
use crate::santorini_search::search_root;
use crate::searcher::{Algorithm, Score, SearchError, SearchMetrics, SearchOutcome};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("position index {index} is out of range (0-{max})")]
    PositionIndexOutOfRange { index: usize, max: usize },
    #[error("no positions match filter '{0}'")]
    UnknownPosition(String),
    #[error("at least one search depth is required")]
    NoDepths,
    #[error("{position} at depth {depth}: minimax scored {minimax} but alpha-beta scored {alpha_beta}")]
    ScoreMismatch {
        position: &'static str,
        depth: u8,
        minimax: Score,
        alpha_beta: Score,
    },
    #[error(transparent)]
    Search(#[from] SearchError),
}

pub struct AnalysisConfig {
    pub depths: Vec<u8>,
    /// An index into the benchmark positions or a case-insensitive name
    /// substring. `None` runs every position.
    pub position_filter: Option<String>,
    pub check_equivalence: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            depths: vec![1, 2, 3, 4],
            position_filter: None,
            check_equivalence: true,
        }
    }
}

impl AnalysisConfig {
    pub fn with_depth_range(min_depth: u8, max_depth: u8) -> Self {
        Self {
            depths: (min_depth..=max_depth).collect(),
            ..Self::default()
        }
    }
}

/// One (position, depth, algorithm) measurement.
#[derive(Clone, Debug)]
pub struct AnalysisRow {
    pub position_name: &'static str,
    pub depth: u8,
    pub algorithm: Algorithm,
    /// Moves available at the root position.
    pub branching_factor: usize,
    pub score: Score,
    pub metrics: SearchMetrics,
    pub time_taken: Duration,
}

impl AnalysisRow {
    pub fn time_ms(&self) -> f64 {
        self.time_taken.as_secs_f64() * 1000.0
    }
}

/// Resolves a position filter against the benchmark positions.
///
/// The filter can be:
/// - An index (e.g., "0", "3")
/// - A name substring (case-insensitive, e.g., "late", "EARLY")
pub fn select_positions(
    filter: Option<&str>,
) -> Result<Vec<&'static BenchmarkPosition>, AnalysisError> {
    let filter = match filter {
        Some(filter) => filter,
        None => return Ok(BENCHMARK_POSITIONS.iter().collect()),
    };

    if let Ok(index) = filter.parse::<usize>() {
        return BENCHMARK_POSITIONS
            .get(index)
            .map(|position| vec![position])
            .ok_or(AnalysisError::PositionIndexOutOfRange {
                index,
                max: BENCHMARK_POSITIONS.len() - 1,
            });
    }

    let filter_lower = filter.to_lowercase();
    let filtered: Vec<&'static BenchmarkPosition> = BENCHMARK_POSITIONS
        .iter()
        .filter(|position| position.name.to_lowercase().contains(&filter_lower))
        .collect();

    if filtered.is_empty() {
        return Err(AnalysisError::UnknownPosition(filter.to_string()));
    }
    Ok(filtered)
}

/// Runs both algorithms on every selected position at every configured
/// depth, timing each search. Rows come out grouped by position, then depth,
/// with minimax before alpha-beta.
pub fn run_complexity_analysis(
    config: &AnalysisConfig,
) -> Result<Vec<AnalysisRow>, AnalysisError> {
    if config.depths.is_empty() {
        return Err(AnalysisError::NoDepths);
    }

    let positions = select_positions(config.position_filter.as_deref())?;
    let mut rows =
        Vec::with_capacity(positions.len() * config.depths.len() * Algorithm::ALL.len());

    for position in positions {
        let state = position.state();
        let branching = branching_factor(&state);

        for &depth in &config.depths {
            let (minimax, minimax_time) = timed_search(Algorithm::Minimax, &state, depth)?;
            let (alpha_beta, alpha_beta_time) =
                timed_search(Algorithm::AlphaBeta, &state, depth)?;

            debug!(
                "{} depth {}: minimax {} ({}), alpha-beta {} ({})",
                position.name, depth, minimax.score, minimax.metrics, alpha_beta.score,
                alpha_beta.metrics
            );

            if config.check_equivalence && minimax.score != alpha_beta.score {
                warn!(
                    "score mismatch on {} at depth {}: {} vs {}",
                    position.name, depth, minimax.score, alpha_beta.score
                );
                return Err(AnalysisError::ScoreMismatch {
                    position: position.name,
                    depth,
                    minimax: minimax.score,
                    alpha_beta: alpha_beta.score,
                });
            }

            for &(algorithm, outcome, time_taken) in &[
                (Algorithm::Minimax, minimax, minimax_time),
                (Algorithm::AlphaBeta, alpha_beta, alpha_beta_time),
            ] {
                rows.push(AnalysisRow {
                    position_name: position.name,
                    depth,
                    algorithm,
                    branching_factor: branching,
                    score: outcome.score,
                    metrics: outcome.metrics,
                    time_taken,
                });
            }
        }
    }

    Ok(rows)
}

fn timed_search(
    algorithm: Algorithm,
    state: &GameState,
    depth: u8,
) -> Result<(SearchOutcome, Duration), SearchError> {
    let start = Instant::now();
    let outcome = search_root(algorithm, state, depth)?;
    Ok((outcome, start.elapsed()))
}

//! Common types re-exported for convenience.

pub use crate::action::Action;
pub use crate::board::{Board, GameState, Player, Position, WorkerSet};
pub use crate::santorini_search::{alpha_beta, minimax, search_root};
pub use crate::searcher::{Algorithm, Score, SearchMetrics, SearchOutcome, SCORE_INFINITY};

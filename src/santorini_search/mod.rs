//! Santorini implementation of the generic search traits, plus the
//! `minimax` and `alpha_beta` entry points used by the experiment driver.

pub mod implementation;

#[cfg(test)]
mod tests;

pub use implementation::{
    alpha_beta, minimax, search_root, HeightEvaluator, SantoriniMoveGenerator,
};

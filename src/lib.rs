//! Game-tree search comparison harness for a Santorini-like worker game.
//!
//! The crate pairs a small game model (a 5x5 height grid with two workers
//! per side) with two interchangeable, instrumented searches, plain minimax
//! and alpha-beta, and a driver that measures how many nodes each one visits
//! on a set of fixed positions.

pub mod action;
pub mod board;
pub mod evaluate;
pub mod fixtures;
pub mod game;
pub mod move_generator;
pub mod prelude;
pub mod santorini_search;
pub mod searcher;

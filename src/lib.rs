//! # Connect Four
//!
//! A Connect Four rule engine with a depth-limited minimax opponent.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, line detection and the game session
//! - [`ai`] — Window-density evaluator, minimax search, human-side agents
//! - [`arena`] — Headless multi-round matches against the AI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;

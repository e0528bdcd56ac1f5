//! Popchat Library
//!
//! This crate provides the core functionality for the popchat terminal
//! chat client: conversation state, the HTTP client for the chat backend,
//! and the TUI shell around them.

pub mod chat;
pub mod client;
pub mod config;
pub mod runner;
pub mod tui;

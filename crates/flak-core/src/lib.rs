//! Core types and definitions for the FLAK simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vector helpers, tunable configuration, commands, events, render
//! snapshots, and constants. It has no dependency on any renderer or
//! windowing framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

//! Annonce de Lola - daily hallowed-object announcement
//!
//! This crate provides the core functionality for composing the daily
//! announcement of the calendar of hallowed objects and delivering it as a
//! desktop notification.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: The calendar table, weekday names, announcement composition, and errors
//! - **Application**: The announce use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-send, notify-rust, icon asset)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

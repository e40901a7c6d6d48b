//! Stash CLI - command-line interface for item-search filters.
//!
//! This crate provides the `stash` binary: compiling filters to predicate
//! lists or MongoDB queries, listing accepted currencies, and running
//! searches against the item collection.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

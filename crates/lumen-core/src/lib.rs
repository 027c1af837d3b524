//! Core types, context derivation, and configuration for lumen.
//!
//! This crate provides the foundational data structures used across all lumen crates:
//! - [`types`]: UI tree nodes, property values, severities, and error types
//! - [`context`]: Structural [`Context`](context::Context) threaded down the tree
//! - [`props`]: Typed accessible prop shapes and the prop-shape check
//! - [`document`]: Loading UI trees from JSON documents
//! - [`config`]: Configuration loading from `.lumen/lumen.json`

pub mod config;
pub mod context;
pub mod document;
pub mod props;
pub mod types;

//! Shared test utilities for the enhanced-properties workspace.
//!
//! This crate provides standardised on-disk fixtures to eliminate
//! duplication across crate test suites. It is a dev-dependency only and is
//! never published.
//!
//! # Modules
//!
//! - [`dir`] — [`PropsDir`] builder for build-tree directory layouts with
//!   properties files
//!
//! [`PropsDir`]: dir::PropsDir

pub mod dir;

pub use dir::PropsDir;

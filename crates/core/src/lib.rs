//! Core library for docread
//!
//! This crate implements the **Functional Core** of the docread application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The docread project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`docread_core`** (this crate): Pure transformation functions with zero I/O
//! - **`docread`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`analysis`]: Domain models for Document Intelligence analyze results
//! - [`spans`]: Span containment and line/word association
//! - [`paragraphs`]: Reading-order paragraph sorting
//! - [`report`]: The read-model result report, rendered as plain text lines
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing API responses and outputs
//! - **Transformation functions**: Pure functions that convert API data to domain models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use docread_core::analysis::AnalyzeResult;
//! use docread_core::report::render_read_report;
//!
//! // Fixture data (no HTTP required)
//! let result: AnalyzeResult = serde_json::from_str(FIXTURE_JSON)?;
//!
//! // Transform using pure function
//! let lines = render_read_report(&result);
//!
//! // Assert on results (no mocking needed)
//! assert!(lines[0].contains("Languages detected"));
//! ```
//!
//! The key insight: **data transformation logic should be pure and ignorant of
//! where data comes from or where it goes**. The binary crate fetches the
//! analyze result over the network; this crate only ever sees the materialized
//! snapshot.

pub mod analysis;
pub mod paragraphs;
pub mod report;
pub mod spans;

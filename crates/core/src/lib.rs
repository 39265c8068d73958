//! Core report logic for WebStore.
//!
//! This crate contains pure aggregation and rendering with ZERO web or database
//! dependencies. Rows come in already fetched; everything here is a function
//! of its inputs.
//!
//! # Modules
//!
//! - `reports` - Report row types, decimal aggregation, ordering, and text rendering

pub mod reports;

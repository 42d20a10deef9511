//! Core of the top-rated movies explorer: dataset loading, aggregation
//! queries and the director/actor collaboration graph.
//!
//! The desktop viewer in `main.rs` is a thin layer on top of this crate;
//! every function here is a pure function of a [`data::MovieTable`] and
//! explicit parameters.

pub mod data;
pub mod graph;
pub mod params;
pub mod rng;

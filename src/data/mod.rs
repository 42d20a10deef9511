//! Data layer: core types, loading, and aggregation queries.
//!
//! Architecture:
//! ```text
//!     .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐     ┌──────────────┐
//!   │  loader  │ ──▶ │ list_literal │  "['A', 'B']" → ["A", "B"]
//!   └──────────┘     └──────────────┘
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ MovieTable │  Vec<Movie>, immutable per upload
//!   └────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  query   │  long runtimes, filmographies, actor rankings
//!   └──────────┘
//! ```

pub mod error;
pub mod list_literal;
pub mod loader;
pub mod model;
pub mod query;
pub mod tally;

pub use error::{ParseError, Result};
pub use model::{ListColumn, Movie, MovieTable};
pub use tally::Tally;

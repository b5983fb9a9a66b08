// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact preimage counting for a grid under a local 2×2 rule.
//!
//! Each cell of the input grid carries a category flag. A preimage is an
//! (rows+1)×(cols+1) boolean grid whose every 2×2 window is admitted by the
//! transition table of the corresponding cell's category. The number of
//! preimages easily exceeds any machine word, so counts are `BigUint`.
//!
//! # Architecture
//!
//! Data flows strictly left to right:
//!
//! 1. **Transition tables** (`transition`): two fixed relations between
//!    2-bit boundary states, selected by the category flag.
//! 2. **Column encoder** (`grid`): packs each column's flags into a
//!    [`grid::ColumnCode`].
//! 3. **Column profile builder** (`memo`): for each distinct code, every
//!    consistent (entry, exit) profile pair of the whole column, composed
//!    row by row. Mirrored columns reuse the reflected set of their mirror.
//! 4. **Propagation driver** (`propagation`): a dynamic program over
//!    columns, one count per exit profile, with two swapped buffers.
//! 5. **Accumulator** (`propagation::accumulator`): exact sum and decimal
//!    rendering.
//!
//! [`context::CountContext`] ties a validated [`config::CountConfig`] to its
//! profile cache and statistics.
//!
//! # Example
//!
//! ```
//! use preimage_count::{CountConfig, CountContext, Grid};
//!
//! let mut ctx = CountContext::new(CountConfig::new(1, 1)).unwrap();
//! let total = ctx.count(&Grid::new(1, 1)).unwrap();
//! assert_eq!(total.to_string(), "12");
//! ```

pub mod config;
pub mod context;
pub mod errors;
pub mod grid;
pub mod memo;
pub mod propagation;
pub mod state;
pub mod transition;

// Re-export commonly used types
pub use config::CountConfig;
pub use context::CountContext;
pub use errors::ConfigError;
pub use grid::{ColumnCode, Grid};
pub use memo::{ColumnProfileSet, ProfileBuilder, ProfilePair};
pub use propagation::PropagationDriver;
pub use transition::TransitionTables;

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO data: column profile sets, built once per distinct encoding.
//!
//! Sets are immutable after construction and read-only for the rest of the
//! run. See `profiles` for the composition and mirror reuse.

pub mod profiles;

pub use profiles::{overlaps, stack, stack_layer, ColumnProfileSet, ProfileBuilder, ProfilePair};

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable run state.
//!
//! Only the statistics counters live here; the propagation vectors are owned
//! by the driver for the duration of one sweep.

pub mod statistics;

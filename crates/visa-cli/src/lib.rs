//! CLI library components for the PERM visa analysis.

#![allow(missing_docs)]

pub mod logging;
pub mod pipeline;

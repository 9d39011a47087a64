//! CLI library components for the bat-acoustic export unifier.

pub mod io;
pub mod logging;
pub mod pipeline;

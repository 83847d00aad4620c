//! GUI panels for the edgewave explorer.

pub mod controls;
pub mod pattern;

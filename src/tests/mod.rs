//! # Binary Test Suite
//!
//! Integration tests exercising the full render pipeline (pixel-level
//! contract checks) plus the CLI argument surface.

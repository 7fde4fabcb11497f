//! Integration tests for the scenario data core.
//!
//! Tests are organized by topic:
//! - `selection` - Dataset loading and hypercube selection end to end
//! - `utility` - Allocation/summarize/transforms pipeline

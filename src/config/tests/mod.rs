//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `resolution`: Source, policy, filter, and mode resolution tests

mod helpers;

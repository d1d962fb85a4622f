//! CLI operation mode handlers.
//!
//! - [`dashboard`]: Interactive terminal dashboard
//! - [`export_only`]: Load, filter, export, and exit

pub mod dashboard;
pub mod export_only;

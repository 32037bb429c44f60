//! Error handling for PCMP operations
//!
//! This module re-exports the error types defined in `common`, keeping the
//! error surface in one importable place.

pub use crate::common::PcmpError;
pub use crate::common::Result;

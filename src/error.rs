#![warn(missing_docs)]

//! Error types for the kinematics library.
//!
//! This module defines error types that can occur when assembling or
//! evaluating a serial kinematic chain. The core transform builder and
//! composer are infallible.

use core::fmt;

/// Errors that can occur in kinematic calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// Error for a chain with no links.
    /// This variant is returned when a `SerialChain` is constructed from an empty slice.
    EmptyChain(&'static str),
    /// Error for a joint-angle slice whose length differs from the chain's link count.
    /// This variant is returned by chain evaluation methods.
    JointCountMismatch(&'static str),
    /// Error for a frame output buffer whose length differs from the chain's link count.
    /// This variant is returned by `SerialChain::frames`.
    FrameCountMismatch(&'static str),
}

impl core::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicsError::EmptyChain(msg) => write!(f, "Empty chain: {}", msg),
            KinematicsError::JointCountMismatch(msg) => {
                write!(f, "Joint count mismatch: {}", msg)
            }
            KinematicsError::FrameCountMismatch(msg) => {
                write!(f, "Frame count mismatch: {}", msg)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KinematicsError {}

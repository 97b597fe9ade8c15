#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for serial-manipulator forward kinematics using the"]
#![doc = "Denavit-Hartenberg convention."]
#![doc = ""]
#![doc = "This crate provides a 4x4 homogeneous transform type, a per-link DH transform"]
#![doc = "builder, matrix composition, and a serial-chain helper for computing"]
#![doc = "end-effector pose and per-joint frames."]

#[cfg(feature = "std")]
extern crate std;

use core::fmt;
use libm::{cos, sin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::KinematicsError;

/// Denavit-Hartenberg parameters `(θ, d, r, α)` for one link of a serial
/// chain: joint angle, link offset, link length, and link twist.
///
/// Angles are in radians; `d` and `r` are in whatever length unit the caller
/// uses consistently across the chain.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DhParams {
    /// Joint angle θ (rad), rotation about the previous z-axis. For a
    /// revolute joint in a [`SerialChain`] this is a fixed offset added to
    /// the joint variable.
    pub theta: f64,
    /// Link offset d, translation along the previous z-axis.
    pub d: f64,
    /// Link length r, translation along the rotated x-axis.
    pub r: f64,
    /// Link twist α (rad), rotation about the rotated x-axis.
    pub alpha: f64,
}

impl DhParams {
    /// Construct the DH parameters for one link.
    ///
    /// # Arguments
    ///
    /// * `theta`: Joint angle in radians.
    /// * `d`: Link offset.
    /// * `r`: Link length.
    /// * `alpha`: Link twist in radians.
    pub const fn new(theta: f64, d: f64, r: f64, alpha: f64) -> Self {
        DhParams { theta, d, r, alpha }
    }

    /// Build the homogeneous transform for this link.
    ///
    /// The matrix is populated per the standard DH transform formula:
    ///
    /// ```text
    /// [ cosθ   -sinθ·cosα   sinθ·sinα   r·cosθ ]
    /// [ sinθ    cosθ·cosα  -cosθ·sinα   r·sinθ ]
    /// [  0        sinα         cosα       d    ]
    /// [  0         0            0         1    ]
    /// ```
    ///
    /// Inputs are not validated: NaN or infinite parameters propagate
    /// silently through the trigonometry. The bottom row is `(0, 0, 0, 1)`
    /// regardless of inputs.
    pub fn transform(&self) -> Transform {
        let cos_t = cos(self.theta);
        let sin_t = sin(self.theta);
        let cos_a = cos(self.alpha);
        let sin_a = sin(self.alpha);

        Transform::from_row_major([
            cos_t,
            -sin_t * cos_a,
            sin_t * sin_a,
            self.r * cos_t,
            sin_t,
            cos_t * cos_a,
            -cos_t * sin_a,
            self.r * sin_t,
            0.0,
            sin_a,
            cos_a,
            self.d,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

impl fmt::Display for DhParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(θ: {:.2} rad, d: {:.2}, r: {:.2}, α: {:.2} rad)",
            self.theta, self.d, self.r, self.alpha
        )
    }
}

/// A 4x4 homogeneous transform stored as 16 row-major `f64` elements.
///
/// Represents a 3-D rigid-body pose: rotation in the upper-left 3x3 block,
/// translation in the top three elements of the last column, and a fixed
/// bottom row `(0, 0, 0, 1)`. Values produced by [`DhParams::transform`]
/// have an orthonormal rotation block whenever the inputs are finite.
///
/// This is a plain `Copy` value type on the stack; construction cannot fail
/// and there is no ownership hand-off to track.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    m: [f64; 16],
}

impl Transform {
    /// The identity transform (no rotation, no translation).
    pub const fn identity() -> Self {
        Transform {
            m: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Construct a transform from 16 row-major elements.
    pub const fn from_row_major(m: [f64; 16]) -> Self {
        Transform { m }
    }

    /// Returns the 16 row-major elements.
    pub const fn as_row_major(&self) -> &[f64; 16] {
        &self.m
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..4`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < 4 && col < 4, "index out of range for a 4x4 matrix");
        self.m[row * 4 + col]
    }

    /// Returns the translation component `[x, y, z]`.
    pub fn translation(&self) -> [f64; 3] {
        [self.m[3], self.m[7], self.m[11]]
    }
}

impl Default for Transform {
    /// The default transform is the identity.
    fn default() -> Self {
        Transform::identity()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            write!(
                f,
                "[ {:>8.3} {:>8.3} {:>8.3} {:>8.3} ]",
                self.m[row * 4],
                self.m[row * 4 + 1],
                self.m[row * 4 + 2],
                self.m[row * 4 + 3]
            )?;
            if row < 3 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Compose two homogeneous transforms, overwriting `b` with the product
/// `a · b`.
///
/// `a` is left untouched. The product is accumulated into a local fixed-size
/// buffer before the copy, so `b`'s prior contents never feed back into the
/// arithmetic. The borrow checker rules out aliasing between `a` and `b`.
///
/// When chaining a kinematic sequence base-to-tool, fold left to right with
/// the accumulated transform as `a` and the next link's transform as `b`:
/// the cumulative transform is `T1 · T2 · … · Tn`.
///
/// # Arguments
///
/// * `a`: The left operand, read only.
/// * `b`: The right operand, replaced by `a · b`.
pub fn compose(a: &Transform, b: &mut Transform) {
    let mut result = [0.0; 16];
    for row in 0..4 {
        for col in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a.m[row * 4 + k] * b.m[k * 4 + col];
            }
            result[row * 4 + col] = sum;
        }
    }
    b.m = result;
}

/// A serial kinematic chain of revolute joints described by DH parameters.
///
/// The chain borrows its link table, so it works without an allocator. Each
/// link's stored `theta` is treated as a fixed offset added to that joint's
/// variable when the chain is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SerialChain<'a> {
    links: &'a [DhParams],
}

impl<'a> SerialChain<'a> {
    /// Construct a chain from a slice of per-link DH parameters, ordered
    /// base to tool.
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::EmptyChain)` if `links` is empty.
    pub const fn new(links: &'a [DhParams]) -> Result<Self, KinematicsError> {
        if links.is_empty() {
            return Err(KinematicsError::EmptyChain("must have at least one link"));
        }
        Ok(SerialChain { links })
    }

    /// Returns the number of links in the chain.
    pub const fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if the chain has no links. Always `false` for a chain
    /// built through [`SerialChain::new`].
    pub const fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the link table.
    pub const fn links(&self) -> &'a [DhParams] {
        self.links
    }

    /// Computes the base-to-tool transform for the given joint angles.
    /// This is the forward kinematics problem.
    ///
    /// Builds one transform per link, with the joint variable added to the
    /// link's `theta` offset, and folds them left to right: the result is
    /// `T1 · T2 · … · Tn`.
    ///
    /// # Arguments
    ///
    /// * `joint_angles`: One angle (rad) per link, ordered base to tool.
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::JointCountMismatch)` if
    /// `joint_angles.len()` differs from the number of links.
    ///
    /// # Returns
    ///
    /// The cumulative homogeneous transform from the base frame to the tool
    /// frame.
    pub fn forward_kinematics(&self, joint_angles: &[f64]) -> Result<Transform, KinematicsError> {
        if joint_angles.len() != self.links.len() {
            return Err(KinematicsError::JointCountMismatch(
                "must match the number of links",
            ));
        }

        let mut cumulative = Transform::identity();
        for (link, q) in self.links.iter().zip(joint_angles) {
            let mut t = DhParams::new(link.theta + q, link.d, link.r, link.alpha).transform();
            compose(&cumulative, &mut t);
            cumulative = t;
        }
        Ok(cumulative)
    }

    /// Computes the cumulative transform after each joint, writing one frame
    /// per link into `out`.
    ///
    /// `out[i]` holds the base-frame pose of joint `i + 1`; the last entry
    /// equals [`SerialChain::forward_kinematics`] for the same angles. The
    /// translation components of the frames trace the arm's shape, which is
    /// what a pose viewer plots.
    ///
    /// # Arguments
    ///
    /// * `joint_angles`: One angle (rad) per link, ordered base to tool.
    /// * `out`: Frame buffer, exactly one entry per link.
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::JointCountMismatch)` if
    /// `joint_angles.len()` differs from the number of links.
    /// Returns `Err(KinematicsError::FrameCountMismatch)` if `out.len()`
    /// differs from the number of links.
    pub fn frames(
        &self,
        joint_angles: &[f64],
        out: &mut [Transform],
    ) -> Result<(), KinematicsError> {
        if joint_angles.len() != self.links.len() {
            return Err(KinematicsError::JointCountMismatch(
                "must match the number of links",
            ));
        }
        if out.len() != self.links.len() {
            return Err(KinematicsError::FrameCountMismatch(
                "must match the number of links",
            ));
        }

        let mut cumulative = Transform::identity();
        for ((link, q), frame) in self.links.iter().zip(joint_angles).zip(out.iter_mut()) {
            let mut t = DhParams::new(link.theta + q, link.d, link.r, link.alpha).transform();
            compose(&cumulative, &mut t);
            cumulative = t;
            *frame = cumulative;
        }
        Ok(())
    }

    /// Convenience function returning the tool position `[x, y, z]` for the
    /// given joint angles.
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::JointCountMismatch)` if
    /// `joint_angles.len()` differs from the number of links (propagated
    /// from `forward_kinematics`).
    pub fn tool_position(&self, joint_angles: &[f64]) -> Result<[f64; 3], KinematicsError> {
        Ok(self.forward_kinematics(joint_angles)?.translation())
    }
}

impl fmt::Display for SerialChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerialChain ({} links)", self.links.len())
    }
}

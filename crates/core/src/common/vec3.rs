//! Vector and axis types.
//!
//! Snapshots store per-particle data as plain `[f64; 3]` arrays, which keeps
//! engine adaptors zero-copy. `Axis` and `Quantity` name where a value sits so
//! diagnostics can point at it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 3D vector (x, y, z).
pub type Vec3 = [f64; 3];

/// Euclidean length of a vector.
#[inline]
pub fn magnitude(v: &Vec3) -> f64 {
    v[0].mul_add(v[0], v[1].mul_add(v[1], v[2] * v[2])).sqrt()
}

/// A spatial axis, identifying one component of a `Vec3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// First component.
    X,
    /// Second component.
    Y,
    /// Third component.
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Returns the component index (0, 1 or 2).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    /// Formats the axis as its component index, as engine diagnostics do.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// The per-particle sequence a value was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// Particle positions.
    Position,
    /// Particle velocities.
    Velocity,
    /// Per-particle forces.
    Force,
}

impl Quantity {
    /// All quantities in scan order.
    pub const ALL: [Self; 3] = [Self::Position, Self::Velocity, Self::Force];

    /// Plural name used in diagnostics ("positions", "velocities", "forces").
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Position => "positions",
            Self::Velocity => "velocities",
            Self::Force => "forces",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

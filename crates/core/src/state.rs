//! Simulation state snapshots.
//!
//! The validator never sees engine internals. It reads a snapshot through the
//! [`Snapshot`] trait, which engine adaptors implement over their own buffers;
//! [`State`] is the owned implementation used by tests and by callers that copy
//! data out of the engine.
//!
//! All three per-particle sequences share one length and ordering. The engine
//! guarantees this and the checks assume it; only [`State::new`] verifies it.

use serde::{Deserialize, Serialize};

use crate::common::error::{InputError, ValidationError};
use crate::common::vec3::{Quantity, Vec3};

/// The periodic boundary cell, as three edge vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodicBox {
    /// First box vector.
    pub a: Vec3,
    /// Second box vector.
    pub b: Vec3,
    /// Third box vector.
    pub c: Vec3,
}

impl PeriodicBox {
    /// Creates a rectangular box with edges along the coordinate axes.
    pub const fn rectangular(x: f64, y: f64, z: f64) -> Self {
        Self {
            a: [x, 0.0, 0.0],
            b: [0.0, y, 0.0],
            c: [0.0, 0.0, z],
        }
    }

    /// Returns the three vectors in order.
    pub const fn vectors(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }
}

/// Read-only view of a point-in-time simulation state.
///
/// Implementors expose the engine's buffers without copying. The provided
/// [`particle_count`](Self::particle_count) reads the position count.
pub trait Snapshot {
    /// Particle positions, one vector per particle.
    fn positions(&self) -> &[Vec3];

    /// Particle velocities, in the same order as positions.
    fn velocities(&self) -> &[Vec3];

    /// Per-particle forces, in the same order as positions.
    fn forces(&self) -> &[Vec3];

    /// Total potential energy.
    fn potential_energy(&self) -> f64;

    /// Total kinetic energy.
    fn kinetic_energy(&self) -> f64;

    /// The periodic boundary cell.
    fn periodic_box(&self) -> PeriodicBox;

    /// Number of particles in the snapshot.
    fn particle_count(&self) -> usize {
        self.positions().len()
    }

    /// The per-particle sequence holding `quantity`.
    fn sequence(&self, quantity: Quantity) -> &[Vec3] {
        match quantity {
            Quantity::Position => self.positions(),
            Quantity::Velocity => self.velocities(),
            Quantity::Force => self.forces(),
        }
    }
}

/// An owned simulation state.
///
/// # Examples
///
/// ```
/// use mdcheck_core::state::{Snapshot, State};
///
/// let state = State::new(
///     vec![[0.0, 0.0, 0.0]],
///     vec![[0.1, -0.2, 0.3]],
///     vec![[1.0, 2.0, 3.0]],
/// )
/// .unwrap()
/// .with_energies(-120.5, 33.0);
///
/// assert_eq!(state.particle_count(), 1);
/// assert_eq!(state.potential_energy(), -120.5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StateRecord")]
pub struct State {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    forces: Vec<Vec3>,
    potential_energy: f64,
    kinetic_energy: f64,
    periodic_box: PeriodicBox,
}

impl State {
    /// Creates a state from per-particle sequences, with zero energies and a zero box.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::SequenceLengthMismatch`] if the three sequences
    /// have different lengths.
    pub fn new(
        positions: Vec<Vec3>,
        velocities: Vec<Vec3>,
        forces: Vec<Vec3>,
    ) -> Result<Self, ValidationError> {
        if positions.len() != velocities.len() || positions.len() != forces.len() {
            return Err(InputError::SequenceLengthMismatch {
                positions: positions.len(),
                velocities: velocities.len(),
                forces: forces.len(),
            }
            .into());
        }
        Ok(Self {
            positions,
            velocities,
            forces,
            ..Self::default()
        })
    }

    /// Creates a state with no particles.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Copies any snapshot into an owned state.
    pub fn capture<S: Snapshot + ?Sized>(snapshot: &S) -> Self {
        Self {
            positions: snapshot.positions().to_vec(),
            velocities: snapshot.velocities().to_vec(),
            forces: snapshot.forces().to_vec(),
            potential_energy: snapshot.potential_energy(),
            kinetic_energy: snapshot.kinetic_energy(),
            periodic_box: snapshot.periodic_box(),
        }
    }

    /// Sets the potential and kinetic energies.
    #[must_use]
    pub fn with_energies(mut self, potential: f64, kinetic: f64) -> Self {
        self.potential_energy = potential;
        self.kinetic_energy = kinetic;
        self
    }

    /// Sets the periodic box.
    #[must_use]
    pub fn with_periodic_box(mut self, periodic_box: PeriodicBox) -> Self {
        self.periodic_box = periodic_box;
        self
    }
}

/// Unchecked wire form of [`State`]; deserialisation goes through [`State::new`].
#[derive(Deserialize)]
struct StateRecord {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    forces: Vec<Vec3>,
    #[serde(default)]
    potential_energy: f64,
    #[serde(default)]
    kinetic_energy: f64,
    #[serde(default)]
    periodic_box: PeriodicBox,
}

impl TryFrom<StateRecord> for State {
    type Error = ValidationError;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(record.positions, record.velocities, record.forces)?
            .with_energies(record.potential_energy, record.kinetic_energy)
            .with_periodic_box(record.periodic_box))
    }
}

impl Snapshot for State {
    fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    fn forces(&self) -> &[Vec3] {
        &self.forces
    }

    fn potential_energy(&self) -> f64 {
        self.potential_energy
    }

    fn kinetic_energy(&self) -> f64 {
        self.kinetic_energy
    }

    fn periodic_box(&self) -> PeriodicBox {
        self.periodic_box
    }
}

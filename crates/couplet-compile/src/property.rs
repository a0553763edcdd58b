//! `PropertySet` and qubit layout for pass communication.
//!
//! The [`PropertySet`] is the shared context threaded through compilation
//! passes: the layout pass writes a [`Layout`], the routing pass reads the
//! coupling map and permutes the layout as it inserts SWAPs. Passes can
//! also stash arbitrary typed values (e.g. routing statistics) for the
//! caller to pick up afterwards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};

use couplet_ir::QubitId;

use crate::topology::CouplingMap;

/// A mapping between logical qubits and physical qubit positions.
///
/// Logical ids are dense (`0..n`), so both directions are plain vectors:
/// `logical_to_physical[l]` and `physical_to_logical[p]`. Physical slots
/// beyond the circuit size are legal and simply unoccupied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    logical_to_physical: Vec<u32>,
    physical_to_logical: Vec<Option<QubitId>>,
}

impl Layout {
    /// Create a trivial layout (logical qubit i → physical qubit i) over
    /// `num_physical` device positions.
    pub fn trivial(num_logical: u32, num_physical: u32) -> Self {
        let logical_to_physical = (0..num_logical).collect();
        let mut physical_to_logical = vec![None; num_physical as usize];
        for l in 0..num_logical {
            physical_to_logical[l as usize] = Some(QubitId(l));
        }
        Self {
            logical_to_physical,
            physical_to_logical,
        }
    }

    /// Physical position of a logical qubit.
    pub fn get_physical(&self, logical: QubitId) -> Option<u32> {
        self.logical_to_physical.get(logical.index()).copied()
    }

    /// Logical qubit at a physical position, if occupied.
    pub fn get_logical(&self, physical: u32) -> Option<QubitId> {
        self.physical_to_logical
            .get(physical as usize)
            .copied()
            .flatten()
    }

    /// Exchange the occupants of two physical positions.
    ///
    /// Either position may be empty; the occupant (if any) moves.
    pub fn swap_physical(&mut self, p1: u32, p2: u32) {
        let (i1, i2) = (p1 as usize, p2 as usize);
        self.physical_to_logical.swap(i1, i2);
        if let Some(l) = self.physical_to_logical[i1] {
            self.logical_to_physical[l.index()] = p1;
        }
        if let Some(l) = self.physical_to_logical[i2] {
            self.logical_to_physical[l.index()] = p2;
        }
    }

    /// Number of mapped logical qubits.
    pub fn len(&self) -> usize {
        self.logical_to_physical.len()
    }

    /// Check if the layout maps no qubits.
    pub fn is_empty(&self) -> bool {
        self.logical_to_physical.is_empty()
    }

    /// Iterate over (logical, physical) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (QubitId, u32)> + '_ {
        self.logical_to_physical
            .iter()
            .enumerate()
            .map(|(l, &p)| (QubitId(l as u32), p))
    }
}

/// Properties shared between compilation passes.
///
/// Standard properties (layout, coupling map) have dedicated fields;
/// passes can store additional typed values with [`insert`](Self::insert)
/// and retrieve them with [`get`](Self::get). Each type can have at most
/// one value stored.
#[derive(Debug, Default)]
pub struct PropertySet {
    /// Qubit layout mapping (logical → physical). Set by layout passes,
    /// permuted by routing.
    pub layout: Option<Layout>,

    /// Target coupling map defining allowed two-qubit interactions.
    /// Must be set before running layout/routing passes.
    pub coupling_map: Option<CouplingMap>,

    /// Custom properties storage (type-erased).
    custom: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl PropertySet {
    /// Create a new empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a property set with a target coupling map.
    #[must_use]
    pub fn with_coupling_map(mut self, coupling_map: CouplingMap) -> Self {
        self.coupling_map = Some(coupling_map);
        self
    }

    /// Insert a custom property.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) {
        self.custom.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Get a custom property.
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.custom
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref())
    }

    /// Remove a custom property.
    pub fn remove<T: Any>(&mut self) -> Option<T> {
        self.custom
            .remove(&TypeId::of::<T>())
            .and_then(|v| v.downcast().ok())
            .map(|v| *v)
    }
}

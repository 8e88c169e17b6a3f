//! src/feasibility.rs
//!
//! Onafhankelijke haalbaarheidscontrole voor een lijst geselecteerde items, en
//! de overdracht van een (gecontroleerde) oplossing als warm start voor een
//! exacte oplosser.

use crate::grasp::GraspResult;
use crate::instance::Instance;
use bitvec::prelude::*;
use log::warn;
use std::fmt;

/// Uitkomst van `check_solution`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Validity {
    /// Capaciteit gerespecteerd en geen conflicterend paar geselecteerd.
    Ok,
    /// Lege selectie; altijd haalbaar.
    Empty,
    OverCapacity,
    Conflict,
    /// Een index `>= n`.
    UnknownItem,
}

impl Validity {
    #[inline]
    pub fn is_valid(self) -> bool {
        matches!(self, Validity::Ok | Validity::Empty)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Validity::Ok => "OK",
            Validity::Empty => "Empty",
            Validity::OverCapacity => "OverCapacity",
            Validity::Conflict => "Conflict",
            Validity::UnknownItem => "UnknownItem",
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controleert `Σ gewicht ≤ capaciteit` en conflictvrijheid van `items`.
///
/// Dubbele indices tellen dubbel mee in het gewicht; een oplossing uit deze
/// crate bevat nooit duplicaten.
pub fn check_solution(instance: &Instance, items: &[usize]) -> Validity {
    if items.is_empty() {
        return Validity::Empty;
    }
    if items.iter().any(|&i| i >= instance.n()) {
        return Validity::UnknownItem;
    }

    let weight: u64 = items.iter().map(|&i| instance.weight(i)).sum();
    if weight > instance.capacity() {
        return Validity::OverCapacity;
    }

    let mut selected = bitvec![0; instance.n()];
    for &i in items {
        selected.set(i, true);
    }
    let conflicting = items
        .iter()
        .any(|&u| instance.neigh_row(u).iter_ones().any(|v| selected[v]));
    if conflicting {
        Validity::Conflict
    } else {
        Validity::Ok
    }
}

/// Hint voor een exacte oplosser: een haalbare selectie en haar waarde.
///
/// De ontvanger voegt de snede `objective ≥ self.objective` toe en stuurt de
/// zoektocht richting de gegeven items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WarmStart {
    pub selected_items: Vec<usize>,
    pub objective: u64,
}

impl WarmStart {
    /// Controleert een extern aangeleverde kandidaat. Een ongeldige kandidaat
    /// wordt doorgegeven als doelwaarde 0 zonder items.
    pub fn validated(instance: &Instance, selected_items: Vec<usize>, objective: u64) -> Self {
        let verdict = check_solution(instance, &selected_items);
        if verdict.is_valid() {
            Self { selected_items, objective }
        } else {
            warn!("warm start rejected ({}), falling back to objective 0", verdict);
            Self::default()
        }
    }

    /// Warm start uit een GRASP-resultaat.
    pub fn from_result(instance: &Instance, result: &GraspResult) -> Self {
        Self::validated(instance, result.selected_items.clone(), result.objective)
    }
}

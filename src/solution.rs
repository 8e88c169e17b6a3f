//! src/solution.rs
//!
//! Representeert een kandidaat-oplossing: een subset van items 'S' met
//! gecachte waarden voor het totale gewicht, de totale winst en '|S|'.
//! Lidmaatschap is O(1) via een bitset; elke toevoeg- of verwijderoperatie
//! werkt de caches in O(1) bij.

use crate::feasibility::{check_solution, Validity};
use crate::instance::Instance;
use bitvec::prelude::*;

/// Een veranderlijke KPC-selectie, gebonden aan een specifieke `Instance`.
#[derive(Clone, Debug)]
pub struct Solution<'i> {
    instance: &'i Instance,
    items: BitVec,
    weight: u64,
    profit: u64,
    size: usize,
}

impl<'i> Solution<'i> {
    /*────────── Constructors ──────────*/

    /// Creëert een nieuwe, lege oplossing voor de gegeven instantie.
    pub fn new(instance: &'i Instance) -> Self {
        Self {
            instance,
            items: bitvec![0; instance.n()],
            weight: 0,
            profit: 0,
            size: 0,
        }
    }

    /// Creëert een oplossing met de gegeven items. Dubbele indices tellen eenmaal.
    pub fn from_items(instance: &'i Instance, items: &[usize]) -> Self {
        let mut sol = Self::new(instance);
        for &i in items {
            sol.add(i);
        }
        sol
    }

    /*────────── Queries ──────────*/

    /// Geeft `|S|` terug.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Geeft het totale gewicht van `S` terug.
    #[inline]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Geeft de totale winst (de doelfunctie) van `S` terug.
    #[inline]
    pub fn profit(&self) -> u64 {
        self.profit
    }

    /// Resterende capaciteit. Verzadigt op 0 voor een (ongeldige) overvolle selectie.
    #[inline]
    pub fn residual(&self) -> u64 {
        self.instance.capacity().saturating_sub(self.weight)
    }

    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.items[i]
    }

    /// Geeft een onveranderlijke slice van de bitset die de items in `S` representeert.
    #[inline]
    pub fn bitset(&self) -> &BitSlice {
        &self.items
    }

    /// Geeft een referentie naar de onderliggende instantie.
    #[inline]
    pub fn instance(&self) -> &'i Instance {
        self.instance
    }

    /// Controleert of item `j` nog in de resterende capaciteit past.
    #[inline]
    pub fn fits(&self, j: usize) -> bool {
        self.instance.weight(j) <= self.residual()
    }

    /// De items in `S` die in conflict zijn met `j` (de blokkerende set `N(j) ∩ S`).
    pub fn blockers(&self, j: usize) -> impl Iterator<Item = usize> + '_ {
        self.instance
            .neigh_row(j)
            .iter_ones()
            .filter(move |&i| self.items[i])
    }

    /// `true` als minstens één conflictbuur van `j` in `S` zit.
    pub fn is_blocked(&self, j: usize) -> bool {
        self.blockers(j).next().is_some()
    }

    /// De geselecteerde items in oplopende volgorde.
    pub fn selected_items(&self) -> Vec<usize> {
        self.items.iter_ones().collect()
    }

    /// Hercontroleert capaciteit en conflictvrijheid vanaf nul.
    pub fn is_feasible(&self) -> bool {
        check_solution(self.instance, &self.selected_items()).is_valid()
    }

    /// Volledige verdict van de haalbaarheidscontrole.
    pub fn validity(&self) -> Validity {
        check_solution(self.instance, &self.selected_items())
    }

    /*────────── Mutators ──────────*/

    /// Voegt item `i` toe aan de oplossing. Negeert de operatie als `i` al aanwezig is.
    pub fn add(&mut self, i: usize) {
        if self.items[i] {
            return;
        }
        self.items.set(i, true);
        self.size += 1;
        self.weight += self.instance.weight(i);
        self.profit += self.instance.profit(i);
    }

    /// Verwijdert item `i` uit de oplossing. Negeert de operatie als `i` niet aanwezig is.
    pub fn remove(&mut self, i: usize) {
        if !self.items[i] {
            return;
        }
        self.items.set(i, false);
        self.size -= 1;
        self.weight -= self.instance.weight(i);
        self.profit -= self.instance.profit(i);
    }
}

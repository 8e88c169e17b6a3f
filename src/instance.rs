//! src/instance.rs
//!
//! Representeert een KPC-instantie: winsten, gewichten, capaciteit en de
//! conflictgraaf. De conflictgraaf wordt opgeslagen als een 'BitVec' per item
//! (row-major adjacency matrix), zodat lidmaatschap en doorsnedes met een
//! oplossing goedkoop zijn. Ondersteunt het parsen van het AMPL/DAT-formaat.

use bitvec::prelude::*;
use std::io::{self, Read};

/// Een onveranderlijke KPC-instantie.
#[derive(Clone, Debug)]
pub struct Instance {
    capacity: u64,
    profits: Vec<u64>,
    weights: Vec<u64>,
    /// Conflictmatrix; `adj[i][j]` is 1 als items i en j niet samen mogen, met j != i.
    adj: Vec<BitVec>,
}

fn invalid_data<E>(e: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidData, e)
}

impl Instance {
    /*────────── Constructors ──────────*/

    /// Bouwt een instantie uit losse onderdelen (0-gebaseerde indices).
    ///
    /// `profits` en `weights` moeten even lang zijn; hun lengte bepaalt `n`.
    /// Zelf-lussen en paren buiten bereik worden overgeslagen: validatie hoort
    /// bij de parser, niet bij de engine.
    pub fn from_parts(
        capacity: u64,
        profits: Vec<u64>,
        weights: Vec<u64>,
        conflicts: &[(usize, usize)],
    ) -> Self {
        debug_assert_eq!(profits.len(), weights.len(), "profits en weights verschillen in lengte");
        let n = profits.len();
        let mut inst = Self {
            capacity,
            profits,
            weights,
            adj: vec![bitvec![0; n]; n],
        };
        for &(u, v) in conflicts {
            if u < n && v < n && u != v {
                inst.add_conflict(u, v);
            }
        }
        inst
    }

    /// Parset het AMPL/DAT-formaat van de KPC-benchmarks.
    ///
    /// Herkende onderdelen (leestekens `:= : ; ( ) ,` gelden als witruimte):
    /// - `n <int>`: aantal items;
    /// - `c <int>` of `C <int>`: capaciteit;
    /// - `p w` gevolgd door `n` rijen `index winst gewicht`;
    /// - `set` of `E` gevolgd door conflictparen tot het einde van het bestand.
    ///
    /// Overige tokens worden genegeerd. Items die niet in de tabel staan krijgen
    /// winst en gewicht 0.
    pub fn parse_dat<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let cleaned: String = content
            .replace(":=", " ")
            .chars()
            .map(|c| if matches!(c, ':' | ';' | '(' | ')' | ',') { ' ' } else { c })
            .collect();
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();

        let mut n: Option<usize> = None;
        let mut capacity = 0u64;
        let mut profits: Vec<u64> = Vec::new();
        let mut weights: Vec<u64> = Vec::new();
        let mut conflicts: Vec<(usize, usize)> = Vec::new();

        let mut i = 0usize;
        while i < tokens.len() {
            match tokens[i] {
                "n" => match tokens.get(i + 1).and_then(|t| t.parse::<usize>().ok()) {
                    Some(value) => {
                        n = Some(value);
                        profits = vec![0; value];
                        weights = vec![0; value];
                        i += 2;
                    }
                    None => i += 1,
                },
                "c" | "C" => match tokens.get(i + 1).and_then(|t| t.parse::<u64>().ok()) {
                    Some(value) => {
                        capacity = value;
                        i += 2;
                    }
                    None => i += 1,
                },
                "p" if tokens.get(i + 1) == Some(&"w") => {
                    let n = n.ok_or_else(|| invalid_data("Table 'p w' found before 'n'"))?;
                    i += 2;
                    let mut rows = 0usize;
                    while rows < n && i + 2 < tokens.len() {
                        let row = (
                            tokens[i].parse::<usize>(),
                            tokens[i + 1].parse::<u64>(),
                            tokens[i + 2].parse::<u64>(),
                        );
                        let (Ok(idx), Ok(p), Ok(w)) = row else { break };
                        if idx >= n {
                            return Err(invalid_data(format!("Item {} out of bounds for n={}", idx, n)));
                        }
                        profits[idx] = p;
                        weights[idx] = w;
                        i += 3;
                        rows += 1;
                    }
                }
                "set" | "E" => {
                    i += 1;
                    while i + 1 < tokens.len() {
                        match (tokens[i].parse::<usize>(), tokens[i + 1].parse::<usize>()) {
                            (Ok(u), Ok(v)) => {
                                conflicts.push((u, v));
                                i += 2;
                            }
                            // Sla woorden als 'end' of losse symbolen over.
                            _ => i += 1,
                        }
                    }
                    i = tokens.len();
                }
                _ => i += 1,
            }
        }

        let n = n.unwrap_or(0);
        if let Some(&(u, v)) = conflicts.iter().find(|&&(u, v)| u >= n || v >= n) {
            return Err(invalid_data(format!("Conflict ({}, {}) out of bounds for n={}", u, v, n)));
        }
        Ok(Self::from_parts(capacity, profits, weights, &conflicts))
    }

    /*────────── Getters ──────────*/

    /// Geeft het aantal items terug.
    #[inline]
    pub fn n(&self) -> usize {
        self.adj.len()
    }

    /// Geeft het aantal conflicten terug (elk paar eenmaal geteld).
    pub fn m(&self) -> usize {
        self.adj.iter().map(|row| row.count_ones()).sum::<usize>() / 2
    }

    #[inline]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    #[inline]
    pub fn profit(&self, i: usize) -> u64 {
        self.profits[i]
    }

    #[inline]
    pub fn weight(&self, i: usize) -> u64 {
        self.weights[i]
    }

    pub fn profits(&self) -> &[u64] {
        &self.profits
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Geeft het aantal conflictburen van item `i` terug.
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.adj[i].count_ones()
    }

    /// Geeft een onveranderlijke slice van de conflictrij voor item `i`.
    #[inline]
    pub fn neigh_row(&self, i: usize) -> &BitSlice {
        &self.adj[i]
    }

    /// Controleert of `u` en `v` in conflict zijn.
    #[inline]
    pub fn in_conflict(&self, u: usize, v: usize) -> bool {
        self.adj[u][v]
    }

    /// Alle conflictparen `(u, v)` met `u < v`, oplopend gesorteerd.
    pub fn conflicts(&self) -> Vec<(usize, usize)> {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, row)| row.iter_ones().filter(move |&v| v > u).map(move |v| (u, v)))
            .collect()
    }

    /*────────── Mutators ──────────*/

    fn add_conflict(&mut self, u: usize, v: usize) {
        self.adj[u].set(v, true);
        self.adj[v].set(u, true);
    }
}

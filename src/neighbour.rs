// Bestand: src/neighbour.rs
//!
//! Lokale zoektocht op een haalbare oplossing met twee soorten moves:
//! - ADD: voeg een item toe dat past en geen conflictbuur in `S` heeft;
//! - SWAP ("1-in, K-out"): voeg `j` toe en verwijder tegelijk alle items in
//!   `S` die `j` blokkeren, als dat winst oplevert en binnen de capaciteit blijft.
//!
//! ADD gaat altijd voor SWAP. Er wordt herhaald tot een volledige doorgang
//! geen enkele move meer vindt (lokaal optimum).
use crate::solution::Solution;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

/// Aantal toegepaste moves in één `local_search`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveCounts {
    pub adds: usize,
    pub swaps: usize,
}

/// Een verbeterende SWAP: `incoming` gaat erin, `blockers` eruit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Swap {
    /// Positie van `incoming` in de lijst van items buiten `S`.
    pub position: usize,
    pub incoming: usize,
    pub blockers: Vec<usize>,
    pub gain: u64,
}

/// Eén ADD-doorgang in de volgorde van `outside`. Voegt elk item toe dat in de
/// resterende capaciteit past en geen buur in `S` heeft; toegevoegde items
/// verdwijnen uit `outside` (de volgorde van de rest blijft behouden).
/// Geeft het aantal toegevoegde items terug.
pub fn add_pass(sol: &mut Solution<'_>, outside: &mut Vec<usize>) -> usize {
    let before = outside.len();
    outside.retain(|&j| {
        if sol.fits(j) && !sol.is_blocked(j) {
            sol.add(j);
            false
        } else {
            true
        }
    });
    before - outside.len()
}

/// Zoekt in de volgorde van `outside` de eerste verbeterende SWAP (first improvement).
///
/// Voor kandidaat `j` is `B = N(j) ∩ S`. De swap is geldig als `B` niet leeg
/// is, `winst(j) > Σ winst(B)` en `gewicht(S) - Σ gewicht(B) + gewicht(j) ≤ C`.
pub fn first_improving_swap(sol: &Solution<'_>, outside: &[usize]) -> Option<Swap> {
    let instance = sol.instance();
    for (position, &j) in outside.iter().enumerate() {
        let blockers: Vec<usize> = sol.blockers(j).collect();
        if blockers.is_empty() {
            continue;
        }
        let lost_profit: u64 = blockers.iter().map(|&i| instance.profit(i)).sum();
        if instance.profit(j) <= lost_profit {
            continue;
        }
        let freed: u64 = blockers.iter().map(|&i| instance.weight(i)).sum();
        if sol.weight() - freed + instance.weight(j) <= instance.capacity() {
            return Some(Swap {
                position,
                incoming: j,
                gain: instance.profit(j) - lost_profit,
                blockers,
            });
        }
    }
    None
}

/// Past `swap` atomair toe op `sol` en werkt `outside` bij.
pub fn apply_swap(sol: &mut Solution<'_>, outside: &mut Vec<usize>, swap: Swap) {
    for &i in &swap.blockers {
        sol.remove(i);
    }
    sol.add(swap.incoming);
    outside.remove(swap.position);
    outside.extend(swap.blockers);
}

/// Verbetert `sol` tot een lokaal optimum onder ADD en SWAP.
///
/// Elke buitenste doorgang schudt eerst de items buiten `S`. Een doorgang die
/// minstens één ADD doet, begint meteen opnieuw; anders wordt de eerste
/// verbeterende SWAP toegepast en begint de volgende doorgang. De lus stopt
/// als een doorgang niets oplevert.
pub fn local_search<'i, R>(sol: &mut Solution<'i>, rng: &mut R) -> MoveCounts
where
    R: Rng + ?Sized,
{
    let n = sol.instance().n();
    let mut outside: Vec<usize> = (0..n).filter(|&j| !sol.contains(j)).collect();
    let mut counts = MoveCounts::default();

    loop {
        outside.shuffle(rng);

        let added = add_pass(sol, &mut outside);
        if added > 0 {
            counts.adds += added;
            continue;
        }

        match first_improving_swap(sol, &outside) {
            Some(swap) => {
                trace!(
                    "swap: +{} -{:?} (gain {})",
                    swap.incoming,
                    swap.blockers,
                    swap.gain
                );
                apply_swap(sol, &mut outside, swap);
                counts.swaps += 1;
            }
            None => break,
        }
    }
    counts
}

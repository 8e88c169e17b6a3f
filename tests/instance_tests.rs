// tests/instance_tests.rs
//! Unit tests voor het instantiemodel, de DAT-parser en de scoreranking.

extern crate kpc_grasp;
use approx::assert_relative_eq;
use kpc_grasp::instance::Instance;
use kpc_grasp::score::{desirability, rank_candidates, ZERO_WEIGHT_EPS};
use std::io::{Cursor, ErrorKind};

const SAMPLE_DAT: &str = "\
param n := 4;
param c := 10;
param : V : p w :=
0 10 5
1 20 10
2 15 8
3 7 0
;
set E :=
(0,1)
(2,3)
;
end;
";

#[test]
fn test_adjacency_is_symmetric() {
    let inst = Instance::from_parts(10, vec![1, 1, 1, 1], vec![1, 1, 1, 1], &[(0, 1), (2, 1)]);
    assert!(inst.in_conflict(0, 1));
    assert!(inst.in_conflict(1, 0));
    assert!(inst.in_conflict(1, 2));
    assert!(!inst.in_conflict(0, 2));
    assert_eq!(inst.degree(1), 2);
    assert_eq!(inst.degree(3), 0);
    assert_eq!(inst.m(), 2);
    assert_eq!(inst.conflicts(), vec![(0, 1), (1, 2)]);
}

#[test]
fn test_duplicate_and_self_conflicts_are_ignored() {
    let inst = Instance::from_parts(10, vec![1, 1], vec![1, 1], &[(0, 1), (1, 0), (1, 1)]);
    assert_eq!(inst.m(), 1);
    assert_eq!(inst.degree(0), 1);
    assert!(!inst.in_conflict(1, 1));
}

#[test]
fn test_parse_dat() {
    let inst = Instance::parse_dat(Cursor::new(SAMPLE_DAT)).unwrap();
    assert_eq!(inst.n(), 4);
    assert_eq!(inst.capacity(), 10);
    assert_eq!(inst.profits(), &[10, 20, 15, 7]);
    assert_eq!(inst.weights(), &[5, 10, 8, 0]);
    assert_eq!(inst.conflicts(), vec![(0, 1), (2, 3)]);
}

#[test]
fn test_parse_dat_missing_rows_default_to_zero() {
    let dat = "param n := 3; param C := 4; param : V : p w := 1 6 2 ;";
    let inst = Instance::parse_dat(Cursor::new(dat)).unwrap();
    assert_eq!(inst.capacity(), 4);
    assert_eq!(inst.profits(), &[0, 6, 0]);
    assert_eq!(inst.weights(), &[0, 2, 0]);
    assert_eq!(inst.m(), 0);
}

#[test]
fn test_parse_dat_rejects_out_of_range_conflict() {
    let dat = "param n := 2; param c := 4; set E := (0,5);";
    let err = Instance::parse_dat(Cursor::new(dat)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn test_parse_dat_rejects_table_before_n() {
    let dat = "param : V : p w := 0 1 1 ; param n := 1;";
    let err = Instance::parse_dat(Cursor::new(dat)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn test_parse_empty_input() {
    let inst = Instance::parse_dat(Cursor::new("")).unwrap();
    assert_eq!(inst.n(), 0);
    assert_eq!(inst.capacity(), 0);
}

#[test]
fn test_desirability_formula() {
    let inst = Instance::parse_dat(Cursor::new(SAMPLE_DAT)).unwrap();
    assert_relative_eq!(desirability(&inst, 0), (10.0 / 5.0) / 1.5, epsilon = 1e-12);
    assert_relative_eq!(desirability(&inst, 2), (15.0 / 8.0) / 1.5, epsilon = 1e-12);
    // Gewicht 0 gebruikt de epsilon in de noemer: hoog maar eindig.
    let zero = desirability(&inst, 3);
    assert!(zero.is_finite());
    assert_relative_eq!(zero, (7.0 / ZERO_WEIGHT_EPS) / 1.5, max_relative = 1e-12);
}

#[test]
fn test_ranking_descending_with_index_tiebreak() {
    let inst = Instance::parse_dat(Cursor::new(SAMPLE_DAT)).unwrap();
    let ranking = rank_candidates(&inst);
    let order: Vec<usize> = ranking.iter().map(|c| c.item).collect();
    // Items 0 en 1 hebben exact dezelfde score; 0 komt eerst.
    assert_eq!(order, vec![3, 0, 1, 2]);
    assert!(ranking.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_ranking_ties_ignore_input_order() {
    let inst = Instance::from_parts(100, vec![4, 2, 4, 2], vec![2, 1, 2, 1], &[]);
    let order: Vec<usize> = rank_candidates(&inst).iter().map(|c| c.item).collect();
    assert_eq!(order, vec![0, 1, 2, 3]);
}

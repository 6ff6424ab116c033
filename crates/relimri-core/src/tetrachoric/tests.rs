//! Tests for the tetrachoric correlation estimator: reference scenarios,
//! degenerate tables, precondition errors and randomized invariants.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_balanced_independent_vectors_give_zero() {
    let rho = tetrachoric_corr(&[0, 0, 1, 1], &[0, 1, 0, 1]).unwrap();
    assert!(
        rho.abs() < 1e-12,
        "Balanced independent vectors should give 0.0, got {}",
        rho
    );
    println!("[PASS] Independent vectors = 0.0: actual = {:.e}", rho);
}

#[test]
fn test_identical_vectors_give_one() {
    let rho = tetrachoric_corr(&[0, 0, 1, 1], &[0, 0, 1, 1]).unwrap();
    assert_eq!(rho, 1.0, "Identical mixed vectors should give exactly 1.0");
}

#[test]
fn test_complement_vectors_give_minus_one() {
    let rho = tetrachoric_corr(&[0, 0, 1, 1], &[1, 1, 0, 0]).unwrap();
    assert_eq!(rho, -1.0, "Complementary vectors should give exactly -1.0");
}

#[test]
fn test_constant_second_vector_gives_nan() {
    let rho = tetrachoric_corr(&[0, 0, 1, 1], &[1, 1, 1, 1]).unwrap();
    assert!(
        rho.is_nan(),
        "Zero discordant cell with zero concordant product should give NaN, got {}",
        rho
    );
}

// =============================================================================
// Degenerate Tables
// =============================================================================

#[test]
fn test_longer_identical_vectors_give_one() {
    let v: Vec<u8> = vec![0, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0, 0];
    let rho = tetrachoric_corr(&v, &v).unwrap();
    assert_eq!(rho, 1.0);
}

#[test]
fn test_all_zero_pair_gives_nan() {
    // A = n, D = 0, B = C = 0: the formula hits 0/0 and stays NaN.
    let rho = tetrachoric_corr(&[0, 0, 0, 0], &[0, 0, 0, 0]).unwrap();
    assert!(rho.is_nan());
}

#[test]
fn test_one_empty_discordant_cell_with_concordant_product_gives_one() {
    // A=1, B=0, C=1, D=1: AD/B is +inf, inf/C stays +inf, cos(0) = 1.0.
    let rho = tetrachoric_corr(&[0, 1, 1], &[0, 0, 1]).unwrap();
    assert_eq!(rho, 1.0);
}

#[test]
fn test_empty_concordant_cell_with_discordant_pairs_gives_minus_one() {
    // A=0, B=1, C=1, D=1: AD = 0, ratio = 0, cos(pi) = -1.0.
    let rho = tetrachoric_corr(&[0, 1, 1, 1], &[1, 0, 1, 1]).unwrap();
    assert_eq!(rho, -1.0);
}

// =============================================================================
// Precondition Errors
// =============================================================================

#[test]
fn test_empty_vector_error() {
    let result = tetrachoric_corr(&[], &[0, 1]);
    assert_eq!(result, Err(InputError::EmptyVector));
}

#[test]
fn test_length_mismatch_error() {
    let result = tetrachoric_corr(&[0, 1, 1], &[0, 1, 0, 1]);
    assert_eq!(
        result,
        Err(InputError::LengthMismatch { left: 3, right: 4 })
    );
    let msg = result.unwrap_err().to_string();
    assert!(
        msg.contains('3') && msg.contains('4'),
        "Mismatch message must carry both lengths, got: {}",
        msg
    );
}

// =============================================================================
// Contingency Table
// =============================================================================

#[test]
fn test_contingency_cells_partition_the_pairs() {
    let v1 = [0, 0, 1, 1, 1, 0];
    let v2 = [0, 1, 0, 1, 1, 0];
    let table = ContingencyTable::from_pair(&v1, &v2);
    assert_eq!(table.both_absent, 2);
    assert_eq!(table.only_second, 1);
    assert_eq!(table.only_first, 1);
    assert_eq!(table.both_present, 2);
    assert_eq!(table.total(), v1.len() as u64);
    assert_eq!(table.discordant(), 2);
}

#[test]
fn test_contingency_ignores_non_binary_values() {
    // Mirrors the boolean-mask counting of the reference: a pair with a value
    // outside {0,1} matches no cell.
    let table = ContingencyTable::from_pair(&[0, 2, 1], &[0, 0, 1]);
    assert_eq!(table.total(), 2);
}

// =============================================================================
// Randomized Invariants
// =============================================================================

#[test]
fn test_random_vectors_respect_range_and_nan_rules() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let len = rng.gen_range(1..=48);
        let v1: Vec<u8> = (0..len).map(|_| rng.gen_range(0..=1)).collect();
        let v2: Vec<u8> = (0..len).map(|_| rng.gen_range(0..=1)).collect();

        let table = ContingencyTable::from_pair(&v1, &v2);
        let rho = tetrachoric_corr(&v1, &v2).unwrap();

        if table.only_second > 0 && table.only_first > 0 {
            assert!(
                (-1.0..=1.0).contains(&rho),
                "Non-degenerate table must stay in [-1, 1], got {} for {:?}",
                rho,
                table
            );
        } else if table.both_absent * table.both_present > 0 {
            assert_eq!(rho, 1.0, "Empty discordant cell with AD > 0: {:?}", table);
        } else {
            assert!(rho.is_nan(), "Empty discordant cell with AD = 0: {:?}", table);
        }
    }
}

#[test]
fn test_random_identical_mixed_vectors_give_one() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let len = rng.gen_range(2..=48);
        let mut v: Vec<u8> = (0..len).map(|_| rng.gen_range(0..=1)).collect();
        // Force at least one of each value so A and D are both occupied.
        v[0] = 0;
        v[1] = 1;
        assert_eq!(tetrachoric_corr(&v, &v).unwrap(), 1.0);
    }
}

use std::collections::HashSet;

use bst_churn::{Churn, ChurnConfig, ChurnError, Mode};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Runs a random mix of asymmetric (`true`) and symmetric (`false`) perturbations and checks
/// after each one that the tree and the live set still agree.
#[quickcheck]
fn perturbations_keep_bijection(seed: u64, size: u8, modes: Vec<bool>) -> bool {
    let size = size as usize % 48 + 1;
    let Ok(mut churn) = Churn::populate(ChurnConfig::default(), StdRng::seed_from_u64(seed), size)
    else {
        return false;
    };

    for asymmetric in modes {
        let mode = if asymmetric {
            Mode::Asymmetric
        } else {
            Mode::Symmetric
        };
        if churn.perturb(mode).is_err() {
            return false;
        }

        let distinct: HashSet<i32> = churn.live().iter().collect();
        let consistent = churn.is_consistent()
            && churn.tree().len() == size
            && churn.live().len() == size
            && distinct.len() == size
            && churn.live().iter().all(|v| churn.tree().contains(v));
        if !consistent {
            return false;
        }
    }
    true
}

#[quickcheck]
fn small_value_space_stays_unique(seed: u64, cycles: u8) -> bool {
    let config = ChurnConfig {
        value_bound: 24,
        root_value: 12,
        max_draw_attempts: 10_000,
    };
    let Ok(mut churn) = Churn::populate(config, StdRng::seed_from_u64(seed), 16) else {
        return false;
    };

    for _ in 0..cycles % 32 {
        match churn.perturb(Mode::Symmetric) {
            Ok(_) => {}
            // A cascade may need more fresh values than the space has left.
            Err(ChurnError::ValueSpaceExhausted { .. }) => break,
            Err(_) => return false,
        }
    }
    let distinct: HashSet<i32> = churn.live().iter().collect();
    churn.is_consistent() && distinct.len() == churn.live().len()
}

#[test]
fn empty_population_is_reported() {
    let mut churn = Churn::new(ChurnConfig::default(), StdRng::seed_from_u64(0));
    assert_eq!(churn.perturb(Mode::Asymmetric), Err(ChurnError::EmptyPopulation));
    assert_eq!(churn.perturb(Mode::Symmetric), Err(ChurnError::EmptyPopulation));
}

use rand::seq::SliceRandom;
use rand::RngCore;

/// Draws `count` distinct indices from `0..pool_size`, skipping every index
/// listed in `exclude`.
pub(crate) fn distinct_indices(
    exclude: &[usize],
    count: usize,
    pool_size: usize,
    rng: &mut dyn RngCore,
) -> Vec<usize> {
    debug_assert!(count < pool_size);
    let mut indices: Vec<usize> = (0..pool_size).collect();
    indices.shuffle(rng);
    let mut out = Vec::with_capacity(count);
    for index in indices {
        if exclude.contains(&index) {
            continue;
        }
        out.push(index);
        if out.len() == count {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_indices_are_distinct_and_exclude_targets() {
        let mut rng = StdRng::seed_from_u64(42);
        for target in 0..10 {
            let indices = distinct_indices(&[target], 3, 10, &mut rng);
            assert_eq!(indices.len(), 3);
            assert!(!indices.contains(&target));
            let mut unique = indices.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), 3);
        }
    }

    #[test]
    fn test_multiple_exclusions() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let indices = distinct_indices(&[0, 3], 2, 6, &mut rng);
            assert_eq!(indices.len(), 2);
            assert!(!indices.contains(&0));
            assert!(!indices.contains(&3));
        }
    }

    #[test]
    fn test_duplicate_exclusions_are_tolerated() {
        let mut rng = StdRng::seed_from_u64(11);
        let indices = distinct_indices(&[2, 2], 3, 5, &mut rng);
        assert_eq!(indices.len(), 3);
        assert!(!indices.contains(&2));
    }
}

use crate::error::VariationError;
use crate::hash::StableHasher;
use crate::pool::Pool;

/// Picks one index of `pool` for `identifier`: `hash(identifier + salt) mod len`.
///
/// The salt is hashed together with the identifier, not combined with the result, so two
/// facets of the same page drawn from equally sized pools do not land on parallel slots.
pub fn pick<T>(pool: &Pool<T>, identifier: &str, salt: &str) -> Result<usize, VariationError> {
    if pool.is_empty() {
        return Err(VariationError::empty_pool(pool.name()));
    }
    let hash = StableHasher::new()
        .write_str(identifier)
        .write_str(salt)
        .finish();
    Ok(reduce(hash, pool.len()))
}

/// Picks `count` pairwise distinct indices of `pool` for `identifier`.
///
/// Slot `i` starts at `hash(identifier + salt + i) mod len` and probes forward, wrapping
/// around, until it finds an index no earlier slot took. Every probe run ends within
/// `len` steps because at most `count - 1 < len` indices are taken. The returned order is
/// part of the contract: callers render slots in this order.
pub fn pick_many<T>(
    pool: &Pool<T>,
    identifier: &str,
    salt: &str,
    count: usize,
) -> Result<Vec<usize>, VariationError> {
    if pool.is_empty() {
        return Err(VariationError::empty_pool(pool.name()));
    }
    pool.require(count)?;

    let len = pool.len();
    let mut taken = vec![false; len];
    let mut picked = Vec::with_capacity(count);
    for slot in 0..count {
        let hash = StableHasher::new()
            .write_str(identifier)
            .write_str(salt)
            .write_decimal(slot)
            .finish();
        let mut candidate = reduce(hash, len);
        while taken[candidate] {
            candidate = (candidate + 1) % len;
        }
        taken[candidate] = true;
        picked.push(candidate);
    }
    Ok(picked)
}

fn reduce(hash: u64, len: usize) -> usize {
    // len fits in u64 on every supported target, and the remainder is below len.
    (hash % len as u64) as usize
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::hash::stable_hash;

    fn features() -> Pool<&'static str> {
        Pool::new("features", vec!["F0", "F1", "F2", "F3", "F4"]).unwrap()
    }

    #[test]
    fn pick_reduces_the_salted_hash() {
        let pool = features();
        let expected = (stable_hash("Seattlehero") % 5) as usize;
        assert_eq!(pick(&pool, "Seattle", "hero").unwrap(), expected);
    }

    #[test]
    fn pick_many_reference_sequence() {
        let pool = features();
        for _ in 0..3 {
            assert_eq!(
                pick_many(&pool, "Seattle", "features", 4).unwrap(),
                vec![3, 4, 2, 1]
            );
        }
    }

    #[test]
    fn pick_many_full_pool_is_a_permutation() {
        let pool = features();
        let all = pick_many(&pool, "Seattle", "features", 5).unwrap();
        assert_eq!(all, vec![3, 4, 2, 1, 0]);

        let other = pick_many(&pool, "Tacoma", "features", 5).unwrap();
        let unique: HashSet<_> = other.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn pick_many_prefix_is_stable() {
        // Slot i only depends on slots before it, so asking for fewer items returns a prefix.
        let pool = features();
        let four = pick_many(&pool, "Bellevue", "features", 4).unwrap();
        let two = pick_many(&pool, "Bellevue", "features", 2).unwrap();
        assert_eq!(&four[..2], &two[..]);
    }

    #[test]
    fn pick_many_zero_is_empty() {
        assert!(pick_many(&features(), "Seattle", "features", 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn pick_many_over_capacity_fails() {
        for city in ["Seattle", "Kent", "Renton", ""] {
            assert_eq!(
                pick_many(&features(), city, "features", 6).unwrap_err(),
                VariationError::InsufficientPoolSize {
                    pool: "features".to_string(),
                    requested: 6,
                    available: 5,
                }
            );
        }
    }

    #[test]
    fn single_entry_pool_always_picks_zero() {
        let pool = Pool::new("only", vec!["x"]).unwrap();
        assert_eq!(pick(&pool, "Anywhere", "salt").unwrap(), 0);
        assert_eq!(pick_many(&pool, "Anywhere", "salt", 1).unwrap(), vec![0]);
    }
}

// Uniform random permutation of a participant snapshot.
//
// Fisher-Yates over a fresh copy: the caller's slice is never mutated and
// every permutation is equally likely under a uniform source. Duplicate
// entries are permitted and treated as distinct positional values.

use rand::Rng;

/// Return a uniformly random permutation of `items` using the thread-local
/// generator. The input is copied, never mutated.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// Fisher-Yates with an explicit generator, for deterministic tests.
///
/// For index i from last down to 1, pick a random j in [0, i] and swap.
pub fn shuffle_with<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut collection = items.to_vec();
    for i in (1..collection.len()).rev() {
        let j = rng.random_range(0..=i);
        collection.swap(i, j);
    }
    collection
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn sorted(mut items: Vec<String>) -> Vec<String> {
        items.sort();
        items
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn shuffle_preserves_length_and_multiset() {
        let input = names(&["Alice", "Bob", "Carol", "Dave", "Bob"]);
        let result = shuffle(&input);
        assert_eq!(result.len(), input.len());
        assert_eq!(sorted(result), sorted(input));
    }

    #[test]
    fn shuffle_empty_input() {
        let input: Vec<String> = Vec::new();
        assert!(shuffle(&input).is_empty());
    }

    #[test]
    fn shuffle_single_element() {
        let input = names(&["Alice"]);
        assert_eq!(shuffle(&input), input);
    }

    #[test]
    fn shuffle_does_not_mutate_input() {
        let input = names(&["Alice", "Bob", "Carol"]);
        let before = input.clone();
        let _ = shuffle(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        let input = names(&["Alice", "Bob", "Carol", "Dave"]);
        let a = shuffle_with(&input, &mut StdRng::seed_from_u64(42));
        let b = shuffle_with(&input, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_reaches_every_permutation_of_three() {
        // 3 elements have 6 permutations; a few hundred seeded draws is far
        // more than enough to observe all of them if the swap loop is right.
        let input = names(&["a", "b", "c"]);
        let mut seen = HashSet::new();
        for seed in 0..500u64 {
            let result = shuffle_with(&input, &mut StdRng::seed_from_u64(seed));
            seen.insert(result);
        }
        assert_eq!(seen.len(), 6, "expected all 6 permutations, saw {}", seen.len());
    }

    #[test]
    fn shuffle_keeps_duplicates_as_distinct_entries() {
        let input = names(&["Bob", "Bob", "Bob"]);
        let result = shuffle(&input);
        assert_eq!(result, input);
    }
}

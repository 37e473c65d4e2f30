use crate::domain::ports::RandomSource;

/// Returns a uniformly random permutation of `items` as a new vector,
/// leaving `items` untouched.
///
/// Fisher–Yates over a private copy: for each `i` from the last index down
/// to 1, swap position `i` with a position drawn from `0..=i`. The source is
/// consulted exactly `items.len() - 1` times (never for fewer than two items).
pub fn shuffle<T, S>(items: &[T], source: &mut S) -> Vec<T>
where
    T: Clone,
    S: RandomSource + ?Sized,
{
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = source.pick_inclusive(i);
        debug_assert!(j <= i, "random source returned {} outside 0..={}", j, i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    /// Replays fixed picks and records the bounds it was asked for.
    struct ScriptedSource {
        picks: Vec<usize>,
        bounds: Vec<usize>,
    }

    impl RandomSource for ScriptedSource {
        fn pick_inclusive(&mut self, upper: usize) -> usize {
            self.bounds.push(upper);
            self.picks.remove(0)
        }
    }

    fn sorted(mut v: Vec<&str>) -> Vec<&str> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty: Vec<&str> = Vec::new();
        assert!(shuffle(&empty, &mut rng).is_empty());
        assert_eq!(shuffle(&["solo"], &mut rng), vec!["solo"]);
    }

    #[test]
    fn test_shuffle_preserves_multiset_and_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec!["A", "B", "C", "D", "E"];
        let snapshot = items.clone();

        let result = shuffle(&items, &mut rng);

        assert_eq!(items, snapshot);
        assert_eq!(result.len(), items.len());
        assert_eq!(sorted(result), sorted(items));
    }

    #[test]
    fn test_shuffle_walks_indices_downwards() {
        let mut source = ScriptedSource {
            picks: vec![0, 0, 0],
            bounds: Vec::new(),
        };

        let result = shuffle(&["A", "B", "C", "D"], &mut source);

        assert_eq!(source.bounds, vec![3, 2, 1]);
        // i=3 swaps with 0: D B C A; i=2 swaps with 0: C B D A; i=1 swaps with 0: B C D A
        assert_eq!(result, vec!["B", "C", "D", "A"]);
    }

    #[test]
    fn test_identity_picks_keep_order() {
        let mut source = ScriptedSource {
            picks: vec![2, 1],
            bounds: Vec::new(),
        };
        assert_eq!(shuffle(&["A", "B", "C"], &mut source), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let items = ["A", "B", "C"];
        let mut counts: HashMap<Vec<&str>, usize> = HashMap::new();

        for _ in 0..6000 {
            *counts.entry(shuffle(&items, &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for (permutation, count) in counts {
            assert!(
                (800..=1200).contains(&count),
                "permutation {:?} drawn {} times",
                permutation,
                count
            );
        }
    }
}

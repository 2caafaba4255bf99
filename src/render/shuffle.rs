use rand::Rng;

/// Random permutation of `items`: repeatedly draw a uniformly random
/// remaining element and move it to the output. The input is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut remaining: Vec<T> = items.to_vec();
    let mut shuffled = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let pick = rng.gen_range(0..remaining.len());
        shuffled.push(remaining.remove(pick));
    }

    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn platforms() -> Vec<String> {
        ["Wii", "DS", "X360", "GB", "PS3", "NES", "PS2", "3DS", "PS4", "SNES"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn output_is_a_permutation_and_input_is_unchanged() {
        let input = platforms();
        let before = input.clone();
        let mut rng = StdRng::seed_from_u64(7);

        let out = shuffle(&input, &mut rng);

        assert_eq!(input, before);
        assert_eq!(out.len(), input.len());
        let mut a = out.clone();
        let mut b = input.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn duplicates_survive() {
        let input = vec!["a", "b", "a", "a"];
        let out = shuffle(&input, &mut StdRng::seed_from_u64(1));
        assert_eq!(out.iter().filter(|s| **s == "a").count(), 3);
    }

    #[test]
    fn empty_and_single() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(shuffle::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&[42], &mut rng), vec![42]);
    }

    #[test]
    fn same_seed_same_order() {
        let input = platforms();
        let a = shuffle(&input, &mut StdRng::seed_from_u64(99));
        let b = shuffle(&input, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn orders_vary_across_trials() {
        let input = platforms();
        let mut rng = StdRng::seed_from_u64(2024);
        let distinct: HashSet<Vec<String>> =
            (0..50).map(|_| shuffle(&input, &mut rng)).collect();
        assert!(distinct.len() > 40);
    }
}

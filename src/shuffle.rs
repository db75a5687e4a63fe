use rand::Rng;

/// Fisher-Yates over a defensive copy so the source pool is never reordered.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Synthesized view-count label, e.g. "417K weergaven".
pub fn generate_view_count<R: Rng>(rng: &mut R) -> String {
    let n: u32 = rng.random_range(10..=999);
    format!("{n}K weergaven")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn counts<T: std::hash::Hash + Eq + Clone>(items: &[T]) -> HashMap<T, usize> {
        let mut map = HashMap::new();
        for item in items {
            *map.entry(item.clone()).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn shuffled_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let source: Vec<u32> = (0..50).chain(0..10).collect();
        for _ in 0..20 {
            let out = shuffled(&source, &mut rng);
            assert_eq!(out.len(), source.len());
            assert_eq!(counts(&out), counts(&source));
        }
    }

    #[test]
    fn shuffled_leaves_source_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let source = vec!["a", "b", "c", "d", "e"];
        let before = source.clone();
        let _ = shuffled(&source, &mut rng);
        let _ = shuffled(&source, &mut rng);
        assert_eq!(source, before);
    }

    #[test]
    fn shuffled_handles_tiny_inputs() {
        let mut rng = StdRng::seed_from_u64(2);
        assert!(shuffled::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffled(&[42], &mut rng), vec![42]);
    }

    #[test]
    fn view_count_shape_and_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let label = generate_view_count(&mut rng);
            let digits = label.strip_suffix("K weergaven").expect("K suffix");
            assert!((2..=3).contains(&digits.len()), "bad label: {label}");
            let n: u32 = digits.parse().expect("numeric prefix");
            assert!((10..=999).contains(&n));
        }
    }
}

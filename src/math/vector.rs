/// Index of the largest element; the first one wins when several are equal.
///
/// Returns `0` for an empty slice.
pub fn argmax(v: &[f64]) -> usize {
    let mut best = 0;
    for i in 1..v.len() {
        if v[i] > v[best] {
            best = i;
        }
    }
    best
}

/// One-hot vector of length `n` with a `1.0` at `class`.
pub fn one_hot(class: usize, n: usize) -> Vec<f64> {
    let mut v = vec![0.0; n];
    if class < n {
        v[class] = 1.0;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_keeps_first_maximum() {
        assert_eq!(argmax(&[0.2, 0.9, 0.9, 0.1]), 1);
    }

    #[test]
    fn argmax_edges() {
        assert_eq!(argmax(&[]), 0);
        assert_eq!(argmax(&[-3.0]), 0);
        assert_eq!(argmax(&[0.0, 0.0, 0.0]), 0);
        assert_eq!(argmax(&[0.1, 0.2, 0.3]), 2);
    }

    #[test]
    fn one_hot_sets_single_entry() {
        assert_eq!(one_hot(2, 4), vec![0.0, 0.0, 1.0, 0.0]);
    }
}

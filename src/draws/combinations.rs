use log::debug;

/// All `k`-element subsets of `items`, each in the order of `items`, listed
/// lexicographically by position.
///
/// This uses an explicit stack rather than recursion.
pub fn combinations(items: &[u64], k: usize) -> Vec<Vec<u64>> {
    debug!("Generating {}-combinations of {:?}", k, items);

    if k == 0 {
        return vec![Vec::new()];
    }

    if k > items.len() {
        return vec![];
    }

    let mut result = Vec::new();

    let mut stack: Vec<(Vec<u64>, usize)> = Vec::new();
    stack.push((Vec::with_capacity(k), 0));

    while let Some((current, next_index)) = stack.pop() {
        if current.len() == k {
            result.push(current);
            continue;
        }

        let remaining = k - current.len();
        let last_start = items.len() - remaining;

        // reversed so the smallest index is popped first
        for index in (next_index..=last_start).rev() {
            if let Some(&item) = items.get(index) {
                let mut extended = current.clone();
                extended.push(item);
                stack.push((extended, index + 1));
            }
        }
    }

    debug!("Generated {} combinations", result.len());
    result
}

/// Number of ways to choose `k` of `n` items
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

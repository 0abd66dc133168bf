//! Grouping and aggregate helpers shared by the summaries.

use std::collections::HashMap;

/// Arithmetic mean of the present values. `None` when nothing is present.
pub fn mean_present(values: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0_f64, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Share of `hits` in `total` as a percentage. Zero when `total` is zero.
pub fn percentage(hits: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    hits as f64 / total as f64 * 100.0
}

/// Buckets `items` by key, keeping groups in first-encounter order and items
/// in source order within each group.
pub fn group_by_first_seen<'a, T, K, F>(
    items: impl IntoIterator<Item = &'a T>,
    key: F,
) -> Vec<(K, Vec<&'a T>)>
where
    T: 'a,
    K: Eq + std::hash::Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();
    for item in items {
        let group_key = key(item);
        match positions.get(&group_key) {
            Some(&position) => groups[position].1.push(item),
            None => {
                positions.insert(group_key.clone(), groups.len());
                groups.push((group_key, vec![item]));
            }
        }
    }
    groups
}

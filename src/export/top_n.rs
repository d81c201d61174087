use std::cmp::Ordering;

/// Direction of a top-N selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Largest primary values first
    #[default]
    Descending,
    /// Smallest primary values first
    Ascending,
}

/// Pair two sequences and keep the `n` pairs with the most extreme primary value
///
/// Pairs are formed positionally up to the shorter input. Pairs whose primary
/// value is unordered (NaN) are dropped. The sort is stable, so pairs with
/// equal primary values keep their input order.
///
/// ```
/// use mslibquant::export::{select_top_n, SortOrder};
///
/// let top = select_top_n(&[3, 1, 2], &['a', 'b', 'c'], 2, SortOrder::Descending);
/// assert_eq!(top, vec![(3, 'a'), (2, 'c')]);
/// ```
pub fn select_top_n<A, B>(primary: &[A], secondary: &[B], n: usize, order: SortOrder) -> Vec<(A, B)>
where
    A: PartialOrd + Copy,
    B: Copy,
{
    let mut pairs: Vec<(A, B)> = primary
        .iter()
        .copied()
        .zip(secondary.iter().copied())
        .filter(|(a, _)| a.partial_cmp(a).is_some())
        .collect();

    pairs.sort_by(|a, b| {
        let ordering = a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Descending => ordering.reverse(),
            SortOrder::Ascending => ordering,
        }
    });
    pairs.truncate(n);
    pairs
}

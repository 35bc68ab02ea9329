use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::parser::Dish;

/// The `n` highest-rated dishes, rating descending. Pops a max-heap keyed on
/// rating; equal ratings fall back to seed order.
pub fn top_rated(dishes: &[Dish], n: usize) -> Vec<Dish> {
    let mut heap: BinaryHeap<(u32, Reverse<usize>)> = dishes
        .iter()
        .enumerate()
        .map(|(i, d)| (d.rating, Reverse(i)))
        .collect();

    let mut top = Vec::with_capacity(n.min(dishes.len()));
    while top.len() < n {
        match heap.pop() {
            Some((_, Reverse(i))) => top.push(dishes[i].clone()),
            None => break,
        }
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::seed_dishes;

    #[test]
    fn test_top_three_of_seed() {
        let dishes = seed_dishes().unwrap();
        let top = top_rated(&dishes, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].name, "Paneer");
        assert_eq!(top[0].rating, 5);
        // the two remaining spots go to the 4-rated pair
        assert_eq!(top[1].name, "Rice");
        assert_eq!(top[2].name, "Chole");
    }

    #[test]
    fn test_ratings_never_increase() {
        let dishes = seed_dishes().unwrap();
        let top = top_rated(&dishes, dishes.len());
        assert!(top.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_asking_for_more_than_available() {
        let dishes = seed_dishes().unwrap();
        assert_eq!(top_rated(&dishes, 100).len(), dishes.len());
        assert!(top_rated(&[], 3).is_empty());
    }
}

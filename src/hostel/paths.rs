use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::parser::CampusEdge;

/// Weighted adjacency over campus spots. Edges are undirected: each seed edge
/// is inserted in both directions.
#[derive(Debug, Clone)]
pub struct CampusMap {
    adjacency: HashMap<String, Vec<(String, u32)>>,
}

impl CampusMap {
    pub fn from_edges(edges: &[CampusEdge]) -> Self {
        let mut adjacency: HashMap<String, Vec<(String, u32)>> = HashMap::new();
        for edge in edges {
            adjacency
                .entry(edge.from.clone())
                .or_default()
                .push((edge.to.clone(), edge.weight));
            adjacency
                .entry(edge.to.clone())
                .or_default()
                .push((edge.from.clone(), edge.weight));
        }
        CampusMap { adjacency }
    }

    /// Dijkstra over non-negative weights. Returns the cheapest total weight
    /// from `source` to `destination`, or `None` when the destination is
    /// unreachable (or either spot is unknown).
    pub fn shortest_path(&self, source: &str, destination: &str) -> Option<u32> {
        if !self.adjacency.contains_key(source) || !self.adjacency.contains_key(destination) {
            return None;
        }

        let mut dist: HashMap<&str, u32> = HashMap::new();
        dist.insert(source, 0);

        let mut heap: BinaryHeap<Reverse<(u32, &str)>> = BinaryHeap::new();
        heap.push(Reverse((0, source)));

        while let Some(Reverse((d, spot))) = heap.pop() {
            if d > *dist.get(spot).unwrap_or(&u32::MAX) {
                continue; // stale heap entry
            }
            if spot == destination {
                return Some(d);
            }
            for (next, weight) in &self.adjacency[spot] {
                let candidate = d + weight;
                if candidate < *dist.get(next.as_str()).unwrap_or(&u32::MAX) {
                    dist.insert(next.as_str(), candidate);
                    heap.push(Reverse((candidate, next.as_str())));
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::seed_campus_edges;

    fn seeded_map() -> CampusMap {
        CampusMap::from_edges(&seed_campus_edges().unwrap())
    }

    #[test]
    fn test_relaxation_beats_direct_edge() {
        let map = seeded_map();
        // Gate-Mess (2) + Mess-Laundry (1) beats Gate-Laundry (4)
        assert_eq!(map.shortest_path("Gate", "Laundry"), Some(3));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let map = seeded_map();
        for spot in ["Gate", "Mess", "Laundry"] {
            assert_eq!(map.shortest_path(spot, spot), Some(0));
        }
    }

    #[test]
    fn test_undirected_edges_work_both_ways() {
        let map = seeded_map();
        assert_eq!(map.shortest_path("Laundry", "Gate"), Some(3));
    }

    #[test]
    fn test_unreachable_is_none() {
        let edges = vec![
            CampusEdge {
                from: "Gate".to_string(),
                to: "Mess".to_string(),
                weight: 2,
            },
            CampusEdge {
                from: "Gym".to_string(),
                to: "Pool".to_string(),
                weight: 1,
            },
        ];
        let map = CampusMap::from_edges(&edges);
        assert_eq!(map.shortest_path("Gate", "Pool"), None);
        assert_eq!(map.shortest_path("Gate", "Library"), None);
    }
}

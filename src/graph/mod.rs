//! Weighted undirected graphs and their minimum spanning trees.
//!
//! Nothing in here knows about grids: vertices are any ordered, hashable
//! value, weights any ordered value.

mod prim;

use std::collections::{BTreeMap, HashSet, btree_map};
use std::hash::Hash;

pub use prim::minimum_spanning_tree;

/// An undirected edge between two distinct vertices.
///
/// The endpoints are kept in ascending order, so `Edge::new(a, b)` and
/// `Edge::new(b, a)` compare, hash and sort identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V> {
    lo: V,
    hi: V,
}

impl<V: Ord> Edge<V> {
    /// Returns `None` for a self-loop.
    pub fn new(a: V, b: V) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Edge { lo: a, hi: b }),
            std::cmp::Ordering::Greater => Some(Edge { lo: b, hi: a }),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl<V: Copy + Eq> Edge<V> {
    /// Both endpoints, smaller first.
    pub fn endpoints(&self) -> (V, V) {
        (self.lo, self.hi)
    }

    pub fn contains(&self, v: V) -> bool {
        self.lo == v || self.hi == v
    }

    /// The endpoint across from `v`, if `v` is on this edge.
    pub fn other(&self, v: V) -> Option<V> {
        if self.lo == v {
            Some(self.hi)
        } else if self.hi == v {
            Some(self.lo)
        } else {
            None
        }
    }
}

/// A root vertex plus a weight for every edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph<V, W> {
    root: V,
    edges: BTreeMap<Edge<V>, W>,
}

/// A weighted graph produced by [`minimum_spanning_tree`]; it holds no cycles.
pub type SpanningTree<V, W> = WeightedGraph<V, W>;

impl<V, W> WeightedGraph<V, W>
where
    V: Copy + Eq + Hash + Ord,
    W: Copy,
{
    pub fn new(root: V) -> Self {
        WeightedGraph {
            root,
            edges: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> V {
        self.root
    }

    /// Adds or reweights the edge between `a` and `b`.
    /// Returns `false` and leaves the graph untouched when `a == b`.
    pub fn insert(&mut self, a: V, b: V, weight: W) -> bool {
        match Edge::new(a, b) {
            Some(edge) => {
                self.edges.insert(edge, weight);
                true
            }
            None => false,
        }
    }

    pub fn weight(&self, a: V, b: V) -> Option<W> {
        Edge::new(a, b).and_then(|edge| self.edges.get(&edge).copied())
    }

    pub fn contains(&self, a: V, b: V) -> bool {
        self.weight(a, b).is_some()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges with their weights, in canonical edge order.
    pub fn edges(&self) -> btree_map::Iter<'_, Edge<V>, W> {
        self.edges.iter()
    }

    /// The root plus every vertex touched by an edge.
    pub fn vertices(&self) -> HashSet<V> {
        let mut vertices: HashSet<V> = self
            .edges
            .keys()
            .flat_map(|edge| {
                let (a, b) = edge.endpoints();
                [a, b]
            })
            .collect();
        vertices.insert(self.root);
        vertices
    }

    pub fn total_weight(&self) -> W
    where
        W: std::iter::Sum<W>,
    {
        self.edges.values().copied().sum()
    }
}

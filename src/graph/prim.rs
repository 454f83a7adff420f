use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
    hash::Hash,
};

use super::{Edge, SpanningTree, WeightedGraph};

type Candidates<V, W> = BinaryHeap<Reverse<(W, Edge<V>)>>;

/// Grows a minimum spanning tree from the graph's root with Prim's algorithm.
///
/// Each step takes the lightest edge with exactly one endpoint in the tree so far.
/// Equal weights are resolved by canonical edge order, so the result depends only
/// on the input graph. Vertices not reachable from the root are left out.
pub fn minimum_spanning_tree<V, W>(graph: &WeightedGraph<V, W>) -> SpanningTree<V, W>
where
    V: Copy + Eq + Hash + Ord,
    W: Copy + Ord,
{
    let mut incident: HashMap<V, Vec<(Edge<V>, W)>> = HashMap::new();
    for (&edge, &weight) in graph.edges() {
        let (a, b) = edge.endpoints();
        incident.entry(a).or_default().push((edge, weight));
        incident.entry(b).or_default().push((edge, weight));
    }

    let root = graph.root();
    let mut tree = SpanningTree::new(root);
    let mut frontier = HashSet::from([root]);
    let mut candidates: Candidates<V, W> = BinaryHeap::new();
    push_incident(&incident, root, &mut candidates);

    while let Some(Reverse((weight, edge))) = candidates.pop() {
        let (a, b) = edge.endpoints();
        let outside = match (frontier.contains(&a), frontier.contains(&b)) {
            (true, false) => b,
            (false, true) => a,
            // Both ends already joined; taking it would close a cycle.
            _ => continue,
        };

        tree.insert(a, b, weight);
        frontier.insert(outside);
        push_incident(&incident, outside, &mut candidates);
        tracing::trace!(
            "[prim] frontier at {} vertices, {} candidates queued",
            frontier.len(),
            candidates.len()
        );
    }

    tracing::debug!(
        "[prim] spanning tree has {} edges over {} reachable vertices",
        tree.len(),
        frontier.len()
    );
    tree
}

fn push_incident<V, W>(
    incident: &HashMap<V, Vec<(Edge<V>, W)>>,
    v: V,
    candidates: &mut Candidates<V, W>,
) where
    V: Copy + Eq + Hash + Ord,
    W: Copy + Ord,
{
    if let Some(edges) = incident.get(&v) {
        candidates.extend(edges.iter().map(|&(edge, weight)| Reverse((weight, edge))));
    }
}

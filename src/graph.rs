/*
Weighted adjacency store for named locations.

Edges are declared one at a time on a `GraphBuilder`. Consuming the builder with
`symmetrize` derives the missing reverse edges exactly once and hands back an
immutable `Graph` that queries only ever read.
*/

use hashbrown::HashMap;

pub type Location = String;
pub type Weight = u64;

type Adjacency = HashMap<Location, HashMap<Location, Weight>>;

#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    adjacency: Adjacency,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare (or redeclare) the directed edge `from -> to`. Returns the weight
    /// it replaced, if the edge was already declared.
    ///
    /// Only `from` gets an adjacency entry here; `to` gets one when
    /// `symmetrize` adds its reverse edge.
    pub fn add_edge(
        &mut self,
        from: impl Into<Location>,
        to: impl Into<Location>,
        weight: Weight,
    ) -> Option<Weight> {
        self.adjacency
            .entry(from.into())
            .or_default()
            .insert(to.into(), weight)
    }

    /// Weight of the declared edge `from -> to`, if any.
    pub fn weight(&self, from: &str, to: &str) -> Option<Weight> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Number of directed edges declared so far.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    /// Add `b -> a` for every declared `a -> b` that has no explicit reverse,
    /// then freeze. Explicit reverse weights are never overwritten.
    pub fn symmetrize(mut self) -> Graph {
        // Snapshot first so that derived edges are not walked again.
        let declared: Vec<(Location, Location, Weight)> = self
            .adjacency
            .iter()
            .flat_map(|(from, edges)| {
                edges
                    .iter()
                    .map(move |(to, &weight)| (from.clone(), to.clone(), weight))
            })
            .collect();

        for (from, to, weight) in declared {
            self.adjacency.entry(to).or_default().entry(from).or_insert(weight);
        }

        self.freeze()
    }

    /// Freeze the declared edges as-is, without deriving reverse edges.
    pub fn freeze(self) -> Graph {
        Graph { adjacency: self.adjacency }
    }
}

/// Immutable adjacency map. Cheap to share behind an `Arc` between concurrent queries.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    adjacency: Adjacency,
}

impl Graph {
    /// Outgoing edges of `location`. Unknown locations simply have none.
    pub fn neighbors(&self, location: &str) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.adjacency
            .get(location)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, &weight)| (to.as_str(), weight)))
    }

    pub fn weight(&self, from: &str, to: &str) -> Option<Weight> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// True if `location` has its own adjacency entry (it may still have no edges).
    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Every location with an adjacency entry, in no particular order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }
}

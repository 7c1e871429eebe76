use std::cmp::Reverse;
use std::fmt;

use hashbrown::HashMap;
use priority_queue::PriorityQueue;
use tracing::debug;

use crate::graph::{Graph, Location, Weight};

/// Total cost of a route. `Unreachable` orders after every finite distance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Weight),
    Unreachable,
}

impl Distance {
    pub fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    pub fn is_unreachable(self) -> bool {
        self == Distance::Unreachable
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Answer to a single query. `path` runs from source to destination inclusive
/// and is empty exactly when `distance` is `Unreachable`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub distance: Distance,
    pub path: Vec<Location>,
}

impl Route {
    pub fn is_reachable(&self) -> bool {
        !self.distance.is_unreachable()
    }

    pub fn render_path(&self, separator: &str) -> String {
        self.path.join(separator)
    }
}

/// Dijkstra from `source`, stopping as soon as `destination` is settled.
///
/// Only locations with their own adjacency entry take part in the search: a
/// location that appears solely as somebody's neighbor is never settled and
/// never relaxed. Among equal-cost candidates the lexicographically smallest
/// location is settled first, which makes the returned path deterministic.
///
/// Weights are unsigned, so the non-negativity the algorithm relies on always holds.
pub fn shortest_route<'a>(graph: &'a Graph, source: &'a str, destination: &'a str) -> Route {
    let mut distance: HashMap<&'a str, Distance> = HashMap::with_capacity(graph.len() + 1);
    let mut previous: HashMap<&'a str, &'a str> = HashMap::new();
    let mut unvisited: PriorityQueue<&'a str, Reverse<(Distance, &'a str)>> =
        PriorityQueue::with_capacity(graph.len());

    for location in graph.locations() {
        distance.insert(location, Distance::Unreachable);
        unvisited.push(location, Reverse((Distance::Unreachable, location)));
    }

    // An unknown source still gets its zero here; it just never leaves the queue.
    distance.insert(source, Distance::Finite(0));
    unvisited.change_priority(source, Reverse((Distance::Finite(0), source)));

    let mut settled = 0usize;
    while let Some((current, Reverse((current_distance, _)))) = unvisited.pop() {
        let Distance::Finite(base) = current_distance else {
            break;
        };
        if current == destination {
            break;
        }
        settled += 1;

        for (neighbor, weight) in graph.neighbors(current) {
            let known = match unvisited.get_priority(neighbor) {
                Some(Reverse((d, _))) => *d,
                None => continue,
            };
            let candidate = Distance::Finite(base.saturating_add(weight));
            if candidate < known {
                unvisited.change_priority(neighbor, Reverse((candidate, neighbor)));
                distance.insert(neighbor, candidate);
                previous.insert(neighbor, current);
            }
        }
    }

    let mut path = Vec::new();
    let mut step = Some(destination);
    while let Some(location) = step {
        path.push(location.to_string());
        step = previous.get(location).copied();
    }
    path.reverse();

    let total = distance.get(destination).copied().unwrap_or(Distance::Unreachable);
    if total.is_unreachable() {
        path.clear();
    }

    debug!(source, destination, %total, settled, "route computed");
    Route { distance: total, path }
}

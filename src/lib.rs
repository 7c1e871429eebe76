/*
Shortest routes between named locations.

A `graph::Graph` is built once from an edge list (`dataset`), then shared read-only
by every query. `dijkstra::shortest_route` answers one (source, destination) pair;
`gateway` puts that behind `GET /route`.
*/

pub mod cli;
pub mod dataset;
pub mod dijkstra;
pub mod gateway;
pub mod graph;

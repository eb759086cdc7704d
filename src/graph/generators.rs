use crate::graph::{AdjacencyGraph, Graph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::Rng;

/// Generates a random directed graph on vertices `0..n` with about
/// `edge_factor * n` edges and weights drawn from `[0, max_weight)`.
///
/// Every vertex is keyed even if it ends up with no edges. Self-loops are skipped.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: f64,
    rng: &mut R,
) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(0.0..max_weight));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width * height` grid with 8-connectivity.
///
/// Cardinal moves cost 1.0 and diagonal moves 1.4. Vertex `y * width + x`
/// is the cell at column `x`, row `y`.
pub fn generate_grid(width: usize, height: usize) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            graph.add_vertex(vertex);

            let directions = [
                (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
                (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    debug_assert_eq!(graph.vertex_count(), width * height);
    graph
}

//! Branch-and-bound exact solver.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::SolveError;
use crate::models::{Point, Tour};

/// Finds the minimum-length Hamiltonian cycle by branch-and-bound search.
///
/// Depth-first search over partial paths rooted at vertex 0. Each branch
/// owns push/pop-scoped state (path, visited flags, accumulated cost),
/// restored on return. A branch is abandoned when its lower bound reaches
/// the best complete tour found so far; the bound never overestimates the
/// cost of completing a partial path, so the search remains exact.
///
/// The bound adds, to the accumulated cost, the cheapest edge from the
/// current vertex to any unvisited vertex, plus half the cheapest incident
/// edge of each unvisited vertex (counting the edge back to vertex 0).
/// Every tour vertex has two incident edges, each at least as long as its
/// cheapest, so the half-sum is admissible for symmetric distances.
///
/// Worst case O(n!); pruning makes tens of points practical. Callers are
/// responsible for capping the instance size before invoking — the search
/// itself imposes no ceiling and no timeout.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] if any coordinate is non-finite.
///
/// # Examples
///
/// ```
/// use planar_tsp::models::Point;
/// use planar_tsp::exact::branch_and_bound;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 3.0),
///     Point::new(4.0, 3.0),
///     Point::new(4.0, 0.0),
/// ];
/// let tour = branch_and_bound(&points)?;
/// assert!((tour.length(&points) - 14.0).abs() < 1e-10);
/// # Ok::<(), planar_tsp::SolveError>(())
/// ```
pub fn branch_and_bound(points: &[Point]) -> Result<Tour, SolveError> {
    let dm = DistanceMatrix::from_points(points)?;
    let n = dm.size();
    if n == 0 {
        return Ok(Tour::empty());
    }
    if n <= 2 {
        return Ok(Tour::new((0..n).collect()));
    }

    let mut search = Search {
        dm: &dm,
        n,
        path: Vec::with_capacity(n),
        visited: vec![false; n],
        best_cost: f64::INFINITY,
        best_order: Vec::new(),
    };
    search.path.push(0);
    search.visited[0] = true;
    search.dfs(0.0);

    Ok(Tour::new(search.best_order))
}

struct Search<'a> {
    dm: &'a DistanceMatrix,
    n: usize,
    path: Vec<usize>,
    visited: Vec<bool>,
    best_cost: f64,
    best_order: Vec<usize>,
}

impl Search<'_> {
    fn dfs(&mut self, cost: f64) {
        let current = *self.path.last().expect("path starts at vertex 0");

        if self.path.len() == self.n {
            let total = cost + self.dm.get(current, 0);
            if total < self.best_cost {
                debug!("branch-and-bound: new incumbent {:.6}", total);
                self.best_cost = total;
                self.best_order = self.path.clone();
            }
            return;
        }

        if self.lower_bound(current, cost) >= self.best_cost {
            return;
        }

        for next in 0..self.n {
            if self.visited[next] {
                continue;
            }
            self.visited[next] = true;
            self.path.push(next);
            self.dfs(cost + self.dm.get(current, next));
            self.path.pop();
            self.visited[next] = false;
        }
    }

    /// Admissible lower bound on any completion of the current partial path.
    fn lower_bound(&self, current: usize, cost: f64) -> f64 {
        let unvisited: Vec<usize> = (0..self.n).filter(|&v| !self.visited[v]).collect();

        match unvisited.len() {
            0 => return cost + self.dm.get(current, 0),
            1 => {
                let v = unvisited[0];
                return cost + self.dm.get(current, v) + self.dm.get(v, 0);
            }
            _ => {}
        }

        let mut bound = cost;

        let mut min_from_current = f64::INFINITY;
        for &v in &unvisited {
            min_from_current = min_from_current.min(self.dm.get(current, v));
        }
        bound += min_from_current;

        // Half the cheapest incident edge per remaining vertex, the edge
        // back to the start included, as a spanning-structure estimate.
        for &v in &unvisited {
            let mut cheapest = self.dm.get(v, 0);
            for &w in &unvisited {
                if w != v {
                    cheapest = cheapest.min(self.dm.get(v, w));
                }
            }
            bound += cheapest * 0.5;
        }

        bound
    }
}

//! Held-Karp exact solver.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::SolveError;
use crate::models::{Point, Tour};

/// Largest instance [`held_karp`] will attempt.
///
/// The DP tables are O(2ⁿ · n); past this point the allocation itself is
/// the failure mode, so the entry point refuses rather than aborting.
pub const MAX_POINTS: usize = 20;

/// Finds the minimum-length Hamiltonian cycle by dynamic programming.
///
/// Held-Karp bitmask DP: `dp[mask][last]` is the minimum cost of a path
/// from vertex 0 that visits exactly the index set `mask` and ends at
/// `last`, with `parent[mask][last]` recording the predecessor for
/// reconstruction. The answer is the minimum over `last ≠ 0` of
/// `dp[full][last]` plus the closing edge back to 0. Tables are flat
/// row-major vectors, allocated fresh per call and discarded afterwards.
///
/// O(n² · 2ⁿ) time, O(n · 2ⁿ) space: exponential, but exact in far less
/// than factorial time.
///
/// # Errors
///
/// - [`SolveError::InvalidInput`] if any coordinate is non-finite.
/// - [`SolveError::ResourceExceeded`] if more than [`MAX_POINTS`] points
///   are supplied.
///
/// # Examples
///
/// ```
/// use planar_tsp::models::Point;
/// use planar_tsp::exact::held_karp;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 3.0),
///     Point::new(4.0, 3.0),
///     Point::new(4.0, 0.0),
/// ];
/// let tour = held_karp(&points)?;
/// assert!((tour.length(&points) - 14.0).abs() < 1e-10);
/// # Ok::<(), planar_tsp::SolveError>(())
/// ```
pub fn held_karp(points: &[Point]) -> Result<Tour, SolveError> {
    let dm = DistanceMatrix::from_points(points)?;
    let n = dm.size();
    if n == 0 {
        return Ok(Tour::empty());
    }
    if n <= 2 {
        return Ok(Tour::new((0..n).collect()));
    }
    if n > MAX_POINTS {
        return Err(SolveError::ResourceExceeded {
            points: n,
            limit: MAX_POINTS,
        });
    }

    let states = 1usize << n;
    debug!("held-karp: {} points, {} subset states", n, states);
    let idx = |mask: usize, last: usize| mask * n + last;

    let mut dp = vec![f64::INFINITY; states * n];
    let mut parent = vec![usize::MAX; states * n];
    dp[idx(1, 0)] = 0.0;

    for mask in 1..states {
        // Every reachable state contains the start vertex.
        if mask & 1 == 0 {
            continue;
        }
        for last in 0..n {
            if mask & (1 << last) == 0 {
                continue;
            }
            let cur = dp[idx(mask, last)];
            if !cur.is_finite() {
                continue;
            }
            for next in 0..n {
                if mask & (1 << next) != 0 {
                    continue;
                }
                let extended = mask | (1 << next);
                let cand = cur + dm.get(last, next);
                if cand < dp[idx(extended, next)] {
                    dp[idx(extended, next)] = cand;
                    parent[idx(extended, next)] = last;
                }
            }
        }
    }

    let full = states - 1;
    let mut best_last = usize::MAX;
    let mut best_cost = f64::INFINITY;
    for last in 1..n {
        let total = dp[idx(full, last)] + dm.get(last, 0);
        if total < best_cost {
            best_cost = total;
            best_last = last;
        }
    }

    // Walk the parent pointers back to vertex 0, then reverse.
    let mut order = Vec::with_capacity(n);
    let mut mask = full;
    let mut last = best_last;
    while last != usize::MAX {
        order.push(last);
        let prev = parent[idx(mask, last)];
        mask &= !(1 << last);
        last = prev;
    }
    order.reverse();

    Ok(Tour::new(order))
}

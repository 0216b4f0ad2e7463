use mazegrid_core::Position;

/// Manhattan (L1) distance between two grid positions.
///
/// Admissible and consistent for 4-directional movement with uniform step
/// cost 1, which makes it the A* heuristic of choice here.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

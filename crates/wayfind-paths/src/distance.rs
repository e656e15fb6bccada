use wayfind_core::Cell;

/// Manhattan (L1) distance between two cells, saturating at `i32::MAX`.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    let d = a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col));
    i32::try_from(d).unwrap_or(i32::MAX)
}

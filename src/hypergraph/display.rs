use super::{Hypergraph, IncidenceMatrix};

use core::fmt;

/// One row per vertex, `1` where the vertex occurs in the column's hyperedge.
impl fmt::Display for IncidenceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for &cell in row {
                write!(f, "{} ", u8::from(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Hyperedges as space-separated vertex ids, e.g. `{ 0 1 } { 1 2 3 }`.
impl fmt::Display for Hypergraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for hyperedge in &self.hyperedges {
            if !first {
                write!(f, " ")?;
            }
            first = false;

            write!(f, "{{ ")?;
            for v in &hyperedge.vertices {
                write!(f, "{} ", v.0)?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}

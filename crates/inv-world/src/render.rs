//! Map renderer, the inverse of the [loader](crate::loader).
//!
//! Writes one line per surviving city in arena order.  Destroyed cities are
//! omitted, and so are edges into them (the destruction sweep already removed
//! those).  Output parses back with [`load_world_reader`][crate::load_world_reader].

use std::fmt;
use std::io::{self, Write};

use crate::World;

/// Write the surviving map to `out`.
pub fn render_map<W: Write>(world: &World, mut out: W) -> io::Result<()> {
    write!(out, "{world}")?;
    out.flush()
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, city) in self.cities().filter(|(_, c)| !c.destroyed) {
            f.write_str(&city.name)?;
            for edge in &city.edges {
                write!(f, " {}={}", edge.direction, self.city(edge.to).name)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

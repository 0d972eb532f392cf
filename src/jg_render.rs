// DOT rendering of a generated edge set

use std::io::{self, Write};

use crate::jg_pair::Pair;

/// Write `edges` as an undirected DOT graph, one `\ta -- b;` line per edge.
///
/// Lines without a leading tab are the header and footer, so the output can
/// also be consumed as a plain edge list.
pub fn write_dot<'a, W, I>(writer: &mut W, edges: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Pair>,
{
    writeln!(writer, "graph {{")?;
    for edge in edges {
        writeln!(writer, "\t{} -- {};", edge.a(), edge.b())?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_dot_layout() {
        let edges: BTreeSet<Pair> = [(5, 2), (0, 1)]
            .iter()
            .filter_map(|&(x, y)| Pair::new(x, y))
            .collect();

        let mut out = Vec::new();
        write_dot(&mut out, &edges).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "graph {\n\t0 -- 1;\n\t2 -- 5;\n}\n"
        );
    }

    #[test]
    fn test_empty_graph() {
        let mut out = Vec::new();
        write_dot(&mut out, &BTreeSet::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "graph {\n}\n");
    }
}

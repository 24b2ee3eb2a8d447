//! Merge graph export.

use crate::core::merges::Symbol;
use crate::core::vocab::VocabularyTable;
use crate::error::{Result, TokenizerError};
use std::fmt::Write;

/// A directed edge from a merge symbol to one of its constituents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: Symbol,
    pub to: Symbol,
}

impl Edge {
    pub const fn new(from: Symbol, to: Symbol) -> Self {
        Self { from, to }
    }
}

/// Emit `t -> left` and `t -> right` for every merge entry, in table order.
///
/// Leaves contribute no edges. A constituent outside the table is an error.
pub fn export_graph(table: &VocabularyTable) -> Result<Vec<Edge>> {
    let mut edges = Vec::with_capacity(table.merge_count() * 2);

    for (symbol, pair) in table.merges() {
        for to in [pair.left, pair.right] {
            if to as usize >= table.len() {
                return Err(TokenizerError::UnknownSymbol {
                    symbol: to,
                    len: table.len(),
                });
            }
            edges.push(Edge::new(symbol, to));
        }
    }

    Ok(edges)
}

/// Format an edge list as a DOT `digraph` block called `name`.
///
/// The name is always written as a quoted ID, so spaces, dashes and quotes
/// in it are safe.
pub fn to_dot(edges: &[Edge], name: &str) -> String {
    let mut dot = String::with_capacity(edges.len() * 16 + name.len() + 18);
    // Writing into a String cannot fail.
    let _ = writeln!(dot, "digraph {} {{", quote_id(name));
    for edge in edges {
        let _ = writeln!(dot, "    {} -> {}", edge.from, edge.to);
    }
    dot.push_str("}\n");
    dot
}

fn quote_id(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::merges::Pair;

    #[test]
    fn test_export_graph_classic() {
        let (a, b) = (b'a' as Symbol, b'b' as Symbol);
        let mut table = VocabularyTable::new();
        let z = table.append_merge(Pair::new(a, a)).unwrap();
        let y = table.append_merge(Pair::new(a, b)).unwrap();
        let x = table.append_merge(Pair::new(z, y)).unwrap();

        let edges = export_graph(&table).unwrap();
        assert_eq!(
            edges,
            vec![
                Edge::new(z, a),
                Edge::new(z, a),
                Edge::new(y, a),
                Edge::new(y, b),
                Edge::new(x, z),
                Edge::new(x, y),
            ]
        );
    }

    #[test]
    fn test_export_graph_leaves_only() {
        assert!(export_graph(&VocabularyTable::new()).unwrap().is_empty());
    }

    #[test]
    fn test_export_graph_out_of_range() {
        let mut entries = VocabularyTable::new().entries().to_vec();
        entries.push(Pair::new(97, 4000));
        let table = VocabularyTable::from_entries(entries);

        assert!(matches!(
            export_graph(&table),
            Err(TokenizerError::UnknownSymbol { symbol: 4000, len: 257 })
        ));
    }

    #[test]
    fn test_to_dot() {
        let edges = vec![Edge::new(256, 97), Edge::new(256, 98)];
        assert_eq!(
            to_dot(&edges, "Merges"),
            "digraph \"Merges\" {\n    256 -> 97\n    256 -> 98\n}\n"
        );
        assert_eq!(to_dot(&[], "Empty"), "digraph \"Empty\" {\n}\n");
    }

    #[test]
    fn test_to_dot_quotes_name() {
        let edges = [Edge::new(256, 97)];
        assert_eq!(
            to_dot(&edges, "my graph"),
            "digraph \"my graph\" {\n    256 -> 97\n}\n"
        );
        assert!(to_dot(&edges, "byte-pairs").starts_with("digraph \"byte-pairs\" {\n"));
        assert!(to_dot(&[], r#"say "hi" \o/"#).starts_with(r#"digraph "say \"hi\" \\o/" {"#));
    }
}

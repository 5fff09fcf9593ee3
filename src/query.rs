use smallvec::SmallVec;

use crate::arena::{Arena, NodeId, ROOT};
use crate::token::{self, Token};

/// Indices of the strings a query is a suffix of, in ascending order.
pub type Matches = SmallVec<[usize; 4]>;

/// Walks `query` down from the root. A match ends either at a node with terminator children or
/// right before a terminator inside an edge.
pub fn find_suffix(arena: &Arena, query: &[Token]) -> Matches {
    let mut node = ROOT;
    let mut i = 0;
    while i < query.len() {
        let child = match arena.child(node, query[i]) {
            Some(child) => child,
            None => return Matches::new(),
        };

        let label = arena.label(child);
        let mut j = 0;
        while j < label.len() && i < query.len() {
            if label[j] != query[i] {
                return Matches::new();
            }
            i += 1;
            j += 1;
        }

        if j < label.len() {
            return label[j].string_index().into_iter().collect();
        }

        node = child;
    }

    let mut matches: Matches = arena
        .node(node)
        .children
        .keys()
        .filter_map(|key| key.string_index())
        .collect();
    matches.sort();
    matches
}

/// Every root-to-leaf path, one per leaf.
pub fn all_suffixes(arena: &Arena) -> Vec<Vec<Token>> {
    let mut suffixes = Vec::new();
    let mut path = Vec::new();
    collect(arena, ROOT, &mut path, &mut suffixes);
    suffixes
}

fn collect(arena: &Arena, node: NodeId, path: &mut Vec<Token>, suffixes: &mut Vec<Vec<Token>>) {
    let depth = path.len();
    path.extend_from_slice(arena.label(node));

    if node != ROOT && arena.node(node).is_leaf() {
        suffixes.push(path.clone());
    } else {
        for &child in arena.node(node).children.values() {
            collect(arena, child, path, suffixes);
        }
    }

    path.truncate(depth);
}

/// One line per edge, indented by depth, children ordered by their first token.
pub fn render(arena: &Arena) -> String {
    let mut out = String::new();
    render_node(arena, ROOT, 0, &mut out);
    out
}

fn render_node(arena: &Arena, node: NodeId, indent: usize, out: &mut String) {
    for (_, child) in arena.sorted_children(node) {
        out.push_str(&" ".repeat(indent));
        out.push_str(&token::render(arena.label(child)));
        out.push('\n');
        render_node(arena, child, indent + 2, out);
    }
}

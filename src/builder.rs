use log::trace;

use crate::arena::{Arena, NodeId, ROOT};
use crate::links::{self, PendingLink};
use crate::token::Token;

#[derive(Debug)]
struct ActivePoint {
    node: NodeId,
    /// Text position of the first token of the active edge.
    edge: usize,
    length: usize,
}

/// Ukkonen's online construction over the arena's shared text.
#[derive(Debug)]
pub struct Builder {
    arena: Arena,

    active: ActivePoint,
    remaining: usize,

    /// Leaves created for the string that is currently being fed.
    open_leaves: Vec<NodeId>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            arena: Arena::new(),

            active: ActivePoint { node: ROOT, edge: 0, length: 0 },
            remaining: 0,

            open_leaves: Vec::new(),
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Runs one phase: appends `token` and applies extensions until a suffix is found to be
    /// implicitly present or no suffix is left to insert.
    pub fn extend(&mut self, token: Token) {
        let position = self.arena.append_token(token);
        self.remaining += 1;

        let mut pending = PendingLink::new();
        while self.remaining > 0 {
            if self.active.length == 0 {
                self.active.edge = position;
            }

            let key = self.arena.token(self.active.edge);
            match self.arena.child(self.active.node, key) {
                None => {
                    let leaf = self.attach_leaf(self.active.node, position);
                    trace!("leaf {} under {} for {:?}", leaf, self.active.node, token);
                    pending.connect(&mut self.arena, self.active.node);
                }
                Some(next) => {
                    if self.walk_down(next) {
                        continue;
                    }

                    let start = self.arena.node(next).start;
                    if self.arena.token(start + self.active.length) == token {
                        trace!("{:?} already present on edge {}", token, next);
                        pending.connect(&mut self.arena, self.active.node);
                        self.active.length += 1;
                        break;
                    }

                    let split = self.split_edge(next, position);
                    trace!("split edge {} at {}, new internal node {}", next, self.active.length, split);
                    pending.connect(&mut self.arena, split);
                }
            }

            self.remaining -= 1;
            self.relocate(position);
        }
    }

    /// Closes every leaf of the string that was just terminated so later text never extends it.
    pub fn close_leaves(&mut self) {
        assert_eq!(self.remaining, 0, "terminator left suffixes behind");

        let end = self.arena.text().len();
        for leaf in self.open_leaves.drain(..) {
            self.arena.node_mut(leaf).end = Some(end);
        }

        self.active = ActivePoint { node: ROOT, edge: end, length: 0 };
    }

    fn attach_leaf(&mut self, parent: NodeId, position: usize) -> NodeId {
        let leaf = self.arena.create_node(position, None);
        let key = self.arena.token(position);
        self.arena.set_child(parent, key, leaf);
        self.open_leaves.push(leaf);

        leaf
    }

    /// Skip-count descent: moves onto `next` if the active length covers its whole edge.
    fn walk_down(&mut self, next: NodeId) -> bool {
        let length = self.arena.edge_len(next);
        if self.active.length < length {
            return false;
        }

        self.active.edge += length;
        self.active.length -= length;
        self.active.node = next;

        true
    }

    /// Inserts a new internal node on the edge into `next`, right before the active length,
    /// and hangs a fresh leaf for `position` off it. `next` keeps its children, end and suffix
    /// link and continues below the split.
    fn split_edge(&mut self, next: NodeId, position: usize) -> NodeId {
        let start = self.arena.node(next).start;
        let split_at = start + self.active.length;

        let split = self.arena.create_node(start, Some(split_at));
        let key = self.arena.token(start);
        self.arena.set_child(self.active.node, key, split);

        self.arena.node_mut(next).start = split_at;
        let continuation = self.arena.token(split_at);
        self.arena.set_child(split, continuation, next);

        self.attach_leaf(split, position);

        split
    }

    fn relocate(&mut self, position: usize) {
        if self.active.node == ROOT {
            if self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = position + 1 - self.remaining;
            }
        } else {
            self.active.node = links::follow(&self.arena, self.active.node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(s: &str) -> Builder {
        let mut builder = Builder::new();
        for c in s.chars() {
            builder.extend(Token::Symbol(c));
        }
        builder.extend(Token::Terminator(0));
        builder.close_leaves();
        builder
    }

    #[test]
    fn one_leaf_per_suffix() {
        for s in &["banana", "aaaa", "abcabxabcd", "mississippi"] {
            let builder = build(s);
            assert_eq!(builder.remaining(), 0);
            assert_eq!(builder.arena().leaf_count(), s.chars().count() + 1, "{}", s);
        }
    }

    #[test]
    fn repeated_symbols_stay_implicit() {
        let mut builder = Builder::new();
        for _ in 0..4 {
            builder.extend(Token::Symbol('a'));
        }
        assert_eq!(builder.remaining(), 3);
        assert_eq!(builder.arena().leaf_count(), 1);
    }

    #[test]
    fn internal_nodes_are_linked() {
        let builder = build("abcabxabcd");
        let arena = builder.arena();
        for id in 1..arena.len() {
            let node = arena.node(id);
            if node.is_leaf() {
                continue;
            }

            let link = node.suffix_link.expect("internal node without suffix link");
            let mut label = Vec::new();
            let mut current = id;
            while current != ROOT {
                let mut part = arena.label(current).to_vec();
                part.extend(label);
                label = part;
                current = arena.node(current).parent.unwrap();
            }

            let mut linked = Vec::new();
            let mut current = link;
            while current != ROOT {
                let mut part = arena.label(current).to_vec();
                part.extend(linked);
                linked = part;
                current = arena.node(current).parent.unwrap();
            }

            assert_eq!(&label[1..], &linked[..]);
        }
    }

    #[test]
    fn every_child_points_back_at_its_parent() {
        let builder = build("abacabadabacabae");
        let arena = builder.arena();
        for id in 0..arena.len() {
            for &child in arena.node(id).children.values() {
                assert_eq!(arena.node(child).parent, Some(id));
            }
        }
    }
}

use std::collections::HashMap;

use crate::token::Token;

pub type NodeId = usize;

pub const ROOT: NodeId = 0;

#[derive(Debug)]
pub struct Node {
    pub start: usize,
    /// Exclusive end of the incoming edge label. `None` means the edge is an open leaf that
    /// reaches the current end of the text.
    pub end: Option<usize>,
    pub children: HashMap<Token, NodeId>,

    pub suffix_link: Option<NodeId>,
    pub parent: Option<NodeId>,
}

impl Node {
    fn new(start: usize, end: Option<usize>) -> Node {
        Node {
            start,
            end,
            children: HashMap::new(),

            suffix_link: None,
            parent: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Owns the shared token buffer and every node of one tree. Node ids are indices into `nodes`.
#[derive(Debug)]
pub struct Arena {
    text: Vec<Token>,
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Arena {
        Arena {
            text: Vec::new(),
            nodes: vec![Node::new(0, Some(0))],
        }
    }

    /// Appends a token and returns its position.
    pub fn append_token(&mut self, token: Token) -> usize {
        self.text.push(token);
        self.text.len() - 1
    }

    pub fn create_node(&mut self, start: usize, end: Option<usize>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(start, end));
        id
    }

    pub fn text(&self) -> &[Token] {
        &self.text
    }

    pub fn token(&self, position: usize) -> Token {
        self.text[position]
    }

    pub fn node(&self, node: NodeId) -> &Node {
        &self.nodes[node]
    }

    pub fn node_mut(&mut self, node: NodeId) -> &mut Node {
        &mut self.nodes[node]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn child(&self, node: NodeId, key: Token) -> Option<NodeId> {
        self.nodes[node].children.get(&key).cloned()
    }

    /// Attaches `child` under `parent`, replacing whatever was stored under `key`.
    pub fn set_child(&mut self, parent: NodeId, key: Token, child: NodeId) {
        self.nodes[parent].children.insert(key, child);
        self.nodes[child].parent = Some(parent);
    }

    fn end_of(&self, node: NodeId) -> usize {
        self.nodes[node].end.unwrap_or(self.text.len())
    }

    pub fn edge_len(&self, node: NodeId) -> usize {
        self.end_of(node) - self.nodes[node].start
    }

    pub fn label(&self, node: NodeId) -> &[Token] {
        if node == ROOT {
            return &[];
        }
        &self.text[self.nodes[node].start..self.end_of(node)]
    }

    /// Children of `node` ordered by their key, symbols before terminators.
    pub fn sorted_children(&self, node: NodeId) -> Vec<(Token, NodeId)> {
        let mut children: Vec<_> = self.nodes[node].children.iter().map(|(&k, &v)| (k, v)).collect();
        children.sort();
        children
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().skip(1).filter(|node| node.is_leaf()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_edges_follow_the_text() {
        let mut arena = Arena::new();
        let a = arena.append_token(Token::Symbol('a'));
        let leaf = arena.create_node(a, None);
        arena.set_child(ROOT, Token::Symbol('a'), leaf);
        assert_eq!(arena.edge_len(leaf), 1);

        arena.append_token(Token::Symbol('b'));
        arena.append_token(Token::Terminator(0));
        assert_eq!(arena.edge_len(leaf), 3);
        assert_eq!(arena.label(leaf), &[Token::Symbol('a'), Token::Symbol('b'), Token::Terminator(0)]);
        assert_eq!(arena.node(leaf).parent, Some(ROOT));
        assert_eq!(arena.leaf_count(), 1);
    }

    #[test]
    fn node_ids_are_local_to_the_arena() {
        let mut first = Arena::new();
        let mut second = Arena::new();
        assert_eq!(first.create_node(0, None), second.create_node(0, None));
    }
}

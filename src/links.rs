use crate::arena::{Arena, NodeId, ROOT};

/// Tracks the internal node created most recently in the current phase, which still waits for
/// its suffix link.
pub struct PendingLink {
    node: Option<NodeId>,
}

impl PendingLink {
    pub fn new() -> PendingLink {
        PendingLink { node: None }
    }

    /// Links the pending node to `target` and makes `target` the new pending node.
    pub fn connect(&mut self, arena: &mut Arena, target: NodeId) {
        if let Some(node) = self.node {
            let link = &mut arena.node_mut(node).suffix_link;
            match *link {
                None => *link = Some(target),
                Some(existing) => debug_assert_eq!(existing, target, "suffix link of {} rewritten", node),
            }
        }

        self.node = if target == ROOT { None } else { Some(target) };
    }
}

/// Where the active point moves after a rule 2 extension at a non-root node.
pub fn follow(arena: &Arena, node: NodeId) -> NodeId {
    arena.node(node).suffix_link.unwrap_or(ROOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_chain_through_the_phase() {
        let mut arena = Arena::new();
        let first = arena.create_node(0, Some(1));
        let second = arena.create_node(1, Some(2));

        let mut pending = PendingLink::new();
        pending.connect(&mut arena, first);
        pending.connect(&mut arena, second);
        pending.connect(&mut arena, ROOT);

        assert_eq!(follow(&arena, first), second);
        assert_eq!(arena.node(second).suffix_link, Some(ROOT));
        assert_eq!(follow(&arena, ROOT), ROOT);
    }
}

use crate::error::SuffixTreeError;

/// Maps string indices to the strings they were assigned to.
#[derive(Debug, Default)]
pub struct Registry {
    strings: Vec<String>,
    /// Symbols fed since the last terminator.
    pending: String,
}

impl Registry {
    pub fn next_index(&self) -> usize {
        self.strings.len()
    }

    pub fn push_symbol(&mut self, c: char) {
        self.pending.push(c);
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Registers the pending symbols as a string and returns its index.
    pub fn seal(&mut self) -> usize {
        let index = self.next_index();
        self.strings.push(std::mem::replace(&mut self.pending, String::new()));
        index
    }

    pub fn lookup(&self, index: usize) -> Result<&str, SuffixTreeError> {
        self.strings
            .get(index)
            .map(|s| s.as_str())
            .ok_or(SuffixTreeError::NotFound { index })
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sealing_assigns_sequential_indices() {
        let mut registry = Registry::default();
        for c in "xyz".chars() {
            registry.push_symbol(c);
        }
        assert_eq!(registry.seal(), 0);
        assert!(!registry.has_pending());

        registry.push_symbol('a');
        assert_eq!(registry.seal(), 1);

        assert_eq!(registry.lookup(0), Ok("xyz"));
        assert_eq!(registry.lookup(1), Ok("a"));
        assert_eq!(registry.lookup(2), Err(SuffixTreeError::NotFound { index: 2 }));
    }
}

//! A generalized suffix tree built online with Ukkonen's algorithm.
//!
//! Strings are fed one token at a time into a single shared text. Each registered string is
//! closed by its own terminator token, so queries can tell which strings a suffix belongs to.
//!
//! ```
//! use online_suffix_tree::SuffixTree;
//!
//! let mut tree = SuffixTree::new();
//! tree.add("train").unwrap();
//! tree.add("plain").unwrap();
//! tree.add("brain").unwrap();
//!
//! assert_eq!(tree.find_suffix("rain").as_slice(), &[0, 2]);
//! assert!(tree.find_suffix("rai").is_empty());
//! ```

mod arena;
mod builder;
mod error;
mod links;
mod query;
mod registry;
mod token;

use std::fmt;

use log::debug;

use builder::Builder;
use registry::Registry;

pub use error::SuffixTreeError;
pub use query::Matches;
pub use token::Token;

pub struct SuffixTree {
    builder: Builder,
    registry: Registry,
}

impl fmt::Debug for SuffixTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "SuffixTree{{")?;
        writeln!(f, "    text: {}", token::render(self.builder.arena().text()))?;
        writeln!(f, "    strings: {}", self.registry.len())?;
        writeln!(f, "    nodes: {}", self.builder.arena().len())?;
        writeln!(f, "    remaining: {}", self.builder.remaining())?;
        writeln!(f, "}}")
    }
}

impl Default for SuffixTree {
    fn default() -> SuffixTree {
        SuffixTree::new()
    }
}

impl SuffixTree {
    pub fn new() -> SuffixTree {
        SuffixTree {
            builder: Builder::new(),
            registry: Registry::default(),
        }
    }

    /// Creates a tree and registers `initial` as string 0, unless it is empty.
    pub fn from_string(initial: &str) -> SuffixTree {
        let mut tree = SuffixTree::new();
        if !initial.is_empty() {
            tree.feed(initial);
            tree.terminate();
        }
        tree
    }

    /// Registers `value` and returns its index. Symbols already fed through `add_token` and not
    /// yet terminated become the start of this string.
    pub fn add(&mut self, value: &str) -> Result<usize, SuffixTreeError> {
        if value.is_empty() {
            return Err(SuffixTreeError::invalid("cannot add an empty string"));
        }

        self.feed(value);
        Ok(self.terminate())
    }

    /// Applies a single extension phase. A terminator registers the symbols fed so far; it must
    /// carry the index returned by `terminator()`.
    pub fn add_token(&mut self, token: Token) -> Result<(), SuffixTreeError> {
        match token {
            Token::Symbol(c) => {
                self.registry.push_symbol(c);
                self.builder.extend(token);
            }
            Token::Terminator(index) => {
                let expected = self.registry.next_index();
                if index != expected {
                    return Err(SuffixTreeError::invalid(format!(
                        "terminator index={} but the next string index is {}",
                        index, expected
                    )));
                }
                if !self.registry.has_pending() {
                    return Err(SuffixTreeError::invalid("cannot terminate an empty string"));
                }
                self.terminate();
            }
        }

        Ok(())
    }

    /// The terminator the next registered string will end with.
    pub fn terminator(&self) -> Token {
        Token::Terminator(self.registry.next_index())
    }

    fn feed(&mut self, value: &str) {
        for c in value.chars() {
            self.registry.push_symbol(c);
            self.builder.extend(Token::Symbol(c));
        }
    }

    fn terminate(&mut self) -> usize {
        let terminator = self.terminator();
        self.builder.extend(terminator);
        self.builder.close_leaves();

        let index = self.registry.seal();
        debug!("registered string {} ({} nodes)", index, self.builder.arena().len());
        index
    }

    /// Indices of every registered string that ends with `query`. The empty query matches all
    /// of them.
    pub fn find_suffix(&self, query: &str) -> Matches {
        let tokens: Vec<Token> = query.chars().map(Token::Symbol).collect();
        let matches = query::find_suffix(self.builder.arena(), &tokens);
        debug!("suffix {:?} found in {:?}", query, matches.as_slice());
        matches
    }

    pub fn contains_suffix(&self, query: &str) -> bool {
        !self.find_suffix(query).is_empty()
    }

    /// Every suffix in the tree, terminators rendered as `$`. Materializes each suffix, so this
    /// is quadratic in the text length.
    pub fn all_suffixes(&self) -> Vec<String> {
        self.suffix_tokens().iter().map(|suffix| token::render(suffix)).collect()
    }

    pub fn suffix_tokens(&self) -> Vec<Vec<Token>> {
        query::all_suffixes(self.builder.arena())
    }

    pub fn get_string_by_index(&self, index: usize) -> Result<&str, SuffixTreeError> {
        self.registry.lookup(index)
    }

    /// Number of registered strings.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    pub fn node_count(&self) -> usize {
        self.builder.arena().len()
    }

    pub fn leaf_count(&self) -> usize {
        self.builder.arena().leaf_count()
    }

    pub fn render(&self) -> String {
        query::render(self.builder.arena())
    }
}

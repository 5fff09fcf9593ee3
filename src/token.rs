use std::fmt;

/// A single unit of text in the tree.
///
/// Every registered string ends in its own `Terminator`, tagged with the string's index, so the
/// terminal suffixes of different strings never collide in a child mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    Symbol(char),
    Terminator(usize),
}

impl Token {
    pub fn is_terminator(&self) -> bool {
        match self {
            Token::Terminator(_) => true,
            Token::Symbol(_) => false,
        }
    }

    /// Index of the string this token terminates, if it is a terminator.
    pub fn string_index(&self) -> Option<usize> {
        match *self {
            Token::Terminator(index) => Some(index),
            Token::Symbol(_) => None,
        }
    }
}

impl From<char> for Token {
    fn from(c: char) -> Token {
        Token::Symbol(c)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Symbol(c) => write!(f, "{}", c),
            Token::Terminator(_) => write!(f, "$"),
        }
    }
}

pub(crate) fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.to_string()).collect()
}

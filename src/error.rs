use thiserror::Error;

/// Selector syntax violations. Every variant is fatal for the selector
/// entry being parsed; there is no recovery or retry, and a failing entry
/// aborts the whole selector list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A name ended with, or was immediately followed by, an illegal
    /// terminator: a dangling sign, a stray combinator, or whitespace
    /// embedded in a name.
    #[error("illegal trailing character: '{0}'")]
    TrailingCharacter(String),
    /// A tag, id, or class name began with a digit.
    #[error("a {0} name must not start with a digit")]
    LeadingDigit(&'static str),
    #[error("illegal selector: '>>'")]
    DoubleChildCombinator,
    #[error("unexpected sign: ':::'")]
    UnexpectedPseudoSign,
    /// A character outside the selector grammar.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnclassifiedCharacter { ch: char, pos: usize },
}

pub type Result<T> = std::result::Result<T, SyntaxError>;

use core::fmt;

/// Coarse classification shared by every error type in the crate.
///
/// Each module keeps its own error enum with precise variants; `kind()` on those
/// enums maps them into one of these buckets so callers (UI shells, the
/// simulator) can decide whether to re-prompt or abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed arguments: wrong card counts, duplicate cards, bad amounts.
    InvalidInput,
    /// Operation invoked in the wrong phase, or out of turn.
    InvalidState,
    /// Deck underflow.
    ResourceExhausted,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::InvalidState => "invalid state",
            ErrorKind::ResourceExhausted => "resource exhausted",
        };
        f.write_str(s)
    }
}

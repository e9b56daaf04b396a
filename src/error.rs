//! Fatal wiring errors.
//!
//! Only malformed configuration or domain wiring is an error. An exhausted
//! frontier is not: it yields a [`Solution`](crate::search::Solution) with no
//! goal node, and callers check that sentinel.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unrecognized search strategy '{0}'")]
    UnrecognizedStrategy(String),

    #[error("unrecognized transfer direction '{0}'")]
    UnrecognizedDirection(String),

    #[error("strategy '{0}' requires a heuristic")]
    MissingHeuristic(&'static str),

    #[error("country '{0}' is not defined in the initial state")]
    UnknownCountry(String),
}

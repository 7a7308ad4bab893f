/// Parser state, token consumption, and the expression entry point.
///
/// Holds the single lookahead token and exposes [`core::parse_expression`],
/// which evaluates a whole line of input.
pub mod core;

/// Binary operator levels.
///
/// Left-associative accumulation loops for `+`/`-` and `*`/`/`.
pub mod binary;

/// Factors: numbers, parenthesized groups, and unary negation.
pub mod unary;

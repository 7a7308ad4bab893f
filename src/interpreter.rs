/// The lexer module tokenizes source text for the parser.
///
/// The tokenizer reads the raw input and produces one token per request:
/// numbers, the four operators, parentheses, and an end marker. This is the
/// first stage of evaluation.
///
/// # Responsibilities
/// - Skips whitespace and converts digit runs into numeric tokens.
/// - Keeps a forward-only cursor into the input.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module evaluates the token stream.
///
/// Parsing and evaluation are fused: each grammar rule pulls tokens from the
/// tokenizer and returns the value of what it parsed.
///
/// # Responsibilities
/// - Encodes precedence by grammar level and associativity by loop or
///   recursion.
/// - Validates the grammar, reporting errors with source positions.
/// - Detects division by zero.
pub mod parser;

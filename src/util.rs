/// Number formatting helpers.
///
/// This module renders evaluation results for display. Values are printed
/// with a fixed number of significant digits, switching between fixed and
/// scientific notation the way a C `%g` conversion does.
pub mod num;

/// Characters removed by the strip family. Nothing outside ASCII counts as whitespace.
pub const WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// Fill character for [`center`](crate::justify::center), [`ljust`](crate::justify::ljust)
/// and [`rjust`](crate::justify::rjust) when the caller has no preference.
pub const DEFAULT_FILL: char = ' ';

//! Grammar constants and nesting limits.
//!
//! Every nested construct re-enters the parser on a sub-slice, so recursion
//! depth follows input nesting depth. These limits cap it.

/// Depth passed by callers that want the post-process pipeline to run.
pub const TOP_LEVEL: usize = 0;

/// Default maximum depth of recursive sub-parses.
///
/// Past this depth nested text is returned unparsed.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Longest `#` run that still forms a heading.
pub const MAX_HEADING_LEVEL: usize = 7;

/// Shortest backtick run opening a fenced code block.
pub const MIN_FENCE_LEN: usize = 3;

/// Shortest `-` run forming a thematic break on its own line.
pub const MIN_RULE_LEN: usize = 3;

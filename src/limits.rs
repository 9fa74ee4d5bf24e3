//! Resource limits for parsing.
//!
//! Pathologically nested input can exhaust the native call stack of a
//! recursive-descent parser, so every container entry is checked against a
//! configured depth limit. This is the only resource bound the codec needs;
//! input is fully buffered by the caller.

/// Limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth for arrays/objects. The top-level container is
    /// depth 1.
    pub max_depth: usize,
}

impl Limits {
    /// Default limits: depth capped at 128 levels, matching common strict
    /// JSON parsers.
    pub const fn strict() -> Self {
        Self { max_depth: 128 }
    }

    /// Relaxed limits for trusted input.
    pub const fn lenient() -> Self {
        Self { max_depth: 4096 }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::strict()
    }
}

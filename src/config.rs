//! Engine configuration

/// Default depth for following cross-references inside definitions
pub const DEFAULT_MAX_DEFINITION_LINKS: usize = 3;

/// Deepest cross-reference resolution allowed
pub const MAX_DEFINITION_LINKS: usize = 16;

/// Configuration for a [`WordEngine`](crate::WordEngine)
///
/// The defaults reproduce the permissive behaviour word-list tools expect:
/// stems of the wrong length are dropped, malformed counts are skipped and
/// unknown word groups never constrain a search. `strict` turns each of
/// those into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub strict: bool,
    pub max_definition_links: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict: false,
            max_definition_links: DEFAULT_MAX_DEFINITION_LINKS,
        }
    }

    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Link depth, capped at [`MAX_DEFINITION_LINKS`]
    #[must_use]
    pub const fn max_definition_links(mut self, depth: usize) -> Self {
        self.max_definition_links = if depth > MAX_DEFINITION_LINKS {
            MAX_DEFINITION_LINKS
        } else {
            depth
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lenient() {
        let config = EngineConfig::default();
        assert!(!config.strict);
        assert_eq!(config.max_definition_links, 3);
    }

    #[test]
    fn builder_methods() {
        let config = EngineConfig::new().strict(true).max_definition_links(1);
        assert!(config.strict);
        assert_eq!(config.max_definition_links, 1);
    }

    #[test]
    fn link_depth_is_capped() {
        let config = EngineConfig::new().max_definition_links(1_000_000);
        assert_eq!(config.max_definition_links, MAX_DEFINITION_LINKS);
    }
}

//! Discovery configuration for descriptor lookup.
//!
//! This module defines the options that control how directories are walked
//! when looking for module descriptors.

/// Configuration for descriptor discovery.
#[derive(Clone, Debug, Default)]
pub struct DiscoveryOptions {
    /// Maximum directory depth to walk (None = unlimited)
    pub max_depth: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_options_default_is_unlimited() {
        let opts = DiscoveryOptions::default();
        assert!(opts.max_depth.is_none());
    }

    #[test]
    fn test_discovery_options_clone() {
        let original = DiscoveryOptions { max_depth: Some(3) };
        let cloned = original.clone();

        assert_eq!(original.max_depth, cloned.max_depth);
    }
}

//! Output configuration for building declarations and style blocks.

/// Controls how entities are serialized back to CSS text.
///
/// The defaults produce expanded output with comments and escaped selectors,
/// which is what [`Property::build`](crate::Property::build) with
/// `minimized = false` emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Drop all optional whitespace and never emit comments.
    pub minimized: bool,
    /// Append ` /* comment */` to annotated declarations in expanded output.
    pub comments: bool,
    /// Backslash-escape `:` in selectors when a block is built.
    pub escape: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::expanded()
    }
}

impl BuildOptions {
    pub const fn expanded() -> Self {
        Self {
            minimized: false,
            comments: true,
            escape: true,
        }
    }

    pub const fn minimized() -> Self {
        Self {
            minimized: true,
            ..Self::expanded()
        }
    }

    pub const fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub const fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Whether a declaration comment should be written under these options.
    pub(crate) const fn emits_comments(&self) -> bool {
        self.comments && !self.minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_expanded() {
        assert_eq!(BuildOptions::default(), BuildOptions::expanded());
        assert!(BuildOptions::default().emits_comments());
    }

    #[test]
    fn minimized_never_emits_comments() {
        let opts = BuildOptions::minimized().with_comments(true);
        assert!(!opts.emits_comments());
    }

    #[test]
    fn expanded_without_comments() {
        let opts = BuildOptions::expanded().with_comments(false);
        assert!(!opts.minimized);
        assert!(!opts.emits_comments());
        assert!(opts.escape);
    }
}

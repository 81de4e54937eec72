//! Configuration for DSL rendering

/// Configuration options for DSL output
///
/// The defaults produce the canonical format: four spaces per nesting level
/// and no blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces per nesting level
    pub indent_width: usize,

    /// Separate the sections of the model block (people, systems, deployment
    /// environments, relationships) with a blank line
    pub section_spacing: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            section_spacing: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of spaces per nesting level
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Enable or disable blank lines between model sections
    pub fn with_section_spacing(mut self, spacing: bool) -> Self {
        self.section_spacing = spacing;
        self
    }

    pub(crate) fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.indent_width, 4);
        assert!(!config.section_spacing);
        assert_eq!(config.indent_unit(), "    ");
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::new()
            .with_indent_width(2)
            .with_section_spacing(true);

        assert_eq!(config.indent_width, 2);
        assert!(config.section_spacing);
    }
}

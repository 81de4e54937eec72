//! Style themes loaded from TOML
//!
//! A theme is a named list of element and relationship styles that can be
//! appended to a workspace's [`Styles`]. Themes are written as
//!
//! ```toml
//! [metadata]
//! name = "Corporate"
//!
//! [[element]]
//! tag = "Database"
//! shape = "Cylinder"
//! background = "#438dd5"
//!
//! [[relationship]]
//! tag = "asynchronous"
//! line_style = "Dashed"
//! ```

use std::path::Path;
use std::str::FromStr;

use ariadne::{Color, Label, Report, ReportKind, Source};
use serde::Deserialize;
use thiserror::Error;

use crate::model::tags;
use crate::style::{ElementStyle, LineStyle, RelationshipStyle, Shape, Styles};

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ThemeError {
    /// Format the error with source context using ariadne
    ///
    /// Errors without a location in `source` are returned as their message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let ThemeError::Parse(err) = self else {
            return self.to_string();
        };
        let Some(span) = err.span() else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid theme")
            .with_label(
                Label::new((filename, span))
                    .with_message(err.message())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// A named set of styles
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: Option<String>,
    pub description: Option<String>,
    pub elements: Vec<ElementStyle>,
    pub relationships: Vec<RelationshipStyle>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    element: Vec<ElementStyle>,
    #[serde(default)]
    relationship: Vec<RelationshipStyle>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl Theme {
    /// Load theme from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Append every style of this theme, elements first
    ///
    /// Existing styles are kept; a theme style for an already styled tag is
    /// added after it.
    pub fn apply(&self, styles: &mut Styles) {
        log::debug!(
            theme = self.name.as_deref().unwrap_or("unnamed"),
            elements = self.elements.len(),
            relationships = self.relationships.len();
            "Applying theme"
        );
        for style in &self.elements {
            styles.push_element_style(style.clone());
        }
        for style in &self.relationships {
            styles.push_relationship_style(style.clone());
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlTheme = toml::from_str(content)?;
        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            elements: parsed.element,
            relationships: parsed.relationship,
        })
    }
}

/// The standard C4 palette
impl Default for Theme {
    fn default() -> Self {
        let mut person = ElementStyle::new(tags::PERSON);
        person
            .with_shape(Shape::Person)
            .with_background("#08427b")
            .with_color("#ffffff");
        let mut system = ElementStyle::new(tags::SOFTWARE_SYSTEM);
        system.with_background("#1168bd").with_color("#ffffff");
        let mut container = ElementStyle::new(tags::CONTAINER);
        container.with_background("#438dd5").with_color("#ffffff");
        let mut component = ElementStyle::new(tags::COMPONENT);
        component.with_background("#85bbf0").with_color("#000000");
        let mut database = ElementStyle::new(tags::DATABASE);
        database.with_shape(Shape::DATABASE);
        let mut asynchronous = RelationshipStyle::new(tags::ASYNCHRONOUS);
        asynchronous.with_line_style(LineStyle::Dashed);

        Theme {
            name: Some("C4".to_string()),
            description: Some("Standard C4 model colours".to_string()),
            elements: vec![person, system, container, component, database],
            relationships: vec![asynchronous],
        }
    }
}

//! Visual styles keyed by tag
//!
//! Styles are append-only: adding a second style for a tag does not replace
//! the first, the consuming tool resolves precedence. Every attribute is
//! optional and only emitted when set.

use std::fmt;

use serde::Deserialize;

/// Shape used to draw an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Shape {
    Box,
    RoundedBox,
    Circle,
    Ellipse,
    Hexagon,
    Cylinder,
    Pipe,
    Person,
    Robot,
    Folder,
    WebBrowser,
    MobileDevicePortrait,
    MobileDeviceLandscape,
    Component,
}

impl Shape {
    /// Conventional shape for databases
    pub const DATABASE: Shape = Shape::Cylinder;
    /// Conventional shape for message queues
    pub const QUEUE: Shape = Shape::Pipe;

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Box => "Box",
            Shape::RoundedBox => "RoundedBox",
            Shape::Circle => "Circle",
            Shape::Ellipse => "Ellipse",
            Shape::Hexagon => "Hexagon",
            Shape::Cylinder => "Cylinder",
            Shape::Pipe => "Pipe",
            Shape::Person => "Person",
            Shape::Robot => "Robot",
            Shape::Folder => "Folder",
            Shape::WebBrowser => "WebBrowser",
            Shape::MobileDevicePortrait => "MobileDevicePortrait",
            Shape::MobileDeviceLandscape => "MobileDeviceLandscape",
            Shape::Component => "Component",
        }
    }
}

/// Border of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
}

/// Stroke pattern of a relationship line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

/// How relationship lines are routed between elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RouteStyle {
    Direct,
    Orthogonal,
    Curved,
}

/// Decoration at the end of a relationship line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Terminator {
    None,
    Arrow,
    Circle,
    Diamond,
    Triangle,
}

macro_rules! display_as_debug {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Debug::fmt(self, f)
                }
            }
        )*
    };
}

display_as_debug!(BorderStyle, LineStyle, RouteStyle, Terminator);

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style applied to every element carrying `tag`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementStyle {
    pub tag: String,
    pub shape: Option<Shape>,
    pub icon: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background: Option<String>,
    pub color: Option<String>,
    pub stroke: Option<String>,
    pub opacity: Option<u8>,
    pub font_size: Option<u32>,
    pub metadata: Option<bool>,
    pub description: Option<bool>,
    pub border: Option<u32>,
    pub border_style: Option<BorderStyle>,
    pub stroke_width: Option<u32>,
    pub font_family: Option<String>,
    pub font_style: Option<String>,
    pub shadow: Option<bool>,
    pub z_index: Option<i32>,
    pub rotation: Option<i32>,
    pub position: Option<(i32, i32)>,
    pub icons: Vec<String>,
}

impl ElementStyle {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_shape(&mut self, shape: Shape) -> &mut Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_icon(&mut self, icon: impl Into<String>) -> &mut Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_width(&mut self, width: u32) -> &mut Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(&mut self, height: u32) -> &mut Self {
        self.height = Some(height);
        self
    }

    pub fn with_background(&mut self, color: impl Into<String>) -> &mut Self {
        self.background = Some(color.into());
        self
    }

    pub fn with_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_stroke(&mut self, color: impl Into<String>) -> &mut Self {
        self.stroke = Some(color.into());
        self
    }

    /// Opacity in percent
    pub fn with_opacity(&mut self, opacity: u8) -> &mut Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_font_size(&mut self, size: u32) -> &mut Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_metadata(&mut self, show: bool) -> &mut Self {
        self.metadata = Some(show);
        self
    }

    pub fn with_description(&mut self, show: bool) -> &mut Self {
        self.description = Some(show);
        self
    }

    pub fn with_border(&mut self, border: u32) -> &mut Self {
        self.border = Some(border);
        self
    }

    pub fn with_border_style(&mut self, style: BorderStyle) -> &mut Self {
        self.border_style = Some(style);
        self
    }

    pub fn with_stroke_width(&mut self, width: u32) -> &mut Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_font_family(&mut self, family: impl Into<String>) -> &mut Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_font_style(&mut self, style: impl Into<String>) -> &mut Self {
        self.font_style = Some(style.into());
        self
    }

    pub fn with_shadow(&mut self, shadow: bool) -> &mut Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn with_z_index(&mut self, z_index: i32) -> &mut Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn with_rotation(&mut self, degrees: i32) -> &mut Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn with_position(&mut self, x: i32, y: i32) -> &mut Self {
        self.position = Some((x, y));
        self
    }

    pub fn add_icon(&mut self, icon: impl Into<String>) -> &mut Self {
        self.icons.push(icon.into());
        self
    }
}

/// Style applied to every relationship carrying `tag`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelationshipStyle {
    pub tag: String,
    pub color: Option<String>,
    pub opacity: Option<u8>,
    pub thickness: Option<u32>,
    pub line_style: Option<LineStyle>,
    pub font_size: Option<u32>,
    pub font_color: Option<String>,
    pub font_family: Option<String>,
    pub font_style: Option<String>,
    pub routing: Option<RouteStyle>,
    /// Label position along the line, in percent
    pub position: Option<u32>,
    pub start_terminator: Option<Terminator>,
    pub end_terminator: Option<Terminator>,
}

impl RelationshipStyle {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_opacity(&mut self, opacity: u8) -> &mut Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_thickness(&mut self, thickness: u32) -> &mut Self {
        self.thickness = Some(thickness);
        self
    }

    pub fn with_line_style(&mut self, style: LineStyle) -> &mut Self {
        self.line_style = Some(style);
        self
    }

    pub fn with_dashed(&mut self) -> &mut Self {
        self.with_line_style(LineStyle::Dashed)
    }

    pub fn with_dotted(&mut self) -> &mut Self {
        self.with_line_style(LineStyle::Dotted)
    }

    pub fn with_font_size(&mut self, size: u32) -> &mut Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.font_color = Some(color.into());
        self
    }

    pub fn with_font_family(&mut self, family: impl Into<String>) -> &mut Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_font_style(&mut self, style: impl Into<String>) -> &mut Self {
        self.font_style = Some(style.into());
        self
    }

    pub fn with_routing(&mut self, routing: RouteStyle) -> &mut Self {
        self.routing = Some(routing);
        self
    }

    pub fn with_direct_routing(&mut self) -> &mut Self {
        self.with_routing(RouteStyle::Direct)
    }

    pub fn with_orthogonal_routing(&mut self) -> &mut Self {
        self.with_routing(RouteStyle::Orthogonal)
    }

    pub fn with_curved_routing(&mut self) -> &mut Self {
        self.with_routing(RouteStyle::Curved)
    }

    pub fn with_position(&mut self, percent: u32) -> &mut Self {
        self.position = Some(percent);
        self
    }

    pub fn with_start_terminator(&mut self, terminator: Terminator) -> &mut Self {
        self.start_terminator = Some(terminator);
        self
    }

    pub fn with_end_terminator(&mut self, terminator: Terminator) -> &mut Self {
        self.end_terminator = Some(terminator);
        self
    }

    /// Arrow head at the destination end
    pub fn with_arrow(&mut self) -> &mut Self {
        self.with_end_terminator(Terminator::Arrow)
    }
}

/// Ordered collection of element and relationship styles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Styles {
    elements: Vec<ElementStyle>,
    relationships: Vec<RelationshipStyle>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a style for elements tagged `tag` and return it for configuration
    pub fn add_element_style(&mut self, tag: impl Into<String>) -> &mut ElementStyle {
        self.push_element_style(ElementStyle::new(tag))
    }

    /// Append a style for relationships tagged `tag` and return it for configuration
    pub fn add_relationship_style(&mut self, tag: impl Into<String>) -> &mut RelationshipStyle {
        self.push_relationship_style(RelationshipStyle::new(tag))
    }

    pub fn push_element_style(&mut self, style: ElementStyle) -> &mut ElementStyle {
        let index = self.elements.len();
        self.elements.push(style);
        &mut self.elements[index]
    }

    pub fn push_relationship_style(&mut self, style: RelationshipStyle) -> &mut RelationshipStyle {
        let index = self.relationships.len();
        self.relationships.push(style);
        &mut self.relationships[index]
    }

    pub fn element_styles(&self) -> &[ElementStyle] {
        &self.elements
    }

    pub fn relationship_styles(&self) -> &[RelationshipStyle] {
        &self.relationships
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.relationships.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_are_append_only() {
        let mut styles = Styles::new();
        styles.add_element_style("Person").with_background("#08427b");
        styles.add_element_style("Person").with_background("#000000");

        let person: Vec<_> = styles
            .element_styles()
            .iter()
            .filter(|s| s.tag == "Person")
            .collect();
        assert_eq!(person.len(), 2);
        assert_eq!(person[0].background.as_deref(), Some("#08427b"));
    }

    #[test]
    fn test_relationship_shortcuts() {
        let mut style = RelationshipStyle::new("asynchronous");
        style.with_dashed().with_orthogonal_routing().with_arrow();
        assert_eq!(style.line_style, Some(LineStyle::Dashed));
        assert_eq!(style.routing, Some(RouteStyle::Orthogonal));
        assert_eq!(style.end_terminator, Some(Terminator::Arrow));
    }

    #[test]
    fn test_shape_aliases() {
        assert_eq!(Shape::DATABASE, Shape::Cylinder);
        assert_eq!(Shape::QUEUE.to_string(), "Pipe");
        assert_eq!(BorderStyle::Dashed.to_string(), "Dashed");
    }
}

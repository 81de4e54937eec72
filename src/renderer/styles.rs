//! The `styles` block

use super::emitter::Emitter;
use super::writer::quote;
use crate::error::{RenderError, WriteContext};
use crate::style::{ElementStyle, RelationshipStyle};

const STYLES: &str = "styles";
const ELEMENT_STYLE: &str = "element style";
const RELATIONSHIP_STYLE: &str = "relationship style";

/// Directives of one element style, in fixed order, unset attributes skipped
pub(crate) fn element_style_lines(style: &ElementStyle) -> Vec<String> {
    let mut lines = Vec::new();
    let mut push = |keyword: &str, value: Option<String>| {
        if let Some(value) = value {
            lines.push(format!("{keyword} {value}"));
        }
    };

    push("shape", style.shape.map(|s| s.to_string()));
    push("icon", style.icon.as_deref().map(quote));
    push("width", style.width.map(|v| v.to_string()));
    push("height", style.height.map(|v| v.to_string()));
    push("background", style.background.as_deref().map(quote));
    push("color", style.color.as_deref().map(quote));
    push("stroke", style.stroke.as_deref().map(quote));
    push("opacity", style.opacity.map(|v| v.to_string()));
    push("fontSize", style.font_size.map(|v| v.to_string()));
    push("metadata", style.metadata.map(|v| v.to_string()));
    push("description", style.description.map(|v| v.to_string()));
    push("border", style.border.map(|v| v.to_string()));
    push("borderStyle", style.border_style.map(|s| quote(&s.to_string())));
    push("strokeWidth", style.stroke_width.map(|v| v.to_string()));
    push("fontFamily", style.font_family.as_deref().map(quote));
    push("fontStyle", style.font_style.as_deref().map(quote));
    push("shadow", style.shadow.map(|v| v.to_string()));
    push("zIndex", style.z_index.map(|v| v.to_string()));
    push("rotation", style.rotation.map(|v| v.to_string()));
    push("position", style.position.map(|(x, y)| format!("{x},{y}")));
    if !style.icons.is_empty() {
        let icons: Vec<String> = style.icons.iter().map(|icon| quote(icon)).collect();
        push("icons", Some(format!("[{}]", icons.join(", "))));
    }
    lines
}

/// Directives of one relationship style, in fixed order, unset attributes skipped
pub(crate) fn relationship_style_lines(style: &RelationshipStyle) -> Vec<String> {
    let mut lines = Vec::new();
    let mut push = |keyword: &str, value: Option<String>| {
        if let Some(value) = value {
            lines.push(format!("{keyword} {value}"));
        }
    };

    push("color", style.color.as_deref().map(quote));
    push("opacity", style.opacity.map(|v| v.to_string()));
    push("thickness", style.thickness.map(|v| v.to_string()));
    push("style", style.line_style.map(|s| quote(&s.to_string())));
    push("fontSize", style.font_size.map(|v| v.to_string()));
    push("fontColor", style.font_color.as_deref().map(quote));
    push("fontFamily", style.font_family.as_deref().map(quote));
    push("fontStyle", style.font_style.as_deref().map(quote));
    push("routing", style.routing.map(|s| quote(&s.to_string())));
    push("position", style.position.map(|v| v.to_string()));
    push("sourceTerminator", style.start_terminator.map(|t| quote(&t.to_string())));
    push("destinationTerminator", style.end_terminator.map(|t| quote(&t.to_string())));
    lines
}

impl Emitter<'_, '_> {
    /// Element styles first, then relationship styles, nothing when empty
    pub(crate) fn styles(&mut self) -> Result<(), RenderError> {
        let styles = self.views().styles();
        if styles.is_empty() {
            return Ok(());
        }
        log::debug!(
            elements = styles.element_styles().len(),
            relationships = styles.relationship_styles().len();
            "Emitting styles"
        );

        self.block(STYLES, STYLES, STYLES, |e| {
            for style in styles.element_styles() {
                e.style_block(ELEMENT_STYLE, &style.tag, element_style_lines(style))?;
            }
            for style in styles.relationship_styles() {
                e.style_block(RELATIONSHIP_STYLE, &style.tag, relationship_style_lines(style))?;
            }
            Ok(())
        })
    }

    fn style_block(
        &mut self,
        kind: &'static str,
        tag: &str,
        lines: Vec<String>,
    ) -> Result<(), RenderError> {
        // relationship styles share the element block form
        let header = format!("element {}", quote(tag));
        self.block(kind, tag, &header, |e| {
            for line in &lines {
                e.w.line(line).entity(kind, tag)?;
            }
            Ok(())
        })
    }
}

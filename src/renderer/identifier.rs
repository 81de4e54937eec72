//! Reference tokens derived from display names

use std::collections::HashMap;

use convert_case::{Case, Casing};
use log::warn;

use crate::error::RenderError;
use crate::model::{ElementId, Model, Named};

/// Derive the lowerCamelCase reference token for a display name
///
/// Anything outside ASCII letters and digits is treated as a word break.
/// The result depends on the name alone, so two distinct names may map to
/// the same token ("Web App" and "WebApp" both give `webApp`).
pub fn identifier(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    let words = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    let token = words.to_case(Case::Camel);

    match token.chars().next() {
        None => "element".to_string(),
        Some(first) if first.is_ascii_digit() => format!("_{token}"),
        Some(_) => token,
    }
}

/// Resolves element ids to tokens against one model
pub(crate) struct Resolver<'m> {
    model: &'m Model,
}

impl<'m> Resolver<'m> {
    pub(crate) fn new(model: &'m Model) -> Self {
        Self { model }
    }

    /// Log every token that more than one element derives
    ///
    /// Output is left untouched; the consuming tool reports the ambiguity.
    pub(crate) fn report_collisions(&self) {
        let mut seen: HashMap<String, ElementId> = HashMap::new();
        for id in self.model.element_ids() {
            let Ok(token) = self.token(id) else {
                continue;
            };
            match seen.get(&token) {
                Some(first) => {
                    warn!(token = token.as_str(), first:% = first, second:% = id; "Identifier collision")
                }
                None => {
                    seen.insert(token, id);
                }
            }
        }
    }

    /// Token referencing `id` in relationship and include statements
    pub(crate) fn token(&self, id: ElementId) -> Result<String, RenderError> {
        match id {
            ElementId::ContainerInstance(instance_id) => {
                let instance = self
                    .model
                    .container_instance(instance_id)
                    .ok_or_else(|| unknown(id))?;
                let container = self
                    .model
                    .container(instance.container())
                    .ok_or_else(|| unknown(instance.container().into()))?;
                let node = self
                    .model
                    .deployment_node(instance.parent())
                    .ok_or_else(|| unknown(instance.parent().into()))?;
                Ok(identifier(&format!(
                    "{} {} {}",
                    node.name(),
                    container.name(),
                    instance.instance_id()
                )))
            }
            other => self
                .model
                .name_of(other)
                .map(identifier)
                .ok_or_else(|| unknown(other)),
        }
    }
}

pub(crate) fn unknown(id: ElementId) -> RenderError {
    RenderError::UnknownElement {
        kind: id.kind(),
        index: id.index(),
    }
}

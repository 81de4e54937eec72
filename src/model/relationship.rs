//! Directed "uses" edges between elements

use std::fmt;

use super::id::ElementId;

/// Whether the caller waits for the callee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionStyle {
    Synchronous,
    Asynchronous,
}

impl InteractionStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionStyle::Synchronous => super::tags::SYNCHRONOUS,
            InteractionStyle::Asynchronous => super::tags::ASYNCHRONOUS,
        }
    }
}

impl fmt::Display for InteractionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed edge from one element to another
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub(crate) from: ElementId,
    pub(crate) to: ElementId,
    pub(crate) description: Option<String>,
    pub(crate) technology: Option<String>,
    pub(crate) interaction_style: Option<InteractionStyle>,
}

impl Relationship {
    pub(crate) fn new(from: ElementId, to: ElementId) -> Self {
        Self {
            from,
            to,
            description: None,
            technology: None,
            interaction_style: None,
        }
    }

    pub fn from(&self) -> ElementId {
        self.from
    }

    pub fn to(&self) -> ElementId {
        self.to
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }

    pub fn interaction_style(&self) -> Option<InteractionStyle> {
        self.interaction_style
    }

    pub fn with_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_technology(&mut self, technology: impl Into<String>) -> &mut Self {
        self.technology = Some(technology.into());
        self
    }

    pub fn with_interaction_style(&mut self, style: InteractionStyle) -> &mut Self {
        self.interaction_style = Some(style);
        self
    }

    pub fn synchronous(&mut self) -> &mut Self {
        self.with_interaction_style(InteractionStyle::Synchronous)
    }

    pub fn asynchronous(&mut self) -> &mut Self {
        self.with_interaction_style(InteractionStyle::Asynchronous)
    }
}

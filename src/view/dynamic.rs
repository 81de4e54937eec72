//! Ordered interaction sequences

use std::ops::Range;

use super::{view_header_methods, ViewHeader};
use crate::model::ElementId;

/// One interaction in a dynamic view
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicStep {
    pub(crate) from: ElementId,
    pub(crate) to: ElementId,
    pub(crate) description: Option<String>,
    pub(crate) technology: Option<String>,
}

impl DynamicStep {
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

    pub fn with_technology(&mut self, technology: impl Into<String>) -> &mut Self {
        self.technology = Some(technology.into());
        self
    }
}

/// Interactions between elements, in order
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicView {
    pub(crate) scope: Option<ElementId>,
    pub(crate) header: ViewHeader,
    pub(crate) steps: Vec<DynamicStep>,
    /// Closed `start..end` step ranges that run in parallel
    pub(crate) parallel: Vec<Range<usize>>,
    open_parallel: Option<usize>,
}

impl DynamicView {
    pub(crate) fn new(scope: Option<ElementId>, header: ViewHeader) -> Self {
        Self {
            scope,
            header,
            steps: Vec::new(),
            parallel: Vec::new(),
            open_parallel: None,
        }
    }

    /// Element the view is scoped to, `None` for the whole model
    pub fn scope(&self) -> Option<ElementId> {
        self.scope
    }

    pub fn steps(&self) -> &[DynamicStep] {
        &self.steps
    }

    view_header_methods!();

    pub fn add_step(
        &mut self,
        from: impl Into<ElementId>,
        to: impl Into<ElementId>,
        description: impl Into<String>,
    ) -> &mut DynamicStep {
        let description = description.into();
        let index = self.steps.len();
        self.steps.push(DynamicStep {
            from: from.into(),
            to: to.into(),
            description: (!description.is_empty()).then_some(description),
            technology: None,
        });
        &mut self.steps[index]
    }

    /// Steps added from now on run in parallel until [`DynamicView::end_parallel`]
    ///
    /// Starting a new sequence while one is open closes the open one first.
    pub fn start_parallel(&mut self) -> &mut Self {
        self.end_parallel();
        self.open_parallel = Some(self.steps.len());
        self
    }

    pub fn end_parallel(&mut self) -> &mut Self {
        if let Some(start) = self.open_parallel.take() {
            if start < self.steps.len() {
                self.parallel.push(start..self.steps.len());
            }
        }
        self
    }

    /// Parallel step ranges, including a sequence that was never closed
    pub fn parallel_sequences(&self) -> Vec<Range<usize>> {
        let mut sequences = self.parallel.clone();
        if let Some(start) = self.open_parallel {
            if start < self.steps.len() {
                sequences.push(start..self.steps.len());
            }
        }
        sequences
    }
}

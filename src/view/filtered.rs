//! Views derived from another view by inclusion/exclusion rules

use std::fmt;

use super::{view_header_methods, ViewHeader, ViewId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Include,
    Exclude,
}

/// What a filter value is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    Tag,
    Name,
    Type,
    Relation,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriterion {
    pub mode: FilterMode,
    pub filter_type: FilterType,
    pub value: String,
}

/// A base view narrowed down by filter criteria applied in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub(crate) base: ViewId,
    pub(crate) header: ViewHeader,
    pub(crate) title: Option<String>,
    pub(crate) filters: Vec<FilterCriterion>,
}

impl FilteredView {
    pub(crate) fn new(base: ViewId, header: ViewHeader) -> Self {
        Self {
            base,
            header,
            title: None,
            filters: Vec::new(),
        }
    }

    pub fn base(&self) -> ViewId {
        self.base
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn filters(&self) -> &[FilterCriterion] {
        &self.filters
    }

    view_header_methods!();

    pub fn with_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_filter(
        &mut self,
        mode: FilterMode,
        filter_type: FilterType,
        value: impl Into<String>,
    ) -> &mut Self {
        self.filters.push(FilterCriterion {
            mode,
            filter_type,
            value: value.into(),
        });
        self
    }

    /// Keep elements tagged `tag`
    pub fn include(&mut self, tag: impl Into<String>) -> &mut Self {
        self.with_filter(FilterMode::Include, FilterType::Tag, tag)
    }

    /// Drop elements tagged `tag`
    pub fn exclude(&mut self, tag: impl Into<String>) -> &mut Self {
        self.with_filter(FilterMode::Exclude, FilterType::Tag, tag)
    }

    pub fn with_name_filter(&mut self, mode: FilterMode, name: impl Into<String>) -> &mut Self {
        self.with_filter(mode, FilterType::Name, name)
    }

    pub fn with_type_filter(&mut self, mode: FilterMode, kind: impl Into<String>) -> &mut Self {
        self.with_filter(mode, FilterType::Type, kind)
    }

    pub fn with_relation_filter(
        &mut self,
        mode: FilterMode,
        relation: impl Into<String>,
    ) -> &mut Self {
        self.with_filter(mode, FilterType::Relation, relation)
    }
}

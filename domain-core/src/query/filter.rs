//! Predicate composition over entity collections.

use super::text::TextMatch;
use crate::error::{DomainError, Result};
use std::fmt;

/// Separator placed between searchable fields so a term never matches
/// across two of them.
const FIELD_SEPARATOR: &str = "\u{1f}";

/// Inclusive range with optional bounds; a missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange<D> {
    from: Option<D>,
    to: Option<D>,
}

impl<D: PartialOrd + Copy + fmt::Debug> DateRange<D> {
    pub fn new(from: Option<D>, to: Option<D>) -> Result<Self> {
        if let (Some(f), Some(t)) = (from, to) {
            if t < f {
                return Err(DomainError::invalid(format!(
                    "range end {:?} is before start {:?}",
                    t, f
                )));
            }
        }
        Ok(Self { from, to })
    }

    pub fn unbounded() -> Self {
        Self { from: None, to: None }
    }

    pub fn from(&self) -> Option<D> {
        self.from
    }

    pub fn to(&self) -> Option<D> {
        self.to
    }

    pub fn contains(&self, value: D) -> bool {
        self.from.is_none_or(|f| f <= value) && self.to.is_none_or(|t| value <= t)
    }
}

/// Implemented by entities with a default set of searchable text fields.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl<T: Searchable> Searchable for &T {
    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }
}

/// A named, pure test over an entity.
pub struct Predicate<'a, T> {
    name: &'static str,
    test: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<T> fmt::Debug for Predicate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("name", &self.name).finish()
    }
}

impl<'a, T> Predicate<'a, T> {
    pub fn new(name: &'static str, test: impl Fn(&T) -> bool + 'a) -> Self {
        Self {
            name,
            test: Box::new(test),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn test(&self, item: &T) -> bool {
        (self.test)(item)
    }

    /// Substring search over the text returned by `fields`.
    pub fn text_search<F>(fields: F, term: &str, policy: TextMatch) -> Self
    where
        F: Fn(&T) -> Vec<String> + 'a,
    {
        let needle = policy.normalize(term);
        Self::new("text_search", move |item| {
            if needle.is_empty() {
                return true;
            }
            policy
                .normalize(&fields(item).join(FIELD_SEPARATOR))
                .contains(&needle)
        })
    }

    /// `accessor(item) == value`; `None` lets every item through.
    pub fn equals<V, F>(accessor: F, value: Option<V>) -> Self
    where
        V: PartialEq + 'a,
        F: Fn(&T) -> V + 'a,
    {
        match value {
            None => Self::new("equals", |_| true),
            Some(expected) => Self::new("equals", move |item| accessor(item) == expected),
        }
    }

    /// `accessor(item)` falls inside `range` (inclusive).
    pub fn in_range<D, F>(accessor: F, range: DateRange<D>) -> Self
    where
        D: PartialOrd + Copy + fmt::Debug + 'a,
        F: Fn(&T) -> D + 'a,
    {
        Self::new("in_range", move |item| range.contains(accessor(item)))
    }
}

impl<'a, T: Searchable> Predicate<'a, T> {
    /// Text search over the entity's own [`Searchable`] fields.
    pub fn search(term: &str, policy: TextMatch) -> Self {
        let needle = policy.normalize(term);
        Self::new("search", move |item: &T| {
            if needle.is_empty() {
                return true;
            }
            policy
                .normalize(&item.search_fields().join(FIELD_SEPARATOR))
                .contains(&needle)
        })
    }
}

/// Keep the items that satisfy every predicate, in input order.
pub fn filter<'t, T>(items: &'t [T], predicates: &[Predicate<'_, T>]) -> Vec<&'t T> {
    items
        .iter()
        .filter(|item| predicates.iter().all(|p| p.test(item)))
        .collect()
}

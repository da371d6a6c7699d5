//! Filtering, sorting and text matching over entity collections.

mod filter;
mod sort;
mod text;

pub use filter::{filter, DateRange, Predicate, Searchable};
pub use sort::{sort, sort_by_key_str, AsSortDate, SortFields, SortOrder, SortSpec};
pub use text::{compare_names, fold_diacritics, TextMatch};

//! Pure filtering of record collections.
//!
//! The engine has no knowledge of pages or components: it takes a slice, a
//! query, and returns the passing records in their original relative order.
//! Matching is case-insensitive substring search over a record's text fields,
//! ANDed with an exact category match.

use common::model::memory::Memory;

/// A record the filter engine can inspect.
pub trait Filterable {
    /// Id of the category/department the record belongs to, if any.
    fn category_id(&self) -> Option<i64>;
    /// Text fields the search term is matched against.
    fn haystacks(&self) -> Vec<&str>;
}

/// Category selection from the page's select/chip control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(i64),
}

impl CategoryFilter {
    /// Parses the control's value: the `"all"` sentinel or a numeric id.
    /// Anything unparseable falls back to `All` rather than filtering
    /// everything out.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(id) => CategoryFilter::Only(id),
            Err(_) => CategoryFilter::All,
        }
    }

    /// Exact id match; no partial or hierarchical matching.
    pub fn matches(&self, category: Option<i64>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => category == Some(*id),
        }
    }

    /// Value for the select/chip control.
    pub fn as_value(&self) -> String {
        match self {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Only(id) => id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterQuery {
    pub search: String,
    pub category: CategoryFilter,
}

/// Computes the visible subset: text match AND category match, order
/// preserving. An empty (or whitespace) search term passes every record.
pub fn apply<'a, T: Filterable>(records: &'a [T], query: &FilterQuery) -> Vec<&'a T> {
    let needle = query.search.trim().to_lowercase();
    records
        .iter()
        .filter(|record| {
            query.category.matches(record.category_id())
                && (needle.is_empty()
                    || record
                        .haystacks()
                        .iter()
                        .any(|haystack| haystack.to_lowercase().contains(&needle)))
        })
        .collect()
}

impl Filterable for Memory {
    fn category_id(&self) -> Option<i64> {
        self.category
    }

    fn haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.caption.as_str()];
        if let Some(category) = self.category_name.as_deref() {
            fields.push(category);
        }
        if let Some(author) = self.author_name.as_deref() {
            fields.push(author);
        }
        fields
    }
}

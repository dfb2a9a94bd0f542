use std::fmt;

use serde::Serialize;

/// A line item of a custom plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Church Fees")]
    ChurchFees,
    #[serde(rename = "Reception Venue")]
    ReceptionVenue,
    #[serde(rename = "Catering")]
    Catering,
    #[serde(rename = "Bar (BYO)")]
    Bar,
    #[serde(rename = "Photography")]
    Photography,
    #[serde(rename = "DJ / Entertainment")]
    Entertainment,
    #[serde(rename = "Flowers & Decor")]
    FlowersDecor,
    #[serde(rename = "Cake & Desserts")]
    CakeDesserts,
    #[serde(rename = "Misc. & Extras")]
    Misc,
    #[serde(rename = "Videography")]
    Videography,
}

impl Category {
    /// The categories every breakdown carries, in row order.
    pub const FIXED: [Category; 9] = [
        Category::ChurchFees,
        Category::ReceptionVenue,
        Category::Catering,
        Category::Bar,
        Category::Photography,
        Category::Entertainment,
        Category::FlowersDecor,
        Category::CakeDesserts,
        Category::Misc,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::ChurchFees => "Church Fees",
            Category::ReceptionVenue => "Reception Venue",
            Category::Catering => "Catering",
            Category::Bar => "Bar (BYO)",
            Category::Photography => "Photography",
            Category::Entertainment => "DJ / Entertainment",
            Category::FlowersDecor => "Flowers & Decor",
            Category::CakeDesserts => "Cake & Desserts",
            Category::Misc => "Misc. & Extras",
            Category::Videography => "Videography",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub category: Category,
    pub amount: u64,
}

/// Per-category costs of a custom plan, in insertion order.
///
/// Only the derivation engine builds one; afterwards it is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Breakdown {
    entries: Vec<BreakdownEntry>,
}

impl Breakdown {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, category: Category, amount: u64) {
        self.entries.push(BreakdownEntry { category, amount });
    }

    pub fn entries(&self) -> &[BreakdownEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreakdownEntry> {
        self.entries.iter()
    }

    /// Amount for a category, if present.
    pub fn get(&self, category: Category) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.amount)
    }

    /// Sum of all amounts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Category display names in row order.
    pub fn category_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.category.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Breakdown {
    type Item = &'a BreakdownEntry;
    type IntoIter = std::slice::Iter<'a, BreakdownEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

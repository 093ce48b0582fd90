use crate::models::ListingSummary;

/// The "Your Listings" panel on the profile screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingsPanel {
    pub items: Vec<ListingSummary>,
    /// Set when the last fetch failed.
    pub error: bool,
}

impl ListingsPanel {
    pub fn loaded(items: Vec<ListingSummary>) -> Self {
        Self { items, error: false }
    }

    /// A failed fetch keeps whatever was shown before.
    pub fn failed(&self) -> Self {
        Self {
            items: self.items.clone(),
            error: true,
        }
    }

    /// Drop the listing with `id`, keeping the others in order.
    pub fn without(&self, id: &str) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|listing| listing.id != id)
                .cloned()
                .collect(),
            error: self.error,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

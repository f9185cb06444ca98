use std::sync::Arc;

use lendit_types::Item;

use crate::error::CoreResult;
use lendit_store::ItemStore;

/// Read-only listing over the item store.
pub struct ListingService {
    items: Arc<dyn ItemStore>,
}

impl ListingService {
    pub fn new(items: Arc<dyn ItemStore>) -> Self {
        Self { items }
    }

    /// All items, most recently added first.
    ///
    /// Order is a pure function of `date_added`. Equal timestamps tie-break
    /// by item id descending; ids are time-ordered UUIDs, so the result is
    /// identical across repeated calls over unchanged data.
    pub fn list_reverse_chronological(&self) -> CoreResult<Vec<Item>> {
        let mut items = self.items.find_all()?;
        items.sort_by(|a, b| {
            b.date_added
                .cmp(&a.date_added)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(items)
    }
}

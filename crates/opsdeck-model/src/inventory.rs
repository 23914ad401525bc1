// SPDX-License-Identifier: Apache-2.0

use crate::error::ParseError;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};

/// A stocked item. `is_low` is always derived, never stored, so it can not
/// go stale against `stock_qty`/`min_threshold`. The wire payload may carry
/// extra fields such as `updated_at`; they are dropped on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u64,
    pub item_name: String,
    pub stock_qty: u32,
    pub min_threshold: u32,
}

impl InventoryItem {
    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.stock_qty < self.min_threshold
    }
}

/// Body of `POST /inventory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryCreate {
    pub item_name: String,
    pub stock_qty: u32,
    pub min_threshold: u32,
}

impl InventoryCreate {
    pub fn new(item_name: &str, stock_qty: u32, min_threshold: u32) -> Result<Self, ParseError> {
        let item_name = item_name.trim();
        if item_name.is_empty() {
            return Err(ParseError::Empty("item_name"));
        }
        Ok(Self {
            item_name: item_name.to_string(),
            stock_qty,
            min_threshold,
        })
    }
}

/// Body of `PUT /inventory/{id}`: the fields a stock editor row holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryEdit {
    pub stock_qty: u32,
    pub min_threshold: u32,
}

impl InventoryEdit {
    #[must_use]
    pub const fn new(stock_qty: u32, min_threshold: u32) -> Self {
        Self {
            stock_qty,
            min_threshold,
        }
    }
}

impl Resource for InventoryItem {
    type Create = InventoryCreate;
    type Edit = InventoryEdit;

    const KIND: &'static str = "inventory";

    fn id(&self) -> u64 {
        self.id
    }

    fn edit_draft(&self) -> InventoryEdit {
        InventoryEdit {
            stock_qty: self.stock_qty,
            min_threshold: self.min_threshold,
        }
    }

    fn apply_edit(&mut self, edit: &InventoryEdit) {
        self.stock_qty = edit.stock_qty;
        self.min_threshold = edit.min_threshold;
    }

    fn synthesize(id: u64, draft: InventoryCreate) -> Self {
        Self {
            id,
            item_name: draft.item_name,
            stock_qty: draft.stock_qty,
            min_threshold: draft.min_threshold,
        }
    }
}

// SPDX-License-Identifier: Apache-2.0

use crate::error::ParseError;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The backend emits lowercase status values while older fixtures carry
/// capitalized ones; all spellings deserialize, the uppercase one is
/// canonical on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum OrderStatus {
    #[serde(rename = "PENDING", alias = "pending", alias = "Pending")]
    Pending,
    #[serde(rename = "COMPLETED", alias = "completed", alias = "Completed")]
    Completed,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer order. The wire payload may carry extra fields such as
/// `created_at`; they are dropped on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub product_name: String,
    pub quantity: u32,
    pub status: OrderStatus,
}

/// Body of `POST /orders`. The server assigns id and an initial `PENDING`
/// status; the optimistic local fallback does the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderCreate {
    pub product_name: String,
    pub quantity: u32,
}

impl OrderCreate {
    pub fn new(product_name: &str, quantity: u32) -> Result<Self, ParseError> {
        let product_name = product_name.trim();
        if product_name.is_empty() {
            return Err(ParseError::Empty("product_name"));
        }
        if quantity == 0 {
            return Err(ParseError::Zero("quantity"));
        }
        Ok(Self {
            product_name: product_name.to_string(),
            quantity,
        })
    }
}

/// Body of `PUT /orders/{id}`: a full replace of the mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderEdit {
    pub product_name: String,
    pub quantity: u32,
    pub status: OrderStatus,
}

impl OrderEdit {
    pub fn new(product_name: &str, quantity: u32, status: OrderStatus) -> Result<Self, ParseError> {
        let product_name = product_name.trim();
        if product_name.is_empty() {
            return Err(ParseError::Empty("product_name"));
        }
        if quantity == 0 {
            return Err(ParseError::Zero("quantity"));
        }
        Ok(Self {
            product_name: product_name.to_string(),
            quantity,
            status,
        })
    }
}

impl Resource for Order {
    type Create = OrderCreate;
    type Edit = OrderEdit;

    const KIND: &'static str = "orders";

    fn id(&self) -> u64 {
        self.id
    }

    fn edit_draft(&self) -> OrderEdit {
        OrderEdit {
            product_name: self.product_name.clone(),
            quantity: self.quantity,
            status: self.status,
        }
    }

    fn apply_edit(&mut self, edit: &OrderEdit) {
        self.product_name = edit.product_name.clone();
        self.quantity = edit.quantity;
        self.status = edit.status;
    }

    fn synthesize(id: u64, draft: OrderCreate) -> Self {
        Self {
            id,
            product_name: draft.product_name,
            quantity: draft.quantity,
            status: OrderStatus::Pending,
        }
    }
}

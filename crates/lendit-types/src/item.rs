use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{ItemId, UserId};

/// Sentinel image reference used when an item is created without one.
pub const DEFAULT_IMAGE: &str = "default";

/// A lendable item record.
///
/// `current_borrower` is the only field that mutates after creation:
/// `None` means the item is available, `Some` means it is on loan. `id`,
/// `date_added`, and `owner` are set at creation and never change; listing
/// order is a pure function of `date_added`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: ItemId,
    #[serde(rename = "itemName")]
    pub name: String,
    #[serde(rename = "itemDescription", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    #[serde(rename = "dateAdded")]
    pub date_added: DateTime<Utc>,
    pub owner: UserId,
    #[serde(rename = "currentBorrower", skip_serializing_if = "Option::is_none")]
    pub current_borrower: Option<UserId>,
}

impl Item {
    /// `true` when the item is not currently on loan.
    pub fn is_available(&self) -> bool {
        self.current_borrower.is_none()
    }
}

/// Creation input for an item record.
///
/// Defaults are applied explicitly when the record is constructed, not by
/// the storage schema: `image` falls back to [`DEFAULT_IMAGE`], `date_added`
/// to the current wall-clock time, and the borrower starts absent. There is
/// no uniqueness constraint on `name`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub date_added: Option<DateTime<Utc>>,
    pub owner: UserId,
}

impl NewItem {
    pub fn new(name: impl Into<String>, owner: UserId) -> Self {
        Self {
            name: name.into(),
            description: None,
            image: None,
            date_added: None,
            owner,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }

    /// Materialize the record, minting an id and applying defaults.
    pub fn into_item(self) -> Item {
        Item {
            id: ItemId::generate(),
            name: self.name,
            description: self.description,
            image: self.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            date_added: self.date_added.unwrap_or_else(Utc::now),
            owner: self.owner,
            current_borrower: None,
        }
    }
}

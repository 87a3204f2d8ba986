//! Application state owned by the [`crate::GearShare`] controller.
//!
//! Mutation happens only through the controller's commands; nothing else
//! holds a writable reference to the collections.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use gearshare_shared::constants::{DEFAULT_LOCATION, DEFAULT_SEARCH_RADIUS};
use gearshare_shared::{ItemId, MessageId};
use gearshare_store::{Inventory, Mailbox, OwnerProfile};

/// Top-level navigation tab.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Available,
    MyGear,
    Messages,
}

/// Which modal is open, if any.  Single slot, last-write-wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Modal {
    AddItem,
    BorrowRequest,
    MessageDetail,
}

/// Current search parameters.  The radius is kept as the raw user text and
/// parsed on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: String,
    pub radius: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            radius: DEFAULT_SEARCH_RADIUS.to_string(),
        }
    }
}

/// Transient UI selection: the open modal and its subject entity, plus the
/// reply buffer.  Cleared wholesale when the modal closes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub modal: Option<Modal>,
    pub item: Option<ItemId>,
    pub message: Option<MessageId>,
    pub reply_draft: String,
}

impl Selection {
    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// Central application state.
#[derive(Debug)]
pub struct AppState {
    /// The two top-level collections, kept in sync by [`Inventory`].
    pub inventory: Inventory,

    /// Message inbox plus unread counter.
    pub mailbox: Mailbox,

    /// Current location text shown in the header.
    pub location: String,

    pub active_tab: Tab,
    pub search: SearchParams,
    pub selection: Selection,

    /// Items with a mutation currently awaiting remote confirmation.  A
    /// second mutation on a busy id fails fast instead of racing.
    pub in_flight: HashSet<ItemId>,
}

impl AppState {
    pub fn new(profile: OwnerProfile) -> Self {
        Self {
            inventory: Inventory::new(profile),
            mailbox: Mailbox::new(),
            location: DEFAULT_LOCATION.to_string(),
            active_tab: Tab::default(),
            search: SearchParams::default(),
            selection: Selection::default(),
            in_flight: HashSet::new(),
        }
    }
}

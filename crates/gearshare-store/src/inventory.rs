//! The dual-view inventory.
//!
//! Owned items are the canonical table; the availability list mixes
//! community listings fetched from the backend with derived listings for the
//! user's own public items.  Every mutation goes through this type so the
//! two collections can never be updated separately: an owned item has a
//! listing exactly when its privacy is `Public`, and that listing always
//! mirrors the canonical record.

use tracing::debug;

use gearshare_shared::{ItemId, Privacy, UserRef};

use crate::error::{Result, StoreError};
use crate::models::{GearItem, ItemPatch, Listing, OwnerProfile};

#[derive(Debug, Clone)]
pub struct Inventory {
    /// The user's own gear, most-recent-first.
    owned: Vec<GearItem>,
    /// Community availability list, in backend order with own public items
    /// at the front.
    available: Vec<Listing>,
    /// Identity used when projecting own items into the availability list.
    profile: OwnerProfile,
}

impl Inventory {
    pub fn new(profile: OwnerProfile) -> Self {
        Self {
            owned: Vec::new(),
            available: Vec::new(),
            profile,
        }
    }

    /// Replace both collections with a fresh fetch.  Derived listings for
    /// the user's own public items are re-created from the canonical
    /// records, so a backend that omits them cannot break the projection.
    pub fn load(&mut self, my_gear: Vec<GearItem>, community: Vec<Listing>) {
        self.owned.clear();
        self.available = community;
        for item in my_gear.into_iter().rev() {
            self.insert_owned(item);
        }
    }

    /// Insert a freshly created item at the front of the owned list and,
    /// when public, at the front of the availability list.
    pub fn insert_owned(&mut self, item: GearItem) {
        if item.privacy.is_public() {
            self.available.insert(0, Listing::for_owned(&item, &self.profile));
        }
        self.owned.insert(0, item);
    }

    /// Merge a partial edit into the owned record and propagate it to the
    /// availability list.  The upsert/remove decision is evaluated on every
    /// update, not only ones that touch privacy: edited display fields must
    /// reach an existing listing too.
    pub fn apply_patch(&mut self, id: ItemId, patch: &ItemPatch) -> Result<()> {
        let item = self
            .owned
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(StoreError::NotFound)?;
        item.apply(patch);

        let item = item.clone();
        self.propagate(&item);
        Ok(())
    }

    /// Remove the item from both collections.  Deleting an id that is not
    /// present is a no-op, so duplicate clicks are tolerated.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.owned.len();
        self.owned.retain(|i| i.id != id);
        self.available.retain(|l| l.id != id);
        let removed = self.owned.len() < before;
        if !removed {
            debug!(%id, "Delete target already absent");
        }
        removed
    }

    /// Advance the item's privacy one step through the cycle
    /// Public -> Friends Only -> Private -> Public and propagate.
    pub fn cycle_privacy(&mut self, id: ItemId) -> Result<Privacy> {
        let current = self.item(id).ok_or(StoreError::NotFound)?.privacy;
        let next = current.next();
        self.apply_patch(id, &ItemPatch::privacy(next))?;
        Ok(next)
    }

    /// Record who borrowed the item.  Keyed by id, carried on the
    /// originating request message.
    pub fn record_borrow(&mut self, id: ItemId, borrower: UserRef) -> Result<()> {
        let item = self
            .owned
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(StoreError::NotFound)?;
        item.borrower = Some(borrower);
        Ok(())
    }

    pub fn owned(&self) -> &[GearItem] {
        &self.owned
    }

    pub fn available(&self) -> &[Listing] {
        &self.available
    }

    pub fn item(&self, id: ItemId) -> Option<&GearItem> {
        self.owned.iter().find(|i| i.id == id)
    }

    /// Check the projection invariant: every owned public item has exactly
    /// one listing mirroring it, and no owned non-public item has any.
    pub fn projection_consistent(&self) -> bool {
        self.owned.iter().all(|item| {
            let listings: Vec<&Listing> =
                self.available.iter().filter(|l| l.id == item.id).collect();
            if item.privacy.is_public() {
                listings.len() == 1 && mirrors(listings[0], item)
            } else {
                listings.is_empty()
            }
        })
    }

    fn propagate(&mut self, item: &GearItem) {
        if item.privacy.is_public() {
            match self.available.iter_mut().find(|l| l.id == item.id) {
                Some(listing) => listing.sync_from(item),
                None => {
                    self.available
                        .insert(0, Listing::for_owned(item, &self.profile));
                }
            }
        } else {
            self.available.retain(|l| l.id != item.id);
        }
    }
}

fn mirrors(listing: &Listing, item: &GearItem) -> bool {
    listing.name == item.name
        && listing.description == item.description
        && listing.image == item.image
        && listing.condition == item.condition
}

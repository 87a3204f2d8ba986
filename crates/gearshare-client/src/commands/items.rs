//! Inventory commands: add, edit, delete, privacy cycling.
//!
//! All of these are apply-after-confirm: the remote call goes out first and
//! both collections change together only once it succeeds.

use tracing::info;

use gearshare_remote::RemoteApi;
use gearshare_shared::{ItemId, Privacy};
use gearshare_store::{ItemPatch, NewItem, StoreError};

use crate::engine::GearShare;
use crate::error::{EngineError, Result};
use crate::state::Modal;

impl<R: RemoteApi> GearShare<R> {
    /// Open the add-item modal and hand back the blank form state.
    pub async fn open_add_item_modal(&self) -> NewItem {
        let mut state = self.state.lock().await;
        state.selection.close();
        state.selection.modal = Some(Modal::AddItem);
        NewItem::blank()
    }

    /// Create a new item.  The backend assigns the id; the item lands at the
    /// front of the owned list and, when public, the availability list.
    pub async fn add_item(&self, draft: NewItem) -> Result<ItemId> {
        if draft.name.trim().is_empty() {
            return Err(EngineError::Validation("item name is required".to_string()));
        }

        let created = match self.remote.create_item(draft).await {
            Ok(item) => item,
            Err(e) => return Err(self.report_remote_failure("create item", e)),
        };
        let id = created.id;

        {
            let mut state = self.state.lock().await;
            state.inventory.insert_owned(created);
            state.selection.close();
            debug_assert!(state.inventory.projection_consistent());
        }

        self.notifier.show("Tool added successfully!");
        info!(%id, "Item added");
        Ok(id)
    }

    /// Edit an existing item.  NotFound is a hard failure; propagation to
    /// the availability list follows the resulting privacy.
    pub async fn update_item(&self, id: ItemId, patch: ItemPatch) -> Result<()> {
        self.begin(id).await?;
        let result = self.update_item_confirmed(id, &patch).await;
        self.finish(id).await;
        result
    }

    /// Delete an item from both collections.  Tolerates duplicate clicks:
    /// deleting an id that is already gone is a quiet no-op.
    pub async fn delete_item(&self, id: ItemId) -> Result<()> {
        self.begin(id).await?;
        let result = self.delete_item_confirmed(id).await;
        self.finish(id).await;
        result
    }

    /// Advance the item's privacy one step (Public -> Friends Only ->
    /// Private -> Public) and return the new level for display.
    pub async fn cycle_privacy(&self, id: ItemId) -> Result<Privacy> {
        self.begin(id).await?;
        let result = self.cycle_privacy_confirmed(id).await;
        self.finish(id).await;
        result
    }

    async fn update_item_confirmed(&self, id: ItemId, patch: &ItemPatch) -> Result<()> {
        {
            let state = self.state.lock().await;
            if state.inventory.item(id).is_none() {
                return Err(StoreError::NotFound.into());
            }
        }

        if let Err(e) = self.remote.update_item(id, patch).await {
            return Err(self.report_remote_failure("update item", e));
        }

        {
            let mut state = self.state.lock().await;
            state.inventory.apply_patch(id, patch)?;
            debug_assert!(state.inventory.projection_consistent());
        }

        self.notifier.show("Item updated");
        info!(%id, "Item updated");
        Ok(())
    }

    async fn delete_item_confirmed(&self, id: ItemId) -> Result<()> {
        if let Err(e) = self.remote.delete_item(id).await {
            return Err(self.report_remote_failure("delete item", e));
        }

        {
            let mut state = self.state.lock().await;
            state.inventory.remove(id);
            debug_assert!(state.inventory.projection_consistent());
        }

        self.notifier.show("Item deleted successfully");
        info!(%id, "Item deleted");
        Ok(())
    }

    async fn cycle_privacy_confirmed(&self, id: ItemId) -> Result<Privacy> {
        let next = {
            let state = self.state.lock().await;
            state
                .inventory
                .item(id)
                .ok_or(StoreError::NotFound)?
                .privacy
                .next()
        };

        if let Err(e) = self.remote.update_item(id, &ItemPatch::privacy(next)).await {
            return Err(self.report_remote_failure("cycle privacy", e));
        }

        {
            let mut state = self.state.lock().await;
            state.inventory.apply_patch(id, &ItemPatch::privacy(next))?;
            debug_assert!(state.inventory.projection_consistent());
        }

        self.notifier.show(format!("Privacy updated to {next}"));
        info!(%id, privacy = %next, "Privacy cycled");
        Ok(next)
    }
}

//! The backend contract.
//!
//! Every call is asynchronous and may reject; the client applies local
//! state only after the call confirms.  The initial `fetch_collection`
//! operation is realized as three typed fetches.

use gearshare_shared::{ItemId, UserRef};
use gearshare_store::{BorrowRequest, GearItem, ItemPatch, Listing, Message, NewItem};

use crate::error::RemoteError;

#[allow(async_fn_in_trait)]
pub trait RemoteApi {
    /// Community availability list.
    async fn fetch_available_gear(&self) -> Result<Vec<Listing>, RemoteError>;

    /// The user's own inventory.
    async fn fetch_my_gear(&self) -> Result<Vec<GearItem>, RemoteError>;

    /// The message inbox.
    async fn fetch_messages(&self) -> Result<Vec<Message>, RemoteError>;

    /// Create an item.  The backend assigns the canonical id and substitutes
    /// a placeholder image when the draft has none.
    async fn create_item(&self, draft: NewItem) -> Result<GearItem, RemoteError>;

    async fn update_item(&self, id: ItemId, patch: &ItemPatch) -> Result<(), RemoteError>;

    async fn delete_item(&self, id: ItemId) -> Result<(), RemoteError>;

    async fn send_borrow_request(
        &self,
        item_id: ItemId,
        request: &BorrowRequest,
    ) -> Result<(), RemoteError>;

    async fn send_message(&self, recipient: &UserRef, text: &str) -> Result<(), RemoteError>;

    /// Confirm a location change; returns the canonical location text.
    async fn update_location(&self, location: &str) -> Result<String, RemoteError>;

    /// Autocomplete suggestions for the location field.
    async fn location_suggestions(&self, query: &str) -> Result<Vec<String>, RemoteError>;
}

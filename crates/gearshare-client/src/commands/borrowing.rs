//! Borrow-request flow: open the modal with default dates, then dispatch
//! the request to the backend.

use chrono::Local;
use tracing::info;

use gearshare_remote::RemoteApi;
use gearshare_shared::ItemId;
use gearshare_store::BorrowRequest;

use crate::engine::GearShare;
use crate::error::{EngineError, Result};
use crate::state::Modal;

impl<R: RemoteApi> GearShare<R> {
    /// Open the borrow modal for a listing and hand back the default draft:
    /// borrow today through tomorrow, empty note.
    pub async fn open_borrow_modal(&self, item_id: ItemId) -> BorrowRequest {
        let mut state = self.state.lock().await;
        state.selection.close();
        state.selection.modal = Some(Modal::BorrowRequest);
        state.selection.item = Some(item_id);
        BorrowRequest::starting(Local::now().date_naive())
    }

    /// Dispatch a borrow request.  Validation failures abort before any
    /// remote call and without a notification; the control simply does not
    /// proceed.
    pub async fn send_borrow_request(&self, item_id: ItemId, request: BorrowRequest) -> Result<()> {
        if request.message.trim().is_empty() {
            return Err(EngineError::Validation(
                "request message is required".to_string(),
            ));
        }
        if request.end_date < request.start_date {
            return Err(EngineError::Validation(
                "end date precedes start date".to_string(),
            ));
        }

        if let Err(e) = self.remote.send_borrow_request(item_id, &request).await {
            return Err(self.report_remote_failure("send borrow request", e));
        }

        self.state.lock().await.selection.close();
        self.notifier
            .show("Borrow request sent! You'll get a response soon.");
        info!(%item_id, "Borrow request sent");
        Ok(())
    }
}

//! Inbox commands: opening messages, replying, and resolving borrow
//! requests.
//!
//! Approval records the borrower on the item referenced by the request's
//! `item_id`; names are display-only and never used as lookup keys.

use tracing::info;

use gearshare_remote::RemoteApi;
use gearshare_shared::MessageId;
use gearshare_store::{Message, StoreError};

use crate::engine::GearShare;
use crate::error::{EngineError, Result};
use crate::state::Modal;

impl<R: RemoteApi> GearShare<R> {
    /// Open a message in the detail view.  Marks it read on first open,
    /// keeping the unread counter in step with the flag.
    pub async fn open_message(&self, id: MessageId) -> Result<Message> {
        let mut state = self.state.lock().await;
        let message = state.mailbox.open(id)?.clone();
        state.selection.close();
        state.selection.modal = Some(Modal::MessageDetail);
        state.selection.message = Some(id);
        debug_assert!(state.mailbox.counter_consistent());
        Ok(message)
    }

    pub async fn set_reply_draft(&self, text: &str) {
        self.state.lock().await.selection.reply_draft = text.to_string();
    }

    /// Send the reply buffer to the open message's sender.  Only plain
    /// messages take replies; requests are resolved with approve/reject.
    /// An empty buffer aborts silently before any remote call.
    pub async fn send_reply(&self) -> Result<()> {
        let (recipient, text) = {
            let state = self.state.lock().await;
            let id = state
                .selection
                .message
                .ok_or_else(|| EngineError::Validation("no message open".to_string()))?;
            let message = state.mailbox.message(id).ok_or(StoreError::NotFound)?;
            if message.is_request() {
                return Err(StoreError::InvalidState(
                    "borrow requests take approve/reject, not replies".to_string(),
                )
                .into());
            }
            let text = state.selection.reply_draft.trim().to_string();
            if text.is_empty() {
                return Err(EngineError::Validation("reply text is required".to_string()));
            }
            (message.sender.clone(), text)
        };

        if let Err(e) = self.remote.send_message(&recipient, &text).await {
            return Err(self.report_remote_failure("send reply", e));
        }

        self.state.lock().await.selection.close();
        self.notifier.show("Reply sent!");
        info!(recipient = %recipient, "Reply sent");
        Ok(())
    }

    /// Approve a pending borrow request: record the borrower on the item it
    /// references, close the detail view, notify.  Re-approving a resolved
    /// request is an invalid-state error.
    pub async fn approve_request(&self, id: MessageId) -> Result<()> {
        {
            let mut state = self.state.lock().await;

            // Refuse before transitioning if the referenced item is gone,
            // so the request stays pending rather than approved-but-unrecorded.
            let target = state
                .mailbox
                .message(id)
                .and_then(|m| m.request.as_ref())
                .map(|r| r.item_id);
            if let Some(item_id) = target {
                if state.inventory.item(item_id).is_none() {
                    return Err(StoreError::NotFound.into());
                }
            }

            let (item_id, borrower) = state.mailbox.approve(id)?;
            state.inventory.record_borrow(item_id, borrower)?;
            state.selection.close();
        }

        self.notifier
            .show("Request approved! The borrower has been notified.");
        info!(message = %id, "Borrow request approved");
        Ok(())
    }

    /// Decline a pending borrow request.  No inventory mutation; the
    /// message is retained with its terminal status.
    pub async fn reject_request(&self, id: MessageId) -> Result<()> {
        {
            let mut state = self.state.lock().await;
            state.mailbox.reject(id)?;
            state.selection.close();
        }

        self.notifier
            .show("Request declined. The borrower has been notified.");
        info!(message = %id, "Borrow request declined");
        Ok(())
    }
}

//! The message inbox and its unread counter.
//!
//! State machine: plain messages go Unread -> Read and stop.  Request
//! messages additionally resolve Pending -> Approved or Pending -> Rejected;
//! both outcomes are terminal and the message itself is retained.  The
//! unread counter is only ever updated together with an `is_read` flip.

use gearshare_shared::{ItemId, MessageId, UserRef};

use crate::error::{Result, StoreError};
use crate::models::{Message, RequestStatus};

#[derive(Debug, Clone, Default)]
pub struct Mailbox {
    messages: Vec<Message>,
    unread: usize,
}

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the inbox with a fresh fetch; the unread counter is derived
    /// from the flags, never trusted from elsewhere.
    pub fn load(&mut self, messages: Vec<Message>) {
        self.unread = messages.iter().filter(|m| !m.is_read).count();
        self.messages = messages;
    }

    /// Open a message for detail view.  Marks it read on first open,
    /// decrementing the unread counter atomically with the flag flip;
    /// reopening has no further effect on the counter.
    pub fn open(&mut self, id: MessageId) -> Result<&Message> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound)?;
        if !message.is_read {
            message.is_read = true;
            self.unread -= 1;
        }
        Ok(message)
    }

    /// Approve a pending borrow request.  Returns the item id and borrower
    /// the caller needs to record the loan.
    pub fn approve(&mut self, id: MessageId) -> Result<(ItemId, UserRef)> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound)?;
        let sender = message.sender.clone();
        let request = message
            .request
            .as_mut()
            .ok_or_else(|| StoreError::InvalidState("not a borrow request".to_string()))?;
        if request.status != RequestStatus::Pending {
            return Err(StoreError::InvalidState(
                "request already resolved".to_string(),
            ));
        }
        request.status = RequestStatus::Approved;
        Ok((request.item_id, sender))
    }

    /// Decline a pending borrow request.  Terminal; no other state changes.
    pub fn reject(&mut self, id: MessageId) -> Result<()> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound)?;
        let request = message
            .request
            .as_mut()
            .ok_or_else(|| StoreError::InvalidState("not a borrow request".to_string()))?;
        if request.status != RequestStatus::Pending {
            return Err(StoreError::InvalidState(
                "request already resolved".to_string(),
            ));
        }
        request.status = RequestStatus::Rejected;
        Ok(())
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn unread(&self) -> usize {
        self.unread
    }

    /// Check the counter invariant: `unread` equals the number of messages
    /// with `is_read == false`.
    pub fn counter_consistent(&self) -> bool {
        self.unread == self.messages.iter().filter(|m| !m.is_read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequestDetails;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn plain(n: u128, is_read: bool) -> Message {
        Message {
            id: MessageId(Uuid::from_u128(n)),
            sender: UserRef::new("Kailash R."),
            sender_avatar: String::new(),
            subject: "Thanks for the hoop tools!".to_string(),
            content: "Will return them tomorrow as promised!".to_string(),
            date: "Yesterday, 4:15 PM".to_string(),
            is_read,
            request: None,
        }
    }

    fn request(n: u128, item: u128) -> Message {
        Message {
            id: MessageId(Uuid::from_u128(n)),
            sender: UserRef::new("Solomon G."),
            sender_avatar: String::new(),
            subject: "Request to borrow your Flow Toy Repair Kit".to_string(),
            content: "Your repair kit looks perfect for what I need.".to_string(),
            date: "Today, 10:23 AM".to_string(),
            is_read: false,
            request: Some(RequestDetails {
                item_id: ItemId(Uuid::from_u128(item)),
                item_name: "Flow Toy Repair Kit".to_string(),
                start_date: NaiveDate::from_ymd_opt(2025, 3, 22).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 3, 24).unwrap(),
                status: RequestStatus::Pending,
            }),
        }
    }

    #[test]
    fn test_load_derives_unread_counter() {
        let mut mailbox = Mailbox::new();
        mailbox.load(vec![plain(1, false), plain(2, false), plain(3, true)]);
        assert_eq!(mailbox.unread(), 2);
        assert!(mailbox.counter_consistent());
    }

    #[test]
    fn test_open_marks_read_exactly_once() {
        let mut mailbox = Mailbox::new();
        mailbox.load(vec![plain(1, false), plain(2, false)]);
        let id = MessageId(Uuid::from_u128(1));

        mailbox.open(id).unwrap();
        assert_eq!(mailbox.unread(), 1);
        assert!(mailbox.message(id).unwrap().is_read);

        // Reopening does not decrement again.
        mailbox.open(id).unwrap();
        assert_eq!(mailbox.unread(), 1);
        assert!(mailbox.counter_consistent());
    }

    #[test]
    fn test_open_missing_message_is_not_found() {
        let mut mailbox = Mailbox::new();
        let err = mailbox.open(MessageId(Uuid::from_u128(9))).unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test]
    fn test_approve_returns_item_and_sender() {
        let mut mailbox = Mailbox::new();
        mailbox.load(vec![request(1, 101)]);
        let (item_id, borrower) = mailbox.approve(MessageId(Uuid::from_u128(1))).unwrap();
        assert_eq!(item_id, ItemId(Uuid::from_u128(101)));
        assert_eq!(borrower, UserRef::new("Solomon G."));
    }

    #[test]
    fn test_reapprove_is_invalid_state() {
        let mut mailbox = Mailbox::new();
        mailbox.load(vec![request(1, 101)]);
        let id = MessageId(Uuid::from_u128(1));
        mailbox.approve(id).unwrap();
        let err = mailbox.approve(id).unwrap_err();
        assert!(matches!(err, StoreError::InvalidState(_)));
    }

    #[test]
    fn test_approve_plain_message_is_invalid_state() {
        let mut mailbox = Mailbox::new();
        mailbox.load(vec![plain(1, true)]);
        let err = mailbox.approve(MessageId(Uuid::from_u128(1))).unwrap_err();
        assert!(matches!(err, StoreError::InvalidState(_)));
    }

    #[test]
    fn test_reject_is_terminal_and_keeps_message() {
        let mut mailbox = Mailbox::new();
        mailbox.load(vec![request(1, 101)]);
        let id = MessageId(Uuid::from_u128(1));

        mailbox.reject(id).unwrap();
        assert_eq!(mailbox.messages().len(), 1);
        assert_eq!(
            mailbox.message(id).unwrap().request.as_ref().unwrap().status,
            RequestStatus::Rejected
        );
        assert!(matches!(
            mailbox.approve(id).unwrap_err(),
            StoreError::InvalidState(_)
        ));
    }
}

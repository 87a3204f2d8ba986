//! Domain model structs for the GearShare client.
//!
//! Every struct derives `Serialize` and `Deserialize` with camelCase field
//! names so it can be handed directly to the UI layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use gearshare_shared::constants::{SELF_AVAILABILITY_TEXT, SELF_OWNER_NAME, SELF_OWNER_RATING};
use gearshare_shared::placeholder;
use gearshare_shared::{Condition, ItemId, MessageId, Privacy, UserRef};

// ---------------------------------------------------------------------------
// GearItem
// ---------------------------------------------------------------------------

/// A tool in the user's own inventory.  This is the canonical record; the
/// community-facing [`Listing`] for it is derived, never authored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GearItem {
    /// Unique item identifier, assigned by the backend at creation.
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Photo URL.
    pub image: String,
    pub condition: Condition,
    pub privacy: Privacy,
    /// Who currently has the item, `None` when it is not lent out.
    pub borrower: Option<UserRef>,
}

impl GearItem {
    /// Merge a partial edit into this record.  Fields left `None` in the
    /// patch are untouched.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(privacy) = patch.privacy {
            self.privacy = privacy;
        }
    }
}

/// Partial edit of a [`GearItem`].  `borrower` is deliberately absent:
/// lending state changes only through request approval.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub condition: Option<Condition>,
    pub privacy: Option<Privacy>,
}

impl ItemPatch {
    /// Patch that only changes the privacy level.
    pub fn privacy(privacy: Privacy) -> Self {
        Self {
            privacy: Some(privacy),
            ..Self::default()
        }
    }
}

/// Draft for a not-yet-created item, filled in by the add-item form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub condition: Condition,
    pub privacy: Privacy,
    /// Photo URL.  `None` lets the backend substitute a placeholder.
    pub image: Option<String>,
}

impl NewItem {
    /// Blank form state: condition Good, privacy Public, no photo.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            condition: Condition::Good,
            privacy: Privacy::Public,
            image: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// One entry in the community availability list.
///
/// For other people's gear this is exactly what the backend returned.  For
/// the user's own public items it is a projection of the canonical
/// [`GearItem`] plus synthesized owner fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub condition: Condition,
    /// Distance from the user, in kilometres.  Zero for own items.
    pub distance_km: f64,
    pub availability_text: String,
    pub owner_name: String,
    pub owner_avatar: String,
    pub owner_rating: f64,
}

impl Listing {
    /// Derive the availability entry for one of the user's own items.
    pub fn for_owned(item: &GearItem, profile: &OwnerProfile) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            image: item.image.clone(),
            condition: item.condition,
            distance_km: 0.0,
            availability_text: SELF_AVAILABILITY_TEXT.to_string(),
            owner_name: profile.name.clone(),
            owner_avatar: profile.avatar.clone(),
            owner_rating: profile.rating,
        }
    }

    /// Re-copy the display fields from the canonical record.  Owner and
    /// distance fields are left alone; they are not part of the item.
    pub fn sync_from(&mut self, item: &GearItem) {
        self.name = item.name.clone();
        self.description = item.description.clone();
        self.image = item.image.clone();
        self.condition = item.condition;
    }
}

/// The acting user's synthesized identity, used when projecting their own
/// items into the availability list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub name: String,
    pub avatar: String,
    pub rating: f64,
}

impl Default for OwnerProfile {
    fn default() -> Self {
        Self {
            name: SELF_OWNER_NAME.to_string(),
            avatar: placeholder::avatar_image(SELF_OWNER_NAME),
            rating: SELF_OWNER_RATING,
        }
    }
}

// ---------------------------------------------------------------------------
// BorrowRequest
// ---------------------------------------------------------------------------

/// Transient input dispatched when asking to borrow an item.  Never stored
/// as an entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub message: String,
}

impl BorrowRequest {
    /// Form defaults: borrow from `today` until the day after, empty note.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            start_date: today,
            end_date: today.succ_opt().unwrap_or(today),
            message: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A message in the inbox.  Request-bearing messages carry
/// [`RequestDetails`]; plain correspondence does not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub sender: UserRef,
    pub sender_avatar: String,
    pub subject: String,
    pub content: String,
    /// Display string as provided by the backend ("Today, 10:23 AM").
    pub date: String,
    pub is_read: bool,
    pub request: Option<RequestDetails>,
}

impl Message {
    pub fn is_request(&self) -> bool {
        self.request.is_some()
    }
}

/// Details attached to a borrow-request message.
///
/// `item_id` is carried explicitly so that approval can locate the item by
/// identity; item names are not stable keys (duplicates collide).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetails {
    pub item_id: ItemId,
    pub item_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: RequestStatus,
}

/// Lifecycle of a borrow request.  Approved and Rejected are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_item() -> GearItem {
        GearItem {
            id: ItemId(Uuid::from_u128(1)),
            name: "Power Drill".to_string(),
            description: "18V cordless".to_string(),
            image: "https://example.com/drill.png".to_string(),
            condition: Condition::Excellent,
            privacy: Privacy::Public,
            borrower: None,
        }
    }

    #[test]
    fn test_apply_patch_merges_only_set_fields() {
        let mut item = sample_item();
        item.apply(&ItemPatch {
            description: Some("18V cordless, two batteries".to_string()),
            privacy: Some(Privacy::Private),
            ..ItemPatch::default()
        });
        assert_eq!(item.name, "Power Drill");
        assert_eq!(item.description, "18V cordless, two batteries");
        assert_eq!(item.privacy, Privacy::Private);
        assert_eq!(item.condition, Condition::Excellent);
    }

    #[test]
    fn test_listing_for_owned_synthesizes_owner_fields() {
        let item = sample_item();
        let listing = Listing::for_owned(&item, &OwnerProfile::default());
        assert_eq!(listing.id, item.id);
        assert_eq!(listing.distance_km, 0.0);
        assert_eq!(listing.owner_name, "You");
        assert_eq!(listing.owner_rating, 5.0);
        assert_eq!(listing.availability_text, "Anytime");
    }

    #[test]
    fn test_listing_sync_preserves_owner_fields() {
        let mut item = sample_item();
        let mut listing = Listing::for_owned(&item, &OwnerProfile::default());
        item.name = "Impact Driver".to_string();
        item.condition = Condition::Fair;
        listing.sync_from(&item);
        assert_eq!(listing.name, "Impact Driver");
        assert_eq!(listing.condition, Condition::Fair);
        assert_eq!(listing.owner_name, "You");
        assert_eq!(listing.distance_km, 0.0);
    }

    #[test]
    fn test_borrow_request_defaults_to_one_day() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 22).unwrap();
        let draft = BorrowRequest::starting(today);
        assert_eq!(draft.start_date, today);
        assert_eq!(draft.end_date, NaiveDate::from_ymd_opt(2025, 3, 23).unwrap());
        assert!(draft.message.is_empty());
    }

    #[test]
    fn test_models_serialize_camel_case() {
        let listing = Listing::for_owned(&sample_item(), &OwnerProfile::default());
        let json = serde_json::to_value(&listing).unwrap();
        assert!(json.get("distanceKm").is_some());
        assert!(json.get("ownerName").is_some());
        assert!(json.get("availabilityText").is_some());
    }
}

//! Deterministic seed data for the mock backend.
//!
//! Entities get stable `Uuid::from_u128` identifiers so tests and the demo
//! UI see the same ids on every run.  The borrow-request message references
//! the Flow Toy Repair Kit by id, not just by display name.

use chrono::NaiveDate;
use uuid::Uuid;

use gearshare_shared::placeholder;
use gearshare_shared::{Condition, ItemId, MessageId, Privacy, UserRef};
use gearshare_store::{GearItem, Listing, Message, RequestDetails, RequestStatus};

pub fn item_id(n: u128) -> ItemId {
    ItemId(Uuid::from_u128(n))
}

pub fn message_id(n: u128) -> MessageId {
    MessageId(Uuid::from_u128(n))
}

/// Community availability list.
pub fn available_gear() -> Vec<Listing> {
    vec![
        listing(
            1,
            "Power Drill (Cordless)",
            "Bosch 18V cordless drill with two batteries and charger. Perfect for home projects.",
            Condition::Excellent,
            0.8,
            "Anytime",
            "Solomon G.",
            4.8,
        ),
        listing(
            2,
            "Gardening Tool Set",
            "Complete set with trowel, pruners, rake, and gloves. Great for urban gardening.",
            Condition::Good,
            1.2,
            "Weekends",
            "Kailash R.",
            4.5,
        ),
        listing(
            3,
            "Linear Motor Prototyping Kit",
            "Custom-built testing equipment for linear motor design with precision measuring tools.",
            Condition::Fair,
            1.5,
            "Mon-Fri after 6pm",
            "Solomon G.",
            4.9,
        ),
        listing(
            4,
            "Automotive Diagnostic Scanner",
            "Professional OBD2 scanner that can diagnose most modern vehicles. Includes laptop with software.",
            Condition::Excellent,
            2.3,
            "Weekends",
            "Meera P.",
            4.7,
        ),
        listing(
            5,
            "Industrial Sewing Machine",
            "Heavy duty sewing machine perfect for leatherwork, canvas, and other thick materials.",
            Condition::Good,
            3.1,
            "Evenings & Weekends",
            "Rafael S.",
            4.9,
        ),
        listing(
            6,
            "3D Printer (Prusa i3 MK3S)",
            "Well-maintained 3D printer with various filaments available. Can help with setup for first-timers.",
            Condition::Excellent,
            1.8,
            "Anytime with notice",
            "Amina K.",
            5.0,
        ),
    ]
}

/// The user's own inventory.
pub fn my_gear() -> Vec<GearItem> {
    vec![
        owned(
            101,
            "Flow Toy Repair Kit",
            "Professional tools for repairing LED flow toys including soldering station, tapes, and circuit testers.",
            Condition::Excellent,
            Privacy::Public,
            None,
        ),
        owned(
            102,
            "Hoop Making Tools",
            "Set of specialized tools for making and repairing flow hoops. Includes tape, connectors, and sizing tools.",
            Condition::Good,
            Privacy::FriendsOnly,
            Some("Kailash R."),
        ),
        owned(
            103,
            "Soldering Station (Professional)",
            "Temperature-controlled soldering station with multiple tips, fume extractor, and magnifying glass mount.",
            Condition::Excellent,
            Privacy::Public,
            None,
        ),
    ]
}

/// The message inbox: one pending borrow request, one unread note, one read.
pub fn messages() -> Vec<Message> {
    vec![
        message(
            201,
            "Solomon G.",
            "Request to borrow your Flow Toy Repair Kit",
            "Hi Amit! I'm working on some new LED patterns for my props and need to fix some \
             wiring issues. Your repair kit looks perfect for what I need. I'd take good care \
             of it and share any cool patterns I develop!",
            "Today, 10:23 AM",
            false,
            Some(RequestDetails {
                item_id: item_id(101),
                item_name: "Flow Toy Repair Kit".to_string(),
                start_date: date(2025, 3, 22),
                end_date: date(2025, 3, 24),
                status: RequestStatus::Pending,
            }),
        ),
        message(
            202,
            "Kailash R.",
            "Thanks for the hoop tools!",
            "Just wanted to say thanks for lending me your hoop making tools! I was able to \
             fix my broken hoop and even make a new one for a beginner workshop this weekend. \
             Will return them tomorrow as promised!",
            "Yesterday, 4:15 PM",
            false,
            None,
        ),
        message(
            203,
            "Meera P.",
            "Community tool repair workshop?",
            "Hey there! I noticed you have several repair kits in your inventory. I'm \
             organizing a community repair cafe next month and wondered if you'd be interested \
             in hosting a station to help people fix their flow toys? Let me know if you're \
             interested!",
            "2 days ago",
            true,
            None,
        ),
    ]
}

/// Canned neighbourhoods for the location autocomplete.
pub const LOCATION_SUGGESTIONS: &[&str] = &[
    "Indiranagar, Bengaluru",
    "Koramangala, Bengaluru",
    "HSR Layout, Bengaluru",
    "Jayanagar, Bengaluru",
    "JP Nagar, Bengaluru",
    "Whitefield, Bengaluru",
    "BTM Layout, Bengaluru",
    "Malleshwaram, Bengaluru",
    "Electronic City, Bengaluru",
    "Richmond Town, Bengaluru",
];

#[allow(clippy::too_many_arguments)]
fn listing(
    n: u128,
    name: &str,
    description: &str,
    condition: Condition,
    distance_km: f64,
    availability: &str,
    owner: &str,
    rating: f64,
) -> Listing {
    Listing {
        id: item_id(n),
        name: name.to_string(),
        description: description.to_string(),
        image: placeholder::tool_image(name),
        condition,
        distance_km,
        availability_text: availability.to_string(),
        owner_name: owner.to_string(),
        owner_avatar: placeholder::avatar_image(owner),
        owner_rating: rating,
    }
}

fn owned(
    n: u128,
    name: &str,
    description: &str,
    condition: Condition,
    privacy: Privacy,
    borrower: Option<&str>,
) -> GearItem {
    GearItem {
        id: item_id(n),
        name: name.to_string(),
        description: description.to_string(),
        image: placeholder::tool_image(name),
        condition,
        privacy,
        borrower: borrower.map(UserRef::new),
    }
}

fn message(
    n: u128,
    sender: &str,
    subject: &str,
    content: &str,
    date: &str,
    is_read: bool,
    request: Option<RequestDetails>,
) -> Message {
    Message {
        id: message_id(n),
        sender: UserRef::new(sender),
        sender_avatar: placeholder::avatar_image(sender),
        subject: subject.to_string(),
        content: content.to_string(),
        date: date.to_string(),
        is_read,
        request,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date")
}

//! Pure projection of the availability list into the visible subset.
//!
//! Re-evaluated on every read; no caching, no side effects, collection
//! order preserved.

use crate::models::Listing;

/// Parse the radius text the user typed.  Anything unparseable means "no
/// distance ceiling", matching how the reference UI behaves when the field
/// holds junk.
pub fn parse_radius(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::INFINITY)
}

/// A listing is visible iff the query is empty or matches name, description
/// or owner name case-insensitively, and its distance is within the radius.
pub fn filter_listings<'a>(listings: &'a [Listing], query: &str, radius_km: f64) -> Vec<&'a Listing> {
    let needle = query.trim().to_lowercase();
    listings
        .iter()
        .filter(|l| matches_query(l, &needle) && l.distance_km <= radius_km)
        .collect()
}

fn matches_query(listing: &Listing, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    listing.name.to_lowercase().contains(needle)
        || listing.description.to_lowercase().contains(needle)
        || listing.owner_name.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gearshare_shared::{Condition, ItemId};
    use uuid::Uuid;

    fn listing(n: u128, name: &str, owner: &str, distance_km: f64) -> Listing {
        Listing {
            id: ItemId(Uuid::from_u128(n)),
            name: name.to_string(),
            description: format!("{name} in good shape"),
            image: String::new(),
            condition: Condition::Good,
            distance_km,
            availability_text: "Weekends".to_string(),
            owner_name: owner.to_string(),
            owner_avatar: String::new(),
            owner_rating: 4.5,
        }
    }

    fn fixture() -> Vec<Listing> {
        vec![
            listing(1, "Power Drill", "Solomon G.", 0.8),
            listing(2, "Gardening Tool Set", "Kailash R.", 1.2),
            listing(3, "Prototyping Kit", "Solomon G.", 1.5),
        ]
    }

    #[test]
    fn test_radius_one_keeps_only_nearest() {
        let listings = fixture();
        let visible = filter_listings(&listings, "", parse_radius("1"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Power Drill");
    }

    #[test]
    fn test_query_matches_name_case_insensitive() {
        let listings = fixture();
        let visible = filter_listings(&listings, "gardening", f64::INFINITY);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Gardening Tool Set");
    }

    #[test]
    fn test_query_matches_owner_name() {
        let listings = fixture();
        let visible = filter_listings(&listings, "solomon", f64::INFINITY);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_projection_is_pure() {
        let listings = fixture();
        let first = filter_listings(&listings, "kit", 2.0);
        let second = filter_listings(&listings, "kit", 2.0);
        assert_eq!(first, second);
        // Order preserved from the source collection.
        assert!(first.windows(2).all(|w| w[0].id != w[1].id));
    }

    #[test]
    fn test_unparseable_radius_means_unbounded() {
        let listings = fixture();
        assert_eq!(parse_radius(""), f64::INFINITY);
        assert_eq!(parse_radius("5km"), f64::INFINITY);
        let visible = filter_listings(&listings, "", parse_radius(""));
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_boundary_distance_is_inclusive() {
        let listings = fixture();
        let visible = filter_listings(&listings, "", 1.2);
        assert_eq!(visible.len(), 2);
    }
}

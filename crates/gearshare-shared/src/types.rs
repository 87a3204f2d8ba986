use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MessageId(pub Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to another community member.  The backend contract only
/// exposes display names, so the name doubles as the identity key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UserRef(pub String);

impl UserRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Physical condition of a listed tool.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Condition {
    Excellent,
    Good,
    Fair,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        };
        write!(f, "{s}")
    }
}

/// Who may see an item in the community availability list.
///
/// `next` advances through the fixed cycle
/// Public -> FriendsOnly -> Private -> Public.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Privacy {
    Public,
    FriendsOnly,
    Private,
}

impl Privacy {
    pub fn next(self) -> Self {
        match self {
            Privacy::Public => Privacy::FriendsOnly,
            Privacy::FriendsOnly => Privacy::Private,
            Privacy::Private => Privacy::Public,
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, Privacy::Public)
    }
}

impl std::fmt::Display for Privacy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Privacy::Public => "Public",
            Privacy::FriendsOnly => "Friends Only",
            Privacy::Private => "Private",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privacy_cycle_of_three() {
        for start in [Privacy::Public, Privacy::FriendsOnly, Privacy::Private] {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn test_privacy_cycle_order() {
        assert_eq!(Privacy::Public.next(), Privacy::FriendsOnly);
        assert_eq!(Privacy::FriendsOnly.next(), Privacy::Private);
        assert_eq!(Privacy::Private.next(), Privacy::Public);
    }

    #[test]
    fn test_privacy_display() {
        assert_eq!(Privacy::FriendsOnly.to_string(), "Friends Only");
    }
}

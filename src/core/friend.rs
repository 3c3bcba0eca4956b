//! # Friends
//!
//! A `Friend` is the only entity that outlives a single keystroke. Everything
//! except `balance` is fixed at creation.
//!
//! ```text
//! Friend
//! ├── id: FriendId      // unique, never reused
//! ├── name: String      // display name
//! ├── image: String     // avatar URL (never fetched)
//! └── balance: f64      // < 0: you owe them, > 0: they owe you
//! ```

use std::fmt;

/// Opaque unique identifier of a friend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FriendId(String);

impl FriendId {
    /// Generate a fresh UUID v4 identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FriendId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    pub balance: f64,
}

impl Friend {
    /// Build a brand-new friend with a generated id and a settled balance.
    ///
    /// The id is appended to the image URL as a query suffix so that two
    /// friends sharing the placeholder avatar still get distinct URLs.
    pub fn create(name: impl Into<String>, image_url: &str) -> Self {
        let id = FriendId::generate();
        let image = format!("{image_url}?={id}");
        Self {
            id,
            name: name.into(),
            image,
            balance: 0.0,
        }
    }

    pub fn standing(&self) -> Standing {
        Standing::of(self.balance)
    }

    /// Human-readable balance line, e.g. "You owe Clark $7".
    pub fn status_text(&self, currency: &str) -> String {
        match self.standing() {
            Standing::YouOwe(amount) => {
                format!("You owe {} {}{}", self.name, currency, amount)
            }
            Standing::OwesYou(amount) => {
                format!("{} owes you {}{}", self.name, currency, amount)
            }
            Standing::Even => format!("You and {} are even", self.name),
        }
    }
}

/// Who owes whom, with the absolute amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Standing {
    YouOwe(f64),
    OwesYou(f64),
    Even,
}

impl Standing {
    pub fn of(balance: f64) -> Self {
        if balance < 0.0 {
            Standing::YouOwe(balance.abs())
        } else if balance > 0.0 {
            Standing::OwesYou(balance)
        } else {
            Standing::Even
        }
    }
}

/// The friends a fresh session starts with.
pub fn seed_friends() -> Vec<Friend> {
    [("118836", "Clark", -7.0), ("933372", "Sarah", 20.0), ("499476", "Anthony", 0.0)]
        .into_iter()
        .map(|(id, name, balance)| Friend {
            id: FriendId::from(id),
            name: name.to_string(),
            image: format!("https://i.pravatar.cc/48?u={id}"),
            balance,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(name: &str, balance: f64) -> Friend {
        Friend {
            id: FriendId::from("1"),
            name: name.to_string(),
            image: String::new(),
            balance,
        }
    }

    #[test]
    fn test_status_text_you_owe() {
        assert_eq!(friend("Clark", -7.0).status_text("$"), "You owe Clark $7");
    }

    #[test]
    fn test_status_text_owes_you() {
        assert_eq!(friend("Sarah", 20.0).status_text("$"), "Sarah owes you $20");
    }

    #[test]
    fn test_status_text_even() {
        assert_eq!(
            friend("Anthony", 0.0).status_text("$"),
            "You and Anthony are even"
        );
    }

    #[test]
    fn test_status_text_fractional_and_currency() {
        assert_eq!(friend("Ana", -12.5).status_text("€"), "You owe Ana €12.5");
    }

    #[test]
    fn test_negative_zero_is_even() {
        assert_eq!(Standing::of(-0.0), Standing::Even);
    }

    #[test]
    fn test_create_starts_settled_with_id_suffix() {
        let f = Friend::create("Jonas", "https://i.pravatar.cc/48");
        assert_eq!(f.balance, 0.0);
        assert_eq!(f.name, "Jonas");
        assert_eq!(f.image, format!("https://i.pravatar.cc/48?={}", f.id));
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = Friend::create("A", "x");
        let b = Friend::create("A", "x");
        assert_ne!(a.id, b.id);
        assert_ne!(a.image, b.image);
    }

    #[test]
    fn test_seed_friends() {
        let seeds = seed_friends();
        let names: Vec<&str> = seeds.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Clark", "Sarah", "Anthony"]);
        assert_eq!(seeds[0].balance, -7.0);
        assert_eq!(seeds[1].image, "https://i.pravatar.cc/48?u=933372");
    }
}

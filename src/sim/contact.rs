//! Physics contact categories and events
//!
//! The physics collaborator tags every body with a category bitmask and
//! reports begin-contact pairs. This core only ever assigns single-category
//! bodies, but masks stay OR-combinable so multi-role bodies remain possible.

use serde::{Deserialize, Serialize};

/// A physics body's role in contact classification. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum ContactCategory {
    Player = 1,
    Ground = 1 << 1,
    Obstacle = 1 << 2,
}

impl ContactCategory {
    #[inline]
    pub fn bits(self) -> u32 {
        self as u32
    }
}

/// The set of categories carried by one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryMask(u32);

impl CategoryMask {
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub fn contains(self, category: ContactCategory) -> bool {
        self.0 & category.bits() != 0
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }
}

impl From<ContactCategory> for CategoryMask {
    fn from(category: ContactCategory) -> Self {
        Self(category.bits())
    }
}

impl std::ops::BitOr for CategoryMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOr<ContactCategory> for CategoryMask {
    type Output = Self;

    fn bitor(self, rhs: ContactCategory) -> Self {
        Self(self.0 | rhs.bits())
    }
}

/// A begin-contact report from the physics collaborator. Consumed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub a: CategoryMask,
    pub b: CategoryMask,
}

impl ContactEvent {
    pub fn new(a: impl Into<CategoryMask>, b: impl Into<CategoryMask>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// True if either body carries the given category. Order-independent.
    #[inline]
    pub fn involves(&self, category: ContactCategory) -> bool {
        self.a.contains(category) || self.b.contains(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_bit_values() {
        assert_eq!(ContactCategory::Player.bits(), 1);
        assert_eq!(ContactCategory::Ground.bits(), 2);
        assert_eq!(ContactCategory::Obstacle.bits(), 4);
    }

    #[test]
    fn test_mask_combinability() {
        let mask = CategoryMask::from(ContactCategory::Ground) | ContactCategory::Obstacle;
        assert!(mask.contains(ContactCategory::Ground));
        assert!(mask.contains(ContactCategory::Obstacle));
        assert!(!mask.contains(ContactCategory::Player));
        assert_eq!(mask.bits(), 6);
    }

    #[test]
    fn test_involves_is_order_independent() {
        let ab = ContactEvent::new(ContactCategory::Player, ContactCategory::Ground);
        let ba = ContactEvent::new(ContactCategory::Ground, ContactCategory::Player);
        assert!(ab.involves(ContactCategory::Ground));
        assert!(ba.involves(ContactCategory::Ground));
        assert!(!ab.involves(ContactCategory::Obstacle));
    }

    #[test]
    fn test_empty_mask() {
        let event = ContactEvent::new(CategoryMask::EMPTY, CategoryMask::EMPTY);
        assert!(!event.involves(ContactCategory::Player));
        assert!(!event.involves(ContactCategory::Ground));
        assert!(!event.involves(ContactCategory::Obstacle));
    }
}

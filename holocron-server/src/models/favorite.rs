//! Favorite target variant
//!
//! The favorites table stores the target as two nullable foreign keys with a
//! CHECK that exactly one is set. This type is the in-process form of that
//! constraint; the column pair only exists at the repository boundary.

/// Target of a favorite: exactly one of a person or a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Person(i64),
    Planet(i64),
}

impl FavoriteTarget {
    /// The referenced row id.
    pub fn id(&self) -> i64 {
        match self {
            Self::Person(id) | Self::Planet(id) => *id,
        }
    }

    /// Resource name for error messages ("person" or "planet").
    pub fn resource(&self) -> &'static str {
        match self {
            Self::Person(_) => "person",
            Self::Planet(_) => "planet",
        }
    }

    /// Value for the `people_id` column.
    pub fn people_id(&self) -> Option<i64> {
        match self {
            Self::Person(id) => Some(*id),
            Self::Planet(_) => None,
        }
    }

    /// Value for the `planet_id` column.
    pub fn planet_id(&self) -> Option<i64> {
        match self {
            Self::Person(_) => None,
            Self::Planet(id) => Some(*id),
        }
    }

    /// Reassemble from the stored column pair.
    ///
    /// Returns None unless exactly one side is set. The CHECK constraint
    /// keeps such rows out of the table, but rows written before the
    /// constraint existed must not panic here.
    pub fn from_columns(people_id: Option<i64>, planet_id: Option<i64>) -> Option<Self> {
        match (people_id, planet_id) {
            (Some(id), None) => Some(Self::Person(id)),
            (None, Some(id)) => Some(Self::Planet(id)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_sets_only_people_column() {
        let target = FavoriteTarget::Person(7);
        assert_eq!(target.people_id(), Some(7));
        assert_eq!(target.planet_id(), None);
        assert_eq!(target.id(), 7);
        assert_eq!(target.resource(), "person");
    }

    #[test]
    fn planet_sets_only_planet_column() {
        let target = FavoriteTarget::Planet(3);
        assert_eq!(target.people_id(), None);
        assert_eq!(target.planet_id(), Some(3));
        assert_eq!(target.id(), 3);
        assert_eq!(target.resource(), "planet");
    }

    #[test]
    fn columns_round_trip() {
        for target in [FavoriteTarget::Person(1), FavoriteTarget::Planet(42)] {
            let rebuilt = FavoriteTarget::from_columns(target.people_id(), target.planet_id());
            assert_eq!(rebuilt, Some(target));
        }
    }

    #[test]
    fn rejects_neither_side_set() {
        assert_eq!(FavoriteTarget::from_columns(None, None), None);
    }

    #[test]
    fn rejects_both_sides_set() {
        assert_eq!(FavoriteTarget::from_columns(Some(1), Some(2)), None);
    }
}

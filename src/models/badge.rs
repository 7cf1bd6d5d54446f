// src/models/badge.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub icon: String,
    pub description: String,
}

/// The "My Badges" screen: what the learner holds and what is still locked.
#[derive(Debug, Serialize)]
pub struct BadgeShelf {
    pub earned: Vec<Badge>,
    pub locked: Vec<Badge>,
    pub legendary_count: usize,
    pub epic_count: usize,
}

impl BadgeShelf {
    /// Splits the catalog by the user's earned badge ids, keeping catalog order.
    pub fn split(catalog: &[Badge], earned_ids: &[String]) -> Self {
        let (earned, locked): (Vec<Badge>, Vec<Badge>) = catalog
            .iter()
            .cloned()
            .partition(|b| earned_ids.contains(&b.id));

        let count = |rarity: Rarity| earned.iter().filter(|b| b.rarity == rarity).count();
        let legendary_count = count(Rarity::Legendary);
        let epic_count = count(Rarity::Epic);

        Self {
            earned,
            locked,
            legendary_count,
            epic_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(id: &str, rarity: Rarity) -> Badge {
        Badge {
            id: id.to_string(),
            name: id.to_string(),
            rarity,
            icon: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn split_counts_only_earned() {
        let catalog = vec![
            badge("a", Rarity::Epic),
            badge("b", Rarity::Legendary),
            badge("c", Rarity::Epic),
        ];
        let shelf = BadgeShelf::split(&catalog, &["a".to_string()]);
        assert_eq!(shelf.earned.len(), 1);
        assert_eq!(shelf.locked.len(), 2);
        assert_eq!(shelf.epic_count, 1);
        assert_eq!(shelf.legendary_count, 0);
    }
}

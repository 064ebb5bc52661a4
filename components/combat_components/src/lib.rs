use balance_settings::MobCategory;
use bevy::prelude::*;

/// Marks an entity as a player. Only player defenders get their incoming
/// damage rescaled.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct Player;

#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

/// Name of the world an entity lives in. Balance values are resolved per
/// world; an entity without one falls back to the defaults layer.
#[derive(Component, Reflect, Default, Debug, Clone, PartialEq, Eq, Hash)]
#[reflect(Component, Default)]
pub struct WorldId(pub String);

/// Concrete kind of a spawned entity. Closed set owned by the entity
/// boundary; deliberately wider than [`MobCategory`] so that harmless
/// kinds exist without a multiplier binding.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[reflect(Component, Default)]
pub enum EntityKind {
    Bat,
    Blaze,
    CaveSpider,
    Chicken,
    Cow,
    Creeper,
    Enderman,
    Ghast,
    Giant,
    IronGolem,
    MagmaCube,
    Pig,
    PigZombie,
    Sheep,
    Silverfish,
    Skeleton,
    Slime,
    Spider,
    Squid,
    Villager,
    Wither,
    Wolf,
    #[default]
    Zombie,
}

impl EntityKind {
    /// Classifies this kind against the closed multiplier category set.
    /// `None` means no multiplier is bound to the kind.
    pub fn mob_category(self) -> Option<MobCategory> {
        match self {
            EntityKind::Blaze => Some(MobCategory::Blaze),
            EntityKind::CaveSpider => Some(MobCategory::CaveSpider),
            EntityKind::Creeper => Some(MobCategory::Creeper),
            EntityKind::Enderman => Some(MobCategory::Enderman),
            EntityKind::Ghast => Some(MobCategory::Ghast),
            EntityKind::Giant => Some(MobCategory::Giant),
            EntityKind::IronGolem => Some(MobCategory::IronGolem),
            EntityKind::MagmaCube => Some(MobCategory::MagmaCube),
            EntityKind::PigZombie => Some(MobCategory::PigZombie),
            EntityKind::Silverfish => Some(MobCategory::Silverfish),
            EntityKind::Skeleton => Some(MobCategory::Skeleton),
            EntityKind::Slime => Some(MobCategory::Slime),
            EntityKind::Spider => Some(MobCategory::Spider),
            EntityKind::Wither => Some(MobCategory::Wither),
            EntityKind::Zombie => Some(MobCategory::Zombie),
            EntityKind::Bat
            | EntityKind::Chicken
            | EntityKind::Cow
            | EntityKind::Pig
            | EntityKind::Sheep
            | EntityKind::Squid
            | EntityKind::Villager
            | EntityKind::Wolf => None,
        }
    }
}

/// Kind of a projectile in flight.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[reflect(Component, Default)]
pub enum ProjectileKind {
    #[default]
    Arrow,
    Egg,
    Snowball,
    SmallFireball,
    LargeFireball,
}

/// Explosion strength a projectile detonates with on impact.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct ExplosivePower(pub f32);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_classification_covers_every_category() {
        let kinds = [
            EntityKind::Bat,
            EntityKind::Blaze,
            EntityKind::CaveSpider,
            EntityKind::Chicken,
            EntityKind::Cow,
            EntityKind::Creeper,
            EntityKind::Enderman,
            EntityKind::Ghast,
            EntityKind::Giant,
            EntityKind::IronGolem,
            EntityKind::MagmaCube,
            EntityKind::Pig,
            EntityKind::PigZombie,
            EntityKind::Sheep,
            EntityKind::Silverfish,
            EntityKind::Skeleton,
            EntityKind::Slime,
            EntityKind::Spider,
            EntityKind::Squid,
            EntityKind::Villager,
            EntityKind::Wither,
            EntityKind::Wolf,
            EntityKind::Zombie,
        ];
        let categories: HashSet<_> = kinds.iter().filter_map(|k| k.mob_category()).collect();
        assert_eq!(categories.len(), MobCategory::ALL.len());
    }

    #[test]
    fn test_harmless_kinds_are_unrecognized() {
        assert_eq!(EntityKind::Villager.mob_category(), None);
        assert_eq!(EntityKind::Bat.mob_category(), None);
        assert_eq!(EntityKind::Wolf.mob_category(), None);
    }
}

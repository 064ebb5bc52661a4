use serde::{Deserialize, Serialize};

/// Value type of a [`Setting`]. Determines how a raw value from a balance
/// sheet is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Bool,
    Float,
}

/// A typed configuration value as it appears in a balance sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SettingValue {
    Bool(bool),
    Float(f64),
}

impl SettingValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            SettingValue::Bool(_) => ValueKind::Bool,
            SettingValue::Float(_) => ValueKind::Float,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(v) => Some(*v),
            SettingValue::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Float(v) => Some(*v),
            SettingValue::Bool(_) => None,
        }
    }
}

/// A named, typed, defaulted configuration entry.
///
/// All known settings are `const`-constructed below and collected in
/// [`SETTINGS`]; the default applies whenever a world's sheet does not
/// override the key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Setting {
    /// Key string as it appears in balance sheets.
    pub name: &'static str,
    pub kind: ValueKind,
    pub default: SettingValue,
}

const fn float_setting(name: &'static str, default: f64) -> Setting {
    Setting {
        name,
        kind: ValueKind::Float,
        default: SettingValue::Float(default),
    }
}

/// Gates per-adjustment debug logging.
pub const DEBUG: Setting = Setting {
    name: "debug",
    kind: ValueKind::Bool,
    default: SettingValue::Bool(false),
};

pub const DAMAGE_MULT_BLAZE: Setting = float_setting("damage-multiplier-blaze", 1.0);
pub const DAMAGE_MULT_CAVE_SPIDER: Setting = float_setting("damage-multiplier-cavespider", 1.0);
pub const DAMAGE_MULT_CREEPER: Setting = float_setting("damage-multiplier-creeper", 1.0);
pub const DAMAGE_MULT_ENDERMAN: Setting = float_setting("damage-multiplier-enderman", 1.0);
pub const DAMAGE_MULT_GHAST: Setting = float_setting("damage-multiplier-ghast", 1.0);
pub const DAMAGE_MULT_GIANT: Setting = float_setting("damage-multiplier-giantzombie", 1.0);
pub const DAMAGE_MULT_IRON_GOLEM: Setting = float_setting("damage-multiplier-irongolem", 1.0);
pub const DAMAGE_MULT_MAGMA_CUBE: Setting = float_setting("damage-multiplier-magmacube", 1.0);
pub const DAMAGE_MULT_PIG_ZOMBIE: Setting = float_setting("damage-multiplier-pigzombie", 1.0);
pub const DAMAGE_MULT_SILVERFISH: Setting = float_setting("damage-multiplier-silverfish", 1.0);
pub const DAMAGE_MULT_SKELETON: Setting = float_setting("damage-multiplier-skeleton", 1.0);
pub const DAMAGE_MULT_SLIME: Setting = float_setting("damage-multiplier-slime", 1.0);
pub const DAMAGE_MULT_SPIDER: Setting = float_setting("damage-multiplier-spider", 1.0);
pub const DAMAGE_MULT_WITHER: Setting = float_setting("damage-multiplier-wither", 1.0);
pub const DAMAGE_MULT_ZOMBIE: Setting = float_setting("damage-multiplier-zombie", 1.0);

/// Multiplier for fire damage with no attacking entity (standing in fire,
/// lava, burning).
pub const DAMAGE_MULT_FIRE: Setting = float_setting("damage-multiplier-fire", 1.0);

/// Replacement explosion power for large fireballs. 0.0 leaves the
/// projectile's own power untouched.
pub const EXPLOSION_POWER_GHAST: Setting = float_setting("explosion-power-ghast", 0.0);

/// Every known setting. Seeded into the config store at startup so each
/// world resolves every key even without a sheet entry.
pub const SETTINGS: &[Setting] = &[
    DEBUG,
    DAMAGE_MULT_BLAZE,
    DAMAGE_MULT_CAVE_SPIDER,
    DAMAGE_MULT_CREEPER,
    DAMAGE_MULT_ENDERMAN,
    DAMAGE_MULT_GHAST,
    DAMAGE_MULT_GIANT,
    DAMAGE_MULT_IRON_GOLEM,
    DAMAGE_MULT_MAGMA_CUBE,
    DAMAGE_MULT_PIG_ZOMBIE,
    DAMAGE_MULT_SILVERFISH,
    DAMAGE_MULT_SKELETON,
    DAMAGE_MULT_SLIME,
    DAMAGE_MULT_SPIDER,
    DAMAGE_MULT_WITHER,
    DAMAGE_MULT_ZOMBIE,
    DAMAGE_MULT_FIRE,
    EXPLOSION_POWER_GHAST,
];

/// Looks up a setting by its sheet key. `None` means the key is unknown
/// to the schema.
pub fn lookup(name: &str) -> Option<&'static Setting> {
    SETTINGS.iter().find(|s| s.name == name)
}

/// Closed set of attacker categories that carry a damage multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobCategory {
    Blaze,
    CaveSpider,
    Creeper,
    Enderman,
    Ghast,
    Giant,
    IronGolem,
    MagmaCube,
    PigZombie,
    Silverfish,
    Skeleton,
    Slime,
    Spider,
    Wither,
    Zombie,
}

impl MobCategory {
    pub const ALL: [MobCategory; 15] = [
        MobCategory::Blaze,
        MobCategory::CaveSpider,
        MobCategory::Creeper,
        MobCategory::Enderman,
        MobCategory::Ghast,
        MobCategory::Giant,
        MobCategory::IronGolem,
        MobCategory::MagmaCube,
        MobCategory::PigZombie,
        MobCategory::Silverfish,
        MobCategory::Skeleton,
        MobCategory::Slime,
        MobCategory::Spider,
        MobCategory::Wither,
        MobCategory::Zombie,
    ];
}

/// Binds each category to its multiplier setting. Total over
/// [`MobCategory`]; "unrecognized attacker" is handled before
/// classification reaches this point.
pub fn damage_setting(category: MobCategory) -> &'static Setting {
    match category {
        MobCategory::Blaze => &DAMAGE_MULT_BLAZE,
        MobCategory::CaveSpider => &DAMAGE_MULT_CAVE_SPIDER,
        MobCategory::Creeper => &DAMAGE_MULT_CREEPER,
        MobCategory::Enderman => &DAMAGE_MULT_ENDERMAN,
        MobCategory::Ghast => &DAMAGE_MULT_GHAST,
        MobCategory::Giant => &DAMAGE_MULT_GIANT,
        MobCategory::IronGolem => &DAMAGE_MULT_IRON_GOLEM,
        MobCategory::MagmaCube => &DAMAGE_MULT_MAGMA_CUBE,
        MobCategory::PigZombie => &DAMAGE_MULT_PIG_ZOMBIE,
        MobCategory::Silverfish => &DAMAGE_MULT_SILVERFISH,
        MobCategory::Skeleton => &DAMAGE_MULT_SKELETON,
        MobCategory::Slime => &DAMAGE_MULT_SLIME,
        MobCategory::Spider => &DAMAGE_MULT_SPIDER,
        MobCategory::Wither => &DAMAGE_MULT_WITHER,
        MobCategory::Zombie => &DAMAGE_MULT_ZOMBIE,
    }
}

use {
    balance_settings::{Setting, SettingValue, lookup},
    bevy::prelude::*,
    std::collections::HashMap,
};

/// In-memory balance value store, resolved per world.
///
/// Lookup order: world override (from that world's sheet), then the
/// seeded defaults layer, then the [`Setting`]'s own default. Handlers
/// re-read on every event, so sheet changes take effect immediately.
#[derive(Resource, Default, Debug)]
pub struct BalanceConfig {
    defaults: HashMap<&'static str, SettingValue>,
    worlds: HashMap<String, HashMap<&'static str, SettingValue>>,
}

impl BalanceConfig {
    /// Seeds the defaults layer with every setting that is not already
    /// present. Called once at startup.
    pub fn register_defaults(&mut self, settings: &[Setting]) {
        for setting in settings {
            self.defaults.entry(setting.name).or_insert(setting.default);
        }
    }

    /// Stores a single per-world value.
    pub fn set_value(&mut self, world: &str, setting: &Setting, value: SettingValue) {
        self.worlds
            .entry(world.to_string())
            .or_default()
            .insert(setting.name, value);
    }

    /// Folds a world's sheet into the store. Keys unknown to the schema
    /// and values whose kind disagrees with the schema are skipped with a
    /// warning.
    pub fn apply_sheet(&mut self, world: &str, values: &HashMap<String, SettingValue>) {
        for (name, value) in values {
            let Some(setting) = lookup(name) else {
                warn!("balance sheet for world '{world}' has unknown key '{name}', skipping");
                continue;
            };
            if value.kind() != setting.kind {
                warn!(
                    "balance sheet for world '{world}' has {:?} value for {:?} key '{name}', skipping",
                    value.kind(),
                    setting.kind
                );
                continue;
            }
            self.set_value(world, setting, *value);
        }
    }

    pub fn get_f64(&self, world: Option<&str>, setting: &Setting) -> f64 {
        self.resolve(world, setting)
            .as_f64()
            .or_else(|| setting.default.as_f64())
            .unwrap_or(1.0)
    }

    pub fn get_bool(&self, world: Option<&str>, setting: &Setting) -> bool {
        self.resolve(world, setting)
            .as_bool()
            .or_else(|| setting.default.as_bool())
            .unwrap_or(false)
    }

    fn resolve(&self, world: Option<&str>, setting: &Setting) -> SettingValue {
        if let Some(world) = world
            && let Some(values) = self.worlds.get(world)
            && let Some(value) = values.get(setting.name)
        {
            return *value;
        }
        self.defaults
            .get(setting.name)
            .copied()
            .unwrap_or(setting.default)
    }
}

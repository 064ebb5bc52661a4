//! Balance sheet asset definitions.
//!
//! Each world gets one `.balance.ron` file naming the world and the
//! setting values it overrides; everything else resolves through the
//! schema defaults.

use {
    balance_settings::SettingValue,
    bevy::{asset::LoadedFolder, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::Deserialize,
    std::collections::HashMap,
};

pub struct BalanceAssetsPlugin;

impl Plugin for BalanceAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<WorldBalanceSheet>::new(&["balance.ron"]));
    }
}

/// Per-world overrides loaded from a `.balance.ron` asset file.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct WorldBalanceSheet {
    /// World the values apply to.
    pub world: String,
    /// Setting key to value, keyed as in the schema.
    #[serde(default)]
    pub values: HashMap<String, SettingValue>,
}

/// Keeps the loaded balance folder alive for the lifetime of the app.
#[derive(Debug, Resource)]
pub struct BalanceSheetFolder(pub Handle<LoadedFolder>);

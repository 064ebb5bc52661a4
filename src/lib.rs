//! Per-world combat balance.
//!
//! This crate provides:
//! - Damage rescaling for player defenders, by attacker category or by
//!   fire cause when no attacker exists
//! - Configurable explosion power for large fireballs
//! - A per-world value store seeded from the setting schema and fed by
//!   `.balance.ron` sheet assets

mod systems;


use {
    balance_assets::BalanceAssetsPlugin,
    balance_resources::BalanceConfig,
    bevy::prelude::*,
    combat_components::{EntityKind, ExplosivePower, Health, Player, ProjectileKind, WorldId},
    combat_events::CombatEventsPlugin,
};

pub struct CombatBalancePlugin;

impl Plugin for CombatBalancePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BalanceAssetsPlugin, CombatEventsPlugin))
            .init_resource::<BalanceConfig>()
            .register_type::<Player>()
            .register_type::<Health>()
            .register_type::<WorldId>()
            .register_type::<EntityKind>()
            .register_type::<ProjectileKind>()
            .register_type::<ExplosivePower>()
            .add_systems(
                Startup,
                (systems::register_defaults, systems::load_balance_sheets),
            )
            .add_systems(Update, systems::sync_balance_sheets)
            .add_observer(systems::on_damage_dealt)
            .add_observer(systems::on_projectile_hit);
    }
}

use {
    balance_assets::{BalanceSheetFolder, WorldBalanceSheet},
    balance_resources::BalanceConfig,
    balance_settings::{DAMAGE_MULT_FIRE, DEBUG, EXPLOSION_POWER_GHAST, SETTINGS, damage_setting},
    bevy::prelude::*,
    combat_components::{EntityKind, ExplosivePower, Health, Player, ProjectileKind, WorldId},
    combat_events::{DamageDealt, ProjectileHit},
};

/// Seeds the store with every schema default so all keys resolve from the
/// first event on.
pub(crate) fn register_defaults(mut config: ResMut<BalanceConfig>) {
    config.register_defaults(SETTINGS);
    info!("registered {} balance settings", SETTINGS.len());
}

pub(crate) fn load_balance_sheets(asset_server: Res<AssetServer>, mut commands: Commands) {
    commands.insert_resource(BalanceSheetFolder(asset_server.load_folder("balance")));
}

/// Folds loaded sheets into the store. Re-runs whenever the sheet assets
/// change, so edited sheets apply without a restart.
pub(crate) fn sync_balance_sheets(
    sheets: Res<Assets<WorldBalanceSheet>>,
    mut config: ResMut<BalanceConfig>,
) {
    if !sheets.is_changed() {
        return;
    }
    for (_, sheet) in sheets.iter() {
        config.apply_sheet(&sheet.world, &sheet.values);
        debug!("applied balance sheet for world '{}'", sheet.world);
    }
}

/// Observer: rescale damage dealt to a player defender, then apply the
/// result to the defender's health.
///
/// With an attacker present the multiplier comes from the attacker's
/// category and the attacker's world. Without one, fire-caused damage
/// uses the fire multiplier for the defender's world. An attacker kind
/// outside the category set leaves the amount unscaled and logs a
/// warning.
pub(crate) fn on_damage_dealt(
    trigger: On<DamageDealt>,
    config: Res<BalanceConfig>,
    players: Query<(), With<Player>>,
    kinds: Query<&EntityKind>,
    worlds: Query<&WorldId>,
    mut healths: Query<&mut Health>,
) {
    let event = trigger.event();
    let mut amount = event.amount;

    if players.get(event.defender).is_ok() {
        if let Some(attacker) = event.attacker {
            let world = worlds.get(attacker).ok().map(|w| w.0.as_str());
            match kinds.get(attacker) {
                Ok(kind) => match kind.mob_category() {
                    Some(category) => {
                        let setting = damage_setting(category);
                        amount *= config.get_f64(world, setting) as f32;
                        if config.get_bool(world, &DEBUG) {
                            debug!(
                                "{:?} attack on {:?} rescaled {} -> {} ('{}')",
                                kind, event.defender, event.amount, amount, setting.name
                            );
                        }
                    }
                    None => warn!(
                        "attacker kind {:?} has no damage multiplier, leaving damage at {}",
                        kind, amount
                    ),
                },
                Err(_) => warn!(
                    "attacker {:?} has no entity kind, leaving damage at {}",
                    attacker, amount
                ),
            }
        } else if event.cause.is_fire() {
            let world = worlds.get(event.defender).ok().map(|w| w.0.as_str());
            amount *= config.get_f64(world, &DAMAGE_MULT_FIRE) as f32;
        }
    }

    if let Ok(mut health) = healths.get_mut(event.defender) {
        health.current -= amount;
    }
}

/// Observer: give large fireballs the configured explosion power. A
/// configured power of 0.0 keeps the projectile's own power.
pub(crate) fn on_projectile_hit(
    trigger: On<ProjectileHit>,
    config: Res<BalanceConfig>,
    worlds: Query<&WorldId>,
    mut projectiles: Query<(&ProjectileKind, &mut ExplosivePower)>,
) {
    let event = trigger.event();
    let Ok((kind, mut power)) = projectiles.get_mut(event.projectile) else {
        return;
    };
    if *kind != ProjectileKind::LargeFireball {
        return;
    }

    let world = worlds.get(event.projectile).ok().map(|w| w.0.as_str());
    let configured = config.get_f64(world, &EXPLOSION_POWER_GHAST);
    if configured > 0.0 {
        power.0 = configured as f32;
    }
}

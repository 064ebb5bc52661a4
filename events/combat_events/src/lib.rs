use bevy::prelude::*;

pub struct CombatEventsPlugin;

impl Plugin for CombatEventsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<DamageCause>()
            .register_type::<DamageDealt>()
            .register_type::<ProjectileHit>();
    }
}

/// What produced a damage event. Closed set; [`DamageCause::is_fire`]
/// groups the causes the fire multiplier applies to.
#[derive(Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageCause {
    #[default]
    Attack,
    Fire,
    FireTick,
    Lava,
    Explosion,
    Fall,
    Drowning,
    Suffocation,
}

impl DamageCause {
    pub fn is_fire(self) -> bool {
        matches!(
            self,
            DamageCause::Fire | DamageCause::FireTick | DamageCause::Lava
        )
    }
}

/// Triggered when an entity takes damage, before the amount reaches its
/// health. The balance observer rescales `amount` and applies the result.
#[derive(Event, Reflect, Debug, Clone)]
#[reflect(Default)]
pub struct DamageDealt {
    pub defender: Entity,
    /// Attacking entity, absent for environmental damage.
    pub attacker: Option<Entity>,
    pub cause: DamageCause,
    pub amount: f32,
}

impl Default for DamageDealt {
    fn default() -> Self {
        Self {
            defender: Entity::PLACEHOLDER,
            attacker: None,
            cause: DamageCause::default(),
            amount: 0.0,
        }
    }
}

/// Triggered when a projectile strikes something, before impact effects
/// are resolved.
#[derive(Event, Reflect, Debug, Clone)]
#[reflect(Default)]
pub struct ProjectileHit {
    pub projectile: Entity,
}

impl Default for ProjectileHit {
    fn default() -> Self {
        Self {
            projectile: Entity::PLACEHOLDER,
        }
    }
}

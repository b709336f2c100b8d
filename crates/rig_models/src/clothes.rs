use bevy::prelude::*;

/// A clothing attachment that copies the visibility of the entity wearing it.
///
/// The copy happens whenever the component is inserted or `wearer` gets reassigned, the
/// clothes do not keep following the wearer afterwards. The wearer's own `Visibility` is
/// copied as is, so an explicitly `Visible` wearer gives explicitly `Visible` clothes.
/// Any entity with a `Visibility` can be a wearer, including other clothes.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component)]
#[require(Visibility)]
pub struct Clothes {
    pub wearer: Option<Entity>,
}

impl Clothes {
    pub fn worn_by(wearer: Entity) -> Self {
        Self { wearer: Some(wearer) }
    }
}

use bevy::prelude::*;
use rig_models::clothes::Clothes;

/// Copies the wearer's own visibility onto clothes whose wearer was just assigned.
///
/// Wearer visibilities are read before any clothes are written, so clothes worn by other
/// clothes see the wearer's state from before this run.
pub fn mirror_clothes_visibility(
    changed: Query<(Entity, &Clothes), Changed<Clothes>>,
    mut visibilities: ParamSet<(Query<&Visibility>, Query<&mut Visibility>)>,
) {
    let mirrored: Vec<(Entity, Visibility)> = {
        let wearers = visibilities.p0();
        changed
            .iter()
            .filter_map(|(entity, item)| {
                let wearer = item.wearer?;
                match wearers.get(wearer) {
                    Ok(visibility) => Some((entity, *visibility)),
                    Err(_) => {
                        warn!("Clothes {entity}: wearer {wearer} has no visibility, leaving it as is");
                        None
                    }
                }
            })
            .collect()
    };

    let mut targets = visibilities.p1();
    for (entity, visibility) in mirrored {
        if let Ok(mut current) = targets.get_mut(entity) {
            current.set_if_neq(visibility);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_systems(Update, mirror_clothes_visibility);
        app
    }

    #[test]
    fn clothes_copy_wearer_on_assignment() {
        let mut app = test_app();
        let wearer = app.world_mut().spawn(Visibility::Hidden).id();
        let hat = app.world_mut().spawn(Clothes::worn_by(wearer)).id();
        app.update();
        assert_eq!(app.world().get::<Visibility>(hat), Some(&Visibility::Hidden));

        // The wearer showing up again is not followed until the wearer is reassigned.
        *app.world_mut().get_mut::<Visibility>(wearer).unwrap() = Visibility::Inherited;
        app.update();
        assert_eq!(app.world().get::<Visibility>(hat), Some(&Visibility::Hidden));

        app.world_mut().get_mut::<Clothes>(hat).unwrap().wearer = Some(wearer);
        app.update();
        assert_eq!(app.world().get::<Visibility>(hat), Some(&Visibility::Inherited));
    }

    #[test]
    fn explicitly_visible_wearer_stays_explicit() {
        let mut app = test_app();
        let wearer = app.world_mut().spawn(Visibility::Visible).id();
        let hat = app.world_mut().spawn((Clothes::worn_by(wearer), Visibility::Hidden)).id();
        app.update();
        assert_eq!(app.world().get::<Visibility>(hat), Some(&Visibility::Visible));
    }

    #[test]
    fn clothes_can_be_worn_by_clothes() {
        let mut app = test_app();
        let hat = app.world_mut().spawn((Clothes::default(), Visibility::Hidden)).id();
        let badge = app.world_mut().spawn((Clothes::worn_by(hat), Visibility::Visible)).id();
        app.update();
        assert_eq!(app.world().get::<Visibility>(badge), Some(&Visibility::Hidden));
        assert_eq!(app.world().get::<Visibility>(hat), Some(&Visibility::Hidden));
    }

    #[test]
    fn clothes_without_wearer_are_untouched() {
        let mut app = test_app();
        let hat = app.world_mut().spawn((Clothes::default(), Visibility::Hidden)).id();
        app.update();
        assert_eq!(app.world().get::<Visibility>(hat), Some(&Visibility::Hidden));
    }

    #[test]
    fn missing_wearer_is_ignored() {
        let mut app = test_app();
        let wearer = app.world_mut().spawn(Visibility::Hidden).id();
        app.world_mut().despawn(wearer);
        let hat = app.world_mut().spawn((Clothes::worn_by(wearer), Visibility::Visible)).id();
        app.update();
        assert_eq!(app.world().get::<Visibility>(hat), Some(&Visibility::Visible));
    }
}

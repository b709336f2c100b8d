use std::collections::{HashMap, HashSet};
use bevy::prelude::*;
use rig_models::camera::{OrbitCamera, OrbitCameraSettings};
use rig_models::clothes::Clothes;
use rig_models::config::GlobalConfig;
use rig_models::error::SceneError;
use rig_models::scene::{
    EntityRole, OrbitTarget, SceneDescription, SceneIndex, SceneLight, SceneShape, SceneSource,
    ShapeDescription,
};
use rig_models::states::AppState;

/// Converts `scene` into entities of `world` and returns the name index of what was spawned.
///
/// The scene is validated up front, a scene with duplicate names or dangling references
/// spawns nothing. Orbit cameras without own settings use `camera_defaults`.
pub fn convert_scene(
    world: &mut World,
    scene: &SceneDescription,
    camera_defaults: &OrbitCameraSettings,
) -> Result<SceneIndex, SceneError> {
    validate_scene(scene)?;

    let mut index = HashMap::with_capacity(scene.entities.len());
    for description in &scene.entities {
        let visibility = if description.active { Visibility::Inherited } else { Visibility::Hidden };
        let mut entity = world.spawn((
            Name::new(description.name.clone()),
            Transform::from_translation(description.translation),
            visibility,
        ));
        if let Some(shape) = &description.shape {
            entity.insert(SceneShape(shape.clone()));
        }
        index.insert(description.name.clone(), entity.id());
    }

    for description in &scene.entities {
        let entity = resolve(&index, &description.name, &description.name)?;
        match &description.role {
            EntityRole::Prop => {}
            EntityRole::OrbitTarget => {
                world.entity_mut(entity).insert(OrbitTarget);
            }
            EntityRole::OrbitCamera { target, settings } => {
                let target = target
                    .as_deref()
                    .map(|name| resolve(&index, &description.name, name))
                    .transpose()?;
                let settings = settings.clone().unwrap_or_else(|| camera_defaults.clone());
                world.entity_mut(entity).insert(OrbitCamera { target, settings });
            }
            EntityRole::Clothes { wearer } => {
                let wearer = resolve(&index, &description.name, wearer)?;
                world.entity_mut(entity).insert(Clothes::worn_by(wearer));
            }
            EntityRole::Light { intensity } => {
                world.entity_mut(entity).insert(SceneLight { intensity: *intensity });
            }
        }
    }

    Ok(SceneIndex(index))
}

fn validate_scene(scene: &SceneDescription) -> Result<(), SceneError> {
    let mut names = HashSet::with_capacity(scene.entities.len());
    for description in &scene.entities {
        if !names.insert(description.name.as_str()) {
            return Err(SceneError::DuplicateName(description.name.clone()));
        }
    }

    for description in &scene.entities {
        if let Some(reference) = description.role.reference() {
            if !names.contains(reference) {
                return Err(SceneError::UnknownReference {
                    entity: description.name.clone(),
                    reference: reference.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn resolve(index: &HashMap<String, Entity>, owner: &str, name: &str) -> Result<Entity, SceneError> {
    index.get(name).copied().ok_or_else(|| SceneError::UnknownReference {
        entity: owner.to_string(),
        reference: name.to_string(),
    })
}

/// Loads the configured startup scene and switches to [`AppState::Running`] on success.
/// A broken scene is reported and the app stays in [`AppState::Loading`].
pub fn load_startup_scene(world: &mut World) {
    let Some(SceneSource(path)) = world.get_resource::<SceneSource>().cloned() else {
        warn!("No startup scene configured");
        return;
    };
    let camera_defaults = world
        .get_resource::<GlobalConfig>()
        .map(|config| config.camera_config.clone())
        .unwrap_or_default();

    let converted = SceneDescription::load(&path)
        .and_then(|scene| convert_scene(world, &scene, &camera_defaults));

    match converted {
        Ok(index) => {
            info!("Scene '{}' converted with {} entities", path.display(), index.0.len());
            world.insert_resource(index);
            if let Some(mut next) = world.get_resource_mut::<NextState<AppState>>() {
                next.set(AppState::Running);
            }
        }
        Err(err) => error!("Failed to load scene '{}': {err}", path.display()),
    }
}

/// Gives converted entities their render side: meshes, lights and the camera itself.
pub fn attach_scene_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    shapes: Query<(Entity, &SceneShape), Added<SceneShape>>,
    lights: Query<(Entity, &SceneLight), Added<SceneLight>>,
    cameras: Query<Entity, Added<OrbitCamera>>,
) {
    for (entity, SceneShape(shape)) in shapes.iter() {
        let (mesh, [r, g, b]) = match shape {
            ShapeDescription::Cuboid { size, color } => (meshes.add(Cuboid::from_size(*size)), *color),
            ShapeDescription::Sphere { radius, color } => (meshes.add(Sphere::new(*radius)), *color),
        };
        commands.entity(entity).insert((
            Mesh3d(mesh),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(r, g, b),
                ..default()
            })),
        ));
    }

    for (entity, light) in lights.iter() {
        commands.entity(entity).insert(PointLight {
            intensity: light.intensity,
            shadows_enabled: true,
            ..default()
        });
    }

    for entity in cameras.iter() {
        commands.entity(entity).insert(Camera3d::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(json: &str) -> SceneDescription {
        SceneDescription::from_json(json).unwrap()
    }

    const DEMO: &str = r#"{ "entities": [
        { "name": "Player", "translation": [1.0, 0.5, 0.0], "role": { "type": "orbit_target" } },
        { "name": "Camera", "role": { "type": "orbit_camera", "target": "Player" } },
        { "name": "Cape", "active": false, "role": { "type": "clothes", "wearer": "Player" } },
        { "name": "Lamp", "translation": [4.0, 8.0, 4.0], "role": { "type": "light", "intensity": 900.0 } },
        { "name": "Crate", "shape": { "type": "sphere", "radius": 0.5 } }
    ] }"#;

    #[test]
    fn converts_and_resolves_references() {
        let mut world = World::new();
        let defaults = OrbitCameraSettings { zoom_max: 14.0, ..default() };
        let index = convert_scene(&mut world, &scene(DEMO), &defaults).unwrap();

        let player = index.get("Player").unwrap();
        assert!(world.get::<OrbitTarget>(player).is_some());
        assert_eq!(world.get::<Transform>(player).unwrap().translation, Vec3::new(1.0, 0.5, 0.0));
        assert_eq!(world.get::<Name>(player).unwrap().as_str(), "Player");

        let camera = world.get::<OrbitCamera>(index.get("Camera").unwrap()).unwrap();
        assert_eq!(camera.target, Some(player));
        assert_eq!(camera.settings.zoom_max, 14.0);

        let cape = index.get("Cape").unwrap();
        assert_eq!(world.get::<Clothes>(cape).unwrap().wearer, Some(player));
        assert_eq!(world.get::<Visibility>(cape), Some(&Visibility::Hidden));

        let lamp = index.get("Lamp").unwrap();
        assert_eq!(world.get::<SceneLight>(lamp), Some(&SceneLight { intensity: 900.0 }));
        assert!(world.get::<SceneShape>(index.get("Crate").unwrap()).is_some());
    }

    #[test]
    fn duplicate_names_spawn_nothing() {
        let mut world = World::new();
        let err = convert_scene(
            &mut world,
            &scene(r#"{ "entities": [ { "name": "A" }, { "name": "A" } ] }"#),
            &OrbitCameraSettings::default(),
        )
        .unwrap_err();

        assert!(matches!(err, SceneError::DuplicateName(name) if name == "A"));
        assert_eq!(world.query::<&Name>().iter(&world).count(), 0);
    }

    #[test]
    fn unknown_reference_spawns_nothing() {
        let mut world = World::new();
        let err = convert_scene(
            &mut world,
            &scene(r#"{ "entities": [
                { "name": "Boots", "role": { "type": "clothes", "wearer": "Ghost" } }
            ] }"#),
            &OrbitCameraSettings::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            SceneError::UnknownReference { ref entity, ref reference } if entity == "Boots" && reference == "Ghost"
        ));
        assert_eq!(world.query::<&Name>().iter(&world).count(), 0);
    }

    #[test]
    fn camera_without_target_is_kept_unresolved() {
        let mut world = World::new();
        let index = convert_scene(
            &mut world,
            &scene(r#"{ "entities": [ { "name": "Camera", "role": { "type": "orbit_camera" } } ] }"#),
            &OrbitCameraSettings::default(),
        )
        .unwrap();

        let camera = world.get::<OrbitCamera>(index.get("Camera").unwrap()).unwrap();
        assert_eq!(camera.target, None);
    }

    #[test]
    fn missing_scene_file_keeps_loading_state() {
        let mut world = World::new();
        world.insert_resource(SceneSource("no/such/scene.json".into()));
        world.init_resource::<NextState<AppState>>();

        load_startup_scene(&mut world);

        assert!(matches!(*world.resource::<NextState<AppState>>(), NextState::Unchanged));
        assert!(world.get_resource::<SceneIndex>().is_none());
    }

    #[test]
    fn startup_scene_is_converted_from_disk() {
        let path = std::env::temp_dir().join(format!("orbit_rig_scene_{}.json", std::process::id()));
        std::fs::write(&path, DEMO).unwrap();

        let mut world = World::new();
        world.insert_resource(SceneSource(path.clone()));
        world.insert_resource(GlobalConfig::default());
        world.init_resource::<NextState<AppState>>();

        load_startup_scene(&mut world);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(world.resource::<SceneIndex>().0.len(), 5);
        assert!(matches!(
            *world.resource::<NextState<AppState>>(),
            NextState::Pending(AppState::Running)
        ));
    }
}

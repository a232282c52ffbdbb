use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::utils::{HashMap, HashSet};
use bevy::window::PrimaryWindow;

use crate::simulation::collision::Outcome;
use crate::simulation::scenario::Scenario;
use crate::simulation::vector::NVec2;
use crate::visualization::draw::{PointDraw, RecordingSink, Rgba};

#[derive(Component)]
struct PointId(pub usize);

// a point is drawn as three stacked discs
#[derive(Component, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Halo, // soft shadow, 5x the target radius
    Rim, // outer gradient stop
    Core, // inner gradient stop
}

// core disc share of the eased radius
const CORE_FRACTION: f64 = 0.65;

#[derive(Resource)]
struct UnitCircle(Handle<Mesh>);

const BACKGROUND: Color = Color::srgb(11.0 / 255.0, 51.0 / 255.0, 56.0 / 255.0);
const HALO: Color = Color::srgba(0.0, 0.0, 0.0, 0.1);

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} gravity points", scenario.points.len());
    println!("controls: drag points with the left mouse button, right click collapses, space launches, R resets");

    let resolution = (scenario.screen.x as f32, scenario.screen.y as f32);

    App::new()
        .insert_resource(ClearColor(BACKGROUND))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "gravpoint".into(),
                resolution: resolution.into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_system)
        .add_systems(Update, (input_system, physics_step_system, sync_points_system, draw_trails_system).chain())
        .run();
}

/// Screen space (origin top left, y down) to world space (origin centre, y up)
fn to_world(p: &NVec2, screen: &NVec2) -> Vec2 {
    Vec2::new((p.x - screen.x * 0.5) as f32, (screen.y * 0.5 - p.y) as f32)
}

fn to_color(c: Rgba) -> Color {
    Color::srgba(c.r, c.g, c.b, c.a)
}

fn setup_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());
    commands.insert_resource(UnitCircle(meshes.add(Circle::new(1.0))));

    // the trail is a fat line, as wide as the particle
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = (scenario.particle_radius * 2.0) as f32;
}

fn input_system(
    mut scenario: ResMut<Scenario>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    let cursor = windows
        .get_single()
        .ok()
        .and_then(|w| w.cursor_position())
        .map(|c| NVec2::new(c.x as f64, c.y as f64));

    if let Some(c) = cursor {
        if mouse.just_pressed(MouseButton::Left) {
            scenario.press(c);
        } else {
            scenario.move_pointer(c);
        }
        if mouse.just_pressed(MouseButton::Right) {
            scenario.collapse_at(c);
        }
    }
    if mouse.just_released(MouseButton::Left) {
        scenario.release();
    }
    if keys.just_pressed(KeyCode::Space) {
        scenario.start();
    }
    if keys.just_pressed(KeyCode::KeyR) {
        scenario.reset();
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>, mut exit: EventWriter<AppExit>) {
    let report = scenario.step_frame();
    if report.outcome == Some(Outcome::Won) {
        info!("level complete after {} frames", report.frame + 1);
        exit.send(AppExit::Success);
    }
}

fn place(transform: &mut Transform, d: &PointDraw, layer: Layer, screen: &NVec2) {
    let center = to_world(&d.center, screen);
    let (radius, z) = match layer {
        Layer::Halo => (d.halo_radius, 0.0),
        Layer::Rim => (d.radius, 1.0),
        Layer::Core => (d.radius * CORE_FRACTION, 2.0),
    };
    transform.translation = center.extend(z);
    transform.scale = Vec3::splat(radius.max(0.0) as f32);
}

/// Mirror the live points into mesh entities, keyed by point id
fn sync_points_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    circle: Res<UnitCircle>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &PointId, &mut Transform, &Layer)>,
) {
    let mut sink = RecordingSink::default();
    scenario.draw(&mut sink);
    let live: HashMap<usize, &PointDraw> = sink.points.iter().map(|d| (d.id, d)).collect();
    let mut seen = HashSet::default();

    for (entity, PointId(id), mut transform, layer) in &mut query {
        match live.get(id) {
            Some(d) => {
                seen.insert(*id);
                place(&mut transform, d, *layer, &scenario.screen);
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for d in sink.points.iter().filter(|d| !seen.contains(&d.id)) {
        for layer in [Layer::Halo, Layer::Rim, Layer::Core] {
            let color = match layer {
                Layer::Halo => HALO,
                Layer::Rim => to_color(d.gradient.outer),
                Layer::Core => to_color(d.gradient.inner),
            };
            let mut transform = Transform::default();
            place(&mut transform, d, layer, &scenario.screen);

            commands.spawn((
                MaterialMesh2dBundle {
                    mesh: Mesh2dHandle(circle.0.clone()),
                    material: materials.add(ColorMaterial::from(color)),
                    transform,
                    ..Default::default()
                },
                PointId(d.id),
                layer,
            ));
        }
    }
}

fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let mut sink = RecordingSink::default();
    scenario.draw(&mut sink);

    for t in &sink.trails {
        gizmos.line_2d(to_world(&t.from, &scenario.screen), to_world(&t.to, &scenario.screen), Color::WHITE);
    }
}

//! # Planet Demo
//!
//! An icosphere planet spinning inside a gradient skybox, above a
//! tiled ground plane, with a cube moon orbiting under Newtonian
//! gravity. Contact between moon and planet is detected with the
//! sphere overlap test and logged.
//!
//! Press Escape to exit.

use std::sync::Arc;

use winit::event::KeyEvent;
use winit::keyboard::{Key, NamedKey};

use terrella_app::{App, AppArgs, AppContext, AppHandler, DefaultAppArgs, DrawContext};
use terrella_core::math::Vec3;
use terrella_core::mesh::{generators, VertexLayout};
use terrella_core::physics::{gravitational_force, spheres_intersect, GRAVITATIONAL_CONSTANT};
use terrella_core::scene::{Camera, PointLight, SceneLights, Transform};
use terrella_graphics::{ForwardRenderer, FrameInput, Mesh, Model, Skybox, Texture};

use terrella_demos::textures;

const PLANET_RADIUS: f32 = 1.5;
const PLANET_MASS: f32 = 10.0;
const PLANET_SPIN_DEG_PER_SEC: f32 = 12.0;

const MOON_HALF_EXTENT: f32 = 0.4;
const MOON_MASS: f32 = 0.1;
const MOON_START: [f32; 3] = [4.0, 0.5, 0.0];

struct SceneState {
    renderer: ForwardRenderer,
    skybox: Skybox,
    planet: Model,
    moon: Model,
    ground: Model,
    camera: Camera,
    lights: SceneLights,
    moon_velocity: Vec3,
    moon_contact: bool,
}

struct PlanetDemo {
    scene: Option<SceneState>,
    exit_requested: bool,
}

impl PlanetDemo {
    fn new() -> Self {
        Self {
            scene: None,
            exit_requested: false,
        }
    }
}

fn upload_texture(
    ctx: &AppContext,
    image: &textures::RgbaImage,
    label: &str,
) -> Arc<Texture> {
    Arc::new(
        Texture::from_rgba8(ctx.device(), image.width, image.height, &image.pixels, label)
            .expect("texture upload"),
    )
}

impl AppHandler for PlanetDemo {
    fn on_init(&mut self, ctx: &mut AppContext) {
        let device = ctx.device();
        let renderer = ForwardRenderer::new(device, ctx.surface().format());

        // Meshes
        let pnu = VertexLayout::position_normal_uv();
        let planet_mesh = Arc::new(
            Mesh::upload(device, &generators::icosphere(PLANET_RADIUS, 3), &pnu)
                .expect("planet mesh upload"),
        );
        let moon_mesh = Arc::new(
            Mesh::upload(device, &generators::cube(MOON_HALF_EXTENT), &pnu)
                .expect("moon mesh upload"),
        );
        let ground_mesh = Arc::new(
            Mesh::upload(device, &generators::plane(40.0, 16), &pnu)
                .expect("ground mesh upload"),
        );
        let sky_mesh = Arc::new(
            Mesh::upload(
                device,
                &generators::skybox(500.0),
                &VertexLayout::position_only(),
            )
            .expect("skybox mesh upload"),
        );

        // Textures
        let planet_texture = upload_texture(
            ctx,
            &textures::latitude_bands(256, 16, [70, 130, 200], [235, 240, 235]),
            "planet",
        );
        let moon_texture = upload_texture(
            ctx,
            &textures::checkerboard(128, 4, [180, 180, 180], [90, 90, 90]),
            "moon",
        );
        let ground_texture = upload_texture(
            ctx,
            &textures::checkerboard(256, 2, [50, 90, 50], [30, 55, 30]),
            "ground",
        );
        let sky_texture = upload_texture(
            ctx,
            &textures::vertical_gradient(64, 256, [12, 16, 48], [110, 60, 80]),
            "sky",
        );

        let device = ctx.device();
        let skybox = renderer.create_skybox(device, sky_mesh, sky_texture);
        let planet = renderer.create_model(device, planet_mesh, planet_texture);
        let moon = renderer
            .create_model(device, moon_mesh, moon_texture)
            .with_transform(Transform::from_translation(Vec3::new(
                MOON_START[0],
                MOON_START[1],
                MOON_START[2],
            )));
        let ground = renderer
            .create_model(device, ground_mesh, ground_texture)
            .with_transform(Transform::from_translation(Vec3::new(0.0, -8.0, 0.0)))
            .with_texture_scale(8.0);

        let camera = Camera::new(45.0_f32.to_radians())
            .with_position(Vec3::new(0.0, 2.5, 9.0))
            .with_rotation(Vec3::new(-0.25, 0.0, 0.0));

        let mut lights = SceneLights::new();
        lights.add(
            PointLight::new(3.0, 0.02)
                .with_position(Vec3::new(8.0, 5.0, 8.0))
                .with_color(Vec3::new(1.0, 0.95, 0.85)),
        );
        lights.add(
            PointLight::new(0.8, 0.1)
                .with_position(Vec3::new(-6.0, -2.0, -4.0))
                .with_color(Vec3::new(0.4, 0.5, 0.9)),
        );

        // Circular orbit speed at the starting radius.
        let orbit_radius = Vec3::new(MOON_START[0], MOON_START[1], MOON_START[2]).norm();
        let orbit_speed = (GRAVITATIONAL_CONSTANT * PLANET_MASS / orbit_radius).sqrt();

        self.scene = Some(SceneState {
            renderer,
            skybox,
            planet,
            moon,
            ground,
            camera,
            lights,
            moon_velocity: Vec3::new(0.0, 0.0, orbit_speed),
            moon_contact: false,
        });
        log::info!("Planet demo initialized (orbit speed {orbit_speed:.2})");
    }

    fn on_update(&mut self, ctx: &mut AppContext) -> bool {
        if self.exit_requested {
            return false;
        }
        let scene = match &mut self.scene {
            Some(s) => s,
            None => return true,
        };
        let dt = ctx.delta_time();

        scene.planet.transform.rotation.y += PLANET_SPIN_DEG_PER_SEC.to_radians() * dt;

        // Semi-implicit Euler integration of the moon orbit.
        let planet_position = scene.planet.transform.translation;
        let moon_position = scene.moon.transform.translation;
        let force = gravitational_force(planet_position, PLANET_MASS, moon_position, MOON_MASS);
        scene.moon_velocity += force * (dt / MOON_MASS);
        scene.moon.transform.translation += scene.moon_velocity * dt;
        scene.moon.transform.rotation.y += 0.5 * dt;

        // Treat the cube moon as its circumscribed sphere.
        let moon_radius = MOON_HALF_EXTENT * 3.0_f32.sqrt();
        let touching = spheres_intersect(
            planet_position,
            PLANET_RADIUS,
            scene.moon.transform.translation,
            moon_radius,
        );
        if touching && !scene.moon_contact {
            log::warn!(
                "Moon contact at {:?}",
                scene.moon.transform.translation.as_slice()
            );
        }
        scene.moon_contact = touching;

        true
    }

    fn on_draw(&mut self, ctx: &mut DrawContext) {
        let scene = match &self.scene {
            Some(s) => s,
            None => return,
        };
        let frame = FrameInput {
            color_view: ctx.view(),
            depth_view: ctx.depth_view(),
            clear_color: ctx.clear_color(),
            aspect: ctx.aspect_ratio(),
        };
        scene.renderer.draw(
            ctx.device(),
            &frame,
            &scene.camera,
            Some(&scene.skybox),
            &[&scene.planet, &scene.moon, &scene.ground],
            &scene.lights,
        );
    }

    fn on_key(&mut self, _ctx: &mut AppContext, event: &KeyEvent) {
        if event.state.is_pressed() && event.logical_key == Key::Named(NamedKey::Escape) {
            log::info!("Escape pressed, exiting");
            self.exit_requested = true;
        }
    }
}

fn main() {
    App::run(PlanetDemo::new(), DefaultAppArgs::parse());
}

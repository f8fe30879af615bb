//! # Cube Demo
//!
//! Two textured cubes spinning under a single point light. This is the
//! smallest end-to-end scene: upload a mesh, build two models, rotate
//! them every frame, draw.

use std::sync::Arc;

use terrella_app::{App, AppArgs, AppContext, AppHandler, DefaultAppArgs, DrawContext};
use terrella_core::math::Vec3;
use terrella_core::mesh::{generators, VertexLayout};
use terrella_core::scene::{Camera, PointLight, SceneLights, Transform};
use terrella_graphics::{ForwardRenderer, FrameInput, Mesh, Model, Texture};

use terrella_demos::textures;

/// Spin rates in degrees per second, one per Euler axis.
const SPIN_DEG_PER_SEC: [f32; 3] = [9.0, -15.0, 21.0];

struct SceneState {
    renderer: ForwardRenderer,
    spinner: Model,
    companion: Model,
    camera: Camera,
    lights: SceneLights,
}

struct CubeDemo {
    scene: Option<SceneState>,
}

impl CubeDemo {
    fn new() -> Self {
        Self { scene: None }
    }
}

impl AppHandler for CubeDemo {
    fn on_init(&mut self, ctx: &mut AppContext) {
        let device = ctx.device();
        let mut renderer = ForwardRenderer::new(device, ctx.surface().format());
        renderer.set_depth_test(true);

        let cube = generators::cube(0.5);
        let mesh = Arc::new(
            Mesh::upload(device, &cube, &VertexLayout::position_normal_uv())
                .expect("cube mesh upload"),
        );

        let checker_a = textures::checkerboard(256, 8, [220, 160, 70], [60, 40, 25]);
        let checker_b = textures::checkerboard(256, 8, [90, 140, 220], [20, 30, 60]);
        let texture_a = Arc::new(
            Texture::from_rgba8(
                device,
                checker_a.width,
                checker_a.height,
                &checker_a.pixels,
                "checker_a",
            )
            .expect("checker texture"),
        );
        let texture_b = Arc::new(
            Texture::from_rgba8(
                device,
                checker_b.width,
                checker_b.height,
                &checker_b.pixels,
                "checker_b",
            )
            .expect("checker texture"),
        );

        let spinner = renderer.create_model(device, mesh.clone(), texture_a);
        let companion = renderer
            .create_model(device, mesh, texture_b)
            .with_transform(Transform::from_translation(Vec3::new(1.5, 0.0, 0.0)));

        let camera = Camera::new(45.0_f32.to_radians()).with_position(Vec3::new(0.0, 0.0, 5.0));

        let mut lights = SceneLights::new();
        lights.add(
            PointLight::new(2.5, 0.05)
                .with_position(Vec3::new(3.0, 3.0, 4.0))
                .with_color(Vec3::new(1.0, 0.95, 0.8)),
        );

        self.scene = Some(SceneState {
            renderer,
            spinner,
            companion,
            camera,
            lights,
        });
        log::info!("Cube demo initialized");
    }

    fn on_update(&mut self, ctx: &mut AppContext) -> bool {
        if let Some(scene) = &mut self.scene {
            let dt = ctx.delta_time();
            scene.spinner.transform.rotate(Vec3::new(
                SPIN_DEG_PER_SEC[0].to_radians() * dt,
                SPIN_DEG_PER_SEC[1].to_radians() * dt,
                SPIN_DEG_PER_SEC[2].to_radians() * dt,
            ));
        }
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
            None,
            &[&scene.spinner, &scene.companion],
            &scene.lights,
        );
    }
}

fn main() {
    App::run(CubeDemo::new(), DefaultAppArgs::parse());
}

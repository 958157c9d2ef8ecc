use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use boxfield::bench::{build_faces, sort_by_depth, EdgeFunctionRasterizer, FrameBuffer};
use boxfield::colors::Color;
use boxfield::config::{EngineConfig, GridSize, SceneConfig};
use boxfield::cuboid::Cuboid;
use boxfield::engine::Engine;
use boxfield::face::PrimitiveKind;
use boxfield::input::InputState;
use boxfield::math::vec2::Vec2;
use boxfield::math::vec3::Vec3;
use boxfield::projection::{RenderContext, ViewMode};
use boxfield::render::DrawList;
use boxfield::scene::{initial_rotation, Scene};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn reference_box() -> Cuboid {
    Cuboid::new(
        Vec3::ZERO,
        Vec3::new(12.0, 180.0, 12.0),
        initial_rotation(),
        Color::rgb(160, 50, 40),
        PrimitiveKind::Filled,
    )
}

fn benchmark_single_box(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_box");
    let ctx = RenderContext::new(BUFFER_WIDTH, BUFFER_HEIGHT, ViewMode::Perspective);
    let cuboid = reference_box();

    group.bench_function("build_faces", |b| {
        b.iter(|| build_faces(black_box(cuboid.vertices()), cuboid.fill_color(), cuboid.kind()));
    });

    group.bench_function("build_and_sort", |b| {
        b.iter(|| {
            let mut faces = build_faces(black_box(cuboid.vertices()), cuboid.fill_color(), cuboid.kind());
            sort_by_depth(&mut faces, |face| face.depth(&ctx.projector, cuboid.rotation()));
            faces
        });
    });

    group.finish();
}

fn benchmark_quad_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("quad_fill");
    let rasterizer = EdgeFunctionRasterizer::new();

    for (name, half) in [("small", 6.0f32), ("medium", 60.0), ("large", 250.0)] {
        let center = Vec2::new(400.0, 300.0);
        let quad = [
            center + Vec2::new(-half, -half),
            center + Vec2::new(half, -half * 0.8),
            center + Vec2::new(half * 0.9, half),
            center + Vec2::new(-half, half * 0.7),
        ];
        group.bench_with_input(BenchmarkId::new("edge_function", name), &quad, |b, quad| {
            let mut buffer = vec![0u32; (BUFFER_WIDTH * BUFFER_HEIGHT) as usize];
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
                rasterizer.fill_convex_polygon(black_box(quad), &mut fb, 0xFFFF0000);
            });
        });
    }

    group.finish();
}

fn benchmark_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");
    let scene_config = SceneConfig {
        grid: GridSize { x: 20, y: 1, z: 20 },
        seed: Some(1),
        ..SceneConfig::default()
    };

    group.bench_function("record_400_boxes", |b| {
        let mut scene = Scene::new(scene_config);
        let ctx = RenderContext::new(BUFFER_WIDTH, BUFFER_HEIGHT, ViewMode::Perspective);
        let mut list = DrawList::new();
        b.iter(|| {
            scene.update();
            list.clear();
            scene.display(&ctx, &mut list);
            black_box(list.len())
        });
    });

    group.bench_function("rasterize_400_boxes", |b| {
        let mut engine = Engine::new(&EngineConfig {
            scene: scene_config,
            ..EngineConfig::default()
        });
        let input = InputState::default();
        b.iter(|| {
            engine.update(&input);
            engine.render();
            black_box(engine.frame_buffer().len())
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_box, benchmark_quad_fill, benchmark_full_frame);
criterion_main!(benches);

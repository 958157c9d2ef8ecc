use approx::assert_relative_eq;
use boxfield::prelude::*;
use boxfield::scene::Z_EPSILON;

fn reference_box(kind: PrimitiveKind) -> Cuboid {
    Cuboid::new(
        Vec3::ZERO,
        Vec3::new(12.0, 12.0, 12.0),
        Vec3::ZERO,
        Color::rgb(100, 100, 100),
        kind,
    )
}

#[test]
fn reference_box_draws_back_to_front() {
    for mode in [ViewMode::Perspective, ViewMode::Orthographic] {
        let ctx = RenderContext::new(800, 600, mode);
        let mut list = DrawList::new();
        reference_box(PrimitiveKind::Filled).display(&ctx, &mut list);

        let sides: Vec<FaceSide> = list.faces().map(|f| f.side).collect();
        assert_eq!(
            sides,
            [
                FaceSide::Back,
                FaceSide::Top,
                FaceSide::Right,
                FaceSide::Bottom,
                FaceSide::Left,
                FaceSide::Front,
            ]
        );
        let reds: Vec<u8> = list.faces().map(|f| f.color.r).collect();
        assert_eq!(reds, [120, 140, 160, 180, 200, 100]);
    }
}

#[test]
fn front_face_projects_around_screen_center() {
    let ctx = RenderContext::new(800, 600, ViewMode::Orthographic);
    let mut list = DrawList::new();
    reference_box(PrimitiveKind::Outline).display(&ctx, &mut list);

    let front = list.faces().last().unwrap();
    assert_eq!(front.kind, PrimitiveKind::Outline);
    let xs: Vec<f32> = front.points.iter().map(|p| p.x).collect();
    let ys: Vec<f32> = front.points.iter().map(|p| p.y).collect();
    assert_relative_eq!(xs.iter().cloned().fold(f32::INFINITY, f32::min), 394.0);
    assert_relative_eq!(xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 406.0);
    assert_relative_eq!(ys.iter().cloned().fold(f32::INFINITY, f32::min), 294.0);
    assert_relative_eq!(ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 306.0);
}

#[test]
fn default_scene_layout() {
    let scene = Scene::new(SceneConfig {
        seed: Some(3),
        ..SceneConfig::default()
    });
    assert_eq!(scene.len(), 400);

    let xs: Vec<f32> = scene.boxes().iter().map(|b| b.position().x).collect();
    let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
    let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    assert_relative_eq!(min_x, -114.0);
    assert_relative_eq!(max_x, 114.0);
    assert_relative_eq!(min_x + max_x, 0.0);

    let zs: Vec<f32> = scene.boxes().iter().map(|b| b.position().z).collect();
    let min_z = zs.iter().cloned().fold(f32::INFINITY, f32::min);
    assert_relative_eq!(min_z, -114.0 + Z_EPSILON);
}

#[test]
fn every_projected_point_is_finite() {
    let mut scene = Scene::new(SceneConfig {
        seed: Some(8),
        ..SceneConfig::default()
    });
    scene.update();
    for mode in [ViewMode::Perspective, ViewMode::Orthographic] {
        let ctx = RenderContext::new(800, 600, mode);
        let mut list = DrawList::new();
        scene.display(&ctx, &mut list);
        assert_eq!(list.faces().count(), 400 * 6);
        assert!(list.faces().all(|f| f.points.iter().all(|p| p.is_finite())));
    }
}

#[test]
fn arbitrary_heights_keep_topology() {
    let ctx = RenderContext::new(800, 600, ViewMode::Perspective);
    let mut cuboid = reference_box(PrimitiveKind::Filled);
    for height in [0.5, 12.0, 250.0, 0.01, 90.0] {
        cuboid.set_size(Vec3::new(12.0, height, 12.0));
        cuboid.update();
        let faces = cuboid.sorted_faces(&ctx);
        let mut sides: Vec<usize> = faces.iter().map(|f| f.side.index()).collect();
        sides.sort_unstable();
        assert_eq!(sides, vec![0, 1, 2, 3, 4, 5]);
    }
}

#[test]
fn engine_frame_paints_boxes_over_background() {
    let mut engine = Engine::new(&EngineConfig {
        width: 320,
        height: 240,
        scene: SceneConfig {
            grid: GridSize { x: 4, y: 1, z: 4 },
            seed: Some(21),
            show_noise_trace: false,
            ..SceneConfig::default()
        },
        ..EngineConfig::default()
    });
    engine.update(&InputState::default());
    engine.render();

    let renderer = engine.renderer();
    assert_eq!(renderer.pixel(0, 0), Some(Color::BACKGROUND));
    assert_ne!(renderer.pixel(160, 120), Some(Color::BACKGROUND));
}

#[test]
fn headless_screenshot_round_trips_through_png() {
    let mut engine = Engine::new(&EngineConfig {
        width: 64,
        height: 48,
        scene: SceneConfig {
            grid: GridSize { x: 2, y: 1, z: 2 },
            seed: Some(2),
            ..SceneConfig::default()
        },
        ..EngineConfig::default()
    });
    engine.update(&InputState::default());
    engine.render();

    let path = std::env::temp_dir().join(format!("boxfield-test-{}.png", std::process::id()));
    engine.save_screenshot(&path).unwrap();
    let image = image::open(&path).unwrap().to_rgba8();
    std::fs::remove_file(&path).ok();

    assert_eq!(image.dimensions(), (64, 48));
    for (x, y) in [(0u32, 0u32), (32, 24), (63, 47), (10, 40)] {
        let c = engine.renderer().pixel(x as i32, y as i32).unwrap();
        assert_eq!(image.get_pixel(x, y).0, [c.r, c.g, c.b, c.a]);
    }
}

use folio_core::gpu::{layer_instances, write_layer_instances, LayerInstance, SceneUniforms};
use folio_core::*;
use glam::{Mat4, Vec3, Vec4};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn constants_within_expected_bounds() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(PARTICLE_RESET_Z < -(LAYER_COUNT as f32 - 1.0) * LAYER_GAP);
    assert!(LAYER_WRAP_OFFSET >= LAYER_COUNT as f32 * LAYER_GAP);
    assert!(WARP_DECAY > 0.0 && WARP_DECAY < 1.0);
    assert!(STATE_LERP > 0.0 && STATE_LERP < 1.0);
    assert!(CAMERA_DAMPING > 0.0 && CAMERA_DAMPING < 1.0);
    assert!(SECTION_VISIBILITY_THRESHOLD > FADE_VISIBILITY_THRESHOLD);
}

#[test]
fn portfolio_has_five_sections() {
    let table = SectionTable::portfolio();
    assert_eq!(table.len(), 5);
    assert!(!table.is_empty());
    let mut ids: Vec<_> = table.section_ids().collect();
    ids.sort_unstable();
    assert_eq!(ids, ["about", "contact", "home", "projects", "skills"]);
    assert!(table.lookup(DEFAULT_SECTION).is_some());
}

#[test]
fn hex_colours_decode_to_linear_channels() {
    assert_eq!(Rgb::from_hex(0x000000), Rgb::BLACK);
    let white = Rgb::from_hex(0xffffff);
    assert!(white.max_channel_distance(Rgb::new(1.0, 1.0, 1.0)) < 1e-5);
    let [r, g, b, a] = Rgb::from_hex(0x00ff00).with_alpha(0.5);
    assert_eq!((r, b, a), (0.0, 0.0, 0.5));
    assert!((g - 1.0).abs() < 1e-5);
    // sRGB mid-grey is darker in linear space
    let grey = Rgb::from_hex(0x808080);
    assert!(grey.r > 0.2 && grey.r < 0.23);
}

#[test]
fn colour_lerp_moves_fraction_of_gap() {
    let c = Rgb::BLACK.lerp(Rgb::new(1.0, 0.5, 0.0), 0.5);
    assert_eq!(c, Rgb::new(0.5, 0.25, 0.0));
    assert_eq!(c.max_channel_distance(Rgb::new(1.0, 0.5, 0.0)), 0.5);
}

#[test]
fn layers_start_evenly_spaced_as_diamonds() {
    let layers = build_layers(&SceneConfig::default());
    assert_eq!(layers.len(), LAYER_COUNT);
    for (i, l) in layers.iter().enumerate() {
        assert_eq!(l.z, -(i as f32) * LAYER_GAP);
        assert_eq!(l.rotation_z, std::f32::consts::FRAC_PI_4);
        assert_eq!(l.scale, 1.0);
    }
}

#[test]
fn layer_model_matrix_places_plane_at_depth() {
    let layer = Layer {
        z: -20.0,
        rotation_x: 0.0,
        rotation_z: 0.0,
        scale: 2.0,
    };
    let p = layer.model_matrix() * Vec4::new(1.0, 1.0, 0.0, 1.0);
    assert!((p - Vec4::new(2.0, 2.0, -20.0, 1.0)).length() < 1e-5);
}

#[test]
fn particles_start_inside_the_volume() {
    let mut rng = StdRng::seed_from_u64(42);
    let field = ParticleField::new(&SceneConfig::default(), &mut rng);
    assert_eq!(field.len(), PARTICLE_COUNT);
    let half = PARTICLE_SPREAD / 2.0;
    for (p, s) in field.positions.iter().zip(&field.speeds) {
        assert!(p.x >= -half && p.x < half);
        assert!(p.y >= -half && p.y < half);
        assert!(p.z <= 0.0 && p.z > -PARTICLE_DEPTH);
        assert!(*s >= PARTICLE_SPEED_MIN && *s < PARTICLE_SPEED_MIN + PARTICLE_SPEED_SPAN);
    }
}

#[test]
fn empty_config_builds_nothing() {
    let config = SceneConfig {
        layer_count: 0,
        particle_count: 0,
        ..SceneConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    assert!(build_layers(&config).is_empty());
    assert!(ParticleField::new(&config, &mut rng).is_empty());
}

#[test]
fn wireframe_has_every_triangle_edge_once() {
    let verts = wireframe_plane(LAYER_SIZE, LAYER_SEGMENTS);
    // 2·20·21 grid edges + 20·20 diagonals, two vertices each
    assert_eq!(verts.len(), 2480);
    let half = LAYER_SIZE / 2.0;
    for v in &verts {
        assert!(v[0].abs() <= half + 1e-4);
        assert!(v[1].abs() <= half + 1e-4);
        assert_eq!(v[2], 0.0);
    }
}

#[test]
fn camera_looks_down_negative_z() {
    let camera = Camera::new(1.0);
    let ahead = camera.view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((ahead.truncate() - Vec3::new(0.0, 0.0, -CAMERA_START_Z)).length() < 1e-5);
    let expected = Mat4::perspective_rh(CAMERA_FOV_DEG.to_radians(), 1.0, 0.1, 1000.0);
    assert_eq!(camera.projection_matrix(), expected);
}

#[test]
fn camera_aspect_ignores_degenerate_viewport() {
    let mut camera = Camera::new(1.0);
    camera.set_viewport(1600.0, 900.0);
    assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
    camera.set_viewport(0.0, 900.0);
    assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn gpu_layouts_match_shader() {
    assert_eq!(std::mem::size_of::<SceneUniforms>(), 192);
    assert_eq!(std::mem::size_of::<LayerInstance>(), 64);
    for entry in ["vs_layer", "fs_layer", "vs_particle", "fs_particle"] {
        assert!(SCENE_WGSL.contains(&format!("fn {entry}(")), "missing {entry}");
    }
}

#[test]
fn uniforms_follow_animation_state() {
    let mut rng = StdRng::seed_from_u64(3);
    let ctx = AnimationContext::new(
        &SceneConfig::default(),
        SectionTable::portfolio(),
        1.5,
        &mut rng,
    );
    let u = SceneUniforms::from_context(&ctx);
    assert_eq!(u.layer_color, ctx.state.base_color.with_alpha(LAYER_OPACITY));
    assert_eq!(u.particle_color[3], PARTICLE_OPACITY);
    assert_eq!(u.fog[3], FOG_DENSITY);
    assert_eq!(u.params[0], PARTICLE_SIZE);
    assert_eq!(layer_instances(&ctx).len(), LAYER_COUNT);
}

#[test]
fn layer_instances_refill_in_place() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut ctx = AnimationContext::new(
        &SceneConfig::default(),
        SectionTable::portfolio(),
        1.0,
        &mut rng,
    );
    let mut scratch = layer_instances(&ctx);
    let capacity = scratch.capacity();
    let ptr = scratch.as_ptr();

    ctx.tick(&FrameInput::default(), &mut rng);
    write_layer_instances(&ctx, &mut scratch);
    assert_eq!(scratch.len(), LAYER_COUNT);
    assert_eq!(scratch.capacity(), capacity);
    assert_eq!(scratch.as_ptr(), ptr);
    for (inst, layer) in scratch.iter().zip(&ctx.layers) {
        assert_eq!(inst.model, layer.model_matrix().to_cols_array_2d());
    }
}

use std::f32::consts::{FRAC_PI_4, SQRT_2};

use glam::Vec2;
use polybounce::consts::SHAPE_RADIUS_FRACTION;
use polybounce::sim::Body;
use polybounce::{
    FrameSize, GlobalSettings, ShapeKind, SimulationConfig, SimulationState, step,
};

/// Frame whose boundary is a square of the given half-width once rotated by 45°
fn frame_for_square(half_width: f32) -> FrameSize {
    FrameSize::square(half_width * SQRT_2 / SHAPE_RADIUS_FRACTION)
}

/// A single ball dropped from the center of a fixed square with lossless
/// walls should bounce on the floor forever without gaining speed.
#[test]
fn dropped_ball_bounces_periodically() {
    let config = SimulationConfig {
        shape_type: ShapeKind::Square,
        vertex_count: 4,
        gravity: 1.0,
        friction: 0.0,
        restitution: 1.0,
        rotation_speed: 0.0,
        ball_count: 1,
        ball_size: 5.0,
        initial_speed: 0.0,
        ..Default::default()
    };
    let settings = GlobalSettings::default();
    let frame = frame_for_square(100.0);

    let mut state = SimulationState::with_bodies(vec![Body::new(0, Vec2::ZERO, Vec2::ZERO, 5.0)]);
    state.rotation = FRAC_PI_4;

    let mut post_bounce_speeds = Vec::new();
    let mut max_speed = 0.0f32;
    let mut prev_vy = 0.0f32;

    for _ in 0..1000 {
        let report = step(&mut state, &config, &settings, frame);
        assert_eq!(report.clamped, 0);

        let body = &state.bodies()[0];
        assert!(body.pos.x.abs() < 0.01, "drifted sideways: {:?}", body.pos);
        assert!(
            body.pos.y > -1.0 && body.pos.y <= 95.0 + 1e-3,
            "left the expected band: {:?}",
            body.pos
        );

        max_speed = max_speed.max(body.vel.length());
        if prev_vy > 0.0 && body.vel.y < 0.0 {
            post_bounce_speeds.push(body.vel.length());
        }
        prev_vy = body.vel.y;
    }

    // Free fall from y=0 to the floor at y=95 gives about sqrt(2 * 95)
    assert!(max_speed < 16.0, "peak speed {max_speed}");
    assert!(
        post_bounce_speeds.len() >= 30,
        "only {} bounces",
        post_bounce_speeds.len()
    );
    for speed in &post_bounce_speeds {
        assert!((11.0..15.0).contains(speed), "bounce speed {speed}");
    }
    // Rotation never moved
    assert_eq!(state.rotation(), FRAC_PI_4);
}

#[test]
fn full_run_stays_contained() {
    let shapes = [
        (ShapeKind::Triangle, 3),
        (ShapeKind::Square, 4),
        (ShapeKind::Pentagon, 5),
        (ShapeKind::Hexagon, 6),
        (ShapeKind::Octagon, 8),
        (ShapeKind::Star, 5),
    ];
    let frame = FrameSize::new(640.0, 480.0);
    let settings = GlobalSettings {
        rotation_multiplier: 2.0,
        ..Default::default()
    };

    for (shape_type, vertex_count) in shapes {
        let config = SimulationConfig {
            shape_type,
            vertex_count,
            ball_count: 15,
            ball_size: 6.0,
            rotation_speed: 0.015,
            ..Default::default()
        };
        let mut state = SimulationState::seeded(&config, 2024).unwrap();

        for _ in 0..500 {
            step(&mut state, &config, &settings, frame);
        }

        assert_eq!(state.steps, 500);
        assert!((state.rotation() - 500.0 * 0.03).abs() < 1e-2);
        for body in state.bodies() {
            assert!(body.pos.is_finite() && body.vel.is_finite());
            assert!(body.pos.length() < frame.shape_radius(), "{shape_type:?}");
        }
    }
}

#[test]
fn pausing_mid_run_freezes_then_resumes() {
    let config = SimulationConfig {
        ball_count: 8,
        ..Default::default()
    };
    let frame = FrameSize::square(500.0);
    let mut settings = GlobalSettings::default();
    let mut state = SimulationState::seeded(&config, 77).unwrap();

    for _ in 0..50 {
        step(&mut state, &config, &settings, frame);
    }

    settings.toggle_pause();
    let frozen = state.clone();
    for _ in 0..50 {
        step(&mut state, &config, &settings, frame);
    }
    assert_eq!(state, frozen);

    settings.toggle_pause();
    step(&mut state, &config, &settings, frame);
    assert_eq!(state.steps, 51);
    assert_ne!(state.rotation(), frozen.rotation());
}

#[test]
fn independent_instances_run_in_parallel() {
    let config = SimulationConfig {
        ball_count: 10,
        ..Default::default()
    };
    let settings = GlobalSettings::default();
    let frame = FrameSize::square(400.0);

    let run = |seed: u64| {
        let mut state = SimulationState::seeded(&config, seed).unwrap();
        for _ in 0..300 {
            step(&mut state, &config, &settings, frame);
        }
        state
    };

    let sequential: Vec<_> = (0..4).map(run).collect();
    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|seed| s.spawn(move || run(seed))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn extreme_settings_do_not_panic() {
    let config = SimulationConfig {
        ball_count: 20,
        ..Default::default()
    };
    let frame = FrameSize::square(300.0);
    let settings = GlobalSettings {
        time_scale: 40.0,
        gravity_multiplier: 100.0,
        rotation_multiplier: -50.0,
        bounciness_multiplier: 5.0,
    };
    let mut state = SimulationState::seeded(&config, 31337).unwrap();

    for _ in 0..200 {
        step(&mut state, &config, &settings, frame);
    }
    assert_eq!(state.steps, 200);
    assert_eq!(state.bodies().len(), 20);
}

//! Map a synthetic pose-landmark set from a rotated front camera onto a
//! portrait overlay and print where each landmark lands.

use frame_transform::{
    FitMode, FrameSize, LensFacing, OverlayMapper, SurfaceRotation, TransformConfig,
};
use nalgebra::Point2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Typical phone setup: landscape sensor, portrait display, front lens.
    let mut config = TransformConfig::new(FrameSize::new(1280, 720), FrameSize::new(1080, 1920));
    config.sensor_orientation = 270;
    config.display_rotation = SurfaceRotation::Rotation0.degrees();
    config.front_facing = LensFacing::Front.is_front();
    config.fit_mode = FitMode::CenterCrop;

    let mapper = OverlayMapper::new(&config)?;
    let result = mapper.result();
    log::info!(
        "effective rotation {}°, scale {:.3}x{:.3}",
        result.effective_rotation,
        result.scale_x,
        result.scale_y
    );

    // Nose, shoulders, hips of a centered subject, in sensor pixels.
    let landmarks = [
        ("nose", Point2::new(640.0, 200.0)),
        ("left_shoulder", Point2::new(520.0, 330.0)),
        ("right_shoulder", Point2::new(760.0, 330.0)),
        ("left_hip", Point2::new(560.0, 560.0)),
        ("right_hip", Point2::new(720.0, 560.0)),
    ];

    for (name, p) in landmarks {
        let mapped = mapper.map(p);
        println!("{name:>15}: ({:6.1}, {:6.1}) -> ({:6.1}, {:6.1})", p.x, p.y, mapped.x, mapped.y);
    }

    Ok(())
}

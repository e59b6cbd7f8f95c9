#![allow(dead_code)]

use formcheck::{Activity, Exercise, Joint, Point, Snapshot};
use Joint::*;

pub fn snap(points: &[(Joint, f32, f32)]) -> Snapshot {
    points
        .iter()
        .map(|&(joint, x, y)| (joint, Point::new(x, y)))
        .collect()
}

/// Returns a copy with `joint` moved to (x, y), keeping its depth.
pub fn moved(snapshot: Snapshot, joint: Joint, x: f32, y: f32) -> Snapshot {
    let z = snapshot.get(joint).map_or(0.0, |p| p.z);
    snapshot.with(joint, Point::with_depth(x, y, z))
}

/// Shifts every listed joint horizontally by `dx`.
pub fn shifted(snapshot: Snapshot, joints: &[Joint], dx: f32) -> Snapshot {
    joints.iter().fold(snapshot, |s, &j| match s.get(j) {
        Some(p) => s.with(j, Point::with_depth(p.x + dx, p.y, p.z)),
        None => s,
    })
}

pub const UPPER_BODY: [Joint; 9] = [
    Nose,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
];

// --- NOMINAL POSES (every metric inside its band) ---

/// Side view, facing +x, mid-stride.
pub fn running() -> Snapshot {
    snap(&[
        (Nose, 0.53, 0.20),
        (LeftEar, 0.51, 0.21),
        (RightEar, 0.50, 0.21),
        (LeftShoulder, 0.52, 0.30),
        (RightShoulder, 0.50, 0.30),
        (LeftElbow, 0.52, 0.40),
        (RightElbow, 0.50, 0.40),
        (LeftWrist, 0.60, 0.40),
        (RightWrist, 0.42, 0.40),
        (LeftHip, 0.50, 0.50),
        (RightHip, 0.48, 0.50),
        (LeftKnee, 0.56, 0.62),
        (RightKnee, 0.49, 0.70),
        (LeftAnkle, 0.50, 0.72),
        (RightAnkle, 0.48, 0.88),
        (LeftHeel, 0.49, 0.73),
        (RightHeel, 0.47, 0.89),
        (LeftFootIndex, 0.53, 0.74),
        (RightFootIndex, 0.51, 0.90),
    ])
}

/// Front view at the bottom of the squat; thighs point toward the camera.
pub fn squat() -> Snapshot {
    snap(&[
        (Nose, 0.50, 0.25),
        (LeftEar, 0.46, 0.24),
        (RightEar, 0.54, 0.24),
        (LeftShoulder, 0.40, 0.35),
        (RightShoulder, 0.60, 0.35),
        (LeftElbow, 0.36, 0.42),
        (RightElbow, 0.64, 0.42),
        (LeftWrist, 0.38, 0.34),
        (RightWrist, 0.62, 0.34),
        (LeftAnkle, 0.41, 0.85),
        (RightAnkle, 0.59, 0.85),
        (LeftHeel, 0.41, 0.88),
        (RightHeel, 0.59, 0.88),
    ])
    .with(LeftHip, Point::with_depth(0.42, 0.60, -0.05))
    .with(RightHip, Point::with_depth(0.58, 0.60, -0.05))
    .with(LeftKnee, Point::with_depth(0.40, 0.62, 0.15))
    .with(RightKnee, Point::with_depth(0.60, 0.62, 0.15))
    .with(LeftFootIndex, Point::with_depth(0.40, 0.88, 0.05))
    .with(RightFootIndex, Point::with_depth(0.60, 0.88, 0.05))
}

/// Side view, facing +x, bar just below the knees.
pub fn deadlift() -> Snapshot {
    snap(&[
        (Nose, 0.62, 0.43),
        (LeftEar, 0.60, 0.41),
        (RightEar, 0.60, 0.41),
        (LeftShoulder, 0.55, 0.45),
        (RightShoulder, 0.54, 0.45),
        (LeftElbow, 0.55, 0.57),
        (RightElbow, 0.54, 0.57),
        (LeftWrist, 0.55, 0.70),
        (RightWrist, 0.54, 0.70),
        (LeftHip, 0.40, 0.55),
        (RightHip, 0.40, 0.55),
        (LeftKnee, 0.55, 0.68),
        (RightKnee, 0.54, 0.68),
        (LeftAnkle, 0.50, 0.85),
        (RightAnkle, 0.50, 0.85),
        (LeftHeel, 0.46, 0.86),
        (RightHeel, 0.46, 0.86),
        (LeftFootIndex, 0.58, 0.86),
        (RightFootIndex, 0.58, 0.86),
    ])
}

/// Overhead camera, bar at the chest.
pub fn bench_press() -> Snapshot {
    snap(&[
        (Nose, 0.50, 0.22),
        (LeftEar, 0.47, 0.22),
        (RightEar, 0.53, 0.22),
        (LeftShoulder, 0.40, 0.30),
        (RightShoulder, 0.60, 0.30),
        (LeftElbow, 0.30, 0.40),
        (RightElbow, 0.70, 0.40),
        (LeftWrist, 0.30, 0.36),
        (RightWrist, 0.70, 0.36),
        (LeftHip, 0.43, 0.60),
        (RightHip, 0.57, 0.60),
        (LeftKnee, 0.42, 0.75),
        (RightKnee, 0.58, 0.75),
        (LeftAnkle, 0.40, 0.90),
        (RightAnkle, 0.60, 0.90),
        (LeftHeel, 0.40, 0.92),
        (RightHeel, 0.60, 0.92),
        (LeftFootIndex, 0.40, 0.88),
        (RightFootIndex, 0.60, 0.88),
    ])
}

/// Side view, facing +x, locked out overhead.
pub fn overhead_press() -> Snapshot {
    snap(&[
        (Nose, 0.53, 0.33),
        (LeftEar, 0.51, 0.32),
        (RightEar, 0.50, 0.32),
        (LeftShoulder, 0.50, 0.40),
        (RightShoulder, 0.49, 0.40),
        (LeftElbow, 0.50, 0.25),
        (RightElbow, 0.49, 0.25),
        (LeftWrist, 0.50, 0.12),
        (RightWrist, 0.49, 0.12),
        (LeftHip, 0.50, 0.65),
        (RightHip, 0.49, 0.65),
        (LeftKnee, 0.50, 0.78),
        (RightKnee, 0.49, 0.78),
        (LeftAnkle, 0.50, 0.92),
        (RightAnkle, 0.49, 0.92),
        (LeftHeel, 0.47, 0.94),
        (RightHeel, 0.46, 0.94),
        (LeftFootIndex, 0.55, 0.94),
        (RightFootIndex, 0.54, 0.94),
    ])
}

/// Side view, facing +x, hinged over with the bar below the chest.
pub fn barbell_row() -> Snapshot {
    snap(&[
        (Nose, 0.70, 0.44),
        (LeftEar, 0.67, 0.42),
        (RightEar, 0.67, 0.42),
        (LeftShoulder, 0.62, 0.45),
        (RightShoulder, 0.62, 0.45),
        (LeftElbow, 0.55, 0.50),
        (RightElbow, 0.55, 0.50),
        (LeftWrist, 0.58, 0.62),
        (RightWrist, 0.58, 0.62),
        (LeftHip, 0.40, 0.55),
        (RightHip, 0.40, 0.55),
        (LeftKnee, 0.50, 0.70),
        (RightKnee, 0.50, 0.70),
        (LeftAnkle, 0.45, 0.88),
        (RightAnkle, 0.45, 0.88),
        (LeftHeel, 0.42, 0.90),
        (RightHeel, 0.42, 0.90),
        (LeftFootIndex, 0.52, 0.90),
        (RightFootIndex, 0.52, 0.90),
    ])
}

/// Side view, facing +x, left leg forward at the bottom.
pub fn lunge() -> Snapshot {
    snap(&[
        (Nose, 0.52, 0.20),
        (LeftEar, 0.50, 0.19),
        (RightEar, 0.49, 0.19),
        (LeftShoulder, 0.49, 0.30),
        (RightShoulder, 0.48, 0.30),
        (LeftElbow, 0.49, 0.42),
        (RightElbow, 0.48, 0.42),
        (LeftWrist, 0.49, 0.52),
        (RightWrist, 0.48, 0.52),
        (LeftHip, 0.48, 0.55),
        (RightHip, 0.47, 0.55),
        (LeftKnee, 0.62, 0.56),
        (RightKnee, 0.42, 0.75),
        (LeftAnkle, 0.62, 0.80),
        (RightAnkle, 0.30, 0.78),
        (LeftHeel, 0.59, 0.82),
        (RightHeel, 0.29, 0.80),
        (LeftFootIndex, 0.68, 0.82),
        (RightFootIndex, 0.33, 0.82),
    ])
}

/// Side view, head toward -x, straight-arm plank.
pub fn plank() -> Snapshot {
    snap(&[
        (Nose, 0.22, 0.495),
        (LeftEar, 0.25, 0.48),
        (RightEar, 0.25, 0.48),
        (LeftShoulder, 0.30, 0.50),
        (RightShoulder, 0.30, 0.50),
        (LeftElbow, 0.30, 0.60),
        (RightElbow, 0.30, 0.60),
        (LeftWrist, 0.30, 0.70),
        (RightWrist, 0.30, 0.70),
        (LeftHip, 0.55, 0.52),
        (RightHip, 0.55, 0.52),
        (LeftKnee, 0.70, 0.535),
        (RightKnee, 0.70, 0.535),
        (LeftAnkle, 0.85, 0.55),
        (RightAnkle, 0.85, 0.55),
        (LeftHeel, 0.86, 0.53),
        (RightHeel, 0.86, 0.53),
        (LeftFootIndex, 0.88, 0.57),
        (RightFootIndex, 0.88, 0.57),
    ])
}

/// Side view, head toward -x, bottom of the rep.
pub fn push_up() -> Snapshot {
    snap(&[
        (Nose, 0.22, 0.59),
        (LeftEar, 0.25, 0.59),
        (RightEar, 0.25, 0.59),
        (LeftShoulder, 0.30, 0.60),
        (RightShoulder, 0.30, 0.60),
        (LeftElbow, 0.37, 0.56),
        (RightElbow, 0.37, 0.56),
        (LeftWrist, 0.31, 0.72),
        (RightWrist, 0.31, 0.72),
        (LeftHip, 0.55, 0.62),
        (RightHip, 0.55, 0.62),
        (LeftKnee, 0.70, 0.63),
        (RightKnee, 0.70, 0.63),
        (LeftAnkle, 0.85, 0.64),
        (RightAnkle, 0.85, 0.64),
        (LeftHeel, 0.86, 0.62),
        (RightHeel, 0.86, 0.62),
        (LeftFootIndex, 0.88, 0.66),
        (RightFootIndex, 0.88, 0.66),
    ])
}

pub fn nominal(activity: Activity) -> Snapshot {
    match activity {
        Activity::Running => running(),
        Activity::Gym(exercise) => match exercise {
            Exercise::Squat => squat(),
            Exercise::Deadlift => deadlift(),
            Exercise::BenchPress => bench_press(),
            Exercise::OverheadPress => overhead_press(),
            Exercise::BarbellRow => barbell_row(),
            Exercise::Lunge => lunge(),
            Exercise::Plank => plank(),
            Exercise::PushUp => push_up(),
        },
    }
}

/// Squat with both knees bent to `degrees`, legs swung toward the camera so
/// the hips stay where they are in the image.
pub fn squat_with_knee_angle(degrees: f32) -> Snapshot {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [(LeftHip, LeftKnee, LeftAnkle, 0.42), (RightHip, RightKnee, RightAnkle, 0.58)]
        .into_iter()
        .fold(squat(), |s, (hip, knee, ankle, x)| {
            s.with(knee, Point::new(x, 0.62))
                .with(ankle, Point::new(x, 0.85))
                .with(hip, Point::with_depth(x, 0.62 + 0.2 * cos, 0.2 * sin))
        })
}

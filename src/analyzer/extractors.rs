//! One pure function per biomechanical signal.
//!
//! Every extractor returns `None` when a joint it needs was not detected.
//! The rule tables decide what neutral value stands in for a `None`, so an
//! incomplete pose never produces a false positive.

use super::rules::Frame;
use crate::geometry::{
    angle_between, distance_2d, lean_from_vertical, percent_of, perpendicular_offset,
    projection_ratio, tilt_from_horizontal, MIN_REFERENCE,
};
use crate::landmarks::{Joint, Point, Snapshot};

/// How far (frame fraction) the heel must sit above the toes to count as
/// lifted.
pub const HEEL_RISE_TOLERANCE: f32 = 0.02;

/// Hip and knee angles at or above this are considered locked out.
pub const LOCKOUT_ANGLE: f32 = 165.0;

/// Lockout is only judged once the torso is this close to vertical.
pub const STANDING_LEAN: f32 = 20.0;

/// Minimum horizontal separation used to infer which way the athlete faces.
const FACING_EPSILON: f32 = 1e-3;

/// A left/right joint pair must spread at least this fraction of the torso
/// length across the image before the camera counts as facing the athlete.
pub const FRONTAL_WIDTH_RATIO: f32 = 0.3;

struct Side {
    shoulder: Joint,
    elbow: Joint,
    wrist: Joint,
    hip: Joint,
    knee: Joint,
    ankle: Joint,
    heel: Joint,
    foot_index: Joint,
}

const LEFT: Side = Side {
    shoulder: Joint::LeftShoulder,
    elbow: Joint::LeftElbow,
    wrist: Joint::LeftWrist,
    hip: Joint::LeftHip,
    knee: Joint::LeftKnee,
    ankle: Joint::LeftAnkle,
    heel: Joint::LeftHeel,
    foot_index: Joint::LeftFootIndex,
};

const RIGHT: Side = Side {
    shoulder: Joint::RightShoulder,
    elbow: Joint::RightElbow,
    wrist: Joint::RightWrist,
    hip: Joint::RightHip,
    knee: Joint::RightKnee,
    ankle: Joint::RightAnkle,
    heel: Joint::RightHeel,
    foot_index: Joint::RightFootIndex,
};

const SIDES: [Side; 2] = [LEFT, RIGHT];

// --- shared helpers ---

fn joint_angle(s: &Snapshot, a: Joint, b: Joint, c: Joint) -> Option<f32> {
    Some(angle_between(s.get(a)?, s.get(b)?, s.get(c)?))
}

fn mean(values: impl Iterator<Item = f32>) -> Option<f32> {
    let (sum, count) = values.fold((0.0f32, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / count as f32)
}

fn shoulder_mid(s: &Snapshot) -> Option<Point> {
    s.midpoint(Joint::LeftShoulder, Joint::RightShoulder)
}

fn hip_mid(s: &Snapshot) -> Option<Point> {
    s.midpoint(Joint::LeftHip, Joint::RightHip)
}

fn knee_mid(s: &Snapshot) -> Option<Point> {
    s.midpoint(Joint::LeftKnee, Joint::RightKnee)
}

fn ankle_mid(s: &Snapshot) -> Option<Point> {
    s.midpoint(Joint::LeftAnkle, Joint::RightAnkle)
}

fn wrist_mid(s: &Snapshot) -> Option<Point> {
    s.midpoint(Joint::LeftWrist, Joint::RightWrist)
}

fn elbow_mid(s: &Snapshot) -> Option<Point> {
    s.midpoint(Joint::LeftElbow, Joint::RightElbow)
}

fn ear_mid(s: &Snapshot) -> Option<Point> {
    s.midpoint(Joint::LeftEar, Joint::RightEar)
}

fn foot_index_mid(s: &Snapshot) -> Option<Point> {
    s.midpoint(Joint::LeftFootIndex, Joint::RightFootIndex)
}

/// Shoulder-midpoint to hip-midpoint distance, the reference length for
/// side-view offsets.
fn torso_length(s: &Snapshot) -> Option<f32> {
    let len = distance_2d(shoulder_mid(s)?, hip_mid(s)?);
    (len >= MIN_REFERENCE).then_some(len)
}

/// Horizontal spread of a left/right pair. `None` when the pair is too
/// narrow for a frontal view, which means the camera is side-on.
fn frontal_width(s: &Snapshot, left: Joint, right: Joint) -> Option<f32> {
    let width = (s.get(left)?.x - s.get(right)?.x).abs();
    (width >= torso_length(s)? * FRONTAL_WIDTH_RATIO).then_some(width)
}

fn knee_angles(s: &Snapshot) -> impl Iterator<Item = f32> + '_ {
    SIDES
        .iter()
        .filter_map(move |side| joint_angle(s, side.hip, side.knee, side.ankle))
}

fn elbow_angles(s: &Snapshot) -> impl Iterator<Item = f32> + '_ {
    SIDES
        .iter()
        .filter_map(move |side| joint_angle(s, side.shoulder, side.elbow, side.wrist))
}

/// +1.0 when the athlete faces +x, -1.0 when facing -x. Uses the nose
/// relative to the hips, then the direction the feet point.
fn facing(s: &Snapshot) -> Option<f32> {
    if let (Some(nose), Some(hips)) = (s.get(Joint::Nose), hip_mid(s)) {
        let dx = nose.x - hips.x;
        if dx.abs() > FACING_EPSILON {
            return Some(dx.signum());
        }
    }
    SIDES.iter().find_map(|side| {
        let dx = s.get(side.foot_index)?.x - s.get(side.heel)?.x;
        (dx.abs() > FACING_EPSILON).then(|| dx.signum())
    })
}

/// The leading leg in a split stance: the side whose knee sits higher in
/// the frame.
fn front_side(s: &Snapshot) -> Option<&'static Side> {
    SIDES
        .iter()
        .filter_map(|side| s.get(side.knee).map(|knee| (side, knee.y)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(side, _)| side)
}

/// Deviation of the shoulder–hip–ankle chain from a straight line, and
/// whether the hip sits below that line.
fn body_line(s: &Snapshot) -> Option<(f32, bool)> {
    let shoulder = shoulder_mid(s)?;
    let hip = hip_mid(s)?;
    let ankle = ankle_mid(s)?;

    let deviation = 180.0 - angle_between(shoulder, hip, ankle);
    let run = ankle.x - shoulder.x;
    let sagging = if run.abs() < MIN_REFERENCE {
        false
    } else {
        let line_y = shoulder.y + (ankle.y - shoulder.y) * (hip.x - shoulder.x) / run;
        hip.y > line_y
    };
    Some((deviation, sagging))
}

// --- torso & shoulders ---

/// Torso angle from vertical, degrees.
pub fn torso_lean(f: &Frame<'_>) -> Option<f32> {
    Some(lean_from_vertical(shoulder_mid(f.snapshot)?, hip_mid(f.snapshot)?))
}

/// Vertical shoulder difference as a frame fraction.
pub fn shoulder_level(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    Some((s.get(Joint::LeftShoulder)?.y - s.get(Joint::RightShoulder)?.y).abs())
}

/// Vertical shoulder difference as a percentage of frame height.
pub fn shoulder_alignment(f: &Frame<'_>) -> Option<f32> {
    shoulder_level(f).map(|d| d * 100.0)
}

/// Ear–shoulder–hip deviation from a straight line, degrees.
pub fn spine_deviation(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    Some(180.0 - angle_between(ear_mid(s)?, shoulder_mid(s)?, hip_mid(s)?))
}

/// Distance of the nose from the extended hip→shoulder line, % of torso.
pub fn head_offset(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    let offset = perpendicular_offset(s.get(Joint::Nose)?, hip_mid(s)?, shoulder_mid(s)?);
    percent_of(offset.abs(), torso_length(s)?)
}

// --- arms ---

/// Mean shoulder–elbow–wrist angle over detected arms.
pub fn elbow_angle(f: &Frame<'_>) -> Option<f32> {
    mean(elbow_angles(f.snapshot))
}

/// Left/right elbow angle difference, % of the larger angle.
pub fn arm_swing_symmetry(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    let left = joint_angle(s, LEFT.shoulder, LEFT.elbow, LEFT.wrist)?;
    let right = joint_angle(s, RIGHT.shoulder, RIGHT.elbow, RIGHT.wrist)?;
    Some(percent_of((left - right).abs(), left.max(right)).unwrap_or(0.0))
}

/// How far a wrist crosses the shoulder midline, % of shoulder width.
/// Frontal views only.
pub fn arm_crossover(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    let width = frontal_width(s, Joint::LeftShoulder, Joint::RightShoulder)?;
    let mid_x = shoulder_mid(s)?.x;

    let crossing = SIDES
        .iter()
        .filter_map(|side| {
            let outward = (s.get(side.shoulder)?.x - mid_x).signum();
            let wrist = s.get(side.wrist)?;
            Some((mid_x - wrist.x) * outward)
        })
        .reduce(f32::max)?;

    percent_of(crossing.max(0.0), width)
}

/// Mean hip–shoulder–elbow angle: how far the upper arms open from the torso.
pub fn elbow_flare(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    mean(
        SIDES
            .iter()
            .filter_map(|side| joint_angle(s, side.hip, side.shoulder, side.elbow)),
    )
}

/// Horizontal wrist-to-elbow offset, % of forearm length (worst side).
pub fn wrist_stack(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    SIDES
        .iter()
        .filter_map(|side| {
            let elbow = s.get(side.elbow)?;
            let wrist = s.get(side.wrist)?;
            percent_of((wrist.x - elbow.x).abs(), distance_2d(elbow, wrist))
        })
        .reduce(f32::max)
}

/// Wrist spacing over shoulder spacing.
pub fn grip_width(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    let wrists = (s.get(Joint::LeftWrist)?.x - s.get(Joint::RightWrist)?.x).abs();
    let shoulders = (s.get(Joint::LeftShoulder)?.x - s.get(Joint::RightShoulder)?.x).abs();
    percent_of(wrists, shoulders).map(|pct| pct / 100.0)
}

/// Where the bar (wrist midpoint) lands along the shoulder→hip axis,
/// % of torso length.
pub fn touch_point(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    projection_ratio(wrist_mid(s)?, shoulder_mid(s)?, hip_mid(s)?).map(|r| r * 100.0)
}

/// Horizontal bar offset from the shoulders, % of torso length.
pub fn bar_over_shoulders(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    let offset = (wrist_mid(s)?.x - shoulder_mid(s)?.x).abs();
    percent_of(offset, torso_length(s)?)
}

/// Horizontal bar offset from mid-foot, % of torso length.
pub fn bar_over_midfoot(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    let midfoot_x = (ankle_mid(s)?.x + foot_index_mid(s)?.x) * 0.5;
    let offset = (wrist_mid(s)?.x - midfoot_x).abs();
    percent_of(offset, torso_length(s)?)
}

/// Horizontal shoulder offset from the support point, % of torso length.
/// Falls back to the elbows (forearm plank) when no wrist is detected.
pub fn support_stack(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    let support = wrist_mid(s).or_else(|| elbow_mid(s))?;
    let offset = (shoulder_mid(s)?.x - support.x).abs();
    percent_of(offset, torso_length(s)?)
}

/// As `support_stack`, hands only.
pub fn hand_stack(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    let offset = (shoulder_mid(s)?.x - wrist_mid(s)?.x).abs();
    percent_of(offset, torso_length(s)?)
}

/// Pressing lockout: once the hands are overhead, are the elbows straight?
pub fn press_lockout_incomplete(f: &Frame<'_>) -> Option<bool> {
    let s = f.snapshot;
    if wrist_mid(s)?.y >= s.get(Joint::Nose)?.y {
        return Some(false);
    }
    Some(elbow_angle(f)? < LOCKOUT_ANGLE)
}

// --- hips & legs ---

/// Hip line angle from horizontal, degrees. Frontal views only.
pub fn hip_tilt(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    frontal_width(s, Joint::LeftHip, Joint::RightHip)?;
    Some(tilt_from_horizontal(s.get(Joint::LeftHip)?, s.get(Joint::RightHip)?))
}

/// Shoulder–hip–knee angle.
pub fn hip_hinge(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    Some(angle_between(shoulder_mid(s)?, hip_mid(s)?, knee_mid(s)?))
}

/// Mean hip–knee–ankle angle over detected legs.
pub fn knee_angle(f: &Frame<'_>) -> Option<f32> {
    mean(knee_angles(f.snapshot))
}

/// Most flexed knee, the swing leg during a stride.
pub fn knee_drive(f: &Frame<'_>) -> Option<f32> {
    knee_angles(f.snapshot).reduce(f32::min)
}

/// How much narrower the knees are than the ankles, % of ankle width.
pub fn knee_cave(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    let knees = (s.get(Joint::LeftKnee)?.x - s.get(Joint::RightKnee)?.x).abs();
    let ankles = (s.get(Joint::LeftAnkle)?.x - s.get(Joint::RightAnkle)?.x).abs();
    percent_of((ankles - knees).max(0.0), ankles)
}

/// Leading ankle landing ahead of the hips, % of leg length.
pub fn overstride(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    let hips = hip_mid(s)?;
    let leg = distance_2d(hips, ankle_mid(s)?);
    let dir = facing(s)?;

    let reach = SIDES
        .iter()
        .filter_map(|side| s.get(side.ankle).map(|ankle| (ankle.x - hips.x) * dir))
        .reduce(f32::max)?;

    percent_of(reach.max(0.0), leg)
}

pub fn heel_rise(f: &Frame<'_>) -> Option<bool> {
    let s = f.snapshot;
    let mut measured = false;
    for side in &SIDES {
        if let (Some(heel), Some(toe)) = (s.get(side.heel), s.get(side.foot_index)) {
            measured = true;
            if heel.y < toe.y - HEEL_RISE_TOLERANCE {
                return Some(true);
            }
        }
    }
    measured.then_some(false)
}

/// Pulling lockout: only judged in the standing phase, where both the hip
/// and the knees must be open.
pub fn pull_lockout_incomplete(f: &Frame<'_>) -> Option<bool> {
    if torso_lean(f)? >= STANDING_LEAN {
        return Some(false);
    }
    Some(hip_hinge(f)? < LOCKOUT_ANGLE || knee_angle(f)? < LOCKOUT_ANGLE)
}

/// Knee angle of the leading leg.
pub fn front_knee_angle(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    let side = front_side(s)?;
    joint_angle(s, side.hip, side.knee, side.ankle)
}

/// Leading knee travel past its toes, % of shin length.
pub fn knee_over_toe(f: &Frame<'_>) -> Option<f32> {
    let s = f.snapshot;
    let side = front_side(s)?;
    let knee = s.get(side.knee)?;
    let toe = s.get(side.foot_index)?;
    let dir = toe.x - s.get(side.heel)?.x;
    if dir.abs() <= FACING_EPSILON {
        return None;
    }
    let travel = (knee.x - toe.x) * dir.signum();
    percent_of(travel.max(0.0), distance_2d(knee, s.get(side.ankle)?))
}

pub fn hip_sag(f: &Frame<'_>) -> Option<f32> {
    body_line(f.snapshot).map(|(dev, sagging)| if sagging { dev } else { 0.0 })
}

pub fn hip_pike(f: &Frame<'_>) -> Option<f32> {
    body_line(f.snapshot).map(|(dev, sagging)| if sagging { 0.0 } else { dev })
}

// --- derived signals ---

pub fn vertical_oscillation(f: &Frame<'_>) -> Option<f32> {
    f.signals.vertical_oscillation_cm
}

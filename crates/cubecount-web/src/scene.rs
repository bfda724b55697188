//! Turns a set of cells into painter-ordered face quads for the canvas.

use cubecount_core::types::Cell;
use glam::{IVec3, Vec2, Vec3};

use crate::camera::IsoCamera;

/// A cube face: outward normal and its four corners as unit-cube offsets,
/// wound consistently around the face.
struct FaceDef {
    normal: IVec3,
    corners: [Vec3; 4],
    shade: f32,
}

const FACES: [FaceDef; 6] = [
    FaceDef {
        normal: IVec3::X,
        corners: [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ],
        shade: 0.8,
    },
    FaceDef {
        normal: IVec3::NEG_X,
        corners: [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
        shade: 0.8,
    },
    FaceDef {
        normal: IVec3::Y,
        corners: [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 0.0),
        ],
        shade: 1.0,
    },
    FaceDef {
        normal: IVec3::NEG_Y,
        corners: [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ],
        shade: 0.4,
    },
    FaceDef {
        normal: IVec3::Z,
        corners: [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        ],
        shade: 0.62,
    },
    FaceDef {
        normal: IVec3::NEG_Z,
        corners: [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ],
        shade: 0.62,
    },
];

/// A projected face ready to fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    pub points: [Vec2; 4],
    /// Relative brightness, 0..=1.
    pub shade: f32,
}

/// Build the faces to paint, back to front.
///
/// Cubes are ordered by the depth of their centers, which is exact for
/// equal unit cubes on a grid under an orthographic view. Faces turned away
/// from the viewer and faces pressed against a neighbouring cube are skipped.
pub fn build_quads(cells: &[Cell], camera: &IsoCamera, width: f32, height: f32) -> Vec<Quad> {
    let occupied: std::collections::HashSet<IVec3> = cells.iter().map(|c| c.to_ivec3()).collect();
    let to_viewer = camera.to_viewer();

    let mut ordered: Vec<Cell> = cells.to_vec();
    ordered.sort_by(|a, b| {
        camera
            .depth(a.center())
            .total_cmp(&camera.depth(b.center()))
    });

    let mut quads = Vec::with_capacity(ordered.len() * 3);
    for cell in ordered {
        let origin = cell.to_ivec3();
        for face in &FACES {
            if face.normal.as_vec3().dot(to_viewer) <= 1e-4 {
                continue;
            }
            if occupied.contains(&(origin + face.normal)) {
                continue;
            }
            let base = origin.as_vec3();
            let points = face
                .corners
                .map(|corner| camera.project(base + corner, width, height));
            quads.push(Quad {
                points,
                shade: face.shade,
            });
        }
    }
    quads
}

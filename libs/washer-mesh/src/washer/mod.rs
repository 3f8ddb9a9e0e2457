//! # Washer Builder
//!
//! Sweeps the washer cross-section around the Z axis and emits oriented
//! triangles.
//!
//! ## Construction phases
//!
//! ```text
//! per angular step:  top face, bottom face, outer wall, inner wall
//! quarter slice:     + flat cap at each end of the sweep
//! ```
//!
//! Every triangle is created in an arbitrary winding together with an
//! outward hint vector; [`Triangle::oriented`] fixes the winding. The hint
//! is the only place outward orientation is decided.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec3;
use serde::Serialize;

use crate::mesh::{circle_point, Mesh, Triangle};
use crate::params::{MeshOptions, Slice, WasherParams};

/// Summary of a generated washer, for reporting only.
///
/// Serializes with camelCase keys for JavaScript consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshMeta {
    pub outer_diameter: f64,
    pub inner_diameter: f64,
    pub thickness: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub segments: u32,
    pub sweep_segments: u32,
    pub slice: Slice,
    pub triangle_count: usize,
}

/// A built washer mesh together with its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct WasherMesh {
    pub mesh: Mesh,
    pub meta: MeshMeta,
}

/// Builds the washer mesh for validated inputs.
///
/// Triangle counts: `8` per sweep step for an annulus, `4` for a solid
/// disk, plus `4` end-cap triangles for a quarter slice.
///
/// # Example
///
/// ```rust
/// use washer_mesh::{build_washer_mesh, MeshOptions, Slice, WasherParams};
///
/// let params = WasherParams::new(30.0, 10.0, 2.0).unwrap();
/// let built = build_washer_mesh(&params, &MeshOptions::default());
/// assert_eq!(built.meta.triangle_count, 8 * 128);
///
/// let quarter = MeshOptions { segments: 12, slice: Slice::Quarter };
/// let disk = WasherParams::new(20.0, 0.0, 5.0).unwrap();
/// let built = build_washer_mesh(&disk, &quarter);
/// assert_eq!(built.meta.sweep_segments, 3);
/// assert_eq!(built.meta.triangle_count, 16);
/// ```
pub fn build_washer_mesh(params: &WasherParams, options: &MeshOptions) -> WasherMesh {
    let sweep = Sweep::new(params, options);
    let mut mesh = Mesh::with_capacity(sweep.triangle_capacity());
    sweep.emit(|triangle, hint| mesh.add_oriented(triangle, hint));

    let meta = MeshMeta {
        outer_diameter: params.outer_diameter(),
        inner_diameter: params.inner_diameter(),
        thickness: params.thickness(),
        outer_radius: sweep.outer_radius,
        inner_radius: sweep.inner_radius,
        segments: options.segments,
        sweep_segments: sweep.steps,
        slice: options.slice,
        triangle_count: mesh.triangle_count(),
    };

    WasherMesh { mesh, meta }
}

/// Geometry of one angular sweep.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sweep {
    outer_radius: f64,
    inner_radius: f64,
    z_bottom: f64,
    z_top: f64,
    angle_start: f64,
    angle_span: f64,
    steps: u32,
    slice: Slice,
}

impl Sweep {
    pub(crate) fn new(params: &WasherParams, options: &MeshOptions) -> Self {
        let angle_span = match options.slice {
            Slice::Full => TAU,
            Slice::Quarter => FRAC_PI_2,
        };
        Self {
            outer_radius: params.outer_radius(),
            inner_radius: params.inner_radius(),
            z_bottom: 0.0,
            z_top: params.thickness(),
            angle_start: 0.0,
            angle_span,
            steps: options.sweep_segments(),
            slice: options.slice,
        }
    }

    fn has_hole(&self) -> bool {
        self.inner_radius > 0.0
    }

    fn triangle_capacity(&self) -> usize {
        let per_step = if self.has_hole() { 8 } else { 4 };
        let caps = if self.slice == Slice::Quarter { 4 } else { 0 };
        self.steps as usize * per_step + caps
    }

    /// Angle of the boundary between step `index - 1` and step `index`.
    ///
    /// Neighbouring steps evaluate the same expression for a shared
    /// boundary, so shared edges have bit-identical vertices.
    fn angle_at(&self, index: u32) -> f64 {
        self.angle_start + (f64::from(index) / f64::from(self.steps)) * self.angle_span
    }

    /// Emits every triangle, unoriented, with its outward hint.
    pub(crate) fn emit(&self, mut emit: impl FnMut(Triangle, DVec3)) {
        for step in 0..self.steps {
            let a0 = self.angle_at(step);
            let a1 = self.angle_at(step + 1);
            if self.has_hole() {
                self.emit_annulus_step(a0, a1, &mut emit);
            } else {
                self.emit_disk_step(a0, a1, &mut emit);
            }
        }

        if self.slice == Slice::Quarter {
            self.emit_end_caps(&mut emit);
        }
    }

    fn emit_annulus_step(&self, a0: f64, a1: f64, emit: &mut impl FnMut(Triangle, DVec3)) {
        let (r_out, r_in) = (self.outer_radius, self.inner_radius);
        let (zb, zt) = (self.z_bottom, self.z_top);

        let outer_bottom0 = circle_point(r_out, a0, zb);
        let outer_bottom1 = circle_point(r_out, a1, zb);
        let outer_top0 = circle_point(r_out, a0, zt);
        let outer_top1 = circle_point(r_out, a1, zt);
        let inner_bottom0 = circle_point(r_in, a0, zb);
        let inner_bottom1 = circle_point(r_in, a1, zb);
        let inner_top0 = circle_point(r_in, a0, zt);
        let inner_top1 = circle_point(r_in, a1, zt);

        emit(Triangle::new(outer_top0, outer_top1, inner_top1), DVec3::Z);
        emit(Triangle::new(outer_top0, inner_top1, inner_top0), DVec3::Z);
        emit(Triangle::new(outer_bottom0, inner_bottom1, outer_bottom1), DVec3::NEG_Z);
        emit(Triangle::new(outer_bottom0, inner_bottom0, inner_bottom1), DVec3::NEG_Z);

        let outward = radial(a0, a1);
        let inward = -outward;
        emit(Triangle::new(outer_bottom0, outer_bottom1, outer_top1), outward);
        emit(Triangle::new(outer_bottom0, outer_top1, outer_top0), outward);
        emit(Triangle::new(inner_bottom0, inner_top1, inner_bottom1), inward);
        emit(Triangle::new(inner_bottom0, inner_top0, inner_top1), inward);
    }

    // Solid disk: top and bottom fan out from the axis, no inner wall.
    fn emit_disk_step(&self, a0: f64, a1: f64, emit: &mut impl FnMut(Triangle, DVec3)) {
        let r_out = self.outer_radius;
        let (zb, zt) = (self.z_bottom, self.z_top);

        let outer_bottom0 = circle_point(r_out, a0, zb);
        let outer_bottom1 = circle_point(r_out, a1, zb);
        let outer_top0 = circle_point(r_out, a0, zt);
        let outer_top1 = circle_point(r_out, a1, zt);
        let center_top = DVec3::new(0.0, 0.0, zt);
        let center_bottom = DVec3::new(0.0, 0.0, zb);

        emit(Triangle::new(center_top, outer_top0, outer_top1), DVec3::Z);
        emit(Triangle::new(center_bottom, outer_bottom1, outer_bottom0), DVec3::NEG_Z);

        let outward = radial(a0, a1);
        emit(Triangle::new(outer_bottom0, outer_bottom1, outer_top1), outward);
        emit(Triangle::new(outer_bottom0, outer_top1, outer_top0), outward);
    }

    /// Closes the two flat faces exposed by a partial sweep.
    ///
    /// For a disk the inner radius is zero and the cap spans from the axis
    /// to the outer wall.
    fn emit_end_caps(&self, emit: &mut impl FnMut(Triangle, DVec3)) {
        let boundaries = [
            (self.angle_at(0), 1.0),
            (self.angle_at(self.steps), -1.0),
        ];

        for (angle, side) in boundaries {
            let outer_bottom = circle_point(self.outer_radius, angle, self.z_bottom);
            let outer_top = circle_point(self.outer_radius, angle, self.z_top);
            let inner_bottom = circle_point(self.inner_radius, angle, self.z_bottom);
            let inner_top = circle_point(self.inner_radius, angle, self.z_top);

            // Tangent at `angle`, pointing away from the swept interior.
            let hint = DVec3::new(angle.sin(), -angle.cos(), 0.0) * side;

            emit(Triangle::new(outer_bottom, outer_top, inner_top), hint);
            emit(Triangle::new(outer_bottom, inner_top, inner_bottom), hint);
        }
    }
}

/// Outward radial direction at the middle of `[a0, a1]`.
fn radial(a0: f64, a1: f64) -> DVec3 {
    let mid = (a0 + a1) / 2.0;
    DVec3::new(mid.cos(), mid.sin(), 0.0)
}

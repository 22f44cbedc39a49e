//! Perspective command - right-handed projection with [-1, 1] depth

use anyhow::{Context, Result};
use hmath::{Mat4, try_perspective};
use tracing::{debug, info, trace};

use super::{Settings, print_mat4};
use crate::PerspectiveArgs;

pub fn run(args: PerspectiveArgs, settings: Settings) -> Result<()> {
    let m = build(&args, settings)?;
    print_mat4(&m, settings)
}

fn build(args: &PerspectiveArgs, settings: Settings) -> Result<Mat4> {
    trace!(fov = args.fov, aspect = args.aspect, near = args.near, far = args.far, "perspective::run");

    let fov = settings.angle(args.fov);
    info!(fov_rad = fov, aspect = args.aspect, near = args.near, far = args.far, "Building perspective");

    let m = try_perspective(fov, args.aspect, args.near, args.far)
        .context("Cannot build perspective projection")?;
    debug!(matrix = ?m, "Projection");
    Ok(m)
}

//! Look-at command - right-handed view matrix

use anyhow::{Result, ensure};
use hmath::{Mat4, look_at, look_at_basis};
use tracing::{debug, info, trace};

use super::{Settings, parse_vec3, print_mat4};
use crate::LookAtArgs;

pub fn run(args: LookAtArgs, settings: Settings) -> Result<()> {
    let m = build(&args)?;
    print_mat4(&m, settings)
}

fn build(args: &LookAtArgs) -> Result<Mat4> {
    trace!(eye = %args.eye, center = %args.center, up = %args.up, "look_at::run");

    let eye = parse_vec3(&args.eye)?;
    let center = parse_vec3(&args.center)?;
    let up = parse_vec3(&args.up)?;
    info!(?eye, ?center, ?up, "Building view matrix");

    let basis = look_at_basis(eye, center, up);
    debug!(side = ?basis.side, up = ?basis.up, view_dir = ?basis.view_dir, "Camera basis");
    ensure!(
        basis.side.is_finite() && basis.view_dir.is_finite(),
        "Degenerate camera: eye equals center or up is parallel to the view direction"
    );

    Ok(look_at(eye, center, up))
}

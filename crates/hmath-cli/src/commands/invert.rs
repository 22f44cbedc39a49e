//! Invert command

use anyhow::{Context, Result};
use hmath::{Mat4, try_inverse};
use tracing::{debug, info, trace};

use super::{Settings, parse_mat4, print_mat4};
use crate::InvertArgs;

pub fn run(args: InvertArgs, settings: Settings) -> Result<()> {
    let m = build(&args)?;
    print_mat4(&m, settings)
}

fn build(args: &InvertArgs) -> Result<Mat4> {
    trace!(matrix = %args.matrix, "invert::run");

    let m = parse_mat4(&args.matrix)?;
    info!(determinant = m.determinant(), "Inverting matrix");

    let inv = try_inverse(m).context("Matrix cannot be inverted")?;
    debug!(inverse = ?inv, "Inverse");
    Ok(inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmath::Vec4;

    #[test]
    fn test_build_translation() {
        let args = InvertArgs {
            matrix: "1,0,0,0,0,1,0,0,0,0,1,0,3,4,5,1".into(),
        };
        let inv = build(&args).unwrap();
        assert_eq!(inv.w(), Vec4::new(-3.0, -4.0, -5.0, 1.0));
    }

    #[test]
    fn test_build_singular() {
        let args = InvertArgs {
            matrix: "1,0,0,0,2,0,0,0,0,0,1,0,0,0,0,1".into(),
        };
        let err = build(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("singular"));
    }
}

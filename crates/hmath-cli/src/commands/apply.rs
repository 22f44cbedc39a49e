//! Apply command - multiply a point by a matrix

use anyhow::Result;
use hmath::Vec4;
use tracing::{debug, info, trace};

use super::{Settings, parse_mat4, parse_point, print_vec4};
use crate::ApplyArgs;

pub fn run(args: ApplyArgs, settings: Settings) -> Result<()> {
    let v = build(&args)?;
    print_vec4(v, settings)
}

fn build(args: &ApplyArgs) -> Result<Vec4> {
    trace!(matrix = %args.matrix, point = %args.point, "apply::run");

    let m = parse_mat4(&args.matrix)?;
    let p = parse_point(&args.point)?;
    info!(point = ?p, "Applying matrix");

    let out = m * p;
    debug!(result = ?out, "Transformed");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSLATE: &str = "1,0,0,0,0,1,0,0,0,0,1,0,3,4,5,1";

    #[test]
    fn test_point_picks_up_translation() {
        let args = ApplyArgs {
            matrix: TRANSLATE.into(),
            point: "1,1,1".into(),
        };
        assert_eq!(build(&args).unwrap(), Vec4::new(4.0, 5.0, 6.0, 1.0));
    }

    #[test]
    fn test_direction_ignores_translation() {
        let args = ApplyArgs {
            matrix: TRANSLATE.into(),
            point: "1,1,1,0".into(),
        };
        assert_eq!(build(&args).unwrap(), Vec4::new(1.0, 1.0, 1.0, 0.0));
    }
}

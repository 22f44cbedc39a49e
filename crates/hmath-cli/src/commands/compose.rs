//! Compose command - chain object transforms onto the identity.
//!
//! Each op right-multiplies the running matrix, so the last op listed is
//! the first one a point goes through:
//!
//! ```text
//! hmath compose t:0,1,0 rz:90 --degrees   =>   T(0,1,0) * Rz(90)
//! ```

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use hmath::{Mat4, rotate_x, rotate_y, rotate_z, scale, translate};
use tracing::{debug, info, trace};

use super::{Settings, parse_floats, parse_vec3, print_mat4};
use crate::ComposeArgs;

/// One step of a compose chain. Angles are kept as typed.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    RotateX(f32),
    RotateY(f32),
    RotateZ(f32),
    Translate(f32, f32, f32),
    Scale(f32),
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Op '{}' is missing ':' (expected e.g. rx:30)", s))?;

        let scalar = || -> Result<f32> {
            match parse_floats(value)?.as_slice() {
                &[v] => Ok(v),
                other => bail!("'{}' takes one value, got {}", kind, other.len()),
            }
        };

        let op = match kind.to_ascii_lowercase().as_str() {
            "rx" => Op::RotateX(scalar()?),
            "ry" => Op::RotateY(scalar()?),
            "rz" => Op::RotateZ(scalar()?),
            "t" => {
                let v = parse_vec3(value)?;
                Op::Translate(v.x, v.y, v.z)
            }
            "s" => Op::Scale(scalar()?),
            other => bail!("Unknown op '{}' (use rx, ry, rz, t or s)", other),
        };
        Ok(op)
    }
}

impl Op {
    fn apply(self, m: Mat4, settings: Settings) -> Mat4 {
        match self {
            Op::RotateX(a) => rotate_x(m, settings.angle(a)),
            Op::RotateY(a) => rotate_y(m, settings.angle(a)),
            Op::RotateZ(a) => rotate_z(m, settings.angle(a)),
            Op::Translate(x, y, z) => translate(m, x, y, z),
            Op::Scale(k) => scale(m, k),
        }
    }
}

pub fn run(args: ComposeArgs, settings: Settings) -> Result<()> {
    let m = build(&args.ops, settings)?;
    print_mat4(&m, settings)
}

fn build(ops: &[String], settings: Settings) -> Result<Mat4> {
    trace!(ops = ?ops, "compose::run");

    let ops = ops
        .iter()
        .map(|s| s.parse::<Op>().with_context(|| format!("Bad op '{}'", s)))
        .collect::<Result<Vec<_>>>()?;
    info!(count = ops.len(), degrees = settings.degrees, "Composing transforms");

    let m = ops.iter().fold(Mat4::IDENTITY, |m, op| {
        let next = op.apply(m, settings);
        debug!(op = ?op, matrix = ?next, "Applied");
        next
    });
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmath::Vec4;

    fn ops(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_ops() {
        assert_eq!("rx:30".parse::<Op>().unwrap(), Op::RotateX(30.0));
        assert_eq!("RY:-1.5".parse::<Op>().unwrap(), Op::RotateY(-1.5));
        assert_eq!("t:1,-2,3".parse::<Op>().unwrap(), Op::Translate(1.0, -2.0, 3.0));
        assert_eq!("s:2".parse::<Op>().unwrap(), Op::Scale(2.0));
    }

    #[test]
    fn test_parse_ops_errors() {
        assert!("rx".parse::<Op>().is_err());
        assert!("rw:1".parse::<Op>().is_err());
        assert!("rx:1,2".parse::<Op>().is_err());
        assert!("t:1,2".parse::<Op>().is_err());
    }

    #[test]
    fn test_build_order() {
        let settings = Settings { degrees: true, ..Default::default() };
        let m = build(&ops(&["t:5,0,0", "rz:90"]), settings).unwrap();
        // Rotation applies first, then the translation.
        let p = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p.x - 5.0).abs() < 1e-5);
        assert!((p.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_build_matches_direct_calls() {
        let m = build(&ops(&["ry:0.5", "s:3", "t:0,1,0"]), Settings::default()).unwrap();
        let expected = translate(scale(rotate_y(Mat4::IDENTITY, 0.5), 3.0), 0.0, 1.0, 0.0);
        assert_eq!(m, expected);
    }

    #[test]
    fn test_build_reports_bad_op() {
        let err = build(&ops(&["rx:1", "q:2"]), Settings::default()).unwrap_err();
        assert!(err.to_string().contains("q:2"));
    }
}

//! Identity command

use anyhow::Result;
use hmath::Mat4;
use tracing::info;

use super::{Settings, print_mat4};

pub fn run(settings: Settings) -> Result<()> {
    info!("Printing identity");
    print_mat4(&Mat4::IDENTITY, settings)
}

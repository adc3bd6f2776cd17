//! Filters command implementation

use crate::render;
use anyhow::Result;

/// List every filter and sort value with its label
pub fn filters() -> Result<()> {
    println!("{}", render::render_filters());
    Ok(())
}

use crate::context::Context;
use anyhow::{Context as AnyhowContext, Result};
use serde_json::json;

pub struct NormalizeCommand;

impl NormalizeCommand {
    /// Print `id` re-cased to its canonical form
    pub fn execute(ctx: &Context, id: &str, type_name: Option<&str>) -> Result<()> {
        let normalized = ctx
            .registry
            .normalize(id, type_name)
            .context("Failed to normalize ID")?;

        if ctx.json() {
            let value = json!({ "input": id, "id": normalized, "changed": normalized != id });
            ctx.output.plain(&serde_json::to_string_pretty(&value)?);
        } else {
            ctx.output.plain(&normalized);
        }

        Ok(())
    }
}

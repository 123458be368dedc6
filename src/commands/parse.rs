use crate::context::Context;
use anyhow::{Context as AnyhowContext, Result};
use serde_json::json;

pub struct ParseCommand;

impl ParseCommand {
    /// Parse `id` as `type_name` and print its segment values
    pub fn execute(ctx: &Context, type_name: &str, id: &str, insensitive: bool) -> Result<()> {
        let insensitive = insensitive || ctx.config.spec.insensitive;

        let definition = ctx.registry.get(type_name)?;
        let result = ctx
            .registry
            .parse(type_name, id, insensitive)
            .with_context(|| format!("Failed to parse {} ID", type_name))?;
        let canonical = ctx.registry.format(type_name, &result.parsed)?;

        if ctx.json() {
            let value = json!({
                "type": definition.name,
                "id": canonical,
                "values": result.parsed,
            });
            ctx.output.plain(&serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        ctx.output.section(&definition.description);
        for label in definition.labels() {
            if let Some(value) = result.get(label) {
                ctx.output.key_value(label, value);
            }
        }
        ctx.output.key_value_highlight("id", &canonical);

        Ok(())
    }
}

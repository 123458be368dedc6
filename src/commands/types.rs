use crate::context::Context;
use crate::registry::{ANY_RESOURCE_ID, ANY_RESOURCE_ID_OR_EMPTY};
use anyhow::Result;
use serde_json::json;

pub struct TypesCommand;

impl TypesCommand {
    /// List the registered identifier types, or the segments of one
    pub fn execute(ctx: &Context, name: Option<&str>) -> Result<()> {
        match name {
            Some(name) => Self::show(ctx, name),
            None => Self::list(ctx),
        }
    }

    fn list(ctx: &Context) -> Result<()> {
        let definitions = ctx.registry.list();

        if ctx.json() {
            let value: Vec<_> = definitions
                .iter()
                .map(|d| {
                    json!({
                        "name": d.name,
                        "description": d.description,
                        "example": d.example(),
                        "labels": d.labels(),
                    })
                })
                .collect();
            ctx.output.plain(&serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        ctx.output.section("ID types");
        for definition in &definitions {
            ctx.output
                .type_card(&definition.name, &definition.description, &definition.example());
        }

        ctx.output.blank();
        ctx.output.dimmed(&format!(
            "`armid validate` also accepts {} and {} for any ARM resource ID",
            ANY_RESOURCE_ID, ANY_RESOURCE_ID_OR_EMPTY
        ));

        if let Some(source) = &ctx.config.source {
            ctx.output.blank();
            ctx.output
                .dimmed(&format!("Including types configured in {}", source.display()));
        }

        Ok(())
    }

    fn show(ctx: &Context, name: &str) -> Result<()> {
        let definition = ctx.registry.get(name)?;

        if ctx.json() {
            let segments: Vec<_> = definition
                .segments
                .iter()
                .map(|s| {
                    json!({
                        "kind": s.kind.as_str(),
                        "label": s.label,
                        "value": s.fixed_value,
                        "values": s.possible_values,
                        "example": s.example_value,
                    })
                })
                .collect();
            let value = json!({
                "name": definition.name,
                "description": definition.description,
                "segments": segments,
            });
            ctx.output.plain(&serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        ctx.output.section(&definition.name);
        ctx.output.key_value("Kind", &definition.description);
        ctx.output.key_value("Example", &definition.example());
        ctx.output.blank();
        ctx.output.table_header(&["Kind", "Label", "Value"]);

        for segment in &definition.segments {
            let value = match &segment.fixed_value {
                Some(value) => value.to_string(),
                None if !segment.possible_values.is_empty() => segment.possible_values.join(" | "),
                None => String::new(),
            };
            ctx.output
                .table_row(&[segment.kind.as_str(), &*segment.label, value.as_str()]);
        }

        Ok(())
    }
}

use crate::context::Context;
use crate::polymorphic::decode_named;
use anyhow::{Context as AnyhowContext, Result};
use serde_json::json;
use std::io::Read;
use std::path::Path;

pub struct DecodeCommand;

impl DecodeCommand {
    /// Decode a payload from `file`, or stdin when no file is given
    pub fn execute(ctx: &Context, union: &str, file: Option<&Path>) -> Result<()> {
        let input = match file {
            Some(path) => ctx.fs.read_to_string(path)?,
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read payload from stdin")?;
                buffer
            }
        };

        Self::execute_input(ctx, union, &input)
    }

    /// Decode `input` as the named union and print the canonical payload
    pub fn execute_input(ctx: &Context, union: &str, input: &str) -> Result<()> {
        let decoded = decode_named(union, input)
            .with_context(|| format!("Failed to decode {} payload", union))?;

        let Some(decoded) = decoded else {
            if ctx.json() {
                ctx.output.plain("null");
            } else {
                ctx.output.warning("The payload has no discriminator; nothing to decode");
            }
            return Ok(());
        };

        if ctx.json() {
            let value = json!({
                "discriminator": decoded.discriminator,
                "known": decoded.known,
                "payload": decoded.value,
            });
            ctx.output.plain(&serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        ctx.output
            .key_value_highlight("Discriminator", &decoded.discriminator);
        if !decoded.known {
            ctx.output.warning(&format!(
                "{} is not a known {} model; the payload was kept as received",
                decoded.discriminator, union
            ));
        }
        ctx.output.plain(&serde_json::to_string_pretty(&decoded.value)?);

        Ok(())
    }
}

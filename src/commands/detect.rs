use crate::context::Context;
use anyhow::{Result, bail};
use serde_json::json;

pub struct DetectCommand;

impl DetectCommand {
    /// List the identifier types `id` parses as, ignoring casing
    pub fn execute(ctx: &Context, id: &str) -> Result<()> {
        let matches = ctx.registry.detect(id);

        if matches.is_empty() {
            bail!("{:?} does not match any known ID type", id);
        }

        if ctx.json() {
            ctx.output
                .plain(&serde_json::to_string_pretty(&json!({ "id": id, "types": matches }))?);
            return Ok(());
        }

        for name in &matches {
            ctx.output.plain(name);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::traits::{MockFileSystem, MockOutput};
    use std::sync::Arc;

    #[test]
    fn test_detect_lists_matches() {
        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(Arc::new(MockFileSystem::new()), output.clone(), Config::default());

        DetectCommand::execute(
            &ctx,
            "/subscriptions/00000000-0000-0000-0000-000000000000/resourcegroups/rg1/providers/microsoft.keyvault/vaults/v1",
        )
        .unwrap();

        assert_eq!(output.get_plain(), vec!["KeyVaultId"]);
    }

    #[test]
    fn test_detect_no_match() {
        let ctx = Context::test();
        assert!(DetectCommand::execute(&ctx, "/tenants/abc").is_err());
    }
}

use crate::context::Context;
use anyhow::{Result, bail};
use serde_json::json;
use std::collections::BTreeMap;

pub struct FormatCommand;

impl FormatCommand {
    /// Render the canonical ID of `type_name` from `label=value` pairs
    pub fn execute(ctx: &Context, type_name: &str, assignments: &[String]) -> Result<()> {
        let definition = ctx.registry.get(type_name)?;
        let labels = definition.labels();

        let mut values = BTreeMap::new();
        for pair in assignments {
            let Some((label, value)) = pair.split_once('=') else {
                bail!("Invalid value format: {} (use LABEL=VALUE)", pair);
            };

            if !labels.contains(&label) {
                bail!(
                    "{} has no segment labelled {} (expected one of {})",
                    type_name,
                    label,
                    labels.join(", ")
                );
            }

            values.insert(label.to_string(), value.to_string());
        }

        let id = ctx.registry.format(type_name, &values)?;

        if ctx.json() {
            ctx.output
                .plain(&serde_json::to_string_pretty(&json!({ "type": type_name, "id": id }))?);
        } else {
            ctx.output.plain(&id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockFileSystem, MockOutput};
    use crate::config::Config;
    use std::sync::Arc;

    fn set(pairs: &[&str]) -> Vec<String> {
        pairs.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_format_project_id() {
        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(Arc::new(MockFileSystem::new()), output.clone(), Config::default());

        FormatCommand::execute(
            &ctx,
            "ProjectId",
            &set(&[
                "subscriptionId=00000000-0000-0000-0000-000000000000",
                "resourceGroupName=resGroup1",
                "serviceName=service1",
                "projectName=project1",
            ]),
        )
        .unwrap();

        assert_eq!(
            output.get_plain(),
            vec!["/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.DataMigration/services/service1/projects/project1"]
        );
    }

    #[test]
    fn test_format_scoped_linker() {
        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(Arc::new(MockFileSystem::new()), output.clone(), Config::default());

        FormatCommand::execute(
            &ctx,
            "ScopedLinkerId",
            &set(&["resourceUri=/subscriptions/sub1/resourceGroups/rg1/", "linkerName=l1"]),
        )
        .unwrap();

        assert_eq!(
            output.get_plain(),
            vec!["/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.ServiceLinker/linkers/l1"]
        );
    }

    #[test]
    fn test_format_missing_value() {
        let ctx = Context::test();
        let err = FormatCommand::execute(&ctx, "ServiceId", &set(&["serviceName=s1"])).unwrap_err();
        assert!(err.to_string().contains("subscriptionId"));
    }

    #[test]
    fn test_format_output_always_reparses() {
        let ctx = Context::test();

        let err = FormatCommand::execute(
            &ctx,
            "NestedItemId",
            &set(&[
                "keyVaultBaseUrl=https://v.vault.azure.net",
                "nestedItemType=blobs",
                "name=n",
                "version=v1",
            ]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("should be one of [certificates, keys, secrets, storage]"));

        let err = FormatCommand::execute(
            &ctx,
            "ServiceId",
            &set(&[
                "subscriptionId=00000000-0000-0000-0000-000000000000",
                "resourceGroupName=rg1",
                "serviceName=a/b",
            ]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("must not contain '/'"));
    }

    #[test]
    fn test_format_recases_constant() {
        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(Arc::new(MockFileSystem::new()), output.clone(), Config::default());

        FormatCommand::execute(
            &ctx,
            "VersionlessNestedItemId",
            &set(&[
                "keyVaultBaseUrl=https://v.vault.azure.net/",
                "nestedItemType=KEYS",
                "name=k1",
            ]),
        )
        .unwrap();

        assert_eq!(output.get_plain(), vec!["https://v.vault.azure.net/keys/k1"]);
    }

    #[test]
    fn test_format_rejects_bad_assignments() {
        let ctx = Context::test();

        let err = FormatCommand::execute(&ctx, "ServiceId", &set(&["serviceName"])).unwrap_err();
        assert!(err.to_string().contains("Invalid value format"));

        let err = FormatCommand::execute(&ctx, "ServiceId", &set(&["vaultName=v1"])).unwrap_err();
        assert!(err.to_string().contains("no segment labelled vaultName"));
    }
}

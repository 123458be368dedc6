use crate::context::Context;
use anyhow::{Result, bail};
use serde_json::{Value, json};

pub struct ValidateCommand;

impl ValidateCommand {
    /// Validate `raw` as a configuration value of `type_name`.
    ///
    /// With `as_json` the value is read as a JSON literal, so non-string
    /// values can be checked the way a decoded config file would supply them.
    pub fn execute(
        ctx: &Context,
        type_name: &str,
        raw: &str,
        key: &str,
        as_json: bool,
        insensitive: bool,
    ) -> Result<()> {
        let value = if as_json {
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
        } else {
            Value::String(raw.to_string())
        };

        let insensitive = insensitive || ctx.config.spec.insensitive;
        let (warnings, errors) = ctx.registry.validate(type_name, &value, key, insensitive)?;

        if ctx.json() {
            let report = json!({
                "key": key,
                "valid": errors.is_empty(),
                "warnings": warnings,
                "errors": errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
            });
            ctx.output.plain(&serde_json::to_string_pretty(&report)?);
        } else {
            for warning in &warnings {
                ctx.output.warning(warning);
            }
            for error in &errors {
                ctx.output.error(&error.to_string());
            }
        }

        if !errors.is_empty() {
            bail!("{} is not a valid {}", key, type_name);
        }

        if !ctx.json() {
            ctx.output.success(&format!("{} is a valid {}", key, type_name));
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

    fn context() -> (Context, Arc<MockOutput>) {
        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(Arc::new(MockFileSystem::new()), output.clone(), Config::default());
        (ctx, output)
    }

    #[test]
    fn test_validate_valid_value() {
        let (ctx, output) = context();

        ValidateCommand::execute(
            &ctx,
            "ResourceGroupId",
            "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg1",
            "resource_group_id",
            false,
            false,
        )
        .unwrap();

        assert!(output.has_success());
        assert!(output.get_warnings().is_empty());
    }

    #[test]
    fn test_validate_warns_on_non_guid_subscription() {
        let (ctx, output) = context();

        ValidateCommand::execute(
            &ctx,
            "ResourceGroupId",
            "/subscriptions/not-a-guid/resourceGroups/rg1",
            "resource_group_id",
            false,
            false,
        )
        .unwrap();

        assert_eq!(output.get_warnings().len(), 1);
    }

    #[test]
    fn test_validate_non_string_value() {
        let (ctx, output) = context();

        let err = ValidateCommand::execute(&ctx, "ServiceId", "42", "service_id", true, false)
            .unwrap_err();

        assert!(err.to_string().contains("service_id is not a valid ServiceId"));
        assert_eq!(
            output.get_errors(),
            vec!["service_id: expected service_id to be a string"]
        );
    }

    #[test]
    fn test_validate_bad_resource_group_name() {
        let (ctx, output) = context();

        let result = ValidateCommand::execute(
            &ctx,
            "ResourceGroupId",
            "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg1.",
            "resource_group_id",
            false,
            false,
        );

        assert!(result.is_err());
        assert_eq!(output.get_errors().len(), 1);
    }

    #[test]
    fn test_validate_any_resource_id() {
        let (ctx, output) = context();

        ValidateCommand::execute(
            &ctx,
            "ResourceId",
            "/Subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg1/providers/Microsoft.Web/sites/s1",
            "target_resource_id",
            false,
            false,
        )
        .unwrap();
        assert!(output.has_success());

        let result = ValidateCommand::execute(
            &ctx,
            "ResourceId",
            "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups",
            "target_resource_id",
            false,
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_any_resource_id_or_empty() {
        let (ctx, output) = context();

        ValidateCommand::execute(&ctx, "ResourceIdOrEmpty", "", "target_resource_id", false, false)
            .unwrap();
        assert!(output.has_success());

        assert!(
            ValidateCommand::execute(&ctx, "ResourceId", "", "target_resource_id", false, false)
                .is_err()
        );
    }
}

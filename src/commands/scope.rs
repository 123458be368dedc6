use crate::context::Context;
use crate::scope::classify_scope;
use anyhow::Result;
use serde_json::json;

pub struct ScopeCommand;

impl ScopeCommand {
    /// Classify `id` as a management group, subscription, resource group or resource scope
    pub fn execute(ctx: &Context, id: &str) -> Result<()> {
        let scope = classify_scope(id)?;

        if ctx.json() {
            let value = json!({
                "scope": scope.scope_type().to_string(),
                "id": scope.id(),
                "managementGroupId": scope.management_group_id(),
                "subscriptionId": scope.subscription_id(),
                "resourceGroupName": scope.resource_group(),
            });
            ctx.output.plain(&serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        ctx.output
            .key_value_highlight("Scope", &scope.scope_type().to_string());
        if let Some(group) = scope.management_group_id() {
            ctx.output.key_value("Management group", group);
        }
        if let Some(subscription) = scope.subscription_id() {
            ctx.output.key_value("Subscription", subscription);
        }
        if let Some(resource_group) = scope.resource_group() {
            ctx.output.key_value("Resource group", resource_group);
        }
        ctx.output.lavender(&scope.id());

        Ok(())
    }
}

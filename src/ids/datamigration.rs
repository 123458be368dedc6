//! Database Migration Service identifiers

use crate::resource_id;
use crate::resourceids::Segment;

resource_id! {
    /// ServiceId is a struct representing the Resource ID for a Database Migration Service
    pub struct ServiceId("Service") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        service_name => "serviceName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftDataMigration", "Microsoft.DataMigration"),
        Segment::static_segment("staticServices", "services"),
        Segment::user_specified("serviceName", "serviceValue"),
    ]
}

resource_id! {
    /// ProjectId is a struct representing the Resource ID for a Database Migration Project
    pub struct ProjectId("Project") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        service_name => "serviceName",
        project_name => "projectName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftDataMigration", "Microsoft.DataMigration"),
        Segment::static_segment("staticServices", "services"),
        Segment::user_specified("serviceName", "serviceValue"),
        Segment::static_segment("staticProjects", "projects"),
        Segment::user_specified("projectName", "projectValue"),
    ]
}

resource_id! {
    /// TaskId is a struct representing the Resource ID for a Database Migration Task
    pub struct TaskId("Task") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        service_name => "serviceName",
        project_name => "projectName",
        task_name => "taskName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftDataMigration", "Microsoft.DataMigration"),
        Segment::static_segment("staticServices", "services"),
        Segment::user_specified("serviceName", "serviceValue"),
        Segment::static_segment("staticProjects", "projects"),
        Segment::user_specified("projectName", "projectValue"),
        Segment::static_segment("staticTasks", "tasks"),
        Segment::user_specified("taskName", "taskValue"),
    ]
}

impl ProjectId {
    /// The migration service that owns this project
    pub fn service(&self) -> ServiceId {
        ServiceId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.service_name.clone(),
        )
    }
}

impl TaskId {
    /// The project that owns this task
    pub fn project(&self) -> ProjectId {
        ProjectId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.service_name.clone(),
            self.project_name.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resourceids::{ParseErrorKind, ResourceId};
    use serde_json::json;

    const SUB: &str = "00000000-0000-0000-0000-000000000000";

    fn project_input() -> String {
        format!(
            "/subscriptions/{}/resourceGroups/resGroup1/providers/Microsoft.Datamigration/services/service1/projects/project1",
            SUB
        )
    }

    #[test]
    fn test_parse_project_id() {
        let id = ProjectId::parse(&project_input()).unwrap();

        assert_eq!(id.subscription_id, SUB);
        assert_eq!(id.resource_group_name, "resGroup1");
        assert_eq!(id.service_name, "service1");
        assert_eq!(id.project_name, "project1");
    }

    #[test]
    fn test_project_id_missing_provider() {
        let input = format!(
            "/subscriptions/{}/resourceGroups/resGroup1/services/service1",
            SUB
        );

        assert!(ProjectId::parse(&input).is_err());
        assert!(ProjectId::parse_insensitively(&input).is_err());
    }

    #[test]
    fn test_project_id_static_casing() {
        let input = project_input().replace("/services/", "/Services/");

        let err = ProjectId::parse(&input).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::SegmentMismatch { .. }));
        assert_eq!(err.id_type, "Project");

        let id = ProjectId::parse_insensitively(&input).unwrap();
        assert_eq!(id, ProjectId::new(SUB, "resGroup1", "service1", "project1"));
    }

    #[test]
    fn test_format_project_id() {
        let id = ProjectId::new(SUB, "resGroup1", "service1", "project1");

        assert_eq!(
            id.id(),
            project_input().replace("Microsoft.Datamigration", "Microsoft.DataMigration")
        );
    }

    #[test]
    fn test_project_id_rejects_malformed_input() {
        assert!(ProjectId::parse("").is_err());

        let missing_name = format!(
            "/subscriptions/{}/resourceGroups/resGroup1/providers/Microsoft.DataMigration/services/service1/projects",
            SUB
        );
        assert!(ProjectId::parse(&missing_name).is_err());

        let too_long = format!("{}/tasks/task1", project_input());
        assert!(ProjectId::parse(&too_long).is_err());
    }

    #[test]
    fn test_task_id_parents() {
        let id = TaskId::new(SUB, "resGroup1", "service1", "project1", "task1");
        let parsed = TaskId::parse(&id.id()).unwrap();

        assert_eq!(parsed, id);
        assert_eq!(parsed.project().service(), ServiceId::new(SUB, "resGroup1", "service1"));
    }

    #[test]
    fn test_validate_service_id() {
        let (_, errors) = ServiceId::validate(&json!(12), "service_id");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, "service_id");

        let valid = json!(ServiceId::new(SUB, "resGroup1", "service1").id());
        let (warnings, errors) = ServiceId::validate(&valid, "service_id");
        assert!(warnings.is_empty());
        assert!(errors.is_empty());
    }
}

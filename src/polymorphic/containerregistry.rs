//! Container registry task steps

use serde::{Deserialize, Serialize};

use crate::constants::StepType;

/// A build argument passed to a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_secret: Option<bool>,
}

/// A value overriding one in a task's values file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetValue {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_secret: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerBuildStep {
    pub docker_file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_push_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_cache: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<Argument>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedTaskStep {
    /// Base64 encoded task definition
    pub encoded_task_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoded_values_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<SetValue>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTaskStep {
    pub task_file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<SetValue>>,
}

polymorphic! {
    /// The step a registry task runs, keyed on `type`
    pub enum TaskStepProperties("type") {
        Docker(DockerBuildStep) => "Docker",
        EncodedTask(EncodedTaskStep) => "EncodedTask",
        FileTask(FileTaskStep) => "FileTask",
    }
}

impl TaskStepProperties {
    pub fn step_type(&self) -> StepType {
        StepType::from(self.discriminator())
    }

    /// The build context, for the steps which have one
    pub fn context_path(&self) -> Option<&str> {
        match self {
            TaskStepProperties::Docker(step) => step.context_path.as_deref(),
            TaskStepProperties::EncodedTask(step) => step.context_path.as_deref(),
            TaskStepProperties::FileTask(step) => step.context_path.as_deref(),
            TaskStepProperties::Unknown(raw) => {
                raw.values.get("contextPath").and_then(|v| v.as_str())
            }
        }
    }
}

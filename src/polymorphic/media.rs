//! Media Services encoding output formats

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFile {
    pub labels: Vec<String>,
}

/// Mp4 and transport stream outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiBitrateFormat {
    pub filename_pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_files: Option<Vec<OutputFile>>,
}

/// Thumbnail outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFormat {
    pub filename_pattern: String,
}

polymorphic! {
    /// An encoder output format, keyed on `@odata.type`
    pub enum Format("@odata.type") {
        Mp4(MultiBitrateFormat) => "#Microsoft.Media.Mp4Format",
        TransportStream(MultiBitrateFormat) => "#Microsoft.Media.TransportStreamFormat",
        Jpg(ImageFormat) => "#Microsoft.Media.JpgFormat",
        Png(ImageFormat) => "#Microsoft.Media.PngFormat",
    }
}

impl Format {
    pub fn filename_pattern(&self) -> Option<&str> {
        match self {
            Format::Mp4(format) | Format::TransportStream(format) => Some(format.filename_pattern.as_str()),
            Format::Jpg(format) | Format::Png(format) => Some(format.filename_pattern.as_str()),
            Format::Unknown(raw) => raw.values.get("filenamePattern").and_then(|v| v.as_str()),
        }
    }
}

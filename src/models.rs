use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/convert`. Missing and `null` fields both read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvertRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub target: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Successful reply of `POST /api/convert`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertResponse {
    #[serde(default)]
    pub original_text: String,
    pub converted_text: String,
    #[serde(default)]
    pub target: String,
}

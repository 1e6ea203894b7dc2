//! Topic — the structured presentation content requested from the model.

use schemars::{generate::SchemaSettings, JsonSchema};
use serde::{Deserialize, Deserializer, Serialize};

/// Presentation content for a single subject.
///
/// Missing or `null` fields decode to their empty value; only malformed JSON
/// or a wrongly typed value is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Topic {
    /// Presentation title.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Opening prose introducing the subject.
    #[serde(deserialize_with = "null_as_default")]
    pub introduction: String,
    /// Tools and technologies used.
    #[serde(deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
    /// Steps or approaches, in order.
    #[serde(deserialize_with = "null_as_default")]
    pub methodology: Vec<String>,
    /// Directions for future work.
    #[serde(deserialize_with = "null_as_default")]
    pub future_scope: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// JSON Schema sent as the `response_format` constraint.
///
/// Fully inlined (no `$defs`) with `additionalProperties: false` and every
/// property required. Both are advisory to the model only; `Topic` itself
/// ignores unknown fields and tolerates missing ones.
pub fn topic_schema() -> serde_json::Value {
    let mut settings = SchemaSettings::draft2020_12();
    settings.inline_subschemas = true;

    let mut schema = settings.into_generator().into_root_schema_for::<Topic>();
    let object = schema.ensure_object();
    object.remove("$schema");
    object.insert("additionalProperties".to_string(), false.into());

    // `#[serde(default)]` drops fields from `required`; the model must still send all of them.
    let required: Vec<serde_json::Value> = object
        .get("properties")
        .and_then(|p| p.as_object())
        .map(|props| props.keys().cloned().map(Into::into).collect())
        .unwrap_or_default();
    object.insert("required".to_string(), required.into());
    if let Some(props) = object.get_mut("properties").and_then(|p| p.as_object_mut()) {
        for prop in props.values_mut().filter_map(|p| p.as_object_mut()) {
            prop.remove("default");
        }
    }

    schema.to_value()
}

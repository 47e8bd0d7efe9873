//! YAML rendering of a pipeline template behind a fixed guidance banner.

use crate::core::error::AppError;
use crate::core::template::PipelineTemplate;
use crate::core::types::ErrorCategory;
use serde_json::Value;
use yaml_rust2::{Yaml, YamlEmitter};

/// Header written above every rendered template. Trailing spaces are part of the text.
pub const BANNER: &str = concat!(
    "# GENERATED BY spin-dcd-converter\n",
    "#\n",
    "# The output generated by this tool should be used as a base for further\n",
    "# modifications. It does not make assumptions as to what things can be made into\n",
    "# variables, modules or Jinja templates. This is your responsibility as the\n",
    "# owner of the template.\n",
    "#\n",
    "# Some recommendations to massage the initial output:\n",
    "#\n",
    "# * Give your pipeline template a unique ID. Typically it's best to namespace the\n",
    "#   template ID, e.g. \"myteam-mytemplate\".\n",
    "# * Rename the pipeline stage IDs, notification names and trigger names to be \n",
    "#   more meaningful. Enumerated stage IDs is ultimately a detriment for \n",
    "#   long-term maintainability.\n",
    "# * Best intentions are made to order most things, but the list of stages \n",
    "#   themselves are not ordered: Rearrange the stages so that they're roughly \n",
    "#   chronological.\n",
);

/// Render the banner followed by the block-style YAML body.
pub fn render(template: &PipelineTemplate) -> Result<String, AppError> {
    let body = render_body(template)?;
    Ok(format!("{}{}\n", BANNER, body))
}

/// Serialize the template alone. Keys come out in the order they are stored.
///
/// The emitter quotes plain scalars that YAML 1.1 loaders would resolve to
/// something other than a string (`yes`, `on`, `NO`, `~`, numeric text).
pub fn render_body(template: &PipelineTemplate) -> Result<String, AppError> {
    let tree = serde_json::to_value(template).map_err(|err| {
        AppError::with_source(
            ErrorCategory::SerializationError,
            format!("failed to serialize pipeline template: {}", err),
            Box::new(err),
        )
    })?;

    let mut out = String::new();
    YamlEmitter::new(&mut out)
        .dump(&to_yaml(&tree))
        .map_err(|err| {
            AppError::with_source(
                ErrorCategory::SerializationError,
                format!("failed to emit pipeline template: {}", err),
                Box::new(err),
            )
        })?;

    let body = out.strip_prefix("---\n").unwrap_or(&out);
    Ok(format!("{}\n", body))
}

fn to_yaml(value: &Value) -> Yaml {
    match value {
        Value::Null => Yaml::Null,
        Value::Bool(b) => Yaml::Boolean(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Yaml::Integer(i),
            None => Yaml::Real(n.to_string()),
        },
        Value::String(s) => Yaml::String(s.clone()),
        Value::Array(items) => Yaml::Array(items.iter().map(to_yaml).collect()),
        Value::Object(map) => Yaml::Hash(
            map.iter()
                .map(|(key, value)| (Yaml::String(key.clone()), to_yaml(value)))
                .collect(),
        ),
    }
}

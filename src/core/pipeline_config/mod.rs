//! Read-only views over a pipeline config as returned by the Spinnaker API.
//!
//! The source document is untyped JSON; these helpers pull out the fields the
//! converter needs and report the exact field path when something is missing or
//! has the wrong type. Nothing here clones or mutates the document.

use crate::core::error::AppError;
use serde_json::{Map, Value};

/// Borrowed view of the top-level pipeline config object.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig<'a> {
    root: &'a Map<String, Value>,
}

impl<'a> PipelineConfig<'a> {
    pub fn new(document: &'a Value) -> Result<Self, AppError> {
        let root = document
            .as_object()
            .ok_or_else(|| AppError::invalid_shape("<root>", "a JSON object"))?;
        Ok(Self { root })
    }

    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.root.get(field).filter(|value| !value.is_null())
    }

    /// Value of a field that must be present; `null` counts as absent.
    pub fn required(&self, field: &str) -> Result<&'a Value, AppError> {
        self.get(field).ok_or_else(|| AppError::missing_field(field))
    }

    pub fn required_str(&self, field: &str) -> Result<&'a str, AppError> {
        required_str_in(self.root, field, field)
    }

    pub fn optional_str(&self, field: &str) -> Result<Option<&'a str>, AppError> {
        optional_str_in(self.root, field, field)
    }

    /// Elements of an optional array field. Absent and `null` both read as empty.
    pub fn optional_array(&self, field: &str) -> Result<&'a [Value], AppError> {
        match self.get(field) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(AppError::invalid_shape(field, "an array")),
        }
    }

    /// All stages in source order.
    pub fn stages(&self) -> Result<Vec<SourceStage<'a>>, AppError> {
        let raw = match self.required("stages")? {
            Value::Array(items) => items,
            _ => return Err(AppError::invalid_shape("stages", "an array")),
        };
        raw.iter()
            .enumerate()
            .map(|(index, value)| SourceStage::parse(index, value))
            .collect()
    }
}

/// One entry of the source `stages` array with its structural fields extracted.
#[derive(Debug, Clone)]
pub struct SourceStage<'a> {
    pub index: usize,
    pub stage_type: &'a str,
    pub ref_id: &'a str,
    pub name: &'a str,
    pub requisite_ref_ids: Vec<&'a str>,
    raw: &'a Map<String, Value>,
}

impl<'a> SourceStage<'a> {
    fn parse(index: usize, value: &'a Value) -> Result<Self, AppError> {
        let path = format!("stages[{}]", index);
        let raw = value
            .as_object()
            .ok_or_else(|| AppError::invalid_shape(&path, "a JSON object"))?;

        let field_path = |field: &str| format!("{}.{}", path, field);
        let stage_type = required_str_in(raw, "type", &field_path("type"))?;
        let ref_id = required_str_in(raw, "refId", &field_path("refId"))?;
        let name = required_str_in(raw, "name", &field_path("name"))?;

        let requisite_path = field_path("requisiteStageRefIds");
        let requisite_ref_ids = match raw.get("requisiteStageRefIds") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(position, item)| {
                    item.as_str().ok_or_else(|| {
                        AppError::invalid_shape(
                            &format!("{}[{}]", requisite_path, position),
                            "a string",
                        )
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(AppError::invalid_shape(&requisite_path, "an array")),
        };

        Ok(Self {
            index,
            stage_type,
            ref_id,
            name,
            requisite_ref_ids,
            raw,
        })
    }

    /// The untouched source object, including the structural fields.
    pub fn raw(&self) -> &'a Map<String, Value> {
        self.raw
    }
}

fn required_str_in<'a>(
    map: &'a Map<String, Value>,
    field: &str,
    path: &str,
) -> Result<&'a str, AppError> {
    optional_str_in(map, field, path)?.ok_or_else(|| AppError::missing_field(path))
}

fn optional_str_in<'a>(
    map: &'a Map<String, Value>,
    field: &str,
    path: &str,
) -> Result<Option<&'a str>, AppError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(AppError::invalid_shape(path, "a string")),
    }
}

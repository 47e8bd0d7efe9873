use crate::core::error::AppError;
use serde_json::Value;

/// Copy triggers, naming each `unnamed<N>` by 1-based position.
pub fn convert_triggers(triggers: &[Value]) -> Result<Vec<Value>, AppError> {
    enumerate_named(triggers, "triggers", |_, _| Ok("unnamed".to_string()))
}

/// Copy notifications, naming each `<type><N>` by 1-based position.
pub fn convert_notifications(notifications: &[Value]) -> Result<Vec<Value>, AppError> {
    enumerate_named(notifications, "notifications", |path, notification| {
        match notification.get("type") {
            None | Some(Value::Null) => Err(AppError::missing_field(&format!("{}.type", path))),
            Some(Value::String(kind)) => Ok(kind.clone()),
            Some(_) => Err(AppError::invalid_shape(&format!("{}.type", path), "a string")),
        }
    })
}

fn enumerate_named<F>(items: &[Value], field: &str, prefix: F) -> Result<Vec<Value>, AppError>
where
    F: Fn(&str, &serde_json::Map<String, Value>) -> Result<String, AppError>,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<Value, AppError> {
            let path = format!("{}[{}]", field, index);
            let mut object = item
                .as_object()
                .ok_or_else(|| AppError::invalid_shape(&path, "a JSON object"))?
                .clone();
            let name = format!("{}{}", prefix(&path, &object)?, index + 1);
            object.insert("name".to_string(), Value::String(name));
            Ok(Value::Object(object))
        })
        .collect()
}

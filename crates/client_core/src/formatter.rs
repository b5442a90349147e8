//! Human-readable renderings of endpoint payloads. Formatting never fails.

use serde_json::Value;
use shared::protocol::{QuotePayload, WeatherPayload};

use crate::view::TargetId;

pub const MISSING_FIELD: &str = "N/A";
pub const MISSING_QUOTE: &str = "Contenido no disponible";
pub const UNKNOWN_AUTHOR: &str = "Autor desconocido";
const ERROR_HINT: &str = "Verifique la conexión con el servidor y vuelva a intentar.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormatter {
    Generic,
    Weather,
    Quote,
}

impl ResponseFormatter {
    pub fn for_target(target: TargetId) -> Self {
        match target {
            TargetId::GetGreeting | TargetId::PostGreeting => ResponseFormatter::Generic,
            TargetId::Weather => ResponseFormatter::Weather,
            TargetId::Quote => ResponseFormatter::Quote,
        }
    }

    pub fn format(self, payload: &Value) -> String {
        match self {
            ResponseFormatter::Generic => format_generic(payload),
            ResponseFormatter::Weather => format_weather(&WeatherPayload::from_value(payload)),
            ResponseFormatter::Quote => format_quote(&QuotePayload::from_value(payload)),
        }
    }
}

/// Structured values are pretty-printed in wire key order; a JSON string renders as its text.
pub fn format_generic(payload: &Value) -> String {
    let payload = trim_whole_floats(payload);
    match &payload {
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string())
        }
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Whole-valued floats print without a fractional part (`18.0` renders as `18`).
fn trim_whole_floats(value: &Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Value::from(f as i64)
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(trim_whole_floats).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), trim_whole_floats(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}

pub fn format_weather(payload: &WeatherPayload) -> String {
    let mut lines = vec![
        "🌤️ Información del Clima".to_string(),
        format!("Ciudad: {}", field_or(&payload.city, MISSING_FIELD)),
        format!("Temperatura: {}", field_or(&payload.temperature, MISSING_FIELD)),
        format!("Descripción: {}", field_or(&payload.description, MISSING_FIELD)),
        format!("Humedad: {}", field_or(&payload.humidity, MISSING_FIELD)),
    ];
    push_message(&mut lines, &payload.message);
    lines.join("\n")
}

pub fn format_quote(payload: &QuotePayload) -> String {
    let mut lines = vec![
        "💭 Cita Inspiradora".to_string(),
        String::new(),
        format!("\"{}\"", field_or(&payload.content, MISSING_QUOTE)),
        format!("— {}", field_or(&payload.author, UNKNOWN_AUTHOR)),
    ];
    push_message(&mut lines, &payload.message);
    lines.join("\n")
}

pub fn format_error(message: &str) -> String {
    format!("❌ Error\n{message}\n\n{ERROR_HINT}")
}

fn push_message(lines: &mut Vec<String>, message: &Option<Value>) {
    if let Some(text) = truthy_text(message) {
        lines.push(String::new());
        lines.push(format!("📝 {text}"));
    }
}

fn field_or(field: &Option<Value>, placeholder: &str) -> String {
    truthy_text(field).unwrap_or_else(|| placeholder.to_string())
}

/// Text of a present value, or `None` for null, `false`, zero and the empty string.
fn truthy_text(field: &Option<Value>) -> Option<String> {
    match field.as_ref()? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(trim_whole_floats(other).to_string()),
    }
}

#[cfg(test)]
#[path = "tests/formatter_tests.rs"]
mod tests;

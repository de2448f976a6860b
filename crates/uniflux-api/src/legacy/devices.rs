// Legacy API device payloads
//
// Decodes a `stat/device` response body. Besides the standard envelope we
// accept a bare array (what most dump tools save) and a single device
// object, so a record can be fed in without re-wrapping it.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::Error;
use crate::legacy::models::{DeviceStatus, LegacyResponse};

/// Decode the body of a `stat/device` response into device records.
///
/// Accepts `{ "meta": {...}, "data": [...] }`, `[...]`, or a single device
/// object. An envelope whose `meta.rc` isn't `"ok"` is a
/// [`Error::LegacyApi`]; anything that isn't one of those shapes is a
/// [`Error::Deserialization`] carrying the body.
pub fn parse_devices(body: &str) -> Result<Vec<DeviceStatus>, Error> {
    let value: Value = serde_json::from_str(body).map_err(|e| deserialization(&e, body))?;

    let devices = match value {
        Value::Array(_) => {
            trace!("decoding bare device array");
            serde_json::from_value::<Vec<DeviceStatus>>(value)
                .map_err(|e| deserialization(&e, body))?
        }
        Value::Object(ref map) if map.contains_key("meta") => {
            trace!("decoding legacy envelope");
            let envelope: LegacyResponse<DeviceStatus> =
                serde_json::from_value(value).map_err(|e| deserialization(&e, body))?;
            if envelope.meta.rc != "ok" {
                return Err(Error::LegacyApi {
                    message: envelope
                        .meta
                        .msg
                        .unwrap_or_else(|| format!("rc={}", envelope.meta.rc)),
                });
            }
            envelope.data
        }
        Value::Object(_) => {
            trace!("decoding single device object");
            vec![serde_json::from_value::<DeviceStatus>(value).map_err(|e| deserialization(&e, body))?]
        }
        other => {
            return Err(Error::Deserialization {
                message: format!("expected a device array or object, got {}", kind(&other)),
                body: body.to_owned(),
            });
        }
    };

    debug!(count = devices.len(), "decoded device records");
    Ok(devices)
}

fn deserialization(err: &serde_json::Error, body: &str) -> Error {
    Error::Deserialization {
        message: err.to_string(),
        body: body.to_owned(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

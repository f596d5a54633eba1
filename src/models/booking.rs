use serde_json::Value;

pub const TEMPLATED_REQUIRED: &[&str] = &["userId", "name", "date", "time", "appointmentId", "tableRowId"];
pub const STATIC_REQUIRED: &[&str] = &["userId", "name", "date", "time", "appointmentId"];
pub const RAW_REQUIRED: &[&str] = &["userId", "tableRowId"];

/// Booking details posted by the scheduler. Which fields must be present
/// depends on the push variant; the rest stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingRequest {
    pub user_id: String,
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub appointment_id: Option<String>,
    pub table_row_id: Option<String>,
}

impl BookingRequest {
    /// Parses a raw request body. Only a zero-length body counts as `{}`.
    pub fn parse(raw: &[u8]) -> Result<Value, serde_json::Error> {
        if raw.is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        serde_json::from_slice(raw)
    }

    /// Builds a request after checking `required`, returning the missing
    /// field names in declaration order otherwise.
    pub fn from_body(body: &Value, required: &[&'static str]) -> Result<Self, Vec<&'static str>> {
        let missing: Vec<&'static str> = required
            .iter()
            .copied()
            .filter(|f| field(body, f).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self {
            user_id: field(body, "userId").unwrap_or_default(),
            name: field(body, "name"),
            date: field(body, "date"),
            time: field(body, "time"),
            appointment_id: field(body, "appointmentId"),
            table_row_id: field(body, "tableRowId"),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }

    pub fn time(&self) -> &str {
        self.time.as_deref().unwrap_or("")
    }

    pub fn appointment_id(&self) -> &str {
        self.appointment_id.as_deref().unwrap_or("")
    }

    pub fn table_row_id(&self) -> &str {
        self.table_row_id.as_deref().unwrap_or("")
    }
}

/// Presence follows JavaScript truthiness: `null`, `false`, `""` and `0`
/// are missing, everything else is present. Numbers print the way
/// JavaScript prints them (`1e3` is `1000`); `true`, arrays and objects
/// keep their JSON text.
fn field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            let f = n.as_f64()?;
            if f == 0.0 {
                None
            } else if n.is_f64() {
                Some(f.to_string())
            } else {
                Some(n.to_string())
            }
        }
        other => Some(other.to_string()),
    }
}

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Identifier assigned to a record when a read response is accepted.
///
/// The backend has no row ids, so this is purely client side. It survives
/// search and category changes, unlike a position in the visible sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numeric spreadsheet cell (`ITEMS`, `VALUE`).
///
/// The raw cell is kept so free-text search sees what the sheet holds;
/// `value()` is what tables and charts use.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumericCell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl NumericCell {
    /// Numeric value, with anything unparsable or non-finite read as 0.
    pub fn value(&self) -> f64 {
        match self {
            NumericCell::Empty => 0.0,
            NumericCell::Number(n) => finite_or_zero(*n),
            NumericCell::Text(raw) => parse_leading_float(raw).map(finite_or_zero).unwrap_or(0.0),
        }
    }

    /// The cell as text, numbers written the way the sheet shows them.
    pub fn as_text(&self) -> String {
        match self {
            NumericCell::Empty => String::new(),
            NumericCell::Number(n) => js_number_string(*n),
            NumericCell::Text(raw) => raw.clone(),
        }
    }

    /// Text used to prefill a form input; blank and zero cells become "0".
    pub fn form_text(&self) -> String {
        match self {
            NumericCell::Number(n) if *n != 0.0 && !n.is_nan() => js_number_string(*n),
            NumericCell::Text(raw) if !raw.is_empty() => raw.clone(),
            _ => "0".to_string(),
        }
    }
}

impl From<f64> for NumericCell {
    fn from(value: f64) -> Self {
        NumericCell::Number(value)
    }
}

impl From<i64> for NumericCell {
    fn from(value: i64) -> Self {
        NumericCell::Number(value as f64)
    }
}

impl From<&str> for NumericCell {
    fn from(value: &str) -> Self {
        NumericCell::Text(value.to_string())
    }
}

impl Serialize for NumericCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NumericCell::Empty => serializer.serialize_none(),
            NumericCell::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            NumericCell::Number(n) => serializer.serialize_f64(*n),
            NumericCell::Text(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for NumericCell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cell = match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => NumericCell::Empty,
            Some(Value::Number(n)) => n.as_f64().map(NumericCell::Number).unwrap_or_default(),
            Some(Value::String(s)) => NumericCell::Text(s),
            Some(other) => NumericCell::Text(value_text(&other)),
        };
        Ok(cell)
    }
}

/// One sales transaction as stored in the spreadsheet.
///
/// Field names on the wire are fixed and case-sensitive. Columns outside the
/// fixed schema are kept in `extra` so search still sees them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "AREA", default, deserialize_with = "text_cell")]
    pub area: String,
    #[serde(rename = "CLASS", default, deserialize_with = "text_cell")]
    pub class: String,
    #[serde(rename = "SALES REP", default, deserialize_with = "text_cell")]
    pub sales_rep: String,
    #[serde(rename = "CLIENT", default, deserialize_with = "text_cell")]
    pub client: String,
    #[serde(rename = "SKU/SALES", default, deserialize_with = "text_cell")]
    pub sku_sales: String,
    #[serde(rename = "ITEMS", default)]
    pub items: NumericCell,
    #[serde(rename = "OTC/HW", default, deserialize_with = "text_cell")]
    pub category: String,
    #[serde(rename = "MONTH", default, deserialize_with = "text_cell")]
    pub month: String,
    #[serde(rename = "CLIENTS", default, deserialize_with = "text_cell")]
    pub clients: String,
    #[serde(rename = "VALUE", default)]
    pub value: NumericCell,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SalesRecord {
    /// Every cell of the record as text, in column order, for free-text search.
    pub fn field_texts(&self) -> Vec<String> {
        let mut texts = vec![
            self.area.clone(),
            self.class.clone(),
            self.sales_rep.clone(),
            self.client.clone(),
            self.sku_sales.clone(),
            self.items.as_text(),
            self.category.clone(),
            self.month.clone(),
            self.clients.clone(),
            self.value.as_text(),
        ];
        texts.extend(self.extra.values().map(value_text));
        texts
    }
}

/// A record accepted from a read response.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecord {
    pub id: RecordId,
    /// 0-based position in the read response, i.e. the data row on the sheet.
    pub row: usize,
    pub record: SalesRecord,
}

impl LoadedRecord {
    /// Assigns fresh ids to a read response, keeping server order.
    pub fn from_response(records: Vec<SalesRecord>) -> Vec<LoadedRecord> {
        records
            .into_iter()
            .enumerate()
            .map(|(row, record)| LoadedRecord {
                id: RecordId::new(),
                row,
                record,
            })
            .collect()
    }
}

fn text_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(value) => value_text(&value),
    })
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.as_f64().map(js_number_string).unwrap_or_else(|| n.to_string()),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Writes a number the way the sheet's web app renders it: `100` not
/// `100.0`, `1e-7` and `1e+21` in exponent form past the plain-digit range.
pub fn js_number_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Shortest round-trip digits and the decimal exponent of the first one
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{}", value);
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{}", value);
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            first.to_string()
        } else {
            format!("{}.{}", first, rest)
        };
        let sign = if n - 1 >= 0 { '+' } else { '-' };
        format!("{}e{}{}", mantissa, sign, (n - 1).abs())
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Parses the longest leading decimal number in `input`, ignoring whatever
/// follows it (`"12.5kg"` -> 12.5). Returns `None` when no digits lead.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parses the leading integer in `input` (`"3.7"` -> 3, `"12 boxes"` -> 12).
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse::<i64>().ok()
}

//! Reusable attribute validators.
//!
//! Validators run while a configuration is bound against its [`Schema`](crate::schema::Schema),
//! after the value has passed its type check. They never see `null`: an unset attribute is
//! either reported as missing or skipped before any validator runs.
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::diagnostics::{AttributePath, Diagnostics};

const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
const QUALIFIED_NAME_MAX_LENGTH: usize = 63;
const LABEL_VALUE_MAX_LENGTH: usize = 63;
const TOTAL_ANNOTATION_SIZE_LIMIT: usize = 256 * 1024;

static DNS1123_SUBDOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("static dns subdomain regex")
});

static QUALIFIED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").expect("static qualified name regex")
});

/// A constraint on the value of a single attribute
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Validator {
    /// String must have at least `min` characters
    LengthAtLeast {
        /// Minimum length
        min: usize,
    },
    /// String must be one of the listed values
    OneOf {
        /// Allowed values
        values: Vec<&'static str>,
    },
    /// String must be a lowercase RFC 1123 subdomain, as used for object names
    DnsSubdomain,
    /// Map must be valid Kubernetes labels
    Labels,
    /// Map must be valid Kubernetes annotations
    Annotations,
    /// Number must fit in a 32-bit signed integer
    Int32,
}

impl Validator {
    /// Shorthand for [`Validator::LengthAtLeast`]
    pub fn length_at_least(min: usize) -> Self {
        Self::LengthAtLeast { min }
    }

    /// Shorthand for [`Validator::OneOf`]
    pub fn one_of(values: &[&'static str]) -> Self {
        Self::OneOf {
            values: values.to_vec(),
        }
    }

    /// Human readable description of the constraint
    pub fn description(&self) -> String {
        match self {
            Self::LengthAtLeast { min } => format!("string length must be at least {min}"),
            Self::OneOf { values } => format!("value must be one of: {}", quoted_list(values)),
            Self::DnsSubdomain => "value must be a valid DNS subdomain name (RFC 1123)".into(),
            Self::Labels => "value must be a map of valid Kubernetes labels".into(),
            Self::Annotations => "value must be a map of valid Kubernetes annotations".into(),
            Self::Int32 => format!("value must be between {} and {}", i32::MIN, i32::MAX),
        }
    }

    /// Check `value`, recording every violation in `diags`
    ///
    /// Each validator ignores values of a type it does not apply to;
    /// the type check happens before validation.
    pub fn validate(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
        match (self, value) {
            (Self::LengthAtLeast { min }, Value::String(s)) => {
                let len = s.chars().count();
                if len < *min {
                    diags.add_attribute_error(
                        path.clone(),
                        "Invalid Attribute Value Length",
                        format!("Attribute {path} string length must be at least {min}, got: {len}"),
                    );
                }
            }
            (Self::OneOf { values }, Value::String(s)) => {
                if !values.contains(&s.as_str()) {
                    diags.add_attribute_error(
                        path.clone(),
                        "Invalid Attribute Value Match",
                        format!(
                            "Attribute {path} value must be one of: {}, got: {s:?}",
                            quoted_list(values)
                        ),
                    );
                }
            }
            (Self::DnsSubdomain, Value::String(s)) => {
                if let Some(reason) = dns_subdomain_error(s) {
                    diags.add_attribute_error(
                        path.clone(),
                        "Invalid Attribute Value",
                        format!("Attribute {path} {reason}, got: {s:?}"),
                    );
                }
            }
            (Self::Labels, Value::Object(map)) => {
                for (key, value) in map {
                    if let Some(reason) = qualified_name_error(key) {
                        diags.add_attribute_error(
                            path.key(key),
                            "Invalid Label Key",
                            format!("Label key {key:?} {reason}"),
                        );
                    }
                    if let Some(reason) = value.as_str().and_then(label_value_error) {
                        diags.add_attribute_error(
                            path.key(key),
                            "Invalid Label Value",
                            format!("Label value {value} {reason}"),
                        );
                    }
                }
            }
            (Self::Annotations, Value::Object(map)) => {
                let mut total = 0;
                for (key, value) in map {
                    if let Some(reason) = qualified_name_error(key) {
                        diags.add_attribute_error(
                            path.key(key),
                            "Invalid Annotation Key",
                            format!("Annotation key {key:?} {reason}"),
                        );
                    }
                    total += key.len() + value.as_str().map_or(0, str::len);
                }
                if total > TOTAL_ANNOTATION_SIZE_LIMIT {
                    diags.add_attribute_error(
                        path.clone(),
                        "Invalid Annotations",
                        format!("Attribute {path} may not have more than {TOTAL_ANNOTATION_SIZE_LIMIT} bytes of keys and values, got: {total}"),
                    );
                }
            }
            (Self::Int32, Value::Number(n)) => {
                if n.as_i64().is_some_and(|n| i32::try_from(n).is_err()) {
                    diags.add_attribute_error(
                        path.clone(),
                        "Invalid Attribute Value",
                        format!("Attribute {path} {}, got: {n}", self.description()),
                    );
                }
            }
            _ => {}
        }
    }
}

fn quoted_list(values: &[&str]) -> String {
    let quoted = values.iter().map(|v| format!("{v:?}")).collect::<Vec<_>>();
    format!("[{}]", quoted.join(" "))
}

fn dns_subdomain_error(value: &str) -> Option<String> {
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        return Some(format!(
            "must be no more than {DNS1123_SUBDOMAIN_MAX_LENGTH} characters"
        ));
    }
    if !DNS1123_SUBDOMAIN.is_match(value) {
        return Some(
            "must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character"
                .into(),
        );
    }
    None
}

/// Errors for `prefix/name` keys where the prefix is optional
fn qualified_name_error(key: &str) -> Option<String> {
    let name = match key.split('/').collect::<Vec<_>>().as_slice() {
        [name] => *name,
        [prefix, name] => {
            if prefix.is_empty() {
                return Some("must have a non-empty prefix before '/'".into());
            }
            if let Some(reason) = dns_subdomain_error(prefix) {
                return Some(format!("has an invalid prefix: prefix {reason}"));
            }
            *name
        }
        _ => return Some("must consist of an optional DNS subdomain prefix and a name separated by '/'".into()),
    };
    if name.is_empty() {
        return Some("must have a non-empty name".into());
    }
    if name.len() > QUALIFIED_NAME_MAX_LENGTH {
        return Some(format!(
            "must have a name of no more than {QUALIFIED_NAME_MAX_LENGTH} characters"
        ));
    }
    if !QUALIFIED_NAME.is_match(name) {
        return Some(
            "must have a name consisting of alphanumeric characters, '-', '_' or '.', starting and ending with an alphanumeric character"
                .into(),
        );
    }
    None
}

fn label_value_error(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if value.len() > LABEL_VALUE_MAX_LENGTH {
        return Some(format!("must be no more than {LABEL_VALUE_MAX_LENGTH} characters"));
    }
    if !QUALIFIED_NAME.is_match(value) {
        return Some(
            "must be empty or consist of alphanumeric characters, '-', '_' or '.', starting and ending with an alphanumeric character"
                .into(),
        );
    }
    None
}

//! Boolean checks over user-supplied data

use serde_yaml::Value;

use crate::variables::VariableMap;

/// Optional bounds on a number of parameters
///
/// When `exact` is set it is the only criterion. Absent bounds impose nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterBounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub exact: Option<usize>,
}

impl ParameterBounds {
    #[must_use]
    pub fn exactly(count: usize) -> Self {
        ParameterBounds {
            exact: Some(count),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn between(min: usize, max: usize) -> Self {
        ParameterBounds {
            min: Some(min),
            max: Some(max),
            exact: None,
        }
    }

    #[must_use]
    pub fn at_least(min: usize) -> Self {
        ParameterBounds {
            min: Some(min),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn at_most(max: usize) -> Self {
        ParameterBounds {
            max: Some(max),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn accepts(&self, actual: usize) -> bool {
        if let Some(exact) = self.exact {
            return actual == exact;
        }
        self.min.is_none_or(|min| actual >= min) && self.max.is_none_or(|max| actual <= max)
    }
}

/// True only for a string value that is empty.
#[must_use]
pub fn is_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

#[must_use]
pub fn is_valid_parameters_length(actual: usize, bounds: &ParameterBounds) -> bool {
    bounds.accepts(actual)
}

#[must_use]
pub fn ends_with_whitespace(s: &str) -> bool {
    s.chars().next_back().is_some_and(char::is_whitespace)
}

/// Suffix check only, the path itself is not validated.
#[must_use]
pub fn is_valid_yaml_file_name(name: &str) -> bool {
    name.ends_with(".yml") || name.ends_with(".yaml")
}

#[must_use]
pub fn is_valid_json_file_name(name: &str) -> bool {
    name.ends_with(".json")
}

/// True if `value` is a mapping whose keys and values are all strings.
#[must_use]
pub fn is_valid_variables_shape(value: &Value) -> bool {
    VariableMap::try_from(value).is_ok()
}

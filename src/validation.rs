//! Form field validation.
//!
//! A [`Validatable`] pairs a value with the constraints it must satisfy.
//! Length constraints only apply to text and numeric bounds only apply to
//! numbers; a constraint that does not apply to the value is skipped.

use std::fmt;

/// A form field value, either as typed text or coerced to a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Number(number) => fmt::Display::fmt(number, f),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: Value,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn is_valid(&self) -> bool {
        validate(self)
    }
}

/// Returns true when every present, applicable constraint holds.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    // numbers always have a non-empty textual form, even 0 and NaN
    if input.required {
        is_valid &= !input.value.to_string().is_empty();
    }

    if let Value::Text(text) = &input.value {
        // counted in chars, so an astral character is length 1 rather than 2 UTF-16 units
        let length = text.chars().count();
        if let Some(min_length) = input.min_length {
            is_valid &= length >= min_length;
        }
        if let Some(max_length) = input.max_length {
            is_valid &= length <= max_length;
        }
    }

    // comparisons against NaN are false, so NaN fails any present bound
    if let Value::Number(number) = input.value {
        if let Some(min) = input.min {
            is_valid &= number >= min;
        }
        if let Some(max) = input.max {
            is_valid &= number <= max;
        }
    }

    is_valid
}

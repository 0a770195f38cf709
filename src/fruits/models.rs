//! Fruit Domain Models
//!
//! Data structures for the fruit list and the bodies exchanged on `/fruits`,
//! including the validation-error envelope returned for rejected writes.

use serde::Serialize;
use serde_json::Value;

// =============================================================================
// Constants
// =============================================================================

/// Confirmation returned for every accepted write
pub const FRUIT_ADDED_MESSAGE: &str = "Fruit added successfully";

// =============================================================================
// Fruit Domain Models
// =============================================================================

/// A named, priced item held by the store
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Fruit {
    /// Display name; duplicates are allowed
    pub name: String,

    /// Price in whole units; zero and negative values are accepted
    pub price: i64,
}

impl Fruit {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Response for `GET /fruits`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Fruits {
    pub fruits: Vec<Fruit>,
}

/// Response for a successful `POST /fruits`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FruitAdded {
    pub message: String,
}

impl Default for FruitAdded {
    fn default() -> Self {
        Self {
            message: FRUIT_ADDED_MESSAGE.to_string(),
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// One segment of the path to a rejected value: a field name or a byte offset
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LocSegment {
    Key(String),
    Offset(usize),
}

impl From<&str> for LocSegment {
    fn from(key: &str) -> Self {
        LocSegment::Key(key.to_string())
    }
}

impl From<usize> for LocSegment {
    fn from(offset: usize) -> Self {
        LocSegment::Offset(offset)
    }
}

/// The reasons a request body can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    JsonInvalid,
    ModelAttributesType,
    StringType,
    IntType,
    IntParsing,
    IntParsingSize,
    IntFromFloat,
}

impl IssueKind {
    /// Machine-readable code reported in the `type` field
    pub fn code(self) -> &'static str {
        match self {
            IssueKind::Missing => "missing",
            IssueKind::JsonInvalid => "json_invalid",
            IssueKind::ModelAttributesType => "model_attributes_type",
            IssueKind::StringType => "string_type",
            IssueKind::IntType => "int_type",
            IssueKind::IntParsing => "int_parsing",
            IssueKind::IntParsingSize => "int_parsing_size",
            IssueKind::IntFromFloat => "int_from_float",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            IssueKind::Missing => "Field required",
            IssueKind::JsonInvalid => "JSON decode error",
            IssueKind::ModelAttributesType => {
                "Input should be a valid dictionary or object to extract fields from"
            }
            IssueKind::StringType => "Input should be a valid string",
            IssueKind::IntType => "Input should be a valid integer",
            IssueKind::IntParsing => {
                "Input should be a valid integer, unable to parse string as an integer"
            }
            IssueKind::IntParsingSize => {
                "Unable to parse input string as an integer, exceeded maximum size"
            }
            IssueKind::IntFromFloat => {
                "Input should be a valid integer, got a number with a fractional part"
            }
        }
    }
}

/// A single rejected value, serialized as `{type, loc, msg, input[, ctx]}`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: &'static str,

    pub loc: Vec<LocSegment>,

    pub msg: &'static str,

    /// The offending input (the enclosing object for missing fields)
    pub input: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl ValidationIssue {
    pub fn new(kind: IssueKind, loc: Vec<LocSegment>, input: Value) -> Self {
        Self {
            kind: kind.code(),
            loc,
            msg: kind.message(),
            input,
            ctx: None,
        }
    }

    pub fn with_ctx(mut self, ctx: Value) -> Self {
        self.ctx = Some(ctx);
        self
    }
}

/// Body of a `422 Unprocessable Entity` response
#[derive(Debug, Serialize)]
pub struct HttpValidationError {
    pub detail: Vec<ValidationIssue>,
}

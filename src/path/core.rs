use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::ConfigError;

/// Marker that opens a parameter segment in a route template.
const PARAM_MARKER: char = '$';

/// A path-parameter value after conversion by its [`PathType`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i32),
    Long(i64),
}

impl ParamValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(i64::from(*v)),
            ParamValue::Long(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{}", s),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Long(v) => write!(f, "{}", v),
        }
    }
}

/// A named, stateless converter from a raw path segment to a typed value.
///
/// Conversion failure means the raw segment does not belong to the type's
/// domain; during matching that disqualifies the candidate route rather
/// than failing the request.
#[derive(Clone)]
pub struct PathType {
    name: &'static str,
    convert: fn(&str) -> Option<ParamValue>,
}

impl PathType {
    #[must_use]
    pub fn new(name: &'static str, convert: fn(&str) -> Option<ParamValue>) -> Self {
        Self { name, convert }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Convert a raw segment, `None` when the text is outside the type's
    /// domain (non-numeric input or numeric overflow for the int types).
    #[must_use]
    pub fn parse(&self, raw: &str) -> Option<ParamValue> {
        (self.convert)(raw)
    }

    /// Identity conversion; the default when a parameter has no type suffix.
    #[must_use]
    pub fn string() -> Self {
        Self::new("String", |raw| Some(ParamValue::Str(raw.to_string())))
    }

    #[must_use]
    pub fn integer() -> Self {
        Self::new("Integer", |raw| raw.parse::<i32>().ok().map(ParamValue::Int))
    }

    #[must_use]
    pub fn long() -> Self {
        Self::new("Long", |raw| raw.parse::<i64>().ok().map(ParamValue::Long))
    }
}

impl fmt::Debug for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathType").field(&self.name).finish()
    }
}

impl PartialEq for PathType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// The set of named path-parameter types available to the compiler.
///
/// Constructed once at process start and handed to the registry; immutable
/// during serving. Registering a type under an existing name replaces it.
#[derive(Debug, Clone)]
pub struct PathTypes {
    types: HashMap<&'static str, PathType>,
}

impl PathTypes {
    /// The built-in table: `String`, `Integer`, `Long`.
    #[must_use]
    pub fn built_in() -> Self {
        let mut table = Self {
            types: HashMap::new(),
        };
        table.register(PathType::string());
        table.register(PathType::integer());
        table.register(PathType::long());
        table
    }

    pub fn register(&mut self, path_type: PathType) {
        self.types.insert(path_type.name(), path_type);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PathType> {
        self.types.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }
}

impl Default for PathTypes {
    fn default() -> Self {
        Self::built_in()
    }
}

/// One compiled segment of a route path.
#[derive(Debug, Clone)]
pub enum PathSegment {
    /// Must equal the corresponding request segment exactly (case-sensitive).
    Literal(String),
    /// Matches any request segment positionally, provided the raw text
    /// converts under `path_type`.
    Param { name: String, path_type: PathType },
}

/// Result of compiling a route template: the ordered segment list plus the
/// parameter name → type table.
#[derive(Debug, Clone)]
pub struct CompiledPath {
    pub segments: Vec<PathSegment>,
    pub params: HashMap<String, PathType>,
}

/// Split a path into its non-empty `/`-delimited segments.
///
/// `/` and the empty string both split to no segments, which is how the
/// root route matches the root path.
#[must_use]
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Compile a route template against a [`PathTypes`] table.
///
/// A parameter segment with raw text already seen in this route reuses the
/// previously compiled segment: `/pair/$id:Integer/$id:Integer` is one
/// parameter appearing twice, sharing a single converter and extracted
/// value slot.
pub fn compile_template(path: &str, types: &PathTypes) -> Result<CompiledPath, ConfigError> {
    let mut segments = Vec::new();
    let mut params: HashMap<String, PathType> = HashMap::new();
    // Raw text → compiled segment, for parameter identity reuse.
    let mut seen: HashMap<&str, PathSegment> = HashMap::new();

    for raw in split_segments(path) {
        if let Some(existing) = seen.get(raw) {
            segments.push(existing.clone());
            continue;
        }

        let segment = if let Some(spec) = raw.strip_prefix(PARAM_MARKER) {
            let pieces: Vec<&str> = spec.split(':').collect();
            let (name, path_type) = match pieces.as_slice() {
                [name] if !name.is_empty() => {
                    let string_type =
                        types
                            .get("String")
                            .ok_or_else(|| ConfigError::UnknownPathType {
                                path: path.to_string(),
                                type_name: "String".to_string(),
                            })?;
                    ((*name).to_string(), string_type.clone())
                }
                [name, type_name] if !name.is_empty() && !type_name.is_empty() => {
                    let path_type =
                        types
                            .get(type_name)
                            .ok_or_else(|| ConfigError::UnknownPathType {
                                path: path.to_string(),
                                type_name: (*type_name).to_string(),
                            })?;
                    ((*name).to_string(), path_type.clone())
                }
                _ => {
                    return Err(ConfigError::InvalidRoutePath {
                        path: path.to_string(),
                    })
                }
            };
            params.insert(name.clone(), path_type.clone());
            PathSegment::Param { name, path_type }
        } else {
            PathSegment::Literal(raw.to_string())
        };

        seen.insert(raw, segment.clone());
        segments.push(segment);
    }

    Ok(CompiledPath { segments, params })
}

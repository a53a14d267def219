//! Step list item domain model

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Separator between step id and version in a composite key
pub const COMPOSITE_SEPARATOR: char = '@';

/// A pinned reference to a step in the step library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepRef {
    /// Stable step identifier
    pub id: &'static str,

    /// Pinned semantic version
    pub version: &'static str,
}

impl StepRef {
    pub const fn new(id: &'static str, version: &'static str) -> Self {
        Self { id, version }
    }

    /// The `id@version` key used in pipeline definitions
    pub fn composite(&self) -> String {
        format!("{}{}{}", self.id, COMPOSITE_SEPARATOR, self.version)
    }
}

impl fmt::Display for StepRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.id, COMPOSITE_SEPARATOR, self.version)
    }
}

/// Separator between a step source and the step reference
pub const SOURCE_SEPARATOR: &str = "::";

/// Key of the options entry that may accompany an input
pub const INPUT_OPTS_KEY: &str = "opts";

/// Error types for composite key parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepRefError {
    #[error("Step key is empty")]
    Empty,

    #[error("Step key '{0}' has an empty source")]
    EmptySource(String),

    #[error("Step key '{0}' has no step id")]
    MissingId(String),

    #[error("Step key '{0}' has an empty version")]
    EmptyVersion(String),
}

/// Where a step comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepSource {
    /// No prefix, resolved against the default step library
    Default,
    /// `<steplib-url>::id@version`
    StepLib(String),
    /// `git::<url>@<ref>`
    Git,
    /// `path::<dir>`
    Path,
}

/// A composite key parsed from a pipeline definition.
///
/// Unlike [`StepRef`] the version is optional, since `bitrise.yml`
/// allows referencing a step without pinning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepKey {
    pub source: StepSource,
    pub id: String,
    pub version: Option<String>,
}

impl StepKey {
    /// Parse `[source::]id[@version]`
    pub fn parse(key: &str) -> Result<Self, StepRefError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(StepRefError::Empty);
        }

        let (source, reference) = match key.rsplit_once(SOURCE_SEPARATOR) {
            Some(("", _)) => return Err(StepRefError::EmptySource(key.to_string())),
            Some(("git", reference)) => (StepSource::Git, reference),
            Some(("path", reference)) => (StepSource::Path, reference),
            Some((steplib, reference)) => (StepSource::StepLib(steplib.to_string()), reference),
            None => (StepSource::Default, key),
        };

        // Local steps carry no version; `@` may be part of the path
        if source == StepSource::Path {
            if reference.is_empty() {
                return Err(StepRefError::MissingId(key.to_string()));
            }
            return Ok(Self {
                source,
                id: reference.to_string(),
                version: None,
            });
        }

        match reference.rsplit_once(COMPOSITE_SEPARATOR) {
            Some((id, _)) if id.is_empty() => Err(StepRefError::MissingId(key.to_string())),
            Some((_, version)) if version.is_empty() => {
                Err(StepRefError::EmptyVersion(key.to_string()))
            }
            Some((id, version)) => Ok(Self {
                source,
                id: id.to_string(),
                version: Some(version.to_string()),
            }),
            None if reference.is_empty() => Err(StepRefError::MissingId(key.to_string())),
            None => Ok(Self {
                source,
                id: reference.to_string(),
                version: None,
            }),
        }
    }
}

/// A single named step input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    pub value: String,

    /// Environment options (`is_expand`, `title`, ...) kept as written
    pub opts: Option<serde_yaml::Mapping>,
}

impl Input {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            opts: None,
        }
    }

    /// Builder-style options
    pub fn with_opts(mut self, opts: serde_yaml::Mapping) -> Self {
        self.opts = Some(opts);
        self
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Input {
    fn from((name, value): (N, V)) -> Self {
        Input::new(name, value)
    }
}

// Inputs are written as mappings of name to value: `- scheme: MyApp`,
// optionally followed by an `opts` entry
impl Serialize for Input {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.opts.is_some() { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(&self.name, &self.value)?;
        if let Some(opts) = &self.opts {
            map.serialize_entry(INPUT_OPTS_KEY, opts)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Input {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InputVisitor;

        impl<'de> Visitor<'de> for InputVisitor {
            type Value = Input;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of input name to value with optional opts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Input, A::Error> {
                let mut entry: Option<(String, String)> = None;
                let mut opts: Option<serde_yaml::Mapping> = None;
                let mut len = 0;

                while let Some(key) = map.next_key::<String>()? {
                    len += 1;
                    if key == INPUT_OPTS_KEY && opts.is_none() {
                        let value: Option<serde_yaml::Mapping> = map.next_value()?;
                        opts = Some(value.unwrap_or_default());
                    } else if entry.is_none() {
                        let value: serde_yaml::Value = map.next_value()?;
                        entry = Some((key, scalar_to_string(&value)));
                    } else {
                        return Err(de::Error::invalid_length(len, &self));
                    }
                }

                match (entry, opts) {
                    (Some((name, value)), opts) => Ok(Input { name, value, opts }),
                    // An `opts` entry on its own names no input
                    (None, Some(_)) => Err(de::Error::missing_field("input name")),
                    (None, None) => Err(de::Error::invalid_length(0, &self)),
                }
            }
        }

        deserializer.deserialize_map(InputVisitor)
    }
}

/// Render a YAML scalar as the string a step would receive
fn scalar_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => String::new(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}

/// Body of a step list item (the value under the composite key)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StepBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    run_if: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    inputs: Vec<Input>,
}

/// One invocation of a step within a workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepListItem {
    key: String,
    body: StepBody,
}

impl StepListItem {
    /// The `id@version` key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Title override, if any
    pub fn title(&self) -> Option<&str> {
        self.body.title.as_deref()
    }

    /// Run-if guard, if any
    pub fn run_if(&self) -> Option<&str> {
        self.body.run_if.as_deref()
    }

    /// Step inputs in declaration order
    pub fn inputs(&self) -> &[Input] {
        &self.body.inputs
    }

    /// Parse the key back into id and optional version
    pub fn step_key(&self) -> Result<StepKey, StepRefError> {
        StepKey::parse(&self.key)
    }
}

/// Assemble a step list item, keeping only the non-empty optional fields
pub fn step_list_item(
    step: StepRef,
    title: Option<&str>,
    run_if: Option<&str>,
    inputs: Vec<Input>,
) -> StepListItem {
    let non_empty = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);

    StepListItem {
        key: step.composite(),
        body: StepBody {
            title: non_empty(title),
            run_if: non_empty(run_if),
            inputs,
        },
    }
}

impl Serialize for StepListItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.body)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for StepListItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ItemVisitor;

        impl<'de> Visitor<'de> for ItemVisitor {
            type Value = StepListItem;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a single-entry mapping of step key to step body")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<StepListItem, A::Error> {
                // `- git-clone@3.2.0:` yields a null body
                let (key, body): (String, Option<StepBody>) = map
                    .next_entry()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;

                if map.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(2, &self));
                }

                let mut body = body.unwrap_or_default();
                body.title = body.title.filter(|s| !s.is_empty());
                body.run_if = body.run_if.filter(|s| !s.is_empty());

                Ok(StepListItem { key, body })
            }
        }

        deserializer.deserialize_map(ItemVisitor)
    }
}

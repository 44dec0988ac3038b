//! Schema types: modules, components, commands and their parameters.
//!
//! The JSON shape follows the codegen schema emitted by the component
//! parsers: every module and type annotation carries a `type` discriminator,
//! and map order is significant because generators emit in schema order.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};

/// A complete schema: every module that takes part in code generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Modules keyed by name, in declaration order.
    #[serde(default)]
    pub modules: IndexMap<String, Module>,
}

impl Schema {
    /// Parse a schema from a JSON string.
    ///
    /// Unknown module kinds, parameter types and platforms are rejected here,
    /// so a loaded schema only ever contains types every generator can map.
    /// This holds for every component, including ones excluded on the
    /// platform being generated for: an Android-only component with an
    /// unsupported parameter type fails an iOS generation too.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a schema from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Iterate over the component modules in schema order, skipping every
    /// other module kind.
    pub fn component_modules(&self) -> impl Iterator<Item = (&str, &ComponentModule)> {
        self.modules
            .iter()
            .filter_map(|(name, module)| module.as_component().map(|m| (name.as_str(), m)))
    }
}

/// A schema module, discriminated by its `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Module {
    /// A module declaring native UI components.
    Component(ComponentModule),
    /// A native module. Component generators ignore these.
    NativeModule(NativeModule),
}

impl Module {
    /// The component payload, if this is a component module.
    pub fn as_component(&self) -> Option<&ComponentModule> {
        match self {
            Module::Component(m) => Some(m),
            Module::NativeModule(_) => None,
        }
    }
}

/// A module declaring native UI components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentModule {
    /// Components keyed by name, in declaration order. Absent when the
    /// module declares none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<IndexMap<String, Component>>,
}

impl ComponentModule {
    /// Iterate over the components in declaration order.
    pub fn components(&self) -> impl Iterator<Item = (&str, &Component)> {
        self.components
            .iter()
            .flat_map(|map| map.iter().map(|(name, c)| (name.as_str(), c)))
    }
}

/// A native module declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeModule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
}

/// A native UI component and the commands it exposes.
///
/// The component name is its key in [`ComponentModule::components`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Commands in declaration order.
    #[serde(default)]
    pub commands: Vec<Command>,
    /// Platforms this component is not generated for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_platforms: Option<Vec<Platform>>,
}

impl Component {
    /// Whether this component is excluded from generation on `platform`.
    pub fn is_excluded_on(&self, platform: Platform) -> bool {
        self.excluded_platforms
            .as_ref()
            .is_some_and(|platforms| platforms.contains(&platform))
    }

    /// Whether this component is generated for `platform`.
    pub fn is_available_on(&self, platform: Platform) -> bool {
        !self.is_excluded_on(platform)
    }
}

/// A command invocable on a component instance from JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    #[serde(rename = "typeAnnotation")]
    pub type_annotation: CommandTypeAnnotation,
}

impl Command {
    /// Create a command with the given parameters.
    pub fn new(name: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            name: name.into(),
            type_annotation: CommandTypeAnnotation { params },
        }
    }

    /// Parameters in declaration order.
    ///
    /// The position of a parameter in this slice is the index of its
    /// argument in the untyped argument list received at dispatch time.
    pub fn params(&self) -> &[Param] {
        &self.type_annotation.params
    }
}

/// The function type of a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandTypeAnnotation {
    #[serde(default)]
    pub params: Vec<Param>,
}

/// A named command parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name, also used as the argument label in generated code.
    pub name: String,
    #[serde(rename = "typeAnnotation")]
    pub type_annotation: CommandParamType,
}

impl Param {
    pub fn new(name: impl Into<String>, type_annotation: CommandParamType) -> Self {
        Self {
            name: name.into(),
            type_annotation,
        }
    }
}

/// The closed set of command parameter types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandParamType {
    #[serde(rename = "BooleanTypeAnnotation")]
    Boolean,
    #[serde(rename = "DoubleTypeAnnotation")]
    Double,
    #[serde(rename = "FloatTypeAnnotation")]
    Float,
    #[serde(rename = "Int32TypeAnnotation")]
    Int32,
    #[serde(rename = "StringTypeAnnotation")]
    String,
    /// An array of untyped elements. Element types are not carried through
    /// to generated command code.
    #[serde(rename = "ArrayTypeAnnotation")]
    Array,
    #[serde(rename = "ReservedTypeAnnotation")]
    Reserved { name: ReservedType },
}

/// Reserved parameter types with framework-defined meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservedType {
    /// The numeric tag identifying a React root view.
    RootTag,
}

/// A target platform a component can be excluded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "android")]
    Android,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Ios => write!(f, "iOS"),
            Platform::Android => write!(f, "android"),
        }
    }
}

//! Schema construction API for building schemas programmatically.
//!
//! Generators and their tests usually want a handful of components without
//! writing schema JSON by hand. Modules and components keep insertion order,
//! exactly like a parsed schema.
//!
//! # Example
//!
//! ```rust
//! use viewgen_schema::builder::{ComponentBuilder, SchemaBuilder};
//! use viewgen_schema::{CommandParamType, Platform};
//!
//! let schema = SchemaBuilder::new()
//!     .component(
//!         "SwitchNativeComponent",
//!         ComponentBuilder::new("Switch")
//!             .command("setValue", [("value", CommandParamType::Boolean)])
//!             .excluded_on(Platform::Android),
//!     )
//!     .build();
//!
//! let (_, module) = schema.component_modules().next().unwrap();
//! assert_eq!(module.components().count(), 1);
//! ```

use indexmap::IndexMap;

use crate::types::{
    Command, CommandParamType, Component, ComponentModule, Module, NativeModule, Param, Platform,
    Schema,
};

/// A builder for constructing schemas.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    modules: IndexMap<String, Module>,
}

impl SchemaBuilder {
    /// Create a new empty schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component to the component module `module_name`, creating the
    /// module if needed.
    ///
    /// If `module_name` already names a native module it is replaced.
    pub fn component(mut self, module_name: &str, component: ComponentBuilder) -> Self {
        let module = self
            .modules
            .entry(module_name.to_string())
            .or_insert_with(|| Module::Component(ComponentModule::default()));
        if !matches!(module, Module::Component(_)) {
            *module = Module::Component(ComponentModule::default());
        }
        if let Module::Component(m) = module {
            m.components
                .get_or_insert_with(IndexMap::new)
                .insert(component.name, component.component);
        }
        self
    }

    /// Add a component module that declares no component map at all.
    pub fn empty_component_module(mut self, module_name: &str) -> Self {
        self.modules.insert(
            module_name.to_string(),
            Module::Component(ComponentModule::default()),
        );
        self
    }

    /// Add a native module.
    pub fn native_module(mut self, module_name: &str) -> Self {
        self.modules.insert(
            module_name.to_string(),
            Module::NativeModule(NativeModule {
                module_name: Some(module_name.to_string()),
            }),
        );
        self
    }

    /// Finish building.
    pub fn build(self) -> Schema {
        Schema {
            modules: self.modules,
        }
    }
}

/// A builder for a single named component.
#[derive(Debug)]
pub struct ComponentBuilder {
    name: String,
    component: Component,
}

impl ComponentBuilder {
    /// Start a component with no commands that is available everywhere.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            component: Component::default(),
        }
    }

    /// Append a command. Parameters are `(name, type)` pairs in order.
    pub fn command<I, S>(mut self, name: &str, params: I) -> Self
    where
        I: IntoIterator<Item = (S, CommandParamType)>,
        S: Into<String>,
    {
        let params = params
            .into_iter()
            .map(|(param_name, ty)| Param::new(param_name, ty))
            .collect();
        self.component.commands.push(Command::new(name, params));
        self
    }

    /// Append a command that takes no parameters.
    pub fn command_without_params(self, name: &str) -> Self {
        self.command::<_, String>(name, [])
    }

    /// Exclude this component from generation on `platform`.
    pub fn excluded_on(mut self, platform: Platform) -> Self {
        let platforms = self.component.excluded_platforms.get_or_insert_with(Vec::new);
        if !platforms.contains(&platform) {
            platforms.push(platform);
        }
        self
    }

    /// Finish building, returning the name and the component.
    pub fn build(self) -> (String, Component) {
        (self.name, self.component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_share_a_module() {
        let schema = SchemaBuilder::new()
            .component("Views", ComponentBuilder::new("A"))
            .component("Views", ComponentBuilder::new("B"))
            .build();
        assert_eq!(schema.modules.len(), 1);
        let (_, module) = schema.component_modules().next().unwrap();
        let names: Vec<_> = module.components().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn commands_keep_param_order() {
        let (name, component) = ComponentBuilder::new("Scroller")
            .command(
                "scrollTo",
                [
                    ("x", CommandParamType::Double),
                    ("y", CommandParamType::Double),
                    ("animated", CommandParamType::Boolean),
                ],
            )
            .command_without_params("flashScrollIndicators")
            .build();
        assert_eq!(name, "Scroller");
        assert_eq!(component.commands.len(), 2);
        let labels: Vec<_> = component.commands[0]
            .params()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(labels, vec!["x", "y", "animated"]);
        assert!(component.commands[1].params().is_empty());
    }

    #[test]
    fn excluded_platforms_are_deduplicated() {
        let (_, component) = ComponentBuilder::new("C")
            .excluded_on(Platform::Ios)
            .excluded_on(Platform::Ios)
            .build();
        assert_eq!(component.excluded_platforms, Some(vec![Platform::Ios]));
    }

    #[test]
    fn mixed_module_kinds_keep_order() {
        let schema = SchemaBuilder::new()
            .native_module("Storage")
            .empty_component_module("Nothing")
            .component("Views", ComponentBuilder::new("A"))
            .build();
        let names: Vec<_> = schema.modules.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Storage", "Nothing", "Views"]);
        assert_eq!(schema.component_modules().count(), 2);
    }

    #[test]
    fn built_schema_round_trips_through_json() {
        let schema = SchemaBuilder::new()
            .component(
                "Views",
                ComponentBuilder::new("A")
                    .command("focus", [("tag", CommandParamType::Int32)])
                    .excluded_on(Platform::Android),
            )
            .native_module("Storage")
            .build();
        let json = serde_json::to_string(&schema).unwrap();
        assert_eq!(Schema::parse(&json).unwrap(), schema);
    }
}

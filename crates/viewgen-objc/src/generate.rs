//! Header generation entry point.
//!
//! Walks the schema in order and keeps, in turn:
//! 1. modules of the Component kind,
//! 2. that declare a component map,
//! 3. and, within them, components not excluded on [`TARGET_PLATFORM`].
//!
//! Everything that survives is emitted in schema order into one header.

use std::collections::BTreeMap;

use viewgen_schema::{Module, Platform, Schema};

use crate::emit::generate_component;
use crate::template::{join_blocks, FileTemplate};

/// Name of the single generated header.
pub const FILE_NAME: &str = "RCTComponentViewHelpers.h";

/// Platform this generator emits code for.
pub const TARGET_PLATFORM: Platform = Platform::Ios;

/// Generated files keyed by file name.
pub type FilesOutput = BTreeMap<String, String>;

/// Options shared with the other generators of the toolchain.
///
/// None of them change the generated header: they are accepted so every
/// generator can be driven with the same arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub package_name: Option<String>,
    pub assume_nonnull: bool,
    pub header_prefix: Option<String>,
}

/// Generate `RCTComponentViewHelpers.h` for every component in `schema`.
///
/// The output depends only on `schema`, including its module, component,
/// command and parameter order, so repeated calls are byte-identical.
pub fn generate(library_name: &str, schema: &Schema, options: &GenerateOptions) -> FilesOutput {
    tracing::debug!(
        library = library_name,
        package = options.package_name.as_deref(),
        assume_nonnull = options.assume_nonnull,
        "generating component view helpers"
    );

    let component_content = join_blocks(
        schema
            .modules
            .iter()
            .filter_map(|(module_name, module)| generate_module(module_name, module))
            .filter(|content| !content.is_empty()),
    );

    let header = FileTemplate {
        component_content: &component_content,
    }
    .render();

    BTreeMap::from([(FILE_NAME.to_string(), header)])
}

/// Emit every included component of one module, or `None` when the module
/// takes no part in generation.
fn generate_module(module_name: &str, module: &Module) -> Option<String> {
    let Module::Component(component_module) = module else {
        tracing::trace!(module = module_name, "skipping non-component module");
        return None;
    };

    let Some(components) = &component_module.components else {
        tracing::debug!(module = module_name, "component module declares no components");
        return None;
    };

    let emitted = components
        .iter()
        .filter(|(component_name, component)| {
            let included = component.is_available_on(TARGET_PLATFORM);
            if !included {
                tracing::debug!(
                    module = module_name,
                    component = component_name.as_str(),
                    platform = %TARGET_PLATFORM,
                    "component excluded on target platform"
                );
            }
            included
        })
        .map(|(component_name, component)| generate_component(component, component_name));

    Some(join_blocks(emitted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewgen_schema::{CommandParamType, ComponentBuilder, SchemaBuilder};

    fn header(schema: &Schema) -> String {
        let files = generate("Lib", schema, &GenerateOptions::default());
        assert_eq!(files.len(), 1);
        files[FILE_NAME].clone()
    }

    #[test]
    fn empty_schema_still_produces_header() {
        let text = header(&Schema::default());
        assert!(text.ends_with("NS_ASSUME_NONNULL_BEGIN\n\n\n\nNS_ASSUME_NONNULL_END"));
    }

    #[test]
    fn native_and_empty_modules_are_skipped() {
        let schema = SchemaBuilder::new()
            .native_module("Storage")
            .empty_component_module("Nothing")
            .build();
        assert_eq!(header(&schema), header(&Schema::default()));
    }

    #[test]
    fn excluded_component_is_omitted() {
        let schema = SchemaBuilder::new()
            .component(
                "Views",
                ComponentBuilder::new("Hidden")
                    .command_without_params("ping")
                    .excluded_on(Platform::Ios),
            )
            .component(
                "Views",
                ComponentBuilder::new("Shown")
                    .command_without_params("ping")
                    .excluded_on(Platform::Android),
            )
            .build();
        let text = header(&schema);
        assert!(!text.contains("RCTHiddenViewProtocol"));
        assert!(!text.contains("RCTHiddenHandleCommand"));
        assert!(text.contains("RCTShownViewProtocol"));
        assert!(text.contains("RCTShownHandleCommand"));
    }

    #[test]
    fn fully_excluded_module_leaves_no_gap() {
        let schema = SchemaBuilder::new()
            .component("A", ComponentBuilder::new("First"))
            .component(
                "B",
                ComponentBuilder::new("Gone").excluded_on(Platform::Ios),
            )
            .component("C", ComponentBuilder::new("Last"))
            .build();
        let text = header(&schema);
        assert!(text.contains(
            "@protocol RCTFirstViewProtocol <NSObject>\n\n@end\n\n@protocol RCTLastViewProtocol <NSObject>\n\n@end"
        ));
    }

    #[test]
    fn output_follows_schema_order() {
        let schema = SchemaBuilder::new()
            .component("Z", ComponentBuilder::new("Zebra"))
            .component("A", ComponentBuilder::new("Aardvark"))
            .component("Z", ComponentBuilder::new("Yak"))
            .build();
        let text = header(&schema);
        let zebra = text.find("RCTZebraViewProtocol").unwrap();
        let yak = text.find("RCTYakViewProtocol").unwrap();
        let aardvark = text.find("RCTAardvarkViewProtocol").unwrap();
        assert!(zebra < yak && yak < aardvark);
    }

    #[test]
    fn options_do_not_change_output() {
        let schema = SchemaBuilder::new()
            .component(
                "Views",
                ComponentBuilder::new("Toggle")
                    .command("setValue", [("value", CommandParamType::Boolean)]),
            )
            .build();
        let plain = generate("Lib", &schema, &GenerateOptions::default());
        let with_options = generate(
            "OtherLib",
            &schema,
            &GenerateOptions {
                package_name: Some("com.example".to_string()),
                assume_nonnull: true,
                header_prefix: Some("Prefix".to_string()),
            },
        );
        assert_eq!(plain, with_options);
    }

    #[test]
    fn generation_is_deterministic() {
        let schema = SchemaBuilder::new()
            .component(
                "Views",
                ComponentBuilder::new("Scroller").command(
                    "scrollTo",
                    [
                        ("x", CommandParamType::Double),
                        ("y", CommandParamType::Double),
                    ],
                ),
            )
            .build();
        assert_eq!(header(&schema), header(&schema));
    }
}

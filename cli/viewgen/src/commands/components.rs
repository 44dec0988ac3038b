//! `viewgen components`: list what the generator would emit.

use std::path::Path;

use anyhow::{Context, Result};
use viewgen_objc::TARGET_PLATFORM;
use viewgen_schema::Schema;

/// One component as seen by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSummary {
    pub module: String,
    pub component: String,
    pub commands: usize,
    pub emitted: bool,
}

impl std::fmt::Display for ComponentSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}: {} command{}",
            self.module,
            self.component,
            self.commands,
            if self.commands == 1 { "" } else { "s" }
        )?;
        if !self.emitted {
            write!(f, " (excluded on {TARGET_PLATFORM})")?;
        }
        Ok(())
    }
}

/// Summarize every component of every component module, in schema order.
pub fn summarize(schema: &Schema) -> Vec<ComponentSummary> {
    schema
        .component_modules()
        .flat_map(|(module_name, module)| {
            module
                .components()
                .map(move |(component_name, component)| ComponentSummary {
                    module: module_name.to_string(),
                    component: component_name.to_string(),
                    commands: component.commands.len(),
                    emitted: component.is_available_on(TARGET_PLATFORM),
                })
        })
        .collect()
}

/// Run the `viewgen components` workflow.
pub fn run(schema_path: &Path) -> Result<()> {
    let schema = Schema::load(schema_path)
        .with_context(|| format!("loading {}", schema_path.display()))?;

    let summaries = summarize(&schema);
    if summaries.is_empty() {
        println!("No components in schema.");
        return Ok(());
    }
    for summary in &summaries {
        println!("{summary}");
    }
    Ok(())
}

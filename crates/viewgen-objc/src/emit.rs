//! Per-component emission: the view protocol and the command handler.
//!
//! The protocol method signature and the call made from the handler must
//! label arguments identically. Both use [`argument_label`]: the first
//! parameter is unlabeled, every later one is labeled with its own name.

use viewgen_schema::{Command, Component, Param};

use crate::ordinal::ordinal_number;
use crate::template::{
    join_blocks, join_lines, CommandHandlerTemplate, CommandIfCaseTemplate, ConvertArgTemplate,
    ProtocolTemplate,
};
use crate::typemap::type_mapping;

/// Selector label of the parameter at `index`.
pub fn argument_label(index: usize, param: &Param) -> &str {
    if index == 0 {
        ""
    } else {
        &param.name
    }
}

/// Emit the protocol and, when the component has commands, its handler.
pub fn generate_component(component: &Component, component_name: &str) -> String {
    let protocol = generate_protocol(component, component_name);
    match generate_command_handler(component, component_name) {
        Some(handler) => join_blocks([protocol, handler]).trim().to_string(),
        None => protocol,
    }
}

/// Emit `RCT<Component>ViewProtocol` with one method per command.
pub fn generate_protocol(component: &Component, component_name: &str) -> String {
    let methods = join_lines(component.commands.iter().map(method_declaration));
    ProtocolTemplate {
        component_name,
        methods: methods.trim(),
    }
    .render()
}

fn method_declaration(command: &Command) -> String {
    let params = command
        .params()
        .iter()
        .enumerate()
        .map(|(index, param)| {
            format!(
                "{}:({}){}",
                argument_label(index, param),
                type_mapping(&param.type_annotation).declared,
                param.name
            )
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("- (void){}{params};", command.name)
}

/// Emit `RCT<Component>HandleCommand`, or nothing for a component without
/// commands.
pub fn generate_command_handler(component: &Component, component_name: &str) -> Option<String> {
    if component.commands.is_empty() {
        return None;
    }

    let if_cases = join_blocks(
        component
            .commands
            .iter()
            .map(|command| generate_command_if_case(command, component_name)),
    );

    Some(
        CommandHandlerTemplate {
            component_name,
            if_cases: &if_cases,
        }
        .render(),
    )
}

/// Emit the branch handling `command`.
pub fn generate_command_if_case(command: &Command, component_name: &str) -> String {
    let params = command.params();

    let convert_args = join_blocks(
        params
            .iter()
            .enumerate()
            .map(|(index, param)| generate_convert_and_validate_param(param, index, component_name)),
    );

    let call_args = params
        .iter()
        .enumerate()
        .map(|(index, param)| format!("{}:{}", argument_label(index, param), param.name))
        .collect::<Vec<_>>()
        .join(" ");
    let command_call = format!("[componentView {}{call_args}];", command.name);

    CommandIfCaseTemplate {
        component_name,
        command_name: &command.name,
        num_args: params.len(),
        convert_args: convert_args.trim(),
        command_call: &command_call,
    }
    .render()
}

/// Emit validation and conversion of argument slot `index` into a local
/// named after `param`.
pub fn generate_convert_and_validate_param(
    param: &Param,
    index: usize,
    component_name: &str,
) -> String {
    let mapping = type_mapping(&param.type_annotation);
    let arg_conversion = format!(
        "{} {} = {};",
        mapping.declared,
        param.name,
        mapping.coercion.expression(index)
    );

    ConvertArgTemplate {
        component_name,
        expected_kind: &mapping.runtime_class_expression(),
        arg_number: index,
        arg_number_string: &ordinal_number(index + 1),
        expected_kind_string: mapping.readable_kind,
        arg_conversion: &arg_conversion,
    }
    .render()
}

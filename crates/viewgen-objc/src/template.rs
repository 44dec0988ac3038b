//! Text templates for the generated header.
//!
//! Each template is a plain struct of named fields with a pure `render()`.
//! Rendered fragments are trimmed, and larger fragments embed smaller ones
//! verbatim, so indentation inside an embedded fragment is exactly what the
//! inner template produced.

/// The view protocol declaring one method per command.
#[derive(Debug, Clone, Copy)]
pub struct ProtocolTemplate<'a> {
    pub component_name: &'a str,
    /// Newline-separated method declarations.
    pub methods: &'a str,
}

impl ProtocolTemplate<'_> {
    pub fn render(&self) -> String {
        let Self {
            component_name,
            methods,
        } = self;
        fragment(format!(
            r#"
@protocol RCT{component_name}ViewProtocol <NSObject>
{methods}
@end
"#
        ))
    }
}

/// Validation and conversion of one untyped argument.
#[derive(Debug, Clone, Copy)]
pub struct ConvertArgTemplate<'a> {
    pub component_name: &'a str,
    /// Class object expression the argument is checked against.
    pub expected_kind: &'a str,
    /// 0-based argument slot.
    pub arg_number: usize,
    /// Ordinal name of the slot for diagnostics.
    pub arg_number_string: &'a str,
    /// Kind name for diagnostics.
    pub expected_kind_string: &'a str,
    /// Typed local binding statement.
    pub arg_conversion: &'a str,
}

impl ConvertArgTemplate<'_> {
    pub fn render(&self) -> String {
        let Self {
            component_name,
            expected_kind,
            arg_number,
            arg_number_string,
            expected_kind_string,
            arg_conversion,
        } = self;
        fragment(format!(
            r#"
  NSObject *arg{arg_number} = args[{arg_number}];
#if RCT_DEBUG
  if (!RCTValidateTypeOfViewCommandArgument(arg{arg_number}, {expected_kind}, @"{expected_kind_string}", @"{component_name}", commandName, @"{arg_number_string}")) {{
    return;
  }}
#endif
  {arg_conversion}
"#
        ))
    }
}

/// The branch handling one command name.
#[derive(Debug, Clone, Copy)]
pub struct CommandIfCaseTemplate<'a> {
    pub component_name: &'a str,
    pub command_name: &'a str,
    /// Number of arguments the command declares.
    pub num_args: usize,
    /// Joined argument conversions.
    pub convert_args: &'a str,
    /// The typed protocol method call.
    pub command_call: &'a str,
}

impl CommandIfCaseTemplate<'_> {
    pub fn render(&self) -> String {
        let Self {
            component_name,
            command_name,
            num_args,
            convert_args,
            command_call,
        } = self;
        fragment(format!(
            r#"
if ([commandName isEqualToString:@"{command_name}"]) {{
#if RCT_DEBUG
  if ([args count] != {num_args}) {{
    RCTLogError(@"%@ command %@ received %d arguments, expected %d.", @"{component_name}", commandName, (int)[args count], {num_args});
    return;
  }}
#endif

  {convert_args}

  {command_call}
  return;
}}
"#
        ))
    }
}

/// The command handler function of one component.
#[derive(Debug, Clone, Copy)]
pub struct CommandHandlerTemplate<'a> {
    pub component_name: &'a str,
    /// Command branches separated by blank lines.
    pub if_cases: &'a str,
}

impl CommandHandlerTemplate<'_> {
    pub fn render(&self) -> String {
        let Self {
            component_name,
            if_cases,
        } = self;
        fragment(format!(
            r#"
RCT_EXTERN inline void RCT{component_name}HandleCommand(
  id<RCT{component_name}ViewProtocol> componentView,
  NSString const *commandName,
  NSArray const *args)
{{
  {if_cases}

#if RCT_DEBUG
  RCTLogError(@"%@ received command %@, which is not a supported command.", @"{component_name}", commandName);
#endif
}}
"#
        ))
    }
}

/// The whole header file.
#[derive(Debug, Clone, Copy)]
pub struct FileTemplate<'a> {
    pub component_content: &'a str,
}

impl FileTemplate<'_> {
    pub fn render(&self) -> String {
        let Self { component_content } = self;
        fragment(format!(
            r#"
/**
* This code was generated by viewgen (https://github.com/viewgen/viewgen).
*
* Do not edit this file as changes may cause incorrect behavior and will be lost
* once the code is regenerated.
*
* @generated by codegen project: viewgen-objc
*/

#import <Foundation/Foundation.h>
#import <React/RCTDefines.h>
#import <React/RCTLog.h>

NS_ASSUME_NONNULL_BEGIN

{component_content}

NS_ASSUME_NONNULL_END
"#
        ))
    }
}

/// Trim a rendered fragment.
fn fragment(text: String) -> String {
    text.trim().to_string()
}

/// Join fragments with a blank line between each.
pub fn join_blocks<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_with(blocks, "\n\n")
}

/// Join fragments one per line.
pub fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_with(lines, "\n")
}

fn join_with<I, S>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(part.as_ref());
    }
    out
}

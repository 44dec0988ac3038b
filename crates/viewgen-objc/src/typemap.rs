//! Mapping from command parameter types to Objective-C.
//!
//! Each parameter type is seen four ways by the generated code: the type it
//! is declared with in the view protocol, the class an incoming argument must
//! be an instance of, the word used for it in diagnostics, and the expression
//! that turns the untyped argument into a typed value. All four come from a
//! single [`TypeMapping`] per type so they cannot drift apart.

use viewgen_schema::{CommandParamType, ReservedType};

/// How an untyped `NSObject *` argument becomes a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Unbox an `NSNumber` through the given accessor selector.
    Unbox(&'static str),
    /// Reinterpret the object pointer as an instance of the given class.
    Cast(&'static str),
}

impl Coercion {
    /// The right-hand side reading argument slot `index`.
    pub fn expression(&self, index: usize) -> String {
        match self {
            Coercion::Unbox(selector) => format!("[(NSNumber *)arg{index} {selector}]"),
            Coercion::Cast(class) => format!("({class} *)arg{index}"),
        }
    }
}

/// Every Objective-C view of one parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    /// Parameter type in the protocol method signature.
    pub declared: &'static str,
    /// Class name an incoming argument is validated against.
    pub runtime_class: &'static str,
    /// Lowercase kind name used in diagnostics.
    pub readable_kind: &'static str,
    /// Conversion from the untyped argument.
    pub coercion: Coercion,
}

impl TypeMapping {
    /// The class object expression passed to the runtime validator.
    pub fn runtime_class_expression(&self) -> String {
        format!("[{} class]", self.runtime_class)
    }
}

/// Look up the Objective-C mapping for a parameter type.
pub fn type_mapping(ty: &CommandParamType) -> TypeMapping {
    match ty {
        CommandParamType::Boolean => number("BOOL", "boolean", "boolValue"),
        CommandParamType::Double => number("double", "double", "doubleValue"),
        CommandParamType::Float => number("float", "float", "floatValue"),
        CommandParamType::Int32 => number("NSInteger", "number", "intValue"),
        CommandParamType::String => TypeMapping {
            declared: "NSString *",
            runtime_class: "NSString",
            readable_kind: "string",
            coercion: Coercion::Cast("NSString"),
        },
        CommandParamType::Array => TypeMapping {
            declared: "const NSArray *",
            runtime_class: "NSArray",
            readable_kind: "array",
            coercion: Coercion::Cast("NSArray"),
        },
        CommandParamType::Reserved { name } => match name {
            ReservedType::RootTag => number("double", "double", "doubleValue"),
        },
    }
}

fn number(declared: &'static str, readable_kind: &'static str, selector: &'static str) -> TypeMapping {
    TypeMapping {
        declared,
        runtime_class: "NSNumber",
        readable_kind,
        coercion: Coercion::Unbox(selector),
    }
}

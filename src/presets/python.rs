//! Highlight rules for Python parse trees.
//!
//! Labels are highlight-group names; mapping them to colors is the
//! host's concern. Chains assume tree-sitter-python node kinds. Name
//! identifiers are keyed `name:identifier` so the field-qualified root
//! entry carries the class/function chains.

use crate::rule::Rule;

#[rustfmt::skip]
const RULES: &[(&str, &str)] = &[
    // Simple elements.
    ("and",      "Keyword"),
    ("as",       "Keyword"),
    ("assert",   "Keyword"),
    ("async",    "Keyword"),
    ("attribute", "Attribute"),
    ("await",    "Keyword"),
    ("break",    "Keyword"),
    ("class",    "Keyword"),
    ("comment",  "Comment"),
    ("continue", "Keyword"),
    ("decorator", "Decorator"),
    ("def",      "Keyword"),
    ("del",      "Keyword"),
    ("elif",     "Keyword"),
    ("else",     "Keyword"),
    ("ERROR",    "Error"),
    ("except",   "Keyword"),
    ("false",    "Boolean"),
    ("finally",  "Keyword"),
    ("float",    "Float"),
    ("for",      "Keyword"),
    ("from",     "Keyword"),
    ("global",   "Keyword"),
    ("identifier", "Identifier"),
    ("if",       "Keyword"),
    ("import",   "Keyword"),
    ("in",       "Keyword"),
    ("integer",  "Number"),
    ("interpolation", "Interpolation"),
    ("is",       "Keyword"),
    ("lambda",   "Keyword"),
    ("None",     "Keyword"),
    ("none",     "None"),
    ("nonlocal", "Keyword"),
    ("not",      "Keyword"),
    ("operator", "Operator"),
    ("or",       "Keyword"),
    ("pass",     "Keyword"),
    ("raise",    "Keyword"),
    ("return",   "Return"),
    ("string",   "String"),
    ("true",     "Boolean"),
    ("try",      "Keyword"),
    ("while",    "Keyword"),
    ("with",     "Keyword"),
    ("yield",    "Keyword"),

    // Docstrings for modules, classes and functions/methods.
    ("module.expression_statement.string",                               "DocString"),
    ("function_definition.block.expression_statement.string",           "DocString"),
    ("class_definition.block.expression_statement.string",              "DocString"),

    // Class components.
    ("class_definition.class",                                          "Class"),
    ("class_definition.name:identifier",                                "ClassName"),

    // Import statements.
    ("import_statement.import",                                         "Import"),
    ("import_statement.dotted_name",                                    "ImportedName"),
    ("import_from_statement.import",                                    "Import"),
    ("import_from_statement.from",                                      "Import"),
    ("import_from_statement.dotted_name",                               "ImportedName"),
    ("import_from_statement.aliased_import.as",                         "Import"),
    ("import_from_statement.aliased_import.dotted_name",                "ImportedName"),
    ("import_from_statement.aliased_import.identifier",                 "ImportedAliasedName"),

    // Functions and methods.
    ("function_definition.def",                                         "Function"),
    ("function_definition.name:identifier",                             "FunctionName"),
    ("function_definition.parameters.identifier",                       "Parameter"),
    ("function_definition.parameters.typed_parameter.identifier",       "Parameter"),
    ("class_definition.block.function_definition.def",                  "Method"),
    ("class_definition.block.function_definition.name:identifier",      "MethodName"),

    // Method and function invocation.
    ("call.identifier",                                                 "CalledFunction"),
    ("call.attribute+.identifier",                                      "CalledMethod"),
    ("argument_list.identifier",                                        "Argument"),

    // Type annotations.
    ("type_parameter.[",                                                "TypeBracket"),
    ("type_parameter.]",                                                "TypeBracket"),
    ("type.identifier",                                                 "Type"),
];

/// The built-in Python rule set, outermost ancestors first per rule.
pub fn rules() -> Vec<Rule> {
    RULES
        .iter()
        .map(|(path, label)| Rule::from_dotted(path, label))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/presets/python.rs"]
mod tests;

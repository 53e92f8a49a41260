use std::{fmt, str::FromStr};

use anyhow::{Result, bail};
use tree_sitter::Node;

use crate::core::parsers::go::ParsedGo;

/// Qualified name of the function that produces the translation function,
/// e.g. `i18n.MustTfunc`.
///
/// Matched structurally against a call's selector expression: the operand
/// must be an identifier equal to `qualifier` and the selected field must
/// equal `member`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryName {
    pub qualifier: String,
    pub member: String,
}

pub const DEFAULT_FACTORY: &str = "i18n.MustTfunc";

impl Default for FactoryName {
    fn default() -> Self {
        Self {
            qualifier: "i18n".to_string(),
            member: "MustTfunc".to_string(),
        }
    }
}

impl FactoryName {
    /// True if `call` is a `call_expression` invoking this factory.
    pub fn is_called_by(&self, parsed: &ParsedGo, call: Node<'_>) -> bool {
        if call.kind() != "call_expression" {
            return false;
        }
        let Some(function) = call.child_by_field_name("function") else {
            return false;
        };
        if function.kind() != "selector_expression" {
            return false;
        }
        let (Some(operand), Some(field)) = (
            function.child_by_field_name("operand"),
            function.child_by_field_name("field"),
        ) else {
            return false;
        };

        operand.kind() == "identifier"
            && parsed.text(operand) == self.qualifier
            && parsed.text(field) == self.member
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}

impl FromStr for FactoryName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('.') {
            Some((qualifier, member)) if is_identifier(qualifier) && is_identifier(member) => {
                Ok(Self {
                    qualifier: qualifier.to_string(),
                    member: member.to_string(),
                })
            }
            _ => bail!(
                "Invalid factory \"{}\": expected <package>.<function>, e.g. \"{}\"",
                s,
                DEFAULT_FACTORY
            ),
        }
    }
}

impl fmt::Display for FactoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.qualifier, self.member)
    }
}

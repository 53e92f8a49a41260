//! Second scanner pass: collect string literals passed to the alias.
//!
//! ```go
//! T("hello.world")             // collected
//! T("count", map[string]int{}) // "count" collected, map ignored
//! T(key)                       // ignored: not a literal
//! ```

use std::{ops::ControlFlow, path::PathBuf};

use anyhow::Result;

use crate::core::{
    data::SourceLocation,
    parsers::go::{ParsedGo, parse_go_file, walk},
};

const STRING_LITERAL_KINDS: &[&str] = &["interpreted_string_literal", "raw_string_literal"];

/// A string literal argument exactly as written in source, quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLiteral {
    pub text: String,
    pub location: SourceLocation,
}

impl RawLiteral {
    /// The message id: the literal with one leading and one trailing quote
    /// character removed. Escape sequences are kept as written.
    pub fn message_id(&self) -> &str {
        let mut chars = self.text.chars();
        chars.next();
        chars.next_back();
        chars.as_str()
    }
}

/// Collect every string literal argument of calls to `alias` in `files`.
///
/// Literals are returned in file order, then source order, then argument
/// order. Each file is parsed afresh.
pub fn collect_literals(files: &[PathBuf], alias: &str) -> Result<Vec<RawLiteral>> {
    let mut literals = Vec::new();
    for path in files {
        let parsed = parse_go_file(path)?;
        literals.extend(find_literals(&parsed, alias));
    }
    Ok(literals)
}

/// Collect literal arguments of `alias(...)` calls in one parsed file.
pub fn find_literals(parsed: &ParsedGo, alias: &str) -> Vec<RawLiteral> {
    let mut literals = Vec::new();
    let _ = walk(parsed.root(), &mut |node| {
        if node.kind() != "call_expression" {
            return ControlFlow::Continue(());
        }
        let Some(function) = node.child_by_field_name("function") else {
            return ControlFlow::Continue(());
        };
        if function.kind() != "identifier" || parsed.text(function) != alias {
            return ControlFlow::Continue(());
        }
        if let Some(arguments) = node.child_by_field_name("arguments") {
            let mut cursor = arguments.walk();
            for arg in arguments.named_children(&mut cursor) {
                if STRING_LITERAL_KINDS.contains(&arg.kind()) {
                    literals.push(RawLiteral {
                        text: parsed.text(arg).to_string(),
                        location: parsed.location(arg),
                    });
                }
            }
        }
        ControlFlow::Continue(())
    });
    literals
}

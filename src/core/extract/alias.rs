//! First scanner pass: find the local name bound to the translation function.
//!
//! ```go
//! T := i18n.MustTfunc("en-US")
//! ```
//!
//! Only one alias is tracked per run. The first matching assignment (in file
//! order, then source order) wins and later re-bindings are ignored.

use std::{ops::ControlFlow, path::PathBuf};

use anyhow::Result;
use tree_sitter::Node;

use super::FactoryName;
use crate::core::parsers::go::{ParsedGo, parse_go_file, walk};

/// Node kinds for `x := ...` and `x = ...`.
const ASSIGNMENT_KINDS: &[&str] = &["short_var_declaration", "assignment_statement"];

/// Scan `files` for an assignment from `factory` and return the bound name.
///
/// Returns `Ok(None)` if no file contains one. A file that fails to parse
/// aborts the scan.
pub fn discover_alias(files: &[PathBuf], factory: &FactoryName) -> Result<Option<String>> {
    for path in files {
        let parsed = parse_go_file(path)?;
        if let Some(alias) = find_alias(&parsed, factory) {
            return Ok(Some(alias));
        }
    }
    Ok(None)
}

/// Find the first alias assignment in one parsed file.
pub fn find_alias(parsed: &ParsedGo, factory: &FactoryName) -> Option<String> {
    let mut alias = None;
    let _ = walk(parsed.root(), &mut |node| {
        if ASSIGNMENT_KINDS.contains(&node.kind())
            && let Some(name) = assigned_name(parsed, node, factory)
        {
            alias = Some(name);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    });
    alias
}

/// The first left-hand identifier of `stmt`, if any right-hand value calls
/// the factory.
fn assigned_name(parsed: &ParsedGo, stmt: Node<'_>, factory: &FactoryName) -> Option<String> {
    let left = stmt.child_by_field_name("left")?;
    let right = stmt.child_by_field_name("right")?;

    let mut cursor = right.walk();
    let calls_factory = right
        .named_children(&mut cursor)
        .any(|value| factory.is_called_by(parsed, value));
    if !calls_factory {
        return None;
    }

    let target = left.named_child(0)?;
    if target.kind() != "identifier" {
        return None;
    }
    let name = parsed.text(target);
    (name != "_").then(|| name.to_string())
}

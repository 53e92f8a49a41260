use std::{error::Error, fmt, fs, ops::ControlFlow, path::Path};

use anyhow::{Context, Result, anyhow};
use tree_sitter::{Node, Parser, Tree};

use crate::core::data::SourceLocation;

/// A Go source file parsed into a syntax tree.
#[derive(Debug)]
pub struct ParsedGo {
    pub file_path: String,
    pub source: String,
    pub tree: Tree,
}

impl ParsedGo {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    pub fn text(&self, node: Node<'_>) -> &str {
        &self.source[node.byte_range()]
    }

    /// 1-indexed location of `node`, with the column counted in characters.
    pub fn location(&self, node: Node<'_>) -> SourceLocation {
        let (line, col) = position(&self.source, node);
        SourceLocation::new(self.file_path.clone(), line, col)
    }
}

/// A source file that does not parse as Go.
///
/// Scanning treats this as fatal. The error keeps the offending line so the
/// CLI can render it with a caret under the first bad token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceParseError {
    pub location: SourceLocation,
    pub source_line: String,
    pub message: String,
}

impl fmt::Display for SourceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

impl Error for SourceParseError {}

/// Read and parse a Go file.
pub fn parse_go_file(path: &Path) -> Result<ParsedGo> {
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    parse_go_source(code, &path.to_string_lossy())
}

/// Parse Go source code into a syntax tree.
///
/// Fails with [`SourceParseError`] if the tree contains any error or missing
/// node.
pub fn parse_go_source(code: String, file_path: &str) -> Result<ParsedGo> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| anyhow!("Failed to load Go grammar: {}", e))?;

    let tree = parser
        .parse(&code, None)
        .ok_or_else(|| anyhow!("Failed to parse {}", file_path))?;

    let parsed = ParsedGo {
        file_path: file_path.to_string(),
        source: code,
        tree,
    };

    if parsed.root().has_error() {
        return Err(parse_error(&parsed).into());
    }

    Ok(parsed)
}

fn parse_error(parsed: &ParsedGo) -> SourceParseError {
    let mut bad = parsed.root();
    let _ = walk(parsed.root(), &mut |node| {
        if node.is_error() || node.is_missing() {
            bad = node;
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    let message = if bad.is_missing() {
        format!("syntax error: missing {}", bad.kind())
    } else {
        let snippet: String = parsed.text(bad).chars().take(20).collect();
        if snippet.trim().is_empty() {
            "syntax error".to_string()
        } else {
            format!("syntax error near \"{}\"", snippet.trim())
        }
    };

    let location = parsed.location(bad);
    let source_line = parsed
        .source
        .lines()
        .nth(location.line - 1)
        .unwrap_or_default()
        .to_string();

    SourceParseError {
        location,
        source_line,
        message,
    }
}

fn position(source: &str, node: Node<'_>) -> (usize, usize) {
    let start = node.start_byte();
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let line = node.start_position().row + 1;
    let col = source[line_start..start].chars().count() + 1;
    (line, col)
}

/// Visit `root` and its descendants in pre-order (source order).
///
/// The visitor returns `ControlFlow::Break` to stop the walk early.
pub fn walk<'t, F>(root: Node<'t>, visit: &mut F) -> ControlFlow<()>
where
    F: FnMut(Node<'t>) -> ControlFlow<()>,
{
    let mut cursor = root.walk();
    loop {
        if visit(cursor.node()).is_break() {
            return ControlFlow::Break(());
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return ControlFlow::Continue(());
            }
        }
    }
}

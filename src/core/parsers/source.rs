use std::{path::Path, sync::Arc};

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax, error::Error};

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Pick the swc syntax for a source file from its extension.
///
/// JSX is only enabled for `.tsx`/`.jsx`: in plain `.ts` files `<T>value` is a
/// type assertion, not an element.
pub fn syntax_for(file_path: &str) -> Syntax {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    match extension {
        "js" | "mjs" | "cjs" | "jsx" => Syntax::Es(EsSyntax {
            jsx: true,
            decorators: true,
            ..Default::default()
        }),
        _ => Syntax::Typescript(TsSyntax {
            tsx: extension == "tsx",
            decorators: true,
            ..Default::default()
        }),
    }
}

/// Parse TypeScript/JavaScript source code into an AST.
///
/// Any syntax error fails the parse, including errors swc could recover from:
/// extracting from a half-understood file would silently drop keys.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(syntax_for(file_path), StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| describe_error(&e, file_path, &source_map))?;

        if let Some(e) = parser.take_errors().first() {
            return Err(describe_error(e, file_path, &source_map));
        }

        Ok(ParsedSource { module, source_map })
    })
}

fn describe_error(error: &Error, file_path: &str, source_map: &SourceMap) -> anyhow::Error {
    let loc = source_map.lookup_char_pos(error.span().lo);
    anyhow!(
        "Failed to parse {}:{}:{}: {}",
        file_path,
        loc.line,
        loc.col_display + 1,
        error.kind().msg()
    )
}

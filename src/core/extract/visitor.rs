//! AST visitor collecting translation template calls.
//!
//! Finds every tagged template whose tag is one of [`TRANSLATION_TAGS`]:
//!
//! ```ts
//! t`Hello ${name}!`            // key "Hello {0}!"
//! lt`Total: ${a} of ${b}`      // key "Total: {0} of {1}"
//! t`Outer ${lt`inner ${x}`}`   // keys "Outer {0}" and "inner {0}"
//! ```
//!
//! The key depends only on the static parts and the number of interpolations;
//! interpolated expressions are never evaluated.

use swc_common::SourceMap;
use swc_ecma_ast::{Expr, Module, TaggedTpl, Tpl};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::key::build_key;

/// Tag identifiers recognized as translation calls.
pub const TRANSLATION_TAGS: [&str; 2] = ["t", "lt"];

/// A translation call found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedString {
    pub localization_key: String,
    /// 1-based line of the call's tag.
    pub line: usize,
}

pub struct TemplateCallVisitor<'a> {
    source_map: &'a SourceMap,
    found: Vec<ExtractedString>,
}

impl<'a> TemplateCallVisitor<'a> {
    pub fn new(source_map: &'a SourceMap) -> Self {
        Self {
            source_map,
            found: Vec::new(),
        }
    }

    /// Walk a module and return its translation calls in source order.
    pub fn analyze(mut self, module: &Module) -> Vec<ExtractedString> {
        self.visit_module(module);
        self.found
    }

    fn is_translation_tag(tag: &Expr) -> bool {
        match tag {
            Expr::Ident(ident) => TRANSLATION_TAGS.contains(&&*ident.sym),
            _ => false,
        }
    }

    /// Static parts in their cooked form, i.e. with JS escapes applied.
    ///
    /// Tagged templates may contain escapes that have no cooked value
    /// (`\unicode`); the raw text is used for those.
    fn static_parts(tpl: &Tpl) -> Vec<String> {
        tpl.quasis
            .iter()
            .map(|quasi| {
                quasi
                    .cooked
                    .as_ref()
                    .and_then(|cooked| cooked.as_str())
                    .map(str::to_owned)
                    .unwrap_or_else(|| quasi.raw.to_string())
            })
            .collect()
    }
}

impl<'a> Visit for TemplateCallVisitor<'a> {
    fn visit_tagged_tpl(&mut self, node: &TaggedTpl) {
        if Self::is_translation_tag(&node.tag) {
            let parts = Self::static_parts(&node.tpl);
            let line = self.source_map.lookup_char_pos(node.span.lo).line;
            self.found.push(ExtractedString {
                localization_key: build_key(&parts, node.tpl.exprs.len()),
                line,
            });
        }

        // Interpolations may hold further translation calls.
        node.visit_children_with(self);
    }
}

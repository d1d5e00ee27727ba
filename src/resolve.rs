use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::catalog::{Catalog, Instruction};
use crate::lexer::word_at;
use crate::scope::is_assembly_scope;

lazy_static! {
    static ref CONDITION_CODES: Regex = Regex::new("[nzp]").unwrap();
}

/// Remove every lowercase `n`, `z` and `p` from `token`, wherever it appears.
///
/// Lets a single `BR` entry serve `BRn`, `BRzp`, `BRnzp` and friends. The letters are removed
/// from any token, not only branches, so `"ZAp"` becomes `"ZA"`.
pub fn strip_condition_codes(token: &str) -> Cow<'_, str> {
    CONDITION_CODES.replace_all(token, "")
}

/// What a tooltip shows for a resolved token.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Payload {
    /// The token after condition codes were stripped.
    pub key: String,
    pub operands: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

impl Payload {
    fn new(key: String, instr: Instruction) -> Self {
        Payload {
            key,
            operands: instr.operands,
            description: instr.description,
            example: instr.example,
        }
    }
}

/// Turns the word under the cursor into a [`Payload`], or nothing.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Resolver::new(Catalog::global())
    }
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Resolver { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Outside of an assembly scope nothing is looked up.
    pub fn resolve(&self, raw: &str, in_scope: bool) -> Option<Payload> {
        if !in_scope {
            return None;
        }
        let key = strip_condition_codes(raw);
        let instr = self.catalog.lookup(&key)?;
        Some(Payload::new(key.into_owned(), instr))
    }

    /// Resolve the word around byte `offset` of `text`, gated on the host's scope name.
    pub fn resolve_at(&self, text: &str, offset: usize, scope_name: &str) -> Option<Payload> {
        self.resolve(word_at(text, offset), is_assembly_scope(scope_name))
    }
}

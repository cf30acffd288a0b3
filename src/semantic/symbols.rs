//! Scope-aware symbol table
//!
//! Symbols live in one ordered, index-stable `Vec`, so a [`SymbolId`] stays
//! valid for the whole run and the final report comes out in declaration
//! order. Visibility is tracked separately:
//!
//! - `live` maps each name to the chain of its valid symbols, innermost last
//! - `scopes` lists, per depth, the symbols still valid at that depth
//!
//! Closing a scope invalidates its symbols and unlinks them from `live`.
//! Nothing is deleted until [`SymbolTable::finalize`].

use super::report::SymbolReport;
use super::value::Value;
use crate::parser::syntax::DataType;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Index of a symbol in declaration order
pub type SymbolId = usize;

/// What a symbol names, shown in the report's `Symbol` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Identifier,
    Function,
    Param,
}

impl SymbolKind {
    pub fn tag(self) -> &'static str {
        match self {
            SymbolKind::Identifier => "identifier",
            SymbolKind::Function => "function",
            SymbolKind::Param => "param",
        }
    }
}

/// One symbol record. `ty == None` means the symbol is still untyped.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub ty: Option<DataType>,
    pub scope: usize,
    pub line: usize,
    pub value: Option<Value>,
    pub valid: bool,
}

impl Symbol {
    fn untyped(name: &str, scope: usize, line: usize) -> Self {
        Symbol {
            name: name.to_string(),
            kind: SymbolKind::Identifier,
            ty: None,
            scope,
            line,
            value: None,
            valid: true,
        }
    }

    pub fn is_typed(&self) -> bool {
        self.ty.is_some()
    }
}

/// Result of [`SymbolTable::resolve_or_declare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub id: SymbolId,
    /// The symbol belongs to an enclosing scope and is visible by inheritance
    pub inherited: bool,
    /// The symbol was created by this lookup
    pub created: bool,
}

/// Result of [`SymbolTable::declare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declared {
    /// A new symbol, or an untyped one at this scope that is now typed
    Fresh(SymbolId),
    /// A new symbol hiding a same-named one from an enclosing scope
    Shadowing { id: SymbolId, hidden: SymbolId },
    /// The name is already typed at this scope; nothing changed
    Redefinition(SymbolId),
}

impl Declared {
    pub fn id(self) -> SymbolId {
        match self {
            Declared::Fresh(id) | Declared::Redefinition(id) => id,
            Declared::Shadowing { id, .. } => id,
        }
    }
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    live: FxHashMap<String, Vec<SymbolId>>,
    scopes: Vec<Vec<SymbolId>>,
    depth: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![Vec::new()],
            ..Default::default()
        }
    }

    /// Current scope depth; the global scope is 0
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id]
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Innermost valid symbol for `name`, without creating one
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.live.get(name).and_then(|chain| chain.last().copied())
    }

    /// Resolve `name` from the current scope outward. If nothing valid is
    /// visible, a new untyped symbol is created at the current scope.
    pub fn resolve_or_declare(&mut self, name: &str, line: usize) -> Resolution {
        if let Some(id) = self.lookup(name) {
            let inherited = self.symbols[id].scope < self.depth;
            trace!(name, id, inherited, "resolved");
            return Resolution {
                id,
                inherited,
                created: false,
            };
        }

        let id = self.insert(Symbol::untyped(name, self.depth, line));
        Resolution {
            id,
            inherited: false,
            created: true,
        }
    }

    /// Declare `name` at the current scope and type it.
    ///
    /// An untyped symbol already at this scope is typed in place. A symbol
    /// from an enclosing scope is shadowed by a new one. A typed symbol at
    /// this scope is a redefinition and is left untouched.
    pub fn declare(
        &mut self,
        name: &str,
        kind: SymbolKind,
        ty: DataType,
        value: Option<Value>,
        line: usize,
    ) -> Declared {
        let resolution = self.resolve_or_declare(name, line);

        if resolution.inherited {
            let hidden = resolution.id;
            let mut symbol = Symbol::untyped(name, self.depth, line);
            symbol.kind = kind;
            symbol.ty = Some(ty);
            symbol.value = value.map(|v| v.convert_to(ty));
            let id = self.insert(symbol);
            debug!(name, id, hidden, scope = self.depth, "shadowing declaration");
            return Declared::Shadowing { id, hidden };
        }

        if self.symbols[resolution.id].is_typed() {
            debug!(name, id = resolution.id, "redefinition ignored");
            return Declared::Redefinition(resolution.id);
        }

        let id = resolution.id;
        self.symbols[id].line = line;
        self.symbols[id].kind = kind;
        self.type_symbol(id, ty, value);
        debug!(name, id, ty = %ty, scope = self.depth, "declared");
        Declared::Fresh(id)
    }

    /// Set type and value of an untyped symbol. A typed symbol keeps its
    /// first type and value; returns whether anything changed.
    pub fn type_symbol(&mut self, id: SymbolId, ty: DataType, value: Option<Value>) -> bool {
        let symbol = &mut self.symbols[id];
        if symbol.is_typed() {
            return false;
        }
        symbol.ty = Some(ty);
        symbol.value = value.map(|v| v.convert_to(ty));
        true
    }

    /// Store an assigned value, converted to the symbol's type
    pub fn assign(&mut self, id: SymbolId, value: Option<Value>) {
        let symbol = &mut self.symbols[id];
        if let Some(ty) = symbol.ty {
            symbol.value = value.map(|v| v.convert_to(ty));
        }
    }

    pub fn open_scope(&mut self) {
        self.depth += 1;
        if self.scopes.len() <= self.depth {
            self.scopes.push(Vec::new());
        }
        trace!(depth = self.depth, "scope opened");
    }

    /// Invalidate every symbol declared at the current depth, then step out.
    /// Closing the global scope is a no-op.
    pub fn close_scope(&mut self) {
        if self.depth == 0 {
            return;
        }

        let closing = std::mem::take(&mut self.scopes[self.depth]);
        for id in &closing {
            let symbol = &mut self.symbols[*id];
            symbol.valid = false;
            if let Some(chain) = self.live.get_mut(&symbol.name) {
                chain.retain(|live| live != id);
            }
        }
        trace!(depth = self.depth, closed = closing.len(), "scope closed");
        self.depth -= 1;
    }

    /// End-of-program cleanup: untyped symbols and the `main` function are
    /// dropped, the rest are reported in declaration order
    pub fn finalize(&self) -> SymbolReport {
        let rows = self
            .symbols
            .iter()
            .filter(|s| s.is_typed())
            .filter(|s| !(s.kind == SymbolKind::Function && s.name == "main"))
            .collect::<Vec<_>>();
        SymbolReport::from_symbols(rows)
    }

    fn insert(&mut self, symbol: Symbol) -> SymbolId {
        let id = self.symbols.len();
        self.live.entry(symbol.name.clone()).or_default().push(id);
        self.scopes[symbol.scope].push(id);
        self.symbols.push(symbol);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declare_int(table: &mut SymbolTable, name: &str, value: i32) -> Declared {
        table.declare(
            name,
            SymbolKind::Identifier,
            DataType::Int,
            Some(Value::Int(value)),
            1,
        )
    }

    #[test]
    fn test_unknown_name_creates_untyped_symbol() {
        let mut table = SymbolTable::new();
        let res = table.resolve_or_declare("x", 3);
        assert!(res.created);
        assert!(!res.inherited);
        assert!(!table.get(res.id).is_typed());
        assert_eq!(table.get(res.id).line, 3);
    }

    #[test]
    fn test_outer_symbol_is_inherited() {
        let mut table = SymbolTable::new();
        let outer = declare_int(&mut table, "a", 1).id();
        table.open_scope();
        let res = table.resolve_or_declare("a", 2);
        assert_eq!(res.id, outer);
        assert!(res.inherited);
        assert!(!res.created);
    }

    #[test]
    fn test_shadowing_restores_outer_after_close() {
        let mut table = SymbolTable::new();
        let outer = declare_int(&mut table, "a", 5).id();

        table.open_scope();
        let inner = declare_int(&mut table, "a", 6);
        assert_eq!(
            inner,
            Declared::Shadowing {
                id: 1,
                hidden: outer
            }
        );
        assert_eq!(table.lookup("a"), Some(1));
        table.close_scope();

        assert_eq!(table.lookup("a"), Some(outer));
        assert_eq!(table.get(outer).value, Some(Value::Int(5)));
        assert!(!table.get(1).valid);
    }

    #[test]
    fn test_redefinition_keeps_first_type() {
        let mut table = SymbolTable::new();
        let first = declare_int(&mut table, "a", 1).id();
        let again = table.declare("a", SymbolKind::Identifier, DataType::Float, None, 2);
        assert_eq!(again, Declared::Redefinition(first));
        assert_eq!(table.get(first).ty, Some(DataType::Int));
        assert_eq!(table.symbols().len(), 1);
    }

    #[test]
    fn test_type_symbol_first_wins() {
        let mut table = SymbolTable::new();
        let id = table.resolve_or_declare("c", 1).id;
        assert!(table.type_symbol(id, DataType::Char, Some(Value::Int(65))));
        assert!(!table.type_symbol(id, DataType::Int, Some(Value::Int(1))));
        assert_eq!(table.get(id).value, Some(Value::Char(b'A')));
    }

    #[test]
    fn test_closed_inner_symbol_is_not_visible() {
        let mut table = SymbolTable::new();
        table.open_scope();
        declare_int(&mut table, "t", 1);
        table.close_scope();

        let res = table.resolve_or_declare("t", 4);
        assert!(res.created);
        assert_eq!(table.get(res.id).scope, 0);
    }

    #[test]
    fn test_finalize_drops_untyped_and_main() {
        let mut table = SymbolTable::new();
        table.declare("main", SymbolKind::Function, DataType::Int, None, 1);
        table.resolve_or_declare("ghost", 2);
        declare_int(&mut table, "kept", 3);

        let report = table.finalize();
        let names: Vec<_> = report.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["kept"]);
    }
}

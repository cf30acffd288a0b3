//! Reduction-driven analysis
//!
//! [`Analyzer`] is the single context every reduction flows through. It owns
//! the symbol table, the AST builder, the diagnostics and the current
//! declaration type, and keeps an operand stack in lock-step with the
//! builder's tree stack: for every subtree on the tree stack there is one
//! [`Operand`] saying what type it has, what constant it folds to and which
//! symbol it names.
//!
//! Phase 1 is [`Analyzer::run`] / [`Analyzer::apply`]. [`Analyzer::finish`]
//! closes phase 1 and produces the [`Analysis`] phase 2 works on.

use super::builder::AstBuilder;
use super::diagnostics::{Diagnostic, Diagnostics};
use super::errors::AnalysisError;
use super::report::SymbolReport;
use super::serialize::{compute_depth, preorder};
use super::symbols::{Declared, SymbolId, SymbolKind, SymbolTable};
use super::tree::{AstNode, BuilderError};
use super::value::{Value, DIVISION_BY_ZERO_SENTINEL};
use crate::parser::events::{EventSource, Reduction, Rule};
use crate::parser::parse::Parser;
use crate::parser::syntax::{AssignOp, BinaryOp, DataType, PostfixOp, UnaryOp};
use tracing::{debug, info, trace, warn};

/// What the analyzer knows about a subtree on the construction stack
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Operand {
    pub ty: Option<DataType>,
    pub value: Option<Value>,
    /// Set when the subtree is a plain identifier, i.e. assignable
    pub symbol: Option<SymbolId>,
}

impl Operand {
    fn constant(value: Value) -> Self {
        Operand {
            ty: Some(value.data_type()),
            value: Some(value),
            symbol: None,
        }
    }

    fn typed(ty: Option<DataType>, value: Option<Value>) -> Self {
        Operand {
            ty,
            value,
            symbol: None,
        }
    }
}

/// Warning text for an implicit conversion that can lose information
pub fn narrowing_warning(target: DataType, source: DataType) -> Option<&'static str> {
    match (target, source) {
        (DataType::Int, DataType::Float) => Some("implicit conversion from 'float' to 'int'"),
        (DataType::Float, DataType::Char) => Some("implicit conversion from 'char' to 'float'"),
        (DataType::Char, DataType::Float) => Some("implicit conversion from 'float' to 'char'"),
        _ => None,
    }
}

/// Outcome of a whole run
#[derive(Debug)]
pub struct Analysis {
    /// The finished tree with levels computed, when the stack was balanced
    pub root: Option<AstNode>,
    pub report: SymbolReport,
    pub diagnostics: Vec<Diagnostic>,
    /// Syntax error or builder failure that cut the run short
    pub failure: Option<AnalysisError>,
}

impl Analysis {
    pub fn preorder(&self) -> Option<String> {
        self.root.as_ref().map(preorder)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }

    /// Diagnostics whose message contains `needle`
    pub fn find_diagnostics<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.message.contains(needle))
    }

    /// Process status: 1 on any error diagnostic or builder failure
    pub fn exit_code(&self) -> i32 {
        let builder_failed = self
            .failure
            .as_ref()
            .is_some_and(AnalysisError::is_builder_failure);
        if self.error_count() > 0 || builder_failed {
            1
        } else {
            0
        }
    }
}

#[derive(Debug)]
pub struct Analyzer {
    symbols: SymbolTable,
    builder: AstBuilder,
    operands: Vec<Operand>,
    diagnostics: Diagnostics,
    decl_type: Option<DataType>,
    /// Targets of `name = initializer` awaiting their initializer
    pending: Vec<Declared>,
    failure: Option<AnalysisError>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_diagnostics(Diagnostics::new())
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer reporting into `diagnostics`, e.g. [`Diagnostics::echoing`]
    pub fn with_diagnostics(diagnostics: Diagnostics) -> Self {
        Analyzer {
            symbols: SymbolTable::new(),
            builder: AstBuilder::new(),
            operands: Vec::new(),
            diagnostics,
            decl_type: None,
            pending: Vec::new(),
            failure: None,
        }
    }

    /// Parse and analyze `source` in one go
    pub fn analyze(source: &str) -> Analysis {
        Analyzer::new().run(&mut Parser::reductions(source))
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Depth of the construction stack
    pub fn stack_depth(&self) -> usize {
        self.builder.depth()
    }

    /// Phase 1: pull every event from `source` and apply it.
    ///
    /// A syntax error is reported as an error diagnostic and ends the
    /// stream. A builder failure ends it too, without a tree.
    pub fn run<S: EventSource + ?Sized>(mut self, source: &mut S) -> Analysis {
        info!("analysis started");
        let mut applied = 0usize;

        loop {
            match source.next_event() {
                Ok(Some(event)) => {
                    if let Err(err) = self.apply(&event) {
                        warn!(%err, line = event.line(), "builder failure");
                        return self.abort(err);
                    }
                    applied += 1;
                }
                Ok(None) => break,
                Err(err) => {
                    self.diagnostics
                        .error(err.location.line, format!("syntax error: {}", err.message));
                    self.failure = Some(err.into());
                    break;
                }
            }
        }

        info!(applied, "event stream finished");
        self.finish()
    }

    /// End phase 1: finalize the table, check the stack holds exactly one
    /// tree and compute its levels
    pub fn finish(mut self) -> Analysis {
        let report = self.symbols.finalize();
        let root = match self.builder.finish() {
            Ok(mut root) => {
                compute_depth(&mut root, 1);
                Some(root)
            }
            Err(err) => {
                warn!(%err, "no single root");
                if self.failure.is_none() {
                    self.failure = Some(err.into());
                }
                None
            }
        };

        Analysis {
            root,
            report,
            diagnostics: self.diagnostics.into_entries(),
            failure: self.failure,
        }
    }

    fn abort(self, err: BuilderError) -> Analysis {
        Analysis {
            root: None,
            report: self.symbols.finalize(),
            diagnostics: self.diagnostics.into_entries(),
            failure: Some(err.into()),
        }
    }

    /// Apply one reduction
    pub fn apply(&mut self, reduction: &Reduction) -> Result<(), BuilderError> {
        let line = reduction.line();
        trace!(rule = ?reduction.rule, line, "apply");

        match &reduction.rule {
            Rule::OpenScope => self.symbols.open_scope(),
            Rule::CloseScope => self.symbols.close_scope(),
            Rule::TypeSpecifier(ty) => self.decl_type = Some(*ty),

            Rule::FunctionDeclarator { name, typed } => {
                self.function_declarator(name, *typed, line)
            }
            Rule::Parameter { name, ty } => {
                let declared = self
                    .symbols
                    .declare(name, SymbolKind::Param, *ty, None, line);
                self.check_redefinition(declared, name, line);
            }
            Rule::FunctionDefinition { name, .. } => {
                self.statement(name, 1)?;
                self.symbols.close_scope();
                debug!(name = %name, "function defined");
            }

            Rule::DeclTarget { name } => self.decl_target(name, line),
            Rule::InitDeclarator { name } => self.init_declarator(name, line)?,
            Rule::Declarator { name } => self.declarator(name, line),
            Rule::Declaration => self.decl_type = None,

            Rule::Identifier { name } => self.identifier(name, line),
            Rule::IntLiteral(n) => self.literal(Value::Int(*n)),
            Rule::FloatLiteral(x) => self.literal(Value::Float(*x)),
            Rule::CharLiteral(c) => self.literal(Value::Char(*c)),

            Rule::Unary(op) => self.unary(*op)?,
            Rule::Postfix(op) => self.postfix(*op)?,
            Rule::Binary(op) => self.binary(*op, line)?,
            Rule::Assign(op) => self.assign(*op, line)?,
            Rule::Ternary => self.ternary()?,
            Rule::Comma => {
                let [_, rhs] = self.take::<2>(",")?;
                self.reduce(",", 2, Operand::typed(rhs.ty, rhs.value))?;
            }

            Rule::EmptyStatement => self.leaf(";", Operand::default()),
            Rule::EmptyBlock => self.leaf("{}", Operand::default()),
            Rule::Sequence => self.statement("stmt", 2)?,
            Rule::If => self.statement("if", 2)?,
            Rule::IfElse => self.statement("if", 3)?,
            Rule::While => self.statement("while", 2)?,
            Rule::For => self.statement("for", 4)?,
            Rule::Return { value: true } => self.statement("return", 1)?,
            Rule::Return { value: false } => self.leaf("return", Operand::default()),
        }

        Ok(())
    }

    // ===== Stack helpers =====

    fn leaf(&mut self, label: impl Into<String>, operand: Operand) {
        self.builder.push_leaf(label);
        self.operands.push(operand);
    }

    /// Pop the top `N` operands, oldest first. The builder's subtrees are
    /// left in place for [`Self::reduce`] or [`Self::drop_subtrees`].
    fn take<const N: usize>(&mut self, label: &str) -> Result<[Operand; N], BuilderError> {
        let available = self.operands.len().min(self.builder.depth());
        if available < N {
            return Err(BuilderError::StackUnderflow {
                label: label.to_string(),
                needed: N,
                available,
            });
        }
        let start = self.operands.len() - N;
        let mut taken = [Operand::default(); N];
        taken.copy_from_slice(&self.operands[start..]);
        self.operands.truncate(start);
        Ok(taken)
    }

    /// Combine the top `arity` subtrees under `label`
    fn reduce(&mut self, label: &str, arity: usize, result: Operand) -> Result<(), BuilderError> {
        match arity {
            1 => self.builder.push_unary(label)?,
            2 => self.builder.push_binary(label)?,
            _ => self.builder.push_node(label, arity)?,
        }
        self.operands.push(result);
        Ok(())
    }

    fn statement(&mut self, label: &str, arity: usize) -> Result<(), BuilderError> {
        self.discard(arity, label)?;
        match (label, arity) {
            ("if", 2) => self.builder.push_if_then()?,
            ("if", 3) => self.builder.push_if_then_else()?,
            ("for", 4) => self.builder.push_for()?,
            _ => self.builder.push_node(label, arity)?,
        }
        self.operands.push(Operand::default());
        Ok(())
    }

    /// Drop the top `count` operands when their contents do not matter
    fn discard(&mut self, count: usize, label: &str) -> Result<(), BuilderError> {
        let available = self.operands.len().min(self.builder.depth());
        if available < count {
            return Err(BuilderError::StackUnderflow {
                label: label.to_string(),
                needed: count,
                available,
            });
        }
        self.operands.truncate(self.operands.len() - count);
        Ok(())
    }

    // ===== Declarations =====

    fn declared_type(&self) -> DataType {
        self.decl_type.unwrap_or(DataType::Int)
    }

    fn check_redefinition(&mut self, declared: Declared, name: &str, line: usize) -> bool {
        if let Declared::Redefinition(_) = declared {
            self.diagnostics
                .error(line, format!("redefinition of '{}'", name));
            return true;
        }
        false
    }

    fn function_declarator(&mut self, name: &str, typed: bool, line: usize) {
        let ty = if typed {
            self.declared_type()
        } else {
            self.diagnostics
                .warning(line, "type specifier missing, defaults to 'int'");
            DataType::Int
        };
        let declared = self
            .symbols
            .declare(name, SymbolKind::Function, ty, None, line);
        self.check_redefinition(declared, name, line);
        self.decl_type = None;
        // Parameters and body share one scope
        self.symbols.open_scope();
    }

    fn declarator(&mut self, name: &str, line: usize) {
        let ty = self.declared_type();
        let declared = self
            .symbols
            .declare(name, SymbolKind::Identifier, ty, None, line);
        self.check_redefinition(declared, name, line);
        self.leaf(
            format!("Dc {}", name),
            Operand {
                ty: Some(ty),
                value: None,
                symbol: Some(declared.id()),
            },
        );
    }

    fn decl_target(&mut self, name: &str, line: usize) {
        let ty = self.declared_type();
        let declared = self
            .symbols
            .declare(name, SymbolKind::Identifier, ty, None, line);
        self.check_redefinition(declared, name, line);
        self.pending.push(declared);
        self.leaf(
            name,
            Operand {
                ty: Some(ty),
                value: None,
                symbol: Some(declared.id()),
            },
        );
    }

    fn init_declarator(&mut self, name: &str, line: usize) -> Result<(), BuilderError> {
        let [target, init] = self.take::<2>("=")?;
        let ty = target.ty.unwrap_or(DataType::Int);

        let stored = match self.pending.pop() {
            Some(Declared::Redefinition(_)) | None => None,
            Some(declared) => {
                self.warn_narrowing(ty, init.ty, line);
                let value = init.value.map(|v| v.convert_to(ty));
                self.symbols.assign(declared.id(), value);
                trace!(name, ?value, "initialized");
                value
            }
        };

        self.reduce("=", 2, Operand::typed(Some(ty), stored))
    }

    // ===== Expressions =====

    fn identifier(&mut self, name: &str, line: usize) {
        let resolution = self.symbols.resolve_or_declare(name, line);
        let symbol = self.symbols.get(resolution.id);

        if !symbol.is_typed() && !resolution.inherited {
            self.diagnostics
                .error(line, format!("use of undeclared identifier '{}'", name));
        }

        let operand = Operand {
            ty: symbol.ty,
            value: symbol.value,
            symbol: Some(resolution.id),
        };
        self.leaf(name, operand);
    }

    fn literal(&mut self, value: Value) {
        self.leaf(value.to_string(), Operand::constant(value));
    }

    fn unary(&mut self, op: UnaryOp) -> Result<(), BuilderError> {
        let [operand] = self.take::<1>(op.label())?;

        let ty = match op {
            UnaryOp::Not | UnaryOp::BitNot => Some(DataType::Int),
            UnaryOp::Plus | UnaryOp::Neg => operand.ty.map(|t| DataType::promote(t, DataType::Int)),
            UnaryOp::PreInc | UnaryOp::PreDec => operand.ty,
        };
        let value = operand.value.map(|v| Value::fold_unary(op, v));

        self.reduce(op.label(), 1, Operand::typed(ty, value))
    }

    /// Postfix folds to the updated value, like prefix; the symbol is untouched
    fn postfix(&mut self, op: PostfixOp) -> Result<(), BuilderError> {
        let [operand] = self.take::<1>(op.label())?;
        let step = match op {
            PostfixOp::Inc => UnaryOp::PreInc,
            PostfixOp::Dec => UnaryOp::PreDec,
        };
        let value = operand.value.map(|v| Value::fold_unary(step, v));
        self.reduce(op.label(), 1, Operand::typed(operand.ty, value))
    }

    fn binary(&mut self, op: BinaryOp, line: usize) -> Result<(), BuilderError> {
        let [lhs, rhs] = self.take::<2>(op.label())?;

        if op == BinaryOp::Div && rhs.value.is_some_and(|v| v.is_zero()) {
            self.diagnostics.warning(line, "division by zero is undefined");
            self.drop_subtrees(2, op.label())?;
            let sentinel = Value::Int(DIVISION_BY_ZERO_SENTINEL);
            self.leaf(sentinel.to_string(), Operand::constant(sentinel));
            return Ok(());
        }

        if op == BinaryOp::Mod {
            if let Some((lt, rt)) = self.invalid_modulo(lhs, rhs) {
                self.diagnostics.error(
                    line,
                    format!("invalid operands to binary expression ('{}' and '{}')", lt, rt),
                );
                // Only the left operand survives
                self.drop_subtrees(1, op.label())?;
                self.operands.push(lhs);
                return Ok(());
            }
        }

        let ty = if op.is_comparison() {
            Some(DataType::Int)
        } else {
            match (lhs.ty, rhs.ty) {
                (Some(l), Some(r)) => Some(DataType::promote(l, r)),
                (known, None) | (None, known) => known,
            }
        };
        let value = match (lhs.value, rhs.value) {
            (Some(l), Some(r)) => Value::fold_binary(op, l, r),
            _ => None,
        };

        self.reduce(op.label(), 2, Operand::typed(ty, value))
    }

    /// Operand types when `%` is applied to a float
    fn invalid_modulo(&self, lhs: Operand, rhs: Operand) -> Option<(DataType, DataType)> {
        let lt = lhs.ty.unwrap_or(DataType::Int);
        let rt = rhs.ty.unwrap_or(DataType::Int);
        (lt == DataType::Float || rt == DataType::Float).then_some((lt, rt))
    }

    /// Remove the top `count` subtrees; their operands are already taken
    fn drop_subtrees(&mut self, count: usize, label: &str) -> Result<(), BuilderError> {
        for _ in 0..count {
            self.builder.pop(label)?;
        }
        Ok(())
    }

    fn assign(&mut self, op: AssignOp, line: usize) -> Result<(), BuilderError> {
        let [lhs, rhs] = self.take::<2>(op.label())?;

        let Some(id) = lhs.symbol else {
            self.diagnostics.error(line, "expression is not assignable");
            return self.reduce(op.label(), 2, Operand::typed(lhs.ty, None));
        };

        let (source_ty, source_value) = match op.arithmetic() {
            None => (rhs.ty, rhs.value),
            Some(arith) => self.compound_source(arith, lhs, rhs, line),
        };

        let target = self.symbols.get(id).ty;
        let stored = match target {
            Some(ty) => {
                self.warn_narrowing(ty, source_ty, line);
                let value = source_value.map(|v| v.convert_to(ty));
                self.symbols.assign(id, value);
                value
            }
            None => None,
        };

        self.reduce(op.label(), 2, Operand::typed(target, stored))
    }

    /// Type and folded value of `lhs arith rhs` for a compound assignment
    fn compound_source(
        &mut self,
        arith: BinaryOp,
        lhs: Operand,
        rhs: Operand,
        line: usize,
    ) -> (Option<DataType>, Option<Value>) {
        if arith == BinaryOp::Mod {
            if let Some((lt, rt)) = self.invalid_modulo(lhs, rhs) {
                self.diagnostics.error(
                    line,
                    format!("invalid operands to binary expression ('{}' and '{}')", lt, rt),
                );
                return (lhs.ty, None);
            }
        }
        if matches!(arith, BinaryOp::Div | BinaryOp::Mod) && rhs.value.is_some_and(|v| v.is_zero()) {
            self.diagnostics.warning(line, "division by zero is undefined");
            return (lhs.ty, None);
        }

        let ty = match (lhs.ty, rhs.ty) {
            (Some(l), Some(r)) => Some(DataType::promote(l, r)),
            (known, None) | (None, known) => known,
        };
        let value = match (lhs.value, rhs.value) {
            (Some(l), Some(r)) => Value::fold_binary(arith, l, r),
            _ => None,
        };
        (ty, value)
    }

    fn ternary(&mut self) -> Result<(), BuilderError> {
        let [cond, then, otherwise] = self.take::<3>("if")?;

        let ty = match (then.ty, otherwise.ty) {
            (Some(a), Some(b)) => Some(DataType::promote(a, b)),
            _ => None,
        };
        let value = match cond.value {
            Some(c) if c.is_zero() => otherwise.value,
            Some(_) => then.value,
            None => None,
        };
        let value = match (value, ty) {
            (Some(v), Some(t)) => Some(v.convert_to(t)),
            (v, _) => v,
        };

        // A conditional expression is an `if` node with all three slots
        self.builder.push_if_then_else()?;
        self.operands.push(Operand::typed(ty, value));
        Ok(())
    }

    fn warn_narrowing(&mut self, target: DataType, source: Option<DataType>, line: usize) {
        if let Some(message) = source.and_then(|s| narrowing_warning(target, s)) {
            self.diagnostics.warning(line, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::events::ReductionStream;
    use crate::parser::syntax::SourceLocation;

    fn at(rule: Rule, line: usize) -> Reduction {
        Reduction::new(rule, SourceLocation::new(line, 1))
    }

    #[test]
    fn test_hand_built_stream() {
        // int a = 2 + 3;
        let events = vec![
            at(Rule::TypeSpecifier(DataType::Int), 1),
            at(Rule::DeclTarget { name: "a".into() }, 1),
            at(Rule::IntLiteral(2), 1),
            at(Rule::IntLiteral(3), 1),
            at(Rule::Binary(BinaryOp::Add), 1),
            at(Rule::InitDeclarator { name: "a".into() }, 1),
            at(Rule::Declaration, 1),
        ];
        let analysis = Analyzer::new().run(&mut ReductionStream::from(events));

        assert_eq!(analysis.preorder().as_deref(), Some("( = a ( + 2 3 ) )"));
        assert_eq!(analysis.report.find("a").map(|r| r.value.as_str()), Some("5"));
        assert!(analysis.diagnostics.is_empty());
    }

    #[test]
    fn test_underflow_aborts_run() {
        let events = vec![at(Rule::IntLiteral(1), 1), at(Rule::Binary(BinaryOp::Add), 1)];
        let analysis = Analyzer::new().run(&mut ReductionStream::from(events));

        assert!(analysis.root.is_none());
        assert!(matches!(
            analysis.failure,
            Some(AnalysisError::Builder(BuilderError::StackUnderflow { needed: 2, available: 1, .. }))
        ));
        assert_eq!(analysis.exit_code(), 1);
    }

    #[test]
    fn test_modulo_on_float_keeps_left_operand() {
        let analysis = Analyzer::analyze("void f() { float x; x % 2; }");
        let errors: Vec<_> = analysis.find_diagnostics("invalid operands").collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "invalid operands to binary expression ('float' and 'int')"
        );
        assert_eq!(analysis.preorder().as_deref(), Some("( f ( stmt Dc x x ) )"));
    }

    #[test]
    fn test_compound_assignment_folds() {
        let analysis = Analyzer::analyze("int n = 4; void f() { n *= 3; n -= 2; }");
        assert_eq!(analysis.report.find("n").map(|r| r.value.as_str()), Some("10"));
    }

    #[test]
    fn test_assigning_to_non_lvalue() {
        let analysis = Analyzer::analyze("void f() { 1 = 2; }");
        assert_eq!(
            analysis.diagnostics[0].message,
            "expression is not assignable"
        );
        assert!(analysis.root.is_some());
    }

    #[test]
    fn test_missing_return_type_warns() {
        let analysis = Analyzer::analyze("compute() { return 1; }");
        assert_eq!(analysis.warning_count(), 1);
        let row = analysis.report.find("compute").unwrap();
        assert_eq!(row.symbol, "function");
        assert_eq!(row.ty, "int");
        assert_eq!(analysis.exit_code(), 0);
    }

    #[test]
    fn test_operands_track_tree_stack_across_definitions() {
        let mut stream = Parser::reductions("void f() { } void g() { } void h() { int k = 1; k++; }");
        let mut analyzer = Analyzer::new();

        while let Some(event) = stream.next_event().unwrap() {
            analyzer.apply(&event).unwrap();
            assert_eq!(
                analyzer.operands.len(),
                analyzer.stack_depth(),
                "after {:?}",
                event.rule
            );
        }
        assert_eq!(analyzer.stack_depth(), 1);
    }

    #[test]
    fn test_conditional_expression_is_an_if_node() {
        let analysis = Analyzer::analyze("int a = 1; int b = a ? 2 : 3;");
        assert_eq!(
            analysis.preorder().as_deref(),
            Some("( stmt ( = a 1 ) ( = b ( if a 2 3 ) ) )")
        );
        assert_eq!(analysis.report.find("b").map(|r| r.value.as_str()), Some("2"));
    }

    #[test]
    fn test_postfix_folds_to_updated_value() {
        let analysis = Analyzer::analyze("int x = 1; int y; int z; void f() { y = x++; z = x--; }");
        assert_eq!(analysis.report.find("y").map(|r| r.value.as_str()), Some("2"));
        assert_eq!(analysis.report.find("z").map(|r| r.value.as_str()), Some("0"));
        // The operand symbol itself is not updated
        assert_eq!(analysis.report.find("x").map(|r| r.value.as_str()), Some("1"));
    }

    #[test]
    fn test_syntax_error_is_reported_and_outputs_attempted() {
        let analysis = Analyzer::analyze("int a;\nint b = ;");
        assert!(matches!(analysis.failure, Some(AnalysisError::Parse(_))));
        assert_eq!(analysis.diagnostics[0].line, 2);
        assert!(analysis.diagnostics[0].message.starts_with("syntax error"));
        assert!(analysis.report.find("a").is_some());
        assert_eq!(analysis.exit_code(), 1);
    }
}

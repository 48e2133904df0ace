//! Scope analysis over an effect file.
//!
//! First of the two compiler passes. Walks the tree without emitting any
//! output and computes, for every shader block, the set of parameter group
//! names its `using params` statements bring into scope, plus the two
//! file-level flags the generator needs. A whole block is analyzed before
//! any of it is generated, so a `using params` late in a block is visible
//! to statements written before it.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};

use mixfx_ast::{
    BlockId, Declaration, ShaderBlock, ShaderFile, Statement, UsingParametersStatement, Variable,
};

use crate::diagnostics::Diagnostics;

/// Parameter groups declared by one shader block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockScope {
    declared: BTreeSet<String>,
}

impl BlockScope {
    /// Whether `name` was declared by a `using params` in this block.
    pub fn contains(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Declared parameter group names, in sorted order.
    pub fn declared_parameters(&self) -> impl Iterator<Item = &str> {
        self.declared.iter().map(String::as_str)
    }

    fn insert(&mut self, name: &str) {
        self.declared.insert(name.to_string());
    }
}

/// Result of the analysis pass, threaded into the code generator.
#[derive(Debug, Clone, Default)]
pub struct ScopeInfo {
    blocks: BTreeMap<BlockId, BlockScope>,
    /// The file declares at least one shader block or parameter group.
    pub has_mixin: bool,
    /// The file declares a class type with at least one bindable member.
    pub has_bindable_class_type: bool,
}

impl ScopeInfo {
    /// Scope of the given block, when the block was analyzed.
    pub fn block(&self, id: BlockId) -> Option<&BlockScope> {
        self.blocks.get(&id)
    }
}

/// Analyze `file`, recording scope errors into `diagnostics`.
pub fn analyze(file: &ShaderFile, diagnostics: &mut Diagnostics) -> ScopeInfo {
    let mut analyzer = ScopeAnalyzer {
        info: ScopeInfo::default(),
        current: None,
        diagnostics,
    };
    for declaration in &file.declarations {
        analyzer.visit_declaration(declaration);
    }
    analyzer.info
}

struct ScopeAnalyzer<'a> {
    info: ScopeInfo,
    /// Block whose declared-parameter set is currently being filled.
    current: Option<BlockId>,
    diagnostics: &'a mut Diagnostics,
}

impl ScopeAnalyzer<'_> {
    fn visit_declaration(&mut self, declaration: &Declaration) {
        match declaration {
            Declaration::Namespace(namespace) => {
                for declaration in &namespace.declarations {
                    self.visit_declaration(declaration);
                }
            }
            Declaration::Enum(_) | Declaration::Using(_) => {}
            Declaration::Parameters(_) => {
                self.info.has_mixin = true;
            }
            Declaration::ClassType(class_type) => {
                if class_type.members.iter().any(Variable::is_parameter_key) {
                    self.info.has_bindable_class_type = true;
                }
            }
            Declaration::Block(block) => self.visit_block(block),
            Declaration::UsingParameters(stmt) => self.visit_using_parameters(stmt),
        }
    }

    fn visit_block(&mut self, block: &ShaderBlock) {
        self.info.has_mixin = true;
        self.info.blocks.insert(block.id, BlockScope::default());
        self.current = Some(block.id);
        for statement in &block.statements {
            self.visit_statement(statement);
        }
        self.current = None;
    }

    fn visit_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::UsingParameters(stmt) => self.visit_using_parameters(stmt),
            Statement::ForEach(stmt) => {
                for statement in &stmt.body {
                    self.visit_statement(statement);
                }
            }
            // No scope effect; this pass only cares about declarations.
            Statement::Mixin(_) | Statement::Using(_) | Statement::Expression(_) => {}
        }
    }

    fn visit_using_parameters(&mut self, stmt: &UsingParametersStatement) {
        let Some(current) = self.current else {
            self.diagnostics.error(
                "unexpected 'using params' outside of shader block declaration",
                stmt.span,
            );
            return;
        };

        match &stmt.body {
            // A bodyless `using params` declares a parameter group for the
            // whole enclosing block.
            None => {
                if let Some(name) = stmt.name.as_plain_variable() {
                    let scope = self.info.blocks.entry(current).or_default();
                    if scope.contains(name) {
                        self.diagnostics.error(
                            "unexpected declaration of 'using params': this variable is already declared in this scope",
                            stmt.span,
                        );
                    } else {
                        scope.insert(name);
                    }
                }
            }
            // A bodied `using params` scopes its parameters dynamically at
            // generation time and declares nothing here.
            Some(body) => {
                for statement in body {
                    self.visit_statement(statement);
                }
            }
        }
    }
}

//! Lexically chained symbol tables.
//!
//! A [`SymbolTable`] is a cheap handle (`Rc<RefCell<Scope>>`) onto one scope
//! of the chain. Cloning the handle shares the scope; [`SymbolTable::child`]
//! creates a new scope whose parent is this one. Lookups walk towards the
//! root, while `put` and `remove` only touch the local scope.
//!
//! Tables are single-threaded. Mutation happens on the root between
//! commands, and on freshly created child scopes before anything else can
//! observe them.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::ast::ExprRef;
use crate::Name;

/// What a scope was opened for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    /// Top-level bindings of the session.
    Root,
    /// Argument bindings of one function call.
    Activation,
    /// Parameter bindings opened while type-checking a function body.
    Check,
    /// Any other nested scope.
    Block,
}

/// A single scope: local bindings plus a link to the enclosing scope.
struct Scope {
    bindings: FxHashMap<Name, ExprRef>,
    parent: Option<SymbolTable>,
    kind: ScopeKind,
}

/// Shared handle to one scope in a chain.
#[derive(Clone)]
#[repr(transparent)]
pub struct SymbolTable(Rc<RefCell<Scope>>);

impl SymbolTable {
    /// Create an empty root table.
    pub fn new() -> Self {
        SymbolTable::with_scope(None, ScopeKind::Root)
    }

    fn with_scope(parent: Option<SymbolTable>, kind: ScopeKind) -> Self {
        SymbolTable(Rc::new(RefCell::new(Scope {
            bindings: FxHashMap::default(),
            parent,
            kind,
        })))
    }

    /// A new empty scope chained to this one.
    #[must_use]
    pub fn child(&self) -> Self {
        self.child_with_kind(ScopeKind::Block)
    }

    /// A new empty scope of the given kind chained to this one.
    #[must_use]
    pub fn child_with_kind(&self, kind: ScopeKind) -> Self {
        SymbolTable::with_scope(Some(self.clone()), kind)
    }

    /// The enclosing scope, if any.
    pub fn parent(&self) -> Option<SymbolTable> {
        self.0.borrow().parent.clone()
    }

    pub fn kind(&self) -> ScopeKind {
        self.0.borrow().kind
    }

    /// Resolve `name` to the nearest binding.
    pub fn get(&self, name: &str) -> Option<ExprRef> {
        self.lookup_with_owner(name).map(|(expr, _)| expr)
    }

    /// Resolve `name` and also return the table holding the binding.
    pub fn lookup_with_owner(&self, name: &str) -> Option<(ExprRef, SymbolTable)> {
        let mut current = self.clone();
        loop {
            let next = {
                let scope = current.0.borrow();
                if let Some(expr) = scope.bindings.get(name) {
                    return Some((Rc::clone(expr), current.clone()));
                }
                scope.parent.clone()
            };
            current = next?;
        }
    }

    /// Resolve `name` to its binding and the environment the binding must be
    /// interpreted in.
    ///
    /// Call arguments live in an activation scope but were written at the
    /// call site, so they are interpreted in the activation's parent.
    /// Every other binding is interpreted here, in the scope the lookup
    /// started from.
    pub fn resolve(&self, name: &str) -> Option<(ExprRef, SymbolTable)> {
        let (expr, owner) = self.lookup_with_owner(name)?;
        let env = match owner.kind() {
            ScopeKind::Activation => owner.parent().unwrap_or(owner),
            ScopeKind::Root | ScopeKind::Check | ScopeKind::Block => self.clone(),
        };
        Some((expr, env))
    }

    /// Whether `name` resolves anywhere in the chain.
    pub fn has(&self, name: &str) -> bool {
        self.lookup_with_owner(name).is_some()
    }

    /// Bind `name` in this scope, replacing any local binding.
    pub fn put(&self, name: impl Into<Name>, expr: ExprRef) {
        self.0.borrow_mut().bindings.insert(name.into(), expr);
    }

    /// Remove the local binding of `name`. Parent scopes are not touched.
    pub fn remove(&self, name: &str) -> Option<ExprRef> {
        self.0.borrow_mut().bindings.remove(name)
    }

    /// Local bindings sorted by name.
    pub fn entries(&self) -> Vec<(Name, ExprRef)> {
        let scope = self.0.borrow();
        let mut entries: Vec<(Name, ExprRef)> = scope
            .bindings
            .iter()
            .map(|(name, expr)| (name.clone(), Rc::clone(expr)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Every name visible from this scope, nearest scope first, without
    /// duplicates.
    pub fn visible_names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = Vec::new();
        let mut current = Some(self.clone());
        while let Some(table) = current {
            let scope = table.0.borrow();
            let mut local: Vec<&Name> = scope.bindings.keys().collect();
            local.sort();
            for name in local {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
            current = scope.parent.clone();
        }
        names
    }

    /// Whether both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &SymbolTable) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of scopes from here to the root, this one included.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.parent();
        while let Some(table) = current {
            depth += 1;
            current = table.parent();
        }
        depth
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&Name> = scope.bindings.keys().collect();
        names.sort();
        f.debug_struct("SymbolTable")
            .field("kind", &scope.kind)
            .field("names", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::ast::Expr;
    use pretty_assertions::assert_eq;

    #[test]
    fn put_then_get() {
        let table = SymbolTable::new();
        table.put("x", Expr::number(1.0));
        assert_eq!(table.get("x"), Some(Expr::number(1.0)));
        assert!(table.has("x"));
        assert!(!table.has("y"));
    }

    #[test]
    fn child_shadows_parent_and_parent_is_unchanged() {
        let root = SymbolTable::new();
        root.put("x", Expr::number(1.0));
        let child = root.child();
        child.put("x", Expr::number(2.0));

        assert_eq!(child.get("x"), Some(Expr::number(2.0)));
        assert_eq!(root.get("x"), Some(Expr::number(1.0)));
    }

    #[test]
    fn lookup_falls_through_to_parent() {
        let root = SymbolTable::new();
        root.put("x", Expr::number(1.0));
        let child = root.child_with_kind(ScopeKind::Activation);

        let (expr, owner) = child.lookup_with_owner("x").unwrap();
        assert_eq!(expr, Expr::number(1.0));
        assert!(owner.ptr_eq(&root));
        assert_eq!(owner.kind(), ScopeKind::Root);
        assert_eq!(child.kind(), ScopeKind::Activation);
    }

    #[test]
    fn arguments_resolve_in_the_caller() {
        let root = SymbolTable::new();
        root.put("a", Expr::number(1.0));
        let activation = root.child_with_kind(ScopeKind::Activation);
        activation.put("a", Expr::symbol("a"));

        let (expr, env) = activation.resolve("a").unwrap();
        assert_eq!(expr, Expr::symbol("a"));
        assert!(env.ptr_eq(&root));

        let block = activation.child();
        let (_, env) = block.resolve("a").unwrap();
        assert!(env.ptr_eq(&root));

        // Root bindings are interpreted where the lookup started.
        root.put("b", Expr::number(2.0));
        let (_, env) = block.resolve("b").unwrap();
        assert!(env.ptr_eq(&block));
    }

    #[test]
    fn remove_is_local() {
        let root = SymbolTable::new();
        root.put("x", Expr::number(1.0));
        let child = root.child();
        assert_eq!(child.remove("x"), None);
        assert!(child.has("x"));
        assert!(root.remove("x").is_some());
        assert!(!child.has("x"));
    }

    #[test]
    fn entries_are_local_and_sorted() {
        let root = SymbolTable::new();
        root.put("b", Expr::number(2.0));
        root.put("a", Expr::number(1.0));
        root.put("#", Expr::number(0.0));
        let child = root.child();
        child.put("z", Expr::boolean(true));

        let names: Vec<String> = root
            .entries()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect();
        assert_eq!(names, vec!["#", "a", "b"]);
        assert_eq!(child.entries().len(), 1);
    }

    #[test]
    fn visible_names_nearest_first() {
        let root = SymbolTable::new();
        root.put("x", Expr::number(1.0));
        root.put("y", Expr::number(1.0));
        let child = root.child();
        child.put("y", Expr::number(2.0));
        child.put("a", Expr::number(2.0));

        let names: Vec<String> = child.visible_names().iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["a", "y", "x"]);
        assert_eq!(child.depth(), 2);
    }
}

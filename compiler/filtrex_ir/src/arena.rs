//! Arena storage for parse tree nodes.

use crate::{Expr, ExprId, ExprRange};

/// Contiguous storage for every node of one compiled expression.
///
/// Nodes reference each other by `ExprId`; argument and element lists live
/// in a separate flat vector addressed by `ExprRange`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node and return its ID.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX - 1` nodes.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .ok()
            .filter(|&i| i != u32::MAX)
            .unwrap_or_else(|| panic!("expression arena exhausted"));
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Store a list of node IDs and return the range addressing it.
    ///
    /// # Panics
    /// Panics if the list storage exceeds `u32::MAX` entries.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len();
        self.expr_lists.extend(ids);
        let len = self.expr_lists.len() - start;
        match (u32::try_from(start), u32::try_from(len)) {
            (Ok(start), Ok(len)) => ExprRange::new(start, len),
            _ => panic!("expression list storage exhausted"),
        }
    }

    /// Look up a node.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Resolve a range into the node IDs it covers.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Number of nodes allocated.
    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Whether no nodes have been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

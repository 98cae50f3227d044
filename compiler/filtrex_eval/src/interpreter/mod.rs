//! Tree-walking interpreter.
//!
//! One recursive `match` over `ExprKind`. Every visit goes through
//! [`ensure_sufficient_stack`] and bumps a depth counter checked against
//! [`EvalConfig::max_depth`].

use filtrex_ir::{BinaryOp, ExprArena, ExprId, ExprKind, ExprRange, SymbolPath};
use filtrex_stack::ensure_sufficient_stack;
use filtrex_value::errors::{depth_limit_exceeded, not_a_function, unknown_function};
use filtrex_value::{Context, EvalResult, Value};
use smallvec::SmallVec;

use crate::builtins::lookup_builtin;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::resolve::{lookup_callee, resolve_path};
use crate::EvalConfig;

/// Evaluates nodes of one arena against one context.
///
/// Cheap to construct; create one per run.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    context: &'a Context,
    config: &'a EvalConfig,
    depth: usize,
}

impl<'a> Interpreter<'a> {
    pub fn new(arena: &'a ExprArena, context: &'a Context, config: &'a EvalConfig) -> Self {
        Interpreter {
            arena,
            context,
            config,
            depth: 0,
        }
    }

    /// Evaluate `id` and everything below it.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        if let Some(limit) = self.config.max_depth {
            if self.depth >= limit {
                return Err(depth_limit_exceeded(limit));
            }
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.eval_inner(id));
        self.depth -= 1;
        result
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult {
        let arena = self.arena;
        match &arena.get_expr(id).kind {
            ExprKind::Number(n) => Ok(Value::Decimal(n.clone())),
            ExprKind::Str(s) => Ok(Value::string(&**s)),
            ExprKind::Symbol(path) => resolve_path(self.context, path),
            ExprKind::Unary { op, operand } => {
                let operand = self.eval(*operand)?;
                evaluate_unary(*op, &operand)
            }
            ExprKind::Binary {
                op: BinaryOp::Or,
                left,
                right,
            } => {
                let left = self.eval(*left)?;
                if left.as_boolean()? {
                    return Ok(Value::TRUE);
                }
                let right = self.eval(*right)?;
                evaluate_binary(BinaryOp::Or, &left, &right, self.config)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(*left)?;
                let right = self.eval(*right)?;
                evaluate_binary(*op, &left, &right, self.config)
            }
            ExprKind::Ternary {
                cond,
                then_branch,
                else_branch,
            } => {
                let branch = if self.eval(*cond)?.as_boolean()? {
                    *then_branch
                } else {
                    *else_branch
                };
                self.eval(branch)
            }
            ExprKind::List(items) => self.eval_list(*items),
            ExprKind::Call { callee, args } => self.eval_call(callee, *args),
        }
    }

    /// The first element is spread with `as_array`; the rest are appended
    /// as they are. So `[x]` is `as_array(x)` while `[[1], 2]` is `[1, 2]`.
    fn eval_list(&mut self, range: ExprRange) -> EvalResult {
        let arena = self.arena;
        let Some((&first, rest)) = arena.get_expr_list(range).split_first() else {
            return Ok(Value::array([]));
        };
        let mut items = self.eval(first)?.as_array()?.to_vec();
        items.reserve(rest.len());
        for &id in rest {
            items.push(self.eval(id)?);
        }
        Ok(Value::from(items))
    }

    /// Built-ins first, then the context. A plain value called with no
    /// arguments is returned as is.
    fn eval_call(&mut self, callee: &SymbolPath, args: ExprRange) -> EvalResult {
        let arena = self.arena;
        let ids = arena.get_expr_list(args);
        let mut values: SmallVec<[Value; 4]> = SmallVec::with_capacity(ids.len());
        for &id in ids {
            values.push(self.eval(id)?);
        }

        if let Some(builtin) = lookup_builtin(callee.as_str()) {
            tracing::trace!(name = callee.as_str(), args = values.len(), "calling built-in");
            return builtin(&values);
        }

        match lookup_callee(self.context, callee)? {
            Some(Value::Function(f)) => f.call(&values)?.resolve(),
            Some(value) if values.is_empty() => Ok(value),
            Some(value) => Err(not_a_function(value.type_name())),
            None => Err(unknown_function(callee.as_str())),
        }
    }
}

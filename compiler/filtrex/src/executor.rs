//! Compiled expressions and the builder that produces them.

use std::fmt;
use std::sync::Arc;

use filtrex_eval::EvalConfig;
use filtrex_parse::ParsedExpr;
use filtrex_value::{Context, Value};

use crate::Error;

/// Compile `source` with the default [`EvalConfig`].
pub fn compile(source: &str) -> Result<CompiledExpression, Error> {
    ExecutorBuilder::new().compile(source)
}

/// An expression parsed once and ready to run any number of times.
///
/// Cloning shares the tree. Runs on different threads never interfere; each
/// gets its own context.
#[derive(Clone)]
pub struct CompiledExpression {
    tree: Arc<ParsedExpr>,
    source: Arc<str>,
    config: EvalConfig,
}

impl CompiledExpression {
    /// Evaluate against `context`. The result is never lazy.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&self, context: &Context) -> Result<Value, Error> {
        let value = filtrex_eval::evaluate(&self.tree.arena, self.tree.root, context, &self.config)?;
        tracing::trace!(kind = %value.kind(), "run finished");
        Ok(value)
    }

    /// [`run`](Self::run), then read the result as a boolean.
    pub fn run_bool(&self, context: &Context) -> Result<bool, Error> {
        Ok(self.run(context)?.as_boolean()?)
    }

    /// The text this expression was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Number of nodes in the compiled tree.
    pub fn node_count(&self) -> usize {
        self.tree.arena.len()
    }
}

impl fmt::Debug for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledExpression")
            .field("source", &self.source)
            .field("nodes", &self.node_count())
            .field("config", &self.config)
            .finish()
    }
}

/// Compiles expressions with a non-default [`EvalConfig`].
///
/// ```text
/// let expr = ExecutorBuilder::new().max_depth(64).compile("a + b")?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct ExecutorBuilder {
    config: EvalConfig,
}

impl ExecutorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.config = self.config.max_depth(limit);
        self
    }

    #[must_use]
    pub fn regex_size_limit(mut self, bytes: usize) -> Self {
        self.config = self.config.regex_size_limit(bytes);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn compile(&self, source: &str) -> Result<CompiledExpression, Error> {
        let tree = filtrex_parse::parse(source)?;
        tracing::debug!(len = source.len(), nodes = tree.arena.len(), "compiled expression");
        Ok(CompiledExpression {
            tree: Arc::new(tree),
            source: Arc::from(source),
            config: self.config.clone(),
        })
    }
}

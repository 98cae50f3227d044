//! Symbol path resolution against a context.
//!
//! A path such as `user.profile.name` is walked one segment at a time. Each
//! bound value is resolved as it is reached, so lazy values off the path are
//! never forced.

use std::sync::Arc;

use filtrex_ir::SymbolPath;
use filtrex_value::{Context, EvalError, EvalResult, Value};

/// Resolve `path` to a value.
///
/// Missing keys, and non-map values with segments left over, give `Null`.
pub fn resolve_path(context: &Context, path: &SymbolPath) -> EvalResult {
    match walk(context, path, |bound| bound.resolve())? {
        Some(value) => Ok(value),
        None => Ok(Value::Null),
    }
}

/// Look up the target of a call.
///
/// Like [`resolve_path`], except a `Function` bound at the end of the path is
/// returned unresolved so the caller can invoke it with arguments, and an
/// absent path is `None` rather than `Null`.
pub fn lookup_callee(context: &Context, path: &SymbolPath) -> Result<Option<Value>, EvalError> {
    walk(context, path, |bound| match bound {
        Value::Function(_) => Ok(bound.clone()),
        other => other.resolve(),
    })
}

/// Walk every segment but the last through nested maps, then hand the final
/// binding to `finish`. `None` when the path leaves the context.
fn walk(
    context: &Context,
    path: &SymbolPath,
    finish: impl FnOnce(&Value) -> EvalResult,
) -> Result<Option<Value>, EvalError> {
    let last = path.depth().saturating_sub(1);
    let mut nested: Option<Arc<Context>> = None;

    for (index, segment) in path.segments().enumerate() {
        let scope = nested.as_deref().unwrap_or(context);
        let Some(bound) = scope.get(segment) else {
            return Ok(None);
        };
        if index == last {
            return finish(bound).map(Some);
        }
        match bound.resolve()? {
            Value::Map(map) => nested = Some(map),
            _ => return Ok(None),
        }
    }

    Ok(None)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn path(text: &str) -> SymbolPath {
        SymbolPath::parse(text)
    }

    fn context() -> Context {
        let mut ctx = Context::default();
        ctx.insert(
            "user".into(),
            Value::map_from([
                ("name", Value::from("Ada")),
                ("profile", Value::map_from([("age", Value::from(36))])),
            ]),
        );
        ctx.insert("count".into(), Value::from(3));
        ctx
    }

    #[test]
    fn test_nested_lookup() {
        let ctx = context();
        assert_eq!(resolve_path(&ctx, &path("user.name")).unwrap(), Value::from("Ada"));
        assert_eq!(
            resolve_path(&ctx, &path("user.profile.age")).unwrap(),
            Value::from(36)
        );
    }

    #[test]
    fn test_missing_paths_are_null() {
        let ctx = context();
        assert_eq!(resolve_path(&ctx, &path("nope")).unwrap(), Value::Null);
        assert_eq!(resolve_path(&ctx, &path("user.missing.field")).unwrap(), Value::Null);
        assert_eq!(resolve_path(&ctx, &path("count.really")).unwrap(), Value::Null);
        assert_eq!(resolve_path(&ctx, &path("user..name")).unwrap(), Value::Null);
    }

    #[test]
    fn test_only_traversed_values_are_forced() {
        let forced = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&forced);
        let mut ctx = context();
        ctx.insert(
            "expensive".into(),
            Value::memoized(move || {
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(Value::Null)
            }),
        );
        resolve_path(&ctx, &path("user.name")).unwrap();
        assert_eq!(forced.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_lazy_intermediate_maps_are_resolved() {
        let mut ctx = Context::default();
        ctx.insert(
            "lazy".into(),
            Value::memoized(|| Ok(Value::map_from([("id", Value::from(1))]))),
        );
        assert_eq!(resolve_path(&ctx, &path("lazy.id")).unwrap(), Value::from(1));
    }

    #[test]
    fn test_lookup_callee_keeps_functions_unresolved() {
        let mut ctx = Context::default();
        ctx.insert(
            "thing".into(),
            Value::map_from([("echo", Value::function(|args| Ok(args.first().cloned().unwrap_or(Value::Null))))]),
        );
        ctx.insert("plain".into(), Value::memoized(|| Ok(Value::from(5))));

        let echo = lookup_callee(&ctx, &path("thing.echo")).unwrap().unwrap();
        assert!(matches!(echo, Value::Function(_)));
        assert_eq!(
            lookup_callee(&ctx, &path("plain")).unwrap(),
            Some(Value::from(5))
        );
        assert_eq!(lookup_callee(&ctx, &path("absent")).unwrap(), None);
        assert_eq!(lookup_callee(&ctx, &path("plain.deeper")).unwrap(), None);
    }
}

// File: crates/tidy-core/src/function.rs
// Summary: Unary scalar function capability and the ordered, named function set.

use std::fmt;

use crate::error::EvalError;

/// Anything that maps one `f64` to another, possibly failing.
///
/// Plain closures `Fn(f64) -> f64` implement this directly; wrap a closure
/// returning `Result` in [`Fallible`] to report failures.
pub trait ScalarFn {
    fn eval(&self, x: f64) -> Result<f64, EvalError>;
}

impl<F> ScalarFn for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        Ok(self(x))
    }
}

/// Adapter for functions that can fail, e.g. `1/x` refusing `x == 0`.
#[derive(Clone, Copy, Debug)]
pub struct Fallible<F>(pub F);

impl<F, E> ScalarFn for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: Into<EvalError>,
{
    #[inline]
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        (self.0)(x).map_err(Into::into)
    }
}

/// A stored function. Shareable across threads so one set can feed
/// concurrent sampling calls.
pub type BoxedScalarFn = Box<dyn ScalarFn + Send + Sync>;

/// Insertion-ordered mapping from function name to function.
/// Names are unique; the order is the column order and the legend order.
#[derive(Default)]
pub struct FunctionSet {
    entries: Vec<(String, BoxedScalarFn)>,
}

impl FunctionSet {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add `f` under `name`. An existing entry with the same name is replaced
    /// in place and keeps its position. Returns `true` if a function was
    /// replaced.
    pub fn insert<F>(&mut self, name: impl Into<String>, f: F) -> bool
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.insert_scalar(name, f)
    }

    /// [`FunctionSet::insert`] for a function that reports failures.
    pub fn insert_fallible<F, E>(&mut self, name: impl Into<String>, f: F) -> bool
    where
        F: Fn(f64) -> Result<f64, E> + Send + Sync + 'static,
        E: Into<EvalError> + 'static,
    {
        self.insert_scalar(name, Fallible(f))
    }

    pub fn insert_scalar<S>(&mut self, name: impl Into<String>, f: S) -> bool
    where
        S: ScalarFn + Send + Sync + 'static,
    {
        self.insert_boxed(name.into(), Box::new(f))
    }

    pub fn insert_boxed(&mut self, name: String, f: BoxedScalarFn) -> bool {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => {
                slot.1 = f;
                true
            }
            None => {
                self.entries.push((name, f));
                false
            }
        }
    }

    /// Builder-style [`FunctionSet::insert`].
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.insert(name, f);
        self
    }

    /// Builder-style [`FunctionSet::insert_fallible`].
    pub fn with_fallible<F, E>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(f64) -> Result<f64, E> + Send + Sync + 'static,
        E: Into<EvalError> + 'static,
    {
        self.insert_fallible(name, f);
        self
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn ScalarFn)> {
        self.entries.iter().map(|(n, f)| (n.as_str(), f.as_ref() as &dyn ScalarFn))
    }
}

impl fmt::Debug for FunctionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl FromIterator<(String, BoxedScalarFn)> for FunctionSet {
    fn from_iter<I: IntoIterator<Item = (String, BoxedScalarFn)>>(iter: I) -> Self {
        let mut set = FunctionSet::new();
        for (name, f) in iter {
            set.insert_boxed(name, f);
        }
        set
    }
}

//! Errors escaping an evaluated expression.
//!
//! An expression "throws" when it panics or when it evaluates to `Err`.
//! Either way the payload is kept so that `expect_throws_as` can check its
//! exact type.

use std::any::Any;
use std::cell::Cell;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::thread;

use crate::message::with_message;

/// An error that escaped evaluation.
pub struct Thrown {
    payload: Box<dyn Any + Send>,
    message: Option<String>,
}

impl Thrown {
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = panic_message(payload.as_ref());
        Self { payload, message }
    }

    pub fn from_error<E: Error + Send + 'static>(error: E) -> Self {
        Self {
            message: Some(error.to_string()),
            payload: Box::new(error),
        }
    }

    /// Whether the payload is exactly a `K`.
    pub fn is<K: Any>(&self) -> bool {
        self.payload.is::<K>()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// `with message "..."`, or `of unknown type` when there is no text.
    pub fn note(&self) -> String {
        match &self.message {
            Some(text) => with_message(text),
            None => "of unknown type".to_string(),
        }
    }
}

impl std::fmt::Debug for Thrown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thrown").field("message", &self.message).finish_non_exhaustive()
    }
}

/// Text carried by a panic payload, if it has any.
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(text) = payload.downcast_ref::<&str>() {
        return Some((*text).to_string());
    }
    payload.downcast_ref::<String>().cloned()
}

/// The value of an evaluated expression, before it is checked for `Err`.
///
/// `Evaluated(value).escaped()` picks [`ErrorValue`] for a `Result` whose
/// error is a `std::error::Error` and falls back to [`PlainValue`], which
/// drops any other value. Both traits must be in scope.
pub struct Evaluated<T>(pub T);

/// `Result` values: an `Err` escapes.
pub trait ErrorValue {
    fn escaped(self) -> Result<(), Thrown>;
}

impl<T, E: Error + Send + 'static> ErrorValue for Evaluated<Result<T, E>> {
    fn escaped(self) -> Result<(), Thrown> {
        self.0.map(|_| ()).map_err(Thrown::from_error)
    }
}

/// Any other value: nothing escapes once it has been computed.
pub trait PlainValue {
    fn escaped(self) -> Result<(), Thrown>;
}

impl<T> PlainValue for &Evaluated<T> {
    fn escaped(self) -> Result<(), Thrown> {
        Ok(())
    }
}

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Routes panics through a hook that stays silent while [`catch_quietly`]
/// is running on the panicking thread.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !CAPTURING.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// `catch_unwind` without the panic message the default hook would print.
pub fn catch_quietly<F, T>(f: F) -> thread::Result<T>
where
    F: FnOnce() -> T,
{
    install_quiet_hook();
    let outer = CAPTURING.with(|flag| flag.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    CAPTURING.with(|flag| flag.set(outer));
    result
}

/// Runs `f`, merging a panic into the `Err` it may already report.
pub fn attempt<F>(f: F) -> Result<(), Thrown>
where
    F: FnOnce() -> Result<(), Thrown>,
{
    match catch_quietly(f) {
        Ok(result) => result,
        Err(payload) => Err(Thrown::from_panic(payload)),
    }
}

/// Evaluates `f`, turning a panic into [`Thrown`].
pub fn evaluate<F, T>(f: F) -> Result<T, Thrown>
where
    F: FnOnce() -> T,
{
    catch_quietly(f).map_err(Thrown::from_panic)
}

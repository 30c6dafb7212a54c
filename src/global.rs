//! Process-wide translator.
//!
//! Call the setters, then [`init`], then translate. The setters only affect
//! the next [`init`]; an already built translator keeps its config.
//!
//! [`trans`] and friends panic when used before [`init`]. The `try_*`
//! variants return [`TranslatorError::NotInitialized`] instead.

use std::sync::{
    Arc,
    LazyLock,
    PoisonError,
    RwLock,
};

use crate::config::Config;
use crate::translator::{
    Params,
    Translator,
    TranslatorError,
};

/// Pending settings plus the translator built from them.
#[derive(Debug)]
struct GlobalState {
    /// Values set before `init`; empty fields keep the defaults.
    pending: Config,
    /// Translator built by the last successful `init`.
    translator: Option<Arc<Translator>>,
}

/// The process-wide state.
static GLOBAL: LazyLock<RwLock<GlobalState>> =
    LazyLock::new(|| RwLock::new(GlobalState { pending: Config::empty(), translator: None }));

/// Runs `f` on the global state with write access.
fn with_state_mut<T>(f: impl FnOnce(&mut GlobalState) -> T) -> T {
    let mut state = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut state)
}

/// Sets the translation directory used by the next [`init`].
pub fn set_path(path: impl Into<String>) {
    with_state_mut(|state| state.pending.translation_path = path.into());
}

pub fn set_default_locale(locale: impl Into<String>) {
    with_state_mut(|state| state.pending.default_locale = locale.into());
}

pub fn set_fallback_locale(locale: impl Into<String>) {
    with_state_mut(|state| state.pending.fallback_locale = locale.into());
}

/// Builds the global translator from the defaults overridden by the setters.
pub fn init() -> Result<(), TranslatorError> {
    with_state_mut(|state| -> Result<(), TranslatorError> {
        let config = Config::default().merge(state.pending.clone());
        state.translator = Some(Arc::new(Translator::new(config)?));
        Ok(())
    })
}

/// The global translator, if [`init`] has run.
#[must_use]
pub fn translator() -> Option<Arc<Translator>> {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner).translator.clone()
}

/// The global translator or [`TranslatorError::NotInitialized`].
fn require() -> Result<Arc<Translator>, TranslatorError> {
    translator().ok_or(TranslatorError::NotInitialized)
}

/// The global translator, panicking before [`init`].
#[allow(clippy::panic)]
fn expect_initialized() -> Arc<Translator> {
    match require() {
        Ok(translator) => translator,
        Err(e) => panic!("{e}"),
    }
}

/// [`Translator::translate`] on the global translator.
///
/// # Panics
/// Panics if [`init`] has not been called.
#[must_use]
pub fn trans(key: &str) -> String {
    expect_initialized().translate(key)
}

/// # Panics
/// Panics if [`init`] has not been called.
#[must_use]
pub fn trans_with(key: &str, params: &Params) -> String {
    expect_initialized().translate_with(key, params)
}

/// [`Translator::translate_by`] on the global translator.
///
/// # Panics
/// Panics if [`init`] has not been called.
#[must_use]
pub fn trans_by(locale: &str, key: &str) -> String {
    expect_initialized().translate_by(locale, key)
}

/// # Panics
/// Panics if [`init`] has not been called.
#[must_use]
pub fn trans_by_with(locale: &str, key: &str, params: &Params) -> String {
    expect_initialized().translate_by_with(locale, key, params)
}

pub fn try_trans(key: &str, params: &Params) -> Result<String, TranslatorError> {
    Ok(require()?.translate_with(key, params))
}

pub fn try_trans_by(locale: &str, key: &str, params: &Params) -> Result<String, TranslatorError> {
    Ok(require()?.translate_by_with(locale, key, params))
}

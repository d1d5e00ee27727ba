use std::{cell::RefCell, ffi::OsStr, path::PathBuf};

/// Simulator launched when nothing else is configured.
pub const DEFAULT_SIMULATOR: &str = "lc3sim";

#[derive(Clone)]
struct Env {
    simulator: Option<PathBuf>,
    minimal: bool,
}

thread_local! {
    /// Must only be mutated within `set_env`
    static ENV: RefCell<Option<Env>> = const { RefCell::new(None) };
}

pub fn init() {
    let value = Env {
        simulator: std::env::var_os("LACETIP_SIMULATOR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from),
        minimal: var_is("LACETIP_MINIMAL", "1"),
    };
    set_env(value);
}

/// Simulator from `LACETIP_SIMULATOR`, falling back to [`DEFAULT_SIMULATOR`].
pub fn simulator() -> PathBuf {
    with_env(|env| {
        env.simulator
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SIMULATOR))
    })
}

pub fn is_minimal() -> bool {
    with_env(|env| env.minimal)
}

fn set_env(value: Env) {
    ENV.with(|env| {
        let mut env = env.borrow_mut();
        assert!(
            env.is_none(),
            "tried to initialize environment state multiple times"
        );
        *env = Some(value);
    });
}

fn with_env<F, R>(callback: F) -> R
where
    F: Fn(&Env) -> R,
{
    ENV.with(|env| {
        let env = env.borrow();
        let env = env.as_ref().unwrap_or_else(|| {
            panic!("tried to access environment state before initialization");
        });
        callback(env)
    })
}

fn var_is(name: impl AsRef<OsStr>, value: impl AsRef<str>) -> bool {
    std::env::var(name.as_ref()).is_ok_and(|v| v == value.as_ref())
}

//! Shared test utilities for integration tests
//!
//! Session builders plus an isolated HOME for config loading.

use propbook::cli::RunContext;
use propbook::config::BookConfig;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes HOME / PROPBOOK_* mutation across parallel tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    overrides: Vec<(String, Option<String>)>,
}

impl EnvState {
    fn capture(keys: &[&str]) -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            overrides: keys
                .iter()
                .map(|k| (k.to_string(), std::env::var(k).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        match self.home {
            Some(orig) => std::env::set_var("HOME", orig),
            None => std::env::remove_var("HOME"),
        }
        for (key, value) in self.overrides {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// Run `f` with HOME pointed at `<test_dir>/home` and `vars` set, then restore.
///
/// Returns the home directory so callers can place `.config/propbook/config.toml`.
pub fn with_home_env<F, R>(test_dir: &TempDir, vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce(&std::path::Path) -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let keys: Vec<&str> = vars.iter().map(|(k, _)| *k).collect();
    let env_state = EnvState::capture(&keys);

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();
    std::env::set_var("HOME", &test_home);
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    let result = f(&test_home);

    env_state.restore();
    result
}

/// An empty session (no sample data).
pub fn empty_session() -> RunContext {
    let mut config = BookConfig::default();
    config.book.sample_data = false;
    RunContext::from_config(&config)
}

/// `add` line for a person whose only distinguishing fields are name and phone.
pub fn add_line(name: &str, phone: &str) -> String {
    format!(
        "add intent=sell name={} phone={} email=someone@example.com \
         address=1 Test Road type=condo price=100,000",
        name, phone
    )
}

/// A session holding one person per `(name, phone)`, in order.
pub fn session_with(people: &[(&str, &str)]) -> RunContext {
    let session = empty_session();
    for (name, phone) in people {
        session.execute_line(&add_line(name, phone)).unwrap();
    }
    session
}

pub fn names_in(session: &RunContext) -> Vec<String> {
    session
        .live_view()
        .iter()
        .map(|e| e.person.name.to_string())
        .collect()
}

#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::sync::Mutex;

use tempfile::NamedTempFile;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// The three-star catalog used across the integration tests.
pub const SMALL_CATALOG: &str = "small dataset\n\
                                 id\tra_ep2000\tdec_ep2000\tb\n\
                                 1\t10.0\t0.0\t5.0\n\
                                 2\t10.0\t0.0\t3.0\n\
                                 3\t200.0\t0.0\t1.0\n";

/// Write `content` to a temporary `.tsv` file.
pub fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".tsv")
        .tempfile()
        .expect("create temp catalog");
    write!(file, "{}", content).expect("write temp catalog");
    file
}

/// Run `f` with the `FOV_*` overrides in `vars` applied (`None` unsets one).
///
/// Tests that touch the environment hold `ENV_LOCK` for the duration, and the
/// previous values come back when the guard drops, even on panic.
pub fn with_scoped_env<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::apply(vars);
    f()
}

/// Previous values of the variables touched by [`with_scoped_env`].
struct EnvRestore {
    saved: Vec<(String, Option<String>)>,
}

impl EnvRestore {
    fn apply(vars: &[(&str, Option<&str>)]) -> Self {
        let names: HashSet<&str> = vars.iter().map(|(name, _)| *name).collect();
        let saved = names
            .into_iter()
            .map(|name| (name.to_string(), std::env::var(name).ok()))
            .collect();

        for (name, value) in vars {
            set_or_unset(name, *value);
        }

        Self { saved }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (name, value) in self.saved.drain(..) {
            set_or_unset(&name, value.as_deref());
        }
    }
}

fn set_or_unset(name: &str, value: Option<&str>) {
    match value {
        Some(value) => std::env::set_var(name, value),
        None => std::env::remove_var(name),
    }
}

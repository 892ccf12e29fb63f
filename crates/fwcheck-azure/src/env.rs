use std::collections::HashMap;
use std::path::PathBuf;

/// Snapshot of the environment variables that drive credential selection.
///
/// Taken once at startup (or built by hand in tests) and passed explicitly,
/// so nothing below the CLI reads process-global state.
#[derive(Debug, Clone, Default)]
pub struct AmbientEnv {
    vars: HashMap<String, String>,
}

impl AmbientEnv {
    pub fn from_process() -> Self {
        Self { vars: std::env::vars().collect() }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Value of `key`, treating empty strings as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// First set variable among `keys`.
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| self.get(k))
    }

    pub fn flag(&self, keys: &[&str]) -> bool {
        self.first_of(keys)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false)
    }

    pub fn subscription_id(&self) -> Option<&str> {
        self.get("ARM_SUBSCRIPTION_ID")
    }

    /// Locate `program` on `PATH`.
    pub fn find_on_path(&self, program: &str) -> Option<PathBuf> {
        let path = self.get("PATH")?;
        std::env::split_paths(path)
            .map(|dir| dir.join(program))
            .find(|candidate| candidate.is_file())
    }
}

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context as _;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use slog::debug;
use slog::info;
use slog::Logger;
use tokio::fs::File;
use tokio::fs::OpenOptions;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::io::ErrorKind;

use super::Context;
use super::ContextOpt;
use crate::errors::ContextNotFound;
use crate::utils::resolve_home;
use crate::Globals;

const DEFAULT_STORE_PATH: &str = "~/.config/cloudctl/contexts";

/// Store all known contexts, persisting them to disk.
#[derive(Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct ContextStore {
    /// Pointer to the currently active context, if any.
    #[serde(default, rename = "__active_context")]
    active: Option<String>,

    /// Collection of known contexts.
    #[serde(flatten)]
    contexts: BTreeMap<String, Context>,
}

impl ContextStore {
    /// Load the context store and return the active context.
    ///
    /// When the active context is not in the store but an API key is given on the
    /// command line, a context with default connection options is used instead.
    pub async fn active(globals: &Globals) -> Result<Context> {
        let store = ContextStore::load(globals).await?;
        store.resolve(&globals.cli.context)
    }

    /// Figure out the name of the active context.
    pub fn active_id<'a>(&'a self, globals: &'a Globals) -> &'a str {
        self.active_name(&globals.cli.context)
    }

    /// Find a context in the store, if present.
    pub fn get(&self, name: &str) -> Option<Context> {
        self.contexts.get(name).cloned().map(|mut context| {
            context.name = name.to_string();
            context
        })
    }

    /// Check if the store persists an active context.
    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// Iterate over contexts in the store.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Context)> {
        self.contexts
            .iter()
            .map(|(name, context)| (name.as_str(), context))
    }

    /// Load the contexts store from disk.
    pub async fn load(globals: &Globals) -> Result<ContextStore> {
        let path = store_path(&globals.cli.context)?;
        load_from(&globals.logger, &path).await
    }

    /// Remove the named context from the store, clearing the active context if needed.
    pub fn remove(&mut self, name: &str) -> Option<Context> {
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
        self.contexts.remove(name)
    }

    /// Write the context store to disk.
    ///
    /// If the path containing the contexts file does not exist it will be created.
    pub async fn save(&self, globals: &Globals) -> Result<()> {
        let path = store_path(&globals.cli.context)?;
        save_to(self, &globals.logger, &path).await
    }

    /// Set the active context name persisted by the store.
    pub fn set_active_id(&mut self, name: Option<String>) {
        self.active = name;
    }

    /// Insert or update a context.
    pub fn upsert(&mut self, name: String, context: Context) {
        self.contexts.insert(name, context);
    }
}

impl ContextStore {
    fn active_name<'a>(&'a self, opt: &'a ContextOpt) -> &'a str {
        opt.context
            .as_deref()
            .or(self.active.as_deref())
            .unwrap_or(super::DEFAULT_CONTEXT)
    }

    fn resolve(&self, opt: &ContextOpt) -> Result<Context> {
        let name = self.active_name(opt);
        match self.get(name) {
            Some(context) => Ok(context),
            None if opt.api_key.is_some() => Ok(Context::named(name)),
            None => Err(ContextNotFound::for_name(name).into()),
        }
    }
}

/// Path to the contexts store file, with a leading `~/` resolved.
fn store_path(opt: &ContextOpt) -> Result<String> {
    let path = opt.contexts_file.as_deref().unwrap_or(DEFAULT_STORE_PATH);
    resolve_home(path)
}

async fn load_from(logger: &Logger, path: &str) -> Result<ContextStore> {
    debug!(logger, "Loading contexts store from disk"; "path" => path);
    let mut reader = match File::open(path).await {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(ContextStore::default()),
        Err(error) => {
            return Err(error).context(format!("unable to open contexts store from {}", path))
        }
    };
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .await
        .with_context(|| format!("unable to read contexts store from {}", path))?;

    // An empty file is an empty store.
    if buffer.iter().all(u8::is_ascii_whitespace) {
        return Ok(ContextStore::default());
    }
    let store = serde_yaml::from_slice(&buffer)
        .with_context(|| format!("unable to YAML decode contexts store from {}", path))?;
    Ok(store)
}

async fn save_to(store: &ContextStore, logger: &Logger, path: &str) -> Result<()> {
    debug!(logger, "Persisting contexts store to disk"; "path" => path);
    ensure_store_path(logger, path).await?;

    // Encode the store to a buffer so it can be written to disk asynchronously.
    let buffer = serde_yaml::to_string(store)
        .with_context(|| format!("unable to YAML encode contexts store to {}", path))?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)
        .await
        .with_context(|| format!("unable to open contexts store at {}", path))?;
    file.write_all(buffer.as_bytes())
        .await
        .with_context(|| format!("unable to write contexts store to {}", path))?;
    file.flush()
        .await
        .with_context(|| format!("unable to flush contexts store to {}", path))
}

// Create the contexts store parent directory if needed.
async fn ensure_store_path(logger: &Logger, path: &str) -> Result<()> {
    let parent = match Path::new(path).parent() {
        None => return Ok(()),
        Some(parent) if parent.as_os_str().is_empty() => return Ok(()),
        Some(parent) => parent,
    };
    if parent.exists() {
        return Ok(());
    }
    info!(logger, "Creating parent directories for contexts store file"; "path" => path);
    tokio::fs::create_dir_all(parent)
        .await
        .with_context(|| "unable to create parent directories for the contexts store file")
}

#[cfg(test)]
mod tests {
    use slog::o;
    use slog::Discard;
    use slog::Logger;

    use super::load_from;
    use super::save_to;
    use super::ContextStore;
    use crate::context::Context;
    use crate::context::ContextOpt;
    use crate::errors::ContextNotFound;

    fn opt(name: Option<&str>, api_key: Option<&str>) -> ContextOpt {
        ContextOpt {
            api_key: api_key.map(String::from),
            api_url: None,
            context: name.map(String::from),
            contexts_file: None,
        }
    }

    fn store() -> ContextStore {
        let mut store = ContextStore::default();
        let mut work = Context::named("work");
        work.connection.api_key = Some("work-key".into());
        store.upsert("work".into(), work);
        store.upsert("home".into(), Context::named("home"));
        store.set_active_id(Some("work".into()));
        store
    }

    #[test]
    fn resolve_active_context() {
        let context = store().resolve(&opt(None, None)).unwrap();
        assert_eq!(context.name, "work");
        assert_eq!(context.connection.api_key.as_deref(), Some("work-key"));
    }

    #[test]
    fn resolve_selected_context() {
        let context = store().resolve(&opt(Some("home"), None)).unwrap();
        assert_eq!(context.name, "home");
    }

    #[test]
    fn resolve_missing_context() {
        let error = store().resolve(&opt(Some("other"), None)).unwrap_err();
        let error = error.downcast_ref::<ContextNotFound>().unwrap();
        assert_eq!(error.name(), "other");
    }

    #[test]
    fn resolve_missing_context_with_api_key() {
        let context = ContextStore::default()
            .resolve(&opt(None, Some("env-key")))
            .unwrap();
        assert_eq!(context.name, "default");
        assert_eq!(context.connection, Context::named("default").connection);
    }

    #[test]
    fn remove_active_context() {
        let mut store = store();
        assert!(store.remove("work").is_some());
        let context = store.resolve(&opt(None, None)).unwrap_err();
        assert!(context.downcast_ref::<ContextNotFound>().is_some());
    }

    #[tokio::test]
    async fn save_and_load() {
        let logger = Logger::root(Discard, o!());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("contexts");
        let path = path.to_string_lossy().to_string();

        let store = store();
        save_to(&store, &logger, &path).await.unwrap();
        let loaded = load_from(&logger, &path).await.unwrap();
        assert_eq!(loaded.get("work"), store.get("work"));
        assert_eq!(loaded.get("home"), store.get("home"));
        let active = loaded.resolve(&opt(None, None)).unwrap();
        assert_eq!(active.name, "work");

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("__active_context: work"));
    }

    #[tokio::test]
    async fn load_missing_file() {
        let logger = Logger::root(Discard, o!());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contexts");
        let store = load_from(&logger, &path.to_string_lossy()).await.unwrap();
        assert_eq!(store, ContextStore::default());
    }
}

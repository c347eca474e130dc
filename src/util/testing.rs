// src/util/testing.rs

use anyhow::Result;
use std::cell::RefCell;
use std::env;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteStore;
use crate::domain::{DomainError, Note};

/// Every collection handed to `save`, oldest first.
pub type SaveLog = Rc<RefCell<Vec<Vec<(String, String)>>>>;

/// In-memory [`NoteStore`] for testing the manager without touching disk
///
/// The save log is shared, so a test can keep a handle and inspect what was
/// written after the manager owning the store has been dropped.
///
/// # Examples
///
/// ```
/// use notekeeper::application::NoteManager;
/// use notekeeper::util::testing::MockNoteStore;
///
/// let store = MockNoteStore::builder()
///     .with_record("Groceries", "milk, eggs")
///     .build();
/// let saves = store.save_log();
///
/// let mut manager = NoteManager::new(store).unwrap();
/// manager.add("Todo", "call home").unwrap();
/// manager.close().unwrap();
///
/// assert_eq!(saves.borrow()[0].len(), 2);
/// ```
pub struct MockNoteStore {
    records: Vec<(String, String)>,
    fail_load: bool,
    fail_save: bool,
    saves: SaveLog,
}

impl MockNoteStore {
    pub fn builder() -> MockNoteStoreBuilder {
        MockNoteStoreBuilder::new()
    }

    pub fn save_log(&self) -> SaveLog {
        Rc::clone(&self.saves)
    }
}

impl NoteStore for MockNoteStore {
    fn load(&mut self) -> Result<Vec<(String, String)>, DomainError> {
        if self.fail_load {
            return Err(DomainError::Storage("mock load failure".to_string()));
        }
        Ok(self.records.clone())
    }

    fn save(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        if self.fail_save {
            return Err(DomainError::Storage("mock save failure".to_string()));
        }
        let snapshot: Vec<(String, String)> = notes
            .iter()
            .map(|n| (n.title.clone(), n.text.clone()))
            .collect();
        self.records = snapshot.clone();
        self.saves.borrow_mut().push(snapshot);
        Ok(())
    }
}

/// Builder for MockNoteStore
pub struct MockNoteStoreBuilder {
    records: Vec<(String, String)>,
    fail_load: bool,
    fail_save: bool,
}

impl MockNoteStoreBuilder {
    pub fn new() -> Self {
        Self {
            records: vec![],
            fail_load: false,
            fail_save: false,
        }
    }

    /// Add a record returned by load
    pub fn with_record(mut self, title: &str, text: &str) -> Self {
        self.records.push((title.to_string(), text.to_string()));
        self
    }

    /// Make load fail with a storage error
    pub fn with_load_failure(mut self) -> Self {
        self.fail_load = true;
        self
    }

    /// Make save fail with a storage error
    pub fn with_save_failure(mut self) -> Self {
        self.fail_save = true;
        self
    }

    pub fn build(self) -> MockNoteStore {
        MockNoteStore {
            records: self.records,
            fail_load: self.fail_load,
            fail_save: self.fail_save,
            saves: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl Default for MockNoteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

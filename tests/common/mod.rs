//! Shared test doubles and log capture for integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Mutex, Once};

use async_trait::async_trait;
use log::{Level, LevelFilter, Log, Metadata, Record};
use workspace_storage::{FabricItem, FabricWorkspace, PlatformClient, Result, StorageError};

/// In-memory platform with fixed workspaces and items
#[derive(Default)]
pub struct StaticPlatform {
    workspaces: Vec<FabricWorkspace>,
    items: HashMap<String, Vec<FabricItem>>,
    requested: Mutex<Vec<String>>,
}

impl StaticPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a workspace holding the given items
    pub fn with_workspace(mut self, id: &str, items: Vec<FabricItem>) -> Self {
        self.workspaces.push(FabricWorkspace {
            id: id.to_string(),
            display_name: format!("Workspace {}", id),
            description: Some(format!("Test workspace {}", id)),
            workspace_type: Some("Workspace".to_string()),
            capacity_id: None,
        });
        self.items.insert(id.to_string(), items);
        self
    }

    /// Workspace ids passed to `list_items`, in call order
    pub fn requested_items(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformClient for StaticPlatform {
    async fn list_workspaces(&self) -> Result<Vec<FabricWorkspace>> {
        Ok(self.workspaces.clone())
    }

    async fn list_items(&self, workspace_id: &str) -> Result<Vec<FabricItem>> {
        self.requested
            .lock()
            .unwrap()
            .push(workspace_id.to_string());
        Ok(self.items.get(workspace_id).cloned().unwrap_or_default())
    }
}

/// Platform whose every call fails
pub struct FailingPlatform;

#[async_trait]
impl PlatformClient for FailingPlatform {
    async fn list_workspaces(&self) -> Result<Vec<FabricWorkspace>> {
        Err(StorageError::Api {
            status: 503,
            message: "Service unavailable".to_string(),
        })
    }

    async fn list_items(&self, _workspace_id: &str) -> Result<Vec<FabricItem>> {
        Err(StorageError::Api {
            status: 503,
            message: "Service unavailable".to_string(),
        })
    }
}

/// Item with a raw size value
pub fn item(id: &str, size: Option<serde_json::Value>) -> FabricItem {
    FabricItem {
        id: id.to_string(),
        display_name: id.to_string(),
        item_type: Some("Lakehouse".to_string()),
        size,
    }
}

/// Item with a numeric size
pub fn sized(id: &str, bytes: u64) -> FabricItem {
    item(id, Some(serde_json::json!(bytes)))
}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Logger that keeps this crate's records per thread
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("workspace_storage")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            RECORDS.with(|r| {
                r.borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Install the capturing logger (once) and clear this thread's records
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger installed in tests");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

/// Messages logged on this thread at exactly `level`
pub fn logged_at(level: Level) -> Vec<String> {
    RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}

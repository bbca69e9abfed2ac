//! JSON timeline file
//!
//! Written with two-space indentation and non-ASCII text kept literal, the
//! same layout the dashboard's own tooling produces. Keys keep the order they
//! had when the file was read, so saving an unchanged document reproduces the
//! file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::Deserialize;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::core::models::TimelineDocument;
use crate::core::ports::TimelineRepository;
use crate::error::StatusError;

/// Timeline document stored as a JSON file
#[derive(Debug)]
pub struct JsonTimelineFile {
    path: PathBuf,
    /// The document as last read, used to restore key order on write
    layout: Mutex<Option<Value>>,
}

impl JsonTimelineFile {
    /// Use the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            layout: Mutex::new(None),
        }
    }

    fn io_error(&self, source: io::Error) -> StatusError {
        StatusError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Write `content` next to the target and rename it into place
    fn replace(&self, content: &str) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        if let Ok(meta) = fs::metadata(&self.path) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl TimelineRepository for JsonTimelineFile {
    fn read(&self) -> Result<TimelineDocument, StatusError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StatusError::NotFound {
                    path: self.path.clone(),
                });
            },
            Err(source) => return Err(self.io_error(source)),
        };

        let parse_error = |source| StatusError::Parse {
            path: self.path.clone(),
            source,
        };
        let raw: Value = serde_json::from_str(&content).map_err(parse_error)?;
        let doc = TimelineDocument::deserialize(&raw).map_err(parse_error)?;

        *self.layout.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(doc)
    }

    fn write(&self, doc: &TimelineDocument) -> Result<(), StatusError> {
        let mut value = serde_json::to_value(doc).map_err(StatusError::Serialize)?;
        let layout = self.layout.lock().unwrap_or_else(PoisonError::into_inner).clone();
        if let Some(layout) = layout {
            value = merge_in_order(&layout, value);
        }

        let content = serde_json::to_string_pretty(&value).map_err(StatusError::Serialize)?;
        self.replace(&content).map_err(|source| self.io_error(source))
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Lay `updated` out in the key order of `layout`
///
/// Keys of `updated` keep the position they have in `layout`; keys new to
/// `updated` go last and keys it dropped are removed. Arrays merge element by
/// element.
fn merge_in_order(layout: &Value, updated: Value) -> Value {
    match (layout, updated) {
        (Value::Object(old), Value::Object(mut new)) => {
            let mut merged = Map::with_capacity(new.len());
            for (key, old_value) in old {
                if let Some(new_value) = new.shift_remove(key) {
                    merged.insert(key.clone(), merge_in_order(old_value, new_value));
                }
            }
            merged.extend(new);
            Value::Object(merged)
        },
        (Value::Array(old), Value::Array(new)) => Value::Array(
            new.into_iter()
                .enumerate()
                .map(|(i, item)| match old.get(i) {
                    Some(old_item) => merge_in_order(old_item, item),
                    None => item,
                })
                .collect(),
        ),
        (_, updated) => updated,
    }
}

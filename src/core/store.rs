//! Document store abstraction
//!
//! A typed collection of JSON documents with the CRUD helpers the album needs:
//! keyed set/get/update/delete plus equality queries on a (dotted) field path.
//! [`MemoryCollection`] is the in-process backend.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::core::models::{AppError, AppResult};

/// Connection options for the hosted document database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
    pub measurement_id: Option<String>,
    /// Collection holding album videos
    pub videos_collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            auth_domain: None,
            project_id: None,
            storage_bucket: None,
            messaging_sender_id: None,
            app_id: None,
            measurement_id: None,
            videos_collection: "videos".to_string(),
        }
    }
}

/// Join a collection name and nested path segments into `a/b/c`
pub fn collection_path(name: &str, segments: &[&str]) -> String {
    std::iter::once(name)
        .chain(segments.iter().copied())
        .map(|segment| segment.trim_matches('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// CRUD operations over a typed collection
#[async_trait]
pub trait Collection<T>: Send + Sync
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Path of this collection (`videos`, `users/u1/videos`)
    fn path(&self) -> &str;

    /// Create or overwrite a document. A generated ID is used when none is given.
    async fn set_document(&self, data: &T, document_id: Option<&str>) -> AppResult<String>;

    async fn get_document(&self, document_id: &str) -> AppResult<Option<T>>;

    async fn get_documents_by_field(&self, field: &str, value: &str) -> AppResult<Vec<T>>;

    /// Merge `data` (a JSON object, keys may be dotted paths) into an existing document
    async fn update_document(&self, data: Value, document_id: &str) -> AppResult<()>;

    /// Delete a document; deleting a missing document is not an error
    async fn delete_document(&self, document_id: &str) -> AppResult<()>;

    /// Delete every document whose `field` equals `value`, returning how many were removed
    async fn delete_documents_by_field(&self, field: &str, value: &str) -> AppResult<usize>;

    async fn exists(&self, document_id: &str) -> AppResult<bool>;

    async fn exists_by_field(&self, field: &str, value: &str) -> AppResult<bool>;

    /// Whether the document exists and its `field` equals `value`
    async fn contains(&self, document_id: &str, field: &str, value: &str) -> AppResult<bool>;

    async fn list_documents(&self) -> AppResult<Vec<T>>;
}

fn field_pointer(field: &str) -> String {
    let mut pointer = String::with_capacity(field.len() + 1);
    for segment in field.split('.') {
        pointer.push('/');
        pointer.push_str(&segment.replace('~', "~0").replace('/', "~1"));
    }
    pointer
}

fn field_equals(document: &Value, field: &str, value: &str) -> bool {
    matches!(document.pointer(&field_pointer(field)), Some(Value::String(s)) if s == value)
}

fn set_field(document: &mut Value, field: &str, new_value: Value) -> AppResult<()> {
    let mut segments = field.split('.').peekable();
    let mut current = document;

    while let Some(segment) = segments.next() {
        let object = current
            .as_object_mut()
            .ok_or_else(|| AppError::Store(format!("cannot set '{}' on a non-object", field)))?;

        if segments.peek().is_none() {
            object.insert(segment.to_string(), new_value);
            return Ok(());
        }

        current = object
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    Ok(())
}

/// In-process collection backed by an ordered map of JSON documents
pub struct MemoryCollection<T> {
    path: String,
    documents: RwLock<BTreeMap<String, Value>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MemoryCollection<T> {
    pub fn new(name: &str, segments: &[&str]) -> Self {
        Self {
            path: collection_path(name, segments),
            documents: RwLock::new(BTreeMap::new()),
            _marker: PhantomData,
        }
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl<T> Collection<T> for MemoryCollection<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn path(&self) -> &str {
        &self.path
    }

    async fn set_document(&self, data: &T, document_id: Option<&str>) -> AppResult<String> {
        let value = serde_json::to_value(data)?;
        let id = match document_id {
            Some(id) if !id.is_empty() => id.to_string(),
            Some(_) => return Err(AppError::Store("document id must not be empty".to_string())),
            None => Uuid::new_v4().to_string(),
        };

        self.documents.write().await.insert(id.clone(), value);
        debug!("💾 Stored document {}/{}", self.path, id);
        Ok(id)
    }

    async fn get_document(&self, document_id: &str) -> AppResult<Option<T>> {
        let documents = self.documents.read().await;
        match documents.get(document_id) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    async fn get_documents_by_field(&self, field: &str, value: &str) -> AppResult<Vec<T>> {
        let documents = self.documents.read().await;
        documents
            .values()
            .filter(|document| field_equals(document, field, value))
            .map(|document| serde_json::from_value(document.clone()).map_err(AppError::from))
            .collect()
    }

    async fn update_document(&self, data: Value, document_id: &str) -> AppResult<()> {
        let Value::Object(fields) = data else {
            return Err(AppError::Store("update data must be a JSON object".to_string()));
        };

        let mut documents = self.documents.write().await;
        let existing = documents
            .get(document_id)
            .ok_or_else(|| AppError::DocumentNotFound(format!("{}/{}", self.path, document_id)))?;

        let mut updated = existing.clone();
        for (field, value) in fields {
            set_field(&mut updated, &field, value)?;
        }

        // the collection stays typed: reject updates that no longer decode as T
        serde_json::from_value::<T>(updated.clone())?;

        documents.insert(document_id.to_string(), updated);
        debug!("✏️ Updated document {}/{}", self.path, document_id);
        Ok(())
    }

    async fn delete_document(&self, document_id: &str) -> AppResult<()> {
        if self.documents.write().await.remove(document_id).is_some() {
            debug!("🗑️ Deleted document {}/{}", self.path, document_id);
        }
        Ok(())
    }

    async fn delete_documents_by_field(&self, field: &str, value: &str) -> AppResult<usize> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|_, document| !field_equals(document, field, value));
        Ok(before - documents.len())
    }

    async fn exists(&self, document_id: &str) -> AppResult<bool> {
        Ok(self.documents.read().await.contains_key(document_id))
    }

    async fn exists_by_field(&self, field: &str, value: &str) -> AppResult<bool> {
        let documents = self.documents.read().await;
        Ok(documents
            .values()
            .any(|document| field_equals(document, field, value)))
    }

    async fn contains(&self, document_id: &str, field: &str, value: &str) -> AppResult<bool> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(document_id)
            .is_some_and(|document| field_equals(document, field, value)))
    }

    async fn list_documents(&self) -> AppResult<Vec<T>> {
        let documents = self.documents.read().await;
        documents
            .values()
            .map(|document| serde_json::from_value(document.clone()).map_err(AppError::from))
            .collect()
    }
}

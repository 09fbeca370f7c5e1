//! In-memory collaborators injected into the services under test.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use news_etl::domain::{
    error::EtlError,
    models::HttpResponse,
    ports::{HttpFetcher, Notifier, ObjectStore, SecretStore},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

#[derive(Default)]
pub struct InMemoryStore {
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    read_failure: Option<String>,
    write_failure: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_reads(reason: &str) -> Self {
        Self {
            read_failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_writes(reason: &str) -> Self {
        Self {
            write_failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn put(&self, bucket: &str, key: &str, body: &[u8]) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body: body.to_vec(),
                content_type: "application/octet-stream".to_string(),
            },
        );
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn keys_in(&self, bucket: &str) -> Vec<String> {
        let mut keys: Vec<String> = self.objects
            .lock()
            .unwrap()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn read(&self, bucket: &str, key: &str) -> Result<Vec<u8>, EtlError> {
        let read_error = |reason: String| EtlError::ObjectReadError {
            bucket: bucket.to_string(),
            key: key.to_string(),
            reason,
        };
        if let Some(reason) = &self.read_failure {
            return Err(read_error(reason.clone()));
        }
        self.get(bucket, key)
            .map(|o| o.body)
            .ok_or_else(|| read_error("NoSuchKey".to_string()))
    }

    async fn write(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), EtlError> {
        if let Some(reason) = &self.write_failure {
            return Err(EtlError::ObjectWriteError {
                bucket: bucket.to_string(),
                key: key.to_string(),
                reason: reason.clone(),
            });
        }
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }
}

pub struct StaticSecrets {
    value: Result<String, String>,
    pub requested: Mutex<Vec<String>>,
}

impl StaticSecrets {
    pub fn ok(value: &str) -> Self {
        Self { value: Ok(value.to_string()), requested: Mutex::new(Vec::new()) }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self { value: Err(reason.to_string()), requested: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl SecretStore for StaticSecrets {
    async fn get_secret(&self, name: &str) -> Result<String, EtlError> {
        self.requested.lock().unwrap().push(name.to_string());
        self.value.clone().map_err(EtlError::SecretUnavailable)
    }
}

pub struct StubFetcher {
    status: u16,
    body: String,
    pub urls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::responding(status, &body.to_string())
    }
}

#[async_trait]
impl HttpFetcher for StubFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, EtlError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn broken() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, subject: &str, message: &str) -> Result<(), EtlError> {
        self.alerts.lock().unwrap().push((subject.to_string(), message.to_string()));
        if self.fail {
            return Err(EtlError::NotifierError("topic does not exist".to_string()));
        }
        Ok(())
    }
}

pub fn as_notifier(notifier: &Arc<RecordingNotifier>) -> Option<Arc<dyn Notifier>> {
    Some(notifier.clone() as Arc<dyn Notifier>)
}

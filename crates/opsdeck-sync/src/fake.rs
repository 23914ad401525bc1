// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use opsdeck_gateway::{GatewayError, ResourceGateway};
use opsdeck_model::Resource;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;

/// In-memory gateway double with per-operation failure switches and call
/// counters. Used by the store test suite; handy for offline demos too.
pub struct FakeGateway<R: Resource> {
    pub items: Mutex<Vec<R>>,
    pub fail_list: AtomicBool,
    pub fail_create: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_delete: AtomicBool,
    /// When set, updates succeed but the remote copy stays unchanged, like
    /// a server that normalizes or discards the submitted fields.
    pub ignore_updates: AtomicBool,
    pub list_calls: AtomicU64,
    next_id: AtomicU64,
}

impl<R: Resource> Default for FakeGateway<R> {
    fn default() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            fail_list: AtomicBool::new(false),
            fail_create: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            ignore_updates: AtomicBool::new(false),
            list_calls: AtomicU64::new(0),
            next_id: AtomicU64::new(1),
        }
    }
}

impl<R: Resource> FakeGateway<R> {
    #[must_use]
    pub fn with_items(items: Vec<R>) -> Self {
        let next = items.iter().map(Resource::id).max().map_or(1, |id| id + 1);
        Self {
            items: Mutex::new(items),
            next_id: AtomicU64::new(next),
            ..Self::default()
        }
    }

    pub fn fail_everything(&self) {
        self.fail_list.store(true, Ordering::Relaxed);
        self.fail_create.store(true, Ordering::Relaxed);
        self.fail_update.store(true, Ordering::Relaxed);
        self.fail_delete.store(true, Ordering::Relaxed);
    }

    fn refused(op: &str) -> GatewayError {
        GatewayError(format!("{op}: connection refused"))
    }
}

#[async_trait]
impl<R: Resource> ResourceGateway<R> for FakeGateway<R> {
    async fn list(&self) -> Result<Vec<R>, GatewayError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_list.load(Ordering::Relaxed) {
            return Err(Self::refused("list"));
        }
        Ok(self.items.lock().await.clone())
    }

    async fn create(&self, draft: &R::Create) -> Result<(), GatewayError> {
        if self.fail_create.load(Ordering::Relaxed) {
            return Err(Self::refused("create"));
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.items.lock().await.push(R::synthesize(id, draft.clone()));
        Ok(())
    }

    async fn update(&self, id: u64, edit: &R::Edit) -> Result<(), GatewayError> {
        if self.fail_update.load(Ordering::Relaxed) {
            return Err(Self::refused("update"));
        }
        if self.ignore_updates.load(Ordering::Relaxed) {
            return Ok(());
        }
        let mut items = self.items.lock().await;
        if let Some(entity) = items.iter_mut().find(|entity| entity.id() == id) {
            entity.apply_edit(edit);
        }
        Ok(())
    }

    async fn delete(&self, id: u64) -> Result<(), GatewayError> {
        if self.fail_delete.load(Ordering::Relaxed) {
            return Err(Self::refused("delete"));
        }
        self.items.lock().await.retain(|entity| entity.id() != id);
        Ok(())
    }
}

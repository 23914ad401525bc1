// SPDX-License-Identifier: Apache-2.0

use crate::ids::LocalIdAllocator;
use crate::seeds::FallbackSeeds;
use opsdeck_gateway::ResourceGateway;
use opsdeck_model::Resource;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SyncPhase {
    Empty,
    Loading,
    Synced,
    Degraded,
}

impl SyncPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Loading => "loading",
            Self::Synced => "synced",
            Self::Degraded => "degraded",
        }
    }
}

/// Read-only view of a store's current state, handed to surfaces and the
/// derived-view builder. `items` and the edit-buffer key set agree except
/// transiently inside an in-flight operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<R: Resource> {
    pub phase: SyncPhase,
    pub items: Vec<R>,
    pub edit_buffer: BTreeMap<u64, R::Edit>,
    pub last_error: Option<String>,
}

/// Canonical list state for one resource collection, remote-first with a
/// deterministic local fallback on every gateway failure.
///
/// Operations take `&mut self`, so only one mutation can be in flight per
/// store instance; surfaces sharing a store serialize through it instead of
/// racing overlapping writes.
pub struct ReconcilingStore<R: Resource> {
    gateway: Arc<dyn ResourceGateway<R>>,
    seeds: FallbackSeeds<R>,
    ids: LocalIdAllocator,
    phase: SyncPhase,
    items: Vec<R>,
    edit_buffer: BTreeMap<u64, R::Edit>,
    last_error: Option<String>,
}

impl<R: Resource> ReconcilingStore<R> {
    #[must_use]
    pub fn new(gateway: Arc<dyn ResourceGateway<R>>, seeds: FallbackSeeds<R>) -> Self {
        Self::with_id_allocator(gateway, seeds, LocalIdAllocator::from_wall_clock())
    }

    #[must_use]
    pub fn with_id_allocator(
        gateway: Arc<dyn ResourceGateway<R>>,
        seeds: FallbackSeeds<R>,
        ids: LocalIdAllocator,
    ) -> Self {
        Self {
            gateway,
            seeds,
            ids,
            phase: SyncPhase::Empty,
            items: Vec::new(),
            edit_buffer: BTreeMap::new(),
            last_error: None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<R> {
        Snapshot {
            phase: self.phase,
            items: self.items.clone(),
            edit_buffer: self.edit_buffer.clone(),
            last_error: self.last_error.clone(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Re-syncs from the remote, or installs the fallback seeds when the
    /// remote is unreachable. Never fails outward: the result is always a
    /// renderable snapshot, degraded or not.
    pub async fn load(&mut self) {
        self.phase = SyncPhase::Loading;
        let listed = self.gateway.list().await;
        match listed {
            Ok(items) => {
                self.items = items;
                self.rebuild_edit_buffer();
                self.last_error = None;
                self.phase = SyncPhase::Synced;
                info!(kind = R::KIND, count = self.items.len(), "synced from remote");
            }
            Err(err) => {
                warn!(kind = R::KIND, error = %err, "list failed, entering degraded mode");
                self.items = self.seeds.items();
                self.rebuild_edit_buffer();
                self.last_error = Some(format!(
                    "{} unreachable; showing local fallback data",
                    R::KIND
                ));
                self.phase = SyncPhase::Degraded;
            }
        }
    }

    /// Creates remotely and re-syncs; on failure, synthesizes a local entity
    /// with a collision-checked id and prepends it. The optimistic insert
    /// diverges from the server until the next successful load.
    pub async fn create(&mut self, draft: R::Create) {
        let created = self.gateway.create(&draft).await;
        match created {
            Ok(()) => self.load().await,
            Err(err) => {
                warn!(kind = R::KIND, error = %err, "create failed, inserting locally");
                let id = self.allocate_local_id();
                let entity = R::synthesize(id, draft);
                self.edit_buffer.insert(id, entity.edit_draft());
                self.items.insert(0, entity);
                self.last_error = Some(format!(
                    "create failed upstream; new {} entry exists locally only",
                    R::KIND
                ));
            }
        }
    }

    /// Replaces the buffered draft for a listed id. Unlisted ids are
    /// ignored, keeping the buffer key set equal to the listed id set.
    pub fn edit(&mut self, id: u64, draft: R::Edit) {
        if self.edit_buffer.contains_key(&id) {
            self.edit_buffer.insert(id, draft);
        }
    }

    /// Sends the buffered draft for `id`, so what an open editor shows is
    /// what goes out, not the canonical entity. On failure the draft is
    /// applied to the canonical entity in place. Unknown ids are a no-op.
    pub async fn update(&mut self, id: u64) {
        let Some(draft) = self.edit_buffer.get(&id).cloned() else {
            return;
        };
        let updated = self.gateway.update(id, &draft).await;
        match updated {
            Ok(()) => self.load().await,
            Err(err) => {
                warn!(kind = R::KIND, id, error = %err, "update failed, applying draft locally");
                if let Some(entity) = self.items.iter_mut().find(|entity| entity.id() == id) {
                    entity.apply_edit(&draft);
                }
                self.last_error = Some(format!(
                    "update failed upstream; {} change applied locally only",
                    R::KIND
                ));
            }
        }
    }

    /// Deletes remotely and re-syncs; on failure the entity and its buffer
    /// entry are removed together from local state.
    pub async fn delete(&mut self, id: u64) {
        let deleted = self.gateway.delete(id).await;
        match deleted {
            Ok(()) => self.load().await,
            Err(err) => {
                warn!(kind = R::KIND, id, error = %err, "delete failed, removing locally");
                self.items.retain(|entity| entity.id() != id);
                self.edit_buffer.remove(&id);
                self.last_error = Some(format!(
                    "delete failed upstream; {} entry removed locally only",
                    R::KIND
                ));
            }
        }
    }

    fn rebuild_edit_buffer(&mut self) {
        self.edit_buffer = self
            .items
            .iter()
            .map(|entity| (entity.id(), entity.edit_draft()))
            .collect();
    }

    fn allocate_local_id(&mut self) -> u64 {
        let taken: Vec<u64> = self.items.iter().map(Resource::id).collect();
        self.ids.allocate(|candidate| taken.contains(&candidate))
    }
}

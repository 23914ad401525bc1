// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use std::fmt::Debug;

/// Ties an entity type to its drafts and its collection path segment.
///
/// `Create` is the full shape a new entity requires; `Edit` is the subset of
/// fields an open row editor holds. The reconciling store keeps one `Edit`
/// per listed id and synthesizes entities from `Create` drafts when a remote
/// write fails.
pub trait Resource: Clone + Debug + PartialEq + Serialize + Send + Sync + 'static {
    type Create: Clone + Debug + Send + Sync + Serialize;
    type Edit: Clone + Debug + PartialEq + Send + Sync + Serialize;

    /// Collection path segment under the API base URL.
    const KIND: &'static str;

    fn id(&self) -> u64;

    /// Draft mirroring this entity's current mutable fields.
    fn edit_draft(&self) -> Self::Edit;

    /// Applies an edit draft in place (full replace of the mutable fields).
    fn apply_edit(&mut self, edit: &Self::Edit);

    /// Builds a local stand-in entity when the remote create is unreachable.
    fn synthesize(id: u64, draft: Self::Create) -> Self;
}

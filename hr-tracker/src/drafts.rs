//! Draft registration store
//!
//! Quick-add registrations live under one key as a JSON array, most recent
//! first. The list is read once when the store opens and rewritten whole on
//! every change; concurrent writers overwrite each other.

use shared::models::DraftRegistration;
use shared::{AppError, AppResult, ErrorCode};
use std::sync::Arc;

use crate::storage::KvStore;

/// Storage key holding the draft list
pub const DRAFTS_KEY: &str = "hr_drafts";

pub struct DraftStore {
    store: Arc<dyn KvStore>,
    drafts: Vec<DraftRegistration>,
}

impl std::fmt::Debug for DraftStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftStore")
            .field("drafts", &self.drafts.len())
            .finish()
    }
}

/// Read the persisted drafts.
///
/// A missing, unreadable or malformed value yields an empty list.
pub fn load_drafts(store: &dyn KvStore) -> Vec<DraftRegistration> {
    let raw = match store.get(DRAFTS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Draft storage unreadable, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(drafts) => drafts,
        Err(e) => {
            tracing::warn!(error = %e, "Draft storage corrupted, ignoring");
            Vec::new()
        }
    }
}

impl DraftStore {
    /// Open the store and load its drafts
    pub fn open(store: Arc<dyn KvStore>) -> Self {
        let drafts = load_drafts(store.as_ref());
        tracing::debug!(count = drafts.len(), "Drafts loaded");
        Self { store, drafts }
    }

    /// Drafts, most recent first
    pub fn drafts(&self) -> &[DraftRegistration] {
        &self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DraftRegistration> {
        self.drafts.iter().find(|d| d.id == id)
    }

    /// Prepend a draft and persist the list
    pub fn save_draft(&mut self, draft: DraftRegistration) -> AppResult<()> {
        let mut list = Vec::with_capacity(self.drafts.len() + 1);
        list.push(draft);
        list.extend(self.drafts.iter().cloned());
        self.replace(list)?;
        tracing::info!(id = %self.drafts[0].id, "Draft saved");
        Ok(())
    }

    /// Remove a draft by id; unknown ids are a no-op
    pub fn remove_draft(&mut self, id: &str) -> AppResult<Option<DraftRegistration>> {
        let Some(pos) = self.drafts.iter().position(|d| d.id == id) else {
            return Ok(None);
        };
        let mut list = self.drafts.clone();
        let removed = list.remove(pos);
        self.replace(list)?;
        tracing::info!(id = %removed.id, "Draft removed");
        Ok(Some(removed))
    }

    /// Remove and return a draft for resumption
    pub fn take(&mut self, id: &str) -> AppResult<DraftRegistration> {
        self.remove_draft(id)?.ok_or_else(|| {
            AppError::with_message(ErrorCode::DraftNotFound, format!("Draft {} not found", id))
        })
    }

    /// Persist `list`, then adopt it
    fn replace(&mut self, list: Vec<DraftRegistration>) -> AppResult<()> {
        let json = serde_json::to_string(&list)
            .map_err(|e| AppError::internal(format!("Failed to encode drafts: {}", e)))?;
        self.store.set(DRAFTS_KEY, &json)?;
        self.drafts = list;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn draft(id: &str, name: &str) -> DraftRegistration {
        DraftRegistration {
            id: id.into(),
            name: name.into(),
            department: Some("Transport".into()),
            role_title: Some("Driver".into()),
            branch: Some("HQ".into()),
        }
    }

    #[test]
    fn test_save_prepends_and_persists() {
        let backing = Arc::new(MemoryStore::new());
        let mut store = DraftStore::open(backing.clone());
        assert!(store.is_empty());

        store.save_draft(draft("TPT-0001-1", "First One")).unwrap();
        store.save_draft(draft("TPT-0001-2", "Second One")).unwrap();
        assert_eq!(store.drafts()[0].id, "TPT-0001-2");

        let reopened = DraftStore::open(backing);
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.drafts()[0].name, "Second One");
    }

    #[test]
    fn test_remove_and_take() {
        let backing = Arc::new(MemoryStore::new());
        let mut store = DraftStore::open(backing.clone());
        store.save_draft(draft("a", "A A")).unwrap();
        store.save_draft(draft("b", "B B")).unwrap();

        assert_eq!(store.remove_draft("missing").unwrap(), None);
        assert_eq!(store.take("a").unwrap().name, "A A");
        assert_eq!(load_drafts(backing.as_ref()).len(), 1);

        let err = store.take("a").unwrap_err();
        assert_eq!(err.code, ErrorCode::DraftNotFound);
    }

    #[test]
    fn test_corrupted_storage_loads_empty() {
        let backing = MemoryStore::new();
        backing.set(DRAFTS_KEY, "{not json").unwrap();
        assert!(load_drafts(&backing).is_empty());

        backing.set(DRAFTS_KEY, r#"{"id":"x"}"#).unwrap();
        assert!(load_drafts(&backing).is_empty());
    }

    #[test]
    fn test_corrupted_storage_is_overwritten_on_save() {
        let backing = Arc::new(MemoryStore::new());
        backing.set(DRAFTS_KEY, "garbage").unwrap();

        let mut store = DraftStore::open(backing.clone());
        store.save_draft(draft("c", "C C")).unwrap();
        assert_eq!(load_drafts(backing.as_ref()).len(), 1);
    }
}

//! Builder draft registry
//!
//! Server-side home for in-progress calculator drafts, one per owner.
//! Drafts live here until saved or discarded; opening a new one
//! replaces whatever the owner had.

use dashmap::DashMap;

use crate::domain::aggregates::{CalculatorDraft, DraftError};

pub struct BuilderRegistry {
    drafts: DashMap<String, CalculatorDraft>,
}

impl BuilderRegistry {
    pub fn new() -> Self {
        Self {
            drafts: DashMap::new(),
        }
    }

    /// Start a fresh draft for this owner, replacing any existing one
    pub fn open(&self, owner_id: &str) -> CalculatorDraft {
        let draft = CalculatorDraft::new();
        self.drafts.insert(owner_id.to_string(), draft.clone());
        draft
    }

    /// Snapshot of the owner's current draft
    pub fn current(&self, owner_id: &str) -> Result<CalculatorDraft, BuilderError> {
        self.drafts
            .get(owner_id)
            .map(|entry| entry.clone())
            .ok_or(BuilderError::NoActiveDraft)
    }

    /// Drop the owner's draft; true when there was one to drop
    pub fn discard(&self, owner_id: &str) -> bool {
        self.drafts.remove(owner_id).is_some()
    }

    /// Apply one mutation to the owner's draft
    pub fn with_draft<T>(
        &self,
        owner_id: &str,
        op: impl FnOnce(&mut CalculatorDraft) -> Result<T, DraftError>,
    ) -> Result<T, BuilderError> {
        let mut entry = self
            .drafts
            .get_mut(owner_id)
            .ok_or(BuilderError::NoActiveDraft)?;
        op(entry.value_mut()).map_err(BuilderError::Draft)
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum BuilderError {
    NoActiveDraft,
    Draft(DraftError),
}

impl std::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuilderError::NoActiveDraft => write!(f, "No calculator draft is open"),
            BuilderError::Draft(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FieldType;

    #[test]
    fn test_open_current_discard() {
        let registry = BuilderRegistry::new();

        assert!(matches!(
            registry.current("owner-1"),
            Err(BuilderError::NoActiveDraft)
        ));

        registry.open("owner-1");
        assert_eq!(registry.current("owner-1").unwrap().fields().len(), 0);

        assert!(registry.discard("owner-1"));
        assert!(!registry.discard("owner-1"));
        assert!(matches!(
            registry.current("owner-1"),
            Err(BuilderError::NoActiveDraft)
        ));
    }

    #[test]
    fn test_with_draft_mutates_in_place() {
        let registry = BuilderRegistry::new();
        registry.open("owner-1");

        let field = registry
            .with_draft("owner-1", |d| Ok(d.add_field(FieldType::Text)))
            .unwrap();
        registry
            .with_draft("owner-1", |d| {
                d.update_field(&field.id, Some("Full Name".into()), None, Some(true))
            })
            .unwrap();

        let draft = registry.current("owner-1").unwrap();
        assert_eq!(draft.fields().len(), 1);
        assert_eq!(draft.fields()[0].label, "Full Name");
    }

    #[test]
    fn test_with_draft_requires_open_draft() {
        let registry = BuilderRegistry::new();
        let err = registry
            .with_draft("owner-1", |d| Ok(d.add_field(FieldType::Text)))
            .unwrap_err();
        assert!(matches!(err, BuilderError::NoActiveDraft));
    }

    #[test]
    fn test_draft_errors_pass_through() {
        let registry = BuilderRegistry::new();
        registry.open("owner-1");

        let err = registry
            .with_draft("owner-1", |d| d.remove_field("missing"))
            .unwrap_err();
        assert!(matches!(
            err,
            BuilderError::Draft(DraftError::FieldNotFound(_))
        ));
    }

    #[test]
    fn test_owners_are_isolated() {
        let registry = BuilderRegistry::new();
        registry.open("owner-1");
        registry.open("owner-2");

        registry
            .with_draft("owner-1", |d| Ok(d.add_field(FieldType::Date)))
            .unwrap();

        assert_eq!(registry.current("owner-1").unwrap().fields().len(), 1);
        assert_eq!(registry.current("owner-2").unwrap().fields().len(), 0);
    }

    #[test]
    fn test_open_replaces_existing_draft() {
        let registry = BuilderRegistry::new();
        registry.open("owner-1");
        registry
            .with_draft("owner-1", |d| Ok(d.add_field(FieldType::Text)))
            .unwrap();

        registry.open("owner-1");
        assert_eq!(registry.current("owner-1").unwrap().fields().len(), 0);
    }
}

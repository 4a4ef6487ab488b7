//! # Resource Store
//!
//! In-memory table for one entity type, owned exclusively by its `ResourceActor`.
//! Reads only ever see active rows; the two delete capabilities (deactivate and
//! remove) are kept separate because entity types use one or the other.

use crate::entity::{CatalogEntity, Scope};
use crate::error::FrameworkError;
use std::collections::HashMap;

/// Row filter for listings: locale, `active = true` and optional scoping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    pub lang: String,
    pub scope: Scope,
}

impl ListFilter {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            scope: Scope::any(),
        }
    }

    pub fn within(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn admits<T: CatalogEntity>(&self, item: &T) -> bool {
        let record = item.record();
        record.active && record.lang == self.lang && self.scope.admits(&item.scope())
    }
}

struct Row<T> {
    // insertion order, breaks ties between equal `created` stamps
    seq: u64,
    entity: T,
}

pub struct ResourceStore<T: CatalogEntity> {
    rows: HashMap<T::Id, Row<T>>,
    next_seq: u64,
}

impl<T: CatalogEntity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogEntity> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Number of stored rows, active or not.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find_active_by_id(&self, id: &T::Id) -> Result<&T, FrameworkError> {
        self.rows
            .get(id)
            .map(|row| &row.entity)
            .filter(|entity| entity.record().active)
            .ok_or_else(|| FrameworkError::not_found(T::KIND, id))
    }

    /// Like [`find_active_by_id`](Self::find_active_by_id), but a row whose scope
    /// `scope` doesn't admit is reported as missing.
    pub fn find_active_within(&self, id: &T::Id, scope: &Scope) -> Result<&T, FrameworkError> {
        self.find_active_by_id(id)
            .ok()
            .filter(|entity| scope.admits(&entity.scope()))
            .ok_or_else(|| FrameworkError::not_found(T::KIND, id))
    }

    /// Active rows passing `filter`, newest `created` first.
    pub fn find_all_by_filter(&self, filter: &ListFilter) -> Vec<&T> {
        let mut rows: Vec<&Row<T>> = self
            .rows
            .values()
            .filter(|row| filter.admits(&row.entity))
            .collect();
        rows.sort_by(|a, b| {
            b.entity
                .record()
                .created
                .cmp(&a.entity.record().created)
                .then(b.seq.cmp(&a.seq))
        });
        rows.into_iter().map(|row| &row.entity).collect()
    }

    pub fn insert(&mut self, entity: T) {
        let id = entity.record().id.clone();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.rows.insert(id, Row { seq, entity });
    }

    /// Replace the full state of an active row.
    pub fn update(&mut self, entity: T) -> Result<(), FrameworkError> {
        let row = self.active_row_mut(&entity.record().id.clone())?;
        row.entity = entity;
        Ok(())
    }

    pub fn soft_delete(&mut self, id: &T::Id) -> Result<(), FrameworkError> {
        let row = self.active_row_mut(id)?;
        row.entity.record_mut().active = false;
        Ok(())
    }

    /// Hard delete: the row is gone, not just inactive.
    pub fn remove(&mut self, id: &T::Id) -> Result<T, FrameworkError> {
        self.active_row_mut(id)?;
        self.rows
            .remove(id)
            .map(|row| row.entity)
            .ok_or_else(|| FrameworkError::not_found(T::KIND, id))
    }

    /// Rows whose parent linkage points at `parent`.
    pub fn count_referencing(&self, parent: u32, include_inactive: bool) -> u64 {
        self.rows
            .values()
            .filter(|row| include_inactive || row.entity.record().active)
            .filter(|row| row.entity.scope().parent == Some(parent))
            .count() as u64
    }

    fn active_row_mut(&mut self, id: &T::Id) -> Result<&mut Row<T>, FrameworkError> {
        self.rows
            .get_mut(id)
            .filter(|row| row.entity.record().active)
            .ok_or_else(|| FrameworkError::not_found(T::KIND, id))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::entity::Record;
    use crate::mapper::FieldMapper;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct Note {
        pub record: Record<u32>,
        pub text: String,
        pub topic: Option<u32>,
    }

    #[derive(Debug)]
    pub(crate) struct NoteFields {
        pub text: String,
        pub lang: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note error")]
    pub(crate) struct NoteError;

    impl From<NoteError> for FrameworkError {
        fn from(e: NoteError) -> Self {
            FrameworkError::EntityError(Box::new(e))
        }
    }

    impl FieldMapper for Note {
        type Payload = NoteFields;

        fn map_fields(&mut self, payload: NoteFields) {
            self.text = payload.text;
            self.record.lang = payload.lang;
        }
    }

    impl CatalogEntity for Note {
        type Id = u32;
        type Context = ();
        type Error = NoteError;

        const KIND: &'static str = "Note";

        fn blank(record: Record<u32>, scope: &Scope) -> Self {
            Self {
                record,
                text: String::new(),
                topic: scope.parent,
            }
        }

        fn record(&self) -> &Record<u32> {
            &self.record
        }

        fn record_mut(&mut self) -> &mut Record<u32> {
            &mut self.record
        }

        fn scope(&self) -> Scope {
            Scope {
                kind: None,
                parent: self.topic,
            }
        }
    }

    pub(crate) fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    pub(crate) fn note(id: u32, lang: &str, created: DateTime<Utc>) -> Note {
        Note {
            record: Record {
                id,
                lang: lang.into(),
                active: true,
                created,
            },
            text: format!("note {id}"),
            topic: None,
        }
    }

    #[test]
    fn find_active_by_id_hides_inactive_rows() {
        let mut store = ResourceStore::new();
        store.insert(note(1, "en", at(0)));
        let mut hidden = note(2, "en", at(1));
        hidden.record.active = false;
        store.insert(hidden);

        assert_eq!(store.find_active_by_id(&1).unwrap().text, "note 1");
        let err = store.find_active_by_id(&2).unwrap_err();
        assert!(err.is_missing("Note", 2));
        assert!(store.find_active_by_id(&3).unwrap_err().is_missing("Note", 3));
    }

    #[test]
    fn find_active_within_hides_rows_outside_the_scope() {
        let mut store = ResourceStore::new();
        let mut filed = note(1, "en", at(0));
        filed.topic = Some(7);
        store.insert(filed);

        let topic = Scope::any().with_parent(7);
        assert_eq!(store.find_active_within(&1, &topic).unwrap().text, "note 1");
        assert!(store.find_active_within(&1, &Scope::any()).is_ok());

        let err = store
            .find_active_within(&1, &Scope::any().with_parent(8))
            .unwrap_err();
        assert!(err.is_missing("Note", 1));
    }

    #[test]
    fn find_all_filters_lang_and_orders_newest_first() {
        let mut store = ResourceStore::new();
        store.insert(note(1, "en", at(5)));
        store.insert(note(2, "es", at(6)));
        store.insert(note(3, "en", at(9)));
        store.insert(note(4, "en", at(1)));

        let ids: Vec<u32> = store
            .find_all_by_filter(&ListFilter::new("en"))
            .iter()
            .map(|n| n.record.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 4]);
    }

    #[test]
    fn equal_timestamps_fall_back_to_insertion_order() {
        let mut store = ResourceStore::new();
        store.insert(note(1, "en", at(0)));
        store.insert(note(2, "en", at(0)));

        let ids: Vec<u32> = store
            .find_all_by_filter(&ListFilter::new("en"))
            .iter()
            .map(|n| n.record.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn soft_delete_keeps_the_row_but_hides_it() {
        let mut store = ResourceStore::new();
        store.insert(note(1, "en", at(0)));

        store.soft_delete(&1).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.find_active_by_id(&1).is_err());
        assert!(store.find_all_by_filter(&ListFilter::new("en")).is_empty());
        assert!(store.soft_delete(&1).unwrap_err().is_missing("Note", 1));
    }

    #[test]
    fn remove_erases_the_row() {
        let mut store = ResourceStore::new();
        store.insert(note(1, "en", at(0)));

        let removed = store.remove(&1).unwrap();
        assert_eq!(removed.record.id, 1);
        assert!(store.is_empty());
        assert!(store.remove(&1).is_err());
    }

    #[test]
    fn update_rejects_inactive_rows() {
        let mut store = ResourceStore::new();
        store.insert(note(1, "en", at(0)));
        store.soft_delete(&1).unwrap();

        let mut changed = note(1, "en", at(0));
        changed.text = "rewritten".into();
        assert!(store.update(changed).is_err());
    }

    #[test]
    fn count_referencing_respects_inactive_flag() {
        let mut store = ResourceStore::new();
        for (id, topic) in [(1, 7), (2, 7), (3, 8)] {
            let mut n = note(id, "en", at(id as i64));
            n.topic = Some(topic);
            store.insert(n);
        }
        store.soft_delete(&2).unwrap();

        assert_eq!(store.count_referencing(7, true), 2);
        assert_eq!(store.count_referencing(7, false), 1);
        assert_eq!(store.count_referencing(9, true), 0);
    }
}

//! Compiled-form registry
//!
//! In-memory store of compiled forms, one entry per generated form, keyed by
//! UUID. Stored forms are immutable once inserted and shared as `Arc`, so a
//! validation request never blocks a concurrent insert for longer than the
//! map lookup. Forms live until deleted or process exit; there is no
//! persistence.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::descriptor::FieldDescriptor;
use crate::schema::FormSchema;

/// One compiled form with its provenance.
#[derive(Debug)]
pub struct StoredForm {
    pub id: Uuid,
    /// The natural-language description, when the form was generated.
    pub prompt: Option<String>,
    pub descriptors: Vec<FieldDescriptor>,
    pub schema: FormSchema,
    pub created_at: DateTime<Utc>,
}

/// Registry of compiled forms.
#[derive(Debug, Default)]
pub struct FormRegistry {
    forms: RwLock<HashMap<Uuid, Arc<StoredForm>>>,
}

impl FormRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile-and-store is the caller's job; this only assigns an id and
    /// records the entry.
    pub fn insert(
        &self,
        prompt: Option<String>,
        descriptors: Vec<FieldDescriptor>,
        schema: FormSchema,
    ) -> Arc<StoredForm> {
        let form = Arc::new(StoredForm {
            id: Uuid::new_v4(),
            prompt,
            descriptors,
            schema,
            created_at: Utc::now(),
        });
        self.forms
            .write()
            .expect("registry lock poisoned")
            .insert(form.id, Arc::clone(&form));
        form
    }

    pub fn get(&self, id: Uuid) -> Option<Arc<StoredForm>> {
        self.forms
            .read()
            .expect("registry lock poisoned")
            .get(&id)
            .cloned()
    }

    /// Remove a form. Returns whether it existed.
    pub fn remove(&self, id: Uuid) -> bool {
        self.forms
            .write()
            .expect("registry lock poisoned")
            .remove(&id)
            .is_some()
    }

    /// All stored forms, newest first.
    pub fn list(&self) -> Vec<Arc<StoredForm>> {
        let mut forms: Vec<_> = self
            .forms
            .read()
            .expect("registry lock poisoned")
            .values()
            .cloned()
            .collect();
        forms.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        forms
    }

    pub fn len(&self) -> usize {
        self.forms.read().expect("registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

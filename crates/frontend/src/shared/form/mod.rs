//! Create/edit forms.
//!
//! Field values stay display strings until submit. Each domain form provides
//! a `FormModel`; `FormViewModel` runs load, validation and submit for it.

pub mod fields;

pub use fields::{FormActions, MissingRecord, SelectField, TextField};

use crate::shared::api::{ApiResult, Key, Operations, Resource, Transport};
use crate::shared::cache::QueryCache;
use crate::shared::notifications::NotificationChannel;
use contracts::domain::common::MutationKind;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Fixed at mount from the route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<K> {
    Create,
    Edit(K),
}

impl<K: Copy> FormMode<K> {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn key(&self) -> Option<K> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(key) => Some(*key),
        }
    }
}

pub type ModeOf<F> = FormMode<Key<<F as FormModel>::Resource>>;

#[allow(async_fn_in_trait)]
pub trait FormModel: Clone + Default + PartialEq + Send + Sync + 'static {
    type Resource: Operations;
    /// Reference data the form needs besides its own record
    type Context: Clone + Default + Send + Sync + 'static;

    fn validate(&self, mode: &ModeOf<Self>, context: &Self::Context) -> ValidationErrors;

    /// Typed payload; called only after `validate` passed
    fn to_draft(&self, mode: &ModeOf<Self>) -> Result<<Self::Resource as Resource>::Draft, String>;

    fn from_entity(entity: &<Self::Resource as Resource>::Entity, context: &Self::Context) -> Self;

    async fn load_context<T: Transport>(_transport: &T) -> ApiResult<Self::Context> {
        Ok(Self::Context::default())
    }
}

pub struct FormViewModel<F: FormModel, T: Transport> {
    pub form: RwSignal<F>,
    pub context: RwSignal<F::Context>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    /// Set on the first submit attempt; afterwards every error is shown
    pub submitted: RwSignal<bool>,
    touched: RwSignal<BTreeSet<&'static str>>,
    mode: ModeOf<F>,
    transport: T,
    notifier: NotificationChannel,
    cache: QueryCache,
}

impl<F: FormModel, T: Transport> Clone for FormViewModel<F, T> {
    fn clone(&self) -> Self {
        Self {
            form: self.form,
            context: self.context,
            loading: self.loading,
            saving: self.saving,
            submitted: self.submitted,
            touched: self.touched,
            mode: self.mode,
            transport: self.transport.clone(),
            notifier: self.notifier.clone(),
            cache: self.cache,
        }
    }
}

impl<F: FormModel, T: Transport> FormViewModel<F, T> {
    pub fn new(
        mode: ModeOf<F>,
        transport: T,
        notifier: NotificationChannel,
        cache: QueryCache,
    ) -> Self {
        Self {
            form: RwSignal::new(F::default()),
            context: RwSignal::new(F::Context::default()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            submitted: RwSignal::new(false),
            touched: RwSignal::new(BTreeSet::new()),
            mode,
            transport,
            notifier,
            cache,
        }
    }

    pub fn mode(&self) -> ModeOf<F> {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        self.mode.is_edit()
    }

    /// Current validation result (tracked)
    pub fn errors(&self) -> ValidationErrors {
        let mode = self.mode;
        self.form
            .with(|form| self.context.with(|ctx| form.validate(&mode, ctx)))
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.saving.get() && !self.loading.get()
    }

    /// Update one field and mark it as touched
    pub fn edit(&self, field: &'static str, f: impl FnOnce(&mut F)) {
        self.form.update(f);
        self.touched.update(|t| {
            t.insert(field);
        });
    }

    /// Error for `field` once the user touched it or tried to submit
    pub fn field_error(&self, field: &'static str) -> Option<String> {
        let visible = self.submitted.get() || self.touched.with(|t| t.contains(field));
        if !visible {
            return None;
        }
        self.errors().get(field).map(str::to_string)
    }

    /// Load reference data and, in edit mode, the record itself
    pub async fn load(&self) -> bool {
        self.loading.set(true);

        let context = match F::load_context(&self.transport).await {
            Ok(context) => context,
            Err(e) => {
                self.notifier
                    .error(format!("Error al cargar los datos del formulario: {}", e));
                F::Context::default()
            }
        };
        self.context.set(context.clone());

        let mut ok = true;
        if let FormMode::Edit(key) = self.mode {
            match <F::Resource as Operations>::fetch_one(&self.transport, key).await {
                Ok(entity) => self.form.set(F::from_entity(&entity, &context)),
                Err(e) => {
                    ok = false;
                    self.notifier.error(format!(
                        "Error al cargar {}: {}",
                        <F::Resource as Resource>::THE_ELEMENT,
                        e
                    ));
                }
            }
        }

        self.loading.set(false);
        ok
    }

    /// Validate and send. Returns true when the server accepted the record;
    /// an invalid form returns false without any request.
    pub async fn submit(&self) -> bool {
        self.submitted.set(true);
        if self.saving.get_untracked() {
            return false;
        }

        let mode = self.mode;
        let errors = self
            .form
            .with_untracked(|form| self.context.with_untracked(|ctx| form.validate(&mode, ctx)));
        if !errors.is_empty() {
            log::debug!("form rejected: {}", errors.summary());
            return false;
        }

        let draft = match self.form.with_untracked(|form| form.to_draft(&mode)) {
            Ok(draft) => draft,
            Err(e) => {
                self.notifier.error(e);
                return false;
            }
        };

        self.saving.set(true);
        let (result, mutation, verb) = match mode {
            FormMode::Create => (
                <F::Resource as Operations>::create(&self.transport, &draft).await,
                MutationKind::Create,
                "crear",
            ),
            FormMode::Edit(key) => (
                <F::Resource as Operations>::update(&self.transport, key, &draft).await,
                MutationKind::Update,
                "actualizar",
            ),
        };
        self.saving.set(false);

        match result {
            Ok(_) => {
                self.cache
                    .apply_mutation(<F::Resource as Resource>::KIND, mutation);
                self.notifier.success(match mutation {
                    MutationKind::Create => <F::Resource as Resource>::CREATED,
                    _ => <F::Resource as Resource>::UPDATED,
                });
                true
            }
            Err(e) => {
                self.notifier.error(format!(
                    "Error al {} {}: {}",
                    verb,
                    <F::Resource as Resource>::THE_ELEMENT,
                    e
                ));
                false
            }
        }
    }
}

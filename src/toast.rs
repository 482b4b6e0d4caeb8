// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the [`Toast`] struct describing a single notice,
//! the [`Variant`] enum, and the [`ToastAction`] affordance.

use crate::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Unique identifier for a toast notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual flavor of a toast. Determines accent styling only; the store
/// treats every variant identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Neutral notice (gray accent).
    #[default]
    Default,
    /// Notice about a destructive or failed operation (red accent).
    Destructive,
}

impl Variant {
    /// Returns the accent color for this variant.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Variant::Default => palette::GRAY_400,
            Variant::Destructive => palette::ERROR_500,
        }
    }
}

/// An interactive affordance offered on a toast: a label plus the
/// callback to run when the user presses it.
#[derive(Clone)]
pub struct ToastAction {
    label: String,
    on_press: Arc<dyn Fn() + Send + Sync>,
}

impl ToastAction {
    /// Creates an action with the given label and callback.
    pub fn new(label: impl Into<String>, on_press: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            on_press: Arc::new(on_press),
        }
    }

    /// Returns the action's display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the action callback.
    pub fn press(&self) {
        (self.on_press)();
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A single toast notice.
///
/// Built with the `with_*` methods; all fields except `variant` are
/// optional. The id assigned at construction is provisional: the store
/// replaces it with a fresh one when the toast is added, so ids held by
/// callers always come from [`crate::store::ToastStore::add`].
#[derive(Debug, Clone, Default)]
pub struct Toast {
    /// Unique identifier, reassigned by the store on insertion.
    id: ToastId,
    /// Optional headline text.
    title: Option<String>,
    /// Optional body text.
    description: Option<String>,
    /// Optional interactive affordance.
    action: Option<ToastAction>,
    /// Hint for the host's auto-dismiss timer. Not interpreted here.
    duration: Option<Duration>,
    /// Opaque styling hint, passed through uninterpreted.
    class: Option<String>,
    /// Visual flavor.
    variant: Variant,
}

impl Toast {
    /// Creates an empty toast with the default variant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the headline text.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches an interactive action.
    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Sets the auto-dismiss duration hint.
    ///
    /// The store ignores this value; hosts that want timed dismissal
    /// read it back and schedule their own timer.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets an opaque styling class for the host's theming layer.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the visual variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the headline text, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the body text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the attached action, if any.
    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    /// Returns the auto-dismiss duration hint, if any.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns the opaque styling class, if any.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Returns the visual variant.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub(crate) fn set_id(&mut self, id: ToastId) {
        self.id = id;
    }
}

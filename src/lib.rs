// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` provides toast notifications for Iced applications.
//!
//! The crate is built around a shared [`ToastStore`] holding the ordered
//! collection of active notices, plus stateless widgets that render a
//! snapshot of it. Hosts add toasts from anywhere in the application,
//! render the overlay in their view function, and route the emitted
//! messages back into the store:
//!
//! ```
//! use iced_toaster::{Toast, ToastStore, Variant};
//!
//! let store = ToastStore::new();
//! let id = store.add(
//!     Toast::new()
//!         .with_title("Export failed")
//!         .with_variant(Variant::Destructive),
//! );
//!
//! // Later, from a timer or a dismiss click:
//! store.remove(id);
//! assert!(store.is_empty());
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.1.0")]

pub mod design_tokens;
pub mod store;
pub mod toast;
pub mod widget;

pub use store::{Message, Subscription, ToastStore};
pub use toast::{Toast, ToastAction, ToastId, Variant};

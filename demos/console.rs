// SPDX-License-Identifier: MPL-2.0
//! Drives the toast store from the console, printing every snapshot an
//! observer receives. Run with `cargo run --example console`.

use iced_toaster::{Toast, ToastAction, ToastStore, Variant};
use std::time::Duration;

fn main() {
    let store = ToastStore::new();

    let subscription = store.subscribe(|toasts| {
        let titles: Vec<&str> = toasts.iter().filter_map(|t| t.title()).collect();
        println!("snapshot ({} active): {titles:?}", toasts.len());
    });

    let saved = store.add(
        Toast::new()
            .with_title("Saved")
            .with_description("settings.toml written")
            .with_duration(Duration::from_secs(3)),
    );

    store.add(
        Toast::new()
            .with_title("Export failed")
            .with_variant(Variant::Destructive)
            .with_action(ToastAction::new("Retry", || println!("retry requested"))),
    );

    store.remove(saved);
    // Removing the same id again changes nothing and publishes nothing.
    store.remove(saved);

    subscription.unsubscribe();
    store.clear();
    println!("done, {} toasts left", store.len());
}

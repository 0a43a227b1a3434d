use gloo::timers::future::sleep;
use icondata::IoClose;
use leptos::{prelude::*, task::spawn_local};
use std::time::Duration;

const TOAST_VISIBLE_FOR: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub text: String,
    pub kind: ToastKind,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Transient corner notification. Auto-dismisses after a few seconds; a newer
/// message restarts the clock instead of being cut short by the old timer.
#[component]
pub fn Toast(
    #[prop(into)] message: Signal<Option<ToastMessage>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let generation = StoredValue::new(0u32);

    Effect::new(move |_| {
        if message.with(Option::is_some) {
            let current = generation.with_value(|g| g + 1);
            generation.set_value(current);
            spawn_local(async move {
                sleep(TOAST_VISIBLE_FOR).await;
                if generation.get_value() == current {
                    on_dismiss.run(());
                }
            });
        }
    });

    view! {
        <div
            class="toast"
            class:toast-success=move || {
                message.with(|m| matches!(m, Some(ToastMessage { kind: ToastKind::Success, .. })))
            }
            class:toast-error=move || {
                message.with(|m| matches!(m, Some(ToastMessage { kind: ToastKind::Error, .. })))
            }
            style:display=move || if message.with(Option::is_some) { "flex" } else { "none" }
        >
            <span>{move || message.get().map(|m| m.text)}</span>
            <button class="toast-close" on:click=move |_| on_dismiss.run(())>
                <svg viewBox=IoClose.view_box inner_html=IoClose.data></svg>
            </button>
        </div>
    }
}

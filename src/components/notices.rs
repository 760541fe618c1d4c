//! Notice strip rendering transient success/error messages.

use leptos::prelude::*;

use crate::state::notify::{NoticeKind, NotifyState};

/// Stacked notices from signup and other session operations.
/// Each notice carries its own dismiss control.
#[component]
pub fn NoticeStrip() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="notice-strip">
            <For
                each=move || notify.get().notices
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "notice notice--success",
                        NoticeKind::Error => "notice notice--error",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class>
                            <span class="notice__message">{notice.message}</span>
                            <button
                                class="notice__dismiss"
                                on:click=move |_| notify.update(|state| state.dismiss(id))
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

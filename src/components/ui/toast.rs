//! Transient toast surface for success and error feedback. At most the most
//! recent toast is shown; a new one evicts whatever is on screen and each
//! toast dismisses itself after a few seconds. Messages must be safe to render
//! and should never include secrets.

use crate::features::users::form::{NoticeKind, Notifier};
use leptos::prelude::*;

/// How long a toast stays on screen (milliseconds).
const TOAST_DISMISS_MS: u32 = 3_000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
struct Toast {
    kind: ToastKind,
    message: String,
    seq: u64,
}

/// Toast context shared through Leptos.
#[derive(Clone, Copy)]
pub struct ToastContext {
    current: RwSignal<Option<Toast>>,
    seq: RwSignal<u64>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            seq: RwSignal::new(0),
        }
    }

    /// Shows a toast, evicting whatever was on screen.
    pub fn show(&self, kind: ToastKind, message: &str) {
        let seq = self.seq.get_untracked().wrapping_add(1);
        self.seq.set(seq);
        self.current.set(Some(Toast {
            kind,
            message: message.to_string(),
            seq,
        }));
        self.schedule_dismiss(seq);
    }

    // The sequence check keeps a stale timer from dismissing a newer toast.
    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, seq: u64) {
        let current = self.current;
        gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || {
            if current
                .get_untracked()
                .as_ref()
                .is_some_and(|toast| toast.seq == seq)
            {
                current.set(None);
            }
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _seq: u64) {}
}

impl Notifier for ToastContext {
    fn notify(&self, kind: NoticeKind, message: &str) {
        let kind = match kind {
            NoticeKind::Success => ToastKind::Success,
            NoticeKind::Error => ToastKind::Error,
        };
        self.show(kind, message);
    }
}

/// Provides the toast context and renders the toast host above the app.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = ToastContext::new();
    provide_context(toasts);

    view! {
        {children()}
        <ToastHost />
    }
}

/// Returns the current toast context or a detached fallback context.
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(ToastContext::new)
}

#[component]
fn ToastHost() -> impl IntoView {
    let current = use_toasts().current;

    view! {
        <div class="fixed bottom-4 right-4 z-50 max-w-sm">
            {move || {
                current
                    .get()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Error => {
                                "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 shadow-md dark:border-red-400 dark:bg-red-900/80 dark:text-red-200"
                            }
                            ToastKind::Success => {
                                "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 shadow-md dark:border-emerald-400 dark:bg-emerald-900/80 dark:text-emerald-200"
                            }
                        };

                        view! { <div class=class role="alert">{toast.message}</div> }
                    })
            }}
        </div>
    }
}

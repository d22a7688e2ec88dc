use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde_json::json;
use yew::prelude::*;

use crate::analytics::{self, Event};

/// How long a toast stays fully visible.
pub const DISPLAY_MS: u32 = 5_000;
/// Fade-out duration before the node is dropped.
pub const FADE_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
    pub fading: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, id: u32, kind: ToastKind, message: String) {
        self.toasts.push(Toast {
            id,
            kind,
            message,
            fading: false,
        });
    }

    pub fn begin_fade(&mut self, id: u32) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.fading = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

pub enum ToastAction {
    Push(u32, ToastKind, String),
    Fade(u32),
    Remove(u32),
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(id, kind, message) => next.push(id, kind, message),
            ToastAction::Fade(id) => {
                next.begin_fade(id);
            }
            ToastAction::Remove(id) => {
                next.remove(id);
            }
        }
        next.into()
    }
}

/// Handle components pull from context to raise a toast.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    notify: Callback<(ToastKind, String)>,
}

impl Toaster {
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        self.notify.emit((kind, message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self {
            notify: Callback::noop(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let stack = use_reducer(ToastStack::default);
    let next_id = use_mut_ref(|| 0u32);

    let toaster = {
        let dispatcher = stack.dispatcher();
        Toaster {
            notify: Callback::from(move |(kind, message): (ToastKind, String)| {
                let id = {
                    let mut counter = next_id.borrow_mut();
                    *counter = counter.wrapping_add(1);
                    *counter
                };

                analytics::track(
                    Event::ToastShown,
                    json!({ "message": message, "type": kind.as_str() }),
                );
                dispatcher.dispatch(ToastAction::Push(id, kind, message));

                let dispatcher = dispatcher.clone();
                Timeout::new(DISPLAY_MS, move || {
                    dispatcher.dispatch(ToastAction::Fade(id));
                    Timeout::new(FADE_MS, move || {
                        dispatcher.dispatch(ToastAction::Remove(id));
                    })
                    .forget();
                })
                .forget();
            }),
        }
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            <div id="toastContainer" class="toast-container">
                { for stack.toasts().iter().map(render_toast) }
            </div>
            <style>
                {r#"
                .toast-container {
                    position: fixed;
                    top: 1.5rem;
                    right: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    z-index: 1000;
                }
                .toast {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    min-width: 280px;
                    padding: 1rem 1.25rem;
                    border-radius: 12px;
                    background: rgba(26, 26, 26, 0.95);
                    color: #fff;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .toast.fading {
                    opacity: 0;
                    transform: translateX(100%);
                }
                .toast.success { border-left: 4px solid #22c55e; }
                .toast.error { border-left: 4px solid #ef4444; }
                .toast.warning { border-left: 4px solid #f59e0b; }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

fn render_toast(toast: &Toast) -> Html {
    html! {
        <div key={toast.id} class={classes!("toast", toast.kind.as_str(), toast.fading.then(|| "fading"))}>
            <div class="toast-icon">{ toast_icon(toast.kind) }</div>
            <div class="toast-message">{ &toast.message }</div>
        </div>
    }
}

fn toast_icon(kind: ToastKind) -> Html {
    match kind {
        ToastKind::Success => html! {
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                <polyline points="22 4 12 14.01 9 11.01" />
            </svg>
        },
        ToastKind::Error => html! {
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="12" cy="12" r="10" />
                <line x1="15" y1="9" x2="9" y2="15" />
                <line x1="9" y1="9" x2="15" y2="15" />
            </svg>
        },
        ToastKind::Warning => html! {
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z" />
                <line x1="12" y1="9" x2="12" y2="13" />
                <line x1="12" y1="17" x2="12.01" y2="17" />
            </svg>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_coexist_and_fade_independently() {
        let mut stack = ToastStack::default();
        stack.push(1, ToastKind::Success, "saved".into());
        stack.push(2, ToastKind::Success, "saved".into());
        stack.push(3, ToastKind::Warning, "careful".into());
        assert_eq!(stack.toasts().len(), 3);

        assert!(stack.begin_fade(2));
        let fading: Vec<u32> = stack.toasts().iter().filter(|t| t.fading).map(|t| t.id).collect();
        assert_eq!(fading, vec![2]);

        assert!(stack.remove(2));
        let ids: Vec<u32> = stack.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn toast_timings() {
        assert_eq!(DISPLAY_MS, 5_000);
        assert_eq!(FADE_MS, 300);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut stack = ToastStack::default();
        stack.push(1, ToastKind::Error, "boom".into());
        assert!(!stack.begin_fade(9));
        assert!(!stack.remove(9));
        assert_eq!(stack.toasts().len(), 1);
    }

    #[test]
    fn reducer_applies_lifecycle() {
        let stack = Rc::new(ToastStack::default());
        let stack = stack.reduce(ToastAction::Push(7, ToastKind::Error, "x".into()));
        let stack = stack.reduce(ToastAction::Fade(7));
        assert!(stack.toasts()[0].fading);
        let stack = stack.reduce(ToastAction::Remove(7));
        assert!(stack.toasts().is_empty());
    }
}

use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, SubmitEvent};
use yew::prelude::*;

use super::form::{LeadController, Notice};
use super::store::{LeadStore, StoreError, SupabaseStore};
use super::validate::LeadInput;
use crate::analytics;
use crate::components::toast::Toaster;
use crate::config::StoreConfig;

pub const ROLES: &[(&str, &str)] = &[
    ("student", "Student"),
    ("recent_grad", "Recent graduate"),
    ("recruiter", "Recruiter"),
    ("placement_officer", "Placement officer"),
    ("other", "Other"),
];

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub store: Option<StoreConfig>,
}

pub enum LeadFormMsg {
    SetEmail(String),
    SetRole(String),
    SetOrg(String),
    Submit,
    Finished(Result<(), StoreError>),
}

pub struct LeadForm {
    input: LeadInput,
    controller: LeadController<SupabaseStore>,
    toaster: Toaster,
}

impl LeadForm {
    fn notify(&self, notice: Notice) {
        self.toaster.show(notice.kind, notice.message);
    }
}

impl Component for LeadForm {
    type Message = LeadFormMsg;
    type Properties = LeadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let toaster = ctx
            .link()
            .context::<Toaster>(Callback::noop())
            .map(|(toaster, _)| toaster)
            .unwrap_or_default();

        Self {
            input: LeadInput::default(),
            controller: LeadController::new(ctx.props().store.clone().map(SupabaseStore::new)),
            toaster,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::SetEmail(email) => {
                self.input.email = email;
                true
            }
            LeadFormMsg::SetRole(role) => {
                self.input.role = role;
                true
            }
            LeadFormMsg::SetOrg(org) => {
                self.input.org = org;
                true
            }
            LeadFormMsg::Submit => match self.controller.begin(&self.input) {
                Ok((store, lead)) => {
                    analytics::track(
                        analytics::Event::LeadFormSubmitted,
                        json!({ "role": lead.role }),
                    );
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = store.insert(&lead).await;
                        link.send_message(LeadFormMsg::Finished(result));
                    });
                    true
                }
                Err(notice) => {
                    self.notify(notice);
                    false
                }
            },
            LeadFormMsg::Finished(result) => {
                let Some(outcome) = self.controller.finish(result) else {
                    return false;
                };
                if let Some(lead) = &outcome.captured {
                    analytics::track(analytics::Event::LeadCaptured, json!({ "role": lead.role }));
                    self.input = LeadInput::default();
                }
                self.notify(outcome.notice);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let submitting = self.controller.is_submitting();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadFormMsg::Submit
        });

        html! {
            <section id="lead-capture" class="lead-section">
                <h2>{"Get early access"}</h2>
                <p>{"Join the waitlist and be the first to swipe your way into a job."}</p>
                <form id="leadForm" class="lead-form" {onsubmit} novalidate=true>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@college.edu"
                        value={self.input.email.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            LeadFormMsg::SetEmail(input.value())
                        })}
                    />
                    <select
                        id="role"
                        onchange={ctx.link().callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            LeadFormMsg::SetRole(select.value())
                        })}
                    >
                        <option value="" selected={self.input.role.is_empty()}>{"I am a..."}</option>
                        {
                            for ROLES.iter().map(|(value, label)| html! {
                                <option value={*value} selected={self.input.role == *value}>{*label}</option>
                            })
                        }
                    </select>
                    <input
                        id="org"
                        type="text"
                        placeholder="College or company (optional)"
                        value={self.input.org.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            LeadFormMsg::SetOrg(input.value())
                        })}
                    />
                    <button id="leadSubmitBtn" type="submit" class="lead-submit" disabled={submitting}>
                        if submitting {
                            <span class="btn-loader loading-spinner"></span>
                        } else {
                            <span class="btn-text">{"Join the waitlist"}</span>
                        }
                    </button>
                </form>
                <style>
                    {r#"
                    .lead-section {
                        max-width: 560px;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                        text-align: center;
                    }
                    .lead-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .lead-form input,
                    .lead-form select {
                        padding: 0.9rem 1rem;
                        border-radius: 8px;
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        background: rgba(30, 30, 30, 0.7);
                        color: #fff;
                    }
                    .lead-submit {
                        padding: 0.9rem 1rem;
                        border: none;
                        border-radius: 8px;
                        background: #7EB2FF;
                        color: #1a1a1a;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .lead-submit:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .loading-spinner {
                        display: inline-block;
                        width: 20px;
                        height: 20px;
                        border: 3px solid rgba(26, 26, 26, .3);
                        border-radius: 50%;
                        border-top-color: #1a1a1a;
                        animation: spin 1s ease-in-out infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    "#}
                </style>
            </section>
        }
    }
}

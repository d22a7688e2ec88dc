use serde_json::json;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::analytics;

/// Single-open disclosure list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    #[cfg(test)]
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    /// Closes everything, then opens `index` unless it was the open one.
    /// Returns true when `index` ended up open.
    pub fn toggle(&mut self, index: usize) -> bool {
        let was_open = self.is_open(index);
        self.open = None;
        if !was_open {
            self.open = Some(index);
        }
        !was_open
    }
}

pub const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "How does swiping work?",
        "Swipe right on a role to apply with your saved profile, swipe left to pass. We handle the application forms for you.",
    ),
    (
        "Is it free for students?",
        "The Starter plan is free forever. Pro unlocks unlimited swipes and priority applications.",
    ),
    (
        "Which companies are on the platform?",
        "We list internships and full-time roles from product companies, startups and large tech firms across India.",
    ),
    (
        "Can recruiters use it too?",
        "Yes. Recruiters get a ranked stack of candidates who already swiped right on their roles.",
    ),
    (
        "When do you launch?",
        "We are onboarding early users in batches. Join the waitlist and we'll reach out when your spot opens.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };
    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            if key == "Enter" || key == " " {
                e.prevent_default();
                on_toggle.emit(());
            }
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button
                class="faq-question"
                aria-expanded={if props.open { "true" } else { "false" }}
                {onclick}
                {onkeydown}
            >
                <span>{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            {
                for FAQ_ITEMS.iter().enumerate().map(|(index, (question, answer))| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        let question = *question;
                        Callback::from(move |_: ()| {
                            let mut next = *accordion;
                            if next.toggle(index) {
                                analytics::track(analytics::Event::FaqOpened, json!({ "question": question }));
                            }
                            accordion.set(next);
                        })
                    };
                    html! {
                        <FaqItem
                            key={index}
                            question={*question}
                            answer={*answer}
                            open={accordion.is_open(index)}
                            {on_toggle}
                        />
                    }
                })
            }
            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    color: rgba(255, 255, 255, 0.8);
                }
                .faq-item.open .faq-answer {
                    max-height: 400px;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let mut accordion = Accordion::default();
        assert!(accordion.toggle(0));
        assert!(accordion.toggle(3));
        assert!(!accordion.is_open(0));
        assert_eq!(accordion.open_item(), Some(3));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        let mut accordion = Accordion::default();
        accordion.toggle(2);
        assert!(!accordion.toggle(2));
        assert_eq!(accordion.open_item(), None);
    }
}

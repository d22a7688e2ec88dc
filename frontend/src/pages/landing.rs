use yew::prelude::*;

use crate::components::nav::{anchor_click, scroll_to_lead_form};
use crate::config::StoreConfig;
use crate::deck::SwipeDemo;
use crate::lead::LeadForm;
use crate::pages::faq::Faq;
use crate::pages::pricing::Pricing;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub store: Option<StoreConfig>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let cta = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_lead_form();
    });

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Job hunting, one swipe at a time"}</h1>
                    <p class="hero-subtitle">
                        {"Swipe right on the roles you want. We send the applications, track the replies and remind you before every interview."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={cta}>{"Get early access"}</button>
                        <a href="#how-it-works" class="demo-link" onclick={anchor_click("#how-it-works")}>
                            {"Try the demo"}
                        </a>
                    </div>
                </div>
            </header>

            <SwipeDemo />

            <div class="feature-block">
                <div class="feature-content">
                    <h2>{"Built for campus hiring"}</h2>
                    <ul class="feature-list">
                        <li>{"⚡ One profile, hundreds of applications"}</li>
                        <li>{"🎯 Roles ranked by how well you fit"}</li>
                        <li>{"🔔 Alerts when a recruiter opens your profile"}</li>
                        <li>{"📅 Interview reminders synced to your calendar"}</li>
                    </ul>
                </div>
            </div>

            <Pricing />
            <Faq />
            <LeadForm store={props.store.clone()} />

            <footer class="landing-footer">
                <p>{"© SwipeHire"}</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    color: #fff;
                    background: #1a1a1a;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .hero {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 8rem 1.5rem 4rem;
                }
                .hero h1 {
                    font-size: 3.2rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    max-width: 640px;
                    margin: 1.5rem auto;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.2rem;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    align-items: center;
                }
                .hero-cta {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 999px;
                    background: #7EB2FF;
                    color: #1a1a1a;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .demo-link {
                    color: #7EB2FF;
                    text-decoration: none;
                }
                .feature-block {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .feature-list {
                    list-style: none;
                    padding: 0;
                    line-height: 2.2;
                    font-size: 1.1rem;
                }
                .landing-footer {
                    padding: 3rem 1.5rem;
                    text-align: center;
                    color: rgba(255, 255, 255, 0.5);
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }
                    .hero-cta-group {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}

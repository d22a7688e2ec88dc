use log::debug;
use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::analytics;

/// Past this scroll depth the bar gets its compact look.
pub const SCROLLED_AFTER: f64 = 100.0;
/// Past this depth the bar hides while scrolling down.
pub const HIDE_AFTER: f64 = 200.0;
/// Height of the fixed bar; anchor targets land just below it.
pub const NAV_OFFSET: f64 = 80.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavClasses {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Remembers the last scroll position between frames.
#[derive(Debug, Default)]
pub struct NavTracker {
    last_y: f64,
}

impl NavTracker {
    pub fn new(initial_y: f64) -> Self {
        Self { last_y: initial_y }
    }

    pub fn update(&mut self, y: f64) -> NavClasses {
        let classes = NavClasses {
            scrolled: y > SCROLLED_AFTER,
            hidden: y > self.last_y && y > HIDE_AFTER,
        };
        self.last_y = y;
        classes
    }
}

/// Lets at most one update through per animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    /// True when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn frame_done(&mut self) {
        self.ticking = false;
    }
}

pub fn anchor_scroll_top(element_top: f64, page_y: f64) -> f64 {
    element_top + page_y - NAV_OFFSET
}

/// Smooth-scrolls to the element matching `selector`. Returns false when
/// the selector is bare `#` or nothing matches.
pub fn scroll_to_section(selector: &str) -> bool {
    if selector == "#" {
        return false;
    }
    let Some(window) = web_sys::window() else {
        return false;
    };
    let target = window
        .document()
        .and_then(|d| d.query_selector(selector).ok().flatten());
    let Some(target) = target else {
        debug!("No scroll target for {}", selector);
        return false;
    };

    let page_y = window.page_y_offset().unwrap_or(0.0);
    let top = anchor_scroll_top(target.get_bounding_client_rect().top(), page_y);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

pub fn scroll_to_lead_form() {
    if scroll_to_section("#lead-capture") {
        analytics::track(analytics::Event::CtaClicked, json!({ "target": "lead_form" }));
    }
}

/// Click handler for in-page `#section` links.
pub fn anchor_click(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if href == "#" {
            return;
        }
        e.prevent_default();
        if scroll_to_section(href) {
            analytics::track(analytics::Event::NavLinkClicked, json!({ "href": href }));
        }
    })
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let classes = use_state(NavClasses::default);
    let tracker = use_mut_ref(|| {
        let y = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        NavTracker::new(y)
    });
    let gate = use_mut_ref(FrameGate::default);

    {
        let classes = classes.clone();
        use_event_with_window("scroll", move |_: Event| {
            if !gate.borrow_mut().request() {
                return;
            }
            let Some(window) = web_sys::window() else {
                gate.borrow_mut().frame_done();
                return;
            };

            let classes = classes.clone();
            let tracker = tracker.clone();
            let frame_gate = gate.clone();
            let frame = Closure::once_into_js(move || {
                let y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                let next = tracker.borrow_mut().update(y);
                if *classes != next {
                    classes.set(next);
                }
                frame_gate.borrow_mut().frame_done();
            });

            if window.request_animation_frame(frame.unchecked_ref()).is_err() {
                gate.borrow_mut().frame_done();
            }
        });
    }

    html! {
        <nav id="navbar" class={classes!("navbar", classes.scrolled.then(|| "scrolled"), classes.hidden.then(|| "hidden"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{"SwipeHire"}</a>
                <div class="nav-links">
                    <a href="#how-it-works" class="nav-link" onclick={anchor_click("#how-it-works")}>{"How it works"}</a>
                    <a href="#pricing" class="nav-link" onclick={anchor_click("#pricing")}>{"Pricing"}</a>
                    <a href="#faq" class="nav-link" onclick={anchor_click("#faq")}>{"FAQ"}</a>
                    <a href="#lead-capture" class="nav-cta" onclick={anchor_click("#lead-capture")}>{"Join the waitlist"}</a>
                </div>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 80px;
                    z-index: 100;
                    transition: transform 0.3s ease, background 0.3s ease;
                }
                .navbar.scrolled {
                    background: rgba(26, 26, 26, 0.9);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.2);
                }
                .navbar.hidden {
                    transform: translateY(-100%);
                }
                .nav-content {
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 1.5rem;
                }
                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }
                "#}
            </style>
        </nav>
    }
}

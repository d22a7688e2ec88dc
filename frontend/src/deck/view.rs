use gloo_timers::callback::Timeout;
use log::debug;
use serde_json::json;
use yew::prelude::*;

use super::jobs::{JobListing, DEMO_JOBS};
use super::state::{Committed, Decision, Phase, Release, SwipeDeck, ADVANCE_DELAY_MS};
use crate::analytics;
use crate::components::toast::Toaster;

pub enum SwipeMsg {
    DragStart(f64),
    DragMove(f64),
    DragEnd,
    Choose(Decision),
    Advance,
}

pub struct SwipeDemo {
    deck: SwipeDeck,
    toaster: Toaster,
    advance_timer: Option<Timeout>,
}

impl SwipeDemo {
    fn on_committed(&mut self, ctx: &Context<Self>, committed: Committed) {
        analytics::track(
            analytics::Event::JobSwiped,
            json!({ "direction": committed.decision.as_str(), "jobIndex": committed.index }),
        );
        if committed.decision == Decision::Apply {
            self.toaster.success("Application submitted! 🎉");
        }

        let link = ctx.link().clone();
        self.advance_timer = Some(Timeout::new(ADVANCE_DELAY_MS, move || {
            link.send_message(SwipeMsg::Advance);
        }));
    }

    fn render_card(&self, ctx: &Context<Self>, job: &JobListing) -> Html {
        let link = ctx.link();
        let pose = self.deck.pose();
        let phase = self.deck.phase();

        let stamp_class = |decision: Decision| {
            classes!(
                "swipe-stamp",
                match decision {
                    Decision::Apply => "like",
                    Decision::Pass => "nope",
                },
                (pose.stamp == Some(decision)).then(|| "visible")
            )
        };

        html! {
            <div
                key={self.deck.cursor()}
                class={classes!(
                    "job-card",
                    matches!(phase, Phase::Dragging(_)).then(|| "swiping"),
                    matches!(phase, Phase::Committing(_)).then(|| "removed")
                )}
                style={pose.css_transform()}
                onmousedown={link.callback(|e: MouseEvent| SwipeMsg::DragStart(e.client_x() as f64))}
                onmousemove={link.callback(|e: MouseEvent| SwipeMsg::DragMove(e.client_x() as f64))}
                onmouseup={link.callback(|_: MouseEvent| SwipeMsg::DragEnd)}
                onmouseleave={link.callback(|_: MouseEvent| SwipeMsg::DragEnd)}
                ontouchstart={link.batch_callback(|e: TouchEvent| {
                    e.touches().get(0).map(|t| SwipeMsg::DragStart(t.client_x() as f64))
                })}
                ontouchmove={link.batch_callback(|e: TouchEvent| {
                    e.touches().get(0).map(|t| SwipeMsg::DragMove(t.client_x() as f64))
                })}
                ontouchend={link.callback(|_: TouchEvent| SwipeMsg::DragEnd)}
            >
                <div class="company">{job.company}</div>
                <div class="role">{job.role}</div>
                <div class="ctc">{job.ctc}</div>
                <div class="tags">
                    { for job.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                </div>
                <div class={stamp_class(Decision::Apply)}>{"APPLY"}</div>
                <div class={stamp_class(Decision::Pass)}>{"PASS"}</div>
            </div>
        }
    }
}

impl Component for SwipeDemo {
    type Message = SwipeMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let toaster = ctx
            .link()
            .context::<Toaster>(Callback::noop())
            .map(|(toaster, _)| toaster)
            .unwrap_or_default();

        Self {
            deck: SwipeDeck::new(&DEMO_JOBS),
            toaster,
            advance_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SwipeMsg::DragStart(x) => self.deck.start(x),
            SwipeMsg::DragMove(x) => self.deck.drag_to(x).is_some(),
            SwipeMsg::DragEnd => match self.deck.release() {
                Some(Release::Commit(committed)) => {
                    self.on_committed(ctx, committed);
                    true
                }
                Some(Release::SnapBack) => true,
                None => false,
            },
            SwipeMsg::Choose(decision) => match self.deck.commit(decision) {
                Some(committed) => {
                    self.on_committed(ctx, committed);
                    true
                }
                None => false,
            },
            SwipeMsg::Advance => {
                self.advance_timer = None;
                if self.deck.advance().is_none() {
                    debug!("Swipe deck exhausted after {} cards", self.deck.cursor());
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let controls_disabled = !self.deck.controls_enabled();

        html! {
            <section id="how-it-works" class="swipe-section">
                <h2>{"Swipe right to apply"}</h2>
                <p class="swipe-explainer">{"Drag a card right to apply, left to pass. Try it."}</p>
                <div id="cardStack" class="card-stack">
                    {
                        match self.deck.current() {
                            Some(job) => self.render_card(ctx, job),
                            None => html! {
                                <div class="swipe-explainer deck-empty">
                                    <h3>{"No more jobs!"}</h3>
                                    <p>{"Check back later for more opportunities."}</p>
                                </div>
                            },
                        }
                    }
                </div>
                <div class="swipe-controls">
                    <button
                        class="swipe-btn pass"
                        data-action="pass"
                        disabled={controls_disabled}
                        onclick={ctx.link().callback(|_: MouseEvent| SwipeMsg::Choose(Decision::Pass))}
                    >
                        {"✕"}
                    </button>
                    <button
                        class="swipe-btn apply"
                        data-action="apply"
                        disabled={controls_disabled}
                        onclick={ctx.link().callback(|_: MouseEvent| SwipeMsg::Choose(Decision::Apply))}
                    >
                        {"✓"}
                    </button>
                </div>
                <style>
                    {r#"
                    .swipe-section {
                        padding: 6rem 1.5rem;
                        text-align: center;
                    }
                    .card-stack {
                        position: relative;
                        width: 320px;
                        height: 380px;
                        margin: 2rem auto;
                    }
                    .job-card {
                        position: absolute;
                        inset: 0;
                        padding: 2rem;
                        border-radius: 20px;
                        background: rgba(30, 30, 30, 0.95);
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                        cursor: grab;
                        user-select: none;
                        touch-action: pan-y;
                        transition: transform 0.3s ease;
                    }
                    .job-card.swiping {
                        cursor: grabbing;
                        transition: none;
                    }
                    .job-card.removed {
                        transition: transform 0.5s ease, opacity 0.5s ease;
                        opacity: 0;
                        pointer-events: none;
                    }
                    .job-card .company { font-size: 1.6rem; font-weight: 700; }
                    .job-card .role { margin-top: 0.5rem; color: rgba(255, 255, 255, 0.8); }
                    .job-card .ctc { margin-top: 1rem; color: #7EB2FF; font-weight: 600; }
                    .tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1.5rem; }
                    .tag {
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        background: rgba(126, 178, 255, 0.15);
                        font-size: 0.85rem;
                    }
                    .swipe-stamp {
                        position: absolute;
                        top: 1.5rem;
                        padding: 0.25rem 0.75rem;
                        border: 3px solid;
                        border-radius: 8px;
                        font-weight: 800;
                        opacity: 0;
                        transition: opacity 0.15s ease;
                    }
                    .swipe-stamp.like { right: 1.5rem; color: #22c55e; transform: rotate(12deg); }
                    .swipe-stamp.nope { left: 1.5rem; color: #ef4444; transform: rotate(-12deg); }
                    .swipe-stamp.visible { opacity: 1; }
                    .deck-empty { padding: 4rem 2rem; text-align: center; }
                    .swipe-controls { display: flex; justify-content: center; gap: 2rem; }
                    .swipe-btn {
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .swipe-btn:disabled { opacity: 0.4; cursor: not-allowed; }
                    "#}
                </style>
            </section>
        }
    }
}

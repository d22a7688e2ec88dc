use serde_json::json;
use yew::prelude::*;

use crate::analytics;
use crate::components::nav::scroll_to_lead_form;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Annual => "annual",
        }
    }
}

pub struct Plan {
    pub name: &'static str,
    pub monthly: &'static str,
    pub annual: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

impl Plan {
    pub fn price(&self, period: BillingPeriod) -> &'static str {
        match period {
            BillingPeriod::Monthly => self.monthly,
            BillingPeriod::Annual => self.annual,
        }
    }
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        monthly: "₹0",
        annual: "₹0",
        features: &["20 swipes a day", "Basic profile", "Email alerts"],
        highlighted: false,
    },
    Plan {
        name: "Pro",
        monthly: "₹299",
        annual: "₹2,499",
        features: &[
            "Unlimited swipes",
            "Priority applications",
            "Resume tailoring",
            "Interview reminders",
        ],
        highlighted: true,
    },
    Plan {
        name: "Campus",
        monthly: "₹999",
        annual: "₹8,999",
        features: &["Placement cell dashboard", "Bulk student onboarding", "Recruiter insights"],
        highlighted: false,
    },
];

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let period = use_state(BillingPeriod::default);

    let toggle_button = |target: BillingPeriod, label: &'static str| {
        let onclick = {
            let period = period.clone();
            Callback::from(move |_: MouseEvent| {
                period.set(target);
                analytics::track(analytics::Event::PricingToggle, json!({ "period": target.as_str() }));
            })
        };
        html! {
            <button
                class={classes!("toggle-btn", (*period == target).then(|| "active"))}
                data-period={target.as_str()}
                {onclick}
            >
                {label}
            </button>
        }
    };

    let cta = Callback::from(|_: MouseEvent| scroll_to_lead_form());

    html! {
        <section id="pricing" class="pricing-section">
            <h2>{"Simple pricing"}</h2>
            <div class="pricing-toggle">
                { toggle_button(BillingPeriod::Monthly, "Monthly") }
                { toggle_button(BillingPeriod::Annual, "Annual (save 30%)") }
            </div>
            <div class="pricing-grid">
                {
                    for PLANS.iter().map(|plan| html! {
                        <div key={plan.name} class={classes!("pricing-card", plan.highlighted.then(|| "highlighted"))}>
                            <h3>{plan.name}</h3>
                            <div class={classes!("price", "monthly-price", (*period != BillingPeriod::Monthly).then(|| "hidden"))}>
                                {plan.price(BillingPeriod::Monthly)}<span class="period">{"/mo"}</span>
                            </div>
                            <div class={classes!("price", "annual-price", (*period != BillingPeriod::Annual).then(|| "hidden"))}>
                                {plan.price(BillingPeriod::Annual)}<span class="period">{"/yr"}</span>
                            </div>
                            <ul>
                                { for plan.features.iter().map(|f| html! { <li>{*f}</li> }) }
                            </ul>
                            <button class="pricing-cta" onclick={cta.clone()}>{"Join the waitlist"}</button>
                        </div>
                    })
                }
            </div>
            <style>
                {r#"
                .pricing-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    text-align: center;
                }
                .pricing-toggle {
                    display: inline-flex;
                    gap: 0.5rem;
                    padding: 0.25rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    margin-bottom: 2.5rem;
                }
                .toggle-btn {
                    border: none;
                    border-radius: 999px;
                    padding: 0.5rem 1.25rem;
                    background: transparent;
                    color: rgba(255, 255, 255, 0.7);
                    cursor: pointer;
                }
                .toggle-btn.active {
                    background: #7EB2FF;
                    color: #1a1a1a;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .pricing-card {
                    padding: 2rem;
                    border-radius: 16px;
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    background: rgba(30, 30, 30, 0.7);
                }
                .pricing-card.highlighted {
                    border-color: #7EB2FF;
                }
                .price.hidden {
                    display: none;
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
    fn price_follows_period() {
        let pro = &PLANS[1];
        assert_eq!(pro.price(BillingPeriod::Monthly), "₹299");
        assert_eq!(pro.price(BillingPeriod::Annual), "₹2,499");
    }

    #[test]
    fn monthly_is_default_period() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
        assert_eq!(BillingPeriod::Annual.as_str(), "annual");
    }
}

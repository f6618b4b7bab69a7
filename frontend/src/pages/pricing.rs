use std::collections::BTreeSet;

use yew::prelude::*;

use crate::contact::use_contact_opener;
use crate::content::pricing::{tab_by_id, PRICING_TABS};

/// Which tab is showing and which plan cards have their long feature list
/// expanded. Switching tabs collapses everything.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingView {
    active_tab: &'static str,
    expanded: BTreeSet<usize>,
}

impl Default for PricingView {
    fn default() -> Self {
        Self {
            active_tab: PRICING_TABS[0].id,
            expanded: BTreeSet::new(),
        }
    }
}

impl PricingView {
    pub fn active_tab(&self) -> &'static str {
        self.active_tab
    }

    pub fn select_tab(&mut self, id: &str) {
        let tab = tab_by_id(id);
        if tab.id != self.active_tab {
            self.active_tab = tab.id;
            self.expanded.clear();
        }
    }

    pub fn toggle(&mut self, plan_index: usize) {
        if !self.expanded.remove(&plan_index) {
            self.expanded.insert(plan_index);
        }
    }

    pub fn is_expanded(&self, plan_index: usize) -> bool {
        self.expanded.contains(&plan_index)
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let view = use_state(PricingView::default);
    let open_contact = use_contact_opener();
    let tab = tab_by_id(view.active_tab());

    html! {
        <main class="pricing">
            <section class="pricing-hero">
                <h1>{"Pricing"}</h1>
                <p>{"Transparent packages for every stage. Every project starts with a free discovery call."}</p>
            </section>

            <div class="pricing-tabs" role="tablist">
                { for PRICING_TABS.iter().map(|t| {
                    let onclick = {
                        let view = view.clone();
                        let id = t.id;
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*view).clone();
                            next.select_tab(id);
                            view.set(next);
                        })
                    };
                    html! {
                        <button
                            role="tab"
                            class={classes!("pricing-tab", (t.id == tab.id).then(|| "active"))}
                            {onclick}
                        >
                            { t.label }
                        </button>
                    }
                }) }
            </div>

            <section class="plan-grid">
                { for tab.plans.iter().enumerate().map(|(index, plan)| {
                    let expanded = view.is_expanded(index);
                    let on_toggle = {
                        let view = view.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*view).clone();
                            next.toggle(index);
                            view.set(next);
                        })
                    };
                    let on_cta = {
                        let open_contact = open_contact.clone();
                        Callback::from(move |_: MouseEvent| open_contact.emit(()))
                    };
                    html! {
                        <article class={classes!("plan-card", plan.popular.then(|| "popular"))}>
                            if plan.popular {
                                <span class="plan-badge">{"Most popular"}</span>
                            }
                            <h3>{ plan.name }</h3>
                            <p class="plan-price">{ plan.price }</p>
                            <p class="plan-tagline">{ plan.tagline }</p>
                            <ul class="plan-features">
                                { for plan.visible_features(expanded).into_iter().map(|feature| html! { <li>{ feature }</li> }) }
                            </ul>
                            if !plan.expanded_features.is_empty() {
                                <button class="plan-toggle" onclick={on_toggle}>
                                    { if expanded { "Show less" } else { "See all features" } }
                                </button>
                            }
                            <button class="button primary" onclick={on_cta}>{ plan.cta }</button>
                        </article>
                    }
                }) }
            </section>
        </main>
    }
}

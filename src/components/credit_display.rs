use yew::prelude::*;

use crate::hooks::use_store::use_store;
use crate::models::credits::{BalanceLevel, CreditBalance};

/// Credit balance from the app store with a low-balance warning.
#[function_component(CreditDisplay)]
pub fn credit_display() -> Html {
    let store = use_store();
    let balance = CreditBalance::new(store.map_or(0, |store| store.credits));
    let level = balance.level();

    html! {
        <section class={classes!("credit-display", level.css_class())}>
            <h2>{"Credits"}</h2>
            <p class="credit-value">{balance.credits.to_string()}</p>
            <p class="credit-estimate">
                {format!("≈ {} exams remaining", balance.remaining_exams())}
            </p>
            if level != BalanceLevel::Healthy {
                <p class="credit-warning">{level.label()}</p>
            }
        </section>
    }
}

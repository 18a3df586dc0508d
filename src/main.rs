use std::rc::Rc;

use chrono::{Duration, Utc};
use yew::prelude::*;

use qimma_dashboard::components::{
    CreditDisplay, DashboardStats, ExamList, SessionWarning, ThemeToggle,
};
use qimma_dashboard::config::Config;
use qimma_dashboard::logging;
use qimma_dashboard::models::user::User;
use qimma_dashboard::store::{AppStore, LocalStorageBackend, StoreAction, StoreContext};

/// Signed-in user until the identity provider is wired in.
fn preview_user() -> User {
    User {
        id: "user_preview".to_string(),
        email: "teacher@qimma.app".to_string(),
        name: "Preview Teacher".to_string(),
        credits: 0,
        role: Default::default(),
        subscription_tier: Default::default(),
    }
}

#[function_component(App)]
fn app() -> Html {
    let store = use_reducer(|| AppStore::load(Rc::new(LocalStorageBackend::new(Config::STORE_KEY))));
    let session_started = use_memo((), |_| Utc::now());

    // Effect: sign in the preview user on mount
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            store.dispatch(StoreAction::SetUser(Some(preview_user())));
            store.dispatch(StoreAction::SetAuthenticated(true));
            || ()
        });
    }

    let user_id: Option<AttrValue> = store.user.as_ref().map(|user| AttrValue::from(user.id.clone()));
    let sidebar_class = classes!("app-sidebar", (!store.sidebar_open).then_some("collapsed"));
    let toggle_sidebar = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(StoreAction::ToggleSidebar))
    };

    html! {
        <ContextProvider<StoreContext> context={store.clone()}>
            <div class="app-container">
                <header class="app-header">
                    <button class="sidebar-toggle" onclick={toggle_sidebar}>{"☰"}</button>
                    <h1>{"Qimma Dashboard"}</h1>
                    <ThemeToggle />
                </header>

                <SessionWarning
                    expires_at={Some(*session_started + Duration::minutes(Config::SESSION_FALLBACK_MINUTES))}
                    created_at={*session_started}
                />

                <div class="app-body">
                    <aside class={sidebar_class}>
                        <CreditDisplay />
                    </aside>

                    <main class="app-main">
                        if let Some(user_id) = user_id {
                            <DashboardStats user_id={user_id.clone()} />
                            <ExamList {user_id} />
                        } else {
                            <p class="signed-out">{"Sign in to see your exams."}</p>
                        }
                    </main>
                </div>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </ContextProvider<StoreContext>>
    }
}

fn main() {
    logging::init(Config::DEBUG_LOGGING);
    yew::Renderer::<App>::new().render();
}

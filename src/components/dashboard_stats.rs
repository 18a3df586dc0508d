use yew::prelude::*;

use super::refresh_indicator::RefreshIndicator;
use super::status::Status;
use crate::hooks::use_dashboard_stats::use_dashboard_stats;
use crate::hooks::use_store::use_store;
use crate::models::stats::{Activity, DashboardStats as Stats};
use crate::store::StoreAction;
use crate::utils::time::format_relative;

#[derive(Properties, PartialEq)]
pub struct DashboardStatsProps {
    pub user_id: AttrValue,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: AttrValue,
    value: String,
    #[prop_or_default]
    subtitle: Option<String>,
    #[prop_or_default]
    class: Classes,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("stat-card", props.class.clone())}>
            <h3>{&props.title}</h3>
            <p class="stat-value">{&props.value}</p>
            if let Some(subtitle) = &props.subtitle {
                <p class="stat-subtitle">{subtitle}</p>
            }
        </div>
    }
}

/// Dashboard overview cards, kept live by the stats source.
#[function_component(DashboardStats)]
pub fn dashboard_stats(props: &DashboardStatsProps) -> Html {
    let stats = use_dashboard_stats(props.user_id.clone());
    let store = use_store();

    // Effect: keep the stored credit balance in step with the server
    {
        let credits = stats.state.data.as_ref().map(|s| s.credits_remaining);
        use_effect_with(credits, move |credits| {
            if let (Some(store), Some(credits)) = (store, *credits) {
                store.dispatch(StoreAction::SetCredits(credits));
            }
            || ()
        });
    }

    let state = &stats.state;
    let body = match &state.data {
        Some(data) => render_stats(data),
        None => html! {
            <Status
                loading={state.loading}
                error={state.error.clone()}
                on_retry={stats.refresh.clone()}
            />
        },
    };

    html! {
        <section class="dashboard-stats">
            <div class="section-header">
                <h2>{"Dashboard Overview"}</h2>
                <RefreshIndicator
                    is_refreshing={state.is_refreshing}
                    last_updated={state.last_updated}
                    error={state.error.clone()}
                    enabled={stats.enabled}
                    on_refresh={stats.refresh.clone()}
                    on_toggle={stats.toggle.clone()}
                />
            </div>
            {body}
        </section>
    }
}

fn render_stats(stats: &Stats) -> Html {
    let average = stats
        .average_score
        .map_or_else(|| "N/A".to_string(), |score| format!("{score:.1}%"));

    html! {
        <>
            <div class="stats-grid">
                <StatCard
                    title="Total Exams"
                    value={stats.total_exams.to_string()}
                    subtitle={format!("{}% completed", stats.completion_rate())}
                />
                <StatCard
                    title="Processing"
                    value={stats.processing_exams.to_string()}
                    class={classes!(stats.has_processing_exams().then_some("stat-processing"))}
                />
                <StatCard
                    title="Errors"
                    value={stats.error_exams.to_string()}
                    class={classes!((stats.error_exams > 0).then_some("stat-error"))}
                />
                <StatCard title="Credits" value={stats.credits_remaining.to_string()} />
                <StatCard title="Average Score" value={average} />
            </div>
            if !stats.recent_activity.is_empty() {
                <ul class="recent-activity">
                    { for stats.recent_activity.iter().map(render_activity) }
                </ul>
            }
        </>
    }
}

fn render_activity(activity: &Activity) -> Html {
    html! {
        <li key={activity.id.clone()} class={activity.kind.css_class()}>
            <span class="activity-message">{&activity.message}</span>
            <span class="activity-time">
                {format_relative(activity.timestamp, chrono::Utc::now())}
            </span>
        </li>
    }
}

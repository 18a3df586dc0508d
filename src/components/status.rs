use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Full-panel placeholder shown while nothing has been fetched yet.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if props.loading {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        };
    }

    match &props.error {
        Some(msg) => {
            let retry = props.on_retry.clone().map(|on_retry| {
                let onclick = Callback::from(move |_| on_retry.emit(()));
                html! { <button class="status-retry" {onclick}>{"Try again"}</button> }
            });
            html! {
                <div class="status error">
                    <p>{"❌ Error: "}{msg}</p>
                    {retry}
                </div>
            }
        }
        None => html! {},
    }
}

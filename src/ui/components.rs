/// Reusable UI components

use crate::browser::{self, TabOpener, WindowTabOpener};
use crate::links::{CardState, GenerationError, LOADING_RESET_MS};
use crate::tool_data::ToolDescriptor;
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToolCardProps {
    pub tool: ToolDescriptor,
    /// Link for the current domain, None while no domain is entered
    pub outcome: Option<Result<String, GenerationError>>,
    pub is_favorite: bool,
    pub is_selected: bool,
    pub on_toggle_favorite: Callback<String>,
    pub on_toggle_select: Callback<String>,
}

#[function_component(ToolCard)]
pub fn tool_card(props: &ToolCardProps) -> Html {
    let loading = use_state(|| false);
    let state = props
        .outcome
        .as_ref()
        .map(|outcome| CardState::resolve(outcome, *loading));

    let can_open = state.as_ref().map_or(false, CardState::can_open);
    let selectable = state.as_ref().map_or(false, |state| !state.is_error());

    // Open handler: navigation happens inside the click, the spinner is cosmetic
    let on_open = {
        let loading = loading.clone();
        let url = props.outcome.clone().and_then(Result::ok);

        Callback::from(move |_: MouseEvent| {
            let Some(url) = url.as_deref() else {
                return;
            };

            if let Err(e) = WindowTabOpener.open_in_new_tab(url) {
                log::warn!("Failed to open {}: {}", url, e);
                return;
            }

            loading.set(true);
            let reset = loading.clone();
            if let Err(e) = browser::set_timeout(LOADING_RESET_MS, move || reset.set(false)) {
                log::warn!("Failed to schedule loading reset: {}", e);
                loading.set(false);
            }
        })
    };

    let on_favorite = props.on_toggle_favorite.reform({
        let id = props.tool.id.clone();
        move |_: MouseEvent| id.clone()
    });

    let on_select = props.on_toggle_select.reform({
        let id = props.tool.id.clone();
        move |_: MouseEvent| id.clone()
    });

    let (card_class, status) = match &state {
        None => (
            "tool-card tool-card-disabled",
            html! { <span class="tool-status">{"Enter a domain"}</span> },
        ),
        Some(CardState::Idle) => ("tool-card", html! {}),
        Some(CardState::Loading) => (
            "tool-card tool-card-loading",
            html! { <Spinner /> },
        ),
        Some(CardState::Error(e)) => (
            "tool-card tool-card-error",
            html! {
                <span class="tool-status tool-status-error" title={e.to_string()}>
                    {"Unavailable"}
                </span>
            },
        ),
    };

    html! {
        <div class={card_class}>
            <div class="tool-card-header">
                <input
                    type="checkbox"
                    class="tool-select"
                    checked={props.is_selected}
                    disabled={!selectable}
                    onclick={on_select}
                />
                <h3 class="tool-title">{&props.tool.title}</h3>
                <button
                    class="favorite-toggle"
                    title={if props.is_favorite { "Remove from favorites" } else { "Add to favorites" }}
                    onclick={on_favorite}
                >
                    {if props.is_favorite { "★" } else { "☆" }}
                </button>
            </div>
            <p class="tool-description">{&props.tool.description}</p>
            <div class="tool-card-footer">
                {status}
                <Button
                    onclick={on_open}
                    disabled={!can_open}
                    variant={ButtonVariant::Secondary}
                    size={ButtonSize::Small}
                >
                    {"Open ↗"}
                </Button>
            </div>
        </div>
    }
}

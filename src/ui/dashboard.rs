/// Main dashboard for Domain Research Hub

use crate::browser::{self, OpenReport, WindowTabOpener, open_all};
use crate::catalog::{catalog, category_counts};
use crate::domain::{NormalizedDomain, sanitize_and_validate};
use crate::links::batch_generate;
use crate::selection::Selection;
use crate::storage::{FAVORITES_KEY, Preferences, THEME_KEY};
use crate::tool_data::{Category, ToolDescriptor};
use crate::ui::components::ToolCard;
use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum ActiveView {
    All,
    Favorites,
    Category(Category),
}

impl ActiveView {
    fn label(self) -> &'static str {
        match self {
            ActiveView::All => "All",
            ActiveView::Favorites => "Favorites",
            ActiveView::Category(category) => category.label(),
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let raw_input = use_state(String::new);
    let domain = use_state(|| None::<NormalizedDomain>);
    let validation_error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let prefs = use_state(|| Preferences::load(browser::read_storage));
    let selection = use_state(Selection::new);
    let active_view = use_state(|| ActiveView::All);
    let filter = use_state(String::new);

    // Drop favorites for tools that were removed from the catalog
    {
        let prefs = prefs.clone();
        use_effect_with((), move |_| {
            let mut cleaned = (*prefs).clone();
            if cleaned.retain_known_favorites(catalog()) {
                save_favorites(&cleaned);
                prefs.set(cleaned);
            }
            || ()
        });
    }

    // Apply theme whenever it changes
    use_effect_with(prefs.theme, |theme| {
        if let Err(e) = browser::apply_theme(*theme) {
            log::warn!("Failed to apply theme: {}", e);
        }
        || ()
    });

    // Links are regenerated only when the domain changes
    let outcomes = use_memo((*domain).clone(), |domain| {
        domain
            .as_ref()
            .map(|domain| batch_generate(catalog(), domain.as_str()))
    });

    let on_input = {
        let raw_input = raw_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                raw_input.set(input.value());
            }
        })
    };

    // Submit handler: sanitize, validate, and swap in the new domain
    let on_submit = {
        let raw_input = raw_input.clone();
        let domain = domain.clone();
        let validation_error = validation_error.clone();
        let selection = selection.clone();
        let notice = notice.clone();

        Callback::from(move |_: ()| {
            notice.set(None);

            if raw_input.trim().is_empty() {
                domain.set(None);
                validation_error.set(None);
                selection.set(Selection::new());
                return;
            }

            match sanitize_and_validate(&raw_input) {
                Ok(normalized) => {
                    // Uncheck tools that have no link for the new domain
                    let mut pruned = (*selection).clone();
                    pruned.retain_openable(catalog(), normalized.as_str());
                    selection.set(pruned);

                    validation_error.set(None);
                    domain.set(Some(normalized));
                }
                Err(e) => {
                    validation_error.set(Some(e.to_string()));
                    domain.set(None);
                }
            }
        })
    };

    let on_keydown = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_submit.emit(());
            }
        })
    };

    let on_filter_input = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                filter.set(input.value());
            }
        })
    };

    let on_toggle_favorite = {
        let prefs = prefs.clone();
        Callback::from(move |tool_id: String| {
            let mut new_prefs = (*prefs).clone();
            new_prefs.toggle_favorite(&tool_id);
            save_favorites(&new_prefs);
            prefs.set(new_prefs);
        })
    };

    let on_toggle_select = {
        let selection = selection.clone();
        Callback::from(move |tool_id: String| {
            let mut new_selection = (*selection).clone();
            new_selection.toggle(&tool_id);
            selection.set(new_selection);
        })
    };

    let on_cycle_theme = {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_prefs = (*prefs).clone();
            new_prefs.set_theme(new_prefs.theme.next());
            if let Err(e) = browser::write_storage(THEME_KEY, new_prefs.theme.as_str()) {
                log::warn!("Failed to save theme: {}", e);
            }
            prefs.set(new_prefs);
        })
    };

    // Tools shown in the current view, paired with their links
    let visible: Vec<(usize, &'static ToolDescriptor)> = catalog()
        .iter()
        .enumerate()
        .filter(|(_, tool)| match *active_view {
            ActiveView::All => true,
            ActiveView::Favorites => prefs.is_favorite(&tool.id),
            ActiveView::Category(category) => tool.category == category,
        })
        .filter(|(_, tool)| tool.matches_query(&filter))
        .collect();

    let outcome_for = |index: usize| {
        (*outcomes)
            .as_ref()
            .and_then(|all| all.get(index).cloned())
    };

    let on_select_visible = {
        let selection = selection.clone();
        let openable: Vec<String> = visible
            .iter()
            .filter(|(index, _)| matches!(outcome_for(*index), Some(Ok(_))))
            .map(|(_, tool)| tool.id.clone())
            .collect();

        Callback::from(move |_: MouseEvent| {
            let mut new_selection = (*selection).clone();
            new_selection.select_all(openable.iter().map(String::as_str));
            selection.set(new_selection);
        })
    };

    let on_clear_selection = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            selection.set(Selection::new());
        })
    };

    // Open selected: every tab is opened before this handler returns
    let on_open_selected = {
        let selection = selection.clone();
        let domain = domain.clone();
        let notice = notice.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(domain) = (*domain).as_ref() else {
                return;
            };

            let tools = selection.resolve(catalog());
            let outcomes = batch_generate(tools, domain.as_str());
            let report = open_all(&mut WindowTabOpener, &outcomes);

            notice.set(Some(open_report_message(&report)));
        })
    };

    let on_tab_click = {
        let active_view = active_view.clone();
        move |view: ActiveView| {
            let active_view = active_view.clone();
            Callback::from(move |_: MouseEvent| {
                active_view.set(view);
            })
        }
    };

    let views: Vec<ActiveView> = [ActiveView::All, ActiveView::Favorites]
        .into_iter()
        .chain(
            category_counts()
                .into_iter()
                .map(|(category, _)| ActiveView::Category(category)),
        )
        .collect();

    let has_domain = domain.is_some();
    let can_open_selected = has_domain && !selection.is_empty();

    html! {
        <div class="padding-20">
            <div class="header">
                <h1 class="main-title">{"Domain Research Hub"}</h1>
                <Button onclick={on_cycle_theme} variant={ButtonVariant::Secondary}>
                    {format!("Theme: {}", prefs.theme.as_str())}
                </Button>
            </div>

            // Domain input
            <div class="search-container">
                <input
                    type="text"
                    placeholder="Enter a domain, e.g. example.com"
                    value={(*raw_input).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    class="search-input"
                />
                <Button onclick={on_submit.reform(|_: MouseEvent| ())}>
                    {"Research"}
                </Button>
            </div>

            if let Some(err) = (*validation_error).clone() {
                <Alert r#type={AlertType::Danger} title={"Invalid domain"} inline={true}>
                    {err}
                </Alert>
            }

            if let Some(domain) = (*domain).as_ref() {
                <p class="message-text">{format!("Researching {}", domain)}</p>
            }

            if let Some(message) = (*notice).clone() {
                <Alert r#type={AlertType::Info} title={message} inline={true}>
                </Alert>
            }

            // Tab navigation
            <div class="pf-v5-c-tabs tabs-nav">
                <ul class="pf-v5-c-tabs__list">
                    {for views.iter().map(|view| html! {
                        <li class={if *active_view == *view { "pf-v5-c-tabs__item pf-m-current" } else { "pf-v5-c-tabs__item" }}>
                            <button
                                class="pf-v5-c-tabs__link"
                                onclick={on_tab_click(*view)}
                            >
                                <span class="pf-v5-c-tabs__item-text">{view.label()}</span>
                            </button>
                        </li>
                    })}
                </ul>
            </div>

            // Multi-open toolbar
            <div class="toolbar">
                <input
                    type="text"
                    placeholder="Filter tools..."
                    value={(*filter).clone()}
                    oninput={on_filter_input}
                    class="filter-input"
                />
                <Button onclick={on_select_visible} disabled={!has_domain} variant={ButtonVariant::Secondary}>
                    {"Select visible"}
                </Button>
                <Button onclick={on_clear_selection} disabled={selection.is_empty()} variant={ButtonVariant::Secondary}>
                    {"Clear"}
                </Button>
                <Button onclick={on_open_selected} disabled={!can_open_selected}>
                    {format!("Open selected ({})", selection.len())}
                </Button>
            </div>

            // Tool cards
            if visible.is_empty() {
                <div class="empty-state">
                    if *active_view == ActiveView::Favorites && filter.is_empty() {
                        <p>{"No favorites yet."}</p>
                        <p class="empty-state-hint">{"Use ☆ on a tool to pin it here."}</p>
                    } else {
                        <p>{"No tools match your filter."}</p>
                    }
                </div>
            } else {
                <div class="tool-grid">
                    {for visible.iter().map(|(index, tool)| html! {
                        <ToolCard
                            key={tool.id.clone()}
                            tool={(*tool).clone()}
                            outcome={outcome_for(*index)}
                            is_favorite={prefs.is_favorite(&tool.id)}
                            is_selected={selection.contains(&tool.id)}
                            on_toggle_favorite={on_toggle_favorite.clone()}
                            on_toggle_select={on_toggle_select.clone()}
                        />
                    })}
                </div>
            }

            <p class="footer">
                {format!("{} tools • {} favorites • Domain Research Hub v{}",
                    catalog().len(),
                    prefs.favorites.len(),
                    env!("CARGO_PKG_VERSION")
                )}
            </p>
        </div>
    }
}

/// Summary shown after "open selected"
fn open_report_message(report: &OpenReport) -> String {
    if report.failed > 0 {
        format!(
            "Opened {} of {} tabs. Allow pop-ups for this site to open the rest.",
            report.opened,
            report.opened + report.failed
        )
    } else if report.skipped > 0 {
        format!(
            "Opened {} tabs. {} unavailable tools were skipped.",
            report.opened, report.skipped
        )
    } else {
        format!("Opened {} tabs.", report.opened)
    }
}

fn save_favorites(prefs: &Preferences) {
    if let Err(e) = browser::write_storage(FAVORITES_KEY, &prefs.favorites_json()) {
        log::warn!("Failed to save favorites: {}", e);
    }
}

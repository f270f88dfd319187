use dioxus::prelude::*;

use crate::dogapi::Breed;

#[derive(Props, PartialEq, Clone)]
pub struct SuggestionListProps {
    suggestions: Vec<Breed>,
    on_pick: EventHandler<String>,
}

/// Transient autocomplete panel shown above the table while typing.
/// The caller only renders it when there is at least one candidate.
#[component]
pub fn SuggestionList(props: SuggestionListProps) -> Element {
    let on_pick = props.on_pick;

    rsx! {
        div { class: "suggestion-panel",
            span { class: "suggestion-title", "Suggestions:" }
            ul { class: "suggestion-list",
                {props.suggestions.iter().map(|breed| {
                    let name = breed.name.clone();
                    rsx! {
                        li {
                            key: "{breed.id}",
                            class: "suggestion-item",
                            onclick: move |_| on_pick.call(name.clone()),
                            "{breed.name}"
                        }
                    }
                })}
            }
        }
    }
}

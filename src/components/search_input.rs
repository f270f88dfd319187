use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    query: String,
    on_change: EventHandler<String>,
    on_submit: EventHandler<()>,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let on_change = props.on_change;
    let on_submit = props.on_submit;

    rsx! {
        div { class: "search-container",
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search dog breed...",
                value: "{props.query}",
                oninput: move |evt| on_change.call(evt.value().clone()),
                // Enter submits the same search as the button
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        on_submit.call(());
                    }
                }
            }
            button {
                class: "search-button",
                onclick: move |_| on_submit.call(()),
                "Search"
            }
        }
    }
}

use dioxus::{logger::tracing, prelude::*};

use crate::components::{BreedRow, SearchInput, SuggestionList};
use crate::dogapi::{self, Breed};
use crate::utils::search::{filter_breeds, suggestions_for};

const BREEDS_CSS: Asset = asset!("/assets/styling/breeds.css");

#[derive(Clone)]
struct BreedFetcher {
    breeds: Signal<Vec<Breed>>,
}

impl BreedFetcher {
    fn fetch(&self) {
        let mut breeds = self.breeds.clone();

        tracing::info!("Starting breed fetch...");

        spawn(async move {
            match dogapi::fetch_breeds().await {
                Ok(list) => {
                    tracing::info!("Fetched {} breeds", list.len());
                    breeds.set(list);
                }
                Err(e) => {
                    // Diagnostic only: the table stays empty and the user
                    // keeps whatever was displayed before the call.
                    tracing::error!("Failed to fetch breeds: {:?}", e);
                }
            }
        });
    }
}

#[component]
pub fn Breeds() -> Element {
    let mut search_query = use_signal(String::new);
    let mut suggestions = use_signal(|| Vec::<Breed>::new());
    let mut breeds = use_signal(|| Vec::<Breed>::new());

    let fetcher = BreedFetcher {
        breeds: breeds.clone(),
    };

    // Reads no signals, so it fires exactly once per page load. Searches
    // never re-fetch; only a reload restores the full list.
    use_effect(move || {
        fetcher.fetch();
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BREEDS_CSS }
        div { class: "breeds-container",
            div { class: "breeds-header",
                h1 { "Dog Breeds" }
                div { class: "header-controls",
                    SearchInput {
                        query: search_query(),
                        on_change: move |q: String| {
                            let next = suggestions_for(&breeds.read(), &q);
                            search_query.set(q);
                            suggestions.set(next);
                        },
                        on_submit: move |_| {
                            let narrowed = filter_breeds(&breeds.read(), &search_query.read());
                            breeds.set(narrowed);
                            suggestions.set(Vec::new());
                        }
                    }
                    span { class: "breed-count", "{breeds().len()} breeds" }
                }
            }

            {(!suggestions().is_empty()).then(|| rsx! {
                SuggestionList {
                    suggestions: suggestions(),
                    on_pick: move |name: String| {
                        // Picking only fills the input; it does not search.
                        search_query.set(name);
                        suggestions.set(Vec::new());
                    }
                }
            })}

            table { class: "breeds-table",
                thead {
                    tr {
                        th { "Number" }
                        th { "Name" }
                        th { "Weight (lbs/kg)" }
                        th { "Height (inches/cm)" }
                        th { "Bred For" }
                        th { "Breed Group" }
                        th { "Life Span" }
                        th { "Temperament" }
                    }
                }
                tbody {
                    {breeds.read().iter().enumerate().map(|(index, breed)| {
                        rsx! {
                            BreedRow {
                                key: "{breed.id}",
                                index: index,
                                breed: breed.clone()
                            }
                        }
                    })}
                }
            }
        }
    }
}

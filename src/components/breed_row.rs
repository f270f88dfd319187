use dioxus::prelude::*;

use crate::dogapi::Breed;
use crate::utils::display::{measure_cell, text_or_placeholder};

#[derive(Clone)]
struct BreedCells {
    number: usize,
    name: String,
    weight: String,
    height: String,
    bred_for: String,
    breed_group: String,
    life_span: String,
    temperament: String,
}

#[derive(Props, PartialEq, Clone)]
pub struct BreedRowProps {
    /// Position in the currently displayed list. Display only, recomputed
    /// every render; never an identity.
    index: usize,
    breed: Breed,
}

#[component]
pub fn BreedRow(props: BreedRowProps) -> Element {
    let cells = BreedCells {
        number: props.index + 1,
        name: props.breed.name.clone(),
        weight: measure_cell(&props.breed.weight),
        height: measure_cell(&props.breed.height),
        bred_for: text_or_placeholder(props.breed.bred_for.as_deref()).to_string(),
        breed_group: text_or_placeholder(props.breed.breed_group.as_deref()).to_string(),
        life_span: text_or_placeholder(props.breed.life_span.as_deref()).to_string(),
        temperament: text_or_placeholder(props.breed.temperament.as_deref()).to_string(),
    };

    rsx! {
        tr { class: "breed-row",
            td { class: "breed-number", "{cells.number}" }
            td { class: "breed-name", "{cells.name}" }
            td { "{cells.weight}" }
            td { "{cells.height}" }
            td { "{cells.bred_for}" }
            td { "{cells.breed_group}" }
            td { "{cells.life_span}" }
            td { "{cells.temperament}" }
        }
    }
}

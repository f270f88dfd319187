//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to define common UI elements like inputs, rows, and panels.

mod breed_row;
pub use breed_row::BreedRow;

mod search_input;
pub use search_input::SearchInput;

mod suggestion_list;
pub use suggestion_list::SuggestionList;

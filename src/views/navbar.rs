use crate::Route;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "layout-container",
            header {
                class: "app-header",
                span { class: "app-title", "Dogdex" }
                span { class: "app-tagline", "browse the thedogapi.com breed catalogue" }
            }
            main {
                class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}

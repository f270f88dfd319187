//! The views module contains the components for all Layouts and Routes for our app.
//! Each submodule corresponds to a specific section of the application,
//! encapsulating the layout and routing logic for that section.

mod breeds;
pub use breeds::Breeds;

mod navbar;
pub use navbar::Navbar;

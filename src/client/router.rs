use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, NotFound, PlaythroughPage},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/playthrough/:id")]
    PlaythroughPage { id: i32 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

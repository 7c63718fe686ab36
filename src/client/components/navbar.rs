use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBook;
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaBook
                        }
                        p { class: "text-xl",
                            "PkmnLog"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                a { href: "/api/docs",
                    button {
                        class: "btn btn-outline",
                        "API Docs"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}

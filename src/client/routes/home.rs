use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::components::{Page, PlaythroughForm, PlaythroughTable},
    model::playthrough::PlaythroughDto,
};

#[component]
pub fn Home() -> Element {
    let mut playthroughs = use_signal(Vec::<PlaythroughDto>::new);
    let mut error = use_signal(|| None::<String>);

    // Retrieve playthroughs once on component load
    #[cfg(feature = "web")]
    use_hook(move || {
        use crate::client::util::api::get_playthroughs;

        spawn(async move {
            match get_playthroughs().await {
                Ok(list) => playthroughs.set(list),
                Err(err) => error.set(Some(err)),
            }
        })
    });

    rsx!(
        Title { "PkmnLog" }
        Meta {
            name: "description",
            content: "Personal log for Pokémon game playthroughs."
        }
        Page {
            PlaythroughForm {
                // A new playthrough is the most recently updated one
                on_created: move |playthrough: PlaythroughDto| {
                    playthroughs.write().insert(0, playthrough);
                    error.set(None);
                }
            }
            div {
                class: "card shadow-sm bg-base-100",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "Playthroughs" }
                    if let Some(err) = error() {
                        p { class: "text-error", "{err}" }
                    }
                    PlaythroughTable { playthroughs: playthroughs() }
                }
            }
        }
    )
}

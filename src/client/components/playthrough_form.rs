use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::model::playthrough::{Game, PlaythroughDto};

/// Form for starting a playthrough; calls `on_created` with the stored record.
#[component]
pub fn PlaythroughForm(on_created: EventHandler<PlaythroughDto>) -> Element {
    let mut title = use_signal(String::new);
    let mut game = use_signal(|| Game::ALL[0].slug().to_string());
    let mut start_date = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        {
            use crate::client::util::{api::create_playthrough, format::parse_date_input};
            use crate::model::playthrough::CreatePlaythroughDto;

            let payload = CreatePlaythroughDto {
                title: title(),
                game: game(),
                start_date: parse_date_input(&start_date.read()),
            };

            spawn(async move {
                match create_playthrough(&payload).await {
                    Ok(playthrough) => {
                        title.set(String::new());
                        start_date.set(String::new());
                        error.set(None);
                        on_created.call(playthrough);
                    }
                    Err(err) => error.set(Some(err)),
                }
            });
        }
    };

    rsx!(
        div {
            class: "card shadow-sm bg-base-100",
            div {
                class: "card-body gap-3",
                h2 { class: "card-title", "New Playthrough" }
                div { class: "flex flex-wrap gap-2",
                    input {
                        class: "input grow",
                        placeholder: "Title",
                        maxlength: 120,
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                    select {
                        class: "select",
                        value: "{game}",
                        onchange: move |evt| game.set(evt.value()),
                        for g in Game::ALL {
                            option { value: g.slug(), selected: game() == g.slug(), {g.label()} }
                        }
                    }
                    input {
                        class: "input",
                        r#type: "date",
                        value: "{start_date}",
                        oninput: move |evt| start_date.set(evt.value()),
                    }
                    button { class: "btn btn-primary flex gap-2",
                        onclick: submit,
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaPlus
                        }
                        "Start"
                    }
                }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
            }
        }
    )
}

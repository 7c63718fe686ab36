use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPenToSquare;
use dioxus_free_icons::Icon;

use crate::model::playthrough::{Category, EntryDto};

/// Form for logging an entry against `playthrough_id`.
#[component]
pub fn EntryForm(playthrough_id: i32, on_created: EventHandler<EntryDto>) -> Element {
    let mut title = use_signal(String::new);
    let mut category = use_signal(|| Category::ALL[0].slug().to_string());
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        {
            use crate::client::util::api::create_entry;
            use crate::model::playthrough::CreateEntryDto;

            let payload = CreateEntryDto {
                title: title(),
                category: category(),
                description: Some(description()),
            };

            spawn(async move {
                match create_entry(playthrough_id, &payload).await {
                    Ok(entry) => {
                        title.set(String::new());
                        description.set(String::new());
                        error.set(None);
                        on_created.call(entry);
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
                h2 { class: "card-title", "Log Entry" }
                div { class: "flex flex-wrap gap-2",
                    input {
                        class: "input grow",
                        placeholder: "What happened?",
                        maxlength: 120,
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                    select {
                        class: "select",
                        value: "{category}",
                        onchange: move |evt| category.set(evt.value()),
                        for c in Category::ALL {
                            option { value: c.slug(), selected: category() == c.slug(), {c.label()} }
                        }
                    }
                }
                textarea {
                    class: "textarea w-full",
                    placeholder: "Notes (optional)",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
                div { class: "flex justify-end",
                    button { class: "btn btn-primary flex gap-2",
                        onclick: submit,
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaPenToSquare
                        }
                        "Log"
                    }
                }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
            }
        }
    )
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

use crate::{client::util::format, model::playthrough::EntryDto};

/// Entries in the order given, newest first as returned by the API.
#[component]
pub fn EntryList(entries: Vec<EntryDto>, on_delete: EventHandler<i32>) -> Element {
    if entries.is_empty() {
        return rsx!(
            p { class: "text-center opacity-70",
                "Nothing logged yet."
            }
        );
    }

    rsx!(
        ul { class: "flex flex-col gap-2",
            {entries.iter().map(|entry| {
                let entry_id = entry.id;

                rsx! {
                    li { key: "{entry.id}",
                        class: "card shadow-sm bg-base-100",
                        div { class: "card-body p-4 gap-1",
                            div { class: "flex items-center gap-2",
                                span { class: "badge badge-outline", {entry.category.label()} }
                                p { class: "font-semibold", "{entry.title}" }
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    title: "Delete entry",
                                    onclick: move |_| on_delete.call(entry_id),
                                    Icon {
                                        width: 14,
                                        height: 14,
                                        icon: FaTrash
                                    }
                                }
                            }
                            if let Some(description) = &entry.description {
                                p { class: "whitespace-pre-wrap", "{description}" }
                            }
                            p { class: "text-xs opacity-60",
                                {format::timestamp(&entry.created_at)}
                            }
                        }
                    }
                }
            })}
        }
    )
}

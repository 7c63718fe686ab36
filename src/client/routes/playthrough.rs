use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{EntryForm, EntryList, Page},
        util::format,
    },
    model::playthrough::{EntryDto, PlaythroughDetailDto},
};

#[component]
pub fn PlaythroughPage(id: i32) -> Element {
    let mut detail = use_signal(|| None::<PlaythroughDetailDto>);
    let mut error = use_signal(|| None::<String>);
    #[cfg(feature = "web")]
    let nav = navigator();

    // Bumped after entry writes so the parent's server-side updated_at is picked up
    let mut reload = use_signal(|| 0u32);

    // Refetch whenever the route id changes or a reload is requested
    #[cfg(feature = "web")]
    use_effect(use_reactive!(|id| {
        use crate::client::util::api::get_playthrough;

        let _ = reload();
        spawn(async move {
            match get_playthrough(id).await {
                Ok(found) => {
                    detail.set(Some(found));
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        });
    }));

    let on_entry_created = move |entry: EntryDto| {
        if let Some(detail) = detail.write().as_mut() {
            detail.entries.insert(0, entry);
        }
        reload += 1;
    };

    let on_entry_delete = move |entry_id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::util::api::delete_entry;

            match delete_entry(entry_id).await {
                Ok(()) => {
                    if let Some(detail) = detail.write().as_mut() {
                        detail.entries.retain(|e| e.id != entry_id);
                    }
                    reload += 1;
                }
                Err(err) => error.set(Some(err)),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = entry_id;
    };

    let on_playthrough_delete = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::{router::Route, util::api::delete_playthrough};

            match delete_playthrough(id).await {
                Ok(()) => {
                    nav.push(Route::Home {});
                }
                Err(err) => error.set(Some(err)),
            }
        });
    };

    let current = detail();

    rsx!(
        Page {
            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }
            if let Some(current) = current {
                Title { "{current.playthrough.title} | PkmnLog" }
                div {
                    class: "card shadow-sm bg-base-100",
                    div {
                        class: "card-body",
                        div { class: "flex items-center justify-between",
                            h1 { class: "card-title text-2xl", "{current.playthrough.title}" }
                            button {
                                class: "btn btn-outline btn-error btn-sm flex gap-2",
                                onclick: on_playthrough_delete,
                                Icon {
                                    width: 14,
                                    height: 14,
                                    icon: FaTrash
                                }
                                "Delete"
                            }
                        }
                        p { {current.playthrough.game.label()} }
                        p { class: "text-sm opacity-70",
                            "Started "
                            {format::date(&current.playthrough.start_date)}
                            " · Updated "
                            {format::timestamp(&current.playthrough.updated_at)}
                        }
                    }
                }
                EntryForm {
                    playthrough_id: id,
                    on_created: on_entry_created,
                }
                EntryList {
                    entries: current.entries.clone(),
                    on_delete: on_entry_delete,
                }
            } else if error().is_none() {
                div { class: "skeleton h-32 w-full" }
            }
        }
    )
}

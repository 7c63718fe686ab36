use dioxus::prelude::*;

use crate::{
    client::{router::Route, util::format},
    model::playthrough::PlaythroughDto,
};

#[component]
pub fn PlaythroughTable(playthroughs: Vec<PlaythroughDto>) -> Element {
    if playthroughs.is_empty() {
        return rsx!(
            p { class: "text-center opacity-70",
                "No playthroughs yet. Start one above!"
            }
        );
    }

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Title" }
                        th { "Game" }
                        th { "Started" }
                        th { "Last Updated" }
                    }
                }
                tbody {
                    {playthroughs.iter().map(|p| rsx! {
                        tr { key: "{p.id}",
                            td {
                                Link {
                                    to: Route::PlaythroughPage { id: p.id },
                                    class: "link link-hover font-semibold",
                                    "{p.title}"
                                }
                            }
                            td { {p.game.label()} }
                            td { {format::date(&p.start_date)} }
                            td { {format::timestamp(&p.updated_at)} }
                        }
                    })}
                }
            }
        }
    )
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaSortDown, FaSortUp};
use dioxus_free_icons::Icon;
use wordlist::model::{
    table::{SortColumn, SortOrder, TableState},
    wordlist::WordDto,
};

/// Table of one page of words with page-local sorting and selection
#[component]
pub fn WordTable(rows: Vec<WordDto>) -> Element {
    let mut state = use_signal(TableState::default);

    let sorted = state.read().sorted(&rows);
    let selected_count = state.read().selected_count();
    let all_selected = !rows.is_empty() && selected_count == rows.len();
    let page_rows = rows.clone();

    rsx!(
        div { class: "card shadow-sm w-full",
            div { class: "card-body",
                div { class: "flex items-center justify-between",
                    if selected_count > 0 {
                        p { class: "text-lg", "{selected_count} selected" }
                    } else {
                        h2 { class: "card-title", "Word List" }
                    }
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th {
                                    input {
                                        r#type: "checkbox",
                                        class: "checkbox",
                                        checked: all_selected,
                                        onchange: move |event| {
                                            state.write().select_all(&page_rows, event.checked())
                                        },
                                    }
                                }
                                for column in SortColumn::HEADERS {
                                    SortHeader {
                                        column,
                                        active: state.read().order_by == column,
                                        order: state.read().order,
                                        onsort: move |column| state.write().request_sort(column),
                                    }
                                }
                            }
                        }
                        tbody {
                            for row in sorted {
                                tr {
                                    key: "{row.id}",
                                    class: if state.read().is_selected(row.id) { "bg-base-200" },
                                    td {
                                        input {
                                            r#type: "checkbox",
                                            class: "checkbox",
                                            checked: state.read().is_selected(row.id),
                                            onchange: move |_| state.write().toggle(row.id),
                                        }
                                    }
                                    td { "{row.word}" }
                                    td { {row.word_type.clone().unwrap_or_default()} }
                                    td { class: "text-right", "{row.id}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn SortHeader(
    column: SortColumn,
    active: bool,
    order: SortOrder,
    onsort: EventHandler<SortColumn>,
) -> Element {
    let class = if column.is_numeric() { "text-right" } else { "" };

    rsx!(
        th { class: "{class}",
            button {
                class: "flex items-center gap-1",
                "aria-sort": if active { order.as_str() } else { "none" },
                onclick: move |_| onsort.call(column),
                {column.label()}
                if active {
                    if order == SortOrder::Asc {
                        Icon { width: 12, height: 12, icon: FaSortUp }
                    } else {
                        Icon { width: 12, height: 12, icon: FaSortDown }
                    }
                }
            }
        }
    )
}

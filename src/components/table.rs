use dioxus::prelude::*;

use crate::models::common::PageByNoResult;

/// Page-number footer for paginated lists.
#[component]
pub fn Pagination(page: PageByNoResult, on_page: EventHandler<u32>) -> Element {
    let current = page.current_page_no;
    let has_prev = current > 1;
    let has_next = !page.is_end;

    rsx! {
        div {
            class: "flex items-center justify-between pt-4",
            span {
                class: "text-sm text-gray-600",
                "Page {current} of {page.total_page} ({page.total_count} total)"
            }
            div {
                class: "flex gap-2",
                button {
                    class: if has_prev {
                        "px-3 py-1 text-sm border border-gray-300 rounded hover:bg-gray-100"
                    } else {
                        "px-3 py-1 text-sm border border-gray-200 rounded text-gray-400 cursor-not-allowed"
                    },
                    disabled: !has_prev,
                    onclick: move |_| on_page.call(current - 1),
                    "Previous"
                }
                button {
                    class: if has_next {
                        "px-3 py-1 text-sm border border-gray-300 rounded hover:bg-gray-100"
                    } else {
                        "px-3 py-1 text-sm border border-gray-200 rounded text-gray-400 cursor-not-allowed"
                    },
                    disabled: !has_next,
                    onclick: move |_| on_page.call(current + 1),
                    "Next"
                }
            }
        }
    }
}

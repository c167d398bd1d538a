use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::pagination::PageWindow;

/// PaginationControls - numbered page strip with prev/next, first/last
/// shortcuts, ellipsis collapsing and a page-size select.
///
/// Renders nothing when there is at most one page.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to [5, 10, 25, 50])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![5, 10, 25, 50]);

    let page_button = move |page: usize| {
        let is_active = move || current_page.get() == page;
        view! {
            <button
                class=move || {
                    if is_active() {
                        "page-link page-link--active"
                    } else {
                        "page-link"
                    }
                }
                on:click=move |_| on_page_change.run(page)
            >
                {page + 1}
            </button>
        }
        .into_any()
    };

    view! {
        {move || {
            let Some(window) = PageWindow::compute(current_page.get(), total_pages.get()) else {
                return view! { <></> }.into_any();
            };

            view! {
                <nav class="pagination-controls">
                    <span class="pagination-info">
                        {format!(
                            "Page {} sur {} ({} total)",
                            current_page.get() + 1,
                            total_pages.get(),
                            total_count.get()
                        )}
                    </span>

                    <button
                        class="page-link"
                        on:click=move |_| {
                            let page = current_page.get();
                            if page > 0 {
                                on_page_change.run(page - 1);
                            }
                        }
                        disabled=!window.prev_enabled
                        title="Page précédente"
                    >
                        {icon("chevron-left")}
                    </button>

                    {window.show_first.then(|| page_button(0))}
                    {window
                        .leading_ellipsis
                        .then(|| view! { <span class="page-link page-link--gap">"…"</span> })}

                    {window.pages.iter().copied().map(page_button).collect_view()}

                    {window
                        .trailing_ellipsis
                        .then(|| view! { <span class="page-link page-link--gap">"…"</span> })}
                    {window
                        .show_last
                        .then(|| page_button(total_pages.get() - 1))}

                    <button
                        class="page-link"
                        on:click=move |_| {
                            let page = current_page.get();
                            if page + 1 < total_pages.get() {
                                on_page_change.run(page + 1);
                            }
                        }
                        disabled=!window.next_enabled
                        title="Page suivante"
                    >
                        {icon("chevron-right")}
                    </button>

                    <select
                        class="page-size-select"
                        on:change=move |ev| {
                            let val = event_target_value(&ev).parse().unwrap_or(10);
                            on_page_size_change.run(val);
                        }
                        prop:value=move || page_size.get().to_string()
                    >
                        {page_size_opts
                            .iter()
                            .map(|&size| {
                                view! {
                                    <option
                                        value=size.to_string()
                                        selected=move || page_size.get() == size
                                    >
                                        {size.to_string()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </nav>
            }
            .into_any()
        }}
    }
}

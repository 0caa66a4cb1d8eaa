//! Summary history panel with refresh-on-upload and expandable entries.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard bumps `refresh` after every successful upload; each change
//! triggers exactly one re-fetch of the full list. A failed fetch is a hard
//! failure for that cycle and its message stays up until a later fetch
//! succeeds.

#[cfg(test)]
#[path = "summary_history_test.rs"]
mod summary_history_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::net::types::SummaryRecord;
use crate::util::format::{
    format_timestamp, format_word_count, summary_count_label, summary_preview,
};
use crate::util::key_points::condensed_key_points;

/// Toggle `id` in the expanded set; returns whether it is now expanded.
fn toggle_expanded(expanded: &mut HashSet<String>, id: &str) -> bool {
    if expanded.remove(id) {
        false
    } else {
        expanded.insert(id.to_owned());
        true
    }
}

/// History panel listing every summary the user has generated.
#[component]
pub fn SummaryHistory(refresh: ReadSignal<u32>) -> impl IntoView {
    let summaries = RwSignal::new(Vec::<SummaryRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let expanded = RwSignal::new(HashSet::<String>::new());

    // Initial fetch, plus one re-fetch per refresh bump.
    Effect::new(move || {
        let _ = refresh.get();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_summaries().await {
                Ok(records) => {
                    summaries.set(records);
                    error.set(String::new());
                }
                Err(e) => error.set(e),
            }
            loading.set(false);
        });
    });

    view! {
        <section class="card history-card">
            <header class="card__header">
                <h2 class="card__title">"Summary History"</h2>
                <p class="card__subtitle">{move || summary_count_label(summaries.get().len())}</p>
            </header>

            {move || {
                if loading.get() {
                    return view! {
                        <div class="history-card__loading">
                            <div class="spinner"></div>
                        </div>
                    }
                        .into_any();
                }
                if !error.get().is_empty() {
                    return view! {
                        <div class="alert alert--error">{error.get()}</div>
                    }
                        .into_any();
                }
                let records = summaries.get();
                if records.is_empty() {
                    return view! {
                        <div class="history-card__empty">
                            <p>"No summaries yet. Upload your first book to get started!"</p>
                        </div>
                    }
                        .into_any();
                }
                records
                    .into_iter()
                    .map(|record| view! { <HistoryEntry record expanded/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </section>
    }
}

/// One collapsible history row: metadata header, summary preview, and an
/// expandable body with the full text and condensed key points.
#[component]
fn HistoryEntry(record: SummaryRecord, expanded: RwSignal<HashSet<String>>) -> impl IntoView {
    let id = record.id.clone();
    let is_open = {
        let id = id.clone();
        move || expanded.get().contains(&id)
    };
    let on_toggle = {
        let id = id.clone();
        move |_| {
            expanded.update(|set| {
                toggle_expanded(set, &id);
            });
        }
    };

    let preview = summary_preview(&record.summary);
    let points = condensed_key_points(record.key_points.as_deref());
    let summary = record.summary.clone();
    let chevron_open = is_open.clone();

    view! {
        <article class="history-entry">
            <button class="history-entry__header" on:click=on_toggle>
                <span class="badge">{record.file_type.clone()}</span>
                <span class="history-entry__meta">
                    {format_timestamp(&record.created_at)} " · "
                    {format_word_count(record.word_count)} " words"
                </span>
                <span class="history-entry__chevron">
                    {move || if chevron_open() { "▲" } else { "▼" }}
                </span>
            </button>
            <p class="history-entry__preview">{preview}</p>

            <Show when=is_open>
                <div class="history-entry__body">
                    <h4 class="history-entry__heading">"Full Summary"</h4>
                    <p class="history-entry__summary">{summary.clone()}</p>

                    <h4 class="history-entry__heading">"Key Points"</h4>
                    <ul class="points">
                        {points
                            .iter()
                            .map(|point| view! { <li class="points__item">{point.clone()}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </Show>
        </article>
    }
}

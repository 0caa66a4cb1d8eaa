//! Current-summary card shown after a successful upload.

use leptos::prelude::*;

use crate::net::types::SummaryRecord;
use crate::util::format::{format_timestamp, format_word_count};
use crate::util::key_points::split_key_points;

/// Full rendering of one summary record: metadata row, summary text, and the
/// complete (uncapped) key-points list.
#[component]
pub fn SummaryDisplay(record: SummaryRecord) -> impl IntoView {
    let key_points = split_key_points(record.key_points.as_deref());

    view! {
        <section class="card summary-card">
            <header class="card__header summary-card__header">
                <h2 class="card__title">"Book Summary"</h2>
                <span class="badge">{record.file_type.clone()}</span>
            </header>
            <p class="summary-card__meta">
                <span>{format_timestamp(&record.created_at)}</span>
                <span>{format_word_count(record.word_count)} " words"</span>
            </p>

            <div class="summary-card__section">
                <h3 class="summary-card__heading">"Summary"</h3>
                <p class="summary-card__text">{record.summary.clone()}</p>
            </div>

            <div class="summary-card__section">
                <h3 class="summary-card__heading">"Key Points"</h3>
                <ul class="points">
                    {key_points
                        .into_iter()
                        .map(|point| view! { <li class="points__item">{point}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}

//! Dashboard page — the signed-in workspace.
//!
//! Holds the most recent summary and the history refresh counter; the upload
//! card's success callback updates both, so every successful upload is shown
//! immediately and triggers exactly one history re-fetch.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::file_upload::FileUpload;
use crate::components::navbar::Navbar;
use crate::components::summary_display::SummaryDisplay;
use crate::components::summary_history::SummaryHistory;
use crate::net::types::SummaryRecord;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Next value of the history refresh counter. The counter only needs to
/// change to trigger a re-fetch, so wrapping is fine.
fn next_refresh(counter: u32) -> u32 {
    counter.wrapping_add(1)
}

/// Workspace page. Redirects to `/login` once auth settles without a user;
/// shows a full-page spinner while the startup probe is still running.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let current_summary = RwSignal::new(None::<SummaryRecord>);
    let refresh = RwSignal::new(0u32);

    let on_summary = Callback::new(move |record: SummaryRecord| {
        current_summary.set(Some(record));
        refresh.update(|counter| *counter = next_refresh(*counter));
    });

    view! {
        {move || {
            if auth.get().loading {
                return view! {
                    <div class="page-loading">
                        <div class="spinner"></div>
                    </div>
                }
                    .into_any();
            }
            view! {
                <div class="dashboard-page">
                    <Navbar/>
                    <main class="dashboard-page__main">
                        <header class="dashboard-page__intro">
                            <h1>"Book Summarizer"</h1>
                            <p>
                                "Upload any book and get an AI-powered summary with key insights extracted."
                            </p>
                        </header>
                        <div class="dashboard-page__grid">
                            <div class="dashboard-page__work">
                                <FileUpload on_summary/>
                                {move || {
                                    current_summary
                                        .get()
                                        .map(|record| view! { <SummaryDisplay record/> })
                                }}
                            </div>
                            <div class="dashboard-page__side">
                                <SummaryHistory refresh=refresh.read_only()/>
                            </div>
                        </div>
                    </main>
                </div>
            }
                .into_any()
        }}
    }
}

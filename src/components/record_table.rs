//! Record Table Component
//!
//! Renders the records table (or the empty-state placeholder) into the mount.

use leptos::prelude::*;

use crate::i18n::Labels;
use crate::table::TableState;

/// Whole-table view; every state change re-renders all rows
#[component]
pub fn RecordTable(state: ArcRwSignal<TableState>, labels: &'static Labels) -> impl IntoView {
    view! {
        {move || match state.get() {
            TableState::Empty => view! {
                <div class="empty">{labels.no_data}</div>
            }.into_any(),
            TableState::Rows(rows) => view! {
                <table class="table">
                    <thead>
                        <tr>
                            {labels
                                .headers
                                .iter()
                                .map(|header| view! { <th>{*header}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().map(|cells| view! {
                            <tr>
                                {cells
                                    .into_iter()
                                    .map(|cell| view! { <td>{cell}</td> })
                                    .collect_view()}
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            }.into_any(),
        }}
    }
}

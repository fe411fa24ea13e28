// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Generate page — book measurements and the word to fold.

use dioxus::prelude::*;

use bookfold_core::human_errors::humanize_error;
use bookfold_core::types::FoldMethod;

use crate::Route;
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Generate() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut error_msg = use_signal(|| Option::<(String, String)>::None);

    let form = state.read().form.clone();

    rsx! {
        div { style: "max-width: 480px; margin: 0 auto;",
            h1 { "Book Folding" }
            p { style: "color: #666;", "Turn a word into page-by-page folding instructions." }

            FieldRow {
                label: "Page height (mm)",
                value: form.height_mm.clone(),
                on_change: move |v: String| { state.write().form.height_mm = v; },
            }
            FieldRow {
                label: "Page width (mm)",
                value: form.width_mm.clone(),
                on_change: move |v: String| { state.write().form.width_mm = v; },
            }
            FieldRow {
                label: "Number of pages",
                value: form.page_count.clone(),
                on_change: move |v: String| { state.write().form.page_count = v; },
            }
            FieldRow {
                label: "Word",
                value: form.word.clone(),
                on_change: move |v: String| { state.write().form.word = v; },
            }

            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0;",
                span { "Method" }
                select {
                    style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                    value: form.method.key(),
                    onchange: move |evt| {
                        if let Some(method) = FoldMethod::from_key(&evt.value()) {
                            state.write().form.method = method;
                        }
                    },
                    option { value: FoldMethod::SingleBand.key(), {FoldMethod::SingleBand.label()} }
                    option { value: FoldMethod::MultiBand.key(), {FoldMethod::MultiBand.label()} }
                }
            }

            button {
                style: "width: 100%; padding: 14px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 12px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let request = state.read().form.to_request();
                        let outcome = request.and_then(|request| {
                            let mut guard = state.write();
                            svc.generate(&mut guard.session, &request)
                        });
                        match outcome {
                            Ok(pages) => {
                                error_msg.set(None);
                                state.write().status_message = Some(format!("Generated {pages} pages"));
                                navigator().push(Route::Instructions {});
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "generation failed");
                                let human = humanize_error(&e);
                                error_msg.set(Some((human.message, human.suggestion)));
                            }
                        }
                    }
                },
                "Generate"
            }

            if let Some((ref message, ref suggestion)) = *error_msg.read() {
                div { style: "margin-top: 12px; padding: 12px; border-radius: 8px; background: #fff3f3; border: 1px solid #f5c2c2;",
                    p { style: "margin: 0; font-weight: bold;", "{message}" }
                    p { style: "margin: 4px 0 0; color: #666;", "{suggestion}" }
                }
            }
        }
    }
}

#[component]
fn FieldRow(label: &'static str, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            input {
                style: "width: 180px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                value: "{value}",
                oninput: move |evt| on_change.call(evt.value()),
            }
        }
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page — persistent app configuration.

use dioxus::prelude::*;

use bookfold_core::types::{FoldMethod, PaperSize};

use crate::services::app_services::AppServices;
use crate::state::{AppState, GenerateForm};

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut save_msg = use_signal(|| Option::<String>::None);

    let config = state.read().config.clone();
    let about = about_line();

    rsx! {
        div {
            h1 { "Settings" }

            section { style: "margin: 16px 0;",
                h3 { "Book defaults" }
                NumberRow {
                    label: "Page height (mm)",
                    value: config.default_height_mm.to_string(),
                    on_change: move |v: String| {
                        if let Some(mm) = positive_f64(&v) {
                            state.write().config.default_height_mm = mm;
                        }
                    },
                }
                NumberRow {
                    label: "Page width (mm)",
                    value: config.default_width_mm.to_string(),
                    on_change: move |v: String| {
                        if let Some(mm) = positive_f64(&v) {
                            state.write().config.default_width_mm = mm;
                        }
                    },
                }
                NumberRow {
                    label: "Number of pages",
                    value: config.default_page_count.to_string(),
                    on_change: move |v: String| {
                        if let Ok(n) = v.trim().parse::<usize>() {
                            if n > 0 {
                                state.write().config.default_page_count = n;
                            }
                        }
                    },
                }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Default method" }
                    select {
                        style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: config.default_method.key(),
                        onchange: move |evt| {
                            if let Some(method) = FoldMethod::from_key(&evt.value()) {
                                state.write().config.default_method = method;
                            }
                        },
                        option { value: FoldMethod::SingleBand.key(), {FoldMethod::SingleBand.label()} }
                        option { value: FoldMethod::MultiBand.key(), {FoldMethod::MultiBand.label()} }
                    }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Lettering" }
                NumberRow {
                    label: "Font size (px)",
                    value: config.raster.font_size_px.to_string(),
                    on_change: move |v: String| {
                        if let Ok(px) = v.trim().parse::<f32>() {
                            if px.is_finite() && px > 0.0 {
                                state.write().config.raster.font_size_px = px;
                            }
                        }
                    },
                }
                NumberRow {
                    label: "Ink threshold (0-255)",
                    value: config.raster.ink_threshold.to_string(),
                    on_change: move |v: String| {
                        if let Ok(t) = v.trim().parse::<u8>() {
                            state.write().config.raster.ink_threshold = t;
                        }
                    },
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "PDF export" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Paper size" }
                    select {
                        style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: paper_size_label(&config.export.paper_size),
                        onchange: move |evt| {
                            if let Some(ps) = paper_size_from_label(&evt.value()) {
                                state.write().config.export.paper_size = ps;
                            }
                        },
                        option { value: "A4", "A4" }
                        option { value: "A5", "A5" }
                        option { value: "Letter", "Letter" }
                        option { value: "Legal", "Legal" }
                    }
                }
            }

            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = state.read().config.clone();
                        match svc.save_config(&config) {
                            Ok(()) => {
                                let word = state.read().form.word.clone();
                                let mut form = GenerateForm::from_config(&config);
                                form.word = word;
                                state.write().form = form;
                                save_msg.set(Some("Settings saved.".into()));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                save_msg.set(Some(format!("Save failed: {e}")));
                            }
                        }
                    }
                },
                "Save Settings"
            }
            if let Some(ref msg) = *save_msg.read() {
                p { style: "color: #34c759; font-size: 14px; text-align: center; margin-top: 8px;",
                    "{msg}"
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: #666; font-size: 14px;",
                    "{about}"
                    br {}
                    "Book folding pattern generator"
                    br {}
                    "PMPL-1.0-or-later"
                }
            }
        }
    }
}

#[component]
fn NumberRow(label: &'static str, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            input {
                r#type: "number",
                style: "width: 100px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                value: "{value}",
                onchange: move |evt| on_change.call(evt.value()),
            }
        }
    }
}

fn about_line() -> String {
    format!("Bookfold v{}", env!("CARGO_PKG_VERSION"))
}

fn positive_f64(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn paper_size_label(ps: &PaperSize) -> &'static str {
    match ps {
        PaperSize::A4 => "A4",
        PaperSize::A5 => "A5",
        PaperSize::Letter => "Letter",
        PaperSize::Legal => "Legal",
        PaperSize::Custom { .. } => "Custom",
    }
}

fn paper_size_from_label(label: &str) -> Option<PaperSize> {
    match label {
        "A4" => Some(PaperSize::A4),
        "A5" => Some(PaperSize::A5),
        "Letter" => Some(PaperSize::Letter),
        "Legal" => Some(PaperSize::Legal),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_f64_rejects_junk() {
        assert_eq!(positive_f64(" 210.5 "), Some(210.5));
        assert_eq!(positive_f64("0"), None);
        assert_eq!(positive_f64("-4"), None);
        assert_eq!(positive_f64("NaN"), None);
        assert_eq!(positive_f64("tall"), None);
    }

    #[test]
    fn about_line_reports_package_version() {
        assert_eq!(about_line(), format!("Bookfold v{}", env!("CARGO_PKG_VERSION")));
        assert_ne!(env!("CARGO_PKG_VERSION"), "0.1.0");
    }

    #[test]
    fn paper_labels_round_trip() {
        for ps in [PaperSize::A4, PaperSize::A5, PaperSize::Letter, PaperSize::Legal] {
            assert_eq!(paper_size_from_label(paper_size_label(&ps)), Some(ps));
        }
    }
}

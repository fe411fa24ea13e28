// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Instructions page — one page of the fold plan at a time, with Prev/Next
// navigation and PDF export.

use dioxus::prelude::*;

use bookfold_core::human_errors::humanize_error;
use bookfold_document::diagram::{PageDiagram, render_page};

use crate::services::app_services::AppServices;
use crate::state::AppState;

/// On-screen size of the page diagram's longer side, in CSS pixels.
const DIAGRAM_PX: f64 = 360.0;

/// One SVG `<line>` ready for rsx.
#[derive(Debug, Clone, PartialEq)]
struct SvgLine {
    x1: String,
    y1: String,
    x2: String,
    y2: String,
    colour: String,
    dash: &'static str,
}

fn svg_lines(diagram: &PageDiagram) -> Vec<SvgLine> {
    diagram
        .segments
        .iter()
        .map(|segment| {
            let (r, g, b) = segment.stroke.rgb();
            SvgLine {
                x1: format!("{:.2}", segment.from.0),
                y1: format!("{:.2}", segment.from.1),
                x2: format!("{:.2}", segment.to.0),
                y2: format!("{:.2}", segment.to.1),
                colour: format!("rgb({r},{g},{b})"),
                dash: if segment.stroke.is_dashed() { "3 2" } else { "none" },
            }
        })
        .collect()
}

#[component]
pub fn Instructions() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut status_msg = use_signal(|| Option::<String>::None);

    let current = {
        let guard = state.read();
        guard.session.plan().ok().and_then(|plan| {
            let view = guard.session.current().ok()?;
            let diagram = render_page(plan.geometry(), view.index, view.entry);
            let label = format!("Page {} of {}", view.number(), view.total);
            Some((diagram, label, view.is_first(), view.is_last()))
        })
    };
    let generated_at = state
        .read()
        .session
        .generated_at()
        .map(|t| t.format("%H:%M:%S").to_string());

    let Some((diagram, page_label, is_first, is_last)) = current else {
        return rsx! {
            div {
                h1 { "Instructions" }
                p { style: "color: #888;", "Generate instructions first!" }
            }
        };
    };

    let scale = DIAGRAM_PX / diagram.width_mm.max(diagram.height_mm);
    let svg_w = format!("{:.0}", diagram.width_mm * scale + 10.0);
    let svg_h = format!("{:.0}", diagram.height_mm * scale + 10.0);
    let view_box = format!(
        "-2 -2 {:.2} {:.2}",
        diagram.width_mm + 4.0,
        diagram.height_mm + 4.0
    );
    let lines = svg_lines(&diagram);

    rsx! {
        div { style: "display: flex; flex-direction: column; align-items: center;",
            h1 { "Instructions" }
            if let Some(ref at) = generated_at {
                p { style: "color: #888; font-size: 13px; margin: 0;", "Generated at {at}" }
            }

            svg {
                width: "{svg_w}",
                height: "{svg_h}",
                view_box: "{view_box}",
                style: "margin: 16px 0; background: white;",
                for (i, seg) in lines.into_iter().enumerate() {
                    line {
                        key: "{i}",
                        x1: "{seg.x1}",
                        y1: "{seg.y1}",
                        x2: "{seg.x2}",
                        y2: "{seg.y2}",
                        stroke: "{seg.colour}",
                        stroke_width: "0.8",
                        stroke_dasharray: "{seg.dash}",
                    }
                }
            }

            p { style: "font-size: 16px; text-align: center; max-width: 520px;", "{diagram.instruction}" }

            div { style: "display: flex; gap: 12px; align-items: center; margin: 12px 0;",
                button {
                    style: "padding: 10px 20px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                    disabled: is_first,
                    onclick: move |_| {
                        if let Err(e) = state.write().session.prev_page().map(|_| ()) {
                            status_msg.set(Some(humanize_error(&e).message));
                        }
                    },
                    "Prev"
                }
                span { "{page_label}" }
                button {
                    style: "padding: 10px 20px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                    disabled: is_last,
                    onclick: move |_| {
                        if let Err(e) = state.write().session.next_page().map(|_| ()) {
                            status_msg.set(Some(humanize_error(&e).message));
                        }
                    },
                    "Next"
                }
            }

            button {
                style: "padding: 12px 24px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let snapshot = state.read().session.snapshot();
                        let plan = match snapshot {
                            Ok(plan) => plan,
                            Err(e) => {
                                status_msg.set(Some(humanize_error(&e).message));
                                return;
                            }
                        };

                        #[cfg(not(any(target_os = "ios", target_os = "android")))]
                        {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("PDF", &["pdf"])
                                .set_file_name("folding_instructions.pdf")
                                .save_file()
                            {
                                let svc = svc.clone();
                                status_msg.set(Some("Exporting...".into()));
                                spawn(async move {
                                    match svc.export_pdf(plan, path.clone()).await {
                                        Ok(()) => {
                                            tracing::info!(path = %path.display(), "instructions exported");
                                            status_msg.set(Some(format!("Saved {}", path.display())));
                                        }
                                        Err(e) => {
                                            let human = humanize_error(&e);
                                            status_msg.set(Some(format!("{} {}", human.message, human.suggestion)));
                                        }
                                    }
                                });
                            }
                        }
                        #[cfg(any(target_os = "ios", target_os = "android"))]
                        {
                            let _ = plan;
                            status_msg.set(Some("PDF export is not available on mobile yet.".into()));
                        }
                    }
                },
                "Download PDF"
            }

            if let Some(ref msg) = *status_msg.read() {
                p { style: "margin-top: 8px; color: #666; font-size: 14px; text-align: center;",
                    "{msg}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bookfold_core::types::{FoldPoint, PageFolds, PageGeometry};

    use super::*;

    #[test]
    fn svg_lines_mirror_diagram_segments() {
        let geometry = PageGeometry::new(200.0, 130.0, 1).unwrap();
        let entry = Some(PageFolds::Single(FoldPoint {
            top_mm: 20.0,
            bottom_mm: 180.0,
        }));
        let lines = svg_lines(&render_page(&geometry, 0, &entry));
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4].x2, "130.00");
        assert_eq!(lines[4].y2, "20.00");
        assert_eq!(lines[4].colour, "rgb(220,38,38)");
        assert!(lines.iter().all(|l| l.dash == "none"));
    }
}

use yew::prelude::*;

use super::scroll_steps::scroll_markers;
use crate::content::METRICS;
use crate::hooks::use_viewport_selector;

/// Sticky metric that swaps as the reader scrolls past each hidden marker.
#[function_component(MetricCarousel)]
pub fn metric_carousel() -> Html {
    let (markers, current) = use_viewport_selector(METRICS.len());
    let text = METRICS
        .get(current)
        .or(METRICS.first())
        .map(|m| m.text)
        .unwrap_or_default();

    html! {
        <section class="metrics">
            <style>
                {r#"
                    .metrics {
                        position: relative;
                        background: #000;
                        color: #fff;
                        padding: 8rem 0;
                    }
                    .metrics-pitch {
                        flex: 1;
                    }
                    .metrics-pitch h2 {
                        font-size: 3rem;
                        font-weight: 800;
                        margin-bottom: 2.5rem;
                    }
                    .pink-button {
                        display: block;
                        background: #f472b6;
                        color: #000;
                        font-weight: 600;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .ghost-button {
                        display: block;
                        border: 1px solid #4b5563;
                        background: transparent;
                        color: #fff;
                        padding: 0.75rem 2rem;
                        border-radius: 0.75rem;
                    }
                    .metric-text {
                        flex: 1;
                        font-family: Georgia, serif;
                        font-size: clamp(3rem, 7vw, 6rem);
                        font-weight: 800;
                        line-height: 0.9;
                        word-break: break-word;
                        -webkit-text-stroke: 1px white;
                        transition: all 0.7s;
                    }
                "#}
            </style>
            <div class="sticky-stage">
                <div class="metrics-pitch">
                    <h2>{"You will work with Basis to:"}</h2>
                    <button class="pink-button">{"BOOK A FREE STRATEGY SESSION"}</button>
                    <button class="ghost-button">{"EXPLORE CASE STUDIES"}</button>
                </div>
                <p key={current} class="metric-text">{text}</p>
            </div>
            { scroll_markers(&markers) }
        </section>
    }
}

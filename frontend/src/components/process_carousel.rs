use yew::prelude::*;

use super::scroll_steps::scroll_markers;
use crate::content::PROCESS_STEPS;
use crate::hooks::use_viewport_selector;

#[function_component(ProcessCarousel)]
pub fn process_carousel() -> Html {
    let (markers, current) = use_viewport_selector(PROCESS_STEPS.len());
    let Some(step) = PROCESS_STEPS.get(current).or(PROCESS_STEPS.first()) else {
        return html! {};
    };

    html! {
        <section class="process">
            <style>
                {r#"
                    .process {
                        position: relative;
                        background: #000;
                        color: #fff;
                        padding: 8rem 0;
                    }
                    .process-heading {
                        position: sticky;
                        top: 5rem;
                        z-index: 20;
                        text-align: center;
                        font-size: 3rem;
                        font-weight: 800;
                    }
                    .process-heading mark {
                        background: #f472b6;
                        color: #000;
                        padding: 0.1rem 0.5rem;
                        border-radius: 0.375rem;
                    }
                    .process-step {
                        flex: 1;
                        transition: opacity 0.5s;
                    }
                    .process-title {
                        font-size: 1.875rem;
                        font-weight: 600;
                    }
                    .process-number {
                        flex: 1;
                        text-align: center;
                        font-family: 'Arial Black', sans-serif;
                        font-size: 200px;
                        font-weight: 800;
                        -webkit-text-stroke: 1px white;
                        transition: transform 0.5s;
                    }
                    .process-description {
                        color: #9ca3af;
                        text-align: right;
                    }
                "#}
            </style>
            <h2 class="process-heading">
                {"How we turn startup "}<mark>{"goals into results"}</mark>
            </h2>
            <div class="sticky-stage">
                <p key={format!("title-{}", current)} class="process-step process-title">{step.title}</p>
                <span key={format!("num-{}", current)} class="process-number">{(current + 1).to_string()}</span>
                <p key={format!("desc-{}", current)} class="process-step process-description">{step.description}</p>
            </div>
            { scroll_markers(&markers) }
        </section>
    }
}

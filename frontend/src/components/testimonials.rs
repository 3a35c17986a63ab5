use yew::prelude::*;

use crate::config;
use crate::content::TESTIMONIALS;
use crate::hooks::use_timed_rotator;
use crate::motion::testimonial_shift_percent;

#[function_component(TestimonialsCarousel)]
pub fn testimonials_carousel() -> Html {
    let current = use_timed_rotator(TESTIMONIALS.len(), config::ROTATION_PERIOD_MS);
    let shift = testimonial_shift_percent(current, config::TESTIMONIALS_VISIBLE);

    html! {
        <section class="testimonials">
            <style>
                {r#"
                    .testimonials {
                        background: #000;
                        color: #fff;
                        padding: 6rem 2rem;
                        overflow: hidden;
                    }
                    .testimonials-kicker {
                        text-align: center;
                        font-size: 0.875rem;
                        color: #9ca3af;
                        margin-bottom: 4rem;
                    }
                    .testimonial-track {
                        display: flex;
                        transition: transform 0.7s ease-in-out;
                    }
                    .testimonial-card {
                        flex-shrink: 0;
                        width: 33.333%;
                        padding: 1rem;
                    }
                    @media (max-width: 768px) {
                        .testimonial-card {
                            width: 100%;
                        }
                    }
                    .testimonial-body {
                        background: #111827;
                        border-radius: 1rem;
                        padding: 2rem;
                        height: 100%;
                    }
                    .quote-mark {
                        font-size: 2.25rem;
                        color: #f472b6;
                        font-family: serif;
                    }
                    .testimonial-author {
                        font-weight: 600;
                    }
                    .testimonial-role {
                        font-size: 0.75rem;
                        color: #9ca3af;
                    }
                "#}
            </style>
            <p class="testimonials-kicker">{"What they say about us"}</p>
            <div class="testimonial-track" style={format!("transform: translateX(-{}%);", shift)}>
                { for TESTIMONIALS.iter().enumerate().map(|(idx, t)| html! {
                    <div key={idx} class="testimonial-card">
                        <div class="testimonial-body">
                            <span class="quote-mark">{"\""}</span>
                            <p>{t.quote}</p>
                            <p class="testimonial-author">{t.name()}</p>
                            <p class="testimonial-role">{t.role()}</p>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::components::{
    footer::Footer, hero::ParallaxHero, logo_marquee::LogoMarquee,
    metric_carousel::MetricCarousel, navbar::Navbar, process_carousel::ProcessCarousel,
    testimonials::TestimonialsCarousel,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #000;
                        font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
                        -webkit-font-smoothing: antialiased;
                    }
                "#}
            </style>
            <Navbar />
            <main>
                <ParallaxHero />
                <MetricCarousel />
                <LogoMarquee />
                <ProcessCarousel />
                <TestimonialsCarousel />
                <Footer />
            </main>
        </div>
    }
}

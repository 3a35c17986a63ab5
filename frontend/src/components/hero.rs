use yew::prelude::*;

use crate::config;
use crate::content::HERO_IMAGES;
use crate::hooks::use_parallax;

#[function_component(ParallaxHero)]
pub fn parallax_hero() -> Html {
    let container = use_node_ref();
    let offset = use_parallax(container.clone(), config::PARALLAX_DAMPING);

    html! {
        <section ref={container} class="hero">
            <style>
                {r#"
                    .hero {
                        height: 100vh;
                        position: relative;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #000;
                        color: #fff;
                    }
                    .hero-card {
                        position: absolute;
                        width: 200px;
                        height: 200px;
                        border-radius: 0.75rem;
                        object-fit: cover;
                        transition: transform 50ms;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                    }
                    .hero-content h1 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 800;
                        letter-spacing: -0.05em;
                    }
                    .accent {
                        color: #f472b6;
                    }
                    .hero-kicker {
                        font-size: 0.875rem;
                        color: #9ca3af;
                    }
                    .hero-cta {
                        border: 1px solid #fff;
                        background: transparent;
                        color: #fff;
                        padding: 0.75rem 2rem;
                        border-radius: 0.75rem;
                        letter-spacing: 0.1em;
                    }
                    .hero-cta:hover {
                        background: #fff;
                        color: #000;
                    }
                "#}
            </style>
            { for HERO_IMAGES.iter().map(|img| {
                let (dx, dy) = offset.translate(img.depth);
                let style = format!(
                    "top: {}%; left: {}%; transform: translate(-50%, -50%) rotate({}deg) translate3d({}px, {}px, 0);",
                    img.y, img.x, img.rotate, dx, dy
                );
                html! {
                    <img key={img.text} class="hero-card" src={img.src()} alt={img.text} style={style} />
                }
            }) }
            <div class="hero-content">
                <p class="hero-kicker">{"Creative & Technology Studio for AI age"}</p>
                <h1>
                    {"Turn your vision into"}<br />
                    {"a remarkable "}<span class="accent">{"brand"}</span>{","}<br />
                    <span class="accent">{"website"}</span>{" or "}<span class="accent">{"ai product"}</span>
                </h1>
                <p class="hero-kicker">{"A decade of proven results for startups scaling from Series A to unicorn"}</p>
                <button class="hero-cta">{"START HERE"}</button>
            </div>
        </section>
    }
}

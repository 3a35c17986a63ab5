use yew::prelude::*;

use crate::config;
use crate::content::{CONTACT_EMAILS, FOOTER_NAVIGATION, FOOTER_SOCIAL};
use crate::hooks::use_city_clocks;
use crate::motion::{CityClock, CITY_CLOCKS};

fn text_column(title: &str, items: &[&'static str]) -> Html {
    html! {
        <div>
            <h4 class="footer-heading">{title.to_string()}</h4>
            <ul class="footer-links">
                { for items.iter().map(|item| html! {
                    <li key={*item}><p>{*item}</p></li>
                }) }
            </ul>
        </div>
    }
}

fn clock_face(clock: &CityClock) -> Html {
    html! {
        <div class="clock-face">
            <div
                class="clock-hand hour"
                style={format!("transform: {}", CityClock::hand_transform(clock.hour_hand_deg))}
            ></div>
            <div
                class="clock-hand minute"
                style={format!("transform: {}", CityClock::hand_transform(clock.minute_hand_deg))}
            ></div>
        </div>
    }
}

fn link_column(title: &str, items: &[&'static str]) -> Html {
    html! {
        <div>
            <h4 class="footer-heading">{title.to_string()}</h4>
            <ul class="footer-links">
                { for items.iter().map(|item| html! {
                    <li key={*item}><a href="#">{*item}</a></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let readings = use_city_clocks(config::CLOCK_REFRESH_MS);

    html! {
        <footer class="footer">
            <style>
                {r#"
                    .footer {
                        background: #000;
                        color: #fff;
                        padding: 6rem 2rem 3rem;
                    }
                    .footer-wordmark {
                        font-family: 'Arial Black', sans-serif;
                        font-size: clamp(120px, 20vw, 320px);
                        font-weight: 900;
                        line-height: 1;
                        letter-spacing: -0.05em;
                        margin-bottom: 5rem;
                    }
                    .clocks {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 4rem;
                        margin-bottom: 6rem;
                    }
                    .clock {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .clock-face {
                        position: relative;
                        width: 3.5rem;
                        height: 3.5rem;
                        border: 2px solid #fff;
                        border-radius: 50%;
                    }
                    .clock-hand {
                        position: absolute;
                        bottom: 50%;
                        left: 50%;
                        width: 2px;
                        background: #fff;
                        transform-origin: 50% 100%;
                    }
                    .clock-hand.hour {
                        height: 1.25rem;
                    }
                    .clock-hand.minute {
                        height: 1.5rem;
                    }
                    .footer-links p {
                        margin: 0;
                    }
                    .clock-city {
                        font-size: 1.25rem;
                    }
                    .clock-time {
                        font-size: 0.875rem;
                        color: #9ca3af;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 3rem;
                        border-top: 1px solid #1f2937;
                        padding-top: 3rem;
                    }
                    .footer-heading {
                        color: #ec4899;
                        font-size: 0.875rem;
                        margin-bottom: 1rem;
                    }
                    .footer-links {
                        list-style: none;
                        padding: 0;
                    }
                    .footer-links a {
                        color: #fff;
                        text-decoration: none;
                    }
                    .footer-links a:hover {
                        color: #f472b6;
                    }
                    .copyright {
                        font-size: 0.75rem;
                        color: #4b5563;
                        margin-top: 2rem;
                    }
                "#}
            </style>
            <h2 class="footer-wordmark">{"BASIS"}</h2>
            <div class="clocks">
                { for CITY_CLOCKS.iter().zip(readings.iter()).map(|(clock, time)| html! {
                    <div key={clock.city} class="clock">
                        { clock_face(clock) }
                        <div>
                            <p class="clock-city">{clock.city}</p>
                            <p class="clock-time">{format!("{} local time", time)}</p>
                        </div>
                    </div>
                }) }
            </div>
            <div class="footer-grid">
                { text_column("Email Us", CONTACT_EMAILS) }
                { link_column("Navigation", FOOTER_NAVIGATION) }
                { link_column("Social", FOOTER_SOCIAL) }
            </div>
            <p class="copyright">{"© 2025. All rights reserved."}</p>
        </footer>
    }
}

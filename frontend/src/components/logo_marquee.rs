use yew::prelude::*;

use crate::content::LOGOS;

#[function_component(LogoMarquee)]
pub fn logo_marquee() -> Html {
    html! {
        <section class="marquee">
            <style>
                {r#"
                    .marquee {
                        background: #000;
                        color: #fff;
                        padding: 4rem 0;
                        overflow: hidden;
                        white-space: nowrap;
                    }
                    .marquee-caption {
                        text-align: center;
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #9ca3af;
                        margin-bottom: 2.5rem;
                    }
                    @keyframes marquee {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                    .marquee-content {
                        display: inline-block;
                        animation: marquee 30s linear infinite;
                    }
                    .marquee-content:hover {
                        animation-play-state: paused;
                    }
                    .marquee-logo {
                        display: inline-block;
                        padding: 0 2rem;
                        font-size: 1.5rem;
                        font-weight: bold;
                        color: #4b5563;
                    }
                "#}
            </style>
            <p class="marquee-caption">
                {"Seen Website: "}<span style="color: #fff;">{"8M+ views and counting"}</span>
            </p>
            <div class="marquee-content">
                { for LOGOS.iter().enumerate().map(|(idx, name)| html! {
                    <span key={idx} class="marquee-logo">{*name}</span>
                }) }
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::config;
use crate::content::NAV_LINKS;
use crate::hooks::use_expandable_panel;

// The full-width header only positions the pill; hover is tracked on the pill
// alone and the strip around it lets clicks through.
const NAV_STYLE: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 100;
        display: flex;
        justify-content: center;
        padding-top: 2rem;
        pointer-events: none;
    }
    .nav-glass {
        pointer-events: auto;
        border-radius: 1rem;
        background: rgba(60, 60, 60, 0.4);
        backdrop-filter: blur(20px);
        -webkit-backdrop-filter: blur(20px);
        border: 1px solid rgba(255, 255, 255, 0.1);
        padding: 0.75rem 1rem;
        transition: all 0.5s ease-out;
        overflow: hidden;
    }
    .nav-glass.open {
        width: 400px;
        padding: 1.5rem 2rem;
    }
    .nav-brand {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.4rem;
    }
    .nav-wordmark {
        color: #fff;
        font-weight: bold;
        font-size: 1.25rem;
        letter-spacing: 0.15em;
        margin-right: 0.4rem;
    }
    .nav-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
        background: #9ca3af;
    }
    .nav-view.current {
        opacity: 1;
        transition: opacity 0.5s;
    }
    .nav-view.inert {
        opacity: 0;
        height: 0;
        pointer-events: none;
    }
    .nav-links {
        display: flex;
        flex-direction: column;
        margin-top: 1.5rem;
        padding-top: 1rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }
    .nav-link {
        display: flex;
        justify-content: space-between;
        padding: 0.6rem 0.75rem;
        color: #e5e7eb;
        text-decoration: none;
    }
    .nav-link:hover {
        color: #fff;
    }
    .nav-num {
        font-size: 0.75rem;
        color: #6b7280;
    }
"#;

fn brand() -> Html {
    html! {
        <div class="nav-brand">
            <span class="nav-wordmark">{"BASIS"}</span>
            <span class="nav-dot"></span>
            <span class="nav-dot"></span>
        </div>
    }
}

/// Glass pill that opens into the full menu while hovered.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let (state, on_enter, on_leave) = use_expandable_panel(config::PANEL_CLOSE_DELAY_MS);
    let (collapsed_class, expanded_class) = state.visibility_classes();

    html! {
        <header class="top-nav">
            <style>{ NAV_STYLE }</style>
            <div
                class={classes!("nav-glass", state.is_expanded().then(|| "open"))}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                <div class={classes!("nav-view", collapsed_class)}>
                    { brand() }
                </div>
                <div class={classes!("nav-view", expanded_class)}>
                    { brand() }
                    <nav class="nav-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.name} href={link.anchor()} class="nav-link">
                                <span>{link.name}</span>
                                <span class="nav-num">{link.num}</span>
                            </a>
                        }) }
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::NAV_STYLE;
    use crate::components::css_rule;

    #[test]
    fn only_the_pill_takes_the_pointer() {
        let header = css_rule(NAV_STYLE, ".top-nav").unwrap();
        assert!(header.contains("pointer-events: none"));
        let pill = css_rule(NAV_STYLE, ".nav-glass").unwrap();
        assert!(pill.contains("pointer-events: auto"));
    }
}

use std::rc::Rc;

use yew::prelude::*;

// Shared by every selector-driven section: each marker spans a full viewport so
// exactly one crosses the central band at a time.
const SCROLL_STAGE_STYLE: &str = r#"
    .sticky-stage {
        position: sticky;
        top: 0;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 3rem;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
    }
    .scroll-marker {
        height: 100vh;
        width: 100%;
    }
"#;

/// Invisible full-height markers, one per step, tagged with their index.
/// Carries its own stage and marker rules so a section works on its own.
pub fn scroll_markers(markers: &Rc<Vec<NodeRef>>) -> Html {
    html! {
        <>
            <style>{ SCROLL_STAGE_STYLE }</style>
            { for markers.iter().enumerate().map(|(idx, marker)| html! {
                <div key={idx} ref={marker.clone()} data-id={idx.to_string()} class="scroll-marker"></div>
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::SCROLL_STAGE_STYLE;
    use crate::components::css_rule;

    #[test]
    fn markers_span_the_viewport() {
        let marker = css_rule(SCROLL_STAGE_STYLE, ".scroll-marker").unwrap();
        assert!(marker.contains("height: 100vh"));
        let stage = css_rule(SCROLL_STAGE_STYLE, ".sticky-stage").unwrap();
        assert!(stage.contains("position: sticky"));
    }

    #[test]
    fn rule_lookup_matches_whole_selectors() {
        assert!(css_rule(SCROLL_STAGE_STYLE, ".scroll").is_none());
        assert!(css_rule("a { x } .b { y }", ".b").unwrap().contains('y'));
    }
}

pub mod footer;
pub mod hero;
pub mod logo_marquee;
pub mod metric_carousel;
pub mod navbar;
pub mod process_carousel;
mod scroll_steps;
pub mod testimonials;

/// Body of the first rule in `style` whose selector is exactly `selector`.
#[cfg(test)]
pub(crate) fn css_rule<'a>(style: &'a str, selector: &str) -> Option<&'a str> {
    let mut rest = style;
    while let Some(open) = rest.find('{') {
        let close = open + rest[open..].find('}')?;
        if rest[..open].trim() == selector {
            return Some(&rest[open + 1..close]);
        }
        rest = &rest[close + 1..];
    }
    None
}

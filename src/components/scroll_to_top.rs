use yew::prelude::*;

use crate::dom;

const BASE_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; width: 56px; height: 56px; \
    border-radius: 50%; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); \
    color: white; border: none; font-size: 24px; cursor: pointer; z-index: 999; \
    transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);";

fn button_style(visible: bool, hovered: bool) -> String {
    let (opacity, visibility) = if visible { ("1", "visible") } else { ("0", "hidden") };
    let (transform, shadow) = if hovered {
        ("translateY(-8px) scale(1.05)", "0 12px 30px rgba(102, 126, 234, 0.6)")
    } else {
        ("translateY(0) scale(1)", "0 8px 20px rgba(102, 126, 234, 0.4)")
    };
    format!(
        "{} opacity: {}; visibility: {}; transform: {}; box-shadow: {};",
        BASE_STYLE, opacity, visibility, transform, shadow
    )
}

#[derive(Properties, PartialEq)]
pub struct ScrollToTopProps {
    pub visible: bool,
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top(props: &ScrollToTopProps) -> Html {
    let hovered = use_state(|| false);

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            dom::scroll_smoothly_to(&window, 0.0);
        }
    });

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <button class="scroll-to-top" aria-label="Scroll to top"
                style={button_style(props.visible, *hovered)}
                {onclick} {onmouseenter} {onmouseleave}>
            {"↑"}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_threshold() {
        let style = button_style(false, false);
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("visibility: hidden;"));
    }

    #[test]
    fn test_hover_lifts_button() {
        let style = button_style(true, true);
        assert!(style.contains("visibility: visible;"));
        assert!(style.contains("translateY(-8px) scale(1.05)"));
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollProgressProps {
    pub progress: f64,
}

#[function_component(ScrollProgress)]
pub fn scroll_progress(props: &ScrollProgressProps) -> Html {
    html! {
        <div class="scroll-progress" style={format!("width: {}%;", props.progress)}></div>
    }
}

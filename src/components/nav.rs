use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Node};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{self, Listener};
use crate::effects::menu::{MenuAction, MenuState};

const NAV_LINKS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("services", "Services"),
    ("about", "Why Us"),
    ("reviews", "Reviews"),
    ("areas", "Service Areas"),
    ("contact", "Contact"),
];

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub active_section: Option<String>,
    #[prop_or_default]
    pub config: SiteConfig,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_reducer(MenuState::default);
    let menu_ref = use_node_ref();
    let button_ref = use_node_ref();

    // Clicking anywhere outside the open menu closes it
    {
        let dispatcher = menu.dispatcher();
        let menu_ref = menu_ref.clone();
        let button_ref = button_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::window_and_document().and_then(|(_, document)| {
                    Listener::new(&document, "click", move |event: Event| {
                        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let inside = |node_ref: &NodeRef| {
                            node_ref
                                .get()
                                .map_or(false, |node| node.contains(target.as_ref()))
                        };
                        if !inside(&menu_ref) && !inside(&button_ref) {
                            dispatcher.dispatch(MenuAction::OutsideClick);
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuAction::Toggle))
    };

    let on_link = {
        let dispatcher = menu.dispatcher();
        let mobile_breakpoint = props.config.mobile_breakpoint;
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = web_sys::window() {
                dispatcher.dispatch(MenuAction::LinkActivated {
                    viewport_width: dom::viewport_width(&window),
                    mobile_breakpoint,
                });
            }
        })
    };

    let is_active = |id: &str| props.active_section.as_deref() == Some(id);

    html! {
        <nav class={classes!("navbar", props.scrolled.then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo">{"✨ SparkleClean"}</a>
                <ul id="navMenu" ref={menu_ref} class={classes!("nav-menu", menu.is_open().then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|(id, label)| html! {
                        <li>
                            <a href={format!("#{}", id)}
                               class={classes!("nav-link", is_active(id).then(|| "active"))}
                               onclick={on_link.clone()}>
                                {*label}
                            </a>
                        </li>
                    }) }
                    <li>
                        <a href="#booking"
                           class={classes!("nav-btn", is_active("booking").then(|| "active"))}
                           onclick={on_link.clone()}>
                            {"Book Now"}
                        </a>
                    </li>
                </ul>
                <button id="mobileMenuBtn" ref={button_ref} class="mobile-menu-btn"
                        aria-label="Toggle navigation" onclick={toggle_menu}>
                    {menu.glyph()}
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_closes_on_the_breakpoint_from_props() {
        let state = Rc::new(MenuState::Open);
        let next = state.clone().reduce(MenuAction::LinkActivated {
            viewport_width: 900.0,
            mobile_breakpoint: 1024.0,
        });
        assert_eq!(*next, MenuState::Closed);

        let next = state.clone().reduce(MenuAction::LinkActivated {
            viewport_width: 1200.0,
            mobile_breakpoint: 1024.0,
        });
        assert!(Rc::ptr_eq(&state, &next));
    }
}

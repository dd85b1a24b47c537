pub const OPEN_GLYPH: &str = "✕";
pub const CLOSED_GLYPH: &str = "☰";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuAction {
    Toggle,
    /// A click landed outside both the menu panel and its button.
    OutsideClick,
    /// A menu link was followed; the menu folds away at or below the breakpoint.
    LinkActivated {
        viewport_width: f64,
        mobile_breakpoint: f64,
    },
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn glyph(self) -> &'static str {
        match self {
            MenuState::Open => OPEN_GLYPH,
            MenuState::Closed => CLOSED_GLYPH,
        }
    }

    pub fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => match self {
                MenuState::Open => MenuState::Closed,
                MenuState::Closed => MenuState::Open,
            },
            MenuAction::OutsideClick => MenuState::Closed,
            MenuAction::LinkActivated {
                viewport_width,
                mobile_breakpoint,
            } if viewport_width <= mobile_breakpoint => MenuState::Closed,
            MenuAction::LinkActivated { .. } => self,
        }
    }
}

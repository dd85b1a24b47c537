use crate::config::SiteConfig;

/// Geometry of one `section[id]` as laid out on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavbarState {
    #[default]
    Top,
    Scrolled,
}

impl NavbarState {
    pub fn is_scrolled(self) -> bool {
        self == NavbarState::Scrolled
    }
}

/// Everything sampled from the window on a single scroll event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
    /// Measured once at setup; `None` when the page has no hero.
    pub hero_height: Option<f64>,
    pub navbar_height: f64,
    pub sections: Vec<SectionBox>,
}

/// Visual state derived from one scroll position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub progress: f64,
    pub navbar: NavbarState,
    pub show_scroll_to_top: bool,
    pub active_section: Option<String>,
}

impl ScrollSnapshot {
    pub fn from_metrics(metrics: &ScrollMetrics, config: &SiteConfig) -> Self {
        Self {
            progress: progress_percent(
                metrics.offset,
                metrics.document_height,
                metrics.viewport_height,
            ),
            navbar: navbar_state(metrics.offset, metrics.hero_height, config),
            show_scroll_to_top: scroll_to_top_visible(metrics.offset, config),
            active_section: active_section(
                &metrics.sections,
                metrics.navbar_height,
                metrics.offset,
                config,
            )
            .map(str::to_owned),
        }
    }
}

/// Width of the progress bar in percent.
///
/// A page that cannot scroll reports 0 instead of a non-finite width.
pub fn progress_percent(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    let percent = offset / scrollable * 100.0;
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

pub fn navbar_state(offset: f64, hero_height: Option<f64>, config: &SiteConfig) -> NavbarState {
    let hero_height = hero_height.unwrap_or(config.hero_fallback_height);
    if offset > hero_height - config.navbar_scroll_offset {
        NavbarState::Scrolled
    } else {
        NavbarState::Top
    }
}

pub fn scroll_to_top_visible(offset: f64, config: &SiteConfig) -> bool {
    offset > config.scroll_to_top_threshold
}

/// The last section, in document order, whose adjusted band contains `offset`.
pub fn active_section<'a>(
    sections: &'a [SectionBox],
    navbar_height: f64,
    offset: f64,
    config: &SiteConfig,
) -> Option<&'a str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - navbar_height - config.section_highlight_offset;
            offset >= top && offset < top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

use log::Level;

/// Tunables for every scroll-, menu- and form-driven behaviour on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    /// Hero height used when the page has no `.hero` element.
    pub hero_fallback_height: f64,
    /// The navbar switches to its scrolled look this many pixels before the hero ends.
    pub navbar_scroll_offset: f64,
    pub section_highlight_offset: f64,
    pub anchor_scroll_offset: f64,
    pub scroll_to_top_threshold: f64,
    pub mobile_breakpoint: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    pub reveal_stagger_ms: u32,
    pub submit_latency_ms: u32,
}

impl SiteConfig {
    pub const DEFAULT: SiteConfig = SiteConfig {
        hero_fallback_height: 600.0,
        navbar_scroll_offset: 100.0,
        section_highlight_offset: 150.0,
        anchor_scroll_offset: 20.0,
        scroll_to_top_threshold: 400.0,
        mobile_breakpoint: 768.0,
        reveal_threshold: 0.15,
        reveal_root_margin: "0px 0px -80px 0px",
        reveal_stagger_ms: 100,
        submit_latency_ms: 1500,
    };
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

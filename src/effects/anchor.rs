use crate::config::SiteConfig;

/// Where a smooth in-page jump should land.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorJump {
    pub top: f64,
    /// The fragment pushed onto the history, e.g. `#services`.
    pub fragment: String,
}

/// Element id targeted by a same-page href, or `None` for `""`, `"#"` and
/// anything that is not a fragment link.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn jump_offset(target_top: f64, navbar_height: f64, config: &SiteConfig) -> f64 {
    target_top - navbar_height - config.anchor_scroll_offset
}

/// Plans the jump for a clicked link. `target_top` is `None` when the fragment
/// resolves to no element, in which case the browser default is kept.
pub fn plan_jump(
    href: &str,
    target_top: Option<f64>,
    navbar_height: f64,
    config: &SiteConfig,
) -> Option<AnchorJump> {
    fragment_target(href)?;
    let top = target_top?;
    Some(AnchorJump {
        top: jump_offset(top, navbar_height, config),
        fragment: href.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_target() {
        assert_eq!(fragment_target("#services"), Some("services"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("/pricing"), None);
    }

    #[test]
    fn test_jump_to_existing_section() {
        let jump = plan_jump("#services", Some(900.0), 80.0, &SiteConfig::DEFAULT);
        assert_eq!(
            jump,
            Some(AnchorJump {
                top: 800.0,
                fragment: "#services".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_target_keeps_default() {
        assert_eq!(plan_jump("#nowhere", None, 80.0, &SiteConfig::DEFAULT), None);
        assert_eq!(plan_jump("#", Some(0.0), 80.0, &SiteConfig::DEFAULT), None);
    }
}

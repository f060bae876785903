use crate::core::{Disposition, Document, ScrollTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// Leave the click to the browser's own fragment jump.
    Native,
    SmoothScroll { target_id: String },
}

pub fn classify(href: &str, smooth_targets: &[String]) -> AnchorAction {
    if !smooth_targets.iter().any(|t| t == href) {
        return AnchorAction::Native;
    }

    AnchorAction::SmoothScroll {
        target_id: href.trim_start_matches('#').to_string(),
    }
}

/// Scrolls to an allow-listed target if it exists. The default is only suppressed when a scroll happened.
pub fn handle_anchor_click<D>(page: &D, href: &str, smooth_targets: &[String]) -> Disposition
where
    D: Document,
    D::Element: ScrollTarget,
{
    let target_id = match classify(href, smooth_targets) {
        AnchorAction::Native => return Disposition::Default,
        AnchorAction::SmoothScroll { target_id } => target_id,
    };

    // A bare "#" names no element.
    if target_id.is_empty() {
        return Disposition::Default;
    }

    match page.element_by_id(&target_id) {
        Some(target) => {
            tracing::debug!(target = %target_id, "smooth scrolling");
            target.scroll_into_view_smooth();
            Disposition::PreventDefault
        }
        None => {
            tracing::debug!(target = %target_id, "scroll target missing");
            Disposition::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnchorConfig;

    #[test]
    fn test_classify_allow_list() {
        let targets = AnchorConfig::default().smooth_targets;
        assert_eq!(
            classify("#contact-form", &targets),
            AnchorAction::SmoothScroll {
                target_id: "contact-form".to_string()
            }
        );
        assert_eq!(
            classify("#", &targets),
            AnchorAction::SmoothScroll {
                target_id: String::new()
            }
        );
        assert_eq!(classify("#programs", &targets), AnchorAction::Native);
        assert_eq!(classify("#Donate", &targets), AnchorAction::Native);
        assert_eq!(classify("#donate-now", &targets), AnchorAction::Native);
    }
}

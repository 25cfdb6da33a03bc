//! Navigation geometry
//!
//! Pure functions behind the two navigation behaviors: where a smooth scroll
//! to an anchor should land, and which nav link matches the section under the
//! focus line. The DOM layer measures; this module decides.

/// Vertical span of a `section[id]` in document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open containment: `[top, top + height)`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Extract the element id from an internal anchor href (`#about` -> `about`)
///
/// Bare `#` and non-fragment hrefs yield `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// What a click on an anchor does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorClick<'a> {
    /// Not an in-page link; the browser handles it
    Follow,
    /// In-page link: cancel the default jump, then smooth scroll to this id
    /// if it exists (silently nothing otherwise)
    ScrollTo(&'a str),
    /// Bare `#`: cancel the default jump and stay put
    Stay,
}

impl<'a> AnchorClick<'a> {
    pub fn from_href(href: &'a str) -> Self {
        match href.strip_prefix('#') {
            None => Self::Follow,
            Some("") => Self::Stay,
            Some(id) => Self::ScrollTo(id),
        }
    }

    /// Whether the browser's default navigation must be cancelled
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::Follow)
    }
}

/// Scroll offset that puts `target_top` just below the fixed header
pub fn scroll_destination(target_top: f64, header_height: f64, margin: f64) -> f64 {
    target_top - header_height - margin
}

/// Document position that decides the active section
pub fn focus_position(scroll_y: f64, header_height: f64, lookahead: f64) -> f64 {
    scroll_y + header_height + lookahead
}

/// Id of the section containing `position`
///
/// When spans overlap, the last one in document order wins.
pub fn active_section(sections: &[SectionSpan], position: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(position))
        .map(|s| s.id.as_str())
}

/// Active flag per nav link, in the order given
///
/// A link is active when its href is `#<active id>`. With no active section
/// every link is inactive.
pub fn link_states<S: AsRef<str>>(hrefs: &[S], active: Option<&str>) -> Vec<bool> {
    hrefs
        .iter()
        .map(|href| match active {
            Some(id) => anchor_target(href.as_ref()) == Some(id),
            None => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_click_cancels_every_fragment_link() {
        assert_eq!(AnchorClick::from_href("#about"), AnchorClick::ScrollTo("about"));
        assert_eq!(AnchorClick::from_href("#"), AnchorClick::Stay);
        assert_eq!(AnchorClick::from_href("https://x.dev/#a"), AnchorClick::Follow);

        // Unknown targets still cancel; the scroll is skipped later
        assert!(AnchorClick::from_href("#missing").prevents_default());
        assert!(AnchorClick::from_href("#").prevents_default());
        assert!(!AnchorClick::from_href("/cv.pdf").prevents_default());
    }

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new("about", 0.0, 800.0),
            SectionSpan::new("skills", 800.0, 600.0),
            SectionSpan::new("contact", 1400.0, 500.0),
        ]
    }

    fn hrefs() -> Vec<&'static str> {
        vec!["#about", "#skills", "#contact", "/blog"]
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#skills"), Some("skills"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/blog"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn test_scroll_destination_clears_header_and_margin() {
        assert_eq!(scroll_destination(1400.0, 80.0, 20.0), 1300.0);
        // Near the top the destination may go negative; the browser clamps it
        assert_eq!(scroll_destination(50.0, 80.0, 20.0), -50.0);
    }

    #[test]
    fn test_section_bounds_are_half_open() {
        let s = SectionSpan::new("skills", 800.0, 600.0);
        assert!(s.contains(800.0));
        assert!(s.contains(1399.9));
        assert!(!s.contains(1400.0));
        assert!(!s.contains(799.9));
    }

    #[test]
    fn test_exactly_one_link_active_inside_a_section() {
        let sections = page();
        for scroll_y in [0.0, 250.0, 700.0, 900.0, 1250.0, 1600.0] {
            let pos = focus_position(scroll_y, 80.0, 100.0);
            let active = active_section(&sections, pos);
            let states = link_states(&hrefs(), active);
            let count = states.iter().filter(|on| **on).count();
            assert_eq!(count, 1, "scroll_y {} (focus {})", scroll_y, pos);
        }
    }

    #[test]
    fn test_no_link_active_past_last_section() {
        let sections = page();
        let pos = focus_position(2000.0, 80.0, 100.0);
        assert_eq!(active_section(&sections, pos), None);
        assert!(link_states(&hrefs(), None).iter().all(|on| !on));
    }

    #[test]
    fn test_focus_picks_section_under_header() {
        let sections = page();
        // 650 + 80 + 100 = 830, just inside "skills"
        let pos = focus_position(650.0, 80.0, 100.0);
        assert_eq!(active_section(&sections, pos), Some("skills"));
        assert_eq!(
            link_states(&hrefs(), Some("skills")),
            vec![false, true, false, false]
        );
    }

    #[test]
    fn test_overlapping_sections_last_wins() {
        let sections = vec![
            SectionSpan::new("outer", 0.0, 1000.0),
            SectionSpan::new("inner", 200.0, 100.0),
        ];
        assert_eq!(active_section(&sections, 250.0), Some("inner"));
        assert_eq!(active_section(&sections, 500.0), Some("outer"));
    }
}

//! Viewport-triggered reveal state
//!
//! Each observed batch (page sections, the skill-cards section, the
//! skill-logos section) tracks a one-way `Hidden -> Revealed` flag per
//! element. The DOM layer feeds intersection entries in and applies the
//! returned [`IntersectOutcome`]; nothing here touches the page.

/// Presentation state of one observed element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Follow-up animation started by a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cascade {
    /// Fill `.skill-fill` widths
    SkillBars,
    /// Show `.skill-anim` cards
    SkillCards,
    /// Show `.skill-logo` icons
    SkillLogos,
}

/// Intersection observer settings for a batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible, 0.0–1.0
    pub threshold: f64,
    /// Shrinks the viewport bottom so elements count as entered a bit early
    pub bottom_margin_px: u32,
}

impl ObserverOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            bottom_margin_px: 0,
        }
    }

    pub fn with_bottom_margin(mut self, px: u32) -> Self {
        self.bottom_margin_px = px;
        self
    }

    /// CSS margin string for `IntersectionObserverInit.rootMargin`
    pub fn root_margin(&self) -> String {
        if self.bottom_margin_px == 0 {
            "0px".to_string()
        } else {
            format!("0px 0px -{}px 0px", self.bottom_margin_px)
        }
    }
}

#[derive(Debug, Clone)]
struct Observed {
    state: RevealState,
    cascade: Option<Cascade>,
}

/// What the caller should do after an intersection entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntersectOutcome {
    /// The element just became visible; add the visible class
    pub newly_revealed: bool,
    /// Start this cascade
    pub cascade: Option<Cascade>,
    /// Stop observing the whole batch
    pub disconnect: bool,
}

/// One observer's worth of elements
#[derive(Debug, Clone)]
pub struct RevealBatch {
    options: ObserverOptions,
    fire_once: bool,
    connected: bool,
    elements: Vec<Observed>,
}

impl RevealBatch {
    /// Batch that keeps observing after reveals
    pub fn continuous(options: ObserverOptions) -> Self {
        Self {
            options,
            fire_once: false,
            connected: true,
            elements: Vec::new(),
        }
    }

    /// Batch that disconnects after its first reveal
    pub fn fire_once(options: ObserverOptions) -> Self {
        Self {
            fire_once: true,
            ..Self::continuous(options)
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Add an element, returning its index
    pub fn register(&mut self, cascade: Option<Cascade>) -> usize {
        self.elements.push(Observed {
            state: RevealState::Hidden,
            cascade,
        });
        self.elements.len() - 1
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.elements.get(index).map(|e| e.state)
    }

    /// Feed one intersection entry
    ///
    /// Only the first intersecting entry per element has an effect; entries
    /// for unknown indices or after disconnect are ignored.
    pub fn on_intersect(&mut self, index: usize, is_intersecting: bool) -> IntersectOutcome {
        if !self.connected || !is_intersecting {
            return IntersectOutcome::default();
        }
        let Some(element) = self.elements.get_mut(index) else {
            return IntersectOutcome::default();
        };
        if element.state == RevealState::Revealed {
            return IntersectOutcome::default();
        }

        element.state = RevealState::Revealed;
        let disconnect = self.fire_once;
        if disconnect {
            self.connected = false;
        }
        IntersectOutcome {
            newly_revealed: true,
            cascade: element.cascade,
            disconnect,
        }
    }
}

impl RevealBatch {
    /// Feed one observer callback's entries, matched to elements by identity
    ///
    /// `targets` are the observed elements in registration order; each entry
    /// is `(target, is_intersecting)`. Entries for unknown targets are
    /// skipped. Processing stops after the entry that disconnects the batch,
    /// so later entries in the same callback have no effect.
    pub fn on_entries<T, I>(
        &mut self,
        targets: &[T],
        entries: I,
    ) -> Vec<(usize, IntersectOutcome)>
    where
        T: PartialEq,
        I: IntoIterator<Item = (T, bool)>,
    {
        let mut routed = Vec::new();
        for (target, is_intersecting) in entries {
            let Some(index) = targets.iter().position(|t| *t == target) else {
                continue;
            };
            let outcome = self.on_intersect(index, is_intersecting);
            routed.push((index, outcome));
            if outcome.disconnect {
                break;
            }
        }
        routed
    }
}

/// Scroll-position reveal test: has the element's top crossed the line
/// `offset` pixels above the viewport bottom?
pub fn crosses_reveal_line(element_top: f64, viewport_height: f64, offset: f64) -> bool {
    element_top < viewport_height - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_margin_css() {
        let opts = ObserverOptions::new(0.1).with_bottom_margin(50);
        assert_eq!(opts.root_margin(), "0px 0px -50px 0px");
        assert_eq!(ObserverOptions::new(0.24).root_margin(), "0px");
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(ObserverOptions::new(1.7).threshold, 1.0);
        assert_eq!(ObserverOptions::new(-0.2).threshold, 0.0);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut batch = RevealBatch::continuous(ObserverOptions::new(0.1));
        let i = batch.register(None);

        assert_eq!(batch.state(i), Some(RevealState::Hidden));
        assert!(batch.on_intersect(i, true).newly_revealed);

        // Leaving and re-entering the viewport never unsets or re-fires
        for entering in [false, true, false, true] {
            let outcome = batch.on_intersect(i, entering);
            assert!(!outcome.newly_revealed);
            assert_eq!(batch.state(i), Some(RevealState::Revealed));
        }
    }

    #[test]
    fn test_non_intersecting_entry_is_ignored() {
        let mut batch = RevealBatch::continuous(ObserverOptions::new(0.1));
        let i = batch.register(None);
        assert_eq!(batch.on_intersect(i, false), IntersectOutcome::default());
        assert_eq!(batch.state(i), Some(RevealState::Hidden));
    }

    #[test]
    fn test_continuous_batch_cascades_once() {
        let mut batch = RevealBatch::continuous(ObserverOptions::new(0.1));
        let about = batch.register(None);
        let bars = batch.register(Some(Cascade::SkillBars));

        let first = batch.on_intersect(bars, true);
        assert_eq!(first.cascade, Some(Cascade::SkillBars));
        assert!(!first.disconnect);

        assert_eq!(batch.on_intersect(bars, true).cascade, None);
        assert!(batch.on_intersect(about, true).newly_revealed);
        assert!(batch.is_connected());
    }

    #[test]
    fn test_fire_once_batch_disconnects() {
        let mut batch = RevealBatch::fire_once(ObserverOptions::new(0.24));
        let i = batch.register(Some(Cascade::SkillCards));

        let outcome = batch.on_intersect(i, true);
        assert_eq!(
            outcome,
            IntersectOutcome {
                newly_revealed: true,
                cascade: Some(Cascade::SkillCards),
                disconnect: true,
            }
        );
        assert!(!batch.is_connected());
        assert_eq!(batch.on_intersect(i, true), IntersectOutcome::default());
    }

    #[test]
    fn test_unknown_index_is_ignored() {
        let mut batch = RevealBatch::fire_once(ObserverOptions::new(0.2));
        assert!(batch.is_empty());
        assert_eq!(batch.on_intersect(3, true), IntersectOutcome::default());
        assert!(batch.is_connected());
    }

    #[test]
    fn test_entries_route_by_identity() {
        let targets = ["hero", "skills", "contact"];
        let mut batch = RevealBatch::continuous(ObserverOptions::new(0.1));
        batch.register(None);
        batch.register(Some(Cascade::SkillBars));
        batch.register(None);

        let routed = batch.on_entries(
            &targets,
            [("contact", true), ("footer", true), ("skills", true), ("hero", false)],
        );
        let indices: Vec<usize> = routed.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![2, 1, 0]);
        assert!(routed[0].1.newly_revealed);
        assert_eq!(routed[1].1.cascade, Some(Cascade::SkillBars));
        assert_eq!(routed[2].1, IntersectOutcome::default());
        assert_eq!(batch.state(0), Some(RevealState::Hidden));
    }

    #[test]
    fn test_entries_stop_after_disconnect() {
        let targets = ["cards", "logos"];
        let mut batch = RevealBatch::fire_once(ObserverOptions::new(0.24));
        batch.register(Some(Cascade::SkillCards));
        batch.register(Some(Cascade::SkillLogos));

        let routed = batch.on_entries(&targets, [("cards", true), ("logos", true)]);
        assert_eq!(routed.len(), 1);
        assert!(routed[0].1.disconnect);
        assert_eq!(batch.state(1), Some(RevealState::Hidden));

        // A later callback after disconnect does nothing
        let later = batch.on_entries(&targets, [("logos", true)]);
        assert_eq!(later, vec![(1, IntersectOutcome::default())]);
    }

    #[test]
    fn test_reveal_line() {
        assert!(crosses_reveal_line(500.0, 900.0, 150.0));
        assert!(!crosses_reveal_line(750.0, 900.0, 150.0));
        assert!(!crosses_reveal_line(800.0, 900.0, 150.0));
    }
}

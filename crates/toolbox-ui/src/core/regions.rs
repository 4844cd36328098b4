//! Output-region registry: each region is mounted once, then updated in place.
//!
//! # Design
//! - Regions are tagged with a registry id on first use; later renders reuse the mount.
//! - The last state per region is kept so a language switch can relabel it.
//! - Mounting and tagging live behind [`RegionElement`], so the bookkeeping runs natively.

use crate::core::render::{RegionState, ResultLabels};
use std::collections::HashMap;
use std::rc::Rc;

/// A mounted panel that can be re-rendered with new props.
pub trait PanelHandle {
    /// Replace what the panel shows.
    fn update(&mut self, state: RegionState, labels: Rc<ResultLabels>);
}

/// Page element that can host a result panel.
pub trait RegionElement {
    /// Handle returned by [`RegionElement::mount`].
    type Handle: PanelHandle;

    /// Registry id previously stored on the element, if any.
    fn region_id(&self) -> Option<String>;
    /// Store `id` on the element.
    fn tag(&self, id: &str);
    /// Replace the element's content with a panel showing `state`.
    fn mount(&self, state: RegionState, labels: Rc<ResultLabels>) -> Self::Handle;
}

struct MountedRegion<H> {
    handle: H,
    state: RegionState,
}

/// Mounted regions keyed by their registry id.
pub struct RegionRegistry<H> {
    next_id: u32,
    mounted: HashMap<String, MountedRegion<H>>,
}

impl<H> Default for RegionRegistry<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            mounted: HashMap::new(),
        }
    }
}

impl<H: PanelHandle> RegionRegistry<H> {
    /// Show `state` in `element`, mounting a panel on first use.
    pub fn show<E>(&mut self, element: &E, state: RegionState, labels: Rc<ResultLabels>)
    where
        E: RegionElement<Handle = H> + ?Sized,
    {
        if let Some(mounted) = element
            .region_id()
            .and_then(|id| self.mounted.get_mut(&id))
        {
            mounted.handle.update(state.clone(), labels);
            mounted.state = state;
            return;
        }

        let id = self.next_id.to_string();
        self.next_id += 1;
        element.tag(&id);
        let handle = element.mount(state.clone(), labels);
        self.mounted.insert(id, MountedRegion { handle, state });
    }

    /// Re-render every mounted region with its last state and `labels`.
    pub fn relabel(&mut self, labels: &Rc<ResultLabels>) {
        for mounted in self.mounted.values_mut() {
            mounted
                .handle
                .update(mounted.state.clone(), Rc::clone(labels));
        }
    }

    /// Number of mounted regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    /// Whether nothing has been mounted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translations;
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum PanelEvent {
        Mount(RegionState, String),
        Update(RegionState, String),
    }

    type EventLog = Rc<RefCell<Vec<PanelEvent>>>;

    struct LoggedPanel {
        log: EventLog,
    }

    impl PanelHandle for LoggedPanel {
        fn update(&mut self, state: RegionState, labels: Rc<ResultLabels>) {
            self.log
                .borrow_mut()
                .push(PanelEvent::Update(state, labels.loading.clone()));
        }
    }

    struct FakeElement {
        id: RefCell<Option<String>>,
        log: EventLog,
    }

    impl FakeElement {
        fn new(log: &EventLog) -> Self {
            Self {
                id: RefCell::new(None),
                log: Rc::clone(log),
            }
        }
    }

    impl RegionElement for FakeElement {
        type Handle = LoggedPanel;

        fn region_id(&self) -> Option<String> {
            self.id.borrow().clone()
        }

        fn tag(&self, id: &str) {
            *self.id.borrow_mut() = Some(id.to_string());
        }

        fn mount(&self, state: RegionState, labels: Rc<ResultLabels>) -> LoggedPanel {
            self.log
                .borrow_mut()
                .push(PanelEvent::Mount(state, labels.loading.clone()));
            LoggedPanel {
                log: Rc::clone(&self.log),
            }
        }
    }

    fn labels(lang: &str) -> Rc<ResultLabels> {
        Rc::new(ResultLabels::resolve(&Translations::load(), lang))
    }

    #[test]
    fn second_show_updates_the_existing_mount() {
        let log = EventLog::default();
        let element = FakeElement::new(&log);
        let mut registry = RegionRegistry::default();

        registry.show(&element, RegionState::Loading, labels("en"));
        registry.show(&element, RegionState::Failed("Error: down".into()), labels("en"));

        assert_eq!(registry.len(), 1);
        assert_eq!(
            *log.borrow(),
            vec![
                PanelEvent::Mount(RegionState::Loading, "Loading...".into()),
                PanelEvent::Update(RegionState::Failed("Error: down".into()), "Loading...".into()),
            ]
        );
    }

    #[test]
    fn separate_elements_get_separate_mounts() {
        let log = EventLog::default();
        let first = FakeElement::new(&log);
        let second = FakeElement::new(&log);
        let mut registry = RegionRegistry::default();

        registry.show(&first, RegionState::Loading, labels("en"));
        registry.show(&second, RegionState::Loading, labels("en"));

        assert_eq!(registry.len(), 2);
        assert_ne!(first.region_id(), second.region_id());
        assert!(
            log.borrow()
                .iter()
                .all(|event| matches!(event, PanelEvent::Mount(..)))
        );
    }

    #[test]
    fn unknown_tag_mounts_afresh() {
        let log = EventLog::default();
        let element = FakeElement::new(&log);
        element.tag("stale");
        let mut registry = RegionRegistry::default();

        registry.show(&element, RegionState::Loading, labels("en"));

        assert_eq!(registry.len(), 1);
        assert_eq!(element.region_id().as_deref(), Some("0"));
        assert!(matches!(log.borrow().first(), Some(PanelEvent::Mount(..))));
    }

    #[test]
    fn relabel_replays_last_state() {
        let log = EventLog::default();
        let element = FakeElement::new(&log);
        let mut registry = RegionRegistry::default();
        registry.show(&element, RegionState::Loading, labels("en"));
        registry.show(&element, RegionState::Failed("Error: down".into()), labels("en"));
        log.borrow_mut().clear();

        registry.relabel(&labels("zh"));

        assert_eq!(
            *log.borrow(),
            vec![PanelEvent::Update(
                RegionState::Failed("Error: down".into()),
                "加载中...".into()
            )]
        );
    }
}

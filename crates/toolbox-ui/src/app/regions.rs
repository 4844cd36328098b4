//! Result panels mounted into `.result` elements.

use crate::app::Toolbox;
use crate::components::result_panel::{ResultPanel, ResultPanelProps};
use crate::core::pipeline::OutputRegion;
use crate::core::regions::{PanelHandle, RegionElement};
use crate::core::render::{RegionState, ResultLabels};
use gloo::console;
use std::rc::Rc;
use web_sys::Element;
use yew::AppHandle;

const REGION_ATTR: &str = "data-toolbox-region";

impl PanelHandle for AppHandle<ResultPanel> {
    fn update(&mut self, state: RegionState, labels: Rc<ResultLabels>) {
        Self::update(self, ResultPanelProps { state, labels });
    }
}

impl RegionElement for Element {
    type Handle = AppHandle<ResultPanel>;

    fn region_id(&self) -> Option<String> {
        self.get_attribute(REGION_ATTR)
    }

    fn tag(&self, id: &str) {
        if let Err(err) = self.set_attribute(REGION_ATTR, id) {
            console::error!("region could not be tagged", err);
        }
    }

    fn mount(&self, state: RegionState, labels: Rc<ResultLabels>) -> Self::Handle {
        self.set_inner_html("");
        yew::Renderer::<ResultPanel>::with_root_and_props(
            self.clone(),
            ResultPanelProps { state, labels },
        )
        .render()
    }
}

/// [`OutputRegion`] writing into one page element through the shared registry.
pub(crate) struct DomRegion {
    pub(crate) toolbox: Rc<Toolbox>,
    pub(crate) element: Element,
}

impl OutputRegion for DomRegion {
    fn render(&mut self, state: RegionState) {
        self.toolbox.show(&self.element, state);
    }
}

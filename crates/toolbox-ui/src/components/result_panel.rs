//! Result panel mounted into each output region.
//!
//! # Design
//! - Stateless: the region registry owns the current [`RegionState`] and re-renders on change.
//! - Labels arrive pre-translated so a language switch only swaps props.
//! - Ready results show three sections: summary chips, structured tree, raw JSON.

use crate::components::tree::tree_view;
use crate::core::render::{Chip, RegionState, ResultLabels, ResultView};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ResultPanelProps {
    pub(crate) state: RegionState,
    pub(crate) labels: Rc<ResultLabels>,
}

#[function_component(ResultPanel)]
pub(crate) fn result_panel(props: &ResultPanelProps) -> Html {
    match &props.state {
        RegionState::Loading => html! {
            <p class="result-loading" aria-busy="true">{ props.labels.loading.clone() }</p>
        },
        RegionState::Failed(message) => html! {
            <p class="result-error" role="alert">{ message.clone() }</p>
        },
        RegionState::Ready(view) => ready_view(view, &props.labels),
    }
}

fn ready_view(view: &ResultView, labels: &ResultLabels) -> Html {
    html! {
        <div class="result-view">
            <div class="result-summary">
                { for view.chips.iter().map(|chip| chip_view(chip, labels)) }
            </div>
            <section class="result-visual">
                <h4>{ labels.visual.clone() }</h4>
                { view.tree.as_ref().map_or_else(
                    || html! { <p class="result-empty">{ labels.empty.clone() }</p> },
                    tree_view,
                ) }
            </section>
            <section class="result-raw">
                <h4>{ labels.raw.clone() }</h4>
                <pre>{ view.raw.clone() }</pre>
            </section>
        </div>
    }
}

fn chip_view(chip: &Chip, labels: &ResultLabels) -> Html {
    html! {
        <span class={classes!("chip", chip.tone.class())}>
            <span class="chip-label">{ labels.chip(chip.kind).to_string() }</span>
            <span class="chip-value">{ chip.value.clone() }</span>
        </span>
    }
}

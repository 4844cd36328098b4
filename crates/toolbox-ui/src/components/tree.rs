//! Recursive structured view of a response body.

use crate::core::render::RenderNode;
use yew::prelude::*;

/// Nested list mirroring `node`; leaves carry their scalar kind as a class.
pub(crate) fn tree_view(node: &RenderNode) -> Html {
    match node {
        RenderNode::Scalar { text, kind } => html! {
            <span class={classes!("tree-value", kind.class())}>{ text.clone() }</span>
        },
        RenderNode::Composite(branches) => html! {
            <ul class="tree">
                { for branches.iter().map(|branch| {
                    let nested = matches!(branch.node, RenderNode::Composite(_));
                    html! {
                        <li class={classes!("tree-node", nested.then_some("nested"))}>
                            <span class="tree-key">{ branch.label.clone() }</span>
                            { tree_view(&branch.node) }
                        </li>
                    }
                }) }
            </ul>
        },
    }
}

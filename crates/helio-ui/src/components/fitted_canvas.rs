//! Viewport box that hosts a fixed design canvas.
//!
//! # Design
//! - The outer box fills the available area, capped by the page's width/height options.
//! - The inner canvas is laid out at the effective size and scaled by the fit result.

use helio_core::{FitResult, PageLayout};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FittedCanvasProps {
    pub layout: PageLayout,
    pub fit: FitResult,
    #[prop_or_default]
    pub caps: (Option<f64>, Option<f64>),
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FittedCanvas)]
pub(crate) fn fitted_canvas(props: &FittedCanvasProps) -> Html {
    let viewport_style = viewport_style(props.caps);
    let canvas_style = props.fit.canvas_style(props.layout.anchor);

    html! {
        <div class="helio-viewport" style={viewport_style}>
            <div class="helio-canvas" style={canvas_style}>
                {for props.children.iter()}
            </div>
        </div>
    }
}

fn viewport_style((width, height): (Option<f64>, Option<f64>)) -> String {
    let mut style = String::from("position:relative;overflow:hidden;width:100%;height:100vh;");
    if let Some(width) = width {
        style.push_str(&format!("max-width:{width:.0}px;"));
    }
    if let Some(height) = height {
        style.push_str(&format!("max-height:{height:.0}px;"));
    }
    style
}

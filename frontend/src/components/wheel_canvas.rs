use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use wheel_shared::rotation::sector_angle;
use wheel_shared::Configuration;
use yew::prelude::*;

const CANVAS_SIZE: u32 = 400;
const RIM_COLOR: &str = "#b91c1c";

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub configuration: Configuration,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    pub is_spinning: bool,
}

fn context_for(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

/// Paints the wheel. Segment `i` starts `i` sectors clockwise from the
/// pointer, matching the layout the rotation plan assumes.
fn draw_wheel(
    context: &CanvasRenderingContext2d,
    configuration: &Configuration,
    rotation: f64,
    is_spinning: bool,
) {
    let size = CANVAS_SIZE as f64;
    let center = size / 2.0;
    let radius = center - 30.0;
    let dark = is_dark_mode();

    context.clear_rect(0.0, 0.0, size, size);

    // Outer rim
    context.begin_path();
    context.set_fill_style_str(RIM_COLOR);
    let _ = context.arc(center, center, radius + 10.0, 0.0, 2.0 * PI);
    context.fill();

    if configuration.is_empty() {
        return;
    }

    let sector = sector_angle(configuration.len()).to_radians();
    let offset = -PI / 2.0 + rotation.to_radians();

    for (index, segment) in configuration.iter().enumerate() {
        let start = offset + index as f64 * sector;
        let end = start + sector;

        context.begin_path();
        context.set_fill_style_str(segment.color.fill());
        context.move_to(center, center);
        let _ = context.arc(center, center, radius, start, end);
        context.close_path();
        context.fill();

        context.set_stroke_style_str("#ffffff");
        context.set_line_width(2.0);
        context.stroke();

        if is_spinning {
            let shimmer = (js_sys::Date::now() / 400.0 + index as f64).sin() * 0.08 + 0.08;
            context.set_fill_style_str(&format!("rgba(255, 255, 255, {})", shimmer));
            context.fill();
        }

        // Label along the sector's centre line
        context.save();
        let _ = context.translate(center, center);
        let _ = context.rotate(start + sector / 2.0);
        let _ = context.translate(radius * 0.65, 0.0);
        context.set_fill_style_str("#ffffff");
        context.set_font("bold 14px 'Segoe UI', Roboto, system-ui, sans-serif");
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_shadow_color("rgba(0, 0, 0, 0.5)");
        context.set_shadow_blur(3.0);
        let _ = context.fill_text(&segment.label, 0.0, 0.0);
        context.restore();
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str(RIM_COLOR);
    let _ = context.arc(center, center, 20.0, 0.0, 2.0 * PI);
    context.fill();
    context.set_stroke_style_str(if dark { "#e5e7eb" } else { "#ffffff" });
    context.set_line_width(3.0);
    context.stroke();

    // Pointer, fixed at the top
    context.begin_path();
    context.move_to(center, center - radius + 12.0);
    context.line_to(center - 12.0, center - radius - 22.0);
    context.line_to(center + 12.0, center - radius - 22.0);
    context.close_path();
    context.set_shadow_color(if is_spinning {
        "rgba(255, 215, 130, 0.8)"
    } else {
        "rgba(0, 0, 0, 0.3)"
    });
    context.set_shadow_blur(if is_spinning { 10.0 } else { 4.0 });
    context.set_fill_style_str(RIM_COLOR);
    context.fill();
    context.set_stroke_style_str("#ffffff");
    context.set_line_width(2.0);
    context.stroke();
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.configuration.clone(), props.rotation, props.is_spinning),
            move |(configuration, rotation, is_spinning)| {
                if let Some(context) = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| context_for(&canvas))
                {
                    draw_wheel(&context, configuration, *rotation, *is_spinning);
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full max-w-[400px] h-auto rounded-full transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(185, 28, 28, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use wheel_shared::constants::MAX_LABEL_LENGTH;
use wheel_shared::editor::SegmentPatch;
use wheel_shared::{Segment, SegmentColor};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SegmentCardProps {
    pub segment: Segment,
    pub position: usize,
    pub can_remove: bool,
    pub on_update: Callback<(String, SegmentPatch)>,
    pub on_remove: Callback<String>,
}

fn input_value(e: &Event) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Form controls for one segment in the admin panel.
#[function_component(SegmentCard)]
pub fn segment_card(props: &SegmentCardProps) -> Html {
    let id = props.segment.id.clone();

    let patch = |build: fn(&Event) -> Option<SegmentPatch>| {
        let on_update = props.on_update.clone();
        let id = id.clone();
        Callback::from(move |e: Event| {
            if let Some(patch) = build(&e) {
                on_update.emit((id.clone(), patch));
            }
        })
    };

    let on_label = {
        let on_update = props.on_update.clone();
        let id = id.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                on_update.emit((id.clone(), SegmentPatch::label(value)));
            }
        })
    };

    let on_color = patch(|e| {
        e.target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            .and_then(|select| select.value().parse::<SegmentColor>().ok())
            .map(SegmentPatch::color)
    });

    let on_weight = patch(|e| input_value(e).map(|raw| SegmentPatch::weight_input(&raw)));

    let on_major = patch(|e| {
        e.target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .map(|input| SegmentPatch::major_prize(input.checked()))
    });

    let on_remove = {
        let on_remove = props.on_remove.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(id.clone()))
    };

    html! {
        <div class={styles::CARD}>
            <div class="flex justify-between items-center mb-4">
                <span class={styles::CARD_TITLE}>{format!("Segment {}", props.position + 1)}</span>
                <button
                    onclick={on_remove}
                    disabled={!props.can_remove}
                    class={styles::BUTTON_DANGER}
                    title="Remove segment"
                >
                    {"Remove"}
                </button>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <div>
                    <label for={format!("text-{}", id)} class={styles::TEXT_LABEL}>{"Prize text"}</label>
                    <input
                        id={format!("text-{}", id)}
                        class={styles::INPUT}
                        value={props.segment.label.clone()}
                        maxlength={MAX_LABEL_LENGTH.to_string()}
                        oninput={on_label}
                        placeholder="Enter a prize..."
                    />
                </div>
                <div>
                    <label for={format!("color-{}", id)} class={styles::TEXT_LABEL}>{"Color"}</label>
                    <select id={format!("color-{}", id)} class={styles::INPUT} onchange={on_color}>
                        { for SegmentColor::ALL.iter().map(|color| html! {
                            <option value={color.as_str()} selected={*color == props.segment.color}>
                                {color.display_name()}
                            </option>
                        }) }
                    </select>
                </div>
                <div>
                    <label for={format!("probability-{}", id)} class={styles::TEXT_LABEL}>{"Probability (%)"}</label>
                    <input
                        id={format!("probability-{}", id)}
                        class={styles::INPUT}
                        type="number"
                        min="0"
                        max="100"
                        step="0.1"
                        value={props.segment.weight.to_string()}
                        onchange={on_weight}
                    />
                </div>
                <div class="flex items-center space-x-2 mt-6">
                    <input
                        id={format!("bigwin-{}", id)}
                        type="checkbox"
                        class="h-5 w-5 accent-red-600"
                        checked={props.segment.is_major_prize}
                        onchange={on_major}
                    />
                    <label for={format!("bigwin-{}", id)} class={styles::TEXT_LABEL}>{"Big prize (confetti)"}</label>
                </div>
            </div>
        </div>
    }
}

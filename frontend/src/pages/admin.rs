use wheel_shared::constants::{RESET_SUCCESS_MESSAGE, SAVE_SUCCESS_MESSAGE};
use wheel_shared::editor::{SegmentEditor, SegmentPatch};
use wheel_shared::storage::load_or_default;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::SegmentCard;
use crate::config::BrowserStore;
use crate::hooks::use_form_state;
use crate::{styles, Route};

#[function_component(AdminPanel)]
pub fn admin_panel() -> Html {
    let editor = use_state(|| SegmentEditor::new(&load_or_default(&BrowserStore)));
    let form = use_form_state();

    let on_update = {
        let editor = editor.clone();
        Callback::from(move |(id, patch): (String, SegmentPatch)| {
            let mut next = (*editor).clone();
            if let Err(e) = next.update_segment(&id, patch) {
                log::warn!("{}", e);
                return;
            }
            editor.set(next);
        })
    };

    let on_remove = {
        let editor = editor.clone();
        let handle_error = form.handle_error.clone();
        Callback::from(move |id: String| {
            let mut next = (*editor).clone();
            match next.remove_segment(&id) {
                Ok(_) => editor.set(next),
                Err(e) => handle_error.emit(e.to_string()),
            }
        })
    };

    let on_add = {
        let editor = editor.clone();
        let handle_error = form.handle_error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*editor).clone();
            match next.add_segment() {
                Ok(_) => editor.set(next),
                Err(e) => handle_error.emit(e.to_string()),
            }
        })
    };

    let on_reset = {
        let editor = editor.clone();
        let handle_success = form.handle_success.clone();
        let handle_error = form.handle_error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*editor).clone();
            match next.reset_to_defaults() {
                Ok(()) => {
                    editor.set(next);
                    handle_success.emit(RESET_SUCCESS_MESSAGE.to_string());
                }
                Err(e) => handle_error.emit(e.to_string()),
            }
        })
    };

    let on_save = {
        let editor = editor.clone();
        let handle_success = form.handle_success.clone();
        let handle_error = form.handle_error.clone();
        Callback::from(move |_: MouseEvent| match editor.save(&BrowserStore) {
            Ok(_) => handle_success.emit(SAVE_SUCCESS_MESSAGE.to_string()),
            Err(e) => handle_error.emit(e.to_string()),
        })
    };

    let total = editor.total_weight();
    let can_remove = editor.can_remove();

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap justify-between items-center gap-4">
                <h1 class={styles::TEXT_H2}>{"Administration"}</h1>
                <div class="flex gap-2">
                    <button onclick={on_reset} class={styles::BUTTON_SECONDARY}>
                        {"Default settings"}
                    </button>
                    <button onclick={on_add} class={styles::BUTTON_PRIMARY}>
                        {"+ Add segment"}
                    </button>
                </div>
            </div>

            if !form.error.is_empty() {
                <div class={styles::ALERT_ERROR}>{&form.error}</div>
            }
            if !form.success.is_empty() {
                <div class={styles::ALERT_SUCCESS}>{&form.success}</div>
            }

            <div class="grid gap-4">
                { for editor.segments().iter().enumerate().map(|(position, segment)| html! {
                    <SegmentCard
                        key={segment.id.clone()}
                        segment={segment.clone()}
                        {position}
                        {can_remove}
                        on_update={on_update.clone()}
                        on_remove={on_remove.clone()}
                    />
                }) }
            </div>

            <div class={styles::CARD}>
                <div class="flex justify-between items-center">
                    <div>
                        <p class="text-lg font-semibold text-gray-900 dark:text-white">
                            {format!("Total probability: {:.1}%", total)}
                        </p>
                        if !editor.weights_balanced() {
                            <p class={styles::TEXT_ERROR}>{"Must be exactly 100%"}</p>
                        }
                    </div>
                    <button
                        onclick={on_save}
                        disabled={!editor.can_save()}
                        class={classes!(styles::BUTTON_PRIMARY, "px-8", "py-3")}
                    >
                        {"Save changes"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(Admin)]
pub fn admin() -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_LG}>
                <div class="mb-6">
                    <Link<Route> to={Route::Home} classes={classes!(styles::BUTTON_SECONDARY)}>
                        {"← Back to the wheel"}
                    </Link<Route>>
                </div>
                <AdminPanel />
            </div>
        </div>
    }
}

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const SUCCESS_VISIBLE_MS: u32 = 3000;

#[derive(Clone)]
pub struct FormState {
    pub error: String,
    pub success: String,
    pub handle_success: Callback<String>,
    pub handle_error: Callback<String>,
}

/// Error and success banners for a form. A success message clears itself
/// after a few seconds; an error stays until the next outcome replaces it.
#[hook]
pub fn use_form_state() -> FormState {
    let error = use_state(String::new);
    let success = use_state(String::new);

    {
        let success = success.clone();
        use_effect_with((*success).clone(), move |message| {
            let timeout = (!message.is_empty())
                .then(|| Timeout::new(SUCCESS_VISIBLE_MS, move || success.set(String::new())));
            move || drop(timeout)
        });
    }

    let handle_success = {
        let success = success.clone();
        let error = error.clone();
        Callback::from(move |msg: String| {
            success.set(msg);
            error.set(String::new());
        })
    };

    let handle_error = {
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |msg: String| {
            log::warn!("{}", msg);
            error.set(msg);
            success.set(String::new());
        })
    };

    FormState {
        error: (*error).clone(),
        success: (*success).clone(),
        handle_success,
        handle_error,
    }
}

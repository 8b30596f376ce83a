use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinModalProps {
    pub is_open: bool,
    pub prize: AttrValue,
    pub is_big_win: bool,
    pub on_close: Callback<()>,
}

#[function_component(WinModal)]
pub fn win_modal(props: &WinModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the card must not reach the backdrop
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let prize_class = if props.is_big_win {
        styles::MODAL_PRIZE_MAJOR
    } else {
        styles::MODAL_PRIZE
    };

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={close.clone()}>
            <div class={styles::MODAL_CARD} onclick={stop} role="dialog" aria-modal="true">
                <h2 class="text-center text-3xl font-bold text-red-700 dark:text-red-400">
                    {"🎉 You win! 🎉"}
                </h2>
                <div class="flex flex-col items-center gap-6 py-6">
                    <div class={prize_class}>
                        <p class="text-2xl font-bold mb-2">{"Your prize:"}</p>
                        <p class={classes!("text-3xl", "font-extrabold", props.is_big_win.then_some("animate-pulse"))}>
                            {props.prize.clone()}
                        </p>
                    </div>
                    if props.is_big_win {
                        <p class="text-xl font-bold text-yellow-500 animate-pulse">
                            {"🌟 BIG PRIZE! 🌟"}
                        </p>
                    }
                    <button onclick={close} class={styles::BUTTON_PRIMARY}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}

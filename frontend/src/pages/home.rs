use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use wheel_shared::constants::{CONFETTI_DURATION_MS, SPIN_DURATION_MS};
use wheel_shared::rotation::animated_rotation;
use wheel_shared::selector::{DrawSource, RngDraws};
use wheel_shared::shared_wheel_game::WheelAction;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Confetti, SpinButton, WheelCanvas, WinModal};
use crate::hooks::{use_wheel, WheelStore};
use crate::{styles, Route};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(frame: &FrameCallback) {
    if let (Some(window), Some(callback)) = (window(), frame.borrow().as_ref()) {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Drives the rotation from `start` to `end` over the spin duration, then
/// reports completion. The winner is already fixed; this only moves pixels.
fn animate_spin(
    dispatcher: UseReducerDispatcher<WheelStore>,
    start: f64,
    end: f64,
    cancelled: Rc<Cell<bool>>,
) {
    let start_time = js_sys::Date::now();
    let duration = SPIN_DURATION_MS as f64;

    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled.get() {
            f.borrow_mut().take();
            return;
        }

        let elapsed = js_sys::Date::now() - start_time;
        if elapsed < duration {
            dispatcher.dispatch(WheelAction::Rotated(animated_rotation(start, end, elapsed, duration)));
            request_frame(&f);
        } else {
            dispatcher.dispatch(WheelAction::SpinCompleted);
            // Breaks the self-reference so the closure can be freed
            f.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));

    request_frame(&g);
}

#[function_component(Home)]
pub fn home() -> Html {
    let wheel = use_wheel();
    let draws = use_mut_ref(RngDraws::from_entropy);
    let state = &wheel.0;

    // Spin animation
    {
        let dispatcher = wheel.dispatcher();
        let start = state.rotation;
        let final_rotation = state.target.map(|plan| plan.final_rotation);
        use_effect_with(
            (state.is_spinning, final_rotation),
            move |(is_spinning, final_rotation)| {
                let cancelled = Rc::new(Cell::new(false));
                if let (true, Some(end)) = (*is_spinning, *final_rotation) {
                    animate_spin(dispatcher, start, end, cancelled.clone());
                }
                move || cancelled.set(true)
            },
        );
    }

    // Confetti lifetime
    {
        let dispatcher = wheel.dispatcher();
        use_effect_with(state.show_confetti, move |show| {
            if *show {
                spawn_local(async move {
                    TimeoutFuture::new(CONFETTI_DURATION_MS).await;
                    dispatcher.dispatch(WheelAction::ConfettiFinished);
                });
            }
            || ()
        });
    }

    let on_spin = {
        let dispatcher = wheel.dispatcher();
        let draws = draws.clone();
        let can_spin = state.can_spin();
        Callback::from(move |_: MouseEvent| {
            if !can_spin {
                return;
            }
            let draw = draws.borrow_mut().next_draw();
            dispatcher.dispatch(WheelAction::SpinRequested(draw));
        })
    };

    let on_close = {
        let dispatcher = wheel.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(WheelAction::ResultClosed))
    };

    let on_try_again = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let result = state.last_result.as_ref();

    html! {
        <div class={styles::CONTAINER}>
            if state.show_confetti {
                <Confetti />
            }

            <header class={styles::HEADER}>
                <h1 class={styles::TEXT_H1}>{"Prize Wheel"}</h1>
                <p class={styles::TEXT_BODY}>{"Spin the wheel and win a prize!"}</p>
            </header>

            <main class="container mx-auto px-4 py-12">
                <div class="flex flex-col items-center gap-6">
                    <div class="w-full max-w-[400px] mx-auto">
                        <WheelCanvas
                            configuration={state.configuration.clone()}
                            rotation={state.rotation}
                            is_spinning={state.is_spinning}
                        />
                    </div>

                    <div class="flex flex-col items-center gap-4 w-full max-w-[320px]">
                        <SpinButton
                            is_spinning={state.is_spinning}
                            disabled={!state.can_spin()}
                            onclick={on_spin}
                        />
                        if result.is_some() {
                            <button onclick={on_try_again} class={styles::BUTTON_SECONDARY}>
                                {"Try again"}
                            </button>
                        }
                    </div>

                    <div class="mt-12">
                        <Link<Route> to={Route::Admin} classes={classes!(styles::BUTTON_SECONDARY)}>
                            {"⚙ Administration"}
                        </Link<Route>>
                    </div>
                </div>
            </main>

            <WinModal
                is_open={result.is_some()}
                prize={result.map(|r| AttrValue::from(r.segment.label.clone())).unwrap_or_else(|| AttrValue::from(""))}
                is_big_win={result.map(|r| r.segment.is_major_prize).unwrap_or(false)}
                on_close={on_close}
            />

            <footer class={styles::FOOTER}>
                <p>{"Prize Wheel"}</p>
            </footer>
        </div>
    }
}

use std::rc::Rc;

use yew::prelude::*;
use wheel_shared::shared_wheel_game::{WheelAction, WheelState};
use wheel_shared::storage::load_or_default;

use crate::config::BrowserStore;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelStore(pub WheelState);

impl Reducible for WheelStore {
    type Action = WheelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

/// Wheel state. Starts on the built-in wheel and swaps in the stored
/// configuration once mounted.
#[hook]
pub fn use_wheel() -> UseReducerHandle<WheelStore> {
    let wheel = use_reducer(WheelStore::default);

    {
        let dispatcher = wheel.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(WheelAction::ConfigurationLoaded(load_or_default(&BrowserStore)));
            || ()
        });
    }

    wheel
}

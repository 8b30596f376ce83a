use web_sys::window;
use yew::prelude::*;

const PIECES: usize = 80;
const COLORS: [&str; 5] = ["#dc2626", "#16a34a", "#eab308", "#3b82f6", "#ec4899"];

const CONFETTI_CSS: &str = r#"
@keyframes confetti-fall {
    0% {
        transform: translateY(-10vh) rotate(0deg);
        opacity: 1;
    }
    100% {
        transform: translateY(110vh) rotate(720deg);
        opacity: 0.2;
    }
}

.confetti-piece {
    position: absolute;
    top: 0;
    width: 10px;
    height: 16px;
    border-radius: 2px;
    animation-name: confetti-fall;
    animation-timing-function: linear;
    animation-fill-mode: forwards;
}
"#;

// Spread pieces without a random source; the pattern only needs to look scattered.
fn piece_style(index: usize) -> String {
    let left = (index * 37) % 100;
    let delay = (index * 53) % 900;
    let duration = 2000 + (index * 71) % 1000;
    let color = COLORS[index % COLORS.len()];
    format!(
        "left: {}%; background: {}; animation-delay: {}ms; animation-duration: {}ms;",
        left, color, delay, duration
    )
}

#[function_component(Confetti)]
pub fn confetti() -> Html {
    use_effect_with((), move |_| {
        let style_element = window()
            .and_then(|w| w.document())
            .and_then(|document| {
                let head = document.head()?;
                let style = document.create_element("style").ok()?;
                style.set_text_content(Some(CONFETTI_CSS));
                head.append_child(&style).ok()?;
                Some(style)
            });

        move || {
            if let Some(style) = style_element {
                if let Some(parent) = style.parent_node() {
                    let _ = parent.remove_child(&style);
                }
            }
        }
    });

    html! {
        <div class="pointer-events-none fixed inset-0 z-50 overflow-hidden" aria-hidden="true">
            { for (0..PIECES).map(|i| html! { <div key={i} class="confetti-piece" style={piece_style(i)} /> }) }
        </div>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RarePopupProps {
    #[prop_or_default]
    pub item: Option<AttrValue>,
}

#[function_component(RarePopup)]
pub fn rare_popup(props: &RarePopupProps) -> Html {
    let Some(item) = props.item.clone() else {
        return Html::default();
    };
    html! {
        <div class="rare-popup" role="status" aria-live="polite">
            { "✨ You unlocked a " }<b>{ item }</b>{ "! 💎" }
        </div>
    }
}

/// Hands out a token per shown popup; only the newest token may hide it.
#[derive(Debug, Default)]
pub struct PopupTimer {
    generation: u64,
}

impl PopupTimer {
    /// Start a new hide countdown, invalidating any pending one.
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    #[must_use]
    pub const fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }
}

use smartbin_core::WasteCategory;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ThrowPageProps {
    /// Result lines of the last detection.
    #[prop_or_default]
    pub lines: Vec<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Emits the raw `<select>` value; an empty string means nothing was chosen.
    pub on_detect: Callback<String>,
}

#[function_component(ThrowPage)]
pub fn throw_page(props: &ThrowPageProps) -> Html {
    let selection = use_state(String::new);

    let on_change = {
        let selection = selection.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                selection.set(select.value());
            }
        })
    };
    let on_detect = {
        let cb = props.on_detect.clone();
        let selection = selection.clone();
        Callback::from(move |_| cb.emit((*selection).clone()))
    };

    html! {
        <section class="panel throw">
            <h1>{ "Throw Waste" }</h1>
            <label for="waste-select">{ "Waste type" }</label>
            <select id="waste-select" onchange={on_change}>
                <option value="" selected={selection.is_empty()}>{ "-- Select --" }</option>
                { for WasteCategory::ALL.iter().map(|category| html! {
                    <option value={category.key()} selected={*selection == category.key()}>
                        { category.label() }
                    </option>
                }) }
            </select>
            <button type="button" id="detect-btn" onclick={on_detect}>{ "Detect" }</button>
            if let Some(error) = props.error.clone() {
                <p class="error" role="alert">{ error }</p>
            }
            <div class="detection-result" aria-live="polite">
                { for props.lines.iter().map(|line| html! { <p>{ line.clone() }</p> }) }
            </div>
        </section>
    }
}

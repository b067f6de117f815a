use smartbin_core::RewardItem;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RewardsPageProps {
    pub balance: u64,
    pub items: Vec<RewardItem>,
    #[prop_or_default]
    pub message: Option<AttrValue>,
    /// Emits the id of the item to buy.
    pub on_buy: Callback<String>,
}

#[function_component(RewardsPage)]
pub fn rewards_page(props: &RewardsPageProps) -> Html {
    let cards = props.items.iter().map(|item| {
        let on_click = {
            let cb = props.on_buy.clone();
            let id = item.id.clone();
            Callback::from(move |_| cb.emit(id.clone()))
        };
        let class = classes!("reward-card", item.is_rare().then_some("rare"));
        html! {
            <li key={item.id.clone()} class={class}>
                <h2>{ item.name.clone() }</h2>
                if !item.desc.is_empty() {
                    <p class="desc">{ item.desc.clone() }</p>
                }
                <p class="cost">{ format!("{} coins", item.cost) }</p>
                <button type="button" onclick={on_click}>{ "Buy" }</button>
            </li>
        }
    });
    html! {
        <section class="panel rewards">
            <h1>{ "Rewards Shop" }</h1>
            <p class="balance">{ format!("Balance: {} coins", props.balance) }</p>
            if let Some(message) = props.message.clone() {
                <p class="shop-message" role="status">{ message }</p>
            }
            <ul class="reward-grid">
                { for cards }
            </ul>
        </section>
    }
}

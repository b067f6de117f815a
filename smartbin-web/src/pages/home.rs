use crate::paths::asset_path;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub username: AttrValue,
    pub points: u64,
    pub balance: u64,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    html! {
        <section class="panel home">
            <img class="logo" src={asset_path("static/img/smartbin.svg")} alt="" />
            <h1>{ format!("Welcome, {}!", props.username) }</h1>
            <p class="balance">{ format!("Balance: {} coins", props.balance) }</p>
            <p class="points">{ format!("Eco-points: {}", props.points) }</p>
            <p>{ "Sort your waste, let the bin confirm it, and spend what you earn in the rewards shop." }</p>
        </section>
    }
}

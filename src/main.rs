use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod api;
mod format;
mod model;

use model::{DisplayBalance, DisplayTransaction};

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Loaded {
        transactions: Vec<DisplayTransaction>,
        balance: DisplayBalance,
    },
    Failed(String),
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="app-header">
            <div class="header-content">
                <span class="logo">{"GoFinances"}</span>
                <nav>
                    <a class="active" href="/">{"Listagem"}</a>
                </nav>
            </div>
        </header>
    }
}

#[function_component(Dashboard)]
fn dashboard() -> Html {
    let state = use_state(|| LoadState::Loading);
    let reload = use_state(|| 0u32);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_transactions().await {
                        Ok(resp) => {
                            let transactions = resp
                                .transactions
                                .iter()
                                .map(DisplayTransaction::from_raw)
                                .collect::<Vec<_>>();
                            let balance = DisplayBalance::from_raw(&resp.balance);
                            state.set(LoadState::Loaded {
                                transactions,
                                balance,
                            });
                        }
                        Err(err) => {
                            gloo_console::error!(format!(
                                "failed to load transactions: {err}"
                            ));
                            state.set(LoadState::Failed(err.to_string()));
                        }
                    }
                });
                || ()
            },
            *reload,
        );
    }

    let on_retry = {
        let state = state.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            state.set(LoadState::Loading);
            reload.set(*reload + 1);
        })
    };

    let (transactions, balance) = match &*state {
        LoadState::Loaded {
            transactions,
            balance,
        } => (transactions.clone(), balance.clone()),
        _ => (Vec::new(), DisplayBalance::empty()),
    };

    html! {
        <div class="container">
            <div class="card-container">
                <div class="card">
                    <header>
                        <p>{"Entradas"}</p>
                        { icon_trending_up() }
                    </header>
                    <h1 data-testid="balance-income">{ format!("R$ {},00", balance.income) }</h1>
                </div>
                <div class="card">
                    <header>
                        <p>{"Saídas"}</p>
                        { icon_trending_down() }
                    </header>
                    <h1 data-testid="balance-outcome">{ format!("- R$ {},00", balance.outcome) }</h1>
                </div>
                <div class="card total">
                    <header>
                        <p>{"Total"}</p>
                        { icon_wallet() }
                    </header>
                    <h1 data-testid="balance-total">{ format!("R$ {},00", balance.total) }</h1>
                </div>
            </div>

            {
                if let LoadState::Failed(reason) = &*state {
                    html! {
                        <div class="load-error">
                            <p>{ format!("Não foi possível carregar as transações ({reason})") }</p>
                            <button onclick={on_retry}>{"Tentar novamente"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>{"Título"}</th>
                            <th>{"Preço"}</th>
                            <th>{"Categoria"}</th>
                            <th>{"Data"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for transactions.iter().map(|tx| {
                            html! {
                                <tr key={tx.id.clone()}>
                                    <td class="title">{ &tx.title }</td>
                                    <td class={tx.kind.css_class()}>{ tx.signed_value() }</td>
                                    <td>{ &tx.category }</td>
                                    <td>{ &tx.date }</td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <Header />
            <Dashboard />
        </>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
fn icon_trending_down() -> Html {
    icon_base("M3 7l6 6 4-4 7 7")
}
fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

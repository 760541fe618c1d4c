//! Period balance panel for the home page.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::types::Balance;

/// Four-cell balance summary for the period given by the `from`/`to`
/// query params (`yyyy-MM-dd`).
#[component]
pub fn BalancePanel() -> impl IntoView {
    let query = use_query_map();

    // Refetches whenever the period in the URL changes.
    let balance = LocalResource::new(move || {
        let from = query.get().get("from").unwrap_or_default();
        let to = query.get().get("to").unwrap_or_default();
        fetch_balance(from, to)
    });

    view! {
        <div class="balance-panel">
            <Suspense fallback=move || view! { <p>"Loading balance..."</p> }>
                {move || {
                    balance
                        .get()
                        .map(|result| match result {
                            Some(b) => {
                                view! {
                                    <div class="balance-panel__grid">
                                        <BalanceItem label="Balance" amount=b.balance/>
                                        <BalanceItem label="Earnings" amount=b.earnings/>
                                        <BalanceItem label="Expenses" amount=b.expenses/>
                                        <BalanceItem label="Investments" amount=b.investments/>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! { <p class="balance-panel__error">"Balance unavailable."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// A single labeled amount cell.
#[component]
fn BalanceItem(label: &'static str, amount: f64) -> impl IntoView {
    view! {
        <div class="balance-item">
            <span class="balance-item__label">{label}</span>
            <span class="balance-item__amount">{format!("{amount:.2}")}</span>
        </div>
    }
}

async fn fetch_balance(from: String, to: String) -> Option<Balance> {
    #[cfg(feature = "hydrate")]
    {
        match crate::net::users::fetch_balance(&from, &to).await {
            Ok(balance) => Some(balance),
            Err(err) => {
                leptos::logging::warn!("balance fetch failed: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (from, to);
        None
    }
}

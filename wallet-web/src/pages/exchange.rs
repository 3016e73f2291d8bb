//! Exchange Page - convert ECO tokens into SOL, stablecoins or fiat

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use lib_core::config::core_config;
use lib_core::exchange::{fee_label, ExchangeCalculator, ExchangeQuote, RateTable};
use lib_core::Result;
use lib_utils::time::{format_relative, now_utc};
use shared::dto::ExchangeRecord;
use shared::utils::group_thousands;

use crate::components::{AppHeader, WalletButton};
use crate::state::data::use_data_context;
use crate::utils::constants::{EXCHANGE_ABOUT, EXCHANGE_NOTICE, TOKEN_SYMBOL};

/// Whether the confirm button may be pressed for `quote` against `balance`.
fn can_confirm(quote: &Result<ExchangeQuote>, balance: Option<u64>) -> bool {
    match (quote, balance) {
        (Ok(quote), Some(balance)) => {
            quote.is_confirmable() && quote.ensure_affordable(balance).is_ok()
        }
        _ => false,
    }
}

/// Inline warning shown under the form, if any.
fn quote_warning(quote: &Result<ExchangeQuote>, balance: Option<u64>) -> Option<String> {
    match quote {
        Err(e) => Some(e.user_message()),
        Ok(quote) => balance
            .and_then(|balance| quote.ensure_affordable(balance).err())
            .map(|e| e.user_message()),
    }
}

#[component]
pub fn ExchangePage() -> impl IntoView {
    let data = use_data_context();
    let table = RateTable::builtin();
    let calculator = ExchangeCalculator::new(table);

    let amount = RwSignal::new(String::new());
    let currency = RwSignal::new(core_config().default_currency.clone());
    let (balance, set_balance) = signal(None::<u64>);
    let (history, set_history) = signal(Vec::<ExchangeRecord>::new());
    let (notice, set_notice) = signal(None::<String>);

    spawn_local(async move {
        let provider = data.provider();
        match provider.user_profile().await {
            Ok(profile) => set_balance.set(Some(profile.stats.eco_balance)),
            Err(e) => log::warn!("Failed to load balance: {}", e),
        }
        match provider.recent_exchanges().await {
            Ok(records) => set_history.set(records),
            Err(e) => log::warn!("Failed to load exchange history: {}", e),
        }
    });

    let quote = Memo::new(move |_| {
        amount.with(|amount| currency.with(|currency| calculator.quote(amount, currency)))
    });

    let selected = move || table.get(&currency.get()).ok().cloned();

    let on_confirm = move |_| {
        let current = quote.get();
        if let Ok(q) = current {
            log::info!(
                "Exchange requested: {} {} -> {} {}",
                q.amount,
                TOKEN_SYMBOL,
                q.net_display(),
                q.currency
            );
            set_notice.set(Some(format!(
                "Intercambio enviado: recibirás {} {}",
                q.net_display(),
                q.symbol
            )));
            amount.set(String::new());
        }
    };

    view! {
        <div class="exchange">
            <AppHeader home="/dashboard">
                <WalletButton/>
                <A href="/dashboard">
                    <span class="btn btn-ghost btn-sm">"Volver al Dashboard"</span>
                </A>
            </AppHeader>

            <div class="page-inner">
                <div class="page-heading">
                    <div class="feature-icon">"⇄"</div>
                    <div>
                        <h1>"Intercambio de Tokens"</h1>
                        <p class="text-muted">"Convierte tus eco-tokens en diferentes monedas"</p>
                    </div>
                </div>

                <div class="card card-highlight">
                    <div>
                        <div class="text-sm">"Balance Disponible"</div>
                        <div class="stat-value">
                            {move || balance.get().map(group_thousands).unwrap_or_else(|| "-".to_string())}
                        </div>
                        <div class="text-sm">"Eco-Tokens"</div>
                    </div>
                    <div class="mascot">"🪙"</div>
                </div>

                <div class="exchange-grid">
                    <div class="exchange-main">
                        <div class="card">
                            <h2>"Realizar Intercambio"</h2>

                            <label class="field-label">"Desde"</label>
                            <div class="field">
                                <input
                                    type="number"
                                    placeholder="0.00"
                                    prop:value=move || amount.get()
                                    on:input=move |ev| {
                                        set_notice.set(None);
                                        amount.set(event_target_value(&ev));
                                    }
                                />
                                <span class="field-suffix">{TOKEN_SYMBOL}</span>
                            </div>

                            <div class="exchange-arrow">"↓"</div>

                            <label class="field-label">"Hacia"</label>
                            <div class="field">
                                <input
                                    type="text"
                                    readonly=true
                                    prop:value=move || quote.with(|q| q.as_ref().map(|q| q.gross_display()).unwrap_or_default())
                                />
                                <select
                                    prop:value=move || currency.get()
                                    on:change=move |ev| currency.set(event_target_value(&ev))
                                >
                                    {table
                                        .iter()
                                        .map(|c| view! { <option value=c.code>{format!("{} {}", c.icon, c.symbol)}</option> })
                                        .collect::<Vec<_>>()}
                                </select>
                            </div>

                            <div class="exchange-info">
                                <div class="info-row">
                                    <span class="text-muted">"Tasa de Cambio"</span>
                                    <span>{move || selected().map(|c| c.rate_label()).unwrap_or_default()}</span>
                                </div>
                                <div class="info-row">
                                    <span class="text-muted">"Comisión de Red"</span>
                                    <span>{fee_label()}</span>
                                </div>
                                <div class="info-row info-total">
                                    <span>"Recibirás"</span>
                                    <span>
                                        {move || quote.with(|q| match q {
                                            Ok(q) => format!("{} {}", q.net_display(), q.symbol),
                                            Err(_) => "-".to_string(),
                                        })}
                                    </span>
                                </div>
                            </div>

                            {move || {
                                quote
                                    .with(|q| quote_warning(q, balance.get()))
                                    .map(|message| view! { <div class="error">{message}</div> })
                            }}
                            {move || notice.get().map(|message| view! { <div class="info">{message}</div> })}

                            <button
                                class="btn btn-lg btn-block"
                                disabled=move || !quote.with(|q| can_confirm(q, balance.get()))
                                on:click=on_confirm
                            >
                                "⇄ Confirmar Intercambio"
                            </button>

                            <p class="text-muted text-sm">"ⓘ " {EXCHANGE_NOTICE}</p>
                        </div>

                        <div class="card">
                            <h3>"Transacciones Recientes"</h3>
                            <div class="list">
                                {move || {
                                    let now = now_utc();
                                    history
                                        .get()
                                        .into_iter()
                                        .map(|record| {
                                            view! {
                                                <div class="list-row">
                                                    <div class="list-body">
                                                        <div>{record.summary()}</div>
                                                        <div class="text-muted text-sm">{format_relative(record.executed_at, now)}</div>
                                                    </div>
                                                    <span class="badge badge-muted">{record.status.label()}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </div>
                    </div>

                    <div class="exchange-side">
                        <h3>"Monedas Disponibles"</h3>
                        {table
                            .iter()
                            .map(|c| {
                                let code = c.code;
                                let is_selected = move || currency.with(|current| current == code);
                                view! {
                                    <div
                                        class=move || if is_selected() { "card currency-card selected" } else { "card currency-card" }
                                        on:click=move |_| currency.set(code.to_string())
                                    >
                                        <div class="card-header">
                                            <div class="currency-title">
                                                <span class="currency-icon">{c.icon}</span>
                                                <div>
                                                    <div>{c.name}</div>
                                                    <div class="text-muted text-sm">{c.symbol}</div>
                                                </div>
                                            </div>
                                            {move || is_selected().then(|| view! { <span class="badge badge-primary">"Seleccionado"</span> })}
                                        </div>
                                        <div class="text-sm">"📈 " {c.rate_label()}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}

                        <div class="card">
                            <div>"ⓘ Sobre los Intercambios"</div>
                            <div class="text-muted text-sm">{EXCHANGE_ABOUT}</div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(amount: &str, currency: &str) -> Result<ExchangeQuote> {
        ExchangeCalculator::default().quote(amount, currency)
    }

    #[test]
    fn test_confirm_requires_positive_affordable_amount() {
        assert!(can_confirm(&quote("500", "SOL"), Some(1235)));
        assert!(!can_confirm(&quote("", "SOL"), Some(1235)));
        assert!(!can_confirm(&quote("0", "SOL"), Some(1235)));
        assert!(!can_confirm(&quote("5000", "SOL"), Some(1235)));
        assert!(!can_confirm(&quote("500", "SOL"), None));
        assert!(!can_confirm(&quote("500", "BTC"), Some(1235)));
    }

    #[test]
    fn test_quote_warning() {
        assert_eq!(quote_warning(&quote("500", "SOL"), Some(1235)), None);
        assert_eq!(
            quote_warning(&quote("5000", "SOL"), Some(1235)).as_deref(),
            Some("Balance insuficiente")
        );
        assert!(quote_warning(&quote("1", "BTC"), None).is_some());
    }
}

//! Eco-Eeelien Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::pages::{DashboardPage, ExchangePage, LandingPage};
use crate::state::data::provide_data_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    // One wallet session and one data provider for the whole app
    provide_wallet_context();
    provide_data_context();

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/exchange") view=ExchangePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Página no encontrada"</h1>
                <p class="text-muted" style="margin-bottom: 24px;">"La página que buscas no existe."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Volver al Inicio"
                    </span>
                </A>
            </div>
        </div>
    }
}

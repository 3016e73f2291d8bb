//! Navigation bars

use leptos::prelude::*;
use leptos_router::components::A;

use super::WalletButton;

#[component]
fn Logo() -> impl IntoView {
    view! {
        <span class="nav-title">
            <span class="eco-green">"Eco"</span><span class="eco-white">"-Eeelien"</span>
        </span>
    }
}

/// Landing page navigation with section anchors
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <Logo/>
                </A>
                <div class="nav-links">
                    <a href="#features" class="nav-link">"Características"</a>
                    <a href="#impact" class="nav-link">"Impacto"</a>
                    <a href="#partners" class="nav-link">"Aliados"</a>
                    <A href="/exchange" attr:class="nav-link">"Intercambio"</A>
                </div>
                <div class="nav-actions">
                    <WalletButton/>
                    <A href="/dashboard">
                        <span class="btn btn-outline">"Abrir App"</span>
                    </A>
                </div>
            </div>
        </nav>
    }
}

/// Header for the app screens; `children` fill the right-hand side
#[component]
pub fn AppHeader(#[prop(into)] home: String, children: Children) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="nav-inner">
                <A href=home attr:class="nav-link-clean">
                    <Logo/>
                </A>
                <div class="nav-actions">
                    {children()}
                </div>
            </div>
        </header>
    }
}

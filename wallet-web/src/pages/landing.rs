//! Landing Page - hero, how it works, impact and footer

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use shared::dto::PlatformStats;
use shared::utils::compact_count;

use crate::components::Navbar;
use crate::state::data::use_data_context;

struct Step {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

static STEPS: [Step; 3] = [
    Step {
        icon: "📱",
        title: "Escanea con NFC",
        body: "Abre la app y acerca tu teléfono a cualquier contenedor inteligente Eco-Eeelien para iniciar tu sesión de reciclaje.",
    },
    Step {
        icon: "♻️",
        title: "Deposita Botellas",
        body: "Inserta tus botellas de plástico en el contenedor. Cada botella se cuenta y verifica automáticamente.",
    },
    Step {
        icon: "🏆",
        title: "Gana Recompensas",
        body: "Recibe eco-tokens al instante. Canjéalos por descuentos, NFTs o dona a causas ambientales.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let data = use_data_context();
    let (stats, set_stats) = signal(None::<PlatformStats>);

    spawn_local(async move {
        match data.provider().platform_stats().await {
            Ok(loaded) => set_stats.set(Some(loaded)),
            Err(e) => log::warn!("Failed to load platform stats: {}", e),
        }
    });

    let stat = move |pick: fn(&PlatformStats) -> u64| {
        move || {
            stats
                .get()
                .map(|s| compact_count(pick(&s)))
                .unwrap_or_else(|| "-".to_string())
        }
    };

    view! {
        <div class="landing">
            <Navbar/>

            <section class="hero">
                <div class="section-inner hero-grid">
                    <div>
                        <div class="pill">"🍃 Reciclaje Reimaginado"</div>
                        <h1 class="hero-title">"Cambia tu mundo"</h1>
                        <p class="hero-lead">
                            "Únete a la revolución del reciclaje. Deposita botellas de plástico en contenedores inteligentes, \
                             gana eco-tokens y desbloquea recompensas exclusivas mientras salvas el planeta."
                        </p>
                        <div class="hero-actions">
                            <A href="/dashboard">
                                <span class="btn btn-lg">"Comenzar a Reciclar"</span>
                            </A>
                            <button class="btn btn-lg btn-outline">"Ver Demo"</button>
                        </div>
                        <div class="hero-stats">
                            <div>
                                <div class="stat-value">{stat(|s| s.bottles_recycled)}</div>
                                <div class="stat-label">"Botellas Recicladas"</div>
                            </div>
                            <div>
                                <div class="stat-value">{stat(|s| s.active_users)}</div>
                                <div class="stat-label">"Usuarios Activos"</div>
                            </div>
                            <div>
                                <div class="stat-value">{stat(|s| s.smart_containers)}</div>
                                <div class="stat-label">"Contenedores Inteligentes"</div>
                            </div>
                        </div>
                    </div>
                    <div class="hero-art">
                        <img src="/eco-friendly-recycling-app-interface-with-alien-ma.jpg" alt="App Eco-Eeelien"/>
                    </div>
                </div>
            </section>

            <section id="features" class="section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>"Cómo Funciona"</h2>
                        <p class="text-muted">"Tres simples pasos para comenzar a ganar recompensas por reciclar"</p>
                    </div>
                    <div class="grid-3">
                        {STEPS
                            .iter()
                            .map(|step| {
                                view! {
                                    <div class="card feature">
                                        <div class="feature-icon">{step.icon}</div>
                                        <h3>{step.title}</h3>
                                        <p class="text-muted">{step.body}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <section id="impact" class="section section-alt">
                <div class="section-inner hero-grid">
                    <div class="hero-art">
                        <img src="/environmental-impact-data-visualization-with-recyc.jpg" alt="Impacto Ambiental"/>
                    </div>
                    <div>
                        <h2>"Impacto Real, Cambio Real"</h2>
                        <p class="text-muted">
                            "Cada botella que reciclas contribuye a un planeta más limpio. Rastrea tu impacto personal \
                             y observa cómo la comunidad está marcando la diferencia juntos."
                        </p>
                        <div class="impact-item">
                            <div class="feature-icon">"📈"</div>
                            <div>
                                <h3>"Rastrea tu Progreso"</h3>
                                <p class="text-muted">
                                    "Visualiza estadísticas detalladas sobre botellas recicladas, CO2 ahorrado y la \
                                     reducción de tu huella ambiental."
                                </p>
                            </div>
                        </div>
                        <div class="impact-item">
                            <div class="feature-icon">"👥"</div>
                            <div>
                                <h3>"Desafíos Comunitarios"</h3>
                                <p class="text-muted">
                                    "Compite con amigos y únete a desafíos de toda la ciudad para desbloquear \
                                     recompensas y logros especiales."
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id="partners" class="section cta">
                <div class="section-inner" style="text-align: center;">
                    <h2>"¿Listo para Hacer la Diferencia?"</h2>
                    <p>
                        "Únete a miles de usuarios que están convirtiendo sus hábitos de reciclaje en recompensas \
                         e impacto ambiental."
                    </p>
                    <A href="/dashboard">
                        <span class="btn btn-lg btn-secondary">"Comenzar Ahora"</span>
                    </A>
                </div>
            </section>

            <footer class="footer">
                <div class="section-inner">
                    <p class="text-muted">"Gamificando el reciclaje para un futuro sostenible."</p>
                    <div class="footer-columns">
                        <FooterColumn title="Producto" links=&["Características", "Cómo Funciona", "Recompensas"]/>
                        <FooterColumn title="Empresa" links=&["Nosotros", "Aliados", "Contacto"]/>
                        <FooterColumn title="Legal" links=&["Privacidad", "Términos"]/>
                    </div>
                    <div class="footer-legal">"© 2025 Eco-Eeelien. Todos los derechos reservados."</div>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn FooterColumn(title: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h4>{title}</h4>
            <ul>
                {links
                    .iter()
                    .map(|label| view! { <li><a href="#" class="footer-link">{*label}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

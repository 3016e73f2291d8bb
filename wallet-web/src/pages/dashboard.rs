//! Dashboard Page - personal stats, weekly challenge, activity, rewards and leaderboard

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use lib_core::data::EcoDataProvider;
use lib_core::Result;
use lib_utils::time::{format_relative, now_utc};
use shared::dto::{
    Achievement, ActivityEntry, BadgeSize, LeaderboardEntry, Reward, UserProfile, WeeklyChallenge,
};
use shared::utils::group_thousands;

use crate::components::{AppHeader, KycBadge};
use crate::state::data::use_data_context;
use crate::utils::constants::{ACTIVITY_LIMIT, LEADERBOARD_LIMIT};
use crate::utils::format::{
    format_bottles, format_co2, format_days_remaining, format_rank, format_today,
    format_token_cost,
};

/// Everything the dashboard renders, loaded in one pass
#[derive(Clone)]
struct DashboardData {
    profile: UserProfile,
    challenge: WeeklyChallenge,
    activity: Vec<ActivityEntry>,
    achievements: Vec<Achievement>,
    rewards: Vec<Reward>,
    leaderboard: Vec<LeaderboardEntry>,
}

async fn load(provider: &dyn EcoDataProvider) -> Result<DashboardData> {
    Ok(DashboardData {
        profile: provider.user_profile().await?,
        challenge: provider.weekly_challenge().await?,
        activity: provider.list_activity(ACTIVITY_LIMIT).await?,
        achievements: provider.list_achievements().await?,
        rewards: provider.list_rewards().await?,
        leaderboard: provider.list_leaderboard(LEADERBOARD_LIMIT).await?,
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let data = use_data_context();
    let (dashboard, set_dashboard) = signal(None::<DashboardData>);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);

    let reload = move || {
        spawn_local(async move {
            let provider = data.provider();
            match load(provider.as_ref()).await {
                Ok(loaded) => set_dashboard.set(Some(loaded)),
                Err(e) => {
                    log::warn!("Failed to load dashboard: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };
    reload();

    let redeem = move |reward_name: String| {
        spawn_local(async move {
            match data.provider().redeem_reward(&reward_name).await {
                Ok(record) => {
                    log::info!("Redeemed {} for {} ECO", record.product_id, record.amount);
                    set_error.set(None);
                    set_notice.set(Some(format!(
                        "Canjeaste {} tokens por {}",
                        record.amount, record.product_id
                    )));
                    reload();
                }
                Err(e) => {
                    log::warn!("Redemption of {} failed: {}", reward_name, e);
                    set_notice.set(None);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="dashboard">
            {move || {
                let initials = dashboard.with(|d| d.as_ref().map(|d| d.profile.initials.clone()));
                view! {
                    <AppHeader home="/">
                        <button class="btn btn-ghost btn-sm">"👥 Tabla de Posiciones"</button>
                        <A href="/exchange">
                            <span class="btn btn-ghost btn-sm">"Intercambio"</span>
                        </A>
                        <div class="avatar">{initials}</div>
                    </AppHeader>
                }
            }}

            <div class="page-inner">
                {move || error.get().map(|message| view! { <div class="error">{message}</div> })}
                {move || notice.get().map(|message| view! { <div class="info">{message}</div> })}

                {move || match dashboard.get() {
                    Some(d) => render_dashboard(d, redeem).into_any(),
                    None => view! { <p class="text-muted">"Cargando..."</p> }.into_any(),
                }}
            </div>
        </div>
    }
}

fn render_dashboard(d: DashboardData, on_redeem: impl Fn(String) + Copy + 'static) -> impl IntoView {
    let stats = d.profile.stats.clone();
    let balance = stats.eco_balance;
    let now = now_utc();

    view! {
        <div class="welcome">
            <h1>
                {format!("Bienvenido de nuevo, {}!", d.profile.display_name)}
                " "
                <KycBadge status=d.profile.kyc size=BadgeSize::Sm/>
            </h1>
            <p class="text-muted">
                {format!(
                    "Has reciclado {} botellas este mes. ¡Sigue con el gran trabajo!",
                    stats.bottles_this_month
                )}
            </p>
        </div>

        <div class="grid-4">
            <StatCard icon="♻️" value=stats.bottles_recycled.to_string() label="Botellas Recicladas" today=Some(u64::from(stats.bottles_today))/>
            <StatCard icon="🪙" value=group_thousands(balance) label="Eco-Tokens" today=Some(stats.tokens_today)/>
            <StatCard icon="🍃" value=format_co2(stats.co2_saved_kg) label="CO₂ Ahorrado" today=None/>
            <StatCard icon="🏆" value=stats.achievements_unlocked.to_string() label="Logros" today=None/>
        </div>

        <div class="dashboard-grid">
            <div class="dashboard-main">
                <div class="card card-highlight">
                    <div>
                        <h2>"¿Listo para Reciclar?"</h2>
                        <p>"Encuentra el contenedor inteligente más cercano y comienza a ganar tokens"</p>
                        <button class="btn btn-lg btn-secondary">"⚡ Escanear Contenedor NFC"</button>
                    </div>
                    <div class="mascot">"👽"</div>
                </div>

                {render_challenge(d.challenge)}

                <div class="card">
                    <h3>"Actividad Reciente"</h3>
                    <div class="list">
                        {d.activity
                            .into_iter()
                            .map(|entry| {
                                let delta_class = if entry.is_credit() { "delta credit" } else { "delta debit" };
                                view! {
                                    <div class="list-row">
                                        <div class="list-icon">{entry.kind.icon()}</div>
                                        <div class="list-body">
                                            <div>{entry.description.clone()}</div>
                                            <div class="text-muted text-sm">{format_relative(entry.occurred_at, now)}</div>
                                        </div>
                                        <div class=delta_class>{entry.delta_label()}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="dashboard-side">
                <div class="card">
                    <div class="card-header">
                        <h3>"Logros"</h3>
                        <button class="btn btn-ghost btn-sm">"Ver Todos ›"</button>
                    </div>
                    <div class="grid-3">
                        {d.achievements
                            .into_iter()
                            .map(|achievement| {
                                let class = if achievement.unlocked { "achievement" } else { "achievement locked" };
                                view! {
                                    <div class=class>
                                        <span class="achievement-emoji">{achievement.emoji}</span>
                                        <span class="text-sm">{achievement.name}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="card">
                    <h3>"Recompensas Disponibles"</h3>
                    <div class="list">
                        {d.rewards
                            .into_iter()
                            .map(|reward| {
                                let affordable = reward.is_affordable(balance);
                                let class = if affordable { "list-row clickable" } else { "list-row disabled" };
                                let name = reward.name.clone();
                                view! {
                                    <div
                                        class=class
                                        on:click=move |_| {
                                            if affordable {
                                                on_redeem(name.clone());
                                            }
                                        }
                                    >
                                        <div class="list-icon">{reward.icon}</div>
                                        <div class="list-body">
                                            <div>{reward.name}</div>
                                            <div class="text-muted text-sm">{format_token_cost(reward.cost)}</div>
                                        </div>
                                        <span>"›"</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <button class="btn btn-outline btn-block">"Ver Todas las Recompensas"</button>
                </div>

                <div class="card">
                    <div class="card-header">
                        <h3>"Top Recicladores"</h3>
                        <span class="badge badge-muted">{format_rank(d.profile.leaderboard_position)}</span>
                    </div>
                    <div class="list">
                        {d.leaderboard
                            .into_iter()
                            .map(|entry| {
                                let class = if entry.rank == 1 { "rank rank-first" } else { "rank" };
                                view! {
                                    <div class="list-row">
                                        <div class=class>{entry.rank}</div>
                                        <div class="list-body">
                                            <div>{entry.name}</div>
                                            <div class="text-muted text-sm">{format_bottles(entry.bottles)}</div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </div>
    }
}

fn render_challenge(challenge: WeeklyChallenge) -> impl IntoView {
    let percent = challenge.progress_percent();

    view! {
        <div class="card">
            <div class="card-header">
                <h3>"Desafío Semanal"</h3>
                <span class="badge badge-accent">{format_days_remaining(challenge.days_remaining)}</span>
            </div>
            <div class="progress-label">
                <span>{challenge.title}</span>
                <span>{format!("{}/{}", challenge.progress_bottles, challenge.target_bottles)}</span>
            </div>
            <div class="progress">
                <div class="progress-bar" style=format!("width: {}%;", percent)></div>
            </div>
            <div class="challenge-reward">
                <span class="list-icon">"🎁"</span>
                <div>{format!("Recompensa: {}", challenge.bonus_reward)}</div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    icon: &'static str,
    value: String,
    label: &'static str,
    today: Option<u64>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="card-header">
                <div class="stat-icon">{icon}</div>
                {today.map(|delta| view! { <span class="badge badge-muted">{format_today(delta)}</span> })}
            </div>
            <div class="stat-value">{value}</div>
            <div class="text-muted text-sm">{label}</div>
        </div>
    }
}

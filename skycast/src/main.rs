//! skycast binary
//!
//! 1. Terminal event -> Dashboard.handle_event() -> actions
//! 2. Actions go through the EffectStore; the reducer returns effects
//! 3. Effects become tasks on the TaskManager (geolocation, HTTP)
//! 4. Task results come back as actions
//! 5. Changed state is redrawn
//!
//! ```sh
//! SKYCAST_API_KEY=... skycast
//! skycast --city Lisbon --theme dark
//! ```

use std::cell::RefCell;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::Terminal;
use skycast_core::{Geolocator, WeatherClient};
use skycast_dispatch::{
    EffectContext, EffectRuntime, EffectStore, EventKind, EventOutcome, TracingMiddleware,
};

use skycast::action::Action;
use skycast::components::{Component, Dashboard, DashboardProps};
use skycast::config::{Args, Config};
use skycast::effect::Effect;
use skycast::logging;
use skycast::reducer::reducer;
use skycast::state::{AppState, LOADING_ANIM_TICK_MS};
use skycast::terminal;
use skycast::zone::ViewZone;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load(Args::parse())?;
    logging::init(&config.log_file)?;

    let client = WeatherClient::with_base_url(
        config.api_key.clone(),
        config.units,
        &config.base_url,
        config.timeout,
    )
    .context("Failed to build HTTP client")?;
    let geolocator = Arc::new(config.geolocator());

    let mut tui = terminal::enter().context("Failed to set up terminal")?;
    let result = run_app(&mut tui, &config, client, geolocator).await;
    terminal::restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "dashboard stopped with an error");
    }
    result.context("Terminal error")
}

async fn run_app<B, G>(
    tui: &mut Terminal<B>,
    config: &Config,
    client: WeatherClient,
    geolocator: Arc<G>,
) -> io::Result<()>
where
    B: ratatui::backend::Backend,
    G: Geolocator,
{
    let store = EffectStore::with_middleware(
        AppState::new(config.theme, config.units),
        reducer,
        TracingMiddleware,
    );
    let mut runtime = EffectRuntime::from_store(store);

    runtime
        .tasks()
        .interval("tick", Duration::from_millis(LOADING_ANIM_TICK_MS), || {
            Action::Tick
        });

    match &config.city {
        Some(city) => {
            runtime.enqueue(Action::SearchInputChange(city.clone()));
            runtime.enqueue(Action::SearchSubmit);
        }
        None => runtime.enqueue(Action::AppStart),
    }

    let zone = ViewZone::Local;
    let ui = RefCell::new(Dashboard::new());

    runtime
        .run(
            tui,
            |frame, area, state| {
                let props = DashboardProps {
                    state,
                    zone,
                    is_focused: true,
                };
                ui.borrow_mut().render(frame, area, props);
            },
            |event, state| map_event(&mut ui.borrow_mut(), event, state, zone),
            |action| matches!(action, Action::Quit),
            effect_handler(client, geolocator),
        )
        .await
}

fn map_event(
    ui: &mut Dashboard,
    event: &EventKind,
    state: &AppState,
    zone: ViewZone,
) -> EventOutcome<Action> {
    if let EventKind::Resize(width, height) = event {
        return EventOutcome::action(Action::UiTerminalResize(*width, *height)).with_render();
    }

    let props = DashboardProps {
        state,
        zone,
        is_focused: true,
    };
    // The search bar cursor lives in the component, so keys always redraw
    EventOutcome::from_actions(ui.handle_event(event, props)).with_render()
}

/// Turn effects into tasks; each result comes back as an action
fn effect_handler<G: Geolocator>(
    client: WeatherClient,
    geolocator: Arc<G>,
) -> impl FnMut(Effect, &mut EffectContext<Action>) {
    move |effect, ctx| match effect {
        Effect::Locate => {
            let geolocator = Arc::clone(&geolocator);
            ctx.tasks().spawn("locate", async move {
                match geolocator.locate().await {
                    Ok(coords) => Action::LocationDidResolve(coords),
                    Err(e) => Action::LocationDidFail(e),
                }
            });
        }
        Effect::FetchCurrent { request, locator } => {
            let client = client.clone();
            ctx.tasks().spawn("current", async move {
                match client.fetch_current(&locator).await {
                    Ok(data) => Action::CurrentDidLoad { request, data },
                    Err(error) => Action::CurrentDidError { request, error },
                }
            });
        }
        Effect::FetchForecast { request, locator } => {
            let client = client.clone();
            ctx.tasks().spawn("forecast", async move {
                match client.fetch_forecast(&locator).await {
                    Ok(data) => Action::ForecastDidLoad { request, data },
                    Err(error) => Action::ForecastDidError { request, error },
                }
            });
        }
    }
}

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::app::status::render_config;
use crate::cli::commands::{Cli, Commands};
use tablemate::Config;
use tablemate::core::discovery::{MockRestaurantSearch, RestaurantSearch, recommend};
use tablemate::core::matching::{CompanionMatcher, RandomMatcher, compatibility_percent};
use tablemate::core::profile::{InMemoryProfileStore, UserProfile};
use tablemate::core::reservations::{BookingRequest, ReservationBook};
use tablemate::core::tagging::{
    GestureClassifier, ProbeCatalog, ResponseIntensity, TagDeriver, TaggingSession,
    complete_tagging,
};
use tablemate::notifications::{
    LogNotifier, Notifier, match_found, reservation_confirmed, reservation_reminder,
};
use tablemate::runtime::observability::{Observer, ObserverEvent, create_observer};

/// Per-invocation collaborators built from config.
struct Services {
    config: Arc<Config>,
    observer: Box<dyn Observer>,
    notifier: Box<dyn Notifier>,
}

impl Services {
    fn new(config: Arc<Config>) -> Self {
        let observer = create_observer(&config.observability);
        Self {
            config,
            observer,
            notifier: Box::new(LogNotifier::new()),
        }
    }
}

pub async fn dispatch(cli: Cli, config: Arc<Config>) -> Result<()> {
    let services = Services::new(config);
    let output = run(cli.command, &services).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run(command: Commands, services: &Services) -> Result<Value> {
    match command {
        Commands::Catalog => Ok(serde_json::to_value(ProbeCatalog::default_catalog())?),
        Commands::Tag {
            responses,
            swipes,
            user,
            width,
        } => run_tag(services, &responses, &swipes, &user, width).await,
        Commands::Discover {
            query,
            mood,
            cravings,
        } => run_discover(services, query.as_deref(), mood.as_deref(), &cravings).await,
        Commands::Match { user, companion } => {
            run_match(services, &user, companion.as_deref()).await
        }
        Commands::Book {
            restaurant,
            time,
            date,
            party_size,
            special_requests,
            list,
        } => {
            let book = ReservationBook::from_config(&services.config.reservations);
            if list {
                return Ok(serde_json::to_value(book.restaurants())?);
            }
            let (Some(restaurant_id), Some(time)) = (restaurant, time) else {
                bail!("--restaurant and --time are required to book");
            };
            let date = match date {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .with_context(|| format!("invalid --date '{raw}', expected YYYY-MM-DD"))?,
                None => Local::now().date_naive(),
            };
            let request = BookingRequest {
                restaurant_id,
                date,
                time,
                party_size: party_size.unwrap_or(services.config.reservations.default_party_size),
                special_requests,
                companion: None,
            };
            run_book(services, &book, request).await
        }
        Commands::Config => render_config(&services.config),
    }
}

async fn run_tag(
    services: &Services,
    responses: &[ResponseIntensity],
    swipes: &[f64],
    user: &str,
    width: f64,
) -> Result<Value> {
    let tagging = &services.config.tagging;
    let deriver = TagDeriver::from_config(Arc::new(ProbeCatalog::default_catalog()), tagging);
    let mut session = TaggingSession::new(deriver);

    if responses.is_empty() {
        let classifier = GestureClassifier::from_config(tagging);
        for &dx in swipes {
            match classifier.classify_drag(dx, width) {
                Some(intensity) => {
                    session.answer_current(intensity)?;
                }
                None => debug!(dx, width, "tagging.swipe_ignored"),
            }
        }
    } else {
        for &intensity in responses {
            session.answer_current(intensity)?;
        }
    }

    let store = InMemoryProfileStore::new();
    store.create_profile(UserProfile::new(user, format!("{user}@tablemate.local"), user))?;

    let outcome = complete_tagging(&mut session, user, &store, services.observer.as_ref()).await?;
    Ok(serde_json::to_value(outcome)?)
}

async fn run_discover(
    services: &Services,
    query: Option<&str>,
    mood: Option<&str>,
    cravings: &[String],
) -> Result<Value> {
    let discovery = &services.config.discovery;
    let search = MockRestaurantSearch::new(discovery.max_results);

    let (query_text, results) = if let Some(query) = query {
        (query.to_string(), search.search(query, None).await?)
    } else {
        let mood = mood.unwrap_or(&discovery.default_mood);
        let results = recommend(
            &search,
            mood,
            cravings,
            &[],
            discovery.recommendation_limit,
        )
        .await?;
        (format!("mood:{mood}"), results)
    };

    services.observer.record_event(&ObserverEvent::RestaurantSearch {
        query: query_text.clone(),
        results: results.len(),
    });
    Ok(json!({ "query": query_text, "restaurants": results }))
}

async fn run_match(services: &Services, user: &str, companion: Option<&str>) -> Result<Value> {
    let matcher = RandomMatcher::new(services.config.matching.match_ttl_hours);
    let candidates = matcher.candidates().await?;

    let chosen = match companion {
        Some(id) => candidates.iter().find(|c| c.id == id),
        None => candidates
            .iter()
            .max_by(|a, b| a.compatibility_score.total_cmp(&b.compatibility_score)),
    };
    let Some(chosen) = chosen else {
        bail!(
            "no online companion matches {}",
            companion.unwrap_or("the request")
        );
    };

    let assigned = matcher.request_match(user, &chosen.id).await?;
    services.observer.record_event(&ObserverEvent::MatchAssigned {
        user_id: user.to_string(),
        companion_id: chosen.id.clone(),
        counter_sign_category: assigned.counter_sign.category.clone(),
    });
    services.notifier.send(&match_found(&chosen.name)).await?;

    Ok(json!({
        "companion": chosen,
        "compatibility_percent": compatibility_percent(chosen.compatibility_score),
        "match": assigned,
    }))
}

async fn run_book(services: &Services, book: &ReservationBook, request: BookingRequest) -> Result<Value> {
    let reservation = book.book(request)?;
    services.observer.record_event(&ObserverEvent::ReservationBooked {
        restaurant: reservation.restaurant_name.clone(),
        confirmation_code: reservation.confirmation_code.clone(),
    });

    let date = reservation.date.format("%Y-%m-%d").to_string();
    services
        .notifier
        .send(&reservation_confirmed(&reservation.restaurant_name, &date, &reservation.time))
        .await?;

    if let Some(at) = reservation.reminder_at {
        let reminder = reservation_reminder(&reservation.restaurant_name, &reservation.time);
        info!(at = %at, title = %reminder.title, "reservations.reminder_scheduled");
    }

    Ok(serde_json::to_value(reservation)?)
}

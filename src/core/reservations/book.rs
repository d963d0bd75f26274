use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use super::types::{
    BookableRestaurant, BookingRequest, Reservation, ReservationStatus, TimeSlot,
    confirmation_code,
};
use crate::config::ReservationsConfig;
use crate::error::{ReservationError, Result, TablemateError};
use crate::runtime::observability::{Observer, ObserverEvent};

/// In-memory reservation ledger over a fixed set of venues.
///
/// Slot times are wall-clock labels; reminders treat them as UTC.
pub struct ReservationBook {
    restaurants: Vec<BookableRestaurant>,
    reservations: Mutex<Vec<Reservation>>,
    code_prefix: String,
    reminder_lead: Duration,
}

impl ReservationBook {
    pub fn new(code_prefix: impl Into<String>, reminder_lead_minutes: u32) -> Self {
        Self::with_restaurants(default_restaurants(), code_prefix, reminder_lead_minutes)
    }

    pub fn from_config(config: &ReservationsConfig) -> Self {
        Self::new(config.code_prefix.clone(), config.reminder_lead_minutes)
    }

    pub fn with_restaurants(
        restaurants: Vec<BookableRestaurant>,
        code_prefix: impl Into<String>,
        reminder_lead_minutes: u32,
    ) -> Self {
        Self {
            restaurants,
            reservations: Mutex::new(Vec::new()),
            code_prefix: code_prefix.into(),
            reminder_lead: Duration::minutes(i64::from(reminder_lead_minutes)),
        }
    }

    pub fn restaurants(&self) -> &[BookableRestaurant] {
        &self.restaurants
    }

    pub fn book(&self, request: BookingRequest) -> Result<Reservation> {
        self.book_at(request, Utc::now())
    }

    /// Books against an explicit clock, used to decide whether a reminder is due.
    pub fn book_at(&self, request: BookingRequest, now: DateTime<Utc>) -> Result<Reservation> {
        if request.party_size == 0 {
            return Err(ReservationError::EmptyParty.into());
        }

        let restaurant = self
            .restaurants
            .iter()
            .find(|r| r.id == request.restaurant_id)
            .ok_or_else(|| ReservationError::UnknownRestaurant(request.restaurant_id.clone()))?;

        let slot = restaurant
            .slot(&request.time)
            .ok_or_else(|| ReservationError::UnknownSlot {
                restaurant: restaurant.name.clone(),
                time: request.time.clone(),
            })?;
        if !slot.available {
            return Err(ReservationError::SlotUnavailable {
                restaurant: restaurant.name.clone(),
                time: slot.time.clone(),
            }
            .into());
        }

        let starts_at = slot_instant(request.date, &slot.time)?;
        let reminder_at = Some(starts_at - self.reminder_lead).filter(|at| *at > now);

        let mut reservations = self.lock()?;
        let reservation = Reservation {
            id: uuid::Uuid::new_v4().to_string(),
            restaurant_id: restaurant.id.clone(),
            restaurant_name: restaurant.name.clone(),
            date: request.date,
            time: slot.time.clone(),
            party_size: request.party_size,
            status: ReservationStatus::Confirmed,
            special_requests: request.special_requests.filter(|s| !s.trim().is_empty()),
            companion: request.companion,
            confirmation_code: confirmation_code(&self.code_prefix, reservations.len() + 1),
            reminder_at,
        };
        reservations.insert(0, reservation.clone());

        tracing::info!(
            restaurant = %reservation.restaurant_name,
            code = %reservation.confirmation_code,
            reminder = reminder_at.is_some(),
            "reservations.booked"
        );
        Ok(reservation)
    }

    /// Marks the reservation cancelled and drops its reminder.
    pub fn cancel(&self, reservation_id: &str, observer: &dyn Observer) -> Result<Reservation> {
        let cancelled = {
            let mut reservations = self.lock()?;
            let reservation = reservations
                .iter_mut()
                .find(|r| r.id == reservation_id)
                .ok_or_else(|| ReservationError::NotFound(reservation_id.to_string()))?;
            reservation.status = ReservationStatus::Cancelled;
            reservation.reminder_at = None;
            reservation.clone()
        };
        tracing::info!(code = %cancelled.confirmation_code, "reservations.cancelled");
        observer.record_event(&ObserverEvent::ReservationCancelled {
            reservation_id: cancelled.id.clone(),
        });
        Ok(cancelled)
    }

    /// Non-cancelled reservations, newest booking first.
    pub fn upcoming(&self) -> Result<Vec<Reservation>> {
        Ok(self
            .lock()?
            .iter()
            .filter(|r| r.is_active())
            .cloned()
            .collect())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Reservation>>> {
        self.reservations
            .lock()
            .map_err(|e| TablemateError::Other(anyhow::anyhow!("reservation book poisoned: {e}")))
    }
}

fn slot_instant(date: NaiveDate, time: &str) -> Result<DateTime<Utc>> {
    let time = NaiveTime::parse_from_str(time.trim(), "%I:%M %p")
        .map_err(|e| ReservationError::InvalidSchedule(format!("{time}: {e}")))?;
    Ok(date.and_time(time).and_utc())
}

fn slot(time: &str, price: Option<u32>) -> TimeSlot {
    TimeSlot {
        time: time.into(),
        available: price.is_some(),
        price,
    }
}

fn default_restaurants() -> Vec<BookableRestaurant> {
    vec![
        BookableRestaurant {
            id: "1".into(),
            name: "Spice Garden Thai".into(),
            cuisine: "Thai".into(),
            rating: 4.8,
            price_range: "$$".into(),
            address: "123 Main St, Downtown".into(),
            phone: "(555) 123-4567".into(),
            image: "🌶️".into(),
            slots: vec![
                slot("6:00 PM", Some(45)),
                slot("6:30 PM", Some(45)),
                slot("7:00 PM", None),
                slot("7:30 PM", Some(50)),
                slot("8:00 PM", Some(50)),
                slot("8:30 PM", Some(45)),
            ],
        },
        BookableRestaurant {
            id: "2".into(),
            name: "Bella Vista Italian".into(),
            cuisine: "Italian".into(),
            rating: 4.6,
            price_range: "$$$".into(),
            address: "456 Oak Ave, Midtown".into(),
            phone: "(555) 987-6543".into(),
            image: "🍝".into(),
            slots: vec![
                slot("5:30 PM", Some(65)),
                slot("6:00 PM", None),
                slot("6:30 PM", Some(65)),
                slot("7:00 PM", Some(70)),
                slot("7:30 PM", None),
                slot("8:00 PM", Some(70)),
            ],
        },
    ]
}

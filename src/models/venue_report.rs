use serde::Serialize;

/// Outcome of a venue availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VenueAvailability {
    /// No other event is scheduled at the venue.
    Available,
    /// The venue hosts other events, none of which overlaps the slot.
    Partial,
    /// At least one event overlaps the requested slot.
    Occupied,
    /// The store could not be queried; creation proceeds (fail-open).
    DegradedAvailable,
}

impl VenueAvailability {
    pub fn code(&self) -> &'static str {
        match self {
            VenueAvailability::Available => "available",
            VenueAvailability::Partial => "partial",
            VenueAvailability::Occupied => "occupied",
            VenueAvailability::DegradedAvailable => "degraded",
        }
    }

    /// The check is advisory: even an occupied slot only warns the
    /// organizer, it never blocks creation.
    pub fn allows_creation(&self) -> bool {
        true
    }

    pub fn is_free(&self) -> bool {
        !matches!(self, VenueAvailability::Occupied)
    }
}

// Fixed message templates, shown as-is to the organizer.
const MSG_AVAILABLE: &str =
    "✅ Aucun événement n'est prévu à cette adresse. Le créneau est libre.";
const MSG_PARTIAL: &str =
    "⚠️ D'autres événements sont prévus à cette adresse ce jour-là, mais aucun ne chevauche ce créneau.";
const MSG_OCCUPIED: &str =
    "⛔ Un événement occupe déjà ce créneau à cette adresse. Choisissez un autre horaire.";
const MSG_DEGRADED: &str =
    "❓ Vérification de disponibilité impossible pour le moment. Merci de vérifier manuellement avant de réserver.";

/// Report returned by the availability checker: a tri-state status
/// (plus the degraded mode), the counters behind it and the fixed
/// message for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueReport {
    pub status: VenueAvailability,
    /// Venue-matching events with a usable start.
    pub total_events: usize,
    /// Subset of `total_events` overlapping the candidate slot.
    pub conflicts: usize,
    pub message: &'static str,
}

impl VenueReport {
    pub fn available(total_events: usize) -> Self {
        Self {
            status: VenueAvailability::Available,
            total_events,
            conflicts: 0,
            message: MSG_AVAILABLE,
        }
    }

    pub fn partial(total_events: usize) -> Self {
        Self {
            status: VenueAvailability::Partial,
            total_events,
            conflicts: 0,
            message: MSG_PARTIAL,
        }
    }

    pub fn occupied(total_events: usize, conflicts: usize) -> Self {
        Self {
            status: VenueAvailability::Occupied,
            total_events,
            conflicts,
            message: MSG_OCCUPIED,
        }
    }

    /// Incomplete venue: no query was performed, nothing to report.
    pub fn skipped() -> Self {
        Self {
            status: VenueAvailability::Available,
            total_events: 0,
            conflicts: 0,
            message: "",
        }
    }

    /// Store failure: fail-open with an advisory message.
    pub fn degraded() -> Self {
        Self {
            status: VenueAvailability::DegradedAvailable,
            total_events: 0,
            conflicts: 0,
            message: MSG_DEGRADED,
        }
    }
}

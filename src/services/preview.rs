//! Draft preview: picked location, marker handles and attached photo
//!
//! The preview map owns its marker handles explicitly. Picking a location
//! replaces every handle with a single new one; clearing the draft drops
//! them all.

use std::sync::Arc;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{
    format_date, Coordinates, GeolocationErrorCode, GeolocationFix, LocalStats, LocationUpdate,
    MarkerHandle,
    PhotoAttachment, PreviewMapView, PreviewQuery, PreviewSummary, Urgency, FALLBACK_COORDINATES,
};
use crate::utils::validation::validate_coordinates;
use crate::utils::{AppError, AppResult};

/// Zoom of the empty preview map
pub const PREVIEW_DEFAULT_ZOOM: u8 = 14;

/// Zoom after a location is picked
pub const PREVIEW_PICKED_ZOOM: u8 = 16;

/// Addresses handed out by the simulated reverse geocoder
pub const SIMULATED_ADDRESSES: [&str; 4] = [
    "Rua das Flores, 123 - Centro",
    "Av. Paulista, 1000 - Bela Vista",
    "Rua Augusta, 500 - Consolação",
    "Alameda Santos, 100 - Jardins",
];

const DRAFT_BADGE_COLOR: &str = "#94a3b8";

/// Shared handle to the session's draft
pub type PreviewHandle = Arc<RwLock<PreviewState>>;

#[derive(Debug, Clone)]
pub struct PreviewState {
    markers: Vec<MarkerHandle>,
    next_marker_id: u64,
    picked: Option<Coordinates>,
    photo: Option<PhotoAttachment>,
    center: Coordinates,
    zoom: u8,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            markers: Vec::new(),
            next_marker_id: 1,
            picked: None,
            photo: None,
            center: FALLBACK_COORDINATES,
            zoom: PREVIEW_DEFAULT_ZOOM,
        }
    }
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> PreviewHandle {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Record a location clicked on the preview map
    pub fn set_location<R: Rng + ?Sized>(
        &mut self,
        lat: f64,
        lng: f64,
        rng: &mut R,
    ) -> AppResult<LocationUpdate> {
        let position = self.place_marker(lat, lng)?;
        Ok(LocationUpdate {
            picked_location: position,
            address: None,
            map: self.map_view(),
            local_stats: simulate_local_stats(rng),
            message: "Localização selecionada no mapa".to_string(),
        })
    }

    /// Apply the outcome of a device geolocation request
    ///
    /// An error outcome leaves the draft untouched.
    pub fn apply_geolocation<R: Rng + ?Sized>(
        &mut self,
        fix: GeolocationFix,
        rng: &mut R,
    ) -> AppResult<LocationUpdate> {
        match fix {
            GeolocationFix::Position { lat, lng } => {
                let position = self.place_marker(lat, lng)?;
                let address = SIMULATED_ADDRESSES
                    .choose(rng)
                    .copied()
                    .unwrap_or(SIMULATED_ADDRESSES[0]);
                info!(lat, lng, address, "Device location applied to draft");
                Ok(LocationUpdate {
                    picked_location: position,
                    address: Some(address.to_string()),
                    map: self.map_view(),
                    local_stats: simulate_local_stats(rng),
                    message: "Localização obtida com sucesso!".to_string(),
                })
            }
            GeolocationFix::Error { code, message } => {
                debug!(code = code.as_str(), ?message, "Geolocation failed");
                Err(AppError::Geolocation(geolocation_message(code).to_string()))
            }
        }
    }

    fn place_marker(&mut self, lat: f64, lng: f64) -> AppResult<Coordinates> {
        if !validate_coordinates(lat, lng) {
            return Err(AppError::validation(format!(
                "coordinates out of range: [{}, {}]",
                lat, lng
            )));
        }

        let position = Coordinates::new(lat, lng);
        self.markers.clear();
        self.markers.push(MarkerHandle {
            id: self.next_marker_id,
            position,
        });
        self.next_marker_id += 1;
        self.picked = Some(position);
        self.center = position;
        self.zoom = PREVIEW_PICKED_ZOOM;
        Ok(position)
    }

    /// Reset the draft: markers, picked location and photo
    pub fn clear(&mut self) {
        self.markers.clear();
        self.picked = None;
        self.photo = None;
        self.center = FALLBACK_COORDINATES;
        self.zoom = PREVIEW_DEFAULT_ZOOM;
    }

    pub fn picked_location(&self) -> Option<Coordinates> {
        self.picked
    }

    pub fn markers(&self) -> &[MarkerHandle] {
        &self.markers
    }

    pub fn photo(&self) -> Option<&PhotoAttachment> {
        self.photo.as_ref()
    }

    /// Attach a photo, replacing any previous one
    pub fn attach_photo(&mut self, photo: PhotoAttachment) {
        self.photo = Some(photo);
    }

    pub fn remove_photo(&mut self) -> Option<PhotoAttachment> {
        self.photo.take()
    }

    pub fn map_view(&self) -> PreviewMapView {
        PreviewMapView {
            center: self.center,
            zoom: self.zoom,
            markers: self.markers.clone(),
        }
    }

    /// Preview card mirroring the live form values
    pub fn summary(&self, query: &PreviewQuery, today: NaiveDate) -> PreviewSummary {
        let (badge_label, badge_color) = urgency_badge(query.urgency);
        let location_label = query
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or("Não selecionada");

        PreviewSummary {
            type_label: query
                .report_type
                .map(|t| t.label())
                .unwrap_or("Não definido")
                .to_string(),
            urgency_label: query
                .urgency
                .map(|u| u.label())
                .unwrap_or("Não definida")
                .to_string(),
            location_label: location_label.to_string(),
            badge_label: badge_label.to_string(),
            badge_color: badge_color.to_string(),
            date_label: format_date(today),
            picked_location: self.picked,
            map: self.map_view(),
            photo: self.photo.clone(),
        }
    }
}

/// Simulated figures for the area around a picked point: 5..=54 reports
/// and an average resolution time in [1.0, 6.0] days
pub fn simulate_local_stats<R: Rng + ?Sized>(rng: &mut R) -> LocalStats {
    let avg: f64 = rng.gen_range(1.0..6.0);
    LocalStats {
        local_reports: rng.gen_range(5..=54),
        avg_resolution_days: (avg * 10.0).round() / 10.0,
    }
}

/// Badge label and colour for the preview card
pub fn urgency_badge(urgency: Option<Urgency>) -> (&'static str, &'static str) {
    match urgency {
        Some(Urgency::Critical) => ("Crítica", "#ef4444"),
        Some(Urgency::High) => ("Alta", "#f59e0b"),
        Some(Urgency::Medium) => ("Média", "#3b82f6"),
        Some(Urgency::Low) => ("Baixa", DRAFT_BADGE_COLOR),
        None => ("Rascunho", DRAFT_BADGE_COLOR),
    }
}

fn geolocation_message(code: GeolocationErrorCode) -> &'static str {
    match code {
        GeolocationErrorCode::Unsupported => "Geolocalização não é suportada pelo seu navegador",
        GeolocationErrorCode::PermissionDenied => {
            "Não foi possível obter sua localização: permissão negada"
        }
        GeolocationErrorCode::PositionUnavailable | GeolocationErrorCode::Timeout => {
            "Não foi possível obter sua localização"
        }
    }
}

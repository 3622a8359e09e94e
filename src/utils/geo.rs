//! Coordinate parsing and validation for the nearby search.

use crate::errors::{AppError, AppResult};

pub fn parse_latitude(s: &str) -> AppResult<f64> {
    let v: f64 = s
        .parse()
        .map_err(|_| AppError::InvalidCoordinate(s.to_string()))?;
    if !(-90.0..=90.0).contains(&v) {
        return Err(AppError::InvalidCoordinate(format!(
            "latitude out of range: {}",
            s
        )));
    }
    Ok(v)
}

pub fn parse_longitude(s: &str) -> AppResult<f64> {
    let v: f64 = s
        .parse()
        .map_err(|_| AppError::InvalidCoordinate(s.to_string()))?;
    if !(-180.0..=180.0).contains(&v) {
        return Err(AppError::InvalidCoordinate(format!(
            "longitude out of range: {}",
            s
        )));
    }
    Ok(v)
}

pub fn format_km(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{:.1} km", km)
    }
}

use crate::cli::parser::Commands;
use crate::core::create::{CreateLogic, EventForm};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::sport::Sport;
use crate::utils::date;
use crate::utils::geo::{parse_latitude, parse_longitude};
use crate::utils::time::parse_optional_time;

/// Create or edit a meetup event.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        at,
        until,
        title,
        sport,
        address,
        city,
        postcode,
        lat,
        lon,
        max,
        reserved,
        no_reserved,
        organizer,
        description,
        edit_id,
        edit,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse sport code when provided
        //
        let sport_parsed = match sport {
            Some(code) => Some(Sport::from_code(code).ok_or_else(|| {
                AppError::InvalidSport(format!(
                    "Invalid sport code '{}'. Use one of: foot, basket, tennis, running, velo, natation",
                    code
                ))
            })?),
            None => None,
        };

        //
        // 3. Parse times (optional at the parser level)
        //
        let at_parsed = parse_optional_time(at.as_ref())?;
        let until_parsed = parse_optional_time(until.as_ref())?;

        //
        // 4. Parse coordinates when provided
        //
        let lat_parsed = lat.as_deref().map(parse_latitude).transpose()?;
        let lon_parsed = lon.as_deref().map(parse_longitude).transpose()?;

        //
        // 5. Open DB
        //
        let mut pool = DbPool::new(&cfg.database)?;

        let form = EventForm {
            time: at_parsed,
            until: until_parsed,
            title: title.clone(),
            sport: sport_parsed,
            address: address.clone(),
            city: city.clone(),
            postcode: postcode.clone(),
            latitude: lat_parsed,
            longitude: lon_parsed,
            max_participants: *max,
            reserved: *reserved,
            no_reserved: *no_reserved,
            organizer: organizer.clone(),
            description: description.clone(),
        };

        //
        // 6. Execute logic
        //
        CreateLogic::apply(&mut pool, cfg, d, form, *edit, *edit_id)?;
    }

    Ok(())
}

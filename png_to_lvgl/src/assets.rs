/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::collections::HashMap;

use crate::error::AssetError;

pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/mrdarrengriffin/google-weather-icons/main/v2";

/// A weather icon: the C symbol it is emitted as and the remote file it comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub name: &'static str,
    pub filename: &'static str,
}

impl Asset {
    pub const fn new(name: &'static str, filename: &'static str) -> Self {
        Self { name, filename }
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.filename)
    }
}

pub static ASSETS: &[Asset] = &[
    Asset::new("image_blizzard", "blizzard.png"),
    Asset::new("image_blowing_snow", "blowing_snow.png"),
    Asset::new("image_clear_night", "clear_night.png"),
    Asset::new("image_cloudy", "cloudy.png"),
    Asset::new("image_drizzle", "drizzle.png"),
    Asset::new("image_flurries", "flurries.png"),
    Asset::new("image_haze_fog_dust_smoke", "haze_fog_dust_smoke.png"),
    Asset::new("image_heavy_rain", "heavy_rain.png"),
    Asset::new("image_heavy_snow", "heavy_snow.png"),
    Asset::new(
        "image_isolated_scattered_tstorms_day",
        "isolated_scattered_tstorms_day.png",
    ),
    Asset::new(
        "image_isolated_scattered_tstorms_night",
        "isolated_scattered_tstorms_night.png",
    ),
    Asset::new("image_mostly_clear_night", "mostly_clear_night.png"),
    Asset::new("image_mostly_cloudy_day", "mostly_cloudy_day.png"),
    Asset::new("image_mostly_cloudy_night", "mostly_cloudy_night.png"),
    Asset::new("image_mostly_sunny", "mostly_sunny.png"),
    Asset::new("image_partly_cloudy", "partly_cloudy.png"),
    Asset::new("image_partly_cloudy_night", "partly_cloudy_night.png"),
    Asset::new("image_scattered_showers_day", "scattered_showers_day.png"),
    Asset::new("image_scattered_showers_night", "scattered_showers_night.png"),
    Asset::new("image_showers_rain", "showers_rain.png"),
    Asset::new("image_sleet_hail", "sleet_hail.png"),
    Asset::new("image_snow_showers_snow", "snow_showers_snow.png"),
    Asset::new("image_strong_tstorms", "strong_tstorms.png"),
    Asset::new("image_sunny", "sunny.png"),
    Asset::new("image_tornado", "tornado.png"),
    Asset::new("image_wintry_mix_rain_snow", "wintry_mix_rain_snow.png"),
];

lazy_static::lazy_static! {
    static ref BY_NAME: HashMap<&'static str, &'static Asset> =
        ASSETS.iter().map(|asset| (asset.name, asset)).collect();
}

pub fn find(name: &str) -> Option<&'static Asset> {
    BY_NAME.get(name).copied()
}

/// Resolves `--only` names in table order. No names selects every asset.
pub fn select(names: &[String]) -> Result<Vec<&'static Asset>, AssetError> {
    if names.is_empty() {
        return Ok(ASSETS.iter().collect());
    }

    for name in names {
        if find(name).is_none() {
            return Err(AssetError::Unknown(name.clone()));
        }
    }

    Ok(ASSETS
        .iter()
        .filter(|asset| names.iter().any(|name| name == asset.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_are_c_identifiers() {
        assert_eq!(ASSETS.len(), 26);
        for asset in ASSETS {
            assert!(lvgl_image::is_c_identifier(asset.name), "{}", asset.name);
            assert!(asset.filename.ends_with(".png"));
        }
    }

    #[test]
    fn names_are_unique() {
        assert_eq!(BY_NAME.len(), ASSETS.len());
    }

    #[test]
    fn url_joins_with_one_slash() {
        let asset = find("image_sunny").unwrap();
        assert_eq!(asset.url("https://host/v2"), "https://host/v2/sunny.png");
        assert_eq!(asset.url("https://host/v2/"), "https://host/v2/sunny.png");
    }

    #[test]
    fn select_keeps_table_order() {
        let names = vec!["image_tornado".to_string(), "image_blizzard".to_string()];
        let picked: Vec<_> = select(&names).unwrap().iter().map(|a| a.name).collect();
        assert_eq!(picked, ["image_blizzard", "image_tornado"]);
    }

    #[test]
    fn select_everything_by_default() {
        assert_eq!(select(&[]).unwrap().len(), ASSETS.len());
    }

    #[test]
    fn select_rejects_unknown() {
        let err = select(&["image_hurricane".to_string()]).unwrap_err();
        assert!(matches!(err, AssetError::Unknown(name) if name == "image_hurricane"));
    }
}

//! @ai:module:intent Static map chart of client stops and warehouses
//! @ai:module:layer infrastructure
//! @ai:module:public_api MapChart, MapView
//! @ai:module:stateless true

use crate::map::{ClientStop, Warehouse};
use anyhow::Result;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::ops::Range;
use std::path::Path;

const STOP_COLOR: RGBColor = RGBColor(128, 128, 128);
const STOP_RADIUS: i32 = 3;
const WAREHOUSE_RADIUS: i32 = 11;

/// @ai:intent Visible map region: a center, a web-mercator zoom level and an image size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center_lat: 41.958,
            center_lon: -87.7493,
            zoom: 9.0,
            width: 1200,
            height: 900,
        }
    }
}

impl MapView {
    /// @ai:intent Longitude and latitude ranges covered by the image
    /// @ai:post both ranges are centered on the view center
    /// @ai:effects pure
    pub fn extent(&self) -> (Range<f64>, Range<f64>) {
        // 256px tiles; latitude shrinks by cos(lat) near the center
        let degrees_per_pixel = 360.0 / (256.0 * 2f64.powf(self.zoom));
        let lon_half = self.width as f64 / 2.0 * degrees_per_pixel;
        let lat_half =
            self.height as f64 / 2.0 * degrees_per_pixel * self.center_lat.to_radians().cos();

        (
            (self.center_lon - lon_half)..(self.center_lon + lon_half),
            (self.center_lat - lat_half)..(self.center_lat + lat_half),
        )
    }

    /// @ai:intent Whether a point falls inside the visible region
    /// @ai:effects pure
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        let (lon, lat) = self.extent();
        lon.contains(&longitude) && lat.contains(&latitude)
    }
}

/// @ai:intent Trait for map chart generation
pub trait MapChartTrait: Send + Sync {
    /// @ai:intent Draw stops and warehouses into a PNG file
    fn render(
        &self,
        stops: &[ClientStop],
        warehouses: &BTreeMap<String, Warehouse>,
        output_path: &Path,
    ) -> Result<usize>;
}

/// @ai:intent Draws stops as small grey markers and warehouses as large black ones
pub struct MapChart {
    view: MapView,
}

impl MapChart {
    /// @ai:intent Create a map chart for a view
    /// @ai:effects pure
    pub fn new(view: MapView) -> Self {
        Self { view }
    }
}

impl Default for MapChart {
    fn default() -> Self {
        Self::new(MapView::default())
    }
}

impl MapChartTrait for MapChart {
    /// @ai:intent Render the map, returning the number of markers drawn
    /// @ai:effects fs:write
    fn render(
        &self,
        stops: &[ClientStop],
        warehouses: &BTreeMap<String, Warehouse>,
        output_path: &Path,
    ) -> Result<usize> {
        let view = self.view;
        let root =
            BitMapBackend::new(output_path, (view.width, view.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let (lon, lat) = view.extent();
        let mut chart = ChartBuilder::on(&root).build_cartesian_2d(lon, lat)?;

        let visible_stops: Vec<_> = stops
            .iter()
            .filter(|s| view.contains(s.latitude, s.longitude))
            .collect();

        chart.draw_series(visible_stops.iter().map(|s| {
            Circle::new((s.longitude, s.latitude), STOP_RADIUS, STOP_COLOR.filled())
        }))?;

        let visible_warehouses: Vec<_> = warehouses
            .iter()
            .filter(|(_, w)| view.contains(w.latitude, w.longitude))
            .collect();

        chart.draw_series(visible_warehouses.iter().map(|(_, w)| {
            Circle::new((w.longitude, w.latitude), WAREHOUSE_RADIUS, BLACK.filled())
        }))?;

        root.present()?;

        let skipped = stops.len() + warehouses.len() - visible_stops.len() - visible_warehouses.len();
        if skipped > 0 {
            tracing::warn!("{} markers fall outside the map view and were skipped", skipped);
        }

        Ok(visible_stops.len() + visible_warehouses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extent_is_centered() {
        let view = MapView::default();
        let (lon, lat) = view.extent();

        assert!(((lon.start + lon.end) / 2.0 - view.center_lon).abs() < 1e-9);
        assert!(((lat.start + lat.end) / 2.0 - view.center_lat).abs() < 1e-9);
        // 1200px at zoom 9 spans a little over three degrees of longitude
        assert!((lon.end - lon.start - 3.2959).abs() < 1e-3);
    }

    #[test]
    fn test_contains() {
        let view = MapView::default();
        assert!(view.contains(41.958, -87.7493));
        assert!(!view.contains(40.71, -74.0));
    }

    #[test]
    fn test_render_map() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("map.png");

        let stops = vec![
            ClientStop {
                idx: 0,
                latitude: 41.95,
                longitude: -87.70,
            },
            ClientStop {
                idx: 1,
                latitude: 41.90,
                longitude: -87.65,
            },
            ClientStop {
                idx: 2,
                latitude: 40.71,
                longitude: -74.00,
            },
        ];
        let mut warehouses = BTreeMap::new();
        warehouses.insert(
            "Lincoln Park".to_string(),
            Warehouse {
                latitude: 41.92,
                longitude: -87.65,
            },
        );

        let drawn = MapChart::default().render(&stops, &warehouses, &output).unwrap();

        assert_eq!(drawn, 3);
        assert!(output.exists());
    }
}

//! Organization locations of a topic search, coloured by people count.

use dioxus::prelude::*;

use common::{
    result_view::{MapMarker, MarkerBucket, map_markers},
    search_filters::PivotField,
    search_result::ResearchRecord,
};

const MAP_WIDTH: f64 = 960.0;
const MAP_HEIGHT: f64 = 480.0;
const MAP_PADDING: f64 = 24.0;

/// Equirectangular projection of the markers, fitted to their bounding box.
pub fn project_markers(markers: &[MapMarker], width: f64, height: f64) -> Vec<(f64, f64)> {
    let (mut min_lat, mut max_lat, mut min_lng, mut max_lng) = (f64::MAX, f64::MIN, f64::MAX, f64::MIN);
    for m in markers {
        min_lat = min_lat.min(m.coordinate.lat);
        max_lat = max_lat.max(m.coordinate.lat);
        min_lng = min_lng.min(m.coordinate.lng);
        max_lng = max_lng.max(m.coordinate.lng);
    }
    let lat_span = (max_lat - min_lat).max(1.0);
    let lng_span = (max_lng - min_lng).max(1.0);
    let inner_w = width - 2.0 * MAP_PADDING;
    let inner_h = height - 2.0 * MAP_PADDING;
    markers
        .iter()
        .map(|m| {
            let x = MAP_PADDING + (m.coordinate.lng - min_lng) / lng_span * inner_w;
            // latitude grows northwards, screen y grows downwards
            let y = MAP_PADDING + (max_lat - m.coordinate.lat) / lat_span * inner_h;
            (x, y)
        })
        .collect()
}

#[component]
pub fn MapView(record: ReadSignal<ResearchRecord>, on_pivot: Callback<(PivotField, String)>) -> Element {
    let markers = use_memo(move || map_markers(&record.read()));
    if markers.read().is_empty() {
        return rsx! { p { class: "research-empty", "No locations for this topic." } };
    }
    let placed = {
        let markers = markers.read();
        let points = project_markers(&markers, MAP_WIDTH, MAP_HEIGHT);
        markers.iter().cloned().zip(points).collect::<Vec<_>>()
    };

    rsx! {
        div {
            class: "research-map",
            svg {
                view_box: "0 0 {MAP_WIDTH} {MAP_HEIGHT}",
                width: "100%",
                rect { x: "0", y: "0", width: "{MAP_WIDTH}", height: "{MAP_HEIGHT}", fill: "#EEF2F7" }
                for (i, (marker, (x, y))) in placed.iter().cloned().enumerate() {
                    circle {
                        key: "{i}",
                        class: "research-map-marker",
                        cx: x,
                        cy: y,
                        r: "7",
                        fill: marker.bucket.color(),
                        onclick: {
                            let name = marker.coordinate.name.clone();
                            move |_| on_pivot((PivotField::Institution, name.clone()))
                        },
                    }
                }
            }
            MapLegend {}
            table {
                class: "research-table",
                thead {
                    tr { th { "Organization" } th { "No. of people" } th { "Location" } }
                }
                tbody {
                    for (i, (marker, _)) in placed.iter().cloned().enumerate() {
                        tr {
                            key: "{i}",
                            td {
                                span {
                                    class: "research-swatch",
                                    style: "background: {marker.bucket.color()};",
                                }
                                "{marker.coordinate.name}"
                            }
                            td { {marker.people.clone().unwrap_or_else(|| "-".to_string())} }
                            td { "{marker.coordinate.lat:.3}, {marker.coordinate.lng:.3}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MapLegend() -> Element {
    rsx! {
        div {
            class: "research-legend",
            span { "People:" }
            for bucket in MarkerBucket::ALL {
                span {
                    key: "{bucket.legend()}",
                    span { class: "research-swatch", style: "background: {bucket.color()};" }
                    "{bucket.legend()}"
                }
            }
        }
    }
}

//! SVG rendering of a result graph with clickable nodes.

use std::collections::HashMap;

use dioxus::prelude::*;

use common::search_result::{Graph, GraphNode};

const VIEW_WIDTH: f64 = 960.0;
const VIEW_HEIGHT: f64 = 640.0;
const FIRST_RING_CAPACITY: usize = 12;

/// Places the first node in the middle and the rest on concentric rings,
/// each ring holding `12 * k` nodes. Returns one position per node.
pub fn radial_layout(node_count: usize, width: f64, height: f64) -> Vec<(f64, f64)> {
    let center = (width / 2.0, height / 2.0);
    if node_count == 0 {
        return vec![];
    }
    let mut ring_sizes = vec![];
    let mut left = node_count - 1;
    while left > 0 {
        let capacity = FIRST_RING_CAPACITY * (ring_sizes.len() + 1);
        let size = left.min(capacity);
        ring_sizes.push(size);
        left -= size;
    }
    let max_radius = width.min(height) / 2.0 * 0.88;
    let mut positions = Vec::with_capacity(node_count);
    positions.push(center);
    for (ring, size) in ring_sizes.iter().enumerate() {
        let radius = max_radius * (ring + 1) as f64 / ring_sizes.len() as f64;
        // stagger rings so labels of neighbouring rings do not line up
        let offset = ring as f64 * 0.5;
        for i in 0..*size {
            let angle = std::f64::consts::TAU * (i as f64 + offset) / *size as f64;
            positions.push((center.0 + radius * angle.cos(), center.1 + radius * angle.sin()));
        }
    }
    positions
}

pub fn node_color(node_type: &str) -> &'static str {
    match node_type.to_ascii_uppercase().as_str() {
        "INSTITUTION" => "#4F46E5",
        "TOPIC" => "#16A34A",
        "AUTHOR" | "RESEARCHER" => "#EA580C",
        "SUBFIELD" => "#0891B2",
        _ => "#6B7280",
    }
}

#[component]
pub fn GraphView(graph: ReadSignal<Graph>, on_node_click: Callback<GraphNode>, #[props(default = VIEW_HEIGHT)] height: f64) -> Element {
    let layout = use_memo(move || {
        let graph = graph.read();
        let positions = radial_layout(graph.nodes.len(), VIEW_WIDTH, height);
        let index_of = graph.nodes.iter().enumerate().map(|(i, n)| (n.id.to_string(), i)).collect::<HashMap<_, _>>();
        let lines = graph
            .edges
            .iter()
            .filter_map(|e| {
                let a = index_of.get(&e.start.to_string())?;
                let b = index_of.get(&e.end.to_string())?;
                Some((positions[*a], positions[*b]))
            })
            .collect::<Vec<_>>();
        (positions, lines)
    });

    if graph.read().is_empty() {
        return rsx! { p { class: "research-empty", "The graph is empty." } };
    }
    let lines = layout.read().1.clone();
    let placed = graph
        .read()
        .nodes
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, node)| (i, layout.read().0.get(i).copied().unwrap_or_default(), node))
        .collect::<Vec<_>>();

    rsx! {
        svg {
            class: "research-graph",
            view_box: "0 0 {VIEW_WIDTH} {height}",
            width: "100%",
            for (i, ((x1, y1), (x2, y2))) in lines.into_iter().enumerate() {
                line { key: "e{i}", x1: x1, y1: y1, x2: x2, y2: y2, stroke: "#CBD5E1", stroke_width: "1" }
            }
            for (i, (x, y), node) in placed.into_iter() {
                g {
                    key: "n{i}",
                    class: "research-graph-node",
                    onclick: {
                        let node = node.clone();
                        move |_| on_node_click(node.clone())
                    },
                    circle {
                        cx: x,
                        cy: y,
                        r: if i == 0 { "14" } else { "9" },
                        fill: node_color(&node.node_type),
                    }
                    text {
                        x: x + 12.0,
                        y: y + 4.0,
                        font_size: "11",
                        fill: "#1F2937",
                        "{node.label}"
                    }
                }
            }
        }
    }
}

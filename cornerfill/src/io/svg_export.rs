use itertools::Itertools;
use panelpack::entities::{PanelLayout, PlacedItem};
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

/// Fill colors cycled over the distinct item sizes of a panel.
const SIZE_CLASS_COLORS: [&str; 15] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD", "#D4A5A5", "#9B59B6", "#3498DB",
    "#E67E22", "#2ECC71", "#F1C40F", "#E74C3C", "#1ABC9C", "#34495E", "#95A5A6",
];

/// Renders a finalized panel: outline, one rectangle per placed item colored
/// by size class, id labels and a utilization caption.
pub fn panel_to_svg(panel: &PanelLayout, title: &str) -> Document {
    let width = panel.width as f32;
    let height = panel.height as f32;
    let margin = f32::max(width, height) * 0.05;
    let stroke_width = f32::min(width, height) * 0.005;

    //size classes in first-seen order determine the color assignment
    let classes = panel.placed.iter().map(size_class).unique().collect_vec();

    let label = {
        let label_content = format!(
            "{}x{} | utilization: {:.1}% | {}",
            panel.width,
            panel.height,
            panel.utilization(),
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * margin)
            .set("font-size", f32::min(width, height) * 0.05)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let outline = Rectangle::new()
        .set("x", 0.0)
        .set("y", 0.0)
        .set("width", width)
        .set("height", height)
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 2.0 * stroke_width);

    let mut items_group = Group::new().set("id", "items");
    for pi in &panel.placed {
        let class_idx = classes.iter().position(|c| *c == size_class(pi)).unwrap();
        let color = SIZE_CLASS_COLORS[class_idx % SIZE_CLASS_COLORS.len()];

        //panel coordinates are y-up, svg is y-down
        let y_svg = height - (pi.y + pi.height) as f32;

        let rect = Rectangle::new()
            .set("x", pi.x as f32)
            .set("y", y_svg)
            .set("width", pi.width as f32)
            .set("height", pi.height as f32)
            .set("fill", color)
            .set("fill-opacity", "0.6")
            .set("stroke", "black")
            .set("stroke-width", stroke_width)
            .add(Title::new(format!("{} ({}x{})", pi.id, pi.width, pi.height)));

        let id_label = Text::new(pi.id.clone())
            .set("x", pi.x as f32 + pi.width as f32 / 2.0)
            .set("y", y_svg + pi.height as f32 / 2.0)
            .set("font-size", u64::min(pi.width, pi.height) as f32 * 0.3)
            .set("font-family", "monospace")
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle");

        items_group = items_group.add(rect).add(id_label);
    }

    let vbox_svg = (
        -margin,
        -1.5 * margin,
        width + 2.0 * margin,
        height + 3.0 * margin,
    );

    Document::new()
        .set("viewBox", vbox_svg)
        .add(outline)
        .add(items_group)
        .add(label)
}

/// Items of the same size share a color, regardless of rotation.
fn size_class(pi: &PlacedItem) -> (u64, u64) {
    (
        u64::min(pi.width, pi.height),
        u64::max(pi.width, pi.height),
    )
}
